//! Generic parameter lists and where-clause bounds.

use crate::types::{Attribute, HigherRankedBounds, Lifetime, Path, TypeRef};
use rdump_core::Symbol;

#[derive(Debug, Clone, Copy)]
pub enum GenericParam<'a> {
    /// Placeholder left behind when a parameter was removed upstream.
    None,
    Lifetime {
        attrs: &'a [Attribute<'a>],
        name: Lifetime,
    },
    Type {
        attrs: &'a [Attribute<'a>],
        name: Symbol,
        default: Option<TypeRef<'a>>,
    },
    Value {
        attrs: &'a [Attribute<'a>],
        name: Symbol,
        ty: TypeRef<'a>,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum GenericBound<'a> {
    /// Placeholder left behind when a bound was removed upstream.
    None,
    /// `'test: 'bound`
    Lifetime { test: Lifetime, bound: Lifetime },
    /// `Type: 'bound`
    TypeLifetime { ty: TypeRef<'a>, bound: Lifetime },
    /// `for<..> Type: for<..> Trait`
    IsTrait {
        outer_hrbs: HigherRankedBounds<'a>,
        ty: TypeRef<'a>,
        inner_hrbs: HigherRankedBounds<'a>,
        trait_path: Path<'a>,
    },
    /// `Type: ?Trait`
    MaybeTrait { ty: TypeRef<'a>, trait_path: Path<'a> },
    /// `Type: !Trait`
    NotTrait { ty: TypeRef<'a>, trait_path: Path<'a> },
    /// `Type: =Replacement`
    Equality {
        ty: TypeRef<'a>,
        replacement: TypeRef<'a>,
    },
}

impl<'a> GenericBound<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, GenericBound::None)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Generics<'a> {
    pub params: &'a [GenericParam<'a>],
    pub bounds: &'a [GenericBound<'a>],
}

impl<'a> Generics<'a> {
    /// True if the where block would print anything.
    pub fn has_bounds(&self) -> bool {
        self.bounds.iter().any(|b| !b.is_none())
    }
}
