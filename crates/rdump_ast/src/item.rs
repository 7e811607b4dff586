//! Modules and items.

use crate::expr::{Expr, MacroInvocation};
use crate::generics::Generics;
use crate::pattern::Pattern;
use crate::types::{Abi, Attribute, Lifetime, Path, TraitRef, TypeRef, Visibility};
use rdump_core::Symbol;

/// A module's item list.
#[derive(Debug, Clone, Copy)]
pub struct Module<'a> {
    /// Full path of the module, used to label anonymous block modules.
    pub path: &'a [Symbol],
    pub items: &'a [Item<'a>],
}

#[derive(Debug, Clone, Copy)]
pub struct Item<'a> {
    pub attrs: &'a [Attribute<'a>],
    pub vis: Visibility<'a>,
    pub name: Symbol,
    pub kind: ItemKind<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ItemKind<'a> {
    /// Removed by conditional compilation.
    None,
    MacroInv(MacroInvocation<'a>),
    Use(&'a [UseEntry<'a>]),
    /// `extern crate crate_name as <item name>;`
    ExternCrate {
        crate_name: Symbol,
    },
    ExternBlock {
        abi: Symbol,
        items: &'a [Item<'a>],
    },
    Module(Module<'a>),
    Type(TypeAlias<'a>),
    Struct {
        generics: Generics<'a>,
        data: StructData<'a>,
    },
    Enum {
        generics: Generics<'a>,
        variants: &'a [EnumVariant<'a>],
    },
    Trait(Trait<'a>),
    Static(Static<'a>),
    Function(Function<'a>),
    Impl(Impl<'a>),
}

impl<'a> ItemKind<'a> {
    /// Short name of the item kind, for diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::None => "None",
            ItemKind::MacroInv(_) => "MacroInv",
            ItemKind::Use(_) => "Use",
            ItemKind::ExternCrate { .. } => "Crate",
            ItemKind::ExternBlock { .. } => "ExternBlock",
            ItemKind::Module(_) => "Module",
            ItemKind::Type(_) => "Type",
            ItemKind::Struct { .. } => "Struct",
            ItemKind::Enum { .. } => "Enum",
            ItemKind::Trait(_) => "Trait",
            ItemKind::Static(_) => "Static",
            ItemKind::Function(_) => "Function",
            ItemKind::Impl(_) => "Impl",
        }
    }
}

/// One entry of a `use` item. A `None` name is a glob import.
#[derive(Debug, Clone, Copy)]
pub struct UseEntry<'a> {
    pub path: Path<'a>,
    pub name: Option<Symbol>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeAlias<'a> {
    pub generics: Generics<'a>,
    /// `Infer` on a trait's associated type means it has no default.
    pub ty: TypeRef<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum StructData<'a> {
    Unit,
    Tuple(&'a [TupleField<'a>]),
    Named(&'a [StructField<'a>]),
}

#[derive(Debug, Clone, Copy)]
pub struct TupleField<'a> {
    pub vis: Visibility<'a>,
    pub ty: TypeRef<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct StructField<'a> {
    pub vis: Visibility<'a>,
    pub name: Symbol,
    pub ty: TypeRef<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumVariant<'a> {
    pub attrs: &'a [Attribute<'a>],
    pub name: Symbol,
    pub data: VariantData<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum VariantData<'a> {
    /// Unit variant with an optional explicit discriminant.
    Value(Option<&'a Expr<'a>>),
    Tuple(&'a [TypeRef<'a>]),
    Struct(&'a [StructField<'a>]),
}

#[derive(Debug, Clone, Copy)]
pub struct Trait<'a> {
    pub generics: Generics<'a>,
    pub is_unsafe: bool,
    /// Lifetime supertraits, `trait T: 'a`.
    pub lifetimes: &'a [Lifetime],
    pub supertraits: &'a [TraitRef<'a>],
    pub items: &'a [Item<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticClass {
    Const,
    Static,
    Mut,
}

impl StaticClass {
    pub fn keyword(self) -> &'static str {
        match self {
            StaticClass::Const => "const ",
            StaticClass::Static => "static ",
            StaticClass::Mut => "static mut ",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Static<'a> {
    pub class: StaticClass,
    pub ty: TypeRef<'a>,
    /// Absent in extern blocks and on trait associated consts.
    pub value: Option<&'a Expr<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionArg<'a> {
    pub attrs: &'a [Attribute<'a>],
    pub pattern: Pattern<'a>,
    pub ty: TypeRef<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct Function<'a> {
    pub is_const: bool,
    pub is_async: bool,
    pub is_unsafe: bool,
    pub abi: Abi,
    pub generics: Generics<'a>,
    pub args: &'a [FunctionArg<'a>],
    pub ret: TypeRef<'a>,
    /// `None` for declarations without a body.
    pub body: Option<&'a Expr<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Impl<'a> {
    pub generics: Generics<'a>,
    pub is_unsafe: bool,
    /// `None` for an inherent impl.
    pub trait_ref: Option<TraitRef<'a>>,
    pub self_ty: TypeRef<'a>,
    pub items: &'a [Item<'a>],
}
