//! Pattern nodes.

use crate::expr::MacroInvocation;
use crate::types::{CoreType, Path};
use rdump_core::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    Move,
    Ref,
    RefMut,
}

/// A name bound by a pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternBinding {
    pub name: Symbol,
    pub mutable: bool,
    pub mode: BindingMode,
    /// Storage slot assigned by upstream passes. Only ever printed as a
    /// debug annotation.
    pub slot: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Pattern<'a> {
    pub bindings: &'a [PatternBinding],
    pub kind: PatternKind<'a>,
}

impl<'a> Pattern<'a> {
    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, PatternKind::Any)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PatternKind<'a> {
    /// `_`
    Any,
    /// A bare identifier not yet resolved to a binding or a constant.
    MaybeBind(Symbol),
    Macro(&'a MacroInvocation<'a>),
    Box(&'a Pattern<'a>),
    Ref {
        mutable: bool,
        sub: &'a Pattern<'a>,
    },
    /// A single value, or an inclusive range when `end` is present.
    Value {
        start: PatternValue<'a>,
        end: Option<PatternValue<'a>>,
    },
    /// Half-open range `start..end`.
    ValueLeftInc {
        start: PatternValue<'a>,
        end: PatternValue<'a>,
    },
    Tuple(TuplePattern<'a>),
    StructTuple {
        path: Path<'a>,
        tuple: TuplePattern<'a>,
    },
    Struct {
        path: Path<'a>,
        fields: &'a [FieldPattern<'a>],
        is_exhaustive: bool,
    },
    Slice(&'a [Pattern<'a>]),
    SplitSlice {
        leading: &'a [Pattern<'a>],
        /// Binding capturing the variable-length middle.
        extra_bind: Option<PatternBinding>,
        trailing: &'a [Pattern<'a>],
    },
    Or(&'a [Pattern<'a>]),
}

/// Tuple-like sub-patterns, split around an optional `..`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TuplePattern<'a> {
    pub start: &'a [Pattern<'a>],
    pub has_wildcard: bool,
    pub end: &'a [Pattern<'a>],
}

#[derive(Debug, Clone, Copy)]
pub struct FieldPattern<'a> {
    pub name: Symbol,
    pub pattern: Pattern<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum PatternValue<'a> {
    Integer { value: u128, ty: CoreType },
    Float { value: f64, ty: CoreType },
    String(Symbol),
    ByteString(&'a [u8]),
    Named(Path<'a>),
}
