//! Types, paths and the other leaf data the printer treats as opaque text.
//!
//! Nothing in here is interpreted by the printer beyond turning it back into
//! source text; it exists so trees can be built without an upstream compiler.

use rdump_core::Symbol;

/// Built-in scalar types. Also used to tag the type of integer and float
/// literals, where `Any` means "not yet inferred" and `Invalid` marks a
/// literal whose type could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreType {
    Invalid,
    Any,
    Bool,
    Char,
    Str,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    F32,
    F64,
}

impl CoreType {
    /// Source spelling of the type. `Any` and `Invalid` have none and print
    /// as the inference placeholder.
    pub fn name(self) -> &'static str {
        match self {
            CoreType::Invalid | CoreType::Any => "_",
            CoreType::Bool => "bool",
            CoreType::Char => "char",
            CoreType::Str => "str",
            CoreType::U8 => "u8",
            CoreType::U16 => "u16",
            CoreType::U32 => "u32",
            CoreType::U64 => "u64",
            CoreType::U128 => "u128",
            CoreType::Usize => "usize",
            CoreType::I8 => "i8",
            CoreType::I16 => "i16",
            CoreType::I32 => "i32",
            CoreType::I64 => "i64",
            CoreType::I128 => "i128",
            CoreType::Isize => "isize",
            CoreType::F32 => "f32",
            CoreType::F64 => "f64",
        }
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            CoreType::I8 | CoreType::I16 | CoreType::I32 | CoreType::I64 | CoreType::I128 | CoreType::Isize
        )
    }
}

/// A lifetime or loop label, stored without the leading quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime(pub Symbol);

/// `for<'a, 'b>` binder. Empty when the bound is not higher-ranked.
#[derive(Debug, Clone, Copy, Default)]
pub struct HigherRankedBounds<'a> {
    pub lifetimes: &'a [Lifetime],
}

impl<'a> HigherRankedBounds<'a> {
    pub fn is_empty(&self) -> bool {
        self.lifetimes.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PathSegment<'a> {
    pub name: Symbol,
    /// Generic arguments, printed with turbofish syntax so the same text is
    /// valid in both type and value position.
    pub args: &'a [TypeRef<'a>],
}

#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    /// Path starts with `::`.
    pub absolute: bool,
    pub segments: &'a [PathSegment<'a>],
}

impl<'a> Path<'a> {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last_name(&self) -> Option<Symbol> {
        self.segments.last().map(|seg| seg.name)
    }
}

/// A trait reference with an optional higher-rank binder: `for<'a> Fn(&'a u8)`.
#[derive(Debug, Clone, Copy)]
pub struct TraitRef<'a> {
    pub hrbs: HigherRankedBounds<'a>,
    pub path: Path<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum TypeRef<'a> {
    /// `_`
    Infer,
    /// `()`
    Unit,
    /// `!`
    Never,
    Primitive(CoreType),
    Path(Path<'a>),
    Tuple(&'a [TypeRef<'a>]),
    Borrow {
        lifetime: Option<Lifetime>,
        mutable: bool,
        inner: &'a TypeRef<'a>,
    },
    Pointer {
        mutable: bool,
        inner: &'a TypeRef<'a>,
    },
    Slice(&'a TypeRef<'a>),
    Array {
        inner: &'a TypeRef<'a>,
        len: u64,
    },
    Function {
        hrbs: HigherRankedBounds<'a>,
        is_unsafe: bool,
        abi: Abi,
        args: &'a [TypeRef<'a>],
        ret: &'a TypeRef<'a>,
    },
    TraitObject {
        traits: &'a [TraitRef<'a>],
        lifetime: Option<Lifetime>,
    },
    ImplTrait(&'a [TraitRef<'a>]),
}

impl<'a> TypeRef<'a> {
    pub fn is_unit(&self) -> bool {
        matches!(self, TypeRef::Unit)
    }

    pub fn is_infer(&self) -> bool {
        matches!(self, TypeRef::Infer)
    }
}

/// Calling convention of a function or extern block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Abi {
    #[default]
    Rust,
    Named(Symbol),
}

#[derive(Debug, Clone, Copy, Default)]
pub enum Visibility<'a> {
    /// Private; prints nothing.
    #[default]
    Inherited,
    Public,
    Crate,
    Super,
    SelfModule,
    Restricted(Path<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub fn open(self) -> &'static str {
        match self {
            Delimiter::Paren => "(",
            Delimiter::Bracket => "[",
            Delimiter::Brace => "{",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Delimiter::Paren => ")",
            Delimiter::Bracket => "]",
            Delimiter::Brace => "}",
        }
    }
}

/// Already-tokenized source fragment, kept verbatim.
#[derive(Debug, Clone, Copy)]
pub enum TokenTree<'a> {
    /// Exact text of one token (`foo`, `::`, `"str"`, `'a`).
    Token(Symbol),
    Delimited {
        delim: Delimiter,
        trees: &'a [TokenTree<'a>],
    },
}

/// `#[path tokens]`, e.g. `#[inline]`, `#[derive(Clone)]`, `#[doc = "x"]`.
#[derive(Debug, Clone, Copy)]
pub struct Attribute<'a> {
    pub path: Path<'a>,
    pub tokens: &'a [TokenTree<'a>],
}
