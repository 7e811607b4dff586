//! Expression nodes.
//!
//! Every node owns its children exclusively. Children that error recovery
//! may leave behind as holes are `Option`s; the printer renders a marker
//! for them instead of failing.

use crate::item::Module;
use crate::pattern::Pattern;
use crate::types::{Attribute, CoreType, Lifetime, Path, PathSegment, TokenTree, TypeRef};
use rdump_core::Symbol;

#[derive(Debug, Clone, Copy)]
pub struct Expr<'a> {
    pub attrs: &'a [Attribute<'a>],
    pub kind: ExprKind<'a>,
}

impl<'a> Expr<'a> {
    pub fn new(kind: ExprKind<'a>) -> Self {
        Self { attrs: &[], kind }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ExprKind<'a> {
    Block(Block<'a>),
    /// `try { .. }`
    Try(&'a Expr<'a>),
    Macro(MacroInvocation<'a>),
    Asm(LegacyAsm<'a>),
    InlineAsm(InlineAsm<'a>),
    Flow(Flow<'a>),
    Let(LetBinding<'a>),
    Assign {
        op: AssignOp,
        slot: &'a Expr<'a>,
        value: &'a Expr<'a>,
    },
    CallPath {
        path: Path<'a>,
        args: &'a [Expr<'a>],
    },
    CallMethod {
        receiver: &'a Expr<'a>,
        method: PathSegment<'a>,
        args: &'a [Expr<'a>],
    },
    /// Call of an arbitrary value, `(callee)(args)`.
    CallObject {
        callee: &'a Expr<'a>,
        args: &'a [Expr<'a>],
    },
    Loop(Loop<'a>),
    WhileLet(WhileLet<'a>),
    Match {
        value: &'a Expr<'a>,
        arms: &'a [MatchArm<'a>],
    },
    If {
        cond: &'a Expr<'a>,
        then_branch: &'a Expr<'a>,
        else_branch: Option<&'a Expr<'a>>,
    },
    IfLet {
        conditions: &'a [IfLetCondition<'a>],
        then_branch: &'a Expr<'a>,
        else_branch: Option<&'a Expr<'a>>,
    },
    Closure(Closure<'a>),
    /// `_` on the left of a destructuring assignment.
    Underscore,
    /// Raw literal bits; signed types store the two's-complement value.
    Integer {
        value: u128,
        ty: CoreType,
    },
    Float {
        value: f64,
        ty: CoreType,
    },
    Bool(bool),
    String(Symbol),
    ByteString(&'a [u8]),
    StructLiteral {
        path: Path<'a>,
        fields: &'a [FieldInit<'a>],
        base: Option<&'a Expr<'a>>,
    },
    /// Struct literal on the left of a destructuring assignment, `S { a, .. }`.
    StructLiteralPattern {
        path: Path<'a>,
        fields: &'a [FieldInit<'a>],
    },
    Array(ArrayExpr<'a>),
    Tuple(&'a [Expr<'a>]),
    NamedValue(Path<'a>),
    Field {
        object: &'a Expr<'a>,
        name: Symbol,
    },
    Index {
        object: &'a Expr<'a>,
        index: &'a Expr<'a>,
    },
    Deref(&'a Expr<'a>),
    Cast {
        value: &'a Expr<'a>,
        ty: TypeRef<'a>,
    },
    TypeAnnotation {
        value: &'a Expr<'a>,
        ty: TypeRef<'a>,
    },
    BinOp {
        op: BinOpKind,
        left: Option<&'a Expr<'a>>,
        right: Option<&'a Expr<'a>>,
    },
    UniOp {
        op: UniOpKind,
        value: &'a Expr<'a>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Bare,
    Unsafe,
    Const,
}

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Statements in order; `None` marks a statement lost to error recovery.
    pub nodes: &'a [Option<Expr<'a>>],
    /// The last statement is the block's value and is left unterminated.
    pub yields_final_value: bool,
    /// Anonymous module holding items declared inside the block.
    pub local_mod: Option<&'a Module<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct MacroInvocation<'a> {
    pub path: Path<'a>,
    /// `macro_rules! name { .. }` style identifier after the bang.
    pub ident: Option<Symbol>,
    pub is_braced: bool,
    /// Contents between the delimiters.
    pub tokens: &'a [TokenTree<'a>],
}

/// `asm!("tmpl" : outputs : inputs : clobbers : flags)`
#[derive(Debug, Clone, Copy)]
pub struct LegacyAsm<'a> {
    pub template: Symbol,
    pub outputs: &'a [AsmOperand<'a>],
    pub inputs: &'a [AsmOperand<'a>],
    pub clobbers: &'a [Symbol],
    pub flags: &'a [Symbol],
}

#[derive(Debug, Clone, Copy)]
pub struct AsmOperand<'a> {
    pub constraint: Symbol,
    pub value: Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct InlineAsm<'a> {
    pub lines: &'a [AsmLine<'a>],
    pub params: &'a [AsmParam<'a>],
    pub options: AsmOptions,
}

/// One template string: literal text interleaved with operand placeholders.
#[derive(Debug, Clone, Copy)]
pub struct AsmLine<'a> {
    pub frags: &'a [AsmLineFrag],
    pub trailing: Symbol,
}

/// Literal text followed by the placeholder `{index}` or `{index:modifier}`.
#[derive(Debug, Clone, Copy)]
pub struct AsmLineFrag {
    pub before: Symbol,
    pub index: u32,
    pub modifier: Option<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsmDirection {
    In,
    Out,
    LateOut,
    InOut,
    InLateOut,
}

impl AsmDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AsmDirection::In => "in",
            AsmDirection::Out => "out",
            AsmDirection::LateOut => "lateout",
            AsmDirection::InOut => "inout",
            AsmDirection::InLateOut => "inlateout",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AsmRegSpec {
    /// Register class such as `reg`.
    Class(Symbol),
    /// Explicit register such as `"eax"`.
    Explicit(Symbol),
}

#[derive(Debug, Clone, Copy)]
pub enum AsmParam<'a> {
    Const(Expr<'a>),
    Sym(Path<'a>),
    RegSingle {
        dir: AsmDirection,
        spec: AsmRegSpec,
        value: Expr<'a>,
    },
    Reg {
        dir: AsmDirection,
        spec: AsmRegSpec,
        val_in: Option<&'a Expr<'a>>,
        val_out: Option<&'a Expr<'a>>,
    },
}

bitflags::bitflags! {
    /// `options(..)` of an `asm!` invocation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AsmOptions: u16 {
        const PURE            = 1 << 0;
        const NOMEM           = 1 << 1;
        const READONLY        = 1 << 2;
        const PRESERVES_FLAGS = 1 << 3;
        const NORETURN        = 1 << 4;
        const NOSTACK         = 1 << 5;
        const ATT_SYNTAX      = 1 << 6;
        const RAW             = 1 << 7;
        const MAY_UNWIND      = 1 << 8;
    }
}

impl AsmOptions {
    /// Option names in the order they are printed.
    pub const NAMES: [(AsmOptions, &'static str); 9] = [
        (AsmOptions::PURE, "pure"),
        (AsmOptions::NOMEM, "nomem"),
        (AsmOptions::READONLY, "readonly"),
        (AsmOptions::PRESERVES_FLAGS, "preserves_flags"),
        (AsmOptions::NORETURN, "noreturn"),
        (AsmOptions::NOSTACK, "nostack"),
        (AsmOptions::ATT_SYNTAX, "att_syntax"),
        (AsmOptions::RAW, "raw"),
        (AsmOptions::MAY_UNWIND, "may_unwind"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Return,
    Yield,
    Break,
    Continue,
    /// `do yeet`
    Yeet,
}

impl FlowKind {
    pub fn keyword(self) -> &'static str {
        match self {
            FlowKind::Return => "return",
            FlowKind::Yield => "yield",
            FlowKind::Break => "break",
            FlowKind::Continue => "continue",
            FlowKind::Yeet => "do yeet",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Flow<'a> {
    pub kind: FlowKind,
    pub label: Option<Lifetime>,
    pub value: Option<&'a Expr<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct LetBinding<'a> {
    pub pattern: Pattern<'a>,
    pub ty: TypeRef<'a>,
    pub value: Option<&'a Expr<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    None,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shr,
    Shl,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::None => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::Shr => ">>=",
            AssignOp::Shl => "<<=",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LoopKind<'a> {
    /// `loop`
    Infinite,
    While(&'a Expr<'a>),
    For {
        pattern: Pattern<'a>,
        iter: &'a Expr<'a>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Loop<'a> {
    pub label: Option<Lifetime>,
    pub kind: LoopKind<'a>,
    pub body: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct WhileLet<'a> {
    pub label: Option<Lifetime>,
    pub conditions: &'a [IfLetCondition<'a>],
    pub body: &'a Expr<'a>,
}

/// One link of a condition chain: `let pat = value` or a plain boolean.
#[derive(Debug, Clone, Copy)]
pub struct IfLetCondition<'a> {
    pub pattern: Option<Pattern<'a>>,
    pub value: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchArm<'a> {
    pub patterns: &'a [Pattern<'a>],
    pub guard: &'a [IfLetCondition<'a>],
    pub body: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClosureArg<'a> {
    pub pattern: Pattern<'a>,
    pub ty: TypeRef<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct Closure<'a> {
    pub is_move: bool,
    pub args: &'a [ClosureArg<'a>],
    pub ret: TypeRef<'a>,
    pub body: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldInit<'a> {
    pub name: Symbol,
    pub value: Expr<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ArrayExpr<'a> {
    List(&'a [Expr<'a>]),
    Repeat {
        value: &'a Expr<'a>,
        count: &'a Expr<'a>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Range,
    RangeInclusive,
}

impl BinOpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOpKind::Eq => "==",
            BinOpKind::Ne => "!=",
            BinOpKind::Lt => "<",
            BinOpKind::Le => "<=",
            BinOpKind::Gt => ">",
            BinOpKind::Ge => ">=",
            BinOpKind::And => "&&",
            BinOpKind::Or => "||",
            BinOpKind::BitAnd => "&",
            BinOpKind::BitOr => "|",
            BinOpKind::BitXor => "^",
            BinOpKind::Shl => "<<",
            BinOpKind::Shr => ">>",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Rem => "%",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Range => "..",
            BinOpKind::RangeInclusive => "..=",
        }
    }

    pub fn is_range(self) -> bool {
        matches!(self, BinOpKind::Range | BinOpKind::RangeInclusive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniOpKind {
    Negate,
    Invert,
    Box,
    Ref,
    RefMut,
    RawBorrow,
    RawBorrowMut,
    /// Postfix `?`
    QuestionMark,
    /// Postfix `.await`
    Await,
}

impl UniOpKind {
    pub fn is_postfix(self) -> bool {
        matches!(self, UniOpKind::QuestionMark | UniOpKind::Await)
    }

    /// Text printed before the operand (empty for postfix operators).
    pub fn prefix(self) -> &'static str {
        match self {
            UniOpKind::Negate => "-",
            UniOpKind::Invert => "!",
            UniOpKind::Box => "box ",
            UniOpKind::Ref => "&",
            UniOpKind::RefMut => "&mut ",
            UniOpKind::RawBorrow => "&raw const ",
            UniOpKind::RawBorrowMut => "&raw mut ",
            UniOpKind::QuestionMark | UniOpKind::Await => "",
        }
    }

    /// Text printed after the operand (empty for prefix operators).
    pub fn suffix(self) -> &'static str {
        match self {
            UniOpKind::QuestionMark => "?",
            UniOpKind::Await => ".await",
            _ => "",
        }
    }
}
