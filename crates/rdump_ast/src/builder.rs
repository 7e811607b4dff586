//! Arena-backed construction helpers.
//!
//! Trees normally come from an upstream front end. The builder covers the
//! cases where one has to be assembled by hand: tests, benches and
//! synthesized code.

use crate::expr::{BinOpKind, Block, BlockKind, Expr, ExprKind, LetBinding, UniOpKind};
use crate::item::{Item, ItemKind, Module};
use crate::pattern::{BindingMode, Pattern, PatternBinding, PatternKind};
use crate::types::{CoreType, Path, PathSegment, TypeRef, Visibility};
use rdump_core::{AstArena, StringInterner, Symbol};

pub struct AstBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
}

impl<'a> AstBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self { arena, interner }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn sym(&self, s: &str) -> Symbol {
        self.interner.intern(s)
    }

    pub fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    pub fn slice<T, I>(&self, items: I) -> &'a [T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.arena.alloc_slice(items)
    }

    pub fn bytes(&self, bytes: &[u8]) -> &'a [u8] {
        self.arena.alloc_bytes(bytes)
    }

    // ========================================================================
    // Paths and types
    // ========================================================================

    /// Parse `a::b::c`; a leading `::` makes the path absolute.
    pub fn path(&self, text: &str) -> Path<'a> {
        let (absolute, rest) = match text.strip_prefix("::") {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let names: Vec<Symbol> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split("::").map(|s| self.sym(s)).collect()
        };
        let segments = self.slice(names.into_iter().map(|name| PathSegment { name, args: &[] }));
        Path { absolute, segments }
    }

    /// Path whose last segment carries generic arguments.
    pub fn path_with_args<I>(&self, text: &str, args: I) -> Path<'a>
    where
        I: IntoIterator<Item = TypeRef<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        let base = self.path(text);
        let args = self.slice(args);
        let count = base.segments.len();
        let segments = self.slice(base.segments.iter().enumerate().map(|(i, seg)| {
            if i + 1 == count {
                PathSegment { name: seg.name, args }
            } else {
                *seg
            }
        }));
        Path { absolute: base.absolute, segments }
    }

    pub fn ty_path(&self, text: &str) -> TypeRef<'a> {
        TypeRef::Path(self.path(text))
    }

    pub fn ty_prim(&self, ty: CoreType) -> TypeRef<'a> {
        TypeRef::Primitive(ty)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn expr(&self, kind: ExprKind<'a>) -> Expr<'a> {
        Expr::new(kind)
    }

    pub fn boxed(&self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.alloc(expr)
    }

    pub fn named(&self, text: &str) -> Expr<'a> {
        self.expr(ExprKind::NamedValue(self.path(text)))
    }

    pub fn int(&self, value: u128, ty: CoreType) -> Expr<'a> {
        self.expr(ExprKind::Integer { value, ty })
    }

    /// Signed literal, stored as its two's-complement bits.
    pub fn int_signed(&self, value: i128, ty: CoreType) -> Expr<'a> {
        self.expr(ExprKind::Integer { value: value as u128, ty })
    }

    pub fn float(&self, value: f64, ty: CoreType) -> Expr<'a> {
        self.expr(ExprKind::Float { value, ty })
    }

    pub fn string(&self, text: &str) -> Expr<'a> {
        self.expr(ExprKind::String(self.sym(text)))
    }

    pub fn binop(&self, op: BinOpKind, left: Expr<'a>, right: Expr<'a>) -> Expr<'a> {
        self.expr(ExprKind::BinOp {
            op,
            left: Some(self.boxed(left)),
            right: Some(self.boxed(right)),
        })
    }

    pub fn unary(&self, op: UniOpKind, value: Expr<'a>) -> Expr<'a> {
        self.expr(ExprKind::UniOp { op, value: self.boxed(value) })
    }

    pub fn cast(&self, value: Expr<'a>, ty: TypeRef<'a>) -> Expr<'a> {
        self.expr(ExprKind::Cast { value: self.boxed(value), ty })
    }

    pub fn field(&self, object: Expr<'a>, name: &str) -> Expr<'a> {
        self.expr(ExprKind::Field { object: self.boxed(object), name: self.sym(name) })
    }

    pub fn call<I>(&self, path: &str, args: I) -> Expr<'a>
    where
        I: IntoIterator<Item = Expr<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.expr(ExprKind::CallPath { path: self.path(path), args: self.slice(args) })
    }

    pub fn method_call<I>(&self, receiver: Expr<'a>, method: &str, args: I) -> Expr<'a>
    where
        I: IntoIterator<Item = Expr<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.expr(ExprKind::CallMethod {
            receiver: self.boxed(receiver),
            method: PathSegment { name: self.sym(method), args: &[] },
            args: self.slice(args),
        })
    }

    /// Plain `{ .. }` block; absent statements are not representable here.
    pub fn block<I>(&self, stmts: I, yields_final_value: bool) -> Expr<'a>
    where
        I: IntoIterator<Item = Expr<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.expr(ExprKind::Block(Block {
            kind: BlockKind::Bare,
            nodes: self.slice(stmts.into_iter().map(Some)),
            yields_final_value,
            local_mod: None,
        }))
    }

    pub fn let_stmt(&self, pattern: Pattern<'a>, ty: TypeRef<'a>, value: Option<Expr<'a>>) -> Expr<'a> {
        self.expr(ExprKind::Let(LetBinding {
            pattern,
            ty,
            value: value.map(|v| self.boxed(v)),
        }))
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    pub fn binding(&self, name: &str, slot: u32) -> PatternBinding {
        PatternBinding { name: self.sym(name), mutable: false, mode: BindingMode::Move, slot }
    }

    pub fn wildcard(&self) -> Pattern<'a> {
        Pattern { bindings: &[], kind: PatternKind::Any }
    }

    pub fn pattern(&self, kind: PatternKind<'a>) -> Pattern<'a> {
        Pattern { bindings: &[], kind }
    }

    /// `name` bound over a wildcard.
    pub fn bind_pat(&self, name: &str, slot: u32) -> Pattern<'a> {
        self.bind(self.binding(name, slot), self.wildcard())
    }

    /// Attach `binding` to an existing pattern, `binding @ pattern`.
    pub fn bind(&self, binding: PatternBinding, pattern: Pattern<'a>) -> Pattern<'a> {
        Pattern { bindings: self.slice([binding]), kind: pattern.kind }
    }

    // ========================================================================
    // Items
    // ========================================================================

    pub fn item(&self, name: &str, kind: ItemKind<'a>) -> Item<'a> {
        Item { attrs: &[], vis: Visibility::Inherited, name: self.sym(name), kind }
    }

    pub fn module<I>(&self, path: &[&str], items: I) -> Module<'a>
    where
        I: IntoIterator<Item = Item<'a>>,
        I::IntoIter: ExactSizeIterator,
    {
        Module {
            path: self.slice(path.iter().map(|s| self.sym(s))),
            items: self.slice(items),
        }
    }
}
