//! Expression precedence, used to decide where parentheses are required.

use rdump_ast::{BinOpKind, Expr, ExprKind};

/// Binding strength of an expression, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExprPrecedence {
    /// `return`, `break`, closures, `let`.
    Jump = 0,
    Assign = 1,
    Range = 2,
    LogicalOr = 3,
    LogicalAnd = 4,
    Compare = 5,
    BitOr = 6,
    BitXor = 7,
    BitAnd = 8,
    Shift = 9,
    Additive = 10,
    Multiplicative = 11,
    Cast = 12,
    Prefix = 13,
    /// Postfix operators, calls and atoms.
    Postfix = 14,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    None,
}

impl ExprPrecedence {
    pub fn associativity(self) -> Associativity {
        match self {
            ExprPrecedence::Assign => Associativity::Right,
            ExprPrecedence::Range | ExprPrecedence::Compare => Associativity::None,
            _ => Associativity::Left,
        }
    }
}

pub fn binary_operator_precedence(op: BinOpKind) -> ExprPrecedence {
    match op {
        BinOpKind::Range | BinOpKind::RangeInclusive => ExprPrecedence::Range,
        BinOpKind::Or => ExprPrecedence::LogicalOr,
        BinOpKind::And => ExprPrecedence::LogicalAnd,
        BinOpKind::Eq
        | BinOpKind::Ne
        | BinOpKind::Lt
        | BinOpKind::Le
        | BinOpKind::Gt
        | BinOpKind::Ge => ExprPrecedence::Compare,
        BinOpKind::BitOr => ExprPrecedence::BitOr,
        BinOpKind::BitXor => ExprPrecedence::BitXor,
        BinOpKind::BitAnd => ExprPrecedence::BitAnd,
        BinOpKind::Shl | BinOpKind::Shr => ExprPrecedence::Shift,
        BinOpKind::Add | BinOpKind::Sub => ExprPrecedence::Additive,
        BinOpKind::Mul | BinOpKind::Div | BinOpKind::Rem => ExprPrecedence::Multiplicative,
    }
}

/// Precedence of the text an expression prints as.
pub fn expr_precedence(expr: &Expr<'_>) -> ExprPrecedence {
    match &expr.kind {
        ExprKind::Flow(_) | ExprKind::Closure(_) | ExprKind::Let(_) => ExprPrecedence::Jump,
        ExprKind::Assign { .. } => ExprPrecedence::Assign,
        ExprKind::BinOp { op, .. } => binary_operator_precedence(*op),
        ExprKind::Cast { .. } => ExprPrecedence::Cast,
        ExprKind::UniOp { op, .. } if !op.is_postfix() => ExprPrecedence::Prefix,
        ExprKind::Deref(_) => ExprPrecedence::Prefix,
        // A leading minus sign makes these prefix expressions.
        ExprKind::Integer { value, ty } if ty.is_signed_integer() && (*value as i128) < 0 => {
            ExprPrecedence::Prefix
        }
        ExprKind::Float { value, .. } if value.is_finite() && value.is_sign_negative() => {
            ExprPrecedence::Prefix
        }
        _ => ExprPrecedence::Postfix,
    }
}

/// Expressions that end in a brace-delimited body and would be parsed as a
/// statement when they start an expression statement.
pub fn is_block_like(expr: &Expr<'_>) -> bool {
    matches!(
        expr.kind,
        ExprKind::Block(_)
            | ExprKind::Try(_)
            | ExprKind::Loop(_)
            | ExprKind::WhileLet(_)
            | ExprKind::If { .. }
            | ExprKind::IfLet { .. }
            | ExprKind::Match { .. }
    )
}

/// Parenthesize the left operand of `op`?
pub fn needs_parens_left(op: BinOpKind, child: &Expr<'_>) -> bool {
    let parent = binary_operator_precedence(op);
    let prec = expr_precedence(child);
    if prec < parent || (prec == parent && parent.associativity() != Associativity::Left) {
        return true;
    }
    if is_block_like(child) {
        return true;
    }
    // `a as T < b` would start a generic argument list.
    matches!(op, BinOpKind::Lt | BinOpKind::Shl) && ends_with_cast(child)
}

/// True if the unparenthesized text of `expr` ends in `as T`.
pub fn ends_with_cast(expr: &Expr<'_>) -> bool {
    match &expr.kind {
        ExprKind::Cast { .. } => true,
        ExprKind::BinOp { op, right: Some(right), .. } => {
            !needs_parens_right(*op, right) && ends_with_cast(right)
        }
        ExprKind::Assign { value, .. } => !needs_parens_assign_value(value) && ends_with_cast(value),
        _ => false,
    }
}

/// Parenthesize the right operand of `op`?
pub fn needs_parens_right(op: BinOpKind, child: &Expr<'_>) -> bool {
    let parent = binary_operator_precedence(op);
    let prec = expr_precedence(child);
    prec < parent || (prec == parent && parent.associativity() != Associativity::Right)
}

/// Receiver of `.field`, `[index]`, `.method()`, `?` and `.await`.
pub fn needs_parens_receiver(child: &Expr<'_>) -> bool {
    expr_precedence(child) < ExprPrecedence::Postfix || is_block_like(child)
}

/// Operand of a prefix operator.
pub fn needs_parens_prefix_operand(child: &Expr<'_>) -> bool {
    expr_precedence(child) < ExprPrecedence::Prefix
}

/// Value being cast.
pub fn needs_parens_cast_value(child: &Expr<'_>) -> bool {
    expr_precedence(child) < ExprPrecedence::Cast || is_block_like(child)
}

/// Left-hand side of an assignment.
pub fn needs_parens_assign_slot(child: &Expr<'_>) -> bool {
    expr_precedence(child) <= ExprPrecedence::Assign || is_block_like(child)
}

/// Right-hand side of an assignment.
pub fn needs_parens_assign_value(child: &Expr<'_>) -> bool {
    expr_precedence(child) < ExprPrecedence::Assign
        && !matches!(child.kind, ExprKind::Closure(_) | ExprKind::Flow(_))
}

/// True if printing `expr` puts a struct literal where a following `{`
/// would be mistaken for the start of a block.
pub fn exposes_struct_literal(expr: &Expr<'_>) -> bool {
    match &expr.kind {
        ExprKind::StructLiteral { .. } | ExprKind::StructLiteralPattern { .. } => true,
        ExprKind::BinOp { op, left, right } => {
            let left = left.is_some_and(|l| !needs_parens_left(*op, l) && exposes_struct_literal(l));
            let right = right.is_some_and(|r| !needs_parens_right(*op, r) && exposes_struct_literal(r));
            left || right
        }
        ExprKind::UniOp { value, .. } | ExprKind::Deref(value) => {
            !needs_parens_prefix_operand(value) && exposes_struct_literal(value)
        }
        ExprKind::Cast { value, .. } => !needs_parens_cast_value(value) && exposes_struct_literal(value),
        ExprKind::Field { object, .. } | ExprKind::Index { object, .. } => {
            !needs_parens_receiver(object) && exposes_struct_literal(object)
        }
        ExprKind::CallMethod { receiver, .. } => {
            !needs_parens_receiver(receiver) && exposes_struct_literal(receiver)
        }
        ExprKind::Assign { slot, value, .. } => {
            (!needs_parens_assign_slot(slot) && exposes_struct_literal(slot))
                || (!needs_parens_assign_value(value) && exposes_struct_literal(value))
        }
        _ => false,
    }
}

/// Condition of `if`, `while` or a `match` scrutinee.
pub fn needs_parens_condition(child: &Expr<'_>) -> bool {
    exposes_struct_literal(child)
}

/// Scrutinee of `let pat = value` inside an `if let`, `while let` or guard.
pub fn needs_parens_let_scrutinee(child: &Expr<'_>) -> bool {
    expr_precedence(child) <= ExprPrecedence::LogicalAnd || exposes_struct_literal(child)
}

/// Plain boolean link of a `&&`-joined condition chain.
pub fn needs_parens_chain_condition(child: &Expr<'_>) -> bool {
    expr_precedence(child) < ExprPrecedence::LogicalAnd || exposes_struct_literal(child)
}
