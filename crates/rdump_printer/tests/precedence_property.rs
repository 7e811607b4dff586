//! Property tests for operator parenthesization.
//!
//! Random operator trees are printed and re-parsed with a small
//! precedence-climbing parser; the parse must reproduce the original tree.

use proptest::prelude::*;
use rdump_ast::{AstBuilder, BinOpKind, CoreType, Expr, UniOpKind};
use rdump_core::{AstArena, StringInterner};
use rdump_printer::expr_to_string;

#[derive(Debug, Clone, PartialEq)]
enum Tree {
    Leaf(&'static str),
    Neg(Box<Tree>),
    /// `value as usize`
    Cast(Box<Tree>),
    /// `receiver.m()`
    Method(Box<Tree>),
    Bin(BinOpKind, Box<Tree>, Box<Tree>),
}

const OPS: [BinOpKind; 16] = [
    BinOpKind::Or,
    BinOpKind::And,
    BinOpKind::Eq,
    BinOpKind::Ne,
    BinOpKind::Lt,
    BinOpKind::Ge,
    BinOpKind::BitOr,
    BinOpKind::BitXor,
    BinOpKind::BitAnd,
    BinOpKind::Shl,
    BinOpKind::Shr,
    BinOpKind::Add,
    BinOpKind::Sub,
    BinOpKind::Mul,
    BinOpKind::Div,
    BinOpKind::Rem,
];

const RANGES: [BinOpKind; 2] = [BinOpKind::Range, BinOpKind::RangeInclusive];

fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(Tree::Leaf);
    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            6 => (prop::sample::select(OPS.to_vec()), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Tree::Bin(op, Box::new(l), Box::new(r))),
            1 => (prop::sample::select(RANGES.to_vec()), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Tree::Bin(op, Box::new(l), Box::new(r))),
            1 => inner.clone().prop_map(|t| Tree::Neg(Box::new(t))),
            2 => inner.clone().prop_map(|t| Tree::Cast(Box::new(t))),
            1 => inner.prop_map(|t| Tree::Method(Box::new(t))),
        ]
    })
}

fn build<'a>(b: &AstBuilder<'a>, tree: &Tree) -> Expr<'a> {
    match tree {
        Tree::Leaf(name) => b.named(name),
        Tree::Neg(inner) => b.unary(UniOpKind::Negate, build(b, inner)),
        Tree::Cast(inner) => b.cast(build(b, inner), b.ty_prim(CoreType::Usize)),
        Tree::Method(inner) => b.method_call(build(b, inner), "m", []),
        Tree::Bin(op, l, r) => b.binop(*op, build(b, l), build(b, r)),
    }
}

// ============================================================================
// Reference parser
// ============================================================================

const COMPARE_POWER: u8 = 4;

/// Binding power of each operator. Ranges and comparisons are
/// non-associative; everything else is parsed left-associative.
fn binding_power(op: BinOpKind) -> u8 {
    match op {
        BinOpKind::Range | BinOpKind::RangeInclusive => 1,
        BinOpKind::Or => 2,
        BinOpKind::And => 3,
        BinOpKind::Eq | BinOpKind::Ne | BinOpKind::Lt | BinOpKind::Le | BinOpKind::Gt | BinOpKind::Ge => {
            COMPARE_POWER
        }
        BinOpKind::BitOr => 5,
        BinOpKind::BitXor => 6,
        BinOpKind::BitAnd => 7,
        BinOpKind::Shl | BinOpKind::Shr => 8,
        BinOpKind::Add | BinOpKind::Sub => 9,
        BinOpKind::Mul | BinOpKind::Div | BinOpKind::Rem => 10,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(&'static str),
    Op(BinOpKind),
    Minus,
    /// `as usize`
    Cast,
    /// `.m()`
    Method,
    Open,
    Close,
}

fn tokenize(text: &str) -> Vec<Token> {
    // Longest spelling first.
    const WORDS: [(&str, Token); 12] = [
        ("as usize", Token::Cast),
        (".m()", Token::Method),
        ("..=", Token::Op(BinOpKind::RangeInclusive)),
        ("..", Token::Op(BinOpKind::Range)),
        ("<<", Token::Op(BinOpKind::Shl)),
        (">>", Token::Op(BinOpKind::Shr)),
        ("&&", Token::Op(BinOpKind::And)),
        ("||", Token::Op(BinOpKind::Or)),
        ("==", Token::Op(BinOpKind::Eq)),
        ("!=", Token::Op(BinOpKind::Ne)),
        ("<=", Token::Op(BinOpKind::Le)),
        (">=", Token::Op(BinOpKind::Ge)),
    ];

    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == ' ' {
            rest = &rest[1..];
            continue;
        }
        if let Some((s, token)) = WORDS.iter().find(|(s, _)| rest.starts_with(s)) {
            tokens.push(token.clone());
            rest = &rest[s.len()..];
            continue;
        }
        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            '-' => Token::Minus,
            '+' => Token::Op(BinOpKind::Add),
            '*' => Token::Op(BinOpKind::Mul),
            '/' => Token::Op(BinOpKind::Div),
            '%' => Token::Op(BinOpKind::Rem),
            '&' => Token::Op(BinOpKind::BitAnd),
            '|' => Token::Op(BinOpKind::BitOr),
            '^' => Token::Op(BinOpKind::BitXor),
            '<' => Token::Op(BinOpKind::Lt),
            '>' => Token::Op(BinOpKind::Gt),
            'a' => Token::Ident("a"),
            'b' => Token::Ident("b"),
            'c' => Token::Ident("c"),
            'd' => Token::Ident("d"),
            other => panic!("unexpected character {other:?} in {text:?}"),
        };
        tokens.push(token);
        rest = &rest[1..];
    }
    tokens
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    /// Binary `-` only appears after an operand, so the same token serves both.
    fn peek_binop(&self) -> Option<BinOpKind> {
        match self.peek()? {
            Token::Op(op) => Some(*op),
            Token::Minus => Some(BinOpKind::Sub),
            _ => None,
        }
    }

    fn parse_expr(&mut self, min_power: u8) -> Tree {
        let mut lhs = self.parse_cast();
        while let Some(op) = self.peek_binop() {
            let power = binding_power(op);
            if power < min_power {
                break;
            }
            self.bump();
            let rhs = self.parse_expr(power + 1);
            if op.is_range() {
                assert!(!self.peek_binop().is_some_and(BinOpKind::is_range), "chained range operator");
            }
            lhs = Tree::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        lhs
    }

    fn parse_cast(&mut self) -> Tree {
        let mut value = self.parse_unary();
        while self.peek() == Some(&Token::Cast) {
            self.bump();
            value = Tree::Cast(Box::new(value));
            // rustc reads `as usize <` as the start of generic arguments.
            assert!(
                !matches!(self.peek(), Some(Token::Op(BinOpKind::Lt | BinOpKind::Shl))),
                "`<` directly after a cast type"
            );
        }
        value
    }

    fn parse_unary(&mut self) -> Tree {
        if self.peek() == Some(&Token::Minus) {
            self.bump();
            return Tree::Neg(Box::new(self.parse_unary()));
        }
        let mut receiver = self.parse_primary();
        while self.peek() == Some(&Token::Method) {
            self.bump();
            receiver = Tree::Method(Box::new(receiver));
        }
        receiver
    }

    fn parse_primary(&mut self) -> Tree {
        match self.bump() {
            Token::Ident(name) => Tree::Leaf(name),
            Token::Open => {
                let inner = self.parse_expr(0);
                assert_eq!(self.bump(), Token::Close);
                inner
            }
            other => panic!("unexpected token {other:?}"),
        }
    }
}

fn parse(text: &str) -> Tree {
    let mut parser = Parser { tokens: tokenize(text), pos: 0 };
    let tree = parser.parse_expr(0);
    assert_eq!(parser.pos, parser.tokens.len(), "trailing tokens in {text:?}");
    tree
}

#[test]
#[should_panic(expected = "directly after a cast type")]
fn test_reference_parser_rejects_less_than_after_cast() {
    parse("a + b as usize < c");
}

#[test]
fn test_reference_parser_accepts_wrapped_cast() {
    let expected = Tree::Bin(
        BinOpKind::Lt,
        Box::new(Tree::Bin(BinOpKind::Add, Box::new(Tree::Leaf("a")), Box::new(Tree::Cast(Box::new(Tree::Leaf("b")))))),
        Box::new(Tree::Leaf("c")),
    );
    assert_eq!(parse("(a + b as usize) < c"), expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn printed_operators_reparse_to_same_tree(tree in tree_strategy()) {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = AstBuilder::new(&arena, &interner);

        let text = expr_to_string(&interner, &build(&b, &tree)).unwrap();
        prop_assert_eq!(parse(&text), tree, "printed as {}", text);
    }

    #[test]
    fn comparisons_are_never_chained(tree in tree_strategy()) {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = AstBuilder::new(&arena, &interner);

        let text = expr_to_string(&interner, &build(&b, &tree)).unwrap();
        let tokens = tokenize(&text);
        let mut depth = 0usize;
        let mut seen: Vec<bool> = vec![false];
        for token in tokens {
            match token {
                Token::Open => {
                    depth += 1;
                    seen.push(false);
                }
                Token::Close => {
                    seen.pop();
                    depth -= 1;
                }
                Token::Op(op) if binding_power(op) == COMPARE_POWER => {
                    prop_assert!(!seen[depth], "chained comparison in {}", text);
                    seen[depth] = true;
                }
                Token::Op(op) if binding_power(op) < COMPARE_POWER => seen[depth] = false,
                _ => {}
            }
        }
    }
}
