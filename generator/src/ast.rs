use std::fmt;

use num_bigint::BigInt;

/// Values carried at the leaves of a formula.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Int(BigInt),
}

/// What an expression applies. The special forms serialize to a
/// dialect-dependent operator token; `Other` carries its token verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExprKind {
    Concat,
    At,
    Length,
    ReConcat,
    Other(String),
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Concat => write!(f, "concat"),
            ExprKind::At => write!(f, "char-at"),
            ExprKind::Length => write!(f, "length"),
            ExprKind::ReConcat => write!(f, "re-concat"),
            ExprKind::Other(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// An operator application. `body` holds the arguments in order; every
/// slot is a real node, there are no holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub body: Vec<Node>,
}

impl Expr {
    pub fn new(kind: ExprKind, body: Vec<Node>) -> Self {
        Self { kind, body }
    }

    /// A generic application of `symbol`, rendered the same in every
    /// dialect.
    pub fn call(symbol: &str, body: Vec<Node>) -> Self {
        Self::new(ExprKind::Other(String::from(symbol)), body)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(Literal),
    Identifier(String),
    Sort(String),
    /// An empty formal-argument list, as in `(declare-fun x () String)`.
    Args,
    Expr(Expr),
}

impl Node {
    pub fn string_lit(value: &str) -> Self {
        Node::Literal(Literal::Str(String::from(value)))
    }

    pub fn bool_lit(value: bool) -> Self {
        Node::Literal(Literal::Bool(value))
    }

    pub fn int_lit<I: Into<BigInt>>(value: I) -> Self {
        Node::Literal(Literal::Int(value.into()))
    }

    pub fn identifier(name: &str) -> Self {
        Node::Identifier(String::from(name))
    }

    pub fn sort(sort: &str) -> Self {
        Node::Sort(String::from(sort))
    }
}

/// A whole problem: the ordered sequence of top-level assertions.
pub type Ast = Vec<Expr>;
