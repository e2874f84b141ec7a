use thiserror::Error;

use crate::ast::ExprKind;
use crate::generate::Dialect;

/// Failures surfaced by the generator. Both are fatal to the current
/// generation call; nothing is retried.
///
/// The "unknown node kind" failure of the original design is impossible
/// here: dispatch is an exhaustive match over closed enums, so an
/// unhandled kind fails compilation instead of generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The selected dialect has no surface syntax for this construct.
    #[error("can't generate `{kind}` in dialect `{dialect}`")]
    NotSupported { kind: ExprKind, dialect: Dialect },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
