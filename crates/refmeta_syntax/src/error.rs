//! Formatter errors.
//!
//! Formatting one symbol must never abort a batch: every public entry point
//! returns `Result` and internal code propagates with `?`, so a malformed
//! symbol surfaces as an `Err` for that call alone. An empty `Ok` sequence
//! and a failed call are therefore distinguishable to the caller.

use refmeta_model::SymbolId;

/// Failure while formatting one symbol.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum FormatError {
    /// A referenced id was not present in the symbol table.
    #[error("symbol {0:?} is not present in the symbol table")]
    MissingSymbol(SymbolId),

    /// A symbol's payload did not match the shape its position requires,
    /// e.g. a parameter list entry that is not a parameter.
    #[error("symbol {id:?} is not a {expected}")]
    UnexpectedKind {
        id: SymbolId,
        expected: &'static str,
    },
}

pub type Result<T, E = FormatError> = std::result::Result<T, E>;
