//! Read-only symbol lookup with per-call overrides.
//!
//! The declaration builder sometimes needs to format a symbol "as if" it
//! were declared differently (restricted property accessors). Rather than
//! mutating the shared table, one formatting call carries a small override
//! list consulted before the table; the table itself is never written.

use refmeta_model::{Symbol, SymbolId, SymbolTable};

use crate::error::{FormatError, Result};

pub(crate) struct SymbolView<'a> {
    table: &'a SymbolTable,
    overrides: Vec<(SymbolId, Symbol)>,
}

impl<'a> SymbolView<'a> {
    pub(crate) fn new(table: &'a SymbolTable) -> Self {
        SymbolView {
            table,
            overrides: Vec::new(),
        }
    }

    pub(crate) fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Shadow `id` with a replacement symbol for the rest of this call.
    pub(crate) fn shadow(&mut self, id: SymbolId, replacement: Symbol) {
        self.overrides.push((id, replacement));
    }

    pub(crate) fn get(&self, id: SymbolId) -> Result<&Symbol> {
        if let Some((_, sym)) = self.overrides.iter().find(|(o, _)| *o == id) {
            return Ok(sym);
        }
        self.table.get(id).ok_or(FormatError::MissingSymbol(id))
    }
}
