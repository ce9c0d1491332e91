//! The symbol table: an append-only arena holding one resolved symbol graph.

use rustc_hash::FxHashMap;

use crate::symbol::{Symbol, SymbolData, SymbolId, SymbolKind};

/// Arena of symbols plus a doc-id index for stable cross-reference lookup.
///
/// The symbol provider builds the table up front (`add`, `get_mut` for
/// back-reference patching, `register_doc_id`); formatting only reads it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    doc_ids: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Add a symbol, returning its id.
    pub fn add(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::new(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    /// Mutable access for provider-side fixups while the graph is built.
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (SymbolId::new(i as u32), s))
    }

    /// Associate a stable document id with a symbol.
    pub fn register_doc_id(&mut self, doc_id: impl Into<String>, id: SymbolId) {
        self.doc_ids.insert(doc_id.into(), id);
    }

    pub fn find_by_doc_id(&self, doc_id: &str) -> Option<SymbolId> {
        self.doc_ids.get(doc_id).copied()
    }

    /// The nearest enclosing named type, if any.
    pub fn containing_type(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = self.get(id)?.containing;
        while let Some(c) = current {
            let sym = self.get(c)?;
            if sym.kind() == SymbolKind::NamedType {
                return Some(c);
            }
            current = sym.containing;
        }
        None
    }

    /// Resolve a generic instantiation to its unbound definition; any other
    /// symbol resolves to itself.
    pub fn definition_of(&self, id: SymbolId) -> SymbolId {
        match self.get(id).map(|s| &s.data) {
            Some(SymbolData::Type(t)) => t.constructed_from.unwrap_or(id),
            _ => id,
        }
    }
}
