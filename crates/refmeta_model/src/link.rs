//! Cross-reference link items and the id-generation seam.
//!
//! The name formatter turns each display token into a [`LinkItem`] so the
//! document emitter can build hyperlinked reference tables. Target ids come
//! from a [`ReferenceIds`] implementation supplied by the caller; the
//! formatting core only consumes them.

use crate::symbol::{SymbolData, SymbolId, TypeRef};
use crate::table::SymbolTable;

/// One display token paired with cross-reference metadata.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkItem {
    /// Cross-reference target id; `None` for plain-text items.
    pub name: Option<String>,
    pub display_name: String,
    pub display_name_with_type: String,
    pub display_qualified_name: String,
    /// True when the referenced symbol has no declaration in the documented
    /// surface (it came from a referenced assembly).
    pub is_external: bool,
}

impl LinkItem {
    /// A text-only item with no link target.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        LinkItem {
            name: None,
            display_name: text.clone(),
            display_name_with_type: text.clone(),
            display_qualified_name: text,
            is_external: false,
        }
    }
}

/// Computes stable cross-reference ids for symbols.
///
/// The overload variant identifies an overload group, ignoring signatures.
pub trait ReferenceIds {
    fn id(&self, table: &SymbolTable, symbol: SymbolId) -> String;
    fn overload_id(&self, table: &SymbolTable, symbol: SymbolId) -> String;
}

/// Default id scheme: dot-joined qualified names, with parenthesized
/// parameter type ids distinguishing method overloads and a trailing `*`
/// naming an overload group.
#[derive(Debug, Default, Clone, Copy)]
pub struct DottedIds;

impl DottedIds {
    fn qualified(&self, table: &SymbolTable, symbol: SymbolId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(symbol);
        while let Some(id) = current {
            let Some(sym) = table.get(id) else { break };
            if !sym.name.is_empty() {
                segments.push(sym.name.clone());
            }
            current = sym.containing;
        }
        segments.reverse();
        segments.join(".")
    }
}

impl ReferenceIds for DottedIds {
    fn id(&self, table: &SymbolTable, symbol: SymbolId) -> String {
        let mut id_text = self.qualified(table, symbol);
        if let Some(SymbolData::Method(method)) = table.get(symbol).map(|s| &s.data) {
            if !method.parameters.is_empty() {
                let params: Vec<String> = method
                    .parameters
                    .iter()
                    .filter_map(|p| table.get(*p))
                    .filter_map(|p| match &p.data {
                        SymbolData::Parameter(data) => {
                            Some(self.type_ref_id(table, &data.param_type))
                        }
                        _ => None,
                    })
                    .collect();
                id_text.push('(');
                id_text.push_str(&params.join(","));
                id_text.push(')');
            }
        }
        id_text
    }

    fn overload_id(&self, table: &SymbolTable, symbol: SymbolId) -> String {
        let mut id_text = self.qualified(table, symbol);
        id_text.push('*');
        id_text
    }
}

impl DottedIds {
    fn type_ref_id(&self, table: &SymbolTable, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(id) => self.qualified(table, *id),
            TypeRef::Array(elem) => {
                let mut text = self.type_ref_id(table, elem);
                text.push_str("[]");
                text
            }
        }
    }
}
