//! Name formats and link-item extraction.
//!
//! Four entry points over the display engine: short name, name with
//! containing type, fully qualified name, and the link-item list the
//! document emitter consumes. Format selection depends on the symbol
//! kind; methods carry parameter passing modes, namespaces always render
//! fully qualified.

#[cfg(test)]
mod tests;

use refmeta_model::{
    display_string, DisplayPart, LinkItem, PartKind, ReferenceIds, SymbolId, SymbolKind,
    SymbolTable,
};

use crate::buffer::PartBuffer;
use crate::dialect::Dialect;
use crate::engine;
use crate::error::Result;
use crate::options::DisplayOptions;
use crate::view::SymbolView;

pub(crate) fn name_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    overload: bool,
) -> Result<Vec<DisplayPart>> {
    let opts = match kind_of(table, id)? {
        SymbolKind::NamedType => DisplayOptions::name_with_type(),
        SymbolKind::Namespace => DisplayOptions::namespace(),
        SymbolKind::Method => DisplayOptions::method_name(),
        _ => DisplayOptions::name(),
    };
    let opts = if overload { opts.for_overload() } else { opts };
    render(table, id, dialect, opts)
}

pub(crate) fn name_with_type_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
) -> Result<Vec<DisplayPart>> {
    let opts = match kind_of(table, id)? {
        SymbolKind::Namespace => DisplayOptions::namespace(),
        SymbolKind::Method => DisplayOptions::method_name_with_type(),
        _ => DisplayOptions::name_with_type(),
    };
    render(table, id, dialect, opts)
}

pub(crate) fn qualified_name_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
) -> Result<Vec<DisplayPart>> {
    let opts = match kind_of(table, id)? {
        SymbolKind::Namespace => DisplayOptions::namespace(),
        SymbolKind::Method => DisplayOptions::method_qualified_name(),
        _ => DisplayOptions::qualified_name(),
    };
    render(table, id, dialect, opts)
}

/// One [`LinkItem`] per short-name token. Tokens without a symbol, and
/// bare type-parameter names, become plain text items; generic
/// instantiations link to their unbound definition so every
/// instantiation of one type shares a cross-reference target.
pub(crate) fn link_items(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    overload: bool,
    ids: &dyn ReferenceIds,
) -> Result<Vec<LinkItem>> {
    let parts = name_parts(table, id, dialect, overload)?;
    let mut items = Vec::with_capacity(parts.len());
    for part in parts {
        let target = match part.symbol {
            Some(symbol) if part.kind != PartKind::TypeParameterName => symbol,
            _ => {
                items.push(LinkItem::text(part.text));
                continue;
            }
        };
        let target = table.definition_of(target);
        let key = if overload {
            ids.overload_id(table, target)
        } else {
            ids.id(table, target)
        };
        let with_type = display_string(&render(
            table,
            target,
            dialect,
            DisplayOptions::link_name_with_type(),
        )?);
        let qualified = display_string(&render(
            table,
            target,
            dialect,
            DisplayOptions::link_qualified_name(),
        )?);
        let is_external = match table.get(target) {
            Some(sym) => !sym.in_source,
            None => true,
        };
        items.push(LinkItem {
            name: Some(key),
            display_name: part.text,
            display_name_with_type: with_type,
            display_qualified_name: qualified,
            is_external,
        });
    }
    Ok(items)
}

fn kind_of(table: &SymbolTable, id: SymbolId) -> Result<SymbolKind> {
    let view = SymbolView::new(table);
    Ok(view.get(id)?.kind())
}

fn render(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    opts: DisplayOptions,
) -> Result<Vec<DisplayPart>> {
    let view = SymbolView::new(table);
    let mut buf = PartBuffer::new();
    engine::write_symbol(&view, id, dialect, opts, &mut buf)?;
    Ok(buf.finish())
}
