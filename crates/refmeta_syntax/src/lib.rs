//! Declaration and name formatting over resolved API metadata.
//!
//! Converts symbols from a [`refmeta_model::SymbolTable`] into typed
//! display-token sequences in one of two surface dialects: full
//! declaration lines ([`syntax_parts`]), the name formats
//! ([`name_parts`], [`name_with_type_parts`], [`qualified_name_parts`]),
//! and cross-reference link lists ([`link_items`]).
//!
//! # Design
//! - Pure functions over a read-only table; calls are independent and
//!   safe to run concurrently
//! - Every failure is a [`FormatError`]; an empty token sequence always
//!   means "nothing to show", never "something went wrong"
//! - Token buffers live for one call and are frozen on return

mod access;
mod buffer;
mod constant;
mod dialect;
mod engine;
mod error;
mod name;
mod options;
mod syntax;
#[cfg(test)]
mod testutil;
mod view;

pub use access::{display_accessibility, is_includable};
pub use dialect::{Dialect, DialectProfile};
pub use error::{FormatError, Result};
pub use options::{
    DisplayOptions, GenericsOptions, KindOptions, MemberOptions, ParameterOptions, Qualification,
};

use refmeta_model::{display_string, DisplayPart, LinkItem, ReferenceIds, SymbolId, SymbolTable};

/// Decides whether an attribute application is rendered, given its
/// constructor symbol. The default accepts everything.
pub type AttributeFilter = dyn Fn(&SymbolTable, SymbolId) -> bool;

/// Full declaration line for `id`, as display tokens.
pub fn syntax_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
) -> Result<Vec<DisplayPart>> {
    syntax_parts_with(table, id, dialect, &|_, _| true)
}

/// [`syntax_parts`] with an attribute filter.
#[tracing::instrument(level = "trace", skip_all, fields(symbol = id.raw(), dialect = ?dialect))]
pub fn syntax_parts_with(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    include_attribute: &AttributeFilter,
) -> Result<Vec<DisplayPart>> {
    syntax::build_declaration(table, id, dialect, include_attribute)
}

/// Full declaration line for `id`, as text.
pub fn syntax(table: &SymbolTable, id: SymbolId, dialect: Dialect) -> Result<String> {
    Ok(display_string(&syntax_parts(table, id, dialect)?))
}

/// Short display name. With `overload`, parameter and type-parameter
/// lists are stripped: what identifies the overload group, not one
/// signature.
#[tracing::instrument(level = "trace", skip_all, fields(symbol = id.raw(), dialect = ?dialect))]
pub fn name_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    overload: bool,
) -> Result<Vec<DisplayPart>> {
    name::name_parts(table, id, dialect, overload)
}

pub fn name(table: &SymbolTable, id: SymbolId, dialect: Dialect) -> Result<String> {
    Ok(display_string(&name_parts(table, id, dialect, false)?))
}

/// Name qualified by containing types.
#[tracing::instrument(level = "trace", skip_all, fields(symbol = id.raw(), dialect = ?dialect))]
pub fn name_with_type_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
) -> Result<Vec<DisplayPart>> {
    name::name_with_type_parts(table, id, dialect)
}

pub fn name_with_type(table: &SymbolTable, id: SymbolId, dialect: Dialect) -> Result<String> {
    Ok(display_string(&name_with_type_parts(table, id, dialect)?))
}

/// Name qualified by containing types and namespaces.
#[tracing::instrument(level = "trace", skip_all, fields(symbol = id.raw(), dialect = ?dialect))]
pub fn qualified_name_parts(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
) -> Result<Vec<DisplayPart>> {
    name::qualified_name_parts(table, id, dialect)
}

pub fn qualified_name(table: &SymbolTable, id: SymbolId, dialect: Dialect) -> Result<String> {
    Ok(display_string(&qualified_name_parts(table, id, dialect)?))
}

/// One [`LinkItem`] per short-name token, with target ids from `ids`.
#[tracing::instrument(level = "trace", skip_all, fields(symbol = id.raw(), dialect = ?dialect))]
pub fn link_items(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    overload: bool,
    ids: &dyn ReferenceIds,
) -> Result<Vec<LinkItem>> {
    name::link_items(table, id, dialect, overload, ids)
}
