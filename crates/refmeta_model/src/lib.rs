//! refmeta model - symbol graph and display-part types
//!
//! This crate contains the data structures shared between the symbol
//! provider, the syntax formatter and the document emitter:
//! - `SymbolId` arena indices and the `SymbolTable` symbol graph
//! - Kind-specific symbol payloads (types, members, parameters)
//! - `TypedConstant` attribute-argument values
//! - `DisplayPart` formatter output tokens
//! - `LinkItem` cross-reference records and the `ReferenceIds` seam
//!
//! # Design Philosophy
//!
//! - **Flatten everything**: no owning back-pointers; symbols reference each
//!   other through `SymbolId(u32)` indices into one `SymbolTable`
//! - **Read-only during formatting**: the table is built up front by the
//!   symbol provider and only read afterwards, so formatting calls can run
//!   concurrently without locking

mod constant;
mod link;
mod part;
mod symbol;
mod table;

pub use constant::{AttributeApplication, PrimitiveValue, TypedConstant};
pub use link::{DottedIds, LinkItem, ReferenceIds};
pub use part::{display_string, DisplayPart, PartKind};
pub use symbol::{
    Accessibility, Constraint, EventData, FieldData, MethodData, ParameterData, PropertyData,
    RefKind, SpecialType, Symbol, SymbolData, SymbolId, SymbolKind, TypeData, TypeKind,
    TypeParameterData, TypeRef, Variance,
};
pub use table::SymbolTable;
