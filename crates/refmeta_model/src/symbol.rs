//! Symbol graph nodes.
//!
//! A `Symbol` describes one resolved declaration: a namespace, named type,
//! member, parameter or type parameter. Symbols never own each other;
//! every relationship is a `SymbolId` index into the owning [`SymbolTable`].
//!
//! [`SymbolTable`]: crate::SymbolTable

use std::fmt;

use crate::constant::{AttributeApplication, TypedConstant};

/// Index into the symbol table.
///
/// # Design
/// - Memory: 4 bytes, `Copy`
/// - Equality: O(1) integer compare
/// - Stable for the lifetime of the table; usable as a cross-reference key
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create a new `SymbolId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    /// Get the index into the table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// The kind of a symbol, derived from its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Namespace,
    NamedType,
    Method,
    Property,
    Field,
    Event,
    Parameter,
    TypeParameter,
}

/// Declared accessibility of a symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Accessibility {
    /// No accessibility concept applies (namespaces, parameters).
    NotApplicable,
    Public,
    Protected,
    ProtectedOrInternal,
    Internal,
    Private,
}

/// Kind of a named type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

/// Well-known types that get keyword rendering or structural special-casing.
///
/// `Object` and `ValueType` are elided from base-type lists; `Int32` is the
/// default enum underlying type; the primitives render as dialect keywords
/// (`int` / `Integer`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SpecialType {
    #[default]
    None,
    Object,
    ValueType,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
    Void,
}

/// Passing mode of a parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
}

/// Declared variance of a type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Variance {
    #[default]
    None,
    /// Covariant (`out T` / `Out T`).
    Out,
    /// Contravariant (`in T` / `In T`).
    In,
}

/// A constraint on a type parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constraint {
    /// `class` / `Class`
    ReferenceType,
    /// `struct` / `Structure`
    ValueType,
    /// `new()` / `New`
    Constructor,
    /// A base type or interface bound.
    Type(TypeRef),
}

/// A reference to a type: either a symbol in the table or an array over
/// another type reference.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    /// A named type, type parameter, or generic instantiation symbol.
    Named(SymbolId),
    /// An array type: `T[]` / `T()`.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// The innermost named symbol, unwrapping array layers.
    pub fn element_symbol(&self) -> SymbolId {
        match self {
            TypeRef::Named(id) => *id,
            TypeRef::Array(elem) => elem.element_symbol(),
        }
    }
}

/// One resolved declaration.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// Unqualified declared name.
    pub name: String,
    pub accessibility: Accessibility,
    /// Containing symbol (namespace, type, or member for parameters).
    pub containing: Option<SymbolId>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_virtual: bool,
    pub is_override: bool,
    /// Whether the symbol has a declaration inside the documented surface.
    /// False for symbols that came from referenced assemblies.
    pub in_source: bool,
    /// Attribute applications, in declaration order.
    pub attributes: Vec<AttributeApplication>,
    /// Kind-specific payload.
    pub data: SymbolData,
}

impl Symbol {
    /// Create a symbol with the given name and payload; everything else
    /// defaults to a public, in-source, modifier-free declaration.
    pub fn new(name: impl Into<String>, data: SymbolData) -> Self {
        Symbol {
            name: name.into(),
            accessibility: Accessibility::Public,
            containing: None,
            is_static: false,
            is_abstract: false,
            is_sealed: false,
            is_virtual: false,
            is_override: false,
            in_source: true,
            attributes: Vec::new(),
            data,
        }
    }

    /// The symbol kind, derived from the payload.
    pub fn kind(&self) -> SymbolKind {
        match &self.data {
            SymbolData::Namespace => SymbolKind::Namespace,
            SymbolData::Type(_) => SymbolKind::NamedType,
            SymbolData::Method(_) => SymbolKind::Method,
            SymbolData::Property(_) => SymbolKind::Property,
            SymbolData::Field(_) => SymbolKind::Field,
            SymbolData::Event(_) => SymbolKind::Event,
            SymbolData::Parameter(_) => SymbolKind::Parameter,
            SymbolData::TypeParameter(_) => SymbolKind::TypeParameter,
        }
    }

    /// Kind-specific type payload, if this is a named type.
    pub fn as_type(&self) -> Option<&TypeData> {
        match &self.data {
            SymbolData::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Explicit interface implementations, for the member kinds that have
    /// them. Non-empty implies implicit-interface-style hiding rules.
    pub fn explicit_impls(&self) -> &[SymbolId] {
        match &self.data {
            SymbolData::Method(m) => &m.explicit_impls,
            SymbolData::Property(p) => &p.explicit_impls,
            SymbolData::Event(e) => &e.explicit_impls,
            _ => &[],
        }
    }
}

/// Kind-specific symbol payload.
#[derive(Clone, Debug)]
pub enum SymbolData {
    Namespace,
    Type(TypeData),
    Method(MethodData),
    Property(PropertyData),
    Field(FieldData),
    Event(EventData),
    Parameter(ParameterData),
    TypeParameter(TypeParameterData),
}

/// Payload of a named type.
#[derive(Clone, Debug, Default)]
pub struct TypeData {
    pub type_kind: TypeKind,
    pub special: SpecialType,
    /// Direct base type, absent for interfaces and the root type.
    pub base_type: Option<SymbolId>,
    /// Full flattened interface set, in the order the provider reports it.
    pub interfaces: Vec<SymbolId>,
    /// Underlying type of an enum.
    pub enum_underlying: Option<SymbolId>,
    /// Member symbols in declaration order; for enums, the member fields.
    pub members: Vec<SymbolId>,
    /// Declared type parameters (TypeParameter symbols).
    pub type_params: Vec<SymbolId>,
    /// Type arguments of a generic instantiation; empty on definitions.
    pub type_args: Vec<TypeRef>,
    /// The unbound generic definition this instantiation was constructed
    /// from; absent on definitions and non-generic types.
    pub constructed_from: Option<SymbolId>,
    /// The invoke method carrying a delegate's signature.
    pub delegate_invoke: Option<SymbolId>,
}

impl Default for TypeKind {
    fn default() -> Self {
        TypeKind::Class
    }
}

impl TypeData {
    /// True for a constructed generic instantiation such as `List<int>`.
    pub fn is_instantiation(&self) -> bool {
        self.constructed_from.is_some()
    }
}

/// Payload of a method.
#[derive(Clone, Debug, Default)]
pub struct MethodData {
    /// Parameter symbols, in declaration order.
    pub parameters: Vec<SymbolId>,
    /// Absent for void methods and constructors.
    pub return_type: Option<TypeRef>,
    pub type_params: Vec<SymbolId>,
    pub explicit_impls: Vec<SymbolId>,
    pub is_constructor: bool,
}

/// Payload of a property. `parameters` is non-empty for indexers.
#[derive(Clone, Debug)]
pub struct PropertyData {
    pub property_type: TypeRef,
    pub parameters: Vec<SymbolId>,
    /// Getter accessor symbol (a Method).
    pub getter: Option<SymbolId>,
    /// Setter accessor symbol (a Method).
    pub setter: Option<SymbolId>,
    pub explicit_impls: Vec<SymbolId>,
}

/// Payload of a field. Enum members are const fields of their enum type.
#[derive(Clone, Debug)]
pub struct FieldData {
    pub field_type: TypeRef,
    pub is_const: bool,
    pub is_read_only: bool,
    /// Compile-time constant value, for const fields and enum members.
    pub constant: Option<TypedConstant>,
}

/// Payload of an event.
#[derive(Clone, Debug)]
pub struct EventData {
    pub event_type: TypeRef,
    pub explicit_impls: Vec<SymbolId>,
}

/// Payload of a parameter.
#[derive(Clone, Debug)]
pub struct ParameterData {
    pub param_type: TypeRef,
    pub ref_kind: RefKind,
    /// `params` / `ParamArray` marker.
    pub is_params: bool,
    /// Explicit default value, making the parameter optional.
    pub default: Option<TypedConstant>,
}

impl ParameterData {
    /// A plain by-value parameter of the given type.
    pub fn of(param_type: TypeRef) -> Self {
        ParameterData {
            param_type,
            ref_kind: RefKind::None,
            is_params: false,
            default: None,
        }
    }
}

/// Payload of a type parameter.
#[derive(Clone, Debug, Default)]
pub struct TypeParameterData {
    pub variance: Variance,
    pub constraints: Vec<Constraint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_derived_from_payload() {
        let sym = Symbol::new("Foo", SymbolData::Type(TypeData::default()));
        assert_eq!(sym.kind(), SymbolKind::NamedType);

        let sym = Symbol::new("System", SymbolData::Namespace);
        assert_eq!(sym.kind(), SymbolKind::Namespace);
    }

    #[test]
    fn explicit_impls_empty_for_fields() {
        let sym = Symbol::new(
            "x",
            SymbolData::Field(FieldData {
                field_type: TypeRef::Named(SymbolId::new(0)),
                is_const: false,
                is_read_only: false,
                constant: None,
            }),
        );
        assert!(sym.explicit_impls().is_empty());
    }

    #[test]
    fn type_ref_element_symbol_unwraps_arrays() {
        let id = SymbolId::new(7);
        let arr = TypeRef::Array(Box::new(TypeRef::Array(Box::new(TypeRef::Named(id)))));
        assert_eq!(arr.element_symbol(), id);
    }
}
