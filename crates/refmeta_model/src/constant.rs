//! Typed constants and attribute applications.
//!
//! A `TypedConstant` is a compile-time constant attached to an attribute
//! argument or a parameter default. Attribute applications whose type or
//! constructor failed to resolve carry `None` there and are skipped whole
//! by the formatter, never partially rendered.

use crate::symbol::{SymbolId, TypeRef};

/// A primitive constant value.
#[derive(Clone, PartialEq, Debug)]
pub enum PrimitiveValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
}

/// A compile-time constant value, tagged by shape.
#[derive(Clone, PartialEq, Debug)]
pub enum TypedConstant {
    Primitive(PrimitiveValue),
    /// An enumeration value: the enum type and the raw underlying value.
    Enum { enum_type: SymbolId, value: i64 },
    /// A type reference: `typeof(T)` / `GetType(T)`.
    Type(TypeRef),
    /// An array constant. `ty` is the array type itself, not the element.
    Array { ty: TypeRef, values: Vec<TypedConstant> },
    Null,
}

/// One application of an attribute to a symbol.
#[derive(Clone, PartialEq, Debug)]
pub struct AttributeApplication {
    /// The attribute type; `None` when resolution failed.
    pub attribute_type: Option<SymbolId>,
    /// The constructor used by this application; `None` when unresolved.
    /// This is the symbol handed to the attribute filter.
    pub constructor: Option<SymbolId>,
    /// Positional constructor arguments, in order.
    pub args: Vec<TypedConstant>,
    /// Named arguments as an ordered name-to-value mapping.
    pub named_args: Vec<(String, TypedConstant)>,
}

impl AttributeApplication {
    /// An application of a niladic attribute.
    pub fn new(attribute_type: SymbolId, constructor: SymbolId) -> Self {
        AttributeApplication {
            attribute_type: Some(attribute_type),
            constructor: Some(constructor),
            args: Vec::new(),
            named_args: Vec::new(),
        }
    }

    /// True when both the attribute type and its constructor resolved.
    pub fn is_resolved(&self) -> bool {
        self.attribute_type.is_some() && self.constructor.is_some()
    }
}
