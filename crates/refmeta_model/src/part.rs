//! Display parts, the formatter's sole output unit.
//!
//! A part is a `(kind, text)` pair, optionally tagged with the symbol the
//! token denotes. The tag is a non-owning lookup key used downstream for
//! cross-reference linking; concatenating the texts of a part sequence
//! reproduces the rendered declaration.

use crate::symbol::SymbolId;

/// Classification of one display token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartKind {
    Keyword,
    Punctuation,
    Space,
    LineBreak,
    /// Name of a class, struct, interface, or delegate.
    TypeName,
    EnumName,
    EnumMemberName,
    /// Name of a method, property, field, or event.
    MemberName,
    ParameterName,
    TypeParameterName,
    NamespaceName,
    NumericLiteral,
    StringLiteral,
}

impl PartKind {
    /// Whether the kind denotes an identifier-like name.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            PartKind::TypeName
                | PartKind::EnumName
                | PartKind::EnumMemberName
                | PartKind::MemberName
                | PartKind::ParameterName
                | PartKind::TypeParameterName
                | PartKind::NamespaceName
        )
    }
}

/// One display token.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPart {
    pub kind: PartKind,
    pub text: String,
    /// The symbol this token denotes, when it denotes one.
    pub symbol: Option<SymbolId>,
}

impl DisplayPart {
    pub fn new(kind: PartKind, text: impl Into<String>) -> Self {
        DisplayPart {
            kind,
            text: text.into(),
            symbol: None,
        }
    }

    /// A part tagged with the symbol it denotes.
    pub fn symbol(kind: PartKind, text: impl Into<String>, symbol: SymbolId) -> Self {
        DisplayPart {
            kind,
            text: text.into(),
            symbol: Some(symbol),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        DisplayPart::new(PartKind::Keyword, text)
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        DisplayPart::new(PartKind::Punctuation, text)
    }

    pub fn space() -> Self {
        DisplayPart::new(PartKind::Space, " ")
    }

    pub fn line_break() -> Self {
        DisplayPart::new(PartKind::LineBreak, "\n")
    }
}

/// Concatenate part texts into the rendered string.
pub fn display_string(parts: &[DisplayPart]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.text.len()).sum());
    for part in parts {
        out.push_str(&part.text);
    }
    out
}
