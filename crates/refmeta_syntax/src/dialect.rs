//! Display dialects and their keyword profiles.
//!
//! Two surface renderings are supported: the brace/semicolon family
//! (`CSharp`) and the keyword-verbose family (`VisualBasic`). Components
//! consult the [`DialectProfile`] table instead of branching inline on the
//! dialect, so adding a dialect is additive.

/// One of the two supported surface-syntax dialects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dialect {
    CSharp,
    VisualBasic,
}

impl Dialect {
    /// The keyword/punctuation profile of this dialect.
    pub const fn profile(self) -> &'static DialectProfile {
        match self {
            Dialect::CSharp => &CSHARP,
            Dialect::VisualBasic => &VISUAL_BASIC,
        }
    }
}

/// Keyword and punctuation choices that vary per dialect.
#[derive(Debug)]
pub struct DialectProfile {
    pub attribute_open: &'static str,
    pub attribute_close: &'static str,
    /// Named-argument assignment. Surrounded by spaces in C#, bare in VB.
    pub named_arg_assign: &'static str,
    pub spaced_named_arg_assign: bool,
    pub null_literal: &'static str,
    pub type_of: &'static str,
    pub new_keyword: &'static str,
    pub inherits: &'static str,
    pub implements: &'static str,
    /// Replacement type keyword for static classes, if the dialect has one.
    pub module_keyword: Option<&'static str>,
    /// `static` class modifier keyword, absent when the dialect expresses
    /// static-ness through the type keyword instead.
    pub static_modifier: Option<&'static str>,
    pub abstract_modifier: &'static str,
    pub sealed_modifier: &'static str,
    pub public_keyword: &'static str,
    pub protected_keyword: &'static str,
}

pub(crate) static CSHARP: DialectProfile = DialectProfile {
    attribute_open: "[",
    attribute_close: "]",
    named_arg_assign: "=",
    spaced_named_arg_assign: true,
    null_literal: "null",
    type_of: "typeof",
    new_keyword: "new",
    inherits: ":",
    implements: ":",
    module_keyword: None,
    static_modifier: Some("static"),
    abstract_modifier: "abstract",
    sealed_modifier: "sealed",
    public_keyword: "public",
    protected_keyword: "protected",
};

pub(crate) static VISUAL_BASIC: DialectProfile = DialectProfile {
    attribute_open: "<",
    attribute_close: ">",
    named_arg_assign: ":=",
    spaced_named_arg_assign: false,
    null_literal: "Nothing",
    type_of: "GetType",
    new_keyword: "New",
    inherits: "Inherits",
    implements: "Implements",
    module_keyword: Some("Module"),
    static_modifier: None,
    abstract_modifier: "MustInherit",
    sealed_modifier: "NotInheritable",
    public_keyword: "Public",
    protected_keyword: "Protected",
};
