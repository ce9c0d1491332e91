//! Display option words controlling the dialect engine.
//!
//! Each public operation owns a preset combining these words, mirroring the
//! fixed format objects of the metadata extractor: name, name-with-type,
//! qualified name, namespace, the method variants with parameter passing
//! modes, the full declaration syntax format, and the compact link-item
//! formats.

use bitflags::bitflags;

bitflags! {
    /// What to include when rendering a member.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct MemberOptions: u8 {
        const PARAMETERS = 1 << 0;
        const CONTAINING_TYPE = 1 << 1;
        const EXPLICIT_INTERFACE = 1 << 2;
        const MODIFIERS = 1 << 3;
        const CONSTANT_VALUE = 1 << 4;
        /// The member's own type: return type, property/field/event type.
        const TYPE = 1 << 5;
    }
}

bitflags! {
    /// What to include for each parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct ParameterOptions: u8 {
        const TYPE = 1 << 0;
        const NAME = 1 << 1;
        const DEFAULT = 1 << 2;
        /// `ref` / `out` / `params` passing-mode markers.
        const MODIFIERS = 1 << 3;
    }
}

bitflags! {
    /// What to include for generic declarations.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct GenericsOptions: u8 {
        const TYPE_PARAMETERS = 1 << 0;
        const VARIANCE = 1 << 1;
        const CONSTRAINTS = 1 << 2;
    }
}

bitflags! {
    /// Which declaration keywords to include.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct KindOptions: u8 {
        const NAMESPACE_KEYWORD = 1 << 0;
        const TYPE_KEYWORD = 1 << 1;
        const MEMBER_KEYWORD = 1 << 2;
    }
}

/// How far to qualify names.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Qualification {
    NameOnly,
    ContainingTypes,
    /// Containing types and namespaces.
    Full,
}

/// One complete format selection.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DisplayOptions {
    pub member: MemberOptions,
    pub parameters: ParameterOptions,
    pub generics: GenericsOptions,
    pub kinds: KindOptions,
    pub qualification: Qualification,
    /// Render well-known types as dialect keywords (`int` / `Integer`)
    /// instead of their metadata names. On in the declaration-syntax
    /// formats, off in the name formats, which keep `Int32`.
    pub special_type_keywords: bool,
}

impl DisplayOptions {
    /// Short display name: parameters and explicit-interface qualification,
    /// no containing type. Types still show their containing types.
    pub fn name() -> Self {
        DisplayOptions {
            member: MemberOptions::PARAMETERS | MemberOptions::EXPLICIT_INTERFACE,
            parameters: ParameterOptions::TYPE,
            generics: GenericsOptions::TYPE_PARAMETERS,
            kinds: KindOptions::empty(),
            qualification: Qualification::NameOnly,
            special_type_keywords: false,
        }
    }

    /// Name qualified by containing types.
    pub fn name_with_type() -> Self {
        DisplayOptions {
            member: MemberOptions::PARAMETERS
                | MemberOptions::EXPLICIT_INTERFACE
                | MemberOptions::CONTAINING_TYPE,
            qualification: Qualification::ContainingTypes,
            ..Self::name()
        }
    }

    /// Name qualified by containing types and namespaces.
    pub fn qualified_name() -> Self {
        DisplayOptions {
            qualification: Qualification::Full,
            ..Self::name_with_type()
        }
    }

    /// Plain qualified formatting for namespaces.
    pub fn namespace() -> Self {
        DisplayOptions {
            member: MemberOptions::empty(),
            parameters: ParameterOptions::empty(),
            generics: GenericsOptions::empty(),
            kinds: KindOptions::empty(),
            qualification: Qualification::Full,
            special_type_keywords: false,
        }
    }

    /// Method name variants additionally show parameter passing modes.
    pub fn method_name() -> Self {
        DisplayOptions {
            parameters: ParameterOptions::TYPE | ParameterOptions::MODIFIERS,
            ..Self::name()
        }
    }

    pub fn method_name_with_type() -> Self {
        DisplayOptions {
            parameters: ParameterOptions::TYPE | ParameterOptions::MODIFIERS,
            ..Self::name_with_type()
        }
    }

    pub fn method_qualified_name() -> Self {
        DisplayOptions {
            parameters: ParameterOptions::TYPE | ParameterOptions::MODIFIERS,
            ..Self::qualified_name()
        }
    }

    /// The full declaration-syntax format consumed by the syntax builder.
    pub fn syntax() -> Self {
        DisplayOptions {
            member: MemberOptions::PARAMETERS
                | MemberOptions::EXPLICIT_INTERFACE
                | MemberOptions::MODIFIERS
                | MemberOptions::CONSTANT_VALUE
                | MemberOptions::TYPE,
            parameters: ParameterOptions::TYPE
                | ParameterOptions::NAME
                | ParameterOptions::DEFAULT
                | ParameterOptions::MODIFIERS,
            generics: GenericsOptions::TYPE_PARAMETERS
                | GenericsOptions::VARIANCE
                | GenericsOptions::CONSTRAINTS,
            kinds: KindOptions::all(),
            qualification: Qualification::NameOnly,
            special_type_keywords: true,
        }
    }

    /// Type names inside syntax: qualified by containing types, with type
    /// arguments, no constraints.
    pub fn type_name() -> Self {
        DisplayOptions {
            member: MemberOptions::empty(),
            parameters: ParameterOptions::empty(),
            generics: GenericsOptions::TYPE_PARAMETERS,
            kinds: KindOptions::empty(),
            qualification: Qualification::ContainingTypes,
            special_type_keywords: true,
        }
    }

    /// The transient defaulted-parameter format used to render enum
    /// constants: parameter name, type, and default value, with enum
    /// members qualified by their enum.
    pub fn enum_constant() -> Self {
        DisplayOptions {
            member: MemberOptions::empty(),
            parameters: ParameterOptions::TYPE | ParameterOptions::NAME | ParameterOptions::DEFAULT,
            generics: GenericsOptions::empty(),
            kinds: KindOptions::empty(),
            qualification: Qualification::ContainingTypes,
            special_type_keywords: true,
        }
    }

    /// Compact link-item display: containing-type qualification, no
    /// parameter or type-parameter lists.
    pub fn link_name_with_type() -> Self {
        DisplayOptions {
            member: MemberOptions::CONTAINING_TYPE,
            parameters: ParameterOptions::empty(),
            generics: GenericsOptions::empty(),
            kinds: KindOptions::empty(),
            qualification: Qualification::ContainingTypes,
            special_type_keywords: false,
        }
    }

    pub fn link_qualified_name() -> Self {
        DisplayOptions {
            qualification: Qualification::Full,
            ..Self::link_name_with_type()
        }
    }

    /// Strip parameter and type-parameter lists: what identifies an
    /// overload group, ignoring signature.
    pub fn for_overload(mut self) -> Self {
        self.member.remove(MemberOptions::PARAMETERS);
        self.generics.remove(GenericsOptions::TYPE_PARAMETERS);
        self
    }
}
