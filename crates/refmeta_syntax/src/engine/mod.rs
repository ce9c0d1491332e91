//! Per-dialect symbol display engine.
//!
//! Turns one symbol into display tokens under a [`DisplayOptions`]
//! selection, appending into the caller's buffer. This module holds the
//! dispatch and everything the dialects share: qualification chains, type
//! references, generic parameter lists, parameters, and constant values.
//! The per-dialect declaration grammars live in [`csharp`] and [`vb`].
//!
//! # Design
//! - Pure: reads the symbol view, appends to the buffer, no other state
//! - Name tokens carry the denoted symbol id for downstream linking
//! - Declaration forms never emit accessibility; the declaration builder
//!   owns that keyword

mod csharp;
mod literals;
#[cfg(test)]
mod tests;
mod vb;

pub(crate) use literals::{primitive_kind, primitive_text};

use refmeta_model::{
    Accessibility, Constraint, DisplayPart, PartKind, PrimitiveValue, RefKind, SpecialType,
    Symbol, SymbolData, SymbolId, SymbolKind, TypeData, TypeKind, TypeRef, TypedConstant,
    Variance,
};

use crate::buffer::PartBuffer;
use crate::dialect::Dialect;
use crate::error::{FormatError, Result};
use crate::options::{
    DisplayOptions, GenericsOptions, KindOptions, MemberOptions, ParameterOptions, Qualification,
};
use crate::view::SymbolView;

/// Append the rendering of `id` under `opts` into `buf`.
pub(crate) fn write_symbol(
    view: &SymbolView<'_>,
    id: SymbolId,
    dialect: Dialect,
    opts: DisplayOptions,
    buf: &mut PartBuffer,
) -> Result<()> {
    Writer {
        view,
        dialect,
        opts,
        buf,
    }
    .symbol(id)
}

/// Append the rendering of a type reference into `buf`.
pub(crate) fn write_type_ref(
    view: &SymbolView<'_>,
    type_ref: &TypeRef,
    dialect: Dialect,
    opts: DisplayOptions,
    buf: &mut PartBuffer,
) -> Result<()> {
    Writer {
        view,
        dialect,
        opts,
        buf,
    }
    .type_ref(type_ref)
}

/// Append an enum constant expression (`Color.Red`, `A | B`, or a numeric
/// fallback) into `buf`.
pub(crate) fn write_enum_constant(
    view: &SymbolView<'_>,
    enum_type: SymbolId,
    value: i64,
    dialect: Dialect,
    opts: DisplayOptions,
    buf: &mut PartBuffer,
) -> Result<()> {
    Writer {
        view,
        dialect,
        opts,
        buf,
    }
    .enum_constant(enum_type, value)
}

struct Writer<'a, 'b> {
    view: &'a SymbolView<'a>,
    dialect: Dialect,
    opts: DisplayOptions,
    buf: &'b mut PartBuffer,
}

impl<'a> Writer<'a, '_> {
    fn symbol(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        match sym.kind() {
            SymbolKind::Namespace => self.namespace_symbol(id),
            SymbolKind::NamedType => {
                if self.opts.kinds.contains(KindOptions::TYPE_KEYWORD) {
                    match self.dialect {
                        Dialect::CSharp => csharp::type_decl(self, id),
                        Dialect::VisualBasic => vb::type_decl(self, id),
                    }
                } else {
                    self.type_name(id)
                }
            }
            SymbolKind::Method
            | SymbolKind::Property
            | SymbolKind::Field
            | SymbolKind::Event => {
                if self.is_declaration() {
                    match self.dialect {
                        Dialect::CSharp => csharp::member_decl(self, id),
                        Dialect::VisualBasic => vb::member_decl(self, id),
                    }
                } else {
                    self.member_name(id)
                }
            }
            SymbolKind::Parameter => self.parameter(id),
            SymbolKind::TypeParameter => {
                self.buf
                    .name(PartKind::TypeParameterName, sym.name.clone(), id);
                Ok(())
            }
        }
    }

    /// Declaration forms carry modifiers, member types, or declaration
    /// keywords; name forms carry none of those.
    fn is_declaration(&self) -> bool {
        self.opts.kinds.contains(KindOptions::MEMBER_KEYWORD)
            || self.opts.member.contains(MemberOptions::MODIFIERS)
            || self.opts.member.contains(MemberOptions::TYPE)
    }

    fn namespace_symbol(&mut self, id: SymbolId) -> Result<()> {
        if self.opts.kinds.contains(KindOptions::NAMESPACE_KEYWORD) {
            self.buf.keyword(match self.dialect {
                Dialect::CSharp => "namespace",
                Dialect::VisualBasic => "Namespace",
            });
            self.buf.space();
        }
        let mut chain = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let sym = self.view.get(c)?;
            if !sym.name.is_empty() {
                chain.push(c);
            }
            cur = sym.containing;
        }
        chain.reverse();
        for (i, &c) in chain.iter().enumerate() {
            if i > 0 {
                self.buf.punctuation(".");
            }
            let name = self.view.get(c)?.name.clone();
            self.buf.name(PartKind::NamespaceName, name, c);
        }
        Ok(())
    }

    /// A type reference by name: qualification prefix, keyword rendering
    /// for well-known types, then the name and its generic arguments.
    fn type_name(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        if sym.kind() == SymbolKind::TypeParameter {
            self.buf
                .name(PartKind::TypeParameterName, sym.name.clone(), id);
            return Ok(());
        }
        let Some(ty) = sym.as_type() else {
            return Err(FormatError::UnexpectedKind {
                id,
                expected: "a type",
            });
        };
        if self.opts.special_type_keywords {
            if let Some(kw) = special_type_keyword(ty.special, self.dialect) {
                self.buf.push(DisplayPart::symbol(PartKind::Keyword, kw, id));
                return Ok(());
            }
        }
        self.qualifier_prefix(id)?;
        let kind = if ty.type_kind == TypeKind::Enum {
            PartKind::EnumName
        } else {
            PartKind::TypeName
        };
        self.buf.name(kind, sym.name.clone(), id);
        self.type_argument_list(ty)
    }

    fn type_ref(&mut self, type_ref: &TypeRef) -> Result<()> {
        match type_ref {
            TypeRef::Named(id) => self.type_name(*id),
            TypeRef::Array(elem) => {
                self.type_ref(elem)?;
                match self.dialect {
                    Dialect::CSharp => {
                        self.buf.punctuation("[");
                        self.buf.punctuation("]");
                    }
                    Dialect::VisualBasic => {
                        self.buf.punctuation("(");
                        self.buf.punctuation(")");
                    }
                }
                Ok(())
            }
        }
    }

    /// The containment chain before a name, per the requested
    /// qualification depth. The nameless global namespace never prints.
    fn qualifier_prefix(&mut self, id: SymbolId) -> Result<()> {
        let include_namespaces = match self.opts.qualification {
            Qualification::NameOnly => return Ok(()),
            Qualification::ContainingTypes => false,
            Qualification::Full => true,
        };
        let mut chain = Vec::new();
        let mut cur = self.view.get(id)?.containing;
        while let Some(c) = cur {
            let sym = self.view.get(c)?;
            match sym.kind() {
                SymbolKind::NamedType => chain.push(c),
                SymbolKind::Namespace if include_namespaces => chain.push(c),
                SymbolKind::Namespace => break,
                _ => {}
            }
            cur = sym.containing;
        }
        chain.reverse();
        for ancestor in chain {
            let sym = self.view.get(ancestor)?;
            match sym.kind() {
                SymbolKind::Namespace => {
                    if sym.name.is_empty() {
                        continue;
                    }
                    self.buf
                        .name(PartKind::NamespaceName, sym.name.clone(), ancestor);
                }
                SymbolKind::NamedType => {
                    let kind = match sym.as_type() {
                        Some(t) if t.type_kind == TypeKind::Enum => PartKind::EnumName,
                        _ => PartKind::TypeName,
                    };
                    self.buf.name(kind, sym.name.clone(), ancestor);
                    if let Some(t) = sym.as_type() {
                        self.type_argument_list(t)?;
                    }
                }
                _ => continue,
            }
            self.buf.punctuation(".");
        }
        Ok(())
    }

    /// Generic arguments of an instantiation, or the declared type
    /// parameters of a definition.
    fn type_argument_list(&mut self, ty: &TypeData) -> Result<()> {
        if !self
            .opts
            .generics
            .contains(GenericsOptions::TYPE_PARAMETERS)
        {
            return Ok(());
        }
        if !ty.type_args.is_empty() {
            self.open_generic();
            for (i, arg) in ty.type_args.iter().enumerate() {
                if i > 0 {
                    self.buf.punctuation(",");
                    self.buf.space();
                }
                self.type_ref(arg)?;
            }
            self.close_generic();
        } else if !ty.type_params.is_empty() {
            self.type_parameter_list(&ty.type_params)?;
        }
        Ok(())
    }

    fn open_generic(&mut self) {
        match self.dialect {
            Dialect::CSharp => self.buf.punctuation("<"),
            Dialect::VisualBasic => {
                self.buf.punctuation("(");
                self.buf.keyword("Of");
                self.buf.space();
            }
        }
    }

    fn close_generic(&mut self) {
        match self.dialect {
            Dialect::CSharp => self.buf.punctuation(">"),
            Dialect::VisualBasic => self.buf.punctuation(")"),
        }
    }

    /// Declared type parameters with variance; the keyword-verbose dialect
    /// also carries constraints inline (`(Of T As {Class, New})`).
    fn type_parameter_list(&mut self, params: &[SymbolId]) -> Result<()> {
        self.open_generic();
        for (i, &p) in params.iter().enumerate() {
            if i > 0 {
                self.buf.punctuation(",");
                self.buf.space();
            }
            let sym = self.view.get(p)?;
            let SymbolData::TypeParameter(data) = &sym.data else {
                return Err(FormatError::UnexpectedKind {
                    id: p,
                    expected: "a type parameter",
                });
            };
            if self.opts.generics.contains(GenericsOptions::VARIANCE) {
                let kw = match (data.variance, self.dialect) {
                    (Variance::Out, Dialect::CSharp) => Some("out"),
                    (Variance::In, Dialect::CSharp) => Some("in"),
                    (Variance::Out, Dialect::VisualBasic) => Some("Out"),
                    (Variance::In, Dialect::VisualBasic) => Some("In"),
                    (Variance::None, _) => None,
                };
                if let Some(kw) = kw {
                    self.buf.keyword(kw);
                    self.buf.space();
                }
            }
            self.buf
                .name(PartKind::TypeParameterName, sym.name.clone(), p);
            if self.dialect == Dialect::VisualBasic
                && self.opts.generics.contains(GenericsOptions::CONSTRAINTS)
                && !data.constraints.is_empty()
            {
                self.buf.space();
                self.buf.keyword("As");
                self.buf.space();
                if let [single] = data.constraints.as_slice() {
                    self.constraint(single)?;
                } else {
                    self.buf.punctuation("{");
                    for (j, c) in data.constraints.iter().enumerate() {
                        if j > 0 {
                            self.buf.punctuation(",");
                            self.buf.space();
                        }
                        self.constraint(c)?;
                    }
                    self.buf.punctuation("}");
                }
            }
        }
        self.close_generic();
        Ok(())
    }

    /// Trailing `where T : ...` clauses. Only the brace dialect places
    /// constraints after the signature.
    fn where_clauses(&mut self, params: &[SymbolId]) -> Result<()> {
        if self.dialect != Dialect::CSharp
            || !self.opts.generics.contains(GenericsOptions::CONSTRAINTS)
        {
            return Ok(());
        }
        for &p in params {
            let sym = self.view.get(p)?;
            let SymbolData::TypeParameter(data) = &sym.data else {
                continue;
            };
            if data.constraints.is_empty() {
                continue;
            }
            self.buf.space();
            self.buf.keyword("where");
            self.buf.space();
            self.buf
                .name(PartKind::TypeParameterName, sym.name.clone(), p);
            self.buf.space();
            self.buf.punctuation(":");
            self.buf.space();
            for (i, c) in data.constraints.iter().enumerate() {
                if i > 0 {
                    self.buf.punctuation(",");
                    self.buf.space();
                }
                self.constraint(c)?;
            }
        }
        Ok(())
    }

    fn constraint(&mut self, constraint: &Constraint) -> Result<()> {
        match constraint {
            Constraint::ReferenceType => self.buf.keyword(match self.dialect {
                Dialect::CSharp => "class",
                Dialect::VisualBasic => "Class",
            }),
            Constraint::ValueType => self.buf.keyword(match self.dialect {
                Dialect::CSharp => "struct",
                Dialect::VisualBasic => "Structure",
            }),
            Constraint::Constructor => match self.dialect {
                Dialect::CSharp => {
                    self.buf.keyword("new");
                    self.buf.punctuation("(");
                    self.buf.punctuation(")");
                }
                Dialect::VisualBasic => self.buf.keyword("New"),
            },
            Constraint::Type(t) => self.type_ref(t)?,
        }
        Ok(())
    }

    fn parameter_list(&mut self, params: &[SymbolId]) -> Result<()> {
        for (i, &p) in params.iter().enumerate() {
            if i > 0 {
                self.buf.punctuation(",");
                self.buf.space();
            }
            self.parameter(p)?;
        }
        Ok(())
    }

    fn parameter(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        let SymbolData::Parameter(data) = &sym.data else {
            return Err(FormatError::UnexpectedKind {
                id,
                expected: "a parameter",
            });
        };
        let opts = self.opts.parameters;
        match self.dialect {
            Dialect::CSharp => {
                if opts.contains(ParameterOptions::MODIFIERS) {
                    match data.ref_kind {
                        RefKind::Ref => {
                            self.buf.keyword("ref");
                            self.buf.space();
                        }
                        RefKind::Out => {
                            self.buf.keyword("out");
                            self.buf.space();
                        }
                        RefKind::None => {}
                    }
                    if data.is_params {
                        self.buf.keyword("params");
                        self.buf.space();
                    }
                }
                if opts.contains(ParameterOptions::TYPE) {
                    self.type_ref(&data.param_type)?;
                    if opts.contains(ParameterOptions::NAME) {
                        self.buf.space();
                    }
                }
                if opts.contains(ParameterOptions::NAME) {
                    self.buf
                        .name(PartKind::ParameterName, sym.name.clone(), id);
                }
            }
            Dialect::VisualBasic => {
                if opts.contains(ParameterOptions::MODIFIERS) {
                    if data.default.is_some() && opts.contains(ParameterOptions::DEFAULT) {
                        self.buf.keyword("Optional");
                        self.buf.space();
                    }
                    if data.ref_kind != RefKind::None {
                        self.buf.keyword("ByRef");
                        self.buf.space();
                    }
                    if data.is_params {
                        self.buf.keyword("ParamArray");
                        self.buf.space();
                    }
                }
                if opts.contains(ParameterOptions::NAME) {
                    self.buf
                        .name(PartKind::ParameterName, sym.name.clone(), id);
                    if opts.contains(ParameterOptions::TYPE) {
                        self.buf.space();
                        self.buf.keyword("As");
                        self.buf.space();
                    }
                }
                if opts.contains(ParameterOptions::TYPE) {
                    self.type_ref(&data.param_type)?;
                }
            }
        }
        if opts.contains(ParameterOptions::DEFAULT) {
            if let Some(default) = &data.default {
                self.buf.space();
                self.buf.punctuation("=");
                self.buf.space();
                self.constant_value(default)?;
            }
        }
        Ok(())
    }

    /// A compile-time constant as it appears in declarations: parameter
    /// defaults and const field initializers.
    fn constant_value(&mut self, constant: &TypedConstant) -> Result<()> {
        match constant {
            TypedConstant::Primitive(value) => {
                let text = literals::primitive_text(value, self.dialect);
                self.buf
                    .push(DisplayPart::new(literals::primitive_kind(value), text));
                Ok(())
            }
            TypedConstant::Enum { enum_type, value } => self.enum_constant(*enum_type, *value),
            TypedConstant::Type(t) => {
                self.buf.keyword(self.dialect.profile().type_of);
                self.buf.punctuation("(");
                self.type_ref(t)?;
                self.buf.punctuation(")");
                Ok(())
            }
            TypedConstant::Array { ty, values } => {
                self.buf.keyword(self.dialect.profile().new_keyword);
                self.buf.space();
                self.type_ref(ty)?;
                self.buf.space();
                self.buf.punctuation("{");
                self.buf.space();
                if !values.is_empty() {
                    for v in values {
                        self.constant_value(v)?;
                        self.buf.punctuation(",");
                        self.buf.space();
                    }
                    self.buf.remove_end();
                    self.buf.remove_end();
                    self.buf.space();
                }
                self.buf.punctuation("}");
                Ok(())
            }
            TypedConstant::Null => {
                self.buf.keyword(self.dialect.profile().null_literal);
                Ok(())
            }
        }
    }

    /// An enum value as an expression: the matching member, a flag
    /// combination over the named members, or a bare numeric fallback.
    fn enum_constant(&mut self, enum_type: SymbolId, value: i64) -> Result<()> {
        let sym = self.view.get(enum_type)?;
        let Some(ty) = sym.as_type() else {
            return Err(FormatError::UnexpectedKind {
                id: enum_type,
                expected: "an enum type",
            });
        };
        let mut named = Vec::new();
        for &m in &ty.members {
            let member = self.view.get(m)?;
            if let SymbolData::Field(f) = &member.data {
                if let Some(TypedConstant::Primitive(PrimitiveValue::Int(v))) = &f.constant {
                    named.push((m, *v));
                }
            }
        }
        if let Some(&(m, _)) = named.iter().find(|&&(_, v)| v == value) {
            return self.enum_member_ref(enum_type, m);
        }
        let mut chosen = Vec::new();
        let mut remaining = value;
        for &(m, v) in &named {
            if v != 0 && (remaining & v) == v {
                chosen.push(m);
                remaining &= !v;
            }
        }
        if remaining == 0 && !chosen.is_empty() {
            for (i, &m) in chosen.iter().enumerate() {
                if i > 0 {
                    self.buf.space();
                    match self.dialect {
                        Dialect::CSharp => self.buf.punctuation("|"),
                        Dialect::VisualBasic => self.buf.keyword("Or"),
                    }
                    self.buf.space();
                }
                self.enum_member_ref(enum_type, m)?;
            }
            return Ok(());
        }
        self.buf
            .push(DisplayPart::new(PartKind::NumericLiteral, value.to_string()));
        Ok(())
    }

    /// One enum member reference, qualified by its enum unless the format
    /// asks for bare names.
    fn enum_member_ref(&mut self, enum_type: SymbolId, member: SymbolId) -> Result<()> {
        let name = self.view.get(member)?.name.clone();
        if self.opts.qualification != Qualification::NameOnly {
            self.type_name(enum_type)?;
            self.buf.punctuation(".");
        }
        self.buf.name(PartKind::EnumMemberName, name, member);
        Ok(())
    }

    /// Short name rendering for members, per the name formats.
    fn member_name(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        // Containing type first: Widget.IFoo.Frob, never IFoo.Widget.Frob.
        if self.opts.member.contains(MemberOptions::CONTAINING_TYPE) {
            if let Some(parent) = self.containing_type_of(id)? {
                self.type_name(parent)?;
                self.buf.punctuation(".");
            }
        }
        if self.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
            if let Some(&impl_id) = sym.explicit_impls().first() {
                self.explicit_interface_prefix(impl_id)?;
            }
        }
        match &sym.data {
            SymbolData::Method(m) => {
                self.method_name_token(id, sym, m.is_constructor)?;
                if self
                    .opts
                    .generics
                    .contains(GenericsOptions::TYPE_PARAMETERS)
                    && !m.type_params.is_empty()
                {
                    self.type_parameter_list(&m.type_params)?;
                }
                if self.opts.member.contains(MemberOptions::PARAMETERS) {
                    self.buf.punctuation("(");
                    self.parameter_list(&m.parameters)?;
                    self.buf.punctuation(")");
                }
            }
            SymbolData::Property(p) => {
                self.buf.name(PartKind::MemberName, sym.name.clone(), id);
                if self.opts.member.contains(MemberOptions::PARAMETERS) && !p.parameters.is_empty()
                {
                    let (open, close) = match self.dialect {
                        Dialect::CSharp => ("[", "]"),
                        Dialect::VisualBasic => ("(", ")"),
                    };
                    self.buf.punctuation(open);
                    self.parameter_list(&p.parameters)?;
                    self.buf.punctuation(close);
                }
            }
            SymbolData::Field(_) => {
                let kind = if self.is_enum_member(sym)? {
                    PartKind::EnumMemberName
                } else {
                    PartKind::MemberName
                };
                self.buf.name(kind, sym.name.clone(), id);
            }
            _ => {
                self.buf.name(PartKind::MemberName, sym.name.clone(), id);
            }
        }
        Ok(())
    }

    /// Constructors display under their type's name in the brace dialect
    /// and as `New` in the keyword dialect.
    fn method_name_token(
        &mut self,
        id: SymbolId,
        sym: &Symbol,
        is_constructor: bool,
    ) -> Result<()> {
        let text = if is_constructor {
            match self.dialect {
                Dialect::CSharp => match sym.containing {
                    Some(parent) => self.view.get(parent)?.name.clone(),
                    None => sym.name.clone(),
                },
                Dialect::VisualBasic => "New".to_string(),
            }
        } else {
            sym.name.clone()
        };
        self.buf.name(PartKind::MemberName, text, id);
        Ok(())
    }

    /// `IFoo.` before an explicitly implemented member's name.
    fn explicit_interface_prefix(&mut self, impl_id: SymbolId) -> Result<()> {
        if let Some(iface) = self.containing_type_of(impl_id)? {
            self.type_name(iface)?;
            self.buf.punctuation(".");
        }
        Ok(())
    }

    /// Member accessor keyword, shown only when the accessor's
    /// accessibility differs from the member's own.
    fn accessor_modifier(&mut self, member: &Symbol, accessor: SymbolId) -> Result<()> {
        let accessor = self.view.get(accessor)?;
        if accessor.accessibility == member.accessibility {
            return Ok(());
        }
        let profile = self.dialect.profile();
        let kw = match accessor.accessibility {
            Accessibility::Public => Some(profile.public_keyword),
            Accessibility::Protected | Accessibility::ProtectedOrInternal => {
                Some(profile.protected_keyword)
            }
            _ => None,
        };
        if let Some(kw) = kw {
            self.buf.keyword(kw);
            self.buf.space();
        }
        Ok(())
    }

    fn member_modifiers(&mut self, sym: &Symbol) {
        let words: &[(bool, &str, &str)] = &[
            (sym.is_static, "static", "Shared"),
            (sym.is_abstract, "abstract", "MustOverride"),
            (sym.is_virtual, "virtual", "Overridable"),
            (sym.is_sealed, "sealed", "NotOverridable"),
            (sym.is_override, "override", "Overrides"),
        ];
        for &(on, cs, vb) in words {
            if on {
                self.buf.keyword(match self.dialect {
                    Dialect::CSharp => cs,
                    Dialect::VisualBasic => vb,
                });
                self.buf.space();
            }
        }
    }

    fn containing_type_of(&self, id: SymbolId) -> Result<Option<SymbolId>> {
        let mut cur = self.view.get(id)?.containing;
        while let Some(c) = cur {
            let sym = self.view.get(c)?;
            if sym.kind() == SymbolKind::NamedType {
                return Ok(Some(c));
            }
            cur = sym.containing;
        }
        Ok(None)
    }

    fn is_enum_member(&self, sym: &Symbol) -> Result<bool> {
        if sym.kind() != SymbolKind::Field {
            return Ok(false);
        }
        match sym.containing {
            Some(c) => Ok(self
                .view
                .get(c)?
                .as_type()
                .is_some_and(|t| t.type_kind == TypeKind::Enum)),
            None => Ok(false),
        }
    }
}

/// The dialect keyword for a well-known type, when one exists.
fn special_type_keyword(special: SpecialType, dialect: Dialect) -> Option<&'static str> {
    let (cs, vb) = match special {
        SpecialType::Object => ("object", "Object"),
        SpecialType::Boolean => ("bool", "Boolean"),
        SpecialType::Char => ("char", "Char"),
        SpecialType::SByte => ("sbyte", "SByte"),
        SpecialType::Byte => ("byte", "Byte"),
        SpecialType::Int16 => ("short", "Short"),
        SpecialType::UInt16 => ("ushort", "UShort"),
        SpecialType::Int32 => ("int", "Integer"),
        SpecialType::UInt32 => ("uint", "UInteger"),
        SpecialType::Int64 => ("long", "Long"),
        SpecialType::UInt64 => ("ulong", "ULong"),
        SpecialType::Single => ("float", "Single"),
        SpecialType::Double => ("double", "Double"),
        SpecialType::Decimal => ("decimal", "Decimal"),
        SpecialType::String => ("string", "String"),
        SpecialType::Void => ("void", "Void"),
        SpecialType::None | SpecialType::ValueType => return None,
    };
    Some(match dialect {
        Dialect::CSharp => cs,
        Dialect::VisualBasic => vb,
    })
}
