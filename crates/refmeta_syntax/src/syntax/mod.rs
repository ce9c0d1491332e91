//! The declaration builder.
//!
//! Assembles one complete declaration line for a symbol: attributes,
//! accessibility, class modifiers, the core signature from the dialect
//! engine, relocated generic constraints, and the base type/interface
//! list. Steps append to one buffer in a fixed order; the constraint
//! clause is the only piece that moves, cut out after the signature and
//! re-appended after the base list.


use refmeta_model::{
    Accessibility, AttributeApplication, DisplayPart, PartKind, SpecialType, SymbolData,
    SymbolId, SymbolKind, SymbolTable, TypeData, TypeKind,
};

use crate::access::{displayed_accessibility, hide_accessibility, includable};
use crate::buffer::PartBuffer;
use crate::constant::write_typed_constant;
use crate::dialect::Dialect;
use crate::engine;
use crate::error::Result;
use crate::options::DisplayOptions;
use crate::view::SymbolView;
use crate::AttributeFilter;

/// Build the full declaration token sequence for `id`.
pub(crate) fn build_declaration(
    table: &SymbolTable,
    id: SymbolId,
    dialect: Dialect,
    include_attribute: &AttributeFilter,
) -> Result<Vec<DisplayPart>> {
    let mut builder = SyntaxBuilder {
        view: SymbolView::new(table),
        dialect,
        include_attribute,
        buf: PartBuffer::new(),
    };
    builder.add_attributes(id)?;
    builder.add_accessibility(id)?;
    builder.add_class_modifiers(id)?;
    builder.hide_property_accessors(id)?;
    builder.add_core_signature(id)?;
    let constraints = builder.remove_named_type_constraints(id)?;
    builder.add_base_types(id)?;
    builder.buf.extend(constraints);
    Ok(builder.buf.finish())
}

struct SyntaxBuilder<'a> {
    view: SymbolView<'a>,
    dialect: Dialect,
    include_attribute: &'a AttributeFilter,
    buf: PartBuffer,
}

impl SyntaxBuilder<'_> {
    fn add_attributes(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        if sym.kind() != SymbolKind::NamedType {
            return Ok(());
        }
        let attrs = sym.attributes.clone();
        for attr in &attrs {
            let (Some(attr_type), Some(ctor)) = (attr.attribute_type, attr.constructor) else {
                continue;
            };
            if !(self.include_attribute)(self.view.table(), ctor) {
                continue;
            }
            self.add_attribute(attr_type, attr)?;
        }
        Ok(())
    }

    fn add_attribute(&mut self, attr_type: SymbolId, attr: &AttributeApplication) -> Result<()> {
        let profile = self.dialect.profile();
        self.buf.keyword(profile.attribute_open);

        let mut name = PartBuffer::new();
        engine::write_symbol(
            &self.view,
            attr_type,
            self.dialect,
            DisplayOptions::type_name(),
            &mut name,
        )?;
        for mut part in name.finish() {
            // The conventional `Attribute` suffix never shows between
            // the brackets.
            if part.kind == PartKind::TypeName {
                if let Some(stripped) = part.text.strip_suffix("Attribute") {
                    part.text = stripped.to_string();
                }
            }
            self.buf.push(part);
        }

        self.add_attribute_arguments(attr)?;
        self.buf.keyword(profile.attribute_close);
        self.buf.line_break();
        Ok(())
    }

    fn add_attribute_arguments(&mut self, attr: &AttributeApplication) -> Result<()> {
        if attr.args.is_empty() && attr.named_args.is_empty() {
            return Ok(());
        }
        let profile = self.dialect.profile();
        self.buf.punctuation("(");
        for arg in &attr.args {
            write_typed_constant(&self.view, arg, self.dialect, &mut self.buf)?;
            self.buf.punctuation(",");
            self.buf.space();
        }
        for (name, arg) in &attr.named_args {
            self.buf
                .push(DisplayPart::new(PartKind::ParameterName, name.clone()));
            if profile.spaced_named_arg_assign {
                self.buf.space();
                self.buf.punctuation(profile.named_arg_assign);
                self.buf.space();
            } else {
                self.buf.punctuation(profile.named_arg_assign);
            }
            write_typed_constant(&self.view, arg, self.dialect, &mut self.buf)?;
            self.buf.punctuation(",");
            self.buf.space();
        }
        self.buf.remove_end();
        self.buf.remove_end();
        self.buf.punctuation(")");
        Ok(())
    }

    fn add_accessibility(&mut self, id: SymbolId) -> Result<()> {
        if hide_accessibility(&self.view, id)? {
            return Ok(());
        }
        let profile = self.dialect.profile();
        let kw = match displayed_accessibility(&self.view, id)? {
            Some(Accessibility::Public) => Some(profile.public_keyword),
            Some(Accessibility::Protected | Accessibility::ProtectedOrInternal) => {
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

    /// `static`, `abstract`, `sealed` on classes, in that order. The
    /// engine owns member modifiers; type-level ones are layered here.
    fn add_class_modifiers(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        if sym.kind() != SymbolKind::NamedType
            || sym.as_type().map(|t| t.type_kind) != Some(TypeKind::Class)
        {
            return Ok(());
        }
        let (is_static, is_abstract, is_sealed) = (sym.is_static, sym.is_abstract, sym.is_sealed);
        let profile = self.dialect.profile();
        if is_static {
            if let Some(kw) = profile.static_modifier {
                self.buf.keyword(kw);
                self.buf.space();
            }
        }
        if is_abstract {
            self.buf.keyword(profile.abstract_modifier);
            self.buf.space();
        }
        if is_sealed {
            self.buf.keyword(profile.sealed_modifier);
            self.buf.space();
        }
        Ok(())
    }

    /// Replace a property, for this call only, with a view whose
    /// accessors carry their displayed accessibility: an accessor outside
    /// the documented surface is dropped, one whose displayed
    /// accessibility differs from its declared one is re-labeled, and one
    /// that matches is kept untouched.
    fn hide_property_accessors(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?.clone();
        let SymbolData::Property(p) = &sym.data else {
            return Ok(());
        };
        let Some(displayed) = displayed_accessibility(&self.view, id)? else {
            return Ok(());
        };
        let getter = self.display_accessor(p.getter)?;
        let setter = self.display_accessor(p.setter)?;
        let mut replacement = sym;
        replacement.accessibility = displayed;
        if let SymbolData::Property(data) = &mut replacement.data {
            data.getter = getter;
            data.setter = setter;
        }
        self.view.shadow(id, replacement);
        Ok(())
    }

    fn display_accessor(&mut self, accessor: Option<SymbolId>) -> Result<Option<SymbolId>> {
        let Some(id) = accessor else {
            return Ok(None);
        };
        let Some(displayed) = displayed_accessibility(&self.view, id)? else {
            return Ok(None);
        };
        let declared = self.view.get(id)?.accessibility;
        if displayed != declared {
            let mut replacement = self.view.get(id)?.clone();
            replacement.accessibility = displayed;
            self.view.shadow(id, replacement);
        }
        Ok(Some(id))
    }

    /// The dialect engine's signature, copied with two rewrites: bare
    /// enum member references gain their enum's name, and a static class
    /// becomes `Module` in the keyword dialect.
    fn add_core_signature(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        let is_field = sym.kind() == SymbolKind::Field;
        let static_type = sym.kind() == SymbolKind::NamedType && sym.is_static;

        let mut core = PartBuffer::new();
        engine::write_symbol(
            &self.view,
            id,
            self.dialect,
            DisplayOptions::syntax(),
            &mut core,
        )?;

        let module_keyword = self.dialect.profile().module_keyword;
        for part in core.finish() {
            if !is_field && part.kind == PartKind::EnumMemberName {
                if let Some(member) = part.symbol {
                    if let Some(en) = self.view.get(member)?.containing {
                        let name = self.view.get(en)?.name.clone();
                        self.buf.name(PartKind::EnumName, name, en);
                        self.buf.punctuation(".");
                    }
                }
                self.buf.push(part);
                continue;
            }
            if static_type && part.kind == PartKind::Keyword && part.text == "Class" {
                if let Some(kw) = module_keyword {
                    self.buf.keyword(kw);
                    continue;
                }
            }
            self.buf.push(part);
        }
        Ok(())
    }

    /// Cut a trailing `where ...` clause out of the buffer so it can be
    /// re-appended after the base list. Member constraints stay in place;
    /// only named types grow a base list.
    fn remove_named_type_constraints(&mut self, id: SymbolId) -> Result<Vec<DisplayPart>> {
        if self.view.get(id)?.kind() != SymbolKind::NamedType {
            return Ok(Vec::new());
        }
        let at = self
            .buf
            .as_slice()
            .iter()
            .position(|p| p.kind == PartKind::Keyword && p.text == "where");
        let Some(at) = at else {
            return Ok(Vec::new());
        };
        let tail = self.buf.split_off(at);
        // The space that sat before `where` stays behind; drop it.
        self.buf.remove_end();
        let mut held = Vec::with_capacity(tail.len() + 1);
        held.push(DisplayPart::space());
        held.extend(tail);
        Ok(held)
    }

    fn add_base_types(&mut self, id: SymbolId) -> Result<()> {
        let sym = self.view.get(id)?;
        if sym.kind() != SymbolKind::NamedType {
            return Ok(());
        }
        let Some(ty) = sym.as_type() else {
            return Ok(());
        };
        let ty: TypeData = ty.clone();

        let mut pending: Vec<SymbolId> = Vec::new();
        match ty.type_kind {
            TypeKind::Enum => {
                if let Some(underlying) = ty.enum_underlying {
                    if self.special_of(underlying)? != Some(SpecialType::Int32) {
                        match self.dialect {
                            Dialect::VisualBasic => {
                                self.buf.space();
                                self.buf.keyword("As");
                                self.buf.space();
                                self.add_type_name(underlying)?;
                            }
                            Dialect::CSharp => pending.push(underlying),
                        }
                    }
                }
            }
            TypeKind::Class | TypeKind::Interface | TypeKind::Struct => {
                if let Some(base) = ty.base_type {
                    let special = self.special_of(base)?;
                    if !matches!(special, Some(SpecialType::Object | SpecialType::ValueType)) {
                        match self.dialect {
                            Dialect::VisualBasic => {
                                self.buf.space();
                                self.buf.keyword("Inherits");
                                self.buf.space();
                                self.add_type_name(base)?;
                            }
                            Dialect::CSharp => pending.push(base),
                        }
                    }
                }
                for &iface in &ty.interfaces {
                    if includable(&self.view, iface)? {
                        pending.push(iface);
                    }
                }
            }
            TypeKind::Delegate => {}
        }

        if pending.is_empty() {
            return Ok(());
        }
        self.buf.space();
        match self.dialect {
            Dialect::CSharp => self.buf.punctuation(":"),
            Dialect::VisualBasic => self.buf.keyword(if ty.type_kind == TypeKind::Interface {
                "Inherits"
            } else {
                "Implements"
            }),
        }
        self.buf.space();
        for base in pending {
            self.add_type_name(base)?;
            self.buf.punctuation(",");
            self.buf.space();
        }
        self.buf.remove_end();
        self.buf.remove_end();
        Ok(())
    }

    fn add_type_name(&mut self, id: SymbolId) -> Result<()> {
        engine::write_symbol(
            &self.view,
            id,
            self.dialect,
            DisplayOptions::type_name(),
            &mut self.buf,
        )
    }

    fn special_of(&self, id: SymbolId) -> Result<Option<SpecialType>> {
        Ok(self.view.get(id)?.as_type().map(|t| t.special))
    }
}
