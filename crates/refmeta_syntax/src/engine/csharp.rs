//! Declaration grammar of the brace/semicolon dialect.
//!
//! Emits the core signature only: type keyword and name, member modifiers,
//! return and member types, parameter lists, accessor lists, and trailing
//! `where` clauses. Accessibility, class modifiers, attributes, and base
//! lists are layered on by the declaration builder.

use refmeta_model::{PartKind, SymbolData, SymbolId, TypeKind};

use crate::error::{FormatError, Result};
use crate::options::{KindOptions, MemberOptions};

use super::Writer;

pub(super) fn type_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    let Some(ty) = sym.as_type() else {
        return Err(FormatError::UnexpectedKind {
            id,
            expected: "a named type",
        });
    };

    if ty.type_kind == TypeKind::Delegate {
        w.buf.keyword("delegate");
        w.buf.space();
        if let Some(invoke) = ty.delegate_invoke {
            let invoke_sym = w.view.get(invoke)?;
            if let SymbolData::Method(m) = &invoke_sym.data {
                match &m.return_type {
                    Some(r) => w.type_ref(r)?,
                    None => w.buf.keyword("void"),
                }
                w.buf.space();
                w.buf.name(PartKind::TypeName, sym.name.clone(), id);
                if !ty.type_params.is_empty() {
                    w.type_parameter_list(&ty.type_params)?;
                }
                w.buf.punctuation("(");
                w.parameter_list(&m.parameters)?;
                w.buf.punctuation(")");
                w.where_clauses(&ty.type_params)?;
                return Ok(());
            }
        }
        // No invoke signature recorded; fall back to an empty one.
        w.buf.keyword("void");
        w.buf.space();
        w.buf.name(PartKind::TypeName, sym.name.clone(), id);
        w.buf.punctuation("(");
        w.buf.punctuation(")");
        return Ok(());
    }

    w.buf.keyword(match ty.type_kind {
        TypeKind::Class => "class",
        TypeKind::Interface => "interface",
        TypeKind::Struct => "struct",
        TypeKind::Enum => "enum",
        TypeKind::Delegate => unreachable!("handled above"),
    });
    w.buf.space();
    let kind = if ty.type_kind == TypeKind::Enum {
        PartKind::EnumName
    } else {
        PartKind::TypeName
    };
    w.buf.name(kind, sym.name.clone(), id);
    if !ty.type_params.is_empty() {
        w.type_parameter_list(&ty.type_params)?;
    }
    w.where_clauses(&ty.type_params)?;
    Ok(())
}

pub(super) fn member_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    match &sym.data {
        SymbolData::Method(_) => method_decl(w, id),
        SymbolData::Property(_) => property_decl(w, id),
        SymbolData::Field(_) => field_decl(w, id),
        SymbolData::Event(_) => event_decl(w, id),
        _ => Err(FormatError::UnexpectedKind {
            id,
            expected: "a member",
        }),
    }
}

fn method_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    let SymbolData::Method(m) = &sym.data else {
        return Err(FormatError::UnexpectedKind {
            id,
            expected: "a method",
        });
    };
    if w.opts.member.contains(MemberOptions::MODIFIERS) {
        w.member_modifiers(sym);
    }
    if !m.is_constructor && w.opts.member.contains(MemberOptions::TYPE) {
        match &m.return_type {
            Some(r) => w.type_ref(r)?,
            None => w.buf.keyword("void"),
        }
        w.buf.space();
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        if let Some(&impl_id) = sym.explicit_impls().first() {
            w.explicit_interface_prefix(impl_id)?;
        }
    }
    w.method_name_token(id, sym, m.is_constructor)?;
    if !m.type_params.is_empty() {
        w.type_parameter_list(&m.type_params)?;
    }
    w.buf.punctuation("(");
    w.parameter_list(&m.parameters)?;
    w.buf.punctuation(")");
    w.where_clauses(&m.type_params)?;
    Ok(())
}

fn property_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    let SymbolData::Property(p) = &sym.data else {
        return Err(FormatError::UnexpectedKind {
            id,
            expected: "a property",
        });
    };
    if w.opts.member.contains(MemberOptions::MODIFIERS) {
        w.member_modifiers(sym);
    }
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.type_ref(&p.property_type)?;
        w.buf.space();
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        if let Some(&impl_id) = sym.explicit_impls().first() {
            w.explicit_interface_prefix(impl_id)?;
        }
    }
    if p.parameters.is_empty() {
        w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    } else {
        w.buf.keyword("this");
        w.buf.punctuation("[");
        w.parameter_list(&p.parameters)?;
        w.buf.punctuation("]");
    }
    w.buf.space();
    w.buf.punctuation("{");
    for (accessor, kw) in [(p.getter, "get"), (p.setter, "set")] {
        if let Some(accessor) = accessor {
            w.buf.space();
            w.accessor_modifier(sym, accessor)?;
            w.buf.keyword(kw);
            w.buf.punctuation(";");
        }
    }
    w.buf.space();
    w.buf.punctuation("}");
    Ok(())
}

fn field_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    let SymbolData::Field(f) = &sym.data else {
        return Err(FormatError::UnexpectedKind {
            id,
            expected: "a field",
        });
    };

    // Enum members are a bare name plus their value.
    if w.is_enum_member(sym)? {
        w.buf.name(PartKind::EnumMemberName, sym.name.clone(), id);
        if w.opts.member.contains(MemberOptions::CONSTANT_VALUE) {
            if let Some(constant) = &f.constant {
                w.buf.space();
                w.buf.punctuation("=");
                w.buf.space();
                w.constant_value(constant)?;
            }
        }
        return Ok(());
    }

    if w.opts.member.contains(MemberOptions::MODIFIERS) {
        if f.is_const {
            w.buf.keyword("const");
            w.buf.space();
        } else {
            if sym.is_static {
                w.buf.keyword("static");
                w.buf.space();
            }
            if f.is_read_only {
                w.buf.keyword("readonly");
                w.buf.space();
            }
        }
    }
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.type_ref(&f.field_type)?;
        w.buf.space();
    }
    w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    if f.is_const && w.opts.member.contains(MemberOptions::CONSTANT_VALUE) {
        if let Some(constant) = &f.constant {
            w.buf.space();
            w.buf.punctuation("=");
            w.buf.space();
            w.constant_value(constant)?;
        }
    }
    Ok(())
}

fn event_decl(w: &mut Writer<'_, '_>, id: SymbolId) -> Result<()> {
    let sym = w.view.get(id)?;
    let SymbolData::Event(e) = &sym.data else {
        return Err(FormatError::UnexpectedKind {
            id,
            expected: "an event",
        });
    };
    if w.opts.member.contains(MemberOptions::MODIFIERS) {
        w.member_modifiers(sym);
    }
    if w.opts.kinds.contains(KindOptions::MEMBER_KEYWORD) {
        w.buf.keyword("event");
        w.buf.space();
    }
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.type_ref(&e.event_type)?;
        w.buf.space();
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        if let Some(&impl_id) = sym.explicit_impls().first() {
            w.explicit_interface_prefix(impl_id)?;
        }
    }
    w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    Ok(())
}
