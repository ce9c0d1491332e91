//! Declaration grammar of the keyword-verbose dialect.
//!
//! `Sub`/`Function` member forms, `As` type clauses, inline generic
//! constraints, and trailing `Implements` clauses for explicitly
//! implemented members. The static-class `Module` keyword substitution is
//! not done here; the declaration builder rewrites the `Class` keyword
//! while copying.

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
        w.buf.keyword("Delegate");
        w.buf.space();
        let invoke = match ty.delegate_invoke {
            Some(invoke) => match &w.view.get(invoke)?.data {
                SymbolData::Method(m) => Some(m),
                _ => None,
            },
            None => None,
        };
        let returns = invoke.and_then(|m| m.return_type.as_ref());
        w.buf.keyword(if returns.is_some() { "Function" } else { "Sub" });
        w.buf.space();
        w.buf.name(PartKind::TypeName, sym.name.clone(), id);
        if !ty.type_params.is_empty() {
            w.type_parameter_list(&ty.type_params)?;
        }
        w.buf.punctuation("(");
        if let Some(m) = invoke {
            w.parameter_list(&m.parameters)?;
        }
        w.buf.punctuation(")");
        if let Some(r) = returns {
            w.buf.space();
            w.buf.keyword("As");
            w.buf.space();
            w.type_ref(r)?;
        }
        return Ok(());
    }

    w.buf.keyword(match ty.type_kind {
        TypeKind::Class => "Class",
        TypeKind::Interface => "Interface",
        TypeKind::Struct => "Structure",
        TypeKind::Enum => "Enum",
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
    if w.opts.kinds.contains(KindOptions::MEMBER_KEYWORD) {
        let kw = if m.is_constructor || m.return_type.is_none() {
            "Sub"
        } else {
            "Function"
        };
        w.buf.keyword(kw);
        w.buf.space();
    }
    w.method_name_token(id, sym, m.is_constructor)?;
    if !m.type_params.is_empty() {
        w.type_parameter_list(&m.type_params)?;
    }
    w.buf.punctuation("(");
    w.parameter_list(&m.parameters)?;
    w.buf.punctuation(")");
    if !m.is_constructor {
        if let Some(r) = &m.return_type {
            if w.opts.member.contains(MemberOptions::TYPE) {
                w.buf.space();
                w.buf.keyword("As");
                w.buf.space();
                w.type_ref(r)?;
            }
        }
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        implements_clause(w, sym.explicit_impls())?;
    }
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
    if !p.parameters.is_empty() {
        w.buf.keyword("Default");
        w.buf.space();
    }
    match (p.getter, p.setter) {
        (Some(_), None) => {
            w.buf.keyword("ReadOnly");
            w.buf.space();
        }
        (None, Some(_)) => {
            w.buf.keyword("WriteOnly");
            w.buf.space();
        }
        _ => {}
    }
    if w.opts.kinds.contains(KindOptions::MEMBER_KEYWORD) {
        w.buf.keyword("Property");
        w.buf.space();
    }
    w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    if !p.parameters.is_empty() {
        w.buf.punctuation("(");
        w.parameter_list(&p.parameters)?;
        w.buf.punctuation(")");
    }
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.buf.space();
        w.buf.keyword("As");
        w.buf.space();
        w.type_ref(&p.property_type)?;
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        implements_clause(w, sym.explicit_impls())?;
    }
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
            w.buf.keyword("Const");
            w.buf.space();
        } else {
            if sym.is_static {
                w.buf.keyword("Shared");
                w.buf.space();
            }
            if f.is_read_only {
                w.buf.keyword("ReadOnly");
                w.buf.space();
            }
        }
    }
    w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.buf.space();
        w.buf.keyword("As");
        w.buf.space();
        w.type_ref(&f.field_type)?;
    }
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
        w.buf.keyword("Event");
        w.buf.space();
    }
    w.buf.name(PartKind::MemberName, sym.name.clone(), id);
    if w.opts.member.contains(MemberOptions::TYPE) {
        w.buf.space();
        w.buf.keyword("As");
        w.buf.space();
        w.type_ref(&e.event_type)?;
    }
    if w.opts.member.contains(MemberOptions::EXPLICIT_INTERFACE) {
        implements_clause(w, sym.explicit_impls())?;
    }
    Ok(())
}

/// Trailing `Implements IFoo.Bar` clause for explicitly implemented
/// members.
fn implements_clause(w: &mut Writer<'_, '_>, impls: &[SymbolId]) -> Result<()> {
    if impls.is_empty() {
        return Ok(());
    }
    w.buf.space();
    w.buf.keyword("Implements");
    w.buf.space();
    for (i, &member) in impls.iter().enumerate() {
        if i > 0 {
            w.buf.punctuation(",");
            w.buf.space();
        }
        if let Some(iface) = w.containing_type_of(member)? {
            w.type_name(iface)?;
            w.buf.punctuation(".");
        }
        let name = w.view.get(member)?.name.clone();
        w.buf.name(PartKind::MemberName, name, member);
    }
    Ok(())
}
