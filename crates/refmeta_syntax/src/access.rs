//! Accessibility display policy.
//!
//! Reference documentation only distinguishes public from protected.
//! Protected-or-internal collapses to protected; internal and private
//! surface area is absent entirely. A symbol is includable only when its
//! own accessibility maps to something displayable and every containing
//! symbol is includable too.

use refmeta_model::{Accessibility, SymbolId, SymbolKind, SymbolTable, TypeKind};

use crate::error::Result;
use crate::view::SymbolView;

/// The accessibility a symbol displays with, or `None` when the symbol is
/// outside the documented surface.
pub fn display_accessibility(
    table: &SymbolTable,
    id: SymbolId,
) -> Result<Option<Accessibility>> {
    displayed_accessibility(&SymbolView::new(table), id)
}

/// Whether the symbol and its whole containment chain are displayable.
pub fn is_includable(table: &SymbolTable, id: SymbolId) -> Result<bool> {
    includable(&SymbolView::new(table), id)
}

pub(crate) fn displayed_accessibility(
    view: &SymbolView<'_>,
    id: SymbolId,
) -> Result<Option<Accessibility>> {
    let sym = view.get(id)?;
    Ok(match sym.accessibility {
        Accessibility::Public => Some(Accessibility::Public),
        Accessibility::Protected | Accessibility::ProtectedOrInternal => {
            Some(Accessibility::Protected)
        }
        Accessibility::NotApplicable => Some(Accessibility::NotApplicable),
        Accessibility::Internal | Accessibility::Private => None,
    })
}

pub(crate) fn includable(view: &SymbolView<'_>, id: SymbolId) -> Result<bool> {
    if displayed_accessibility(view, id)?.is_none() {
        return Ok(false);
    }
    match view.get(id)?.containing {
        Some(parent) => includable(view, parent),
        None => Ok(true),
    }
}

/// Whether the accessibility keyword is left off a member's declaration:
/// interface members, enum members, and members declared through explicit
/// interface implementation never carry one.
pub(crate) fn hide_accessibility(view: &SymbolView<'_>, id: SymbolId) -> Result<bool> {
    let sym = view.get(id)?;
    if !sym.explicit_impls().is_empty() {
        return Ok(true);
    }
    let Some(parent) = sym.containing else {
        return Ok(false);
    };
    let parent = view.get(parent)?;
    if parent.kind() != SymbolKind::NamedType {
        return Ok(false);
    }
    let Some(ty) = parent.as_type() else {
        return Ok(false);
    };
    Ok(match ty.type_kind {
        // Only interface members lose the keyword; a type nested inside
        // an interface still carries its own accessibility.
        TypeKind::Interface => matches!(
            sym.kind(),
            SymbolKind::Method | SymbolKind::Property | SymbolKind::Event
        ),
        TypeKind::Enum => sym.kind() == SymbolKind::Field,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use refmeta_model::{
        FieldData, MethodData, Symbol, SymbolData, SymbolTable, TypeData, TypeRef,
    };

    fn field(ty: SymbolId) -> SymbolData {
        SymbolData::Field(FieldData {
            field_type: TypeRef::Named(ty),
            is_const: true,
            is_read_only: false,
            constant: None,
        })
    }

    #[test]
    fn protected_or_internal_collapses_to_protected() {
        let mut table = SymbolTable::new();
        let mut sym = Symbol::new("M", SymbolData::Method(MethodData::default()));
        sym.accessibility = Accessibility::ProtectedOrInternal;
        let id = table.add(sym);
        assert_eq!(
            display_accessibility(&table, id).unwrap(),
            Some(Accessibility::Protected)
        );
    }

    #[test]
    fn private_parent_excludes_public_child() {
        let mut table = SymbolTable::new();
        let mut outer = Symbol::new("Outer", SymbolData::Type(TypeData::default()));
        outer.accessibility = Accessibility::Private;
        let outer = table.add(outer);
        let mut inner = Symbol::new("Inner", SymbolData::Type(TypeData::default()));
        inner.containing = Some(outer);
        let inner = table.add(inner);
        assert!(!is_includable(&table, inner).unwrap());
    }

    #[test]
    fn interface_members_and_enum_members_hide_the_keyword() {
        let mut table = SymbolTable::new();
        let iface = table.add(Symbol::new(
            "IFoo",
            SymbolData::Type(TypeData {
                type_kind: TypeKind::Interface,
                ..TypeData::default()
            }),
        ));
        let mut m = Symbol::new("Bar", SymbolData::Method(MethodData::default()));
        m.containing = Some(iface);
        let m = table.add(m);

        let en = table.add(Symbol::new(
            "Color",
            SymbolData::Type(TypeData {
                type_kind: TypeKind::Enum,
                ..TypeData::default()
            }),
        ));
        let mut red = Symbol::new("Red", field(en));
        red.containing = Some(en);
        let red = table.add(red);

        let cls = table.add(Symbol::new("C", SymbolData::Type(TypeData::default())));
        let mut normal = Symbol::new("Baz", SymbolData::Method(MethodData::default()));
        normal.containing = Some(cls);
        let normal = table.add(normal);

        let view = SymbolView::new(&table);
        assert!(hide_accessibility(&view, m).unwrap());
        assert!(hide_accessibility(&view, red).unwrap());
        assert!(!hide_accessibility(&view, normal).unwrap());
    }

    #[test]
    fn types_nested_in_interfaces_keep_the_keyword() {
        let mut table = SymbolTable::new();
        let iface = table.add(Symbol::new(
            "IFoo",
            SymbolData::Type(TypeData {
                type_kind: TypeKind::Interface,
                ..TypeData::default()
            }),
        ));
        let mut nested = Symbol::new("Nested", SymbolData::Type(TypeData::default()));
        nested.containing = Some(iface);
        let nested = table.add(nested);

        let view = SymbolView::new(&table);
        assert!(!hide_accessibility(&view, nested).unwrap());
    }

    #[test]
    fn explicit_interface_implementation_hides_the_keyword() {
        let mut table = SymbolTable::new();
        let iface = table.add(Symbol::new(
            "IFoo",
            SymbolData::Type(TypeData {
                type_kind: TypeKind::Interface,
                ..TypeData::default()
            }),
        ));
        let iface_m = table.add(Symbol::new("Bar", SymbolData::Method(MethodData::default())));
        let _ = iface;
        let cls = table.add(Symbol::new("C", SymbolData::Type(TypeData::default())));
        let mut eii = Symbol::new("Bar", SymbolData::Method(MethodData {
            explicit_impls: vec![iface_m],
            ..MethodData::default()
        }));
        eii.containing = Some(cls);
        let eii = table.add(eii);

        let view = SymbolView::new(&table);
        assert!(hide_accessibility(&view, eii).unwrap());
    }
}
