use pretty_assertions::assert_eq;
use refmeta_model::{display_string, DottedIds, Symbol, SymbolData, TypeData, TypeRef};

use crate::dialect::Dialect;
use crate::error::FormatError;
use crate::testutil::Fixture;

#[test]
fn method_name_formats() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    f.param(frob, "count", f.int());

    assert_eq!(
        crate::name(&f.table, frob, Dialect::CSharp).unwrap(),
        "Frob(Int32)"
    );
    assert_eq!(
        crate::name_with_type(&f.table, frob, Dialect::CSharp).unwrap(),
        "Widget.Frob(Int32)"
    );
    assert_eq!(
        crate::qualified_name(&f.table, frob, Dialect::CSharp).unwrap(),
        "Acme.Widget.Frob(System.Int32)"
    );
}

#[test]
fn overload_names_strip_signatures() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    f.param(frob, "count", f.int());

    let parts = crate::name_parts(&f.table, frob, Dialect::CSharp, true).unwrap();
    assert_eq!(display_string(&parts), "Frob");
}

#[test]
fn link_items_for_a_method() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    f.param(frob, "count", f.int());

    let items = crate::link_items(&f.table, frob, Dialect::CSharp, false, &DottedIds).unwrap();
    assert_eq!(items.len(), 4);

    assert_eq!(
        items[0].name.as_deref(),
        Some("Acme.Widget.Frob(System.Int32)")
    );
    assert_eq!(items[0].display_name, "Frob");
    assert_eq!(items[0].display_name_with_type, "Widget.Frob");
    assert_eq!(items[0].display_qualified_name, "Acme.Widget.Frob");
    assert!(!items[0].is_external);

    // Punctuation carries no target.
    assert_eq!(items[1].name, None);
    assert_eq!(items[1].display_name, "(");

    // The parameter type came from a referenced assembly.
    assert_eq!(items[2].name.as_deref(), Some("System.Int32"));
    assert_eq!(items[2].display_name, "Int32");
    assert_eq!(items[2].display_qualified_name, "System.Int32");
    assert!(items[2].is_external);

    assert_eq!(items[3].name, None);
    assert_eq!(items[3].display_name, ")");
}

#[test]
fn overload_link_items_use_the_group_id() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    f.param(frob, "count", f.int());

    let items = crate::link_items(&f.table, frob, Dialect::CSharp, true, &DottedIds).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_deref(), Some("Acme.Widget.Frob*"));
    assert_eq!(items[0].display_name, "Frob");
}

#[test]
fn explicit_implementation_names_qualify_containing_type_first() {
    let mut f = Fixture::new();
    let ifoo = f.add_type(
        "IFoo",
        TypeData {
            type_kind: refmeta_model::TypeKind::Interface,
            ..TypeData::default()
        },
    );
    let iface_frob = f.method(ifoo, "Frob", None);
    let widget = f.class("Widget");
    let frob = {
        let mut sym = Symbol::new(
            "Frob",
            SymbolData::Method(refmeta_model::MethodData {
                explicit_impls: vec![iface_frob],
                ..refmeta_model::MethodData::default()
            }),
        );
        sym.containing = Some(widget);
        f.table.add(sym)
    };

    assert_eq!(
        crate::name(&f.table, frob, Dialect::CSharp).unwrap(),
        "IFoo.Frob()"
    );
    assert_eq!(
        crate::name_with_type(&f.table, frob, Dialect::CSharp).unwrap(),
        "Widget.IFoo.Frob()"
    );
    // Under full qualification the interface prefix renders through the
    // same format and picks up its own namespace.
    assert_eq!(
        crate::qualified_name(&f.table, frob, Dialect::CSharp).unwrap(),
        "Acme.Widget.Acme.IFoo.Frob()"
    );
}

#[test]
fn instantiations_link_to_their_definition() {
    let mut f = Fixture::new();
    let t = f.table.add(Symbol::new(
        "T",
        SymbolData::TypeParameter(Default::default()),
    ));
    let def = f.add_type(
        "List",
        TypeData {
            type_params: vec![t],
            ..TypeData::default()
        },
    );
    let inst = f.add_type(
        "List",
        TypeData {
            type_args: vec![TypeRef::Named(f.int32)],
            constructed_from: Some(def),
            ..TypeData::default()
        },
    );

    let parts = crate::name_parts(&f.table, inst, Dialect::CSharp, false).unwrap();
    assert_eq!(display_string(&parts), "List<Int32>");

    let items = crate::link_items(&f.table, inst, Dialect::CSharp, false, &DottedIds).unwrap();
    assert_eq!(items[0].name.as_deref(), Some("Acme.List"));
    assert_eq!(items[0].display_name, "List");
}

#[test]
fn type_parameter_names_are_text_only() {
    let mut f = Fixture::new();
    let t = f.table.add(Symbol::new(
        "T",
        SymbolData::TypeParameter(Default::default()),
    ));
    let boxed = f.add_type(
        "Box",
        TypeData {
            type_params: vec![t],
            ..TypeData::default()
        },
    );

    let items = crate::link_items(&f.table, boxed, Dialect::CSharp, false, &DottedIds).unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].display_name, "Box");
    assert!(items[0].name.is_some());
    assert_eq!(items[2].display_name, "T");
    assert_eq!(items[2].name, None);
}

#[test]
fn namespaces_render_fully_qualified() {
    let f = Fixture::new();
    assert_eq!(
        crate::name(&f.table, f.system, Dialect::VisualBasic).unwrap(),
        "System"
    );
}

#[test]
fn missing_symbols_are_an_error() {
    let f = Fixture::new();
    let dangling = refmeta_model::SymbolId::new(9999);
    let err = crate::name(&f.table, dangling, Dialect::CSharp).unwrap_err();
    assert!(matches!(err, FormatError::MissingSymbol(_)));
}
