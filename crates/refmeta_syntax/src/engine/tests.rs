use pretty_assertions::assert_eq;
use refmeta_model::{
    display_string, Accessibility, Constraint, MethodData, ParameterData, PrimitiveValue,
    PropertyData, Symbol, SymbolData, SymbolId, SymbolTable, TypeData, TypeParameterData,
    TypedConstant, TypeRef,
};

use crate::buffer::PartBuffer;
use crate::dialect::Dialect;
use crate::options::DisplayOptions;
use crate::testutil::Fixture;
use crate::view::SymbolView;

use super::{write_enum_constant, write_symbol};

fn render(table: &SymbolTable, id: SymbolId, dialect: Dialect, opts: DisplayOptions) -> String {
    let view = SymbolView::new(table);
    let mut buf = PartBuffer::new();
    write_symbol(&view, id, dialect, opts, &mut buf).unwrap();
    display_string(&buf.finish())
}

#[test]
fn csharp_method_declaration() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", Some(f.int()));
    f.param(frob, "count", f.int());

    assert_eq!(
        render(&f.table, frob, Dialect::CSharp, DisplayOptions::syntax()),
        "int Frob(int count)"
    );
}

#[test]
fn vb_method_declaration() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", Some(f.int()));
    f.param(frob, "count", f.int());
    let void = f.method(widget, "Reset", None);

    assert_eq!(
        render(&f.table, frob, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Function Frob(count As Integer) As Integer"
    );
    assert_eq!(
        render(&f.table, void, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Sub Reset()"
    );
}

#[test]
fn parameter_defaults() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    let mut data = ParameterData::of(f.int());
    data.default = Some(TypedConstant::Primitive(PrimitiveValue::Int(1)));
    f.param_with(frob, "count", data);

    assert_eq!(
        render(&f.table, frob, Dialect::CSharp, DisplayOptions::syntax()),
        "void Frob(int count = 1)"
    );
    assert_eq!(
        render(&f.table, frob, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Sub Frob(Optional count As Integer = 1)"
    );
}

#[test]
fn generic_type_declarations_place_constraints_per_dialect() {
    let mut f = Fixture::new();
    let mut t_param = Symbol::new(
        "T",
        SymbolData::TypeParameter(TypeParameterData {
            constraints: vec![Constraint::ReferenceType],
            ..TypeParameterData::default()
        }),
    );
    t_param.accessibility = Accessibility::NotApplicable;
    let t = f.table.add(t_param);
    let boxed = f.add_type(
        "Box",
        TypeData {
            type_params: vec![t],
            ..TypeData::default()
        },
    );

    assert_eq!(
        render(&f.table, boxed, Dialect::CSharp, DisplayOptions::syntax()),
        "class Box<T> where T : class"
    );
    assert_eq!(
        render(&f.table, boxed, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Class Box(Of T As Class)"
    );
}

#[test]
fn qualified_method_name_spells_out_metadata_names() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", Some(f.int()));
    f.param(frob, "count", f.int());

    assert_eq!(
        render(
            &f.table,
            frob,
            Dialect::CSharp,
            DisplayOptions::method_qualified_name()
        ),
        "Acme.Widget.Frob(System.Int32)"
    );
    assert_eq!(
        render(&f.table, frob, Dialect::CSharp, DisplayOptions::method_name()),
        "Frob(Int32)"
    );
}

#[test]
fn enum_constants_match_members_or_decompose_flags() {
    let mut f = Fixture::new();
    let color = f.enum_type("Color", &[("None", 0), ("Red", 1), ("Blue", 2)]);
    let view = SymbolView::new(&f.table);

    let mut buf = PartBuffer::new();
    write_enum_constant(
        &view,
        color,
        2,
        Dialect::CSharp,
        DisplayOptions::enum_constant(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(display_string(&buf.finish()), "Color.Blue");

    let mut buf = PartBuffer::new();
    write_enum_constant(
        &view,
        color,
        3,
        Dialect::CSharp,
        DisplayOptions::enum_constant(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(display_string(&buf.finish()), "Color.Red | Color.Blue");

    let mut buf = PartBuffer::new();
    write_enum_constant(
        &view,
        color,
        3,
        Dialect::VisualBasic,
        DisplayOptions::enum_constant(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(display_string(&buf.finish()), "Color.Red Or Color.Blue");

    // No member combination covers the value.
    let mut buf = PartBuffer::new();
    write_enum_constant(
        &view,
        color,
        8,
        Dialect::CSharp,
        DisplayOptions::enum_constant(),
        &mut buf,
    )
    .unwrap();
    assert_eq!(display_string(&buf.finish()), "8");
}

#[test]
fn csharp_indexer_and_accessor_modifiers() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let getter = f.method(widget, "get_Item", Some(f.int()));
    let indexer = {
        let mut sym = Symbol::new(
            "Item",
            SymbolData::Property(PropertyData {
                property_type: f.int(),
                parameters: Vec::new(),
                getter: Some(getter),
                setter: None,
                explicit_impls: Vec::new(),
            }),
        );
        sym.containing = Some(widget);
        f.table.add(sym)
    };
    f.param(indexer, "index", f.int());

    assert_eq!(
        render(&f.table, indexer, Dialect::CSharp, DisplayOptions::syntax()),
        "int this[int index] { get; }"
    );

    let get_count = f.method(widget, "get_Count", Some(f.int()));
    let set_count = {
        let id = f.method(widget, "set_Count", None);
        if let Some(sym) = f.table.get_mut(id) {
            sym.accessibility = Accessibility::Protected;
        }
        id
    };
    let count = {
        let mut sym = Symbol::new(
            "Count",
            SymbolData::Property(PropertyData {
                property_type: f.int(),
                parameters: Vec::new(),
                getter: Some(get_count),
                setter: Some(set_count),
                explicit_impls: Vec::new(),
            }),
        );
        sym.containing = Some(widget);
        f.table.add(sym)
    };

    assert_eq!(
        render(&f.table, count, Dialect::CSharp, DisplayOptions::syntax()),
        "int Count { get; protected set; }"
    );
}

#[test]
fn vb_readonly_property() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let getter = f.method(widget, "get_Count", Some(f.int()));
    let count = {
        let mut sym = Symbol::new(
            "Count",
            SymbolData::Property(PropertyData {
                property_type: f.int(),
                parameters: Vec::new(),
                getter: Some(getter),
                setter: None,
                explicit_impls: Vec::new(),
            }),
        );
        sym.containing = Some(widget);
        f.table.add(sym)
    };

    assert_eq!(
        render(&f.table, count, Dialect::VisualBasic, DisplayOptions::syntax()),
        "ReadOnly Property Count As Integer"
    );
}

#[test]
fn arrays_render_with_dialect_suffix() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let frob = f.method(widget, "Frob", None);
    f.param(frob, "names", TypeRef::Array(Box::new(f.str_())));

    assert_eq!(
        render(&f.table, frob, Dialect::CSharp, DisplayOptions::syntax()),
        "void Frob(string[] names)"
    );
    assert_eq!(
        render(&f.table, frob, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Sub Frob(names As String())"
    );
}

#[test]
fn constructors_name_per_dialect() {
    let mut f = Fixture::new();
    let widget = f.class("Widget");
    let ctor = {
        let mut sym = Symbol::new(
            ".ctor",
            SymbolData::Method(MethodData {
                is_constructor: true,
                ..MethodData::default()
            }),
        );
        sym.containing = Some(widget);
        f.table.add(sym)
    };
    f.param(ctor, "count", f.int());

    assert_eq!(
        render(&f.table, ctor, Dialect::CSharp, DisplayOptions::syntax()),
        "Widget(int count)"
    );
    assert_eq!(
        render(&f.table, ctor, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Sub New(count As Integer)"
    );
}

#[test]
fn delegate_declarations_carry_the_invoke_signature() {
    let mut f = Fixture::new();
    let invoke = {
        let sym = Symbol::new(
            "Invoke",
            SymbolData::Method(MethodData {
                return_type: Some(f.int()),
                ..MethodData::default()
            }),
        );
        f.table.add(sym)
    };
    let handler = f.add_type(
        "Transformer",
        TypeData {
            type_kind: refmeta_model::TypeKind::Delegate,
            delegate_invoke: Some(invoke),
            ..TypeData::default()
        },
    );
    f.param(invoke, "input", f.int());

    assert_eq!(
        render(&f.table, handler, Dialect::CSharp, DisplayOptions::syntax()),
        "delegate int Transformer(int input)"
    );
    assert_eq!(
        render(&f.table, handler, Dialect::VisualBasic, DisplayOptions::syntax()),
        "Delegate Function Transformer(input As Integer) As Integer"
    );
}

#[test]
fn generic_instantiations_render_their_arguments() {
    let mut f = Fixture::new();
    let t = {
        let mut sym = Symbol::new("T", SymbolData::TypeParameter(TypeParameterData::default()));
        sym.accessibility = Accessibility::NotApplicable;
        f.table.add(sym)
    };
    let list = f.add_type(
        "List",
        TypeData {
            type_params: vec![t],
            ..TypeData::default()
        },
    );
    let list_of_int = f.add_type(
        "List",
        TypeData {
            type_args: vec![f.int()],
            constructed_from: Some(list),
            ..TypeData::default()
        },
    );

    assert_eq!(
        render(&f.table, list_of_int, Dialect::CSharp, DisplayOptions::type_name()),
        "List<int>"
    );
    assert_eq!(
        render(
            &f.table,
            list_of_int,
            Dialect::VisualBasic,
            DisplayOptions::type_name()
        ),
        "List(Of Integer)"
    );
}
