//! Hand-built symbol tables for tests.
//!
//! `Fixture` seeds a `System` namespace with the well-known primitive
//! types plus an `Acme` namespace to hang test declarations off, and
//! offers small builders so each test states only what it cares about.

use refmeta_model::{
    Accessibility, FieldData, MethodData, ParameterData, PrimitiveValue, SpecialType, Symbol,
    SymbolData, SymbolId, SymbolTable, TypeData, TypeKind, TypeRef, TypedConstant,
};

pub(crate) struct Fixture {
    pub(crate) table: SymbolTable,
    pub(crate) system: SymbolId,
    pub(crate) ns: SymbolId,
    pub(crate) object: SymbolId,
    pub(crate) int32: SymbolId,
    pub(crate) string: SymbolId,
    pub(crate) boolean: SymbolId,
    pub(crate) byte: SymbolId,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let mut table = SymbolTable::new();
        let mut system_sym = Symbol::new("System", SymbolData::Namespace);
        system_sym.accessibility = Accessibility::NotApplicable;
        system_sym.in_source = false;
        let system = table.add(system_sym);

        let object = special(&mut table, system, "Object", TypeKind::Class, SpecialType::Object);
        let int32 = special(&mut table, system, "Int32", TypeKind::Struct, SpecialType::Int32);
        let string = special(&mut table, system, "String", TypeKind::Class, SpecialType::String);
        let boolean =
            special(&mut table, system, "Boolean", TypeKind::Struct, SpecialType::Boolean);
        let byte = special(&mut table, system, "Byte", TypeKind::Struct, SpecialType::Byte);

        let mut ns_sym = Symbol::new("Acme", SymbolData::Namespace);
        ns_sym.accessibility = Accessibility::NotApplicable;
        let ns = table.add(ns_sym);

        Fixture {
            table,
            system,
            ns,
            object,
            int32,
            string,
            boolean,
            byte,
        }
    }

    pub(crate) fn int(&self) -> TypeRef {
        TypeRef::Named(self.int32)
    }

    pub(crate) fn str_(&self) -> TypeRef {
        TypeRef::Named(self.string)
    }

    /// A public class in the `Acme` namespace.
    pub(crate) fn class(&mut self, name: &str) -> SymbolId {
        self.add_type(name, TypeData::default())
    }

    pub(crate) fn add_type(&mut self, name: &str, data: TypeData) -> SymbolId {
        let mut sym = Symbol::new(name, SymbolData::Type(data));
        sym.containing = Some(self.ns);
        self.table.add(sym)
    }

    pub(crate) fn method(
        &mut self,
        owner: SymbolId,
        name: &str,
        return_type: Option<TypeRef>,
    ) -> SymbolId {
        let mut sym = Symbol::new(
            name,
            SymbolData::Method(MethodData {
                return_type,
                ..MethodData::default()
            }),
        );
        sym.containing = Some(owner);
        self.table.add(sym)
    }

    /// Append a by-value parameter to a method or indexer.
    pub(crate) fn param(&mut self, method: SymbolId, name: &str, ty: TypeRef) -> SymbolId {
        self.param_with(method, name, ParameterData::of(ty))
    }

    pub(crate) fn param_with(
        &mut self,
        method: SymbolId,
        name: &str,
        data: ParameterData,
    ) -> SymbolId {
        let mut sym = Symbol::new(name, SymbolData::Parameter(data));
        sym.accessibility = Accessibility::NotApplicable;
        sym.containing = Some(method);
        let id = self.table.add(sym);
        if let Some(owner) = self.table.get_mut(method) {
            match &mut owner.data {
                SymbolData::Method(m) => m.parameters.push(id),
                SymbolData::Property(p) => p.parameters.push(id),
                _ => {}
            }
        }
        id
    }

    /// An enum in `Acme` with int members, registered in declaration
    /// order.
    pub(crate) fn enum_type(&mut self, name: &str, members: &[(&str, i64)]) -> SymbolId {
        let en = self.add_type(
            name,
            TypeData {
                type_kind: TypeKind::Enum,
                enum_underlying: Some(self.int32),
                ..TypeData::default()
            },
        );
        for &(member_name, value) in members {
            let mut sym = Symbol::new(
                member_name,
                SymbolData::Field(FieldData {
                    field_type: TypeRef::Named(en),
                    is_const: true,
                    is_read_only: false,
                    constant: Some(TypedConstant::Primitive(PrimitiveValue::Int(value))),
                }),
            );
            sym.containing = Some(en);
            let id = self.table.add(sym);
            if let Some(owner) = self.table.get_mut(en) {
                if let SymbolData::Type(t) = &mut owner.data {
                    t.members.push(id);
                }
            }
        }
        en
    }
}

fn special(
    table: &mut SymbolTable,
    system: SymbolId,
    name: &str,
    type_kind: TypeKind,
    special: SpecialType,
) -> SymbolId {
    let mut sym = Symbol::new(
        name,
        SymbolData::Type(TypeData {
            type_kind,
            special,
            ..TypeData::default()
        }),
    );
    sym.containing = Some(system);
    sym.in_source = false;
    table.add(sym)
}
