use super::*;
use manifest::{
    FieldDefinition, Primitive, RecordDefinition, RecordDefinitions, TypeExpr, parse_type_expr,
};
use record::RecordOracle;
use target::{Target, TargetArch};

fn definition(name: &str, fields: &[(&str, &str)]) -> RecordDefinition {
    RecordDefinition {
        name: name.into(),
        fields: fields
            .iter()
            .map(|(name, ty)| FieldDefinition::new(*name, parse_type_expr(ty).unwrap()))
            .collect(),
    }
}

fn catalog(definitions: impl IntoIterator<Item = RecordDefinition>) -> RecordDefinitions {
    definitions
        .into_iter()
        .map(|definition| (definition.name.clone(), definition))
        .collect()
}

fn layout(sizes: &StdSizes, records: &RecordDefinitions, ty: &str) -> TypeLayout {
    TypeLayoutCache::new(sizes, records)
        .get(&parse_type_expr(ty).unwrap())
        .unwrap()
}

fn sizes_64() -> StdSizes {
    StdSizes::for_target(&Target::new(Some(TargetArch::X86_64)))
}

fn sizes_32() -> StdSizes {
    StdSizes::for_target(&Target::new(Some(TargetArch::X86)))
}

fn natural(bytes: u64) -> TypeLayout {
    TypeLayout::new(ByteUnits::of(bytes), ByteUnits::of(bytes))
}

#[test]
fn test_primitive_layouts_64() {
    let sizes = sizes_64();
    let records = RecordDefinitions::default();
    let of = |ty| layout(&sizes, &records, ty);

    assert_eq!(of("bool"), natural(1));
    assert_eq!(of("i16"), natural(2));
    assert_eq!(of("char"), natural(4));
    assert_eq!(of("f64"), natural(8));
    assert_eq!(of("usize"), natural(8));
    assert_eq!(of("*Anything"), natural(8));
    assert_eq!(of("fn"), natural(8));
    assert_eq!(of("str"), TypeLayout::new(ByteUnits::of(16), ByteUnits::of(8)));
    assert_eq!(of("dyn"), TypeLayout::new(ByteUnits::of(16), ByteUnits::of(8)));
    assert_eq!(of("[]u8"), TypeLayout::new(ByteUnits::of(24), ByteUnits::of(8)));
    assert_eq!(of("c64"), TypeLayout::new(ByteUnits::of(8), ByteUnits::of(4)));
    assert_eq!(of("c128"), TypeLayout::new(ByteUnits::of(16), ByteUnits::of(8)));
}

#[test]
fn test_primitive_layouts_32() {
    let sizes = sizes_32();
    let records = RecordDefinitions::default();
    let of = |ty| layout(&sizes, &records, ty);

    assert_eq!(sizes.word_size(), ByteUnits::of(4));
    assert_eq!(sizes.max_alignment(), ByteUnits::of(4));
    assert_eq!(of("u64"), TypeLayout::new(ByteUnits::of(8), ByteUnits::of(4)));
    assert_eq!(of("*u8"), natural(4));
    assert_eq!(of("str"), TypeLayout::new(ByteUnits::of(8), ByteUnits::of(4)));
    assert_eq!(of("[]u64"), TypeLayout::new(ByteUnits::of(12), ByteUnits::of(4)));
}

#[test]
fn test_fixed_arrays() {
    let sizes = sizes_64();
    let records = catalog([definition("Tail", &[("big", "u64"), ("small", "u8")])]);
    let of = |ty| layout(&sizes, &records, ty);

    assert_eq!(of("[3]u16"), TypeLayout::new(ByteUnits::of(6), ByteUnits::of(2)));
    assert_eq!(of("[0]u64"), TypeLayout::new(ByteUnits::ZERO, ByteUnits::of(8)));
    assert_eq!(of("[2][3]u8"), TypeLayout::new(ByteUnits::of(6), ByteUnits::of(1)));
    assert_eq!(of("[2]Tail"), TypeLayout::new(ByteUnits::of(32), ByteUnits::of(8)));
}

#[test]
fn test_record_layout_declaration_order() {
    let sizes = sizes_64();
    let padded = definition("Padded", &[("a", "bool"), ("b", "i64"), ("c", "bool")]);
    let records = catalog([padded.clone()]);
    let cache = TypeLayoutCache::new(&sizes, &records);

    // bool at 0, i64 at 8, bool at 16, then padded to a multiple of 8
    assert_eq!(
        cache.record_layout(&padded),
        Ok(TypeLayout::new(ByteUnits::of(24), ByteUnits::of(8)))
    );

    let tail = definition("Tail", &[("b", "i64"), ("a", "bool"), ("c", "bool")]);
    assert_eq!(
        cache.record_layout(&tail),
        Ok(TypeLayout::new(ByteUnits::of(16), ByteUnits::of(8)))
    );
}

#[test]
fn test_record_layout_capped_alignment() {
    let sizes = sizes_32();
    let padded = definition("Padded", &[("a", "bool"), ("b", "i64"), ("c", "bool")]);
    let records = catalog([padded.clone()]);
    let cache = TypeLayoutCache::new(&sizes, &records);

    // i64 only needs 4-byte alignment, so it starts at offset 4
    assert_eq!(
        cache.record_layout(&padded),
        Ok(TypeLayout::new(ByteUnits::of(16), ByteUnits::of(4)))
    );
}

#[test]
fn test_max_alignment_override() {
    let sizes = sizes_64().with_max_alignment(ByteUnits::of(2));
    let records = catalog([definition("Pair", &[("a", "u8"), ("b", "u64")])]);

    assert_eq!(
        layout(&sizes, &records, "Pair"),
        TypeLayout::new(ByteUnits::of(10), ByteUnits::of(2))
    );
}

#[test]
fn test_empty_record() {
    let sizes = sizes_64();
    let records = catalog([definition("Empty", &[])]);

    assert_eq!(
        layout(&sizes, &records, "Empty"),
        TypeLayout::new(ByteUnits::ZERO, ByteUnits::ONE)
    );
}

#[test]
fn test_nested_records() {
    let sizes = sizes_64();
    let records = catalog([
        definition("Outer", &[("flag", "bool"), ("inner", "Inner")]),
        definition("Inner", &[("count", "u32"), ("tag", "u8")]),
    ]);

    assert_eq!(
        layout(&sizes, &records, "Inner"),
        TypeLayout::new(ByteUnits::of(8), ByteUnits::of(4))
    );
    assert_eq!(
        layout(&sizes, &records, "Outer"),
        TypeLayout::new(ByteUnits::of(12), ByteUnits::of(4))
    );
}

#[test]
fn test_self_reference_through_pointer() {
    let sizes = sizes_64();
    let records = catalog([definition("Node", &[("value", "u32"), ("next", "*Node")])]);

    assert_eq!(
        layout(&sizes, &records, "Node"),
        TypeLayout::new(ByteUnits::of(16), ByteUnits::of(8))
    );
}

#[test]
fn test_recursive_record_is_error() {
    let sizes = sizes_64();
    let records = catalog([
        definition("A", &[("b", "B")]),
        definition("B", &[("items", "[2]A")]),
    ]);
    let cache = TypeLayoutCache::new(&sizes, &records);

    let error = cache.get(&TypeExpr::Named("A".into())).unwrap_err();
    assert_eq!(error.kind, LayoutErrorKind::RecursiveRecord("A".into()));
    assert_eq!(error.field.as_deref(), Some("items"));
}

#[test]
fn test_undeclared_record_is_error() {
    let sizes = sizes_64();
    let records = catalog([definition("Holder", &[("ok", "u8"), ("missing", "Missing")])]);
    let cache = TypeLayoutCache::new(&sizes, &records);

    let error = cache.fields_of(&records["Holder"]).unwrap_err();
    assert_eq!(error.kind, LayoutErrorKind::UndeclaredRecord("Missing".into()));
    assert_eq!(
        error.to_string(),
        "Undeclared type 'Missing' (in field 'missing')"
    );
}

#[test]
fn test_too_large_is_error() {
    let sizes = sizes_64();
    let records = RecordDefinitions::default();
    let cache = TypeLayoutCache::new(&sizes, &records);

    let error = cache
        .get(&parse_type_expr("[9999999999999999999]u64").unwrap())
        .unwrap_err();
    assert!(matches!(error.kind, LayoutErrorKind::TooLarge(_)));
}

#[test]
fn test_deeply_nested_arrays() {
    let sizes = sizes_64();
    let records = RecordDefinitions::default();

    let mut ty = TypeExpr::Primitive(Primitive::U16);
    for _ in 0..100_000 {
        ty = TypeExpr::FixedArray(1, Box::new(ty));
    }

    let cache = TypeLayoutCache::new(&sizes, &records);
    assert_eq!(cache.get(&ty), Ok(natural(2)));

    // Dropping a long box chain recurses, so unwind it by hand
    while let TypeExpr::FixedArray(_, inner) = ty {
        ty = *inner;
    }
}

fn chain(length: usize) -> RecordDefinitions {
    catalog((0..length).map(|i| {
        let next = format!("Link{}", i + 1);
        let ty = if i + 1 == length { "u8" } else { next.as_str() };
        definition(&format!("Link{}", i), &[("next", ty)])
    }))
}

#[test]
fn test_nesting_within_limit() {
    let sizes = sizes_64();
    let records = chain(MAX_RECORD_NESTING);

    assert_eq!(layout(&sizes, &records, "Link0"), natural(1));
}

#[test]
fn test_nesting_too_deep_is_error() {
    let sizes = sizes_64();
    let records = chain(10_000);
    let cache = TypeLayoutCache::new(&sizes, &records);

    let error = cache.get(&TypeExpr::Named("Link0".into())).unwrap_err();
    assert_eq!(
        error.kind,
        LayoutErrorKind::NestedTooDeep(format!("Link{}", MAX_RECORD_NESTING))
    );
    assert_eq!(error.field.as_deref(), Some("next"));
}

#[test]
fn test_oracle_reports_declaration_order() {
    let sizes = sizes_64();
    let records = catalog([definition(
        "Mixed",
        &[("a", "u8"), ("name", "str"), ("b", "u16")],
    )]);
    let cache = TypeLayoutCache::new(&sizes, &records);
    let mixed = &records["Mixed"];

    let fields = cache.fields_of(mixed).unwrap();
    assert_eq!(
        fields
            .iter()
            .map(|field| (field.name.as_str(), field.size.bytes(), field.alignment.bytes()))
            .collect::<Vec<_>>(),
        vec![("a", 1, 1), ("name", 16, 8), ("b", 2, 2)]
    );
    assert_eq!(cache.actual_size_of(mixed).unwrap(), ByteUnits::of(32));
    assert_eq!(cache.alignment_of(mixed).unwrap(), ByteUnits::of(8));
}
