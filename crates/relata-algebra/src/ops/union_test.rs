use super::*;
use relata_core::{Schema, SchemaBuilder, Tuple, TupleBuilder, ValueType};

fn tuple_ab(a: &str, b: &str) -> Tuple {
    let mut builder = TupleBuilder::new();
    builder
        .with_value("a", a)
        .unwrap()
        .with_value("b", b)
        .unwrap();
    builder.build()
}

fn relation_ab(rows: &[(&str, &str)]) -> Relation {
    let mut builder = RelationBuilder::new();
    for (a, b) in rows {
        builder.with_tuple(tuple_ab(a, b)).unwrap();
    }
    builder.build().unwrap()
}

fn empty_relation(schema: Schema) -> Relation {
    let mut builder = RelationBuilder::new();
    builder.with_schema(schema);
    builder.build().unwrap()
}

fn relation_ac(a: &str, c: &str) -> Relation {
    let mut tuple = TupleBuilder::new();
    tuple
        .with_value("a", a)
        .unwrap()
        .with_value("c", c)
        .unwrap();
    let mut builder = RelationBuilder::new();
    builder.with_tuple(tuple.build()).unwrap();
    builder.build().unwrap()
}

#[test]
fn test_union_nullary_relations() {
    let t = Relation::nullary_true();
    let f = Relation::nullary_false();

    assert_eq!(&Union::new(t, t).execute().unwrap(), t);
    assert_eq!(&Union::new(t, f).execute().unwrap(), t);
    assert_eq!(&Union::new(f, t).execute().unwrap(), t);
    assert_eq!(&Union::new(f, f).execute().unwrap(), f);
}

#[test]
fn test_union_empty_relations() {
    let mut schema = SchemaBuilder::new();
    schema
        .with_attribute("a", ValueType::Int)
        .unwrap()
        .with_attribute("b", ValueType::Bool)
        .unwrap();
    let a = empty_relation(schema.build());
    let b = empty_relation(schema.build());

    let result = Union::new(a.clone(), b.clone()).execute().unwrap();

    assert_eq!(result, a);
    assert_eq!(result, b);
}

#[test]
fn test_union_equal_relations() {
    let a = relation_ab(&[("1", "11"), ("2", "22")]);
    let b = relation_ab(&[("1", "11"), ("2", "22")]);

    let result = Union::new(a.clone(), b).execute().unwrap();

    assert_eq!(result, a);
}

#[test]
fn test_union_overlapping_relations() {
    let a = relation_ab(&[("1", "11"), ("2", "22"), ("3", "33"), ("4", "44")]);
    let b = relation_ab(&[("2", "22"), ("4", "44"), ("5", "55")]);

    let result = Union::new(a, b).execute().unwrap();

    let expected = relation_ab(&[
        ("1", "11"),
        ("2", "22"),
        ("3", "33"),
        ("4", "44"),
        ("5", "55"),
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_union_disjoint_relations() {
    let a = relation_ab(&[("1", "11"), ("2", "22"), ("3", "33")]);
    let b = relation_ab(&[("5", "55"), ("7", "77"), ("9", "99")]);

    let result = Union::new(a, b).execute().unwrap();

    let expected = relation_ab(&[
        ("1", "11"),
        ("2", "22"),
        ("3", "33"),
        ("5", "55"),
        ("7", "77"),
        ("9", "99"),
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_union_nests_as_expression() {
    let a = relation_ab(&[("1", "11")]);
    let b = relation_ab(&[("2", "22")]);
    let c = relation_ab(&[("3", "33")]);

    let result = Union::new(Union::new(a, b), c).execute().unwrap();

    let expected = relation_ab(&[("1", "11"), ("2", "22"), ("3", "33")]);
    assert_eq!(result, expected);
}

#[test]
fn test_union_rejects_mismatched_schemas() {
    let a = relation_ab(&[("1", "11")]);
    let b = relation_ac("2", "22");

    let err = Union::new(a.clone(), b.clone()).execute().unwrap_err();
    match err {
        CoreError::RelationSchemaMismatch { relation, expected } => {
            assert_eq!(relation, b);
            assert_eq!(&expected, a.schema());
        }
        other => panic!("expected RelationSchemaMismatch, got {:?}", other),
    }

    let err = Union::new(b.clone(), a.clone()).execute().unwrap_err();
    match err {
        CoreError::RelationSchemaMismatch { relation, expected } => {
            assert_eq!(relation, a);
            assert_eq!(&expected, b.schema());
        }
        other => panic!("expected RelationSchemaMismatch, got {:?}", other),
    }
}
