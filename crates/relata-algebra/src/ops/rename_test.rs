use super::*;
use relata_core::{Tuple, ValueType};

fn tuple_of(values: &[(&str, i64)]) -> Tuple {
    let mut builder = TupleBuilder::new();
    for (name, value) in values {
        builder.with_value(*name, *value).unwrap();
    }
    builder.build()
}

fn relation_of(rows: &[&[(&str, i64)]]) -> Relation {
    let mut builder = RelationBuilder::new();
    for row in rows {
        builder.with_tuple(tuple_of(row)).unwrap();
    }
    builder.build().unwrap()
}

#[test]
fn test_rename_without_mappings_is_identity() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let result = Rename::new(relation.clone()).execute().unwrap();

    assert_eq!(result, relation);
}

#[test]
fn test_rename_single_attribute() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let result = Rename::new(relation)
        .with_mapping("a", "c")
        .execute()
        .unwrap();

    let expected = relation_of(&[
        &[("c", 1), ("b", 11)],
        &[("c", 2), ("b", 22)],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_rename_multiple_attributes() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let result = Rename::new(relation)
        .with_mapping("b", "!b!")
        .with_mapping("a", "_a_")
        .execute()
        .unwrap();

    let expected = relation_of(&[
        &[("_a_", 1), ("!b!", 11)],
        &[("_a_", 2), ("!b!", 22)],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_rename_swaps_attribute_names() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let result = Rename::new(relation)
        .with_mapping("a", "b")
        .with_mapping("b", "a")
        .execute()
        .unwrap();

    let expected = relation_of(&[
        &[("b", 1), ("a", 11)],
        &[("b", 2), ("a", 22)],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_rename_to_existing_attribute_that_is_also_renamed() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11), ("c", 111)],
        &[("a", 2), ("b", 22), ("c", 222)],
    ]);

    let result = Rename::new(relation)
        .with_mapping("a", "b")
        .with_mapping("b", "d")
        .execute()
        .unwrap();

    let expected = relation_of(&[
        &[("b", 1), ("d", 11), ("c", 111)],
        &[("b", 2), ("d", 22), ("c", 222)],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_rename_self_mapping_is_identity() {
    let relation = relation_of(&[&[("a", 1), ("b", 11)]]);

    let result = Rename::new(relation.clone())
        .with_mapping("a", "a")
        .execute()
        .unwrap();

    assert_eq!(result, relation);
}

#[test]
fn test_rename_dropped_self_mapping_does_not_free_its_name() {
    let relation = relation_of(&[&[("a", 1), ("b", 11)]]);

    // "a -> a" is dropped, so "b -> a" collides with the attribute that
    // stays in place.
    let err = Rename::new(relation)
        .with_mapping("a", "a")
        .with_mapping("b", "a")
        .execute()
        .unwrap_err();

    match err {
        CoreError::AttributeAlreadyExists { existing } => {
            assert_eq!(existing.name().as_str(), "a");
            assert_eq!(existing.value_type(), ValueType::Int);
        }
        other => panic!("expected AttributeAlreadyExists, got {:?}", other),
    }
}

#[test]
fn test_rename_rejects_unknown_source() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let err = Rename::new(relation)
        .with_mapping("c", "a")
        .execute()
        .unwrap_err();

    match err {
        CoreError::AttributeNotFound { name } => assert_eq!(name, "c"),
        other => panic!("expected AttributeNotFound, got {:?}", other),
    }
}

#[test]
fn test_rename_rejects_existing_target() {
    let relation = relation_of(&[
        &[("a", 1), ("b", 11)],
        &[("a", 2), ("b", 22)],
    ]);

    let err = Rename::new(relation)
        .with_mapping("a", "b")
        .execute()
        .unwrap_err();

    match err {
        CoreError::AttributeAlreadyExists { ref existing } => {
            assert_eq!(existing.name().as_str(), "b");
            assert_eq!(existing.value_type(), ValueType::Int);
        }
        other => panic!("expected AttributeAlreadyExists, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "[R002] Attribute already exists: b (INTEGER)"
    );
}

#[test]
fn test_rename_trims_names() {
    let relation = relation_of(&[&[("a", 1), ("b", 11)]]);

    let result = Rename::new(relation)
        .with_mapping(" a ", " c ")
        .execute()
        .unwrap();

    assert_eq!(result, relation_of(&[&[("c", 1), ("b", 11)]]));
}

#[test]
fn test_rename_later_mapping_replaces_earlier() {
    let relation = relation_of(&[&[("a", 1), ("b", 11)]]);

    let result = Rename::new(relation)
        .with_mapping("a", "x")
        .with_mapping("a", "y")
        .execute()
        .unwrap();

    assert_eq!(result, relation_of(&[&[("y", 1), ("b", 11)]]));
}
