//! Integration tests for assignability and type equality.

use insta::assert_snapshot;
use respecc_core::type_system::{TypeId, TypeKind, TypeRegistry};

#[test]
fn test_structural_arrays_assignable_both_ways() {
    let mut registry = TypeRegistry::new();
    let left = registry.create_array(TypeId::NUMBER);
    let right = registry.create_array(TypeId::NUMBER);

    assert!(registry.is_assignable(left, right));
    assert!(registry.is_assignable(right, left));
}

#[test]
fn test_structural_dictionaries_assignable_both_ways() {
    let mut registry = TypeRegistry::new();
    let inner_a = registry.create_array(TypeId::BOOLEAN);
    let inner_b = registry.create_array(TypeId::BOOLEAN);
    let left = registry.create_dictionary(TypeId::STRING, inner_a);
    let right = registry.create_dictionary(TypeId::STRING, inner_b);

    assert!(registry.is_assignable(left, right));
    assert!(registry.is_assignable(right, left));
}

#[test]
fn test_different_element_types_not_assignable() {
    let mut registry = TypeRegistry::new();
    let numbers = registry.create_array(TypeId::NUMBER);
    let strings = registry.create_array(TypeId::STRING);

    assert!(!registry.is_assignable(numbers, strings));
}

#[test]
fn test_any_elements_are_not_absorbed_inside_collections() {
    let mut registry = TypeRegistry::new();
    let numbers = registry.create_array(TypeId::NUMBER);
    let anything = registry.create_array(TypeId::ANY);

    assert!(!registry.is_assignable(numbers, anything));
    assert!(!registry.is_assignable(anything, numbers));
}

#[test]
fn test_nominal_classes_are_distinct() {
    let mut registry = TypeRegistry::new();
    let dog = registry.create_object("Pet");
    let cat = registry.create_object("Pet");
    let dog_type = registry.class(dog).unwrap().type_id;
    let cat_type = registry.class(cat).unwrap().type_id;

    assert!(!registry.is_assignable(dog_type, cat_type));
    assert!(!registry.is_assignable(cat_type, dog_type));
    assert!(registry.is_assignable(dog_type, dog_type));
}

#[test]
fn test_any_is_bidirectional() {
    let mut registry = TypeRegistry::new();
    let class = registry.create_object("Dog");
    let dog = registry.class(class).unwrap().type_id;
    let array = registry.create_array(TypeId::STRING);

    for ty in [TypeId::NUMBER, TypeId::STRING, TypeId::NULL, dog, array] {
        assert!(registry.is_assignable(TypeId::ANY, ty));
        assert!(registry.is_assignable(ty, TypeId::ANY));
    }
}

#[test]
fn test_primitives_compare_by_identity() {
    let registry = TypeRegistry::new();
    assert!(registry.is_assignable(TypeId::NUMBER, TypeId::NUMBER));
    assert!(!registry.is_assignable(TypeId::NUMBER, TypeId::STRING));
    assert!(!registry.is_assignable(TypeId::STRING, TypeId::NULL));
}

#[test]
fn test_types_overlap_treats_any_as_wildcard() {
    let registry = TypeRegistry::new();
    assert!(registry.types_overlap(TypeId::ANY, TypeId::STRING));
    assert!(registry.types_overlap(TypeId::STRING, TypeId::STRING));
    assert!(!registry.types_overlap(TypeId::NUMBER, TypeId::STRING));
}

#[test]
fn test_type_names() {
    let mut registry = TypeRegistry::new();
    let numbers = registry.create_array(TypeId::NUMBER);
    let dict = registry.create_dictionary(TypeId::STRING, numbers);

    assert_snapshot!(registry.get_type_name(dict), @"Dictionary<String, Array<Number>>");
    assert_snapshot!(registry.get_type_name(TypeId::ANY), @"Any");
}

#[test]
fn test_object_kind_registered() {
    let mut registry = TypeRegistry::new();
    let class = registry.create_object("Dog");
    let type_id = registry.class(class).unwrap().type_id;

    assert!(matches!(
        registry.kind(type_id),
        Some(TypeKind::Object { name, .. }) if name == "Dog"
    ));
}
