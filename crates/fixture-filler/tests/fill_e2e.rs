//! End-to-end fills over complete models: nested objects, collections,
//! interfaces, cycle policies and reproducibility.

use fill_core::{
    CyclePolicy, Property, ScalarKind, TypeDescriptor, TypeId, TypeRegistry, Value,
};
use fixture_filler::generators::{IntRange, OneOf, StaticValue};
use fixture_filler::{default_fill_config, FillError, Filler, FillerSetup, StubMocker};
use rand::RngCore;

fn person_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::object(
        "Address",
        vec![Property::new("city", "text"), Property::new("zip", "text")],
    ));
    registry.register(TypeDescriptor::object(
        "Person",
        vec![
            Property::new("name", "text"),
            Property::new("age", "int"),
            Property::new("home", "Address"),
        ],
    ));
    registry.validate().unwrap();
    registry
}

#[test]
fn person_with_nested_address_is_fully_populated() {
    let mut filler = Filler::with_seed(person_registry(), FillerSetup::new(), 42);

    let person = filler.create("Person").unwrap();

    let name = person.get_field("name").unwrap();
    assert!(!name.as_str().unwrap().is_empty());

    let age = person.get_field("age").unwrap();
    assert!(age.matches_scalar(ScalarKind::Int32));

    let home = person.get_field("home").unwrap();
    assert!(!home.is_null());
    assert_eq!(home.instance_type(), Some(&TypeId::new("Address")));
    let city = home.get_field("city").unwrap();
    assert!(!city.as_str().unwrap().is_empty());
}

#[test]
fn generated_scalars_match_their_declared_types_exactly() {
    let mut registry = TypeRegistry::new();
    let properties = ScalarKind::ALL
        .iter()
        .map(|kind| Property::new(format!("field_{}", kind.type_name()), kind.type_id()))
        .collect();
    registry.register(TypeDescriptor::object("Everything", properties));
    registry.validate().unwrap();

    let mut filler = Filler::with_seed(registry, FillerSetup::new(), 42);
    let value = filler.create("Everything").unwrap();

    for kind in ScalarKind::ALL {
        let field = value
            .get_field(&format!("field_{}", kind.type_name()))
            .unwrap_or_else(|| panic!("{} property missing", kind.type_name()));
        assert!(
            field.matches_scalar(kind),
            "property of type {} was generated as {:?}",
            kind.type_name(),
            field
        );
    }
}

#[test]
fn list_property_with_exact_bounds_produces_exact_count() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::list("Tags", "text"));
    registry.register(TypeDescriptor::object(
        "Person",
        vec![Property::new("name", "text"), Property::new("tags", "Tags")],
    ));
    registry.validate().unwrap();

    let setup =
        FillerSetup::new().with_default_config(default_fill_config().with_list_items(2, 2));
    let mut filler = Filler::with_seed(registry, setup, 42);

    let person = filler.create("Person").unwrap();
    let tags = person.get_field("tags").unwrap().as_list().unwrap();
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().all(|tag| tag.as_str().is_some()));
}

#[test]
fn list_counts_stay_within_inclusive_bounds_across_trials() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::list("Tags", "text"));
    registry.validate().unwrap();

    let setup =
        FillerSetup::new().with_default_config(default_fill_config().with_list_items(1, 4));
    let mut filler = Filler::with_seed(registry, setup, 42);

    let mut hit_min = false;
    let mut hit_max = false;
    for _ in 0..200 {
        let count = filler.create("Tags").unwrap().as_list().unwrap().len();
        assert!((1..=4).contains(&count));
        hit_min |= count == 1;
        hit_max |= count == 4;
    }
    // Both endpoints of the inclusive range are reachable.
    assert!(hit_min && hit_max);
}

#[test]
fn unresolved_interface_fails_and_implementation_fixes_it() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::interface("IShape", vec![]));
    registry.register(TypeDescriptor::object(
        "Circle",
        vec![Property::new("radius", "double")],
    ));
    registry.register(TypeDescriptor::object(
        "Drawing",
        vec![Property::new("shape", "IShape")],
    ));
    registry.validate().unwrap();

    let mut filler = Filler::with_seed(registry.clone(), FillerSetup::new(), 42);
    let result = filler.create("Drawing");
    assert!(
        matches!(result, Err(FillError::UnresolvedAbstractType(t)) if t == TypeId::new("IShape"))
    );

    let setup = FillerSetup::new()
        .with_default_config(default_fill_config().with_implementation("IShape", "Circle"));
    let mut filler = Filler::with_seed(registry, setup, 42);
    let drawing = filler.create("Drawing").unwrap();
    let shape = drawing.get_field("shape").unwrap();
    assert_eq!(shape.instance_type(), Some(&TypeId::new("Circle")));
    assert!(shape.get_field("radius").is_some());
}

#[test]
fn mocker_fallback_populates_interface_properties() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::interface(
        "IClock",
        vec![Property::new("now", "date_time")],
    ));
    registry.register(TypeDescriptor::object(
        "Job",
        vec![Property::new("clock", "IClock")],
    ));
    registry.validate().unwrap();

    let setup =
        FillerSetup::new().with_default_config(default_fill_config().with_mocker(StubMocker));
    let mut filler = Filler::with_seed(registry, setup, 42);

    let job = filler.create("Job").unwrap();
    let clock = job.get_field("clock").unwrap();
    assert!(clock.get_field("now").unwrap().matches_scalar(ScalarKind::DateTime));
}

#[test]
fn self_referencing_type_fails_with_default_cycle_policy() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::object(
        "Employee",
        vec![Property::new("name", "text"), Property::new("manager", "Employee")],
    ));
    registry.validate().unwrap();

    let mut filler = Filler::with_seed(registry, FillerSetup::new(), 42);
    let result = filler.create("Employee");
    assert!(
        matches!(result, Err(FillError::CircularReference(t)) if t == TypeId::new("Employee"))
    );
}

#[test]
fn self_referencing_type_defaults_with_lenient_cycle_policy() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::object(
        "Employee",
        vec![Property::new("name", "text"), Property::new("manager", "Employee")],
    ));
    registry.validate().unwrap();

    let setup = FillerSetup::new().with_default_config(
        default_fill_config().with_cycle_policy(CyclePolicy::UseDefault),
    );
    let mut filler = Filler::with_seed(registry, setup, 42);

    let employee = filler.create("Employee").unwrap();
    assert!(!employee.get_field("name").unwrap().as_str().unwrap().is_empty());
    // The self-referencing property ends up absent rather than populated.
    assert_eq!(employee.get_field("manager"), Some(&Value::Null));
}

#[test]
fn duplicate_map_keys_fail_fast() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::map("Index", "text", "int"));
    registry.validate().unwrap();

    let constant_key = |_rng: &mut dyn RngCore| Value::Text("same".to_string());
    let setup = FillerSetup::new().with_default_config(
        default_fill_config()
            .with_map_keys(2, 4)
            .with_generator_for("text", constant_key),
    );
    let mut filler = Filler::with_seed(registry, setup, 42);

    let result = filler.create("Index");
    assert!(matches!(result, Err(FillError::DuplicateKey(t)) if t == TypeId::new("text")));
}

#[test]
fn independent_fills_share_shape_but_not_values() {
    let mut filler = Filler::with_seed(person_registry(), FillerSetup::new(), 42);

    let first = filler.create("Person").unwrap();
    let second = filler.create("Person").unwrap();

    let first_fields = first.as_object().unwrap();
    let second_fields = second.as_object().unwrap();

    let mut first_keys: Vec<&String> = first_fields.keys().collect();
    let mut second_keys: Vec<&String> = second_fields.keys().collect();
    first_keys.sort();
    second_keys.sort();
    assert_eq!(first_keys, second_keys);

    // Same shape, different draws from the same stream.
    assert_ne!(
        first.get_field("name").unwrap(),
        second.get_field("name").unwrap()
    );
}

#[test]
fn same_seed_reproduces_the_same_graph() {
    let mut a = Filler::with_seed(person_registry(), FillerSetup::new(), 7);
    let mut b = Filler::with_seed(person_registry(), FillerSetup::new(), 7);

    assert_eq!(a.create("Person").unwrap(), b.create("Person").unwrap());

    let mut c = Filler::with_seed(person_registry(), FillerSetup::new(), 8);
    assert_ne!(
        Filler::with_seed(person_registry(), FillerSetup::new(), 7)
            .create("Person")
            .unwrap(),
        c.create("Person").unwrap()
    );
}

#[test]
fn per_type_setup_override_applies_to_that_type_only() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::list("Tags", "text"));
    registry.register(TypeDescriptor::object(
        "Post",
        vec![Property::new("tags", "Tags")],
    ));
    registry.register(TypeDescriptor::object(
        "Comment",
        vec![Property::new("tags", "Tags")],
    ));
    registry.validate().unwrap();

    // Posts get exactly one tag; everything else keeps the default bounds.
    let setup = FillerSetup::new()
        .with_default_config(default_fill_config().with_list_items(5, 5))
        .with_type_config("Post", default_fill_config().with_list_items(1, 1));
    let mut filler = Filler::with_seed(registry, setup, 42);

    let post = filler.create("Post").unwrap();
    assert_eq!(post.get_field("tags").unwrap().as_list().unwrap().len(), 1);

    let comment = filler.create("Comment").unwrap();
    assert_eq!(comment.get_field("tags").unwrap().as_list().unwrap().len(), 5);
}

#[test]
fn create_many_yields_independent_graphs() {
    let mut filler = Filler::with_seed(person_registry(), FillerSetup::new(), 42);

    let people: Vec<Value> = filler
        .create_many("Person", 3)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(people.len(), 3);

    // Every instance is a complete, independently generated graph.
    for person in &people {
        assert!(person.get_field("home").unwrap().get_field("city").is_some());
    }
    assert_ne!(people[0], people[1]);
}

#[test]
fn constructor_arguments_share_the_cycle_tracker() {
    // Chicken's constructor needs an Egg, and Egg's constructor needs a
    // Chicken: the cycle crosses constructor-argument recursion, not
    // property recursion, and must still be detected.
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDescriptor::object("Chicken", vec![Property::read_only("egg", "Egg")])
            .with_constructor(fill_core::Constructor::new(vec![fill_core::Param::new(
                "egg", "Egg",
            )])),
    );
    registry.register(
        TypeDescriptor::object("Egg", vec![Property::read_only("chicken", "Chicken")])
            .with_constructor(fill_core::Constructor::new(vec![fill_core::Param::new(
                "chicken", "Chicken",
            )])),
    );
    registry.validate().unwrap();

    let mut filler = Filler::with_seed(registry, FillerSetup::new(), 42);
    let result = filler.create("Chicken");
    assert!(matches!(result, Err(FillError::CircularReference(_))));
}

#[test]
fn plugin_overrides_shape_the_generated_values() {
    let mut registry = TypeRegistry::new();
    registry.register(TypeDescriptor::object(
        "Account",
        vec![
            Property::new("balance", "big_int"),
            Property::new("currency", "text"),
            Property::new("tier", "text"),
        ],
    ));
    registry.validate().unwrap();

    let config = default_fill_config()
        .with_generator_for("big_int", IntRange::new(-100, 100))
        .with_property_generator("Account", "currency", StaticValue::new(Value::Text("EUR".into())))
        .with_property_generator(
            "Account",
            "tier",
            OneOf::new(vec![
                Value::Text("free".into()),
                Value::Text("paid".into()),
            ]),
        );
    let mut filler = Filler::with_seed(registry, FillerSetup::new().with_default_config(config), 42);

    for _ in 0..20 {
        let account = filler.create("Account").unwrap();
        let balance = account.get_field("balance").unwrap().as_i64().unwrap();
        assert!((-100..=100).contains(&balance));
        assert_eq!(account.get_field("currency").unwrap().as_str(), Some("EUR"));
        let tier = account.get_field("tier").unwrap().as_str().unwrap();
        assert!(tier == "free" || tier == "paid");
    }
}

#[test]
fn model_loaded_from_yaml_fills_end_to_end() {
    let registry = TypeRegistry::from_yaml(
        r#"
version: 1

types:
  - name: Severity
    kind: enum
    variants: [Low, Medium, High]

  - name: Labels
    kind: list
    element: text

  - name: Ticket
    kind: object
    properties:
      - name: id
        type: uuid
      - name: title
        type: text
      - name: severity
        type: Severity
      - name: labels
        type: Labels
      - name: opened
        type: date_time
"#,
    )
    .unwrap();

    let setup =
        FillerSetup::new().with_default_config(default_fill_config().with_list_items(1, 3));
    let mut filler = Filler::with_seed(registry, setup, 42);

    let ticket = filler.create("Ticket").unwrap();
    assert!(ticket.get_field("id").unwrap().matches_scalar(ScalarKind::Uuid));
    assert!(!ticket.get_field("title").unwrap().as_str().unwrap().is_empty());

    let Value::Enum { variant, .. } = ticket.get_field("severity").unwrap() else {
        panic!("expected enum pick for severity");
    };
    assert!(["Low", "Medium", "High"].contains(&variant.as_str()));

    let labels = ticket.get_field("labels").unwrap().as_list().unwrap();
    assert!((1..=3).contains(&labels.len()));
}
