//! Collection fillers: ordered sequences and associative containers.
//!
//! Both strategies choose a size uniformly at random within the configured
//! inclusive bounds and resolve every element recursively, sharing the
//! enclosing fill's cycle tracker. An element/key/value type that is
//! already open on the tracker is a soft stop: the fill produces an empty
//! container instead of recursing or failing.

use crate::error::FillError;
use crate::filler::Filler;
use crate::tracker::TypeTracker;
use fill_core::{FillConfig, TypeDescriptor, TypeId, Value};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

impl Filler {
    /// Fill an ordered sequence with recursively resolved elements.
    pub(crate) fn fill_list(
        &mut self,
        descriptor: &TypeDescriptor,
        element: &TypeId,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        let registry = Arc::clone(&self.registry);
        let element_descriptor = registry.get(element)?;

        if element_descriptor.is_reference() && tracker.contains(element) {
            debug!(list = %descriptor.name, element = %element, "element type already open, producing an empty list");
            return Ok(Value::List(Vec::new()));
        }

        let (min, max) = config.list_bounds();
        let count = self.rng.gen_range(min..=max);
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(self.resolve_value(element, config, tracker)?);
        }
        Ok(Value::List(items))
    }

    /// Fill an associative container with recursively resolved keys and
    /// values. A key equal to one already generated fails with a
    /// duplicate-key error; the key generator lacks entropy for the
    /// requested size and retrying would only mask that.
    pub(crate) fn fill_map(
        &mut self,
        descriptor: &TypeDescriptor,
        key_type: &TypeId,
        value_type: &TypeId,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        let registry = Arc::clone(&self.registry);
        let key_descriptor = registry.get(key_type)?;
        let value_descriptor = registry.get(value_type)?;

        let key_open = key_descriptor.is_reference() && tracker.contains(key_type);
        let value_open = value_descriptor.is_reference() && tracker.contains(value_type);
        if key_open || value_open {
            debug!(map = %descriptor.name, "key or value type already open, producing an empty map");
            return Ok(Value::Map(Vec::new()));
        }

        let (min, max) = config.map_bounds();
        let count = self.rng.gen_range(min..=max);
        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(count);
        for _ in 0..count {
            let key = self.resolve_value(key_type, config, tracker)?;
            if entries.iter().any(|(existing, _)| *existing == key) {
                warn!(key_type = %key_type, "key generator produced the same key twice");
                return Err(FillError::DuplicateKey(key_type.clone()));
            }
            let value = self.resolve_value(value_type, config, tracker)?;
            entries.push((key, value));
        }
        Ok(Value::Map(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{default_fill_config, FillerSetup};
    use fill_core::{Property, TypeRegistry};
    use rand::RngCore;

    fn filler(types: Vec<TypeDescriptor>, setup: FillerSetup) -> Filler {
        let mut registry = TypeRegistry::new();
        registry.register_all(types);
        registry.validate().unwrap();
        Filler::with_seed(registry, setup, 42)
    }

    #[test]
    fn test_list_count_within_bounds() {
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_list_items(3, 6));
        let mut filler = filler(vec![TypeDescriptor::list("Tags", "text")], setup);

        for _ in 0..50 {
            let value = filler.create("Tags").unwrap();
            let items = value.as_list().expect("list fill produces a list");
            assert!((3..=6).contains(&items.len()));
            assert!(items.iter().all(|item| item.as_str().is_some()));
        }
    }

    #[test]
    fn test_list_exact_bounds() {
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_list_items(2, 2));
        let mut filler = filler(vec![TypeDescriptor::list("Tags", "text")], setup);

        let value = filler.create("Tags").unwrap();
        assert_eq!(value.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_list_bounds_allowed() {
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_list_items(0, 0));
        let mut filler = filler(vec![TypeDescriptor::list("Tags", "text")], setup);

        let value = filler.create("Tags").unwrap();
        assert!(value.as_list().unwrap().is_empty());
    }

    #[test]
    fn test_map_unique_keys_within_bounds() {
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_map_keys(2, 5));
        let mut filler = filler(vec![TypeDescriptor::map("Scores", "uuid", "int")], setup);

        for _ in 0..20 {
            let value = filler.create("Scores").unwrap();
            let entries = value.as_map().expect("map fill produces a map");
            assert!((2..=5).contains(&entries.len()));
            for (i, (key, _)) in entries.iter().enumerate() {
                assert!(entries
                    .iter()
                    .enumerate()
                    .all(|(j, (other, _))| i == j || other != key));
            }
        }
    }

    #[test]
    fn test_constant_key_generator_fails_with_duplicate_key() {
        let constant = |_rng: &mut dyn RngCore| Value::Text("same".to_string());
        let setup = FillerSetup::new().with_default_config(
            default_fill_config()
                .with_map_keys(2, 2)
                .with_generator_for("text", constant),
        );
        let mut filler = filler(vec![TypeDescriptor::map("Index", "text", "int")], setup);

        let result = filler.create("Index");
        assert!(matches!(result, Err(FillError::DuplicateKey(t)) if t == TypeId::new("text")));
    }

    #[test]
    fn test_map_of_size_one_accepts_constant_keys() {
        let constant = |_rng: &mut dyn RngCore| Value::Text("same".to_string());
        let setup = FillerSetup::new().with_default_config(
            default_fill_config()
                .with_map_keys(1, 1)
                .with_generator_for("text", constant),
        );
        let mut filler = filler(vec![TypeDescriptor::map("Index", "text", "int")], setup);

        let value = filler.create("Index").unwrap();
        assert_eq!(value.as_map().unwrap().len(), 1);
    }

    #[test]
    fn test_list_element_cycle_soft_stops_empty() {
        // Node owns a list of Nodes. While Node's body is being filled the
        // type is open on the tracker, so the list soft-stops to empty
        // instead of recursing or failing, list bounds notwithstanding.
        let types = vec![
            TypeDescriptor::object(
                "Node",
                vec![Property::new("label", "text"), Property::new("children", "Children")],
            ),
            TypeDescriptor::list("Children", "Node"),
        ];
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_list_items(1, 3));
        let mut filler = filler(types, setup);

        let node = filler.create("Node").unwrap();
        let children = node.get_field("children").unwrap().as_list().unwrap();
        assert!(children.is_empty());
        assert!(node.get_field("label").is_some());
    }

    #[test]
    fn test_standalone_list_of_objects_is_populated() {
        // Without an enclosing Node fill the element type is not open, so
        // the list fills normally.
        let types = vec![
            TypeDescriptor::object("Item", vec![Property::new("label", "text")]),
            TypeDescriptor::list("Items", "Item"),
        ];
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_list_items(2, 2));
        let mut filler = filler(types, setup);

        let value = filler.create("Items").unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.get_field("label").is_some()));
    }

    #[test]
    fn test_map_value_cycle_soft_stops_empty() {
        let types = vec![
            TypeDescriptor::object(
                "Tree",
                vec![Property::new("name", "text"), Property::new("branches", "Branches")],
            ),
            TypeDescriptor::map("Branches", "text", "Tree"),
        ];
        let setup = FillerSetup::new()
            .with_default_config(default_fill_config().with_map_keys(1, 2));
        let mut filler = filler(types, setup);

        let tree = filler.create("Tree").unwrap();
        let branches = tree.get_field("branches").unwrap().as_map().unwrap();
        assert!(branches.is_empty());
        assert!(tree.get_field("name").is_some());
    }

    #[test]
    fn test_generator_registered_for_list_type_wins() {
        let fixed_list =
            |_rng: &mut dyn RngCore| Value::List(vec![Value::Text("only".to_string())]);
        let setup = FillerSetup::new().with_default_config(
            default_fill_config().with_generator_for("Tags", fixed_list),
        );
        let mut filler = filler(vec![TypeDescriptor::list("Tags", "text")], setup);

        let value = filler.create("Tags").unwrap();
        assert_eq!(value.as_list().unwrap().len(), 1);
    }
}
