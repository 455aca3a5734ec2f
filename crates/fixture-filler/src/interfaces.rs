//! Interface and abstract type resolution.
//!
//! An abstract contract is resolved in priority order: a generator
//! registered directly for the type, a configured implementation type
//! (constructed and filled like any nested object), or the injected
//! mocking provider. With none of those the fill fails; substituting an
//! absent instance would silently defeat the purpose of filling.

use crate::error::FillError;
use crate::filler::{cycle_outcome, Filler};
use crate::tracker::TypeTracker;
use fill_core::{FillConfig, InterfaceMocker, TypeDescriptor, Value};
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Minimal mocking provider: produces a bare instance typed as the
/// interface itself, relying on the filler to populate the interface's
/// settable properties afterwards.
#[derive(Debug, Clone, Default)]
pub struct StubMocker;

impl InterfaceMocker for StubMocker {
    fn create(&self, interface: &TypeDescriptor, _rng: &mut dyn RngCore) -> Value {
        Value::empty_object(interface.name.clone())
    }
}

impl Filler {
    /// Resolve an interface or abstract type to a filled concrete instance.
    pub(crate) fn resolve_abstract(
        &mut self,
        descriptor: &TypeDescriptor,
        config: &Arc<FillConfig>,
        tracker: &mut TypeTracker,
    ) -> Result<Value, FillError> {
        if let Some(generator) = config.generator_for(&descriptor.name) {
            return Ok(generator.generate(&mut self.rng));
        }

        let registry = Arc::clone(&self.registry);
        if let Some(implementation) = config.implementation_of(&descriptor.name) {
            debug!(interface = %descriptor.name, implementation = %implementation, "resolving via configured implementation");
            let implementation = registry.get(implementation)?;
            return self.fill_object(implementation, config, tracker);
        }

        if let Some(mocker) = config.mocker().cloned() {
            if tracker.contains(&descriptor.name) {
                return cycle_outcome(descriptor, config);
            }
            debug!(interface = %descriptor.name, "resolving via mocking provider");
            let mut instance = mocker.create(descriptor, &mut self.rng);
            // Even a mocked instance gets its settable properties populated.
            tracker.push(descriptor.name.clone());
            let filled = self.fill_properties(&mut instance, tracker);
            tracker.pop();
            filled?;
            return Ok(instance);
        }

        warn!(type_name = %descriptor.name, "interface mocker missing and no implementation registered");
        Err(FillError::UnresolvedAbstractType(descriptor.name.clone()))
    }
}
