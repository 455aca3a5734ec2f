//! UUID generator.

use fill_core::{Value, ValueGenerator};
use rand::RngCore;
use uuid::Uuid;

/// Generates random version-4 UUIDs. The default generator for `uuid`.
///
/// The bytes are drawn from the filler's RNG so seeded fills stay
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct UuidV4;

impl ValueGenerator for UuidV4 {
    fn generate(&self, rng: &mut dyn RngCore) -> Value {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Value::Uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}
