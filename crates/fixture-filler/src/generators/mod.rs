//! Built-in value generators.
//!
//! These are the pluggable strategies registered by the default setup and
//! available for per-type or per-property overrides:
//!
//! - [`MnemonicString`] - pronounceable random words (default for `text`)
//! - [`IntRange`] / [`DoubleRange`] - uniform numeric ranges, inclusive
//! - [`DateTimeRange`] / [`DurationRange`] - uniform temporal ranges
//! - [`UuidV4`] - random UUIDs
//! - [`OneOf`] - uniform pick from a candidate list
//! - [`StaticValue`] - constant value

pub mod mnemonic;
pub mod numeric;
pub mod pick;
pub mod temporal;
pub mod uuid;

pub use mnemonic::MnemonicString;
pub use numeric::{DoubleRange, IntRange};
pub use pick::{OneOf, StaticValue};
pub use temporal::{DateTimeRange, DurationRange};
pub use uuid::UuidV4;
