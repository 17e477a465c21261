//! permenet-descriptors — The editable molecular-descriptor profile.
//!
//! A fixed, ordered set of numeric descriptors (HBA, HBD, TPSA, ...)
//! seeded with built-in defaults. The order of the set is load-bearing:
//! it defines both the argument order of descriptor-based queries and
//! the label order of the interpretation chart.

pub mod defaults;
pub mod store;

pub use store::{Descriptor, DescriptorSpec, DescriptorStore, DescriptorVector};
