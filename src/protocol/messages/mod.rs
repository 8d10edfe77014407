//! MySQL message definitions.
//!
//! Each message implements the `Message` trait for single-allocation serialization.

pub mod column_descriptor;

pub use column_descriptor::{ColumnDescriptor, ColumnDescriptorBuilder};
