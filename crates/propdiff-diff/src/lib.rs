//! Property-level diff engine for propdiff.
//!
//! Flattens generic value trees into path -> canonical-text views and
//! computes ordered change sets between two versions of a value.
//!
//! # Key Types
//!
//! - [`FlattenedView`] / [`flatten`] -- Leaf-path projection of a value tree
//! - [`ValueDiff`] / [`PropertyDiff`] -- Ordered change set between two trees
//! - [`diff`] / [`diff_views`] / [`diff_serialized`] -- Diff entry points

pub mod error;
pub mod flatten;
pub mod property_diff;

pub use error::{DiffError, DiffResult};
pub use flatten::{flatten, FlattenedView};
pub use property_diff::{diff, diff_serialized, diff_views, ChangeKind, PropertyDiff, ValueDiff};
