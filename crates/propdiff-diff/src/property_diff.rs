//! Property-level diff: compare two value trees leaf-by-leaf.
//!
//! Both trees are flattened into path -> canonical-text views, then the
//! union of paths is walked in sorted order to produce added, removed, and
//! modified entries.

use std::collections::BTreeSet;
use std::fmt;

use propdiff_value::{to_value, PropertyPath, Value};
use serde::Serialize;
use tracing::debug;

use crate::error::{DiffError, DiffResult};
use crate::flatten::{flatten, FlattenedView};

/// Classification of a single property change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One recorded change at a property path.
///
/// Exactly one of three states holds: both values present and unequal
/// (modified), old value absent (added), or new value absent (removed).
/// Absence is `None`, never the empty string. A `PropertyDiff` is never
/// created for equal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDiff {
    pub path: PropertyPath,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl PropertyDiff {
    /// A change of value at a path present in both versions.
    pub fn modified(
        path: impl Into<PropertyPath>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            old_value: Some(old.into()),
            new_value: Some(new.into()),
        }
    }

    /// A path present only in the new version.
    pub fn added(path: impl Into<PropertyPath>, new: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            old_value: None,
            new_value: Some(new.into()),
        }
    }

    /// A path present only in the old version.
    pub fn removed(path: impl Into<PropertyPath>, old: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            old_value: Some(old.into()),
            new_value: None,
        }
    }

    /// Classify this change.
    pub fn kind(&self) -> ChangeKind {
        match (&self.old_value, &self.new_value) {
            (None, _) => ChangeKind::Added,
            (_, None) => ChangeKind::Removed,
            (Some(_), Some(_)) => ChangeKind::Modified,
        }
    }
}

impl fmt::Display for PropertyDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.old_value, &self.new_value) {
            (Some(old), Some(new)) => {
                write!(f, "'{}' changed from '{}' to '{}'", self.path, old, new)
            }
            (None, Some(new)) => write!(f, "'{}' added with value '{}'", self.path, new),
            (Some(old), None) => write!(f, "'{}' removed (was '{}')", self.path, old),
            (None, None) => write!(f, "'{}' unchanged", self.path),
        }
    }
}

/// The ordered result of comparing two value trees.
///
/// Changes are sorted by path in lexicographic (code-point) order; see
/// [`PropertyPath`] for the multi-digit index caveat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueDiff {
    /// The list of property changes.
    pub changes: Vec<PropertyDiff>,
}

impl ValueDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added paths.
    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Number of removed paths.
    pub fn removals(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    /// Number of modified paths.
    pub fn modifications(&self) -> usize {
        self.count(ChangeKind::Modified)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind() == kind).count()
    }
}

impl fmt::Display for ValueDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            writeln!(f, "{change}")?;
        }
        Ok(())
    }
}

/// Compare two value trees and return all property-level changes.
///
/// `None` for either argument means "argument not supplied" and fails with
/// [`DiffError::MissingArgument`] before any work is done; a present
/// `Value::Null` is an empty-but-valid tree and diffs normally. Either the
/// full diff is returned or the error; there are no partial results.
pub fn diff(before: Option<&Value>, after: Option<&Value>) -> DiffResult<ValueDiff> {
    let before = before.ok_or(DiffError::MissingArgument("before"))?;
    let after = after.ok_or(DiffError::MissingArgument("after"))?;
    Ok(diff_views(&flatten(before), &flatten(after)))
}

/// Compare two serializable values by converting both through the generic
/// tree model first.
pub fn diff_serialized<T: Serialize>(before: &T, after: &T) -> DiffResult<ValueDiff> {
    let before = to_value(before)?;
    let after = to_value(after)?;
    Ok(diff_views(&flatten(&before), &flatten(&after)))
}

/// Compare two flattened views path-by-path.
///
/// Walks the union of paths in sorted order: a path present in both views
/// with unequal canonical text is modified, a path only in `after` is
/// added, a path only in `before` is removed. Paths with equal text emit
/// nothing, so comparing a view against itself yields an empty diff.
pub fn diff_views(before: &FlattenedView, after: &FlattenedView) -> ValueDiff {
    let paths: BTreeSet<&PropertyPath> = before.paths().chain(after.paths()).collect();

    let mut changes = Vec::new();
    for path in paths {
        match (before.get(path.as_str()), after.get(path.as_str())) {
            (Some(old), Some(new)) if old != new => {
                changes.push(PropertyDiff::modified(path.clone(), old, new));
            }
            (Some(_), Some(_)) => {}
            (None, Some(new)) => changes.push(PropertyDiff::added(path.clone(), new)),
            (Some(old), None) => changes.push(PropertyDiff::removed(path.clone(), old)),
            (None, None) => {}
        }
    }

    debug!(changes = changes.len(), "computed value diff");
    ValueDiff { changes }
}
