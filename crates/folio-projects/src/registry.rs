//! The ordered project table and its filters.
//!
//! Every accessor is a linear scan that preserves declaration order. The
//! registry is immutable once built; share it behind an `Arc`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::record::{Category, ProjectRecord};

/// Information about a project category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub id: Category,
    /// Display name.
    pub name: String,
    /// Number of visible projects in this category.
    pub count: usize,
}

/// Immutable, ordered table of project records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<ProjectRecord>,
}

impl Registry {
    /// Build a registry from records in declaration order.
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// The table compiled into the site.
    pub fn builtin() -> Self {
        Self::new(builtin::projects())
    }

    /// Every record, hidden ones included.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with `visible == true`, in declaration order.
    pub fn list_visible_projects(&self) -> Vec<&ProjectRecord> {
        self.records.iter().filter(|r| r.visible).collect()
    }

    /// Visible records of one category, in declaration order.
    pub fn list_by_category(&self, category: Category) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|r| r.visible && r.category == category)
            .collect()
    }

    /// First record with the given id, visible or not.
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Categories with their visible counts. Empty categories are omitted.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryInfo {
                id: category,
                name: category.label().to_string(),
                count: self.list_by_category(category).len(),
            })
            .filter(|info| info.count > 0)
            .collect()
    }

    /// Ids that appear more than once, each reported once, in first-seen order.
    ///
    /// Uniqueness is a convention, so this is a lint rather than an error.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            let id = record.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl From<Vec<ProjectRecord>> for Registry {
    fn from(records: Vec<ProjectRecord>) -> Self {
        Self::new(records)
    }
}
