//! Screen-access selection with the "select all" switch.
//!
//! The selection is a plain set of screen ids. It is evaluated against a
//! universe (the catalog loaded for the form session) but does not reject ids
//! outside of it.

use std::collections::BTreeSet;

use skypass_core::ModuleId;

/// Screens granted to a draft user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessSelection {
    granted: BTreeSet<ModuleId>,
}

impl AccessSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = ModuleId>) -> Self {
        Self {
            granted: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.granted.contains(id)
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleId> {
        self.granted.iter()
    }

    pub fn to_vec(&self) -> Vec<ModuleId> {
        self.granted.iter().cloned().collect()
    }

    /// Flip one screen. Returns whether it is granted afterwards.
    pub fn toggle(&mut self, id: ModuleId) -> bool {
        if self.granted.remove(&id) {
            false
        } else {
            self.granted.insert(id);
            true
        }
    }

    /// True iff every id of `universe` is granted (vacuously true when empty).
    pub fn all_selected(&self, universe: &[ModuleId]) -> bool {
        universe.iter().all(|id| self.granted.contains(id))
    }

    /// The "select all" switch.
    ///
    /// Pivots on [`all_selected`](Self::all_selected): when it holds the
    /// selection is cleared, otherwise it becomes exactly `universe`. Any prior
    /// partial state is discarded either way. Returns the new switch state.
    pub fn toggle_all(&mut self, universe: &[ModuleId]) -> bool {
        if self.all_selected(universe) {
            self.granted.clear();
            false
        } else {
            self.granted = universe.iter().cloned().collect();
            true
        }
    }
}

impl FromIterator<ModuleId> for AccessSelection {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
