//! Entry Group State
//!
//! Ordered collection of entry-group view models rendered by the form.

use leptos::prelude::*;
use web_sys::File;

/// One entry group's field signals.
///
/// The picture lives in a thread-local signal slot: `web_sys::File`
/// handles are not `Send`.
#[derive(Clone, Copy)]
pub struct EntryGroup {
    /// Stable render key, unique for the page lifetime
    pub id: u32,
    pub item: RwSignal<String>,
    pub food: RwSignal<String>,
    pub price: RwSignal<String>,
    pub picture: RwSignal<Option<File>, LocalStorage>,
}

impl EntryGroup {
    fn new(id: u32) -> Self {
        Self {
            id,
            item: RwSignal::new(String::new()),
            food: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            picture: RwSignal::new_local(None),
        }
    }
}

/// Ordered entry groups with a monotonically increasing id counter.
/// Groups are only ever appended; there is no remove control.
pub struct EntryGroups {
    next_id: u32,
    groups: Vec<EntryGroup>,
}

impl EntryGroups {
    /// Starts with a single empty group, like the initial page
    pub fn new() -> Self {
        let mut list = Self { next_id: 0, groups: Vec::new() };
        list.add();
        list
    }

    /// Append one structurally identical group at the end
    pub fn add(&mut self) {
        self.groups.push(EntryGroup::new(self.next_id));
        self.next_id += 1;
    }

    /// Groups in visual order
    pub fn entries(&self) -> &[EntryGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_group() {
        let groups = EntryGroups::new();
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_add_appends_without_reordering() {
        let mut groups = EntryGroups::new();
        groups.add();
        groups.add();

        assert_eq!(groups.len(), 3);
        let ids: Vec<u32> = groups.entries().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_ids_stay_unique_as_groups_grow() {
        let mut groups = EntryGroups::new();
        for _ in 0..5 {
            groups.add();
        }
        let mut ids: Vec<u32> = groups.entries().iter().map(|g| g.id).collect();
        let count = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
