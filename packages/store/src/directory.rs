//! # Directory state and derivation pipeline
//!
//! [`DirectoryState`] is the view state owned by the directory component: the
//! fetched records, the search term, the sort key and the load-more window.
//! Nothing derived from it is stored. Every render calls
//! [`DirectoryState::page`], which runs the pipeline from scratch:
//!
//! 1. [`filter`] — keep records whose first or last name contains the term
//!    case-insensitively, or whose phone contains it verbatim.
//! 2. [`sort`] — stable ascending sort on the selected field using
//!    [`crate::collate::compare`]; [`SortKey::None`] keeps filter order.
//! 3. [`paginate`] — the first `visible` records plus a `has_more` flag.

use crate::collate;
use crate::config::ViewConfig;
use crate::load_more::LoadMore;
use crate::models::{SortKey, UserRecord};

/// Keep records matching `term`. An empty term keeps everything.
pub fn filter<'a>(records: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|user| matches(user, term, &needle))
        .collect()
}

fn matches(user: &UserRecord, term: &str, needle: &str) -> bool {
    user.first_name.to_lowercase().contains(needle)
        || user.last_name.to_lowercase().contains(needle)
        || user.phone.contains(term)
}

/// Order `records` by `key`. Ties keep their relative order.
pub fn sort(records: &mut [&UserRecord], key: SortKey) {
    if key == SortKey::None {
        return;
    }
    records.sort_by(|a, b| match (key.field(a), key.field(b)) {
        (Some(a), Some(b)) => collate::compare(a, b),
        _ => std::cmp::Ordering::Equal,
    });
}

/// The slice of the derived list that is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryPage<'a> {
    pub visible: Vec<&'a UserRecord>,
    /// Length of the filtered list before slicing.
    pub total: usize,
    pub has_more: bool,
}

/// Take the first `visible` records.
pub fn paginate(records: Vec<&UserRecord>, visible: usize) -> DirectoryPage<'_> {
    let total = records.len();
    let has_more = visible < total;
    let mut records = records;
    records.truncate(visible);
    DirectoryPage {
        visible: records,
        total,
        has_more,
    }
}

/// View state of the directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    records: Vec<UserRecord>,
    search_term: String,
    sort_key: SortKey,
    load_more: LoadMore,
}

impl DirectoryState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            load_more: LoadMore::from_config(config),
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Replace the record list with a freshly fetched batch.
    pub fn set_records(&mut self, records: Vec<UserRecord>) {
        self.records = records;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn visible_count(&self) -> usize {
        self.load_more.visible()
    }

    pub fn is_loading(&self) -> bool {
        self.load_more.is_loading()
    }

    /// Filtered and sorted records, before pagination.
    pub fn derived(&self) -> Vec<&UserRecord> {
        let mut derived = filter(&self.records, &self.search_term);
        sort(&mut derived, self.sort_key);
        derived
    }

    /// Run the full pipeline for the current state.
    pub fn page(&self) -> DirectoryPage<'_> {
        paginate(self.derived(), self.load_more.visible())
    }

    /// Start a load-more reveal. Refused while loading or when the derived
    /// list is already fully visible.
    pub fn begin_load_more(&mut self) -> bool {
        let total = self.derived().len();
        self.load_more.begin(total)
    }

    /// Finish the reveal started by [`begin_load_more`](Self::begin_load_more).
    pub fn complete_load_more(&mut self) -> bool {
        self.load_more.complete()
    }

    pub fn cancel_load_more(&mut self) {
        self.load_more.cancel();
    }
}
