//! Omni search overlay state and the favorites dock.

use zenith_types::input::Button;

use crate::catalog::seed::DOCK_FAVORITES;
use crate::catalog::{Catalog, LauncherItem};
use crate::projection;

/// Maximum results shown at once.
pub const MAX_RESULTS: usize = 5;

/// Case-insensitive substring match over title and description.
pub fn filter(pool: &[LauncherItem], query: &str) -> Vec<LauncherItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    pool.iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

/// Outcome of a button press inside the search overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    None,
    /// Selection moved (hover cue).
    Moved,
    /// Launch this result and close.
    Launch(LauncherItem),
    Close,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmniSearch {
    query: String,
    results: Vec<LauncherItem>,
    selected: usize,
}

impl OmniSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[LauncherItem] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the query and refilter; the selection resets to the top.
    pub fn set_query(&mut self, query: &str, pool: &[LauncherItem]) {
        self.query = query.to_string();
        self.results = filter(pool, &self.query);
        self.selected = 0;
    }

    pub fn push_char(&mut self, c: char, pool: &[LauncherItem]) {
        let mut q = std::mem::take(&mut self.query);
        q.push(c);
        self.set_query(&q, pool);
    }

    pub fn pop_char(&mut self, pool: &[LauncherItem]) {
        let mut q = std::mem::take(&mut self.query);
        q.pop();
        self.set_query(&q, pool);
    }

    pub fn handle_input(&mut self, button: &Button) -> SearchAction {
        match button {
            Button::Down => {
                self.selected = (self.selected + 1).min(self.results.len().saturating_sub(1));
                SearchAction::Moved
            },
            Button::Up => {
                self.selected = self.selected.saturating_sub(1);
                SearchAction::Moved
            },
            Button::Confirm => match self.results.get(self.selected) {
                Some(item) => SearchAction::Launch(item.clone()),
                None => SearchAction::None,
            },
            Button::Cancel => SearchAction::Close,
            _ => SearchAction::None,
        }
    }
}

/// Favorites present in the catalog or store, in source order, without
/// duplicates.
pub fn dock_items(catalog: &Catalog) -> Vec<LauncherItem> {
    let mut seen = Vec::new();
    catalog
        .items()
        .iter()
        .cloned()
        .chain(projection::store_listing(catalog))
        .filter(|item| DOCK_FAVORITES.contains(&item.id.as_str()))
        .filter(|item| {
            if seen.contains(&item.id) {
                false
            } else {
                seen.push(item.id.clone());
                true
            }
        })
        .collect()
}
