//! Category-to-item projection: what the grid shows for a category.

use crate::catalog::seed;
use crate::catalog::{Catalog, ItemKind, LauncherItem};

/// Items visible in `category`, in display order.
///
/// `home` is the first `home_slice` catalog entries; `apps` and `movies`
/// filter the catalog by kind; `tools` and `settings` are static; `store`
/// is the static listing with the acquired flag computed against the
/// catalog. Unknown categories are empty.
pub fn project(category: &str, catalog: &Catalog, home_slice: usize) -> Vec<LauncherItem> {
    match category {
        "home" => catalog.items().iter().take(home_slice).cloned().collect(),
        "apps" => catalog.of_kind(ItemKind::App).cloned().collect(),
        "movies" => catalog.of_kind(ItemKind::Movie).cloned().collect(),
        "tools" => seed::tool_items(),
        "settings" => seed::settings_items(),
        "store" => store_listing(catalog),
        _ => Vec::new(),
    }
}

/// Store listings with `acquired` set for every identifier already in the
/// catalog.
pub fn store_listing(catalog: &Catalog) -> Vec<LauncherItem> {
    seed::store_items()
        .into_iter()
        .map(|item| {
            let acquired = catalog.contains(&item.id);
            item.acquired(acquired)
        })
        .collect()
}

/// Everything omni search looks through: catalog, settings, store, tools.
pub fn searchable(catalog: &Catalog) -> Vec<LauncherItem> {
    let mut pool = catalog.items().to_vec();
    pool.extend(seed::settings_items());
    pool.extend(store_listing(catalog));
    pool.extend(seed::tool_items());
    pool
}
