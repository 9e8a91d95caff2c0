//! Launcher item model and the mutable catalog that feeds the grid.
//!
//! The catalog only ever grows: native apps are merged once at startup,
//! store installs append, recommendation batches prepend. Every mutation
//! builds a fresh item list and swaps it in whole.

pub mod seed;

use std::collections::HashSet;

use serde::Serialize;
use zenith_platform::{NativeApp, Recommendation};

/// Kind of a launcher entry; decides how selection is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    App,
    Movie,
    Setting,
    Store,
    Widget,
    SmartHomeWidget,
    Tool,
}

impl ItemKind {
    /// Whether a native app with the same identifier replaces this entry.
    pub fn yields_to_native(self) -> bool {
        matches!(self, Self::App | Self::Widget | Self::SmartHomeWidget)
    }
}

/// A single launchable (or decorative) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Icon name or data URL.
    pub icon: Option<String>,
    pub image_url: Option<String>,
    /// Motion-preview URL.
    pub video_url: Option<String>,
    pub kind: ItemKind,
    /// Gradient token, e.g. `from-red-900 to-red-600`.
    pub color: Option<String>,
    /// Native package to hand to the host on launch.
    pub package: Option<String>,
    /// "Already acquired" flag (store listings, installed apps).
    pub acquired: bool,
}

impl LauncherItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            icon: None,
            image_url: None,
            video_url: None,
            kind,
            color: None,
            package: None,
            acquired: false,
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_color(mut self, token: impl Into<String>) -> Self {
        self.color = Some(token.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn acquired(mut self, acquired: bool) -> Self {
        self.acquired = acquired;
        self
    }

    /// Build the catalog entry for a host-reported app.
    pub fn from_native(app: &NativeApp) -> Self {
        let mut item = Self::new(app.package.clone(), app.label.clone(), ItemKind::App)
            .with_description("Installed application")
            .with_package(app.package.clone())
            .with_color(NATIVE_COLOR);
        if !app.icon.is_empty() {
            item.image_url = Some(app.icon.clone());
        }
        item
    }
}

/// A sidebar category. Static; order is the sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

const NATIVE_COLOR: &str = "from-gray-800 to-gray-900";
/// Gradient given to apps installed from the store.
pub const INSTALLED_COLOR: &str = "from-blue-600 to-blue-400";
/// Gradient given to generated recommendation entries.
pub const RECOMMENDATION_COLOR: &str = "from-purple-900 to-indigo-900";

/// The ordered, growing list of launcher items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<LauncherItem>,
}

impl Catalog {
    pub fn new(items: Vec<LauncherItem>) -> Self {
        Self { items }
    }

    /// Catalog holding the built-in seed entries.
    pub fn seeded() -> Self {
        Self::new(seed::initial_items())
    }

    pub fn items(&self) -> &[LauncherItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&LauncherItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items of one kind, in catalog order.
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &LauncherItem> {
        self.items.iter().filter(move |i| i.kind == kind)
    }

    /// Merge the host's installed apps into the catalog.
    ///
    /// Entries whose identifier a native app claims are dropped, everything
    /// else keeps its position, and the native apps are appended in host
    /// order. Merging the same list twice yields the same catalog. An empty
    /// list leaves the catalog untouched. Returns the number of native apps
    /// merged.
    pub fn merge_native(&mut self, apps: &[NativeApp]) -> usize {
        if apps.is_empty() {
            return 0;
        }
        let native: HashSet<&str> = apps.iter().map(|a| a.package.as_str()).collect();
        let mut merged: Vec<LauncherItem> = self
            .items
            .iter()
            .filter(|i| !native.contains(i.id.as_str()))
            .cloned()
            .collect();
        let mut seen = HashSet::new();
        for app in apps {
            if seen.insert(app.package.as_str()) {
                merged.push(LauncherItem::from_native(app));
            }
        }
        let replaced = self
            .items
            .iter()
            .filter(|i| native.contains(i.id.as_str()) && !i.kind.yields_to_native())
            .count();
        if replaced > 0 {
            log::warn!("{replaced} non-app seed entries shadowed by native apps");
        }
        self.items = merged;
        seen.len()
    }

    /// Append an installed copy of a store listing.
    ///
    /// Returns the new entry, or `None` when the identifier is already in
    /// the catalog.
    pub fn install(&mut self, listing: &LauncherItem) -> Option<LauncherItem> {
        if self.contains(&listing.id) {
            return None;
        }
        let mut app = listing.clone();
        app.kind = ItemKind::App;
        app.color = Some(INSTALLED_COLOR.to_string());
        app.acquired = true;
        let mut next = self.items.clone();
        next.push(app.clone());
        self.items = next;
        Some(app)
    }

    /// Prepend a batch of generated recommendations as Movie entries.
    ///
    /// Identifiers are `ai-<batch>-<idx>`; entries whose identifier already
    /// exists are skipped. Returns the number of entries added.
    pub fn prepend_recommendations(&mut self, recs: &[Recommendation], batch: u64) -> usize {
        let fresh: Vec<LauncherItem> = recs
            .iter()
            .enumerate()
            .map(|(idx, rec)| {
                LauncherItem::new(format!("ai-{batch}-{idx}"), rec.title.clone(), ItemKind::Movie)
                    .with_description(rec.description.clone())
                    .with_image(format!(
                        "https://picsum.photos/800/600?random={}",
                        batch * 100 + idx as u64
                    ))
                    .with_color(RECOMMENDATION_COLOR)
            })
            .filter(|item| !self.contains(&item.id))
            .collect();
        let added = fresh.len();
        let mut next = fresh;
        next.extend(self.items.iter().cloned());
        self.items = next;
        added
    }
}
