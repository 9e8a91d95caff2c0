//! Built-in seed data: categories, initial catalog, and static listings.

use super::{Category, ItemKind, LauncherItem};

/// Sidebar categories in navigation order.
pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "home",
        name: "Home",
        icon: "Home",
    },
    Category {
        id: "apps",
        name: "Apps",
        icon: "Grid",
    },
    Category {
        id: "tools",
        name: "Tools",
        icon: "Cpu",
    },
    Category {
        id: "store",
        name: "Zenith Store",
        icon: "ShoppingBag",
    },
    Category {
        id: "movies",
        name: "AI Cinema",
        icon: "Clapperboard",
    },
    Category {
        id: "settings",
        name: "Settings",
        icon: "Settings",
    },
];

/// Identifier of the store category (Confirm installs there).
pub const STORE_CATEGORY: &str = "store";
/// Identifier of the category recommendations land in.
pub const MOVIES_CATEGORY: &str = "movies";

/// Dock favorites, in display order.
pub const DOCK_FAVORITES: [&str; 6] = ["netflix", "spotify", "youtube", "browser", "hbo", "disney"];

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?q=80&w=800&auto=format&fit=crop")
}

/// The catalog shipped with the launcher before any merge.
pub fn initial_items() -> Vec<LauncherItem> {
    vec![
        LauncherItem::new("nexus_home", "Nexus Home", ItemKind::SmartHomeWidget)
            .with_color("from-gray-900 to-black")
            .with_description("Home control"),
        LauncherItem::new("optimizer_widget", "Optimizer", ItemKind::Widget)
            .with_color("from-gray-800 to-gray-900")
            .with_description("System widget"),
        LauncherItem::new("netflix", "Netflix", ItemKind::App)
            .with_image(unsplash("1574375927938-d5a98e8ffe85"))
            .with_color("from-red-900 to-red-600")
            .acquired(true),
        LauncherItem::new("movie_dune", "Dune: Part Two", ItemKind::Movie)
            .with_image(unsplash("1541963463532-d68292c34b19"))
            .with_video(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            )
            .with_description("Paul Atreides unites with Chani and the Fremen on a path of revenge.")
            .with_color("from-orange-700 to-yellow-900"),
        LauncherItem::new("youtube", "YouTube", ItemKind::App)
            .with_image(unsplash("1611162617474-5b21e879e113"))
            .with_color("from-red-700 to-red-500")
            .acquired(true),
        LauncherItem::new("movie_blade", "Blade Runner 2049", ItemKind::Movie)
            .with_image(unsplash("1533177243638-8fa1bb7a93ac"))
            .with_video(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
            )
            .with_description("A new blade runner unearths a long-buried secret.")
            .with_color("from-cyan-900 to-blue-900"),
        LauncherItem::new("spotify", "Spotify", ItemKind::App)
            .with_image(unsplash("1614680376593-902f74cf0d41"))
            .with_color("from-green-700 to-green-500")
            .acquired(true),
    ]
}

/// Decorative system tools, each routed to a dedicated overlay.
pub fn tool_items() -> Vec<LauncherItem> {
    vec![
        LauncherItem::new("speedtest", "SpeedFlux", ItemKind::Tool)
            .with_icon("Gauge")
            .with_description("Quantum speed test")
            .with_color("from-cyan-900 to-blue-900"),
        LauncherItem::new("inputs", "HyperInput", ItemKind::Tool)
            .with_icon("HdmiPort")
            .with_description("HDMI source selector")
            .with_color("from-purple-900 to-pink-900"),
        LauncherItem::new("file_manager", "File Core", ItemKind::Tool)
            .with_icon("FolderKanban")
            .with_description("Root file manager")
            .with_color("from-amber-900 to-orange-900"),
        LauncherItem::new("terminal", "Sys Terminal", ItemKind::Tool)
            .with_icon("Terminal")
            .with_description("Command console")
            .with_color("from-black to-gray-900"),
    ]
}

/// Store listings. The acquired flag here is always false; the projection
/// recomputes it against the catalog.
pub fn store_items() -> Vec<LauncherItem> {
    vec![
        LauncherItem::new("hbo", "HBO Max", ItemKind::Store)
            .with_image(unsplash("1635863138275-d9b33299680b"))
            .with_description("Quality entertainment"),
        LauncherItem::new("disney", "Disney+", ItemKind::Store)
            .with_image(unsplash("1606229338681-189f7831d4d3"))
            .with_description("The best stories"),
        LauncherItem::new("geforce", "GeForce Now", ItemKind::Store)
            .with_image(unsplash("1605901309584-818e25960b8f"))
            .with_description("Cloud gaming"),
        LauncherItem::new("kodi", "Kodi", ItemKind::Store)
            .with_image(unsplash("1543536448-d209d2d13a1c"))
            .with_description("Media center"),
    ]
}

/// Settings shortcuts shown in the `settings` category.
pub fn settings_items() -> Vec<LauncherItem> {
    const SLATE: &str = "from-slate-700 to-slate-600";
    vec![
        LauncherItem::new("wifi", "Wi-Fi", ItemKind::Setting)
            .with_icon("Wifi")
            .with_color(SLATE),
        LauncherItem::new("display", "Display", ItemKind::Setting)
            .with_icon("Monitor")
            .with_color(SLATE),
        LauncherItem::new("account", "Account", ItemKind::Setting)
            .with_icon("User")
            .with_color(SLATE),
    ]
}

/// Index of a category in [`CATEGORIES`].
pub fn category_index(id: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        let ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, ["home", "apps", "tools", "store", "movies", "settings"]);
    }

    #[test]
    fn category_lookup() {
        assert_eq!(category_index("home"), Some(0));
        assert_eq!(category_index(MOVIES_CATEGORY), Some(4));
        assert_eq!(category_index("nope"), None);
    }

    #[test]
    fn static_lists() {
        assert_eq!(tool_items().len(), 4);
        assert!(store_items().iter().all(|i| i.kind == ItemKind::Store && !i.acquired));
        assert_eq!(settings_items().len(), 3);
    }

    #[test]
    fn seed_apps_have_no_package() {
        assert!(initial_items().iter().all(|i| i.package.is_none()));
    }
}
