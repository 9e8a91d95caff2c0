//! Modal overlays: one tagged enum, at most one open at a time.
//!
//! Each variant carries its own parameters and simulation state, so closing
//! or replacing an overlay discards whatever progress it had.

use std::fmt;
use std::str::FromStr;

use zenith_types::error::ZenithError;
use zenith_types::input::Button;

use crate::ambient::{THEMES, Theme, WIFI_NETWORKS};
use crate::catalog::LauncherItem;
use crate::readout::{CpuHistory, InputHub, SpeedTest};
use crate::search::OmniSearch;

// ---------------------------------------------------------------------------
// Settings panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPage {
    Main,
    Wifi,
    Themes,
    Bluetooth,
    Display,
}

/// Rows of the main settings page, in order.
pub const SETTINGS_MENU: [SettingsPage; 4] = [
    SettingsPage::Themes,
    SettingsPage::Wifi,
    SettingsPage::Bluetooth,
    SettingsPage::Display,
];

impl SettingsPage {
    /// Deep-link target for a settings item.
    pub fn for_item(item: Option<&LauncherItem>) -> Self {
        match item.map(|i| i.id.as_str()) {
            Some("wifi") => Self::Wifi,
            Some("display") => Self::Display,
            _ => Self::Main,
        }
    }

    fn rows(self) -> usize {
        match self {
            Self::Main => SETTINGS_MENU.len(),
            Self::Wifi => WIFI_NETWORKS.len(),
            Self::Themes => THEMES.len(),
            Self::Bluetooth | Self::Display => 0,
        }
    }
}

/// Outcome of a button press inside the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Moved,
    OpenedPage(SettingsPage),
    /// Returned from a sub-page to the main page.
    BackToMain,
    Close,
    ApplyTheme(Theme),
    ConnectWifi(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub item: Option<LauncherItem>,
    page: SettingsPage,
    selected: usize,
}

impl SettingsPanel {
    pub fn new(item: Option<LauncherItem>) -> Self {
        let page = SettingsPage::for_item(item.as_ref());
        Self {
            item,
            page,
            selected: 0,
        }
    }

    pub fn page(&self) -> SettingsPage {
        self.page
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_input(&mut self, button: &Button) -> SettingsAction {
        let rows = self.page.rows();
        match button {
            Button::Up if rows > 0 => {
                self.selected = self.selected.saturating_sub(1);
                SettingsAction::Moved
            },
            Button::Down if rows > 0 => {
                self.selected = (self.selected + 1).min(rows - 1);
                SettingsAction::Moved
            },
            Button::Confirm => match self.page {
                SettingsPage::Main => {
                    let page = SETTINGS_MENU[self.selected.min(SETTINGS_MENU.len() - 1)];
                    self.page = page;
                    self.selected = 0;
                    SettingsAction::OpenedPage(page)
                },
                SettingsPage::Themes => SettingsAction::ApplyTheme(THEMES[self.selected].theme),
                SettingsPage::Wifi => SettingsAction::ConnectWifi(WIFI_NETWORKS[self.selected]),
                SettingsPage::Bluetooth | SettingsPage::Display => SettingsAction::None,
            },
            Button::Cancel => {
                if self.page == SettingsPage::Main {
                    SettingsAction::Close
                } else {
                    self.page = SettingsPage::Main;
                    self.selected = 0;
                    SettingsAction::BackToMain
                }
            },
            _ => SettingsAction::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Context menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Open,
    Favorite,
    Details,
}

pub const CONTEXT_ACTIONS: [ContextAction; 3] =
    [ContextAction::Open, ContextAction::Favorite, ContextAction::Details];

// ---------------------------------------------------------------------------
// Overlay enum
// ---------------------------------------------------------------------------

/// The modal overlay currently shown, or `Closed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Settings(SettingsPanel),
    Weather,
    MoodSelector {
        selected: usize,
    },
    NeuralCore,
    SpeedTest(SpeedTest),
    InputHub(InputHub),
    OmniSearch(OmniSearch),
    Deck(CpuHistory),
    MovieDetail(LauncherItem),
    FileManager,
    Terminal,
    ProfileCreator,
    LaunchEffect {
        item: LauncherItem,
        step: u8,
    },
    ContextMenu {
        item: LauncherItem,
        selected: usize,
    },
    ProfileMenu {
        selected: usize,
    },
}

/// Overlay discriminant without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Closed,
    Settings,
    Weather,
    MoodSelector,
    NeuralCore,
    SpeedTest,
    InputHub,
    OmniSearch,
    Deck,
    MovieDetail,
    FileManager,
    Terminal,
    ProfileCreator,
    LaunchEffect,
    ContextMenu,
    ProfileMenu,
}

impl OverlayKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Settings => "settings",
            Self::Weather => "weather",
            Self::MoodSelector => "mood",
            Self::NeuralCore => "neural",
            Self::SpeedTest => "speedtest",
            Self::InputHub => "inputs",
            Self::OmniSearch => "search",
            Self::Deck => "deck",
            Self::MovieDetail => "movie",
            Self::FileManager => "files",
            Self::Terminal => "terminal",
            Self::ProfileCreator => "profile-creator",
            Self::LaunchEffect => "launch-effect",
            Self::ContextMenu => "context",
            Self::ProfileMenu => "profiles",
        }
    }

    /// Fresh overlay of this kind, for kinds without an item parameter.
    pub fn instantiate(self) -> Option<Overlay> {
        Some(match self {
            Self::Closed => Overlay::Closed,
            Self::Settings => Overlay::Settings(SettingsPanel::new(None)),
            Self::Weather => Overlay::Weather,
            Self::MoodSelector => Overlay::MoodSelector { selected: 0 },
            Self::NeuralCore => Overlay::NeuralCore,
            Self::SpeedTest => Overlay::SpeedTest(SpeedTest::default()),
            Self::InputHub => Overlay::InputHub(InputHub::default()),
            Self::OmniSearch => Overlay::OmniSearch(OmniSearch::new()),
            Self::Deck => Overlay::Deck(CpuHistory::default()),
            Self::FileManager => Overlay::FileManager,
            Self::Terminal => Overlay::Terminal,
            Self::ProfileCreator => Overlay::ProfileCreator,
            Self::ProfileMenu => Overlay::ProfileMenu { selected: 0 },
            Self::MovieDetail | Self::LaunchEffect | Self::ContextMenu => return None,
        })
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ALL_KINDS: [OverlayKind; 16] = [
    OverlayKind::Closed,
    OverlayKind::Settings,
    OverlayKind::Weather,
    OverlayKind::MoodSelector,
    OverlayKind::NeuralCore,
    OverlayKind::SpeedTest,
    OverlayKind::InputHub,
    OverlayKind::OmniSearch,
    OverlayKind::Deck,
    OverlayKind::MovieDetail,
    OverlayKind::FileManager,
    OverlayKind::Terminal,
    OverlayKind::ProfileCreator,
    OverlayKind::LaunchEffect,
    OverlayKind::ContextMenu,
    OverlayKind::ProfileMenu,
];

impl FromStr for OverlayKind {
    type Err = ZenithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ZenithError::Config(format!("unknown overlay '{s}'")))
    }
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::Closed => OverlayKind::Closed,
            Self::Settings(_) => OverlayKind::Settings,
            Self::Weather => OverlayKind::Weather,
            Self::MoodSelector { .. } => OverlayKind::MoodSelector,
            Self::NeuralCore => OverlayKind::NeuralCore,
            Self::SpeedTest(_) => OverlayKind::SpeedTest,
            Self::InputHub(_) => OverlayKind::InputHub,
            Self::OmniSearch(_) => OverlayKind::OmniSearch,
            Self::Deck(_) => OverlayKind::Deck,
            Self::MovieDetail(_) => OverlayKind::MovieDetail,
            Self::FileManager => OverlayKind::FileManager,
            Self::Terminal => OverlayKind::Terminal,
            Self::ProfileCreator => OverlayKind::ProfileCreator,
            Self::LaunchEffect { .. } => OverlayKind::LaunchEffect,
            Self::ContextMenu { .. } => OverlayKind::ContextMenu,
            Self::ProfileMenu { .. } => OverlayKind::ProfileMenu,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The item parameter, for overlays that carry one.
    pub fn item(&self) -> Option<&LauncherItem> {
        match self {
            Self::Settings(panel) => panel.item.as_ref(),
            Self::MovieDetail(item)
            | Self::LaunchEffect { item, .. }
            | Self::ContextMenu { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Same kind and same item parameter: reopening is a no-op.
    pub fn same_target(&self, other: &Overlay) -> bool {
        self.kind() == other.kind()
            && self.item().map(|i| &i.id) == other.item().map(|i| &i.id)
    }
}

// ---------------------------------------------------------------------------
// Coordinator
// ---------------------------------------------------------------------------

/// Result of an open request.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The requested overlay was already showing.
    Unchanged,
    /// Opened; carries whatever was showing before (maybe `Closed`).
    Opened { replaced: Overlay },
}

/// Owns the overlay slot and the picture-in-picture flag.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    current: Overlay,
    pip: bool,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Overlay {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Overlay {
        &mut self.current
    }

    pub fn is_open(&self) -> bool {
        !self.current.is_closed()
    }

    pub fn kind(&self) -> OverlayKind {
        self.current.kind()
    }

    /// Show `next`, replacing anything open.
    pub fn open(&mut self, next: Overlay) -> Transition {
        if self.current.same_target(&next) {
            return Transition::Unchanged;
        }
        log::debug!("Overlay {} -> {}", self.current.kind(), next.kind());
        let replaced = std::mem::replace(&mut self.current, next);
        Transition::Opened { replaced }
    }

    /// Close the overlay, returning what was open.
    pub fn close(&mut self) -> Overlay {
        let prev = std::mem::take(&mut self.current);
        if !prev.is_closed() {
            log::debug!("Overlay {} closed", prev.kind());
        }
        prev
    }

    pub fn pip_active(&self) -> bool {
        self.pip
    }

    pub fn set_pip(&mut self, on: bool) {
        self.pip = on;
    }
}
