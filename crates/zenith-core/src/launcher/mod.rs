//! The launcher shell: one state machine owning focus, overlays, catalog,
//! timers, and the host services.
//!
//! Hosts feed [`InputEvent`]s through [`Launcher::handle_event`], advance
//! time with [`Launcher::tick`], and drain sound cues with
//! [`Launcher::drain_cues`]. Everything else is read back through
//! accessors or a serializable [`Snapshot`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use zenith_platform::{NativeAppProvider, RecommendationProvider};
use zenith_types::config::LauncherConfig;
use zenith_types::input::{Button, InputEvent};

use crate::ambient::{Ambient, MOODS, Mood, PROFILES, Theme};
use crate::boot::{BOOT_TIMELINE, BootSequence};
use crate::catalog::seed::{self, CATEGORIES, MOVIES_CATEGORY, STORE_CATEGORY};
use crate::catalog::{Catalog, Category, ItemKind, LauncherItem};
use crate::focus::{FocusController, FocusOutcome, FocusRegion};
use crate::hud::{Toast, VolumeHud};
use crate::idle::IdleMonitor;
use crate::launch::{self, LaunchRoute, LaunchState};
use crate::osk::{KeyboardTarget, OskAction, VirtualKeyboard};
use crate::overlay::{
    CONTEXT_ACTIONS, ContextAction, Overlay, OverlayCoordinator, OverlayKind, SettingsAction,
    SettingsPanel, Transition,
};
use crate::projection;
use crate::readout::{INPUT_SWITCH_MS, Readout, SpeedStage, StatusStats, StatusValues};
use crate::scheduler::Scheduler;
use crate::search::{self, SearchAction};
use crate::sound::SoundCue;
use crate::store::{InstallProgress, InstallRefusal, Installer};

/// Everything that can be waiting on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Idle,
    BootPhase(u8),
    EffectStep(u8),
    EffectDone,
    LaunchCall,
    LaunchRelease,
    InstallPoll,
    ToastExpire,
    VolumeHide,
    StatusRefresh,
    DeckSample,
    SpeedStep,
    InputSwitch,
}

/// What a button press inside an overlay resolved to.
#[derive(Debug)]
enum OverlayAction {
    None,
    Moved,
    Close,
    Settings(SettingsAction),
    Search(SearchAction),
    SetMood(Mood),
    SwitchProfile(usize),
    CreateProfile,
    Context(ContextAction, LauncherItem),
    StartSpeedTest,
    BeginInputSwitch,
    SettingsFromDeck,
    PlayMovie,
}

pub struct Launcher {
    config: LauncherConfig,
    catalog: Catalog,
    focus: FocusController,
    overlays: OverlayCoordinator,
    launch: LaunchState,
    installer: Installer,
    keyboard: Option<VirtualKeyboard>,
    ambient: Ambient,
    boot: BootSequence,
    idle: IdleMonitor,
    toast: Toast,
    volume: VolumeHud,
    status: StatusStats,
    /// Pending recommendation query.
    query: String,
    rec_batches: u64,
    timers: Scheduler<Timer>,
    cues: Vec<SoundCue>,
    rng: StdRng,
    native: Box<dyn NativeAppProvider>,
    recommender: Box<dyn RecommendationProvider>,
    quit: bool,
}

impl Launcher {
    /// Build the shell, merge installed apps, and start the boot, idle, and
    /// status timers.
    pub fn new(
        config: LauncherConfig,
        native: Box<dyn NativeAppProvider>,
        recommender: Box<dyn RecommendationProvider>,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let boot = if config.boot_sequence {
            BootSequence::running()
        } else {
            BootSequence::skipped()
        };
        let mut launcher = Self {
            focus: FocusController::new(config.grid_cols, CATEGORIES.len()),
            overlays: OverlayCoordinator::new(),
            launch: LaunchState::default(),
            installer: Installer::new(),
            keyboard: None,
            ambient: Ambient::default(),
            boot,
            idle: IdleMonitor::new(config.screensaver_timeout_ms),
            toast: Toast::new(config.toast_ms),
            volume: VolumeHud::new(
                config.initial_volume,
                config.volume_step,
                config.volume_hud_ms,
            ),
            status: StatusStats::default(),
            catalog: Catalog::seeded(),
            query: String::new(),
            rec_batches: 0,
            timers: Scheduler::new(),
            cues: Vec::new(),
            rng,
            native,
            recommender,
            quit: false,
            config,
        };
        launcher.load_native_apps();
        if launcher.boot.is_booting() {
            for step in &BOOT_TIMELINE {
                launcher
                    .timers
                    .schedule(step.at_ms, Timer::BootPhase(step.phase));
            }
        }
        launcher.idle.activity(&mut launcher.timers, Timer::Idle);
        let period = launcher.status.period_ms();
        launcher.timers.schedule(period, Timer::StatusRefresh);
        launcher
    }

    fn load_native_apps(&mut self) {
        match self.native.list_installed() {
            Ok(apps) => {
                let merged = self.catalog.merge_native(&apps);
                log::info!(
                    "Catalog ready: {} items ({merged} native)",
                    self.catalog.len()
                );
            },
            Err(e) => {
                log::warn!("Failed to load native apps: {e} -- using seed catalog");
            },
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    pub fn active_category(&self) -> &'static Category {
        &CATEGORIES[self.focus.category()]
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn overlay(&self) -> &Overlay {
        self.overlays.current()
    }

    pub fn pip_active(&self) -> bool {
        self.overlays.pip_active()
    }

    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    pub fn volume(&self) -> &VolumeHud {
        &self.volume
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.message()
    }

    pub fn keyboard(&self) -> Option<&VirtualKeyboard> {
        self.keyboard.as_ref()
    }

    pub fn installer(&self) -> &Installer {
        &self.installer
    }

    pub fn status(&self) -> StatusValues {
        self.status.value()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_launching(&self) -> bool {
        self.launch.is_launching()
    }

    pub fn launching_item(&self) -> Option<&LauncherItem> {
        self.launch.item()
    }

    pub fn is_booting(&self) -> bool {
        self.boot.is_booting()
    }

    pub fn boot_phase(&self) -> u8 {
        self.boot.phase()
    }

    pub fn screensaver_active(&self) -> bool {
        self.idle.is_screensaver_active()
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether background navigation is suppressed.
    pub fn input_blocked(&self) -> bool {
        self.overlays.is_open()
            || self.launch.is_launching()
            || self.keyboard.is_some()
            || self.boot.is_booting()
    }

    /// Items in the active grid.
    pub fn visible_items(&self) -> Vec<LauncherItem> {
        projection::project(
            self.active_category().id,
            &self.catalog,
            self.config.home_slice,
        )
    }

    /// The grid item under focus (only while the grid has focus).
    pub fn focused_item(&self) -> Option<LauncherItem> {
        if self.focus.region() != FocusRegion::Grid {
            return None;
        }
        self.visible_items().into_iter().nth(self.focus.index())
    }

    pub fn dock_items(&self) -> Vec<LauncherItem> {
        search::dock_items(&self.catalog)
    }

    /// Take the cues emitted since the last drain.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    fn cue(&mut self, cue: SoundCue) {
        log::debug!("Cue: {}", cue.name());
        self.cues.push(cue);
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        self.toast
            .show(message, &mut self.timers, Timer::ToastExpire);
    }

    // -- Input ----------------------------------------------------------------

    /// Process one input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if event.is_activity() {
            self.idle.activity(&mut self.timers, Timer::Idle);
        }
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::ButtonPress(b) if b.is_volume() => {
                self.volume
                    .adjust(*b == Button::VolumeUp, &mut self.timers, Timer::VolumeHide);
            },
            InputEvent::ButtonPress(b) => self.handle_button(b),
            InputEvent::Hover { index } => self.hover(*index),
            InputEvent::TextInput(c) => self.text_input(*c),
            InputEvent::Backspace => self.backspace(),
            InputEvent::PointerMove { .. } | InputEvent::PointerClick { .. } => {},
        }
    }

    fn handle_button(&mut self, button: &Button) {
        if self.boot.is_booting() {
            log::debug!("Dropped {button:?} during boot");
            return;
        }
        if self.keyboard.is_some() {
            self.keyboard_input(button);
            return;
        }
        if self.overlays.is_open() {
            self.overlay_input(button);
            return;
        }
        if self.launch.is_launching() {
            log::debug!("Dropped {button:?} while launching");
            return;
        }
        let count = self.visible_items().len();
        match self.focus.handle_input(button, count) {
            FocusOutcome::Ignored => {},
            FocusOutcome::Navigated => self.cue(SoundCue::Hover),
            FocusOutcome::Back => self.cue(SoundCue::Back),
            FocusOutcome::Activate(index) => self.activate(index),
        }
    }

    fn hover(&mut self, index: usize) {
        if self.input_blocked() {
            return;
        }
        let count = self.visible_items().len();
        if self.focus.hover(index, count) {
            self.cue(SoundCue::Hover);
        }
    }

    fn text_input(&mut self, c: char) {
        if let Some(kb) = self.keyboard.as_mut() {
            kb.type_char(c);
            return;
        }
        if self.overlays.kind() == OverlayKind::OmniSearch {
            let pool = projection::searchable(&self.catalog);
            if let Overlay::OmniSearch(s) = self.overlays.current_mut() {
                s.push_char(c, &pool);
            }
        }
    }

    fn backspace(&mut self) {
        if let Some(kb) = self.keyboard.as_mut() {
            kb.backspace();
            return;
        }
        if self.overlays.kind() == OverlayKind::OmniSearch {
            let pool = projection::searchable(&self.catalog);
            if let Overlay::OmniSearch(s) = self.overlays.current_mut() {
                s.pop_char(&pool);
            }
        }
    }

    /// Confirm on grid index `index` of the active category.
    fn activate(&mut self, index: usize) {
        let Some(item) = self.visible_items().into_iter().nth(index) else {
            return;
        };
        if self.active_category().id == STORE_CATEGORY {
            match self.catalog.get(&item.id).cloned() {
                Some(installed) => self.launch_item(&installed),
                None => self.install(&item),
            }
        } else {
            self.launch_item(&item);
        }
    }

    /// Pointer click on a sidebar category.
    pub fn select_category(&mut self, index: usize) {
        if self.input_blocked() || index >= CATEGORIES.len() {
            return;
        }
        self.cue(SoundCue::Select);
        self.focus.select_category(index);
    }

    /// Launch the dock favorite at `index`.
    pub fn launch_dock(&mut self, index: usize) -> bool {
        if self.input_blocked() {
            return false;
        }
        match self.dock_items().into_iter().nth(index) {
            Some(item) => {
                self.launch_item(&item);
                true
            },
            None => false,
        }
    }

    // -- Launch protocol ------------------------------------------------------

    /// Route a selected item: overlay, no-op, launch effect, or launch.
    pub fn launch_item(&mut self, item: &LauncherItem) {
        match launch::route(item) {
            LaunchRoute::Ignore => log::debug!("{} is not launchable", item.id),
            LaunchRoute::Overlay(overlay) => {
                self.cue(SoundCue::Select);
                self.open(overlay);
            },
            LaunchRoute::Effect if self.config.launch_effect_steps_ms.is_empty() => {
                self.cue(SoundCue::Select);
                self.begin_launch(item.clone());
            },
            LaunchRoute::Effect => {
                self.cue(SoundCue::Select);
                self.open(Overlay::LaunchEffect {
                    item: item.clone(),
                    step: 0,
                });
            },
            LaunchRoute::Direct => {
                self.cue(SoundCue::Select);
                self.begin_launch(item.clone());
            },
        }
    }

    fn begin_launch(&mut self, item: LauncherItem) {
        if self.launch.begin(item) {
            self.timers
                .schedule(self.config.launch_delay_ms, Timer::LaunchCall);
        }
    }

    fn launch_call(&mut self) {
        if let Some(package) = self.launch.package().map(str::to_owned)
            && let Err(e) = self.native.launch(&package)
        {
            log::warn!("Launch of {package} failed: {e}");
            let title = self
                .launch
                .clear()
                .map(|i| i.title)
                .unwrap_or(package);
            self.show_toast(format!("Error: could not open {title}"));
            self.cue(SoundCue::Error);
            return;
        }
        self.launch.hold();
        self.timers
            .schedule(self.config.launch_hold_ms, Timer::LaunchRelease);
    }

    // -- Overlays -------------------------------------------------------------

    /// Open an overlay by kind. Item-carrying kinds use the focused item;
    /// the launch effect cannot be opened directly.
    pub fn open_overlay(&mut self, kind: OverlayKind) -> bool {
        if self.boot.is_booting() {
            return false;
        }
        let overlay = match kind {
            OverlayKind::Closed => {
                self.close_overlay();
                return true;
            },
            OverlayKind::ContextMenu => match self.focused_item() {
                Some(item) => Overlay::ContextMenu { item, selected: 0 },
                None => return false,
            },
            OverlayKind::MovieDetail => {
                match self.focused_item().filter(|i| i.kind == ItemKind::Movie) {
                    Some(item) => Overlay::MovieDetail(item),
                    None => return false,
                }
            },
            other => match other.instantiate() {
                Some(overlay) => overlay,
                None => return false,
            },
        };
        self.cue(SoundCue::Select);
        self.open(overlay);
        true
    }

    /// Close whatever overlay is open (Back cue).
    pub fn close_overlay(&mut self) {
        if self.overlays.is_open() {
            self.cue(SoundCue::Back);
            self.dismiss();
        }
    }

    fn open(&mut self, overlay: Overlay) {
        if let Transition::Opened { replaced } = self.overlays.open(overlay) {
            self.teardown(&replaced);
            self.setup_current();
        }
    }

    /// Close without a cue.
    fn dismiss(&mut self) {
        let prev = self.overlays.close();
        self.teardown(&prev);
    }

    /// Stop the simulation timers of an overlay that went away.
    fn teardown(&mut self, gone: &Overlay) {
        let cancelled = match gone.kind() {
            OverlayKind::LaunchEffect => self
                .timers
                .cancel_where(|t| matches!(t, Timer::EffectStep(_) | Timer::EffectDone)),
            OverlayKind::SpeedTest => self.timers.cancel_where(|t| *t == Timer::SpeedStep),
            OverlayKind::InputHub => self.timers.cancel_where(|t| *t == Timer::InputSwitch),
            OverlayKind::Deck => self.timers.cancel_where(|t| *t == Timer::DeckSample),
            _ => 0,
        };
        if cancelled > 0 {
            log::debug!("Cancelled {cancelled} timers for {}", gone.kind());
        }
    }

    fn setup_current(&mut self) {
        match self.overlays.kind() {
            OverlayKind::LaunchEffect => {
                let steps = self.config.launch_effect_steps_ms.clone();
                let last = steps.len().saturating_sub(1);
                for (i, at) in steps.into_iter().enumerate() {
                    let timer = if i == last {
                        Timer::EffectDone
                    } else {
                        Timer::EffectStep(u8::try_from(i + 1).unwrap_or(u8::MAX))
                    };
                    self.timers.schedule(at, timer);
                }
            },
            OverlayKind::Deck => {
                if let Overlay::Deck(history) = self.overlays.current() {
                    let period = history.period_ms();
                    self.timers.schedule(period, Timer::DeckSample);
                }
            },
            _ => {},
        }
    }

    fn overlay_input(&mut self, button: &Button) {
        let action = match self.overlays.current_mut() {
            Overlay::Closed => OverlayAction::None,
            Overlay::Settings(panel) => OverlayAction::Settings(panel.handle_input(button)),
            Overlay::OmniSearch(s) => OverlayAction::Search(s.handle_input(button)),
            Overlay::MoodSelector { selected } => match button {
                Button::Left | Button::Up => {
                    *selected = selected.saturating_sub(1);
                    OverlayAction::Moved
                },
                Button::Right | Button::Down => {
                    *selected = (*selected + 1).min(MOODS.len() - 1);
                    OverlayAction::Moved
                },
                Button::Confirm => OverlayAction::SetMood(MOODS[*selected].mood),
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::ProfileMenu { selected } => match button {
                Button::Up => {
                    *selected = selected.saturating_sub(1);
                    OverlayAction::Moved
                },
                // Last row is "add profile".
                Button::Down => {
                    *selected = (*selected + 1).min(PROFILES.len());
                    OverlayAction::Moved
                },
                Button::Confirm if *selected < PROFILES.len() => {
                    OverlayAction::SwitchProfile(*selected)
                },
                Button::Confirm => OverlayAction::CreateProfile,
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::ContextMenu { item, selected } => match button {
                Button::Up => {
                    *selected = selected.saturating_sub(1);
                    OverlayAction::Moved
                },
                Button::Down => {
                    *selected = (*selected + 1).min(CONTEXT_ACTIONS.len() - 1);
                    OverlayAction::Moved
                },
                Button::Confirm => OverlayAction::Context(CONTEXT_ACTIONS[*selected], item.clone()),
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::SpeedTest(test) => match button {
                Button::Confirm => {
                    if test.start() {
                        OverlayAction::StartSpeedTest
                    } else {
                        OverlayAction::None
                    }
                },
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::InputHub(hub) => match button {
                Button::Up => {
                    hub.select_prev();
                    OverlayAction::Moved
                },
                Button::Down => {
                    hub.select_next();
                    OverlayAction::Moved
                },
                Button::Confirm => {
                    if hub.begin_switch() {
                        OverlayAction::BeginInputSwitch
                    } else {
                        OverlayAction::None
                    }
                },
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::Deck(_) => match button {
                Button::Confirm => OverlayAction::SettingsFromDeck,
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::MovieDetail(_) => match button {
                Button::Confirm => OverlayAction::PlayMovie,
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
            Overlay::Weather
            | Overlay::NeuralCore
            | Overlay::FileManager
            | Overlay::Terminal
            | Overlay::ProfileCreator
            | Overlay::LaunchEffect { .. } => match button {
                Button::Cancel => OverlayAction::Close,
                _ => OverlayAction::None,
            },
        };
        self.apply_overlay_action(action);
    }

    fn apply_overlay_action(&mut self, action: OverlayAction) {
        match action {
            OverlayAction::None => {},
            OverlayAction::Moved => self.cue(SoundCue::Hover),
            OverlayAction::Close => self.close_overlay(),
            OverlayAction::Settings(action) => match action {
                SettingsAction::None => {},
                SettingsAction::Moved => self.cue(SoundCue::Hover),
                SettingsAction::OpenedPage(_) => self.cue(SoundCue::Select),
                SettingsAction::BackToMain => self.cue(SoundCue::Back),
                SettingsAction::Close => self.close_overlay(),
                SettingsAction::ApplyTheme(theme) => self.set_theme(theme),
                SettingsAction::ConnectWifi(ssid) => self.connect_wifi(ssid),
            },
            OverlayAction::Search(action) => match action {
                SearchAction::None => {},
                SearchAction::Moved => self.cue(SoundCue::Hover),
                SearchAction::Launch(item) => {
                    self.dismiss();
                    self.launch_item(&item);
                },
                SearchAction::Close => self.close_overlay(),
            },
            OverlayAction::SetMood(mood) => self.set_mood(mood),
            OverlayAction::SwitchProfile(index) => {
                self.switch_profile(index);
            },
            OverlayAction::CreateProfile => {
                self.cue(SoundCue::Select);
                self.open(Overlay::ProfileCreator);
            },
            OverlayAction::Context(action, item) => {
                self.dismiss();
                match action {
                    ContextAction::Open => self.launch_item(&item),
                    ContextAction::Favorite => {
                        self.cue(SoundCue::Select);
                        self.show_toast(format!("{} pinned to favorites", item.title));
                    },
                    ContextAction::Details => {
                        self.cue(SoundCue::Select);
                        if item.kind == ItemKind::Movie {
                            self.open(Overlay::MovieDetail(item));
                        } else {
                            let text = item.description.unwrap_or(item.title);
                            self.show_toast(text);
                        }
                    },
                }
            },
            OverlayAction::StartSpeedTest => {
                self.cue(SoundCue::Select);
                self.timers.schedule(100, Timer::SpeedStep);
            },
            OverlayAction::BeginInputSwitch => {
                self.cue(SoundCue::Select);
                self.timers.schedule(INPUT_SWITCH_MS, Timer::InputSwitch);
            },
            OverlayAction::SettingsFromDeck => {
                self.cue(SoundCue::Select);
                self.open(Overlay::Settings(SettingsPanel::new(None)));
            },
            OverlayAction::PlayMovie => self.play_movie(),
        }
    }

    // -- Keyboard -------------------------------------------------------------

    /// Show the on-screen keyboard, prefilled with the pending query.
    pub fn open_keyboard(&mut self) -> bool {
        if self.input_blocked() {
            return false;
        }
        self.cue(SoundCue::Select);
        self.keyboard = Some(VirtualKeyboard::new(KeyboardTarget::Search, &self.query));
        true
    }

    fn keyboard_input(&mut self, button: &Button) {
        let Some(kb) = self.keyboard.as_mut() else {
            return;
        };
        let target = kb.target;
        match kb.handle_input(button) {
            OskAction::None => {},
            OskAction::Cancel => {
                self.keyboard = None;
                self.cue(SoundCue::Back);
            },
            OskAction::Submit(text) => {
                self.keyboard = None;
                self.cue(SoundCue::Success);
                match target {
                    KeyboardTarget::Search => {
                        self.query = text;
                        self.run_recommendations();
                    },
                }
            },
        }
    }

    // -- Store ----------------------------------------------------------------

    fn install(&mut self, listing: &LauncherItem) {
        if self.catalog.contains(&listing.id) {
            return;
        }
        match self.installer.start(listing) {
            Ok(()) => {
                self.cue(SoundCue::Select);
                self.timers
                    .schedule(self.config.install_poll_ms, Timer::InstallPoll);
            },
            Err(InstallRefusal::Busy { current }) => {
                log::warn!("Install of {} refused: {current} in progress", listing.id);
                self.cue(SoundCue::Error);
            },
        }
    }

    fn install_poll(&mut self) {
        match self.installer.poll(&mut self.rng) {
            Some(InstallProgress::Running(pct)) => {
                log::debug!("Install progress {pct}%");
                self.timers
                    .schedule(self.config.install_poll_ms, Timer::InstallPoll);
            },
            Some(InstallProgress::Complete(listing)) => {
                self.cue(SoundCue::Success);
                if let Some(app) = self.catalog.install(&listing) {
                    self.show_toast(format!("{} added to Apps", app.title));
                }
            },
            None => {},
        }
    }

    // -- Recommendations ------------------------------------------------------

    /// Set the pending query and run it.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.run_recommendations();
    }

    /// Ask the recommendation provider for the pending query.
    ///
    /// A blank query is a no-op. Either way the query is cleared after the
    /// call.
    pub fn run_recommendations(&mut self) {
        if self.query.trim().is_empty() || self.boot.is_booting() {
            return;
        }
        let query = std::mem::take(&mut self.query);
        self.cue(SoundCue::Select);
        match self.recommender.recommend(&query) {
            Ok(recs) if !recs.is_empty() => {
                self.rec_batches += 1;
                let added = self
                    .catalog
                    .prepend_recommendations(&recs, self.rec_batches);
                self.cue(SoundCue::Success);
                if let Some(movies) = seed::category_index(MOVIES_CATEGORY) {
                    self.focus.select_category(movies);
                }
                self.show_toast(format!("Found {added} results"));
            },
            Ok(_) => {
                log::warn!("No recommendations for '{query}'");
                self.cue(SoundCue::Error);
            },
            Err(e) => {
                log::warn!("Recommendation request failed: {e}");
                self.cue(SoundCue::Error);
            },
        }
    }

    // -- Ambient --------------------------------------------------------------

    pub fn set_mood(&mut self, mood: Mood) {
        self.ambient.mood = mood;
        self.cue(SoundCue::Success);
        if self.overlays.kind() == OverlayKind::MoodSelector {
            self.dismiss();
        }
        self.show_toast(format!("Ambience: {} enabled", mood.preset().label));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.ambient.theme = theme;
        self.cue(SoundCue::Success);
        log::info!("Theme: {}", theme.preset().label);
    }

    pub fn switch_profile(&mut self, index: usize) -> bool {
        let Some(profile) = PROFILES.get(index).copied() else {
            return false;
        };
        self.ambient.profile = profile;
        if self.overlays.kind() == OverlayKind::ProfileMenu {
            self.dismiss();
        }
        self.show_toast(format!("Welcome, {}", profile.name));
        self.cue(SoundCue::Success);
        true
    }

    pub fn connect_wifi(&mut self, ssid: &str) {
        self.ambient.wifi = Some(ssid.to_string());
        self.show_toast(format!("Connected to {ssid}"));
    }

    /// Smart-home widget light switch.
    pub fn toggle_lights(&mut self) -> bool {
        self.ambient.lights_on = !self.ambient.lights_on;
        self.cue(SoundCue::Select);
        self.ambient.lights_on
    }

    // -- Picture-in-picture ---------------------------------------------------

    fn play_movie(&mut self) {
        if self.overlays.kind() != OverlayKind::MovieDetail {
            return;
        }
        self.dismiss();
        self.overlays.set_pip(true);
        self.show_toast("Playing in picture-in-picture");
    }

    pub fn expand_pip(&mut self) {
        if self.overlays.pip_active() {
            self.overlays.set_pip(false);
            self.show_toast("Normal mode restored");
        }
    }

    pub fn stop_pip(&mut self) {
        if self.overlays.pip_active() {
            self.overlays.set_pip(false);
            self.show_toast("Playback stopped");
        }
    }

    // -- Time -----------------------------------------------------------------

    /// Advance virtual time by `dt_ms`, firing every timer that comes due
    /// (including ones scheduled along the way).
    pub fn tick(&mut self, dt_ms: u64) {
        let until = self.timers.now().saturating_add(dt_ms);
        while let Some(timer) = self.timers.pop_due(until) {
            self.fire(timer);
        }
        self.timers.advance_to(until);
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::Idle => self.idle.expire(),
            Timer::BootPhase(phase) => {
                if let Some(cue) = self.boot.enter(phase) {
                    self.cue(cue);
                }
            },
            Timer::EffectStep(n) => {
                if let Overlay::LaunchEffect { step, .. } = self.overlays.current_mut() {
                    *step = n;
                }
            },
            Timer::EffectDone => {
                if let Overlay::LaunchEffect { item, .. } = self.overlays.current() {
                    let item = item.clone();
                    self.dismiss();
                    self.begin_launch(item);
                }
            },
            Timer::LaunchCall => self.launch_call(),
            Timer::LaunchRelease => {
                self.launch.clear();
            },
            Timer::InstallPoll => self.install_poll(),
            Timer::ToastExpire => self.toast.expire(),
            Timer::VolumeHide => self.volume.hide(),
            Timer::StatusRefresh => {
                self.status.tick(&mut self.rng);
                let period = self.status.period_ms();
                self.timers.schedule(period, Timer::StatusRefresh);
            },
            Timer::DeckSample => {
                if let Overlay::Deck(history) = self.overlays.current_mut() {
                    history.tick(&mut self.rng);
                    let period = history.period_ms();
                    self.timers.schedule(period, Timer::DeckSample);
                }
            },
            Timer::SpeedStep => {
                let mut finished = false;
                if let Overlay::SpeedTest(test) = self.overlays.current_mut() {
                    test.tick(&mut self.rng);
                    if test.is_running() {
                        let period = test.period_ms();
                        self.timers.schedule(period, Timer::SpeedStep);
                    } else {
                        finished = test.stage() == SpeedStage::Done;
                    }
                }
                if finished {
                    self.cue(SoundCue::Success);
                }
            },
            Timer::InputSwitch => {
                let mut switched = None;
                if let Overlay::InputHub(hub) = self.overlays.current_mut() {
                    switched = hub.finish_switch();
                }
                if let Some(source) = switched {
                    log::info!("Input switched to {} ({})", source.id, source.label);
                    self.cue(SoundCue::Success);
                }
            },
        }
    }

    /// Serializable view of the shell state, for hosts and logs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            now_ms: self.timers.now(),
            category: self.active_category().id,
            region: self.focus.region(),
            index: self.focus.index(),
            focused: self.focused_item().map(|i| i.title),
            overlay: self.overlays.kind().name(),
            pip: self.overlays.pip_active(),
            launching: self.launch.item().map(|i| i.title.clone()),
            keyboard: self.keyboard.as_ref().map(|k| k.text().to_string()),
            toast: self.toast.message().map(str::to_owned),
            volume: self.volume.level(),
            volume_hud: self.volume.is_visible(),
            screensaver: self.idle.is_screensaver_active(),
            booting: self.boot.is_booting(),
            mood: self.ambient.mood,
            theme: self.ambient.theme,
            profile: self.ambient.profile.name,
            lights_on: self.ambient.lights_on,
            wifi: self.ambient.wifi.clone(),
            installing: self
                .installer
                .current()
                .map(|(id, pct)| (id.to_string(), pct)),
            catalog_len: self.catalog.len(),
            status: self.status.value(),
        }
    }
}

/// Point-in-time view of the launcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub now_ms: u64,
    pub category: &'static str,
    pub region: FocusRegion,
    pub index: usize,
    pub focused: Option<String>,
    pub overlay: &'static str,
    pub pip: bool,
    pub launching: Option<String>,
    pub keyboard: Option<String>,
    pub toast: Option<String>,
    pub volume: u8,
    pub volume_hud: bool,
    pub screensaver: bool,
    pub booting: bool,
    pub mood: Mood,
    pub theme: Theme,
    pub profile: &'static str,
    pub lights_on: bool,
    pub wifi: Option<String>,
    pub installing: Option<(String, u8)>,
    pub catalog_len: usize,
    pub status: StatusValues,
}

#[cfg(test)]
mod tests;
