use std::cell::RefCell;
use std::rc::Rc;

use zenith_platform::{JsonBridge, JsonRecommender, NativeApp, Recommendation};
use zenith_types::error::{Result, ZenithError};

use super::*;
use crate::ambient::WIFI_NETWORKS;
use crate::overlay::SettingsPage;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MockNative {
    apps: Vec<NativeApp>,
    broken_list: bool,
    refuse: bool,
    launched: Rc<RefCell<Vec<String>>>,
}

impl NativeAppProvider for MockNative {
    fn list_installed(&self) -> Result<Vec<NativeApp>> {
        if self.broken_list {
            return Err(ZenithError::Platform("bridge offline".into()));
        }
        Ok(self.apps.clone())
    }

    fn launch(&mut self, package: &str) -> Result<()> {
        if self.refuse {
            return Err(ZenithError::Platform(format!("{package} refused")));
        }
        self.launched.borrow_mut().push(package.to_string());
        Ok(())
    }
}

struct MockRecommender {
    reply: Option<Vec<Recommendation>>,
    queries: Rc<RefCell<Vec<String>>>,
}

impl RecommendationProvider for MockRecommender {
    fn recommend(&mut self, query: &str) -> Result<Vec<Recommendation>> {
        self.queries.borrow_mut().push(query.to_string());
        self.reply
            .clone()
            .ok_or_else(|| ZenithError::Provider("quota exceeded".into()))
    }
}

struct Harness {
    shell: Launcher,
    launched: Rc<RefCell<Vec<String>>>,
    queries: Rc<RefCell<Vec<String>>>,
}

fn quiet_config() -> LauncherConfig {
    LauncherConfig {
        boot_sequence: false,
        rng_seed: Some(7),
        ..LauncherConfig::default()
    }
}

fn harness(native: MockNative, reply: Option<Vec<Recommendation>>, config: LauncherConfig) -> Harness {
    let launched = Rc::clone(&native.launched);
    let queries = Rc::new(RefCell::new(Vec::new()));
    let recommender = MockRecommender {
        reply,
        queries: Rc::clone(&queries),
    };
    Harness {
        shell: Launcher::new(config, Box::new(native), Box::new(recommender)),
        launched,
        queries,
    }
}

fn shell() -> Launcher {
    harness(MockNative::default(), None, quiet_config()).shell
}

fn native_app(package: &str, label: &str) -> NativeApp {
    NativeApp {
        package: package.into(),
        label: label.into(),
        icon: String::new(),
    }
}

fn natives(n: usize) -> Vec<NativeApp> {
    (0..n)
        .map(|i| native_app(&format!("com.demo.app{i}"), &format!("Demo {i}")))
        .collect()
}

fn recs(n: usize) -> Vec<Recommendation> {
    (0..n)
        .map(|i| Recommendation {
            title: format!("Orbit {i}"),
            description: "A long way from home.".into(),
            genre: "Sci-Fi".into(),
        })
        .collect()
}

fn press(shell: &mut Launcher, button: Button) {
    shell.handle_event(&InputEvent::ButtonPress(button));
}

fn type_text(shell: &mut Launcher, text: &str) {
    for c in text.chars() {
        shell.handle_event(&InputEvent::TextInput(c));
    }
}

fn category(id: &str) -> usize {
    seed::category_index(id).unwrap()
}

/// Game harness: one native app with a package, focused in the apps grid.
fn game_harness(refuse: bool) -> Harness {
    let native = MockNative {
        apps: vec![native_app("com.demo.game", "Demo Game")],
        refuse,
        ..MockNative::default()
    };
    let mut h = harness(native, None, quiet_config());
    h.shell.select_category(category("apps"));
    h.shell.handle_event(&InputEvent::Hover { index: 3 });
    assert_eq!(h.shell.focused_item().unwrap().id, "com.demo.game");
    h.shell.drain_cues();
    h
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn starts_on_home_sidebar() {
    let shell = shell();
    assert_eq!(shell.active_category().id, "home");
    assert_eq!(shell.focus().region(), FocusRegion::Sidebar);
    assert!(!shell.input_blocked());
    assert_eq!(shell.catalog().len(), Catalog::seeded().len());
}

#[test]
fn enumeration_failure_keeps_seed_catalog() {
    let native = MockNative {
        broken_list: true,
        ..MockNative::default()
    };
    let h = harness(native, None, quiet_config());
    let ids: Vec<_> = h.shell.catalog().items().iter().map(|i| i.id.clone()).collect();
    let seeded: Vec<_> = Catalog::seeded().items().iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids, seeded);
}

fn silent_recommender() -> JsonRecommender {
    JsonRecommender::from_json(r#"{"recommendations": []}"#)
}

#[test]
fn malformed_registry_keeps_seed_catalog() {
    let bridge = JsonBridge::from_json(r#"[{"label": "Kodi", "packageName": 7}]"#);
    let shell = Launcher::new(quiet_config(), Box::new(bridge), Box::new(silent_recommender()));
    assert_eq!(shell.catalog().len(), Catalog::seeded().len());
    assert!(shell.overlay().is_closed());
}

#[test]
fn home_shows_first_twelve_of_fifteen() {
    let native = MockNative {
        apps: natives(8),
        ..MockNative::default()
    };
    let h = harness(native, None, quiet_config());
    assert_eq!(h.shell.catalog().len(), 15);
    assert_eq!(h.shell.visible_items().len(), 12);
}

#[test]
fn boot_blocks_input_until_final_phase() {
    let config = LauncherConfig {
        boot_sequence: true,
        ..quiet_config()
    };
    let mut shell = harness(MockNative::default(), None, config).shell;
    assert!(shell.is_booting());
    assert!(shell.input_blocked());

    press(&mut shell, Button::Down);
    assert_eq!(shell.focus().category(), 0);
    assert!(shell.drain_cues().is_empty());

    shell.tick(6_499);
    assert!(shell.is_booting());
    assert_eq!(shell.boot_phase(), 5);
    assert_eq!(
        shell.drain_cues(),
        [
            SoundCue::Hover,
            SoundCue::Hover,
            SoundCue::Select,
            SoundCue::Hover,
            SoundCue::Success
        ]
    );

    shell.tick(1);
    assert!(!shell.is_booting());
    press(&mut shell, Button::Down);
    assert_eq!(shell.active_category().id, "apps");
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn sidebar_moves_emit_hover_even_at_edges() {
    let mut shell = shell();
    press(&mut shell, Button::Down);
    assert_eq!(shell.active_category().id, "apps");
    press(&mut shell, Button::Up);
    press(&mut shell, Button::Up);
    assert_eq!(shell.active_category().id, "home");
    assert_eq!(shell.drain_cues(), [SoundCue::Hover; 3]);
}

#[test]
fn sidebar_cancel_plays_back() {
    let mut shell = shell();
    press(&mut shell, Button::Cancel);
    assert_eq!(shell.drain_cues(), [SoundCue::Back]);
    assert_eq!(shell.focus().region(), FocusRegion::Sidebar);
}

#[test]
fn apps_grid_with_eight_items() {
    let native = MockNative {
        apps: natives(5),
        ..MockNative::default()
    };
    let mut shell = harness(native, None, quiet_config()).shell;
    press(&mut shell, Button::Down);
    press(&mut shell, Button::Right);
    assert_eq!(shell.visible_items().len(), 8);
    assert_eq!(shell.focus().index(), 0);

    press(&mut shell, Button::Up);
    assert_eq!(shell.focus().index(), 0);
    press(&mut shell, Button::Down);
    assert_eq!(shell.focus().index(), 4);
    press(&mut shell, Button::Up);
    press(&mut shell, Button::Right);
    assert_eq!(shell.focus().index(), 1);
    press(&mut shell, Button::Down);
    assert_eq!(shell.focus().index(), 5);
    press(&mut shell, Button::Down);
    assert_eq!(shell.focus().index(), 5);
    press(&mut shell, Button::Left);
    press(&mut shell, Button::Left);
    press(&mut shell, Button::Left);
    press(&mut shell, Button::Left);
    press(&mut shell, Button::Left);
    assert_eq!(shell.focus().region(), FocusRegion::Sidebar);
    assert_eq!(shell.active_category().id, "apps");
}

#[test]
fn hover_cues_only_on_change() {
    let mut shell = shell();
    shell.handle_event(&InputEvent::Hover { index: 2 });
    shell.handle_event(&InputEvent::Hover { index: 2 });
    shell.handle_event(&InputEvent::Hover { index: 99 });
    assert_eq!(shell.focus().index(), 2);
    assert_eq!(shell.focus().region(), FocusRegion::Grid);
    assert_eq!(shell.drain_cues(), [SoundCue::Hover]);
}

#[test]
fn open_overlay_freezes_background() {
    let mut shell = shell();
    assert!(shell.open_overlay(OverlayKind::Weather));
    assert!(shell.input_blocked());
    let before = shell.snapshot();
    shell.drain_cues();

    for button in [Button::Down, Button::Right, Button::Confirm, Button::Left] {
        press(&mut shell, button);
    }
    shell.handle_event(&InputEvent::Hover { index: 2 });
    shell.select_category(3);
    assert_eq!(shell.snapshot(), before);
    assert!(shell.drain_cues().is_empty());

    press(&mut shell, Button::Cancel);
    assert_eq!(shell.overlay().kind(), OverlayKind::Closed);
    assert_eq!(shell.drain_cues(), [SoundCue::Back]);
    assert_eq!(shell.focus().region(), FocusRegion::Sidebar);
}

#[test]
fn item_overlays_need_a_focused_item() {
    let mut shell = shell();
    assert!(!shell.open_overlay(OverlayKind::ContextMenu));
    assert!(!shell.open_overlay(OverlayKind::MovieDetail));
    assert!(!shell.open_overlay(OverlayKind::LaunchEffect));
    assert!(shell.drain_cues().is_empty());
}

// ---------------------------------------------------------------------------
// Selection routing
// ---------------------------------------------------------------------------

#[test]
fn widget_confirm_does_nothing() {
    let mut shell = shell();
    press(&mut shell, Button::Right);
    shell.drain_cues();
    assert_eq!(shell.focused_item().unwrap().id, "nexus_home");
    press(&mut shell, Button::Confirm);
    assert!(!shell.input_blocked());
    assert!(shell.drain_cues().is_empty());
}

#[test]
fn movie_opens_detail_then_pip() {
    let mut shell = shell();
    shell.handle_event(&InputEvent::Hover { index: 3 });
    shell.drain_cues();
    press(&mut shell, Button::Confirm);
    match shell.overlay() {
        Overlay::MovieDetail(item) => assert_eq!(item.id, "movie_dune"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(shell.drain_cues(), [SoundCue::Select]);

    press(&mut shell, Button::Confirm);
    assert!(shell.overlay().is_closed());
    assert!(shell.pip_active());
    assert_eq!(shell.toast(), Some("Playing in picture-in-picture"));

    shell.expand_pip();
    assert!(!shell.pip_active());
    assert_eq!(shell.toast(), Some("Normal mode restored"));
    shell.stop_pip();
    assert_eq!(shell.toast(), Some("Normal mode restored"));
}

#[test]
fn setting_deep_links_and_backs_out() {
    let mut shell = shell();
    shell.select_category(category("settings"));
    shell.drain_cues();
    press(&mut shell, Button::Confirm);
    match shell.overlay() {
        Overlay::Settings(panel) => {
            assert_eq!(panel.page(), SettingsPage::Wifi);
            assert_eq!(panel.item.as_ref().unwrap().id, "wifi");
        },
        other => panic!("unexpected {other:?}"),
    }

    press(&mut shell, Button::Down);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.ambient().wifi.as_deref(), Some(WIFI_NETWORKS[1]));
    assert_eq!(shell.toast(), Some("Connected to Zenith_2.4G"));

    press(&mut shell, Button::Cancel);
    assert_eq!(shell.overlay().kind(), OverlayKind::Settings);
    press(&mut shell, Button::Cancel);
    assert!(shell.overlay().is_closed());
    assert_eq!(
        shell.drain_cues(),
        [
            SoundCue::Select,
            SoundCue::Hover,
            SoundCue::Back,
            SoundCue::Back
        ]
    );
}

#[test]
fn theme_page_applies_theme() {
    let mut shell = shell();
    assert!(shell.open_overlay(OverlayKind::Settings));
    press(&mut shell, Button::Confirm);
    press(&mut shell, Button::Down);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.ambient().theme, Theme::Day);
    assert_eq!(shell.drain_cues().last(), Some(&SoundCue::Success));
}

#[test]
fn tools_open_their_overlays() {
    let mut shell = shell();
    shell.select_category(category("tools"));
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.overlay().kind(), OverlayKind::SpeedTest);
    press(&mut shell, Button::Cancel);
    press(&mut shell, Button::Right);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.overlay().kind(), OverlayKind::InputHub);
}

// ---------------------------------------------------------------------------
// Launch protocol
// ---------------------------------------------------------------------------

#[test]
fn native_launch_plays_effect_then_holds() {
    let mut h = game_harness(false);
    press(&mut h.shell, Button::Confirm);
    assert_eq!(h.shell.overlay().kind(), OverlayKind::LaunchEffect);
    assert_eq!(h.shell.drain_cues(), [SoundCue::Select]);

    h.shell.tick(800);
    assert!(matches!(h.shell.overlay(), Overlay::LaunchEffect { step: 1, .. }));
    h.shell.tick(2_199);
    assert!(matches!(h.shell.overlay(), Overlay::LaunchEffect { step: 3, .. }));
    h.shell.tick(1);
    assert!(h.shell.overlay().is_closed());
    assert!(h.shell.is_launching());

    h.shell.tick(500);
    assert_eq!(*h.launched.borrow(), ["com.demo.game"]);
    assert!(h.shell.is_launching());

    // Blocked while launching.
    press(&mut h.shell, Button::Left);
    assert_eq!(h.shell.focus().region(), FocusRegion::Grid);

    h.shell.tick(1_999);
    assert!(h.shell.is_launching());
    h.shell.tick(1);
    assert!(!h.shell.is_launching());
    assert!(!h.shell.input_blocked());
}

#[test]
fn long_effect_step_list_saturates() {
    let native = MockNative {
        apps: vec![native_app("com.demo.game", "Demo Game")],
        ..MockNative::default()
    };
    let config = LauncherConfig {
        launch_effect_steps_ms: (1..=300).collect(),
        ..quiet_config()
    };
    let mut h = harness(native, None, config);
    h.shell.select_category(category("apps"));
    h.shell.handle_event(&InputEvent::Hover { index: 3 });
    press(&mut h.shell, Button::Confirm);

    h.shell.tick(260);
    assert!(matches!(h.shell.overlay(), Overlay::LaunchEffect { step: 255, .. }));
    h.shell.tick(39);
    assert!(matches!(h.shell.overlay(), Overlay::LaunchEffect { step: 255, .. }));
    h.shell.tick(1);
    assert!(h.shell.overlay().is_closed());
    assert!(h.shell.is_launching());
}

#[test]
fn failed_native_launch_toasts_and_clears() {
    let mut h = game_harness(true);
    press(&mut h.shell, Button::Confirm);
    h.shell.tick(3_000);
    assert!(h.shell.is_launching());
    h.shell.drain_cues();

    h.shell.tick(499);
    assert!(h.shell.toast().is_none());
    h.shell.tick(1);
    assert!(!h.shell.is_launching());
    assert_eq!(h.shell.toast(), Some("Error: could not open Demo Game"));
    assert_eq!(h.shell.drain_cues(), [SoundCue::Error]);
    assert!(h.launched.borrow().is_empty());
}

#[test]
fn cancelled_effect_never_launches() {
    let mut h = game_harness(false);
    press(&mut h.shell, Button::Confirm);
    h.shell.tick(1_000);
    press(&mut h.shell, Button::Cancel);
    assert!(h.shell.overlay().is_closed());
    assert!(!h.shell.timers.any(|t| matches!(t, Timer::EffectStep(_) | Timer::EffectDone)));

    h.shell.tick(10_000);
    assert!(!h.shell.is_launching());
    assert!(h.launched.borrow().is_empty());
}

#[test]
fn seed_app_launches_without_host_call() {
    let mut h = harness(MockNative::default(), None, quiet_config());
    h.shell.select_category(category("apps"));
    press(&mut h.shell, Button::Confirm);
    assert!(h.shell.overlay().is_closed());
    assert_eq!(h.shell.launching_item().unwrap().id, "netflix");
    h.shell.tick(500);
    assert!(h.launched.borrow().is_empty());
    h.shell.tick(2_000);
    assert!(!h.shell.is_launching());
}

#[test]
fn dock_launches_favorites() {
    let mut shell = shell();
    let dock = shell.dock_items();
    assert_eq!(dock[0].id, "netflix");
    assert!(shell.launch_dock(0));
    assert!(shell.is_launching());
    assert!(!shell.launch_dock(1));
    assert!(!shell.launch_dock(99));
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[test]
fn store_install_then_launch() {
    let mut shell = shell();
    shell.select_category(category("store"));
    shell.drain_cues();
    let before = shell.catalog().len();

    press(&mut shell, Button::Confirm);
    assert_eq!(shell.drain_cues(), [SoundCue::Select]);
    assert_eq!(shell.installer().current(), Some(("hbo", 0)));

    // A second install while busy is refused.
    press(&mut shell, Button::Right);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.drain_cues(), [SoundCue::Hover, SoundCue::Error]);

    let mut polls = 0;
    while shell.installer().is_busy() {
        shell.tick(200);
        polls += 1;
        assert!(polls <= 20);
    }
    assert_eq!(shell.catalog().len(), before + 1);
    let hbo: Vec<_> = shell.catalog().items().iter().filter(|i| i.id == "hbo").collect();
    assert_eq!(hbo.len(), 1);
    assert_eq!(hbo[0].kind, ItemKind::App);
    assert!(hbo[0].acquired);
    assert_eq!(shell.toast(), Some("HBO Max added to Apps"));
    assert!(shell.drain_cues().contains(&SoundCue::Success));
    assert!(shell.visible_items()[0].acquired);

    shell.handle_event(&InputEvent::Hover { index: 0 });
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.launching_item().unwrap().id, "hbo");
    assert_eq!(shell.catalog().len(), before + 1);
}

// ---------------------------------------------------------------------------
// Recommendations and keyboard
// ---------------------------------------------------------------------------

#[test]
fn recommendations_land_in_movies() {
    let mut h = harness(MockNative::default(), Some(recs(2)), quiet_config());
    let before = h.shell.catalog().len();
    h.shell.search("space opera");

    assert_eq!(h.shell.drain_cues(), [SoundCue::Select, SoundCue::Success]);
    assert_eq!(*h.queries.borrow(), ["space opera"]);
    assert_eq!(h.shell.query(), "");
    assert_eq!(h.shell.catalog().len(), before + 2);
    assert_eq!(h.shell.active_category().id, "movies");
    assert_eq!(h.shell.focus().region(), FocusRegion::Grid);
    assert_eq!(h.shell.focus().index(), 0);
    assert_eq!(h.shell.toast(), Some("Found 2 results"));

    let ids: Vec<_> = h.shell.visible_items().iter().take(2).map(|i| i.id.clone()).collect();
    assert_eq!(ids, ["ai-1-0", "ai-1-1"]);

    h.shell.search("heist");
    assert_eq!(h.shell.catalog().items()[0].id, "ai-2-0");
    assert_eq!(h.shell.catalog().len(), before + 4);
}

#[test]
fn recommendation_failure_changes_nothing() {
    let mut h = harness(MockNative::default(), None, quiet_config());
    h.shell.search("noir");
    assert_eq!(h.shell.drain_cues(), [SoundCue::Select, SoundCue::Error]);
    assert_eq!(h.shell.catalog().len(), Catalog::seeded().len());
    assert_eq!(h.shell.active_category().id, "home");
    assert_eq!(h.shell.query(), "");

    let mut h = harness(MockNative::default(), Some(Vec::new()), quiet_config());
    h.shell.search("noir");
    assert_eq!(h.shell.drain_cues(), [SoundCue::Select, SoundCue::Error]);
    assert_eq!(h.shell.catalog().len(), Catalog::seeded().len());
}

#[test]
fn malformed_recommendation_payload_is_no_results() {
    let recommender = JsonRecommender::from_json(r#"{"recommendations": "soon"}"#);
    let mut shell = Launcher::new(
        quiet_config(),
        Box::new(MockNative::default()),
        Box::new(recommender),
    );
    shell.search("space westerns");
    assert_eq!(shell.drain_cues(), [SoundCue::Select, SoundCue::Error]);
    assert_eq!(shell.catalog().items(), Catalog::seeded().items());
    assert_eq!(shell.active_category().id, "home");
    assert_eq!(shell.toast(), None);
}

#[test]
fn blank_query_is_a_no_op() {
    let mut h = harness(MockNative::default(), Some(recs(3)), quiet_config());
    h.shell.search("   ");
    assert!(h.shell.drain_cues().is_empty());
    assert!(h.queries.borrow().is_empty());
    assert_eq!(h.shell.catalog().len(), Catalog::seeded().len());
}

#[test]
fn keyboard_submit_runs_recommendations() {
    let mut h = harness(MockNative::default(), Some(recs(1)), quiet_config());
    assert!(h.shell.open_keyboard());
    assert!(h.shell.input_blocked());
    type_text(&mut h.shell, "neon");
    h.shell.handle_event(&InputEvent::Backspace);
    assert_eq!(h.shell.keyboard().unwrap().text(), "neo");

    // Walk to the Enter key: bottom row, last column.
    press(&mut h.shell, Button::Down);
    press(&mut h.shell, Button::Down);
    for _ in 0..9 {
        press(&mut h.shell, Button::Right);
    }
    h.shell.drain_cues();
    press(&mut h.shell, Button::Confirm);

    assert!(h.shell.keyboard().is_none());
    assert_eq!(*h.queries.borrow(), ["neo"]);
    assert_eq!(
        h.shell.drain_cues(),
        [SoundCue::Success, SoundCue::Select, SoundCue::Success]
    );
    assert_eq!(h.shell.active_category().id, "movies");
}

#[test]
fn keyboard_cancel_discards() {
    let mut h = harness(MockNative::default(), Some(recs(1)), quiet_config());
    h.shell.open_keyboard();
    type_text(&mut h.shell, "abc");
    press(&mut h.shell, Button::Cancel);
    assert!(h.shell.keyboard().is_none());
    assert!(h.queries.borrow().is_empty());
    assert!(!h.shell.input_blocked());
}

#[test]
fn omni_search_launches_and_closes() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::OmniSearch);
    type_text(&mut shell, "netflx");
    shell.handle_event(&InputEvent::Backspace);
    shell.handle_event(&InputEvent::Backspace);
    type_text(&mut shell, "lix");
    match shell.overlay() {
        Overlay::OmniSearch(s) => {
            assert_eq!(s.query(), "netflix");
            assert_eq!(s.results()[0].id, "netflix");
        },
        other => panic!("unexpected {other:?}"),
    }
    press(&mut shell, Button::Confirm);
    assert!(shell.overlay().is_closed());
    assert_eq!(shell.launching_item().unwrap().id, "netflix");
}

// ---------------------------------------------------------------------------
// Ambient overlays
// ---------------------------------------------------------------------------

#[test]
fn mood_selector_applies_and_closes() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::MoodSelector);
    press(&mut shell, Button::Right);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.ambient().mood, MOODS[1].mood);
    assert!(shell.overlay().is_closed());
    assert_eq!(shell.toast(), Some("Ambience: Cinema Mode enabled"));
}

#[test]
fn profile_menu_switches_or_creates() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::ProfileMenu);
    press(&mut shell, Button::Down);
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.ambient().profile.name, "Kids");
    assert_eq!(shell.toast(), Some("Welcome, Kids"));
    assert!(shell.overlay().is_closed());

    shell.open_overlay(OverlayKind::ProfileMenu);
    for _ in 0..5 {
        press(&mut shell, Button::Down);
    }
    press(&mut shell, Button::Confirm);
    assert_eq!(shell.overlay().kind(), OverlayKind::ProfileCreator);
}

#[test]
fn context_menu_pins_favorite() {
    let mut shell = shell();
    shell.handle_event(&InputEvent::Hover { index: 2 });
    assert!(shell.open_overlay(OverlayKind::ContextMenu));
    press(&mut shell, Button::Down);
    press(&mut shell, Button::Confirm);
    assert!(shell.overlay().is_closed());
    assert_eq!(shell.toast(), Some("Netflix pinned to favorites"));
}

#[test]
fn deck_settings_replaces_deck() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::Deck);
    assert!(shell.timers.any(|t| *t == Timer::DeckSample));
    shell.tick(1_000);
    press(&mut shell, Button::Confirm);
    match shell.overlay() {
        Overlay::Settings(panel) => assert_eq!(panel.page(), SettingsPage::Main),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!shell.timers.any(|t| *t == Timer::DeckSample));
}

#[test]
fn lights_toggle() {
    let mut shell = shell();
    assert!(!shell.toggle_lights());
    assert!(shell.toggle_lights());
}

// ---------------------------------------------------------------------------
// Simulations
// ---------------------------------------------------------------------------

#[test]
fn speed_test_runs_to_done() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::SpeedTest);
    press(&mut shell, Button::Confirm);
    shell.drain_cues();
    for _ in 0..1_000 {
        shell.tick(100);
        if let Overlay::SpeedTest(t) = shell.overlay()
            && t.stage() == SpeedStage::Done
        {
            break;
        }
    }
    match shell.overlay() {
        Overlay::SpeedTest(t) => assert_eq!(t.stage(), SpeedStage::Done),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(shell.drain_cues(), [SoundCue::Success]);
    assert!(!shell.timers.any(|t| *t == Timer::SpeedStep));
}

#[test]
fn closing_speed_test_discards_progress() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::SpeedTest);
    press(&mut shell, Button::Confirm);
    shell.tick(300);
    press(&mut shell, Button::Cancel);
    assert!(!shell.timers.any(|t| *t == Timer::SpeedStep));

    shell.open_overlay(OverlayKind::SpeedTest);
    match shell.overlay() {
        Overlay::SpeedTest(t) => assert_eq!(t.stage(), SpeedStage::Idle),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn input_hub_switches_after_delay() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::InputHub);
    press(&mut shell, Button::Down);
    press(&mut shell, Button::Confirm);
    shell.drain_cues();
    shell.tick(1_999);
    match shell.overlay() {
        Overlay::InputHub(hub) => assert_eq!(hub.switching_to().unwrap().id, "HDMI 2"),
        other => panic!("unexpected {other:?}"),
    }
    shell.tick(1);
    match shell.overlay() {
        Overlay::InputHub(hub) => assert_eq!(hub.active().id, "HDMI 2"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(shell.drain_cues(), [SoundCue::Success]);
}

#[test]
fn status_refresh_keeps_running() {
    let mut shell = shell();
    shell.tick(10_000);
    assert!(shell.timers.any(|t| *t == Timer::StatusRefresh));
    let s = shell.status();
    assert!((5..35).contains(&s.cpu_pct));
}

// ---------------------------------------------------------------------------
// HUDs and idle
// ---------------------------------------------------------------------------

#[test]
fn volume_works_while_blocked() {
    let config = LauncherConfig {
        boot_sequence: true,
        ..quiet_config()
    };
    let mut shell = harness(MockNative::default(), None, config).shell;
    let start = shell.volume().level();
    press(&mut shell, Button::VolumeUp);
    assert_eq!(shell.volume().level(), start + 5);
    assert!(shell.volume().is_visible());

    shell.tick(7_000);
    shell.open_overlay(OverlayKind::Weather);
    press(&mut shell, Button::VolumeDown);
    press(&mut shell, Button::VolumeDown);
    assert_eq!(shell.volume().level(), start - 5);
    shell.tick(2_000);
    assert!(!shell.volume().is_visible());
}

#[test]
fn toast_expires() {
    let mut shell = shell();
    shell.connect_wifi("Guest_WiFi");
    shell.tick(2_999);
    assert_eq!(shell.toast(), Some("Connected to Guest_WiFi"));
    shell.tick(1);
    assert!(shell.toast().is_none());
}

#[test]
fn screensaver_after_idle_timeout() {
    let mut shell = shell();
    shell.open_overlay(OverlayKind::Weather);
    shell.tick(29_999);
    assert!(!shell.screensaver_active());
    shell.tick(1);
    assert!(shell.screensaver_active());
    assert_eq!(shell.overlay().kind(), OverlayKind::Weather);

    shell.handle_event(&InputEvent::PointerMove { x: 4, y: 4 });
    assert!(!shell.screensaver_active());
    shell.tick(29_999);
    assert!(!shell.screensaver_active());
}

#[test]
fn quit_event_sets_flag() {
    let mut shell = shell();
    assert!(!shell.should_quit());
    shell.handle_event(&InputEvent::Quit);
    assert!(shell.should_quit());
}

#[test]
fn snapshot_reflects_state() {
    let mut shell = shell();
    shell.handle_event(&InputEvent::Hover { index: 2 });
    shell.open_overlay(OverlayKind::Weather);
    let snap = shell.snapshot();
    assert_eq!(snap.category, "home");
    assert_eq!(snap.region, FocusRegion::Grid);
    assert_eq!(snap.focused.as_deref(), Some("Netflix"));
    assert_eq!(snap.overlay, "weather");
    assert_eq!(snap.volume, 50);
    assert_eq!(snap.profile, "Admin");
    assert!(!snap.booting);
}
