//! Selection routing and the timed native launch.
//!
//! Selecting an item either opens an overlay, does nothing (widgets), plays
//! the launch effect first (native apps), or goes straight to the timed
//! launch: enter "launching", call the host after a delay, then hold.

use crate::catalog::{ItemKind, LauncherItem};
use crate::overlay::{Overlay, SettingsPanel};
use crate::readout::{InputHub, SpeedTest};

/// Where a selected item goes.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchRoute {
    /// Open this overlay.
    Overlay(Overlay),
    /// Decorative tile; nothing happens.
    Ignore,
    /// Native app: play the launch effect, then launch.
    Effect,
    /// Straight to the timed launch.
    Direct,
}

/// Decide what selecting `item` does.
pub fn route(item: &LauncherItem) -> LaunchRoute {
    if item.kind == ItemKind::Movie {
        return LaunchRoute::Overlay(Overlay::MovieDetail(item.clone()));
    }
    match item.id.as_str() {
        "file_manager" => return LaunchRoute::Overlay(Overlay::FileManager),
        "terminal" => return LaunchRoute::Overlay(Overlay::Terminal),
        "speedtest" => return LaunchRoute::Overlay(Overlay::SpeedTest(SpeedTest::default())),
        "inputs" => return LaunchRoute::Overlay(Overlay::InputHub(InputHub::default())),
        _ => {},
    }
    match item.kind {
        ItemKind::Setting => LaunchRoute::Overlay(Overlay::Settings(SettingsPanel::new(Some(
            item.clone(),
        )))),
        ItemKind::Widget | ItemKind::SmartHomeWidget => LaunchRoute::Ignore,
        ItemKind::App if item.package.is_some() => LaunchRoute::Effect,
        _ => LaunchRoute::Direct,
    }
}

/// Phase of the timed launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Waiting for the pre-launch delay.
    Pending,
    /// Host called (or nothing to call); holding before release.
    Holding,
}

/// The item currently launching, if any.
#[derive(Debug, Default)]
pub struct LaunchState {
    active: Option<(LauncherItem, LaunchPhase)>,
}

impl LaunchState {
    pub fn is_launching(&self) -> bool {
        self.active.is_some()
    }

    pub fn item(&self) -> Option<&LauncherItem> {
        self.active.as_ref().map(|(item, _)| item)
    }

    pub fn phase(&self) -> Option<LaunchPhase> {
        self.active.as_ref().map(|(_, phase)| *phase)
    }

    /// Enter "launching". Returns `false` if a launch is already running.
    pub fn begin(&mut self, item: LauncherItem) -> bool {
        if self.active.is_some() {
            return false;
        }
        log::info!("Launching {}", item.title);
        self.active = Some((item, LaunchPhase::Pending));
        true
    }

    /// Package to hand to the host once the delay elapsed.
    pub fn package(&self) -> Option<&str> {
        self.item().and_then(|i| i.package.as_deref())
    }

    pub fn hold(&mut self) {
        if let Some((_, phase)) = &mut self.active {
            *phase = LaunchPhase::Holding;
        }
    }

    /// Leave "launching".
    pub fn clear(&mut self) -> Option<LauncherItem> {
        self.active.take().map(|(item, _)| item)
    }
}
