//! Launcher configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock TV layout and timings.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ZenithError};

/// Upper bound on configured launch-effect steps.
pub const MAX_EFFECT_STEPS: usize = 16;

/// Tunable layout and timing parameters for the launcher shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LauncherConfig {
    /// Grid columns used for directional navigation.
    #[serde(default = "default_grid_cols")]
    pub grid_cols: usize,
    /// Number of catalog items shown in the `home` category.
    #[serde(default = "default_home_slice")]
    pub home_slice: usize,
    /// Idle time before the screensaver activates (ms).
    #[serde(default = "default_screensaver_timeout_ms")]
    pub screensaver_timeout_ms: u64,
    /// Delay between entering "launching" and calling the native launch (ms).
    #[serde(default = "default_launch_delay_ms")]
    pub launch_delay_ms: u64,
    /// How long "launching" is held after a successful launch (ms).
    #[serde(default = "default_launch_hold_ms")]
    pub launch_hold_ms: u64,
    /// Toast lifetime (ms).
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    /// Volume change per key press.
    #[serde(default = "default_volume_step")]
    pub volume_step: u8,
    /// Initial volume level (0-100).
    #[serde(default = "default_volume")]
    pub initial_volume: u8,
    /// Volume HUD lifetime after the last key press (ms).
    #[serde(default = "default_volume_hud_ms")]
    pub volume_hud_ms: u64,
    /// Store install progress polling period (ms).
    #[serde(default = "default_install_poll_ms")]
    pub install_poll_ms: u64,
    /// Launch-effect step offsets (ms); the last entry is completion.
    #[serde(default = "default_launch_effect_steps_ms")]
    pub launch_effect_steps_ms: Vec<u64>,
    /// Whether the boot intro runs at startup.
    #[serde(default = "yes")]
    pub boot_sequence: bool,
    /// Fixed RNG seed for the simulated readouts (random when absent).
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn yes() -> bool {
    true
}
fn default_grid_cols() -> usize {
    4
}
fn default_home_slice() -> usize {
    12
}
fn default_screensaver_timeout_ms() -> u64 {
    30_000
}
fn default_launch_delay_ms() -> u64 {
    500
}
fn default_launch_hold_ms() -> u64 {
    2_000
}
fn default_toast_ms() -> u64 {
    3_000
}
fn default_volume_step() -> u8 {
    5
}
fn default_volume() -> u8 {
    50
}
fn default_volume_hud_ms() -> u64 {
    2_000
}
fn default_install_poll_ms() -> u64 {
    200
}
fn default_launch_effect_steps_ms() -> Vec<u64> {
    vec![800, 1_600, 2_400, 3_000]
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            grid_cols: default_grid_cols(),
            home_slice: default_home_slice(),
            screensaver_timeout_ms: default_screensaver_timeout_ms(),
            launch_delay_ms: default_launch_delay_ms(),
            launch_hold_ms: default_launch_hold_ms(),
            toast_ms: default_toast_ms(),
            volume_step: default_volume_step(),
            initial_volume: default_volume(),
            volume_hud_ms: default_volume_hud_ms(),
            install_poll_ms: default_install_poll_ms(),
            launch_effect_steps_ms: default_launch_effect_steps_ms(),
            boot_sequence: yes(),
            rng_seed: None,
        }
    }
}

impl LauncherConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Resolve a config from an optional path.
    ///
    /// A missing path yields the defaults. A path that does not exist falls
    /// back to the defaults with a warning; a file that exists but fails to
    /// parse is an error.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let p = Path::new(path);
        if !p.is_file() {
            log::warn!("Config '{path}' not found -- using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_file(p)?;
        log::info!("Loaded config from {path}");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.grid_cols == 0 {
            return Err(ZenithError::Config("grid_cols must be at least 1".into()));
        }
        if self.initial_volume > 100 {
            return Err(ZenithError::Config(format!(
                "initial_volume {} exceeds 100",
                self.initial_volume
            )));
        }
        if self.launch_effect_steps_ms.is_empty() {
            return Err(ZenithError::Config(
                "launch_effect_steps_ms needs at least a completion offset".into(),
            ));
        }
        if self.launch_effect_steps_ms.len() > MAX_EFFECT_STEPS {
            return Err(ZenithError::Config(format!(
                "launch_effect_steps_ms has {} entries, at most {MAX_EFFECT_STEPS} allowed",
                self.launch_effect_steps_ms.len()
            )));
        }
        if !self.launch_effect_steps_ms.is_sorted() {
            return Err(ZenithError::Config(
                "launch_effect_steps_ms must be ascending".into(),
            ));
        }
        if self.install_poll_ms == 0 {
            return Err(ZenithError::Config("install_poll_ms must be non-zero".into()));
        }
        Ok(())
    }
}
