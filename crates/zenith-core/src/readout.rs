//! Decorative numeric readouts.
//!
//! None of these measure anything: they are random walks that look alive on
//! screen. Each one advances on its own period through [`Readout::tick`].

use rand::Rng;
use serde::Serialize;

/// A periodically refreshed display value.
pub trait Readout {
    type Value;

    /// Refresh period in milliseconds.
    fn period_ms(&self) -> u64;

    /// Advance one period.
    fn tick<R: Rng>(&mut self, rng: &mut R);

    /// Current display value.
    fn value(&self) -> Self::Value;
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusValues {
    pub cpu_pct: u8,
    pub ram_pct: u8,
    pub net_gbps: f32,
}

/// Status bar CPU / RAM / network figures.
#[derive(Debug, Clone)]
pub struct StatusStats {
    current: StatusValues,
}

impl Default for StatusStats {
    fn default() -> Self {
        Self {
            current: StatusValues {
                cpu_pct: 12,
                ram_pct: 45,
                net_gbps: 1.2,
            },
        }
    }
}

impl Readout for StatusStats {
    type Value = StatusValues;

    fn period_ms(&self) -> u64 {
        2_000
    }

    fn tick<R: Rng>(&mut self, rng: &mut R) {
        let net: f32 = rng.random_range(0.9..1.5);
        self.current = StatusValues {
            cpu_pct: rng.random_range(5..35),
            ram_pct: rng.random_range(40..48),
            net_gbps: (net * 10.0).round() / 10.0,
        };
    }

    fn value(&self) -> StatusValues {
        self.current
    }
}

// ---------------------------------------------------------------------------
// Deck CPU history
// ---------------------------------------------------------------------------

pub const CPU_HISTORY_LEN: usize = 20;

/// Rolling CPU graph shown in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuHistory {
    samples: Vec<u8>,
}

impl Default for CpuHistory {
    fn default() -> Self {
        Self {
            samples: vec![20; CPU_HISTORY_LEN],
        }
    }
}

impl CpuHistory {
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

impl Readout for CpuHistory {
    type Value = u8;

    fn period_ms(&self) -> u64 {
        500
    }

    fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.samples.remove(0);
        self.samples.push(rng.random_range(10..50));
    }

    /// Latest sample.
    fn value(&self) -> u8 {
        self.samples.last().copied().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Speed test
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedStage {
    Idle,
    Ping,
    Download,
    Upload,
    Done,
}

pub const DOWNLOAD_TARGET_MBPS: f64 = 850.0;
pub const UPLOAD_TARGET_MBPS: f64 = 600.0;
/// A ramp finishes once it is this close to its target.
const RAMP_SLACK: f64 = 20.0;
/// Ping counter threshold that ends the ping stage.
const PING_THRESHOLD: u32 = 12;

/// Fake network speed test: ping, download ramp, upload ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTest {
    stage: SpeedStage,
    ping_ms: u32,
    download_mbps: f64,
    upload_mbps: f64,
}

impl Default for SpeedTest {
    fn default() -> Self {
        Self {
            stage: SpeedStage::Idle,
            ping_ms: 0,
            download_mbps: 0.0,
            upload_mbps: 0.0,
        }
    }
}

impl SpeedTest {
    pub fn stage(&self) -> SpeedStage {
        self.stage
    }

    pub fn ping_ms(&self) -> u32 {
        self.ping_ms
    }

    pub fn download_mbps(&self) -> f64 {
        self.download_mbps
    }

    pub fn upload_mbps(&self) -> f64 {
        self.upload_mbps
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.stage,
            SpeedStage::Ping | SpeedStage::Download | SpeedStage::Upload
        )
    }

    /// Start (or restart) the test. Returns `false` while one is running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        *self = Self {
            stage: SpeedStage::Ping,
            ..Self::default()
        };
        true
    }

    fn ramp<R: Rng>(current: f64, target: f64, rng: &mut R) -> f64 {
        current + (target - current) * 0.1 + rng.random_range(0.0..20.0)
    }
}

impl Readout for SpeedTest {
    /// Current stage.
    type Value = SpeedStage;

    fn period_ms(&self) -> u64 {
        100
    }

    fn tick<R: Rng>(&mut self, rng: &mut R) {
        match self.stage {
            SpeedStage::Ping => {
                self.ping_ms += rng.random_range(0..5);
                if self.ping_ms > PING_THRESHOLD {
                    self.ping_ms = rng.random_range(5..15);
                    self.stage = SpeedStage::Download;
                }
            },
            SpeedStage::Download => {
                self.download_mbps = Self::ramp(self.download_mbps, DOWNLOAD_TARGET_MBPS, rng);
                if self.download_mbps > DOWNLOAD_TARGET_MBPS - RAMP_SLACK {
                    self.stage = SpeedStage::Upload;
                }
            },
            SpeedStage::Upload => {
                self.upload_mbps = Self::ramp(self.upload_mbps, UPLOAD_TARGET_MBPS, rng);
                if self.upload_mbps > UPLOAD_TARGET_MBPS - RAMP_SLACK {
                    self.stage = SpeedStage::Done;
                }
            },
            SpeedStage::Idle | SpeedStage::Done => {},
        }
    }

    fn value(&self) -> SpeedStage {
        self.stage
    }
}

// ---------------------------------------------------------------------------
// Input hub
// ---------------------------------------------------------------------------

/// An HDMI / AV source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSource {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INPUT_SOURCES: [InputSource; 4] = [
    InputSource {
        id: "HDMI 1",
        label: "PlayStation 5",
    },
    InputSource {
        id: "HDMI 2",
        label: "Xbox Series X",
    },
    InputSource {
        id: "HDMI 3",
        label: "MacBook Pro",
    },
    InputSource {
        id: "AV",
        label: "Cable TV",
    },
];

/// Delay before a source switch completes.
pub const INPUT_SWITCH_MS: u64 = 2_000;

/// Source selector with a simulated switching delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHub {
    selected: usize,
    active: usize,
    switching_to: Option<usize>,
}

impl Default for InputHub {
    fn default() -> Self {
        Self {
            selected: 0,
            active: 0,
            switching_to: None,
        }
    }
}

impl InputHub {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn active(&self) -> &'static InputSource {
        &INPUT_SOURCES[self.active]
    }

    pub fn switching_to(&self) -> Option<&'static InputSource> {
        self.switching_to.map(|i| &INPUT_SOURCES[i])
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(INPUT_SOURCES.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Begin switching to the selected source. Returns `false` when it is
    /// already active or a switch is in flight.
    pub fn begin_switch(&mut self) -> bool {
        if self.selected == self.active || self.switching_to.is_some() {
            return false;
        }
        self.switching_to = Some(self.selected);
        true
    }

    /// The switching delay elapsed.
    pub fn finish_switch(&mut self) -> Option<&'static InputSource> {
        let target = self.switching_to.take()?;
        self.active = target;
        Some(&INPUT_SOURCES[target])
    }
}
