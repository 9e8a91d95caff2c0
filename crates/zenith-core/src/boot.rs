//! Boot intro timeline. Input is blocked until the last phase.

use crate::sound::SoundCue;

/// One step of the intro: offset from start, phase number, optional cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStep {
    pub at_ms: u64,
    pub phase: u8,
    pub cue: Option<SoundCue>,
}

pub const BOOT_TIMELINE: [BootStep; 6] = [
    BootStep {
        at_ms: 200,
        phase: 1,
        cue: Some(SoundCue::Hover),
    },
    BootStep {
        at_ms: 1_200,
        phase: 2,
        cue: Some(SoundCue::Hover),
    },
    BootStep {
        at_ms: 2_200,
        phase: 3,
        cue: Some(SoundCue::Select),
    },
    BootStep {
        at_ms: 4_000,
        phase: 4,
        cue: Some(SoundCue::Hover),
    },
    BootStep {
        at_ms: 5_500,
        phase: 5,
        cue: Some(SoundCue::Success),
    },
    BootStep {
        at_ms: 6_500,
        phase: 6,
        cue: None,
    },
];

/// Last phase; reaching it ends the boot.
pub const FINAL_PHASE: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSequence {
    phase: u8,
    active: bool,
}

impl BootSequence {
    /// A boot in progress at phase 0.
    pub fn running() -> Self {
        Self {
            phase: 0,
            active: true,
        }
    }

    /// No intro: already booted.
    pub fn skipped() -> Self {
        Self {
            phase: FINAL_PHASE,
            active: false,
        }
    }

    pub fn is_booting(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Enter `phase`, returning its cue. Phases never go backwards.
    pub fn enter(&mut self, phase: u8) -> Option<SoundCue> {
        if !self.active || phase <= self.phase {
            return None;
        }
        self.phase = phase;
        if phase >= FINAL_PHASE {
            self.active = false;
            log::info!("Boot sequence complete");
        }
        BOOT_TIMELINE
            .iter()
            .find(|s| s.phase == phase)
            .and_then(|s| s.cue)
    }
}
