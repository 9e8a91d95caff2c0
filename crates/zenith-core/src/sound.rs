//! UI sound cues.
//!
//! The core never synthesizes audio; it emits [`SoundCue`] values that the
//! host drains and plays. Each cue carries a tone description so any host
//! can render it the same way.

use serde::Serialize;

/// Fire-and-forget UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoundCue {
    Hover,
    Select,
    Back,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

/// Frequency ramp shape between the start and end pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ramp {
    Exponential,
    Linear,
    Flat,
}

/// One oscillator voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub ramp: Ramp,
    pub duration_s: f32,
    pub gain: f32,
}

const C_MAJOR: [f32; 3] = [523.25, 659.25, 783.99];

impl SoundCue {
    /// Voices making up this cue (several for a chord).
    pub fn tones(self) -> Vec<Tone> {
        match self {
            Self::Hover => vec![Tone {
                waveform: Waveform::Sine,
                start_hz: 400.0,
                end_hz: 600.0,
                ramp: Ramp::Exponential,
                duration_s: 0.05,
                gain: 0.03,
            }],
            Self::Select => vec![Tone {
                waveform: Waveform::Sine,
                start_hz: 500.0,
                end_hz: 1000.0,
                ramp: Ramp::Exponential,
                duration_s: 0.15,
                gain: 0.05,
            }],
            Self::Back => vec![Tone {
                waveform: Waveform::Triangle,
                start_hz: 300.0,
                end_hz: 100.0,
                ramp: Ramp::Linear,
                duration_s: 0.15,
                gain: 0.05,
            }],
            Self::Error => vec![Tone {
                waveform: Waveform::Sawtooth,
                start_hz: 150.0,
                end_hz: 100.0,
                ramp: Ramp::Linear,
                duration_s: 0.1,
                gain: 0.05,
            }],
            Self::Success => C_MAJOR
                .iter()
                .map(|&hz| Tone {
                    waveform: Waveform::Sine,
                    start_hz: hz,
                    end_hz: hz,
                    ramp: Ramp::Flat,
                    duration_s: 0.3,
                    gain: 0.03,
                })
                .collect(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Select => "select",
            Self::Back => "back",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}
