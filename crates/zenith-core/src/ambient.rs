//! Ambient presets (mood, theme, profile) and the global ambient state.

use serde::Serialize;

/// Lighting mood; drives the accent and glow colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mood {
    Focus,
    Cinema,
    Gaming,
}

/// Static mood preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPreset {
    pub mood: Mood,
    pub label: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
    pub icon: &'static str,
}

pub const MOODS: [MoodPreset; 3] = [
    MoodPreset {
        mood: Mood::Focus,
        label: "Zenith OS",
        accent: "indigo-500",
        glow: "#6366f1",
        icon: "Zap",
    },
    MoodPreset {
        mood: Mood::Cinema,
        label: "Cinema Mode",
        accent: "red-600",
        glow: "#dc2626",
        icon: "Clapperboard",
    },
    MoodPreset {
        mood: Mood::Gaming,
        label: "Game Mode",
        accent: "emerald-400",
        glow: "#34d399",
        icon: "Gamepad2",
    },
];

impl Mood {
    pub fn preset(self) -> &'static MoodPreset {
        match self {
            Self::Focus => &MOODS[0],
            Self::Cinema => &MOODS[1],
            Self::Gaming => &MOODS[2],
        }
    }
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Theme {
    Night,
    Day,
    Hacker,
    Sunset,
}

/// Static theme preset: style variables plus a font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub theme: Theme,
    pub label: &'static str,
    pub font: &'static str,
    pub vars: [(&'static str, &'static str); 6],
}

pub const THEMES: [ThemePreset; 4] = [
    ThemePreset {
        theme: Theme::Night,
        label: "Original Dark",
        font: "font-sans",
        vars: [
            ("--bg-main", "#050505"),
            ("--text-main", "#f1f5f9"),
            ("--text-muted", "#94a3b8"),
            ("--bg-surface", "rgba(255, 255, 255, 0.05)"),
            ("--border", "rgba(255, 255, 255, 0.1)"),
            ("--accent", "#6366f1"),
        ],
    },
    ThemePreset {
        theme: Theme::Day,
        label: "Frost Ice",
        font: "font-sans",
        vars: [
            ("--bg-main", "#f0f9ff"),
            ("--text-main", "#0c4a6e"),
            ("--text-muted", "#64748b"),
            ("--bg-surface", "rgba(255, 255, 255, 0.65)"),
            ("--border", "rgba(14, 165, 233, 0.2)"),
            ("--accent", "#0ea5e9"),
        ],
    },
    ThemePreset {
        theme: Theme::Hacker,
        label: "Terminal",
        font: "font-mono",
        vars: [
            ("--bg-main", "#000000"),
            ("--text-main", "#4ade80"),
            ("--text-muted", "#166534"),
            ("--bg-surface", "rgba(0, 20, 0, 0.8)"),
            ("--border", "#22c55e"),
            ("--accent", "#22c55e"),
        ],
    },
    ThemePreset {
        theme: Theme::Sunset,
        label: "Vaporwave",
        font: "font-sans",
        vars: [
            ("--bg-main", "#2e1065"),
            ("--text-main", "#fdf4ff"),
            ("--text-muted", "#e879f9"),
            ("--bg-surface", "rgba(0, 0, 0, 0.3)"),
            ("--border", "rgba(232, 121, 249, 0.3)"),
            ("--accent", "#d946ef"),
        ],
    },
];

impl Theme {
    pub fn preset(self) -> &'static ThemePreset {
        match self {
            Self::Night => &THEMES[0],
            Self::Day => &THEMES[1],
            Self::Hacker => &THEMES[2],
            Self::Sunset => &THEMES[3],
        }
    }

    /// Look up a style variable (e.g. `--accent`).
    pub fn var(self, name: &str) -> Option<&'static str> {
        self.preset()
            .vars
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }
}

/// A household profile. Switching is a pure state swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub color: &'static str,
}

pub const PROFILES: [UserProfile; 3] = [
    UserProfile {
        id: "1",
        name: "Admin",
        avatar: "from-indigo-500 to-purple-600",
        color: "indigo",
    },
    UserProfile {
        id: "2",
        name: "Kids",
        avatar: "from-green-400 to-emerald-600",
        color: "emerald",
    },
    UserProfile {
        id: "3",
        name: "Guest",
        avatar: "from-gray-500 to-slate-700",
        color: "gray",
    },
];

/// Networks offered on the Wi-Fi settings page.
pub const WIFI_NETWORKS: [&str; 4] = ["Zenith_5G", "Zenith_2.4G", "Neighbor_Net", "Guest_WiFi"];

/// Global ambient state. Every setter replaces the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambient {
    pub mood: Mood,
    pub theme: Theme,
    pub profile: UserProfile,
    pub lights_on: bool,
    pub wifi: Option<String>,
}

impl Default for Ambient {
    fn default() -> Self {
        Self {
            mood: Mood::Focus,
            theme: Theme::Night,
            profile: PROFILES[0],
            lights_on: true,
            wifi: None,
        }
    }
}

impl Ambient {
    /// Glow color of the active mood.
    pub fn glow(&self) -> &'static str {
        self.mood.preset().glow
    }
}
