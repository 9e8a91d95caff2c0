//! Host service abstractions for the Zenith launcher.
//!
//! The launcher core talks to the outside world through two traits: a
//! native app provider (installed-app enumeration and launch intents) and a
//! recommendation provider (free-text query to generated titles). This crate
//! defines both, their wire payloads, and the implementations used by the
//! desktop host.

pub mod services;

pub use services::{
    DesktopPlatform, JsonBridge, JsonRecommender, NativeApp, NativeAppProvider,
    OfflineRecommender, Recommendation, RecommendationProvider, parse_installed_apps,
    parse_recommendations,
};
