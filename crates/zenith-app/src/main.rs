//! Zenith headless entry point.
//!
//! Reads remote-control commands from stdin, one per line, feeds them to
//! the launcher, and writes the resulting state snapshot to stdout as one
//! JSON object per line. Sound cues and toasts go to the log.
//!
//! The first argument (or `ZENITH_CONFIG`) names a TOML config file.
//! `ZENITH_APPS` names a JSON dump of the host's installed apps; without it
//! the desktop platform is used and the seed catalog stands alone.
//! `ZENITH_RECS` names a recorded recommendation response; without it the
//! offline recommender answers queries.

mod commands;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use commands::Flow;
use zenith_core::Launcher;
use zenith_platform::{
    DesktopPlatform, JsonBridge, JsonRecommender, NativeAppProvider, OfflineRecommender,
    RecommendationProvider,
};
use zenith_types::config::LauncherConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ZENITH_CONFIG").ok());
    let config = LauncherConfig::resolve(config_path.as_deref())?;
    log::info!(
        "Starting Zenith ({} columns, home shows {})",
        config.grid_cols,
        config.home_slice,
    );

    let native = native_provider(std::env::var("ZENITH_APPS").ok().as_deref());
    let recommender = recommendation_provider(std::env::var("ZENITH_RECS").ok().as_deref());
    let mut launcher = Launcher::new(config, native, recommender);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("{e}");
                continue;
            },
        };
        let flow = commands::apply(command, &mut launcher, &mut out)?;
        for cue in launcher.drain_cues() {
            log::info!("cue: {}", cue.name());
        }
        if let Some(toast) = launcher.toast() {
            log::debug!("toast: {toast}");
        }
        writeln!(out, "{}", serde_json::to_string(&launcher.snapshot())?)?;
        if flow == Flow::Quit || launcher.should_quit() {
            break;
        }
    }

    log::info!("Zenith shut down cleanly");
    Ok(())
}

/// Native app source: the JSON bridge when a registry path is given, else
/// the desktop stand-in. The registry is parsed by the launcher at startup,
/// so a malformed one only costs the native apps.
fn native_provider(registry: Option<&str>) -> Box<dyn NativeAppProvider> {
    let Some(path) = registry else {
        return Box::new(DesktopPlatform::new());
    };
    match std::fs::read_to_string(path) {
        Ok(json) => {
            log::info!("Native bridge attached to {path}");
            Box::new(JsonBridge::from_json(json))
        },
        Err(e) => {
            log::warn!("Cannot read app registry {path}: {e} -- no native bridge");
            Box::new(DesktopPlatform::new())
        },
    }
}

/// Recommendation source: a recorded response when a path is given, else
/// the offline generator.
fn recommendation_provider(response: Option<&str>) -> Box<dyn RecommendationProvider> {
    let Some(path) = response else {
        return Box::new(OfflineRecommender);
    };
    match std::fs::read_to_string(path) {
        Ok(json) => {
            log::info!("Recommendations replayed from {path}");
            Box::new(JsonRecommender::from_json(json))
        },
        Err(e) => {
            log::warn!("Cannot read recommendation response {path}: {e} -- using offline titles");
            Box::new(OfflineRecommender)
        },
    }
}
