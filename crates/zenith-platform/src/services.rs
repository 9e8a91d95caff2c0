//! Host service traits and their desktop implementations.

use std::collections::HashSet;

use serde::Deserialize;
use zenith_types::error::{Result, ZenithError};

// ---------------------------------------------------------------------------
// Native app provider
// ---------------------------------------------------------------------------

/// A launchable application reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeApp {
    /// Platform package identifier (doubles as the catalog identifier).
    pub package: String,
    /// Human-readable label.
    pub label: String,
    /// Icon as a `data:` URL (empty when the host sent none).
    pub icon: String,
}

/// Abstraction over the host's installed-app registry.
pub trait NativeAppProvider {
    /// Enumerate the currently installed launchable applications.
    fn list_installed(&self) -> Result<Vec<NativeApp>>;

    /// Ask the host to launch the application with the given package.
    fn launch(&mut self, package: &str) -> Result<()>;
}

/// Raw entry as serialized by the host bridge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNativeApp {
    label: String,
    package_name: String,
    #[serde(default)]
    icon: String,
}

const DATA_URL_PREFIX: &str = "data:image";
const PNG_BASE64_PREFIX: &str = "data:image/png;base64,";

/// Parse the bridge's installed-app JSON payload.
///
/// Expected shape: `[{"label": "...", "packageName": "...", "icon": "..."}]`.
/// Entries without a package are skipped. Raw base64 icons are normalized
/// to `data:image/png;base64,` URLs.
pub fn parse_installed_apps(json: &str) -> Result<Vec<NativeApp>> {
    let raw: Vec<RawNativeApp> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut apps = Vec::with_capacity(raw.len());
    for r in raw {
        if r.package_name.trim().is_empty() {
            log::warn!("Skipping app '{}' without a package name", r.label);
            continue;
        }
        // The bridge merges launcher and leanback queries; keep the first.
        if !seen.insert(r.package_name.clone()) {
            continue;
        }
        let icon = if r.icon.is_empty() || r.icon.starts_with(DATA_URL_PREFIX) {
            r.icon
        } else {
            format!("{PNG_BASE64_PREFIX}{}", r.icon)
        };
        apps.push(NativeApp {
            package: r.package_name,
            label: r.label,
            icon,
        });
    }
    Ok(apps)
}

// ---------------------------------------------------------------------------
// Recommendation provider
// ---------------------------------------------------------------------------

/// A generated title returned by the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub genre: String,
}

/// Abstraction over the text-generation recommendation service.
pub trait RecommendationProvider {
    /// Generate recommendations for a free-text theme.
    ///
    /// An empty list means "no results".
    fn recommend(&mut self, query: &str) -> Result<Vec<Recommendation>>;
}

#[derive(Debug, Deserialize)]
struct RecommendationPayload {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

/// Parse the service's JSON payload: `{"recommendations": [...]}`.
pub fn parse_recommendations(json: &str) -> Result<Vec<Recommendation>> {
    let payload: RecommendationPayload = serde_json::from_str(json)?;
    Ok(payload.recommendations)
}

/// Recommendation provider backed by a recorded service response.
///
/// Every query is answered with the same payload. A payload that does not
/// parse is a provider failure, which the shell reports as "no results".
#[derive(Debug, Clone)]
pub struct JsonRecommender {
    payload: String,
}

impl JsonRecommender {
    pub fn from_json(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl RecommendationProvider for JsonRecommender {
    fn recommend(&mut self, query: &str) -> Result<Vec<Recommendation>> {
        let recs = parse_recommendations(&self.payload)
            .map_err(|e| ZenithError::Provider(format!("bad response for '{query}': {e}")))?;
        log::debug!("{} recommendations for '{query}'", recs.len());
        Ok(recs)
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Host used when no native bridge is attached (desktop development).
///
/// Reports no installed apps and treats every launch as successful.
#[derive(Debug, Default)]
pub struct DesktopPlatform {
    recommender: OfflineRecommender,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NativeAppProvider for DesktopPlatform {
    fn list_installed(&self) -> Result<Vec<NativeApp>> {
        log::warn!("Native bridge not attached -- using seed catalog only");
        Ok(Vec::new())
    }

    fn launch(&mut self, package: &str) -> Result<()> {
        log::info!("[dev] would launch package: {package}");
        Ok(())
    }
}

impl RecommendationProvider for DesktopPlatform {
    fn recommend(&mut self, query: &str) -> Result<Vec<Recommendation>> {
        self.recommender.recommend(query)
    }
}

/// Native provider backed by a JSON dump of the host's app registry.
///
/// The dump is parsed on every query, so a malformed registry surfaces as
/// an enumeration failure rather than at construction. Launching succeeds
/// only for packages present in the dump, mirroring a host that cannot
/// resolve a launch intent for unknown packages.
#[derive(Debug, Clone)]
pub struct JsonBridge {
    registry: String,
}

impl JsonBridge {
    pub fn from_json(registry: impl Into<String>) -> Self {
        Self {
            registry: registry.into(),
        }
    }
}

impl NativeAppProvider for JsonBridge {
    fn list_installed(&self) -> Result<Vec<NativeApp>> {
        parse_installed_apps(&self.registry)
    }

    fn launch(&mut self, package: &str) -> Result<()> {
        if self.list_installed()?.iter().any(|a| a.package == package) {
            log::info!("Launch intent sent for {package}");
            Ok(())
        } else {
            Err(ZenithError::Platform(format!(
                "no launch intent for package {package}"
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Offline recommender
// ---------------------------------------------------------------------------

/// Number of titles produced per query.
const OFFLINE_BATCH: usize = 6;

const GENRES: [&str; 6] = [
    "Sci-Fi",
    "Drama",
    "Thriller",
    "Documentary",
    "Animation",
    "Adventure",
];

const TITLE_PATTERNS: [&str; 6] = [
    "{} Rising",
    "Beyond {}",
    "The {} Protocol",
    "Chronicles of {}",
    "{}: Zero Hour",
    "Echoes of {}",
];

/// Deterministic stand-in for the text-generation service.
#[derive(Debug, Default)]
pub struct OfflineRecommender;

impl RecommendationProvider for OfflineRecommender {
    fn recommend(&mut self, query: &str) -> Result<Vec<Recommendation>> {
        let theme = title_case(query.trim());
        if theme.is_empty() {
            return Ok(Vec::new());
        }
        Ok((0..OFFLINE_BATCH)
            .map(|i| Recommendation {
                title: TITLE_PATTERNS[i].replace("{}", &theme),
                description: format!("A {} story inspired by \"{theme}\".", GENRES[i].to_lowercase()),
                genre: GENRES[i].to_string(),
            })
            .collect())
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
