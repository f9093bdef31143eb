//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `raceclock.toml` in the working directory (or the path in
//! `RACECLOCK_CONFIG`). Every field has a sensible default so the file is
//! optional: without one the daemon serves the built-in 24-hour race
//! catalog. Environment variables take precedence over file values.
//!
//! A `[[places]]` or `[[races]]` list in the file replaces the built-in list
//! of the same kind entirely.

use serde::Deserialize;

use raceclock_adapter_http_axum::state::DashboardDefaults;
use raceclock_app::catalog::InMemoryRaceCatalog;
use raceclock_app::services::timeline_service::MAX_SCAN_DAYS;
use raceclock_domain::geo::GeoPoint;
use raceclock_domain::id::{PlaceId, RaceId};
use raceclock_domain::place::Place;
use raceclock_domain::race::Race;
use raceclock_domain::solar::RangeOptions;
use raceclock_domain::time::parse_timestamp;

const DEFAULT_PATH: &str = "raceclock.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sunrise/sunset search window.
    pub solar: RangeOptions,
    /// What the dashboard shows by default.
    pub dashboard: DashboardConfig,
    /// Clock points.
    pub places: Vec<PlaceConfig>,
    /// Race schedules.
    pub races: Vec<RaceConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Dashboard defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Race shown when the request names none; the first race if unset.
    pub race: Option<String>,
    /// Places shown next to the race's own place.
    pub places: Vec<String>,
}

/// One `[[places]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceConfig {
    pub id: String,
    pub label: String,
    /// IANA time zone name.
    pub time_zone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One `[[races]]` entry. Bounds are RFC 3339 strings with an offset.
#[derive(Debug, Clone, Deserialize)]
pub struct RaceConfig {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    /// Identifier of a configured place.
    pub place: String,
}

impl Config {
    /// Load configuration from `raceclock.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("RACECLOCK_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RACECLOCK_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("RACECLOCK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("RACECLOCK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("RACECLOCK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let window = i64::from(self.solar.search_back_days) + i64::from(self.solar.search_fwd_days);
        if window >= MAX_SCAN_DAYS {
            return Err(ConfigError::Validation(format!(
                "solar search window of {window} days must stay below {MAX_SCAN_DAYS}"
            )));
        }
        let catalog = self.catalog()?;
        self.dashboard_defaults_in(&catalog)?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the race catalog from the configured places and races.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending entry when a
    /// place or race is invalid, an identifier repeats, or a race refers to
    /// an unknown place.
    pub fn catalog(&self) -> Result<InMemoryRaceCatalog, ConfigError> {
        let places = self
            .places
            .iter()
            .map(PlaceConfig::to_place)
            .collect::<Result<Vec<_>, _>>()?;
        let races = self
            .races
            .iter()
            .map(RaceConfig::to_race)
            .collect::<Result<Vec<_>, _>>()?;
        InMemoryRaceCatalog::new(places, races)
            .map_err(|err| ConfigError::Validation(format!("catalog: {}", describe(&err))))
    }

    /// Dashboard fallbacks, checked against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the default race or a default
    /// place is not in the catalog.
    pub fn dashboard_defaults(&self) -> Result<DashboardDefaults, ConfigError> {
        self.dashboard_defaults_in(&self.catalog()?)
    }

    fn dashboard_defaults_in(
        &self,
        catalog: &InMemoryRaceCatalog,
    ) -> Result<DashboardDefaults, ConfigError> {
        let race = match &self.dashboard.race {
            Some(raw) => {
                let id = RaceId::new(raw.as_str())
                    .map_err(|err| ConfigError::Validation(format!("dashboard.race: {err}")))?;
                if !catalog.contains_race(&id) {
                    return Err(ConfigError::Validation(format!(
                        "dashboard.race: race {id} is not defined"
                    )));
                }
                Some(id)
            }
            None => None,
        };

        let places = self
            .dashboard
            .places
            .iter()
            .map(|raw| {
                let id = PlaceId::new(raw.as_str())
                    .map_err(|err| ConfigError::Validation(format!("dashboard.places: {err}")))?;
                if catalog.contains_place(&id) {
                    Ok(id)
                } else {
                    Err(ConfigError::Validation(format!(
                        "dashboard.places: place {id} is not defined"
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DashboardDefaults { race, places })
    }
}

impl PlaceConfig {
    fn to_place(&self) -> Result<Place, ConfigError> {
        let invalid = |err: &dyn std::fmt::Display| {
            ConfigError::Validation(format!("place {}: {err}", self.id))
        };
        let id = PlaceId::new(self.id.as_str()).map_err(|err| invalid(&err))?;
        Place::builder()
            .id(id)
            .label(self.label.as_str())
            .time_zone(self.time_zone.as_str())
            .point(GeoPoint {
                latitude: self.latitude,
                longitude: self.longitude,
            })
            .build()
            .map_err(|err| invalid(&describe(&err)))
    }
}

impl RaceConfig {
    fn to_race(&self) -> Result<Race, ConfigError> {
        let invalid = |err: &dyn std::fmt::Display| {
            ConfigError::Validation(format!("race {}: {err}", self.id))
        };
        Race::builder()
            .id(RaceId::new(self.id.as_str()).map_err(|err| invalid(&err))?)
            .name(self.name.as_str())
            .start(parse_timestamp(&self.start).map_err(|err| invalid(&err))?)
            .end(parse_timestamp(&self.end).map_err(|err| invalid(&err))?)
            .place(PlaceId::new(self.place.as_str()).map_err(|err| invalid(&err))?)
            .build()
            .map_err(|err| invalid(&describe(&err)))
    }
}

/// Render a domain error with its source, which carries the actual reason.
fn describe(err: &raceclock_domain::error::RaceClockError) -> String {
    use raceclock_domain::error::RaceClockError;
    match err {
        RaceClockError::Validation(inner) => inner.to_string(),
        RaceClockError::NotFound(inner) => inner.to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            solar: RangeOptions::default(),
            dashboard: DashboardConfig::default(),
            places: default_places(),
            races: default_races(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "raceclockd=info,raceclock=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            race: Some("2026-lemans24".to_string()),
            places: vec!["tokyo".to_string()],
        }
    }
}

fn place(id: &str, label: &str, time_zone: &str, latitude: f64, longitude: f64) -> PlaceConfig {
    PlaceConfig {
        id: id.to_string(),
        label: label.to_string(),
        time_zone: time_zone.to_string(),
        latitude,
        longitude,
    }
}

fn race(id: &str, name: &str, start: &str, end: &str, place: &str) -> RaceConfig {
    RaceConfig {
        id: id.to_string(),
        name: name.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        place: place.to_string(),
    }
}

fn default_places() -> Vec<PlaceConfig> {
    vec![
        place("le-mans", "Le Mans", "Europe/Paris", 47.949_862_8, 0.207_354),
        place(
            "spa-francorchamps",
            "Spa-Francorchamps",
            "Europe/Brussels",
            50.442_890_8,
            5.965_283_1,
        ),
        place("nurburgring", "Nürburgring", "Europe/Berlin", 50.335_598_7, 6.947_032),
        place("daytona", "Daytona", "America/New_York", 29.187_675_2, -81.072_983_5),
        place("tokyo", "Tokyo", "Asia/Tokyo", 35.698_371_2, 139.772_828_1),
    ]
}

fn default_races() -> Vec<RaceConfig> {
    vec![
        race(
            "2026-lemans24",
            "2026 - 24 Heures du Mans",
            "2026-06-13T14:00:00+02:00",
            "2026-06-14T14:00:00+02:00",
            "le-mans",
        ),
        race(
            "2026-daytona24",
            "2026 - Rolex 24 at Daytona",
            "2026-01-24T13:40:00-05:00",
            "2026-01-25T13:40:00-05:00",
            "daytona",
        ),
        race(
            "2026-spa24",
            "2026 - CrowdStrike 24 Hours of Spa",
            "2026-06-27T16:30:00+02:00",
            "2026-06-28T16:30:00+02:00",
            "spa-francorchamps",
        ),
        race(
            "2026-nur24",
            "2026 - ADAC RAVENOL 24h Nürburgring",
            "2026-05-16T16:00:00+02:00",
            "2026-05-17T16:00:00+02:00",
            "nurburgring",
        ),
        race(
            "2025-daytona24",
            "2025 - Rolex 24 at Daytona",
            "2025-01-25T13:40:00-05:00",
            "2025-01-26T13:40:00-05:00",
            "daytona",
        ),
        race(
            "2025-lemans24",
            "2025 - 24 Heures du Mans",
            "2025-06-14T14:00:00+02:00",
            "2025-06-15T14:00:00+02:00",
            "le-mans",
        ),
        race(
            "2025-nur24",
            "2025 - ADAC RAVENOL 24h Nürburgring",
            "2025-06-21T16:00:00+02:00",
            "2025-06-22T16:00:00+02:00",
            "nurburgring",
        ),
        race(
            "2025-spa24",
            "2025 - CrowdStrike 24 Hours of Spa",
            "2025-06-28T16:30:00+02:00",
            "2025-06-29T16:30:00+02:00",
            "spa-francorchamps",
        ),
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
