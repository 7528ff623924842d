use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;
use crate::error::ListingGeoError;
use crate::models::{CoordinateFields, ListingKind};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub listings: ListingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Field layout per listing collection
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListingSettings {
    #[serde(default = "default_auction_fields")]
    #[validate(nested)]
    pub auction: FieldSettings,
    #[serde(default = "default_new_project_fields")]
    #[validate(nested)]
    pub new_project: FieldSettings,
    #[serde(default = "default_property_fields")]
    #[validate(nested)]
    pub property: FieldSettings,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            auction: default_auction_fields(),
            new_project: default_new_project_fields(),
            property: default_property_fields(),
        }
    }
}

impl ListingSettings {
    pub fn for_kind(&self, kind: ListingKind) -> &FieldSettings {
        match kind {
            ListingKind::AuctionListing => &self.auction,
            ListingKind::NewProject => &self.new_project,
            ListingKind::Property => &self.property,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct FieldSettings {
    #[validate(length(min = 1))]
    pub latitude: String,
    #[validate(length(min = 1))]
    pub longitude: String,
    /// Field searched by name queries; `None` disables them
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: Option<String>,
}

impl FieldSettings {
    pub fn coordinate_fields(&self) -> CoordinateFields {
        CoordinateFields::new(self.latitude.clone(), self.longitude.clone())
    }
}

fn default_auction_fields() -> FieldSettings {
    default_fields(ListingKind::AuctionListing, Some("Apartment Name"))
}

fn default_new_project_fields() -> FieldSettings {
    default_fields(ListingKind::NewProject, None)
}

fn default_property_fields() -> FieldSettings {
    default_fields(ListingKind::Property, None)
}

fn default_fields(kind: ListingKind, name: Option<&str>) -> FieldSettings {
    let coordinates = CoordinateFields::for_kind(kind);
    FieldSettings {
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        name: name.map(str::to_string),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LISTING_GEO__), `.env` included
    pub fn load() -> Result<Self, ListingGeoError> {
        dotenv::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LISTING_GEO__LOGGING__LEVEL -> logging.level
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ListingGeoError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    /// Parse configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ListingGeoError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ListingGeoError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("LISTING_GEO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
