//! Scenario models and loaders for the bomber design calculator.
//!
//! Scenario files describe designs by catalogue id; [`build_design`]
//! resolves the ids and hands the result to the airframe crate for
//! validation.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use bomber_airframe::{
    Bomber, BombBay, Crewman, DesignError, DesignSpec, Electronics, Fuselage, Girth, Manufacturer,
    Role, Wing,
};
use bomber_catalog::{EngineCatalog, turret_by_id};
use bomber_powerplant::Powerplant;

/// A bomber design parsed from scenario manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct DesignConfig {
    pub name: String,
    pub manufacturer: ManufacturerConfig,
    pub engines: EnginesConfig,
    #[serde(default)]
    pub turrets: Vec<String>,
    pub wing: WingConfig,
    pub crew: Vec<CrewConfig>,
    pub bomb_bay: BayConfig,
    pub fuel_hours: f64,
    #[serde(default)]
    pub fuselage: FuselageConfig,
    #[serde(default)]
    pub electronics: ElectronicsConfig,
    #[serde(default)]
    pub high_altitude: bool,
    #[serde(default = "default_true")]
    pub self_sealing_tanks: bool,
}

fn default_true() -> bool {
    true
}

/// Engine choice: a catalogue id and how many to hang on.
#[derive(Debug, Deserialize, Clone)]
pub struct EnginesConfig {
    pub model: String,
    pub count: u32,
}

/// Wing geometry.
#[derive(Debug, Deserialize, Clone)]
pub struct WingConfig {
    pub area_sqft: f64,
    pub span_ft: f64,
}

/// Bomb bay sizing.
#[derive(Debug, Deserialize, Clone)]
pub struct BayConfig {
    pub capacity_lb: f64,
    pub girth: GirthConfig,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GirthConfig {
    Small,
    Medium,
    Cookie,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ManufacturerConfig {
    Armstrong,
    Avro,
    Bristol,
    DeHavilland,
    HandleyPage,
    Shorts,
    Supermarine,
    Vickers,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FuselageConfig {
    #[default]
    Normal,
    Slender,
    Slabby,
    Geodetic,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElectronicsConfig {
    Low,
    #[default]
    High,
    Stable,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RoleConfig {
    Pilot,
    Navigator,
    BombAimer,
    WirelessOperator,
    FlightEngineer,
    Gunner,
}

/// Crew entry: either a bare role, or a role with the gun flag set.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(untagged)]
pub enum CrewConfig {
    Role(RoleConfig),
    Detailed {
        role: RoleConfig,
        #[serde(default)]
        gun: bool,
    },
}

/// Errors that can occur while loading or resolving scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("engine '{0}' not found in the catalogue")]
    UnknownEngine(String),
    #[error("gun installation '{0}' not found in the catalogue")]
    UnknownTurret(String),
    #[error("design '{0}' not found in the scenario")]
    UnknownDesign(String),
    #[error("design '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: DesignError,
    },
}

/// Load design configurations from a YAML file, a TOML file, or a
/// directory of TOML records.
pub fn load_designs<P: AsRef<Path>>(path: P) -> Result<Vec<DesignConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_designs(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: DesignConfig = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_designs(dir: &Path) -> Result<Vec<DesignConfig>, ConfigError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: DesignConfig = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

/// Select a design from the scenario by name, case-insensitively.
pub fn find_design<'a>(
    designs: &'a [DesignConfig],
    name: &str,
) -> Result<&'a DesignConfig, ConfigError> {
    let upper = name.to_uppercase();
    designs
        .iter()
        .find(|d| d.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::UnknownDesign(name.to_string()))
}

/// Resolve a scenario record against the catalogue and commission the
/// design. Validation failures carry the design's name.
pub fn build_design(
    config: &DesignConfig,
    catalog: &EngineCatalog,
) -> Result<Bomber, ConfigError> {
    let engine = catalog
        .get(&config.engines.model)
        .ok_or_else(|| ConfigError::UnknownEngine(config.engines.model.clone()))?
        .clone();

    let mut turrets = Vec::with_capacity(config.turrets.len());
    for id in &config.turrets {
        let turret = turret_by_id(id).ok_or_else(|| ConfigError::UnknownTurret(id.clone()))?;
        turrets.push(turret);
    }

    let crew = config.crew.iter().map(|c| c.to_crewman()).collect();

    let spec = DesignSpec {
        powerplant: Powerplant::new(config.engines.count, engine),
        turrets,
        wing: Wing::new(config.wing.area_sqft, config.wing.span_ft),
        crew,
        bay: BombBay::new(config.bomb_bay.capacity_lb, config.bomb_bay.girth.into()),
        fuel_hours: config.fuel_hours,
        manufacturer: config.manufacturer.into(),
        fuselage: config.fuselage.into(),
        electronics: config.electronics.into(),
        high_altitude: config.high_altitude,
        self_sealing_tanks: config.self_sealing_tanks,
    };

    Bomber::new(spec).map_err(|source| ConfigError::Invalid {
        name: config.name.clone(),
        source,
    })
}

impl CrewConfig {
    pub fn to_crewman(self) -> Crewman {
        match self {
            CrewConfig::Role(role) => Crewman::new(role.into(), false),
            CrewConfig::Detailed { role, gun } => Crewman::new(role.into(), gun),
        }
    }
}

impl From<GirthConfig> for Girth {
    fn from(value: GirthConfig) -> Self {
        match value {
            GirthConfig::Small => Girth::Small,
            GirthConfig::Medium => Girth::Medium,
            GirthConfig::Cookie => Girth::Cookie,
        }
    }
}

impl From<ManufacturerConfig> for Manufacturer {
    fn from(value: ManufacturerConfig) -> Self {
        match value {
            ManufacturerConfig::Armstrong => Manufacturer::Armstrong,
            ManufacturerConfig::Avro => Manufacturer::Avro,
            ManufacturerConfig::Bristol => Manufacturer::Bristol,
            ManufacturerConfig::DeHavilland => Manufacturer::DeHavilland,
            ManufacturerConfig::HandleyPage => Manufacturer::HandleyPage,
            ManufacturerConfig::Shorts => Manufacturer::Shorts,
            ManufacturerConfig::Supermarine => Manufacturer::Supermarine,
            ManufacturerConfig::Vickers => Manufacturer::Vickers,
        }
    }
}

impl From<FuselageConfig> for Fuselage {
    fn from(value: FuselageConfig) -> Self {
        match value {
            FuselageConfig::Normal => Fuselage::Normal,
            FuselageConfig::Slender => Fuselage::Slender,
            FuselageConfig::Slabby => Fuselage::Slabby,
            FuselageConfig::Geodetic => Fuselage::Geodetic,
        }
    }
}

impl From<ElectronicsConfig> for Electronics {
    fn from(value: ElectronicsConfig) -> Self {
        match value {
            ElectronicsConfig::Low => Electronics::Low,
            ElectronicsConfig::High => Electronics::High,
            ElectronicsConfig::Stable => Electronics::Stable,
        }
    }
}

impl From<RoleConfig> for Role {
    fn from(value: RoleConfig) -> Self {
        match value {
            RoleConfig::Pilot => Role::Pilot,
            RoleConfig::Navigator => Role::Navigator,
            RoleConfig::BombAimer => Role::BombAimer,
            RoleConfig::WirelessOperator => Role::WirelessOperator,
            RoleConfig::FlightEngineer => Role::FlightEngineer,
            RoleConfig::Gunner => Role::Gunner,
        }
    }
}
