use std::path::Path;
use std::str::FromStr;

use ini::Ini;

use crate::error::ConfigError;

/// Names the settings file read into `SETTINGS`
pub const CONFIG_ENV: &str = "VM_CONFIG";

pub const DEFAULT_ROTATION_THRESHOLD: f32 = 1e-4;
pub const DEFAULT_HIERARCHY_DEPTH: usize = 64;

lazy_static! {
    pub static ref SETTINGS: Settings = {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Settings::load(&path).unwrap_or_else(|err| {
                warn!("{}: {}; using default settings", path, err);
                Settings::default()
            }),

            Err(_) => Settings::default(),
        }
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Settings {
    /// Smallest per-step rotation angle (radians) a rigid body integrates
    pub rotation_threshold: f32,

    /// Longest parent chain a transform may resolve through
    pub hierarchy_depth: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
            hierarchy_depth: DEFAULT_HIERARCHY_DEPTH,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let ini = Ini::load_from_file(path.as_ref())?;
        let settings = Settings::from_ini(&ini)?;

        debug!("loaded {:?} from {}", settings, path.as_ref().display());

        Ok(settings)
    }

    /// Missing sections and keys keep their defaults
    pub fn from_ini(ini: &Ini) -> Result<Settings, ConfigError> {
        let mut settings = Settings::default();

        if let Some(value) = load_setting(ini, "physics", "rotation_threshold")? {
            settings.rotation_threshold = value;
        }

        if let Some(value) = load_setting(ini, "transform", "hierarchy_depth")? {
            settings.hierarchy_depth = value;
        }

        Ok(settings)
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Settings, ConfigError> {
        let ini = Ini::load_from_str(source)?;
        Settings::from_ini(&ini)
    }
}

fn load_setting<T: FromStr>(
    ini: &Ini,
    section: &str,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let value = match ini.section(Some(section)).and_then(|s| s.get(key)) {
        Some(value) => value,
        None => return Ok(None),
    };

    value.trim().parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::Value {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
}
