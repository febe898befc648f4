//! Window configuration for the S2W migration shell.
//!
//! Defaults describe the branded window (title, geometry, logo location).
//! A handful of environment variables can override them at startup:
//!
//! - `S2W_TITLE` - window title
//! - `S2W_GEOMETRY` - window size as `WIDTHxHEIGHT`
//! - `S2W_LOGO` - path to the header logo image

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "S2W Product Migration";
pub const DEFAULT_GEOMETRY: &str = "1100x700";
pub const DEFAULT_LOGO_PATH: &str = "Assets/logo.png";

const TITLE_ENV: &str = "S2W_TITLE";
const GEOMETRY_ENV: &str = "S2W_GEOMETRY";
const LOGO_ENV: &str = "S2W_LOGO";

/// Errors produced while reading window configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid geometry '{0}': expected WIDTHxHEIGHT")]
    MalformedGeometry(String),
    #[error("invalid geometry '{0}': dimensions must be non-zero")]
    ZeroDimension(String),
}

/// Window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    /// Parses a `WIDTHxHEIGHT` string such as `"1100x700"`.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let trimmed = s.trim();
        let (w, h) = trimmed
            .split_once(['x', 'X'])
            .ok_or_else(|| ConfigError::MalformedGeometry(s.to_string()))?;

        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::MalformedGeometry(s.to_string()))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::MalformedGeometry(s.to_string()))?;

        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension(s.to_string()));
        }

        Ok(Self { width, height })
    }
}

impl FromStr for WindowGeometry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self { width: 1100, height: 700 }
    }
}

/// Startup configuration for the application window.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub geometry: WindowGeometry,
    pub logo_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            geometry: WindowGeometry::default(),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
        }
    }
}

impl AppConfig {
    /// Builds a config from defaults plus process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config using an arbitrary key lookup.
    ///
    /// An unparsable geometry is logged and the default size kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(title) = lookup(TITLE_ENV).filter(|t| !t.trim().is_empty()) {
            config.title = title;
        }

        if let Some(geometry) = lookup(GEOMETRY_ENV) {
            match WindowGeometry::parse(&geometry) {
                Ok(parsed) => config.geometry = parsed,
                Err(e) => tracing::warn!("{e}; using {}", config.geometry),
            }
        }

        if let Some(logo) = lookup(LOGO_ENV).filter(|p| !p.is_empty()) {
            config.logo_path = PathBuf::from(logo);
        }

        config
    }

    /// Inner window size for the eframe viewport.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.geometry.width as f32, self.geometry.height as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_geometry() {
        assert_eq!(
            WindowGeometry::parse("1100x700"),
            Ok(WindowGeometry { width: 1100, height: 700 })
        );
        assert_eq!(
            " 800 X 600 ".parse::<WindowGeometry>(),
            Ok(WindowGeometry { width: 800, height: 600 })
        );
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        assert!(matches!(
            WindowGeometry::parse("1100"),
            Err(ConfigError::MalformedGeometry(_))
        ));
        assert!(matches!(
            WindowGeometry::parse("widexhigh"),
            Err(ConfigError::MalformedGeometry(_))
        ));
        assert!(matches!(
            WindowGeometry::parse("0x700"),
            Err(ConfigError::ZeroDimension(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "S2W Product Migration");
        assert_eq!(config.geometry.to_string(), DEFAULT_GEOMETRY);
        assert_eq!(config.inner_size(), [1100.0, 700.0]);
        assert_eq!(config.logo_path, PathBuf::from("Assets/logo.png"));
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("S2W_TITLE", "Staging Migration"),
            ("S2W_GEOMETRY", "1280x800"),
            ("S2W_LOGO", "/tmp/brand.png"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.title, "Staging Migration");
        assert_eq!(config.geometry, WindowGeometry { width: 1280, height: 800 });
        assert_eq!(config.logo_path, PathBuf::from("/tmp/brand.png"));
    }

    #[test]
    fn test_bad_geometry_keeps_default() {
        let config = AppConfig::from_lookup(|k| {
            (k == "S2W_GEOMETRY").then(|| "huge".to_string())
        });
        assert_eq!(config.geometry, WindowGeometry::default());
    }
}
