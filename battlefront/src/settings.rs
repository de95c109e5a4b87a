//! Startup settings read from a TOML file.
//!
//! Every key is optional; a missing key keeps its default. A minimal file looks like
//!
//! ```toml
//! resolution = "1024x768"
//! difficulty = "hard"
//! music = "drums"
//! ```
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{assets::Track, difficulty::Difficulty, resolution::Resolution};

/// Error loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub resolution: Resolution,
    pub difficulty: Difficulty,
    /// Track to start on the main menu. Without one the game starts silent.
    pub music: Option<Track>,
    /// Directory holding the `images` and `sounds` folders.
    pub assets: PathBuf,
}

impl Settings {
    /// Read settings from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            difficulty: Difficulty::default(),
            music: None,
            assets: PathBuf::from("Resources"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file() {
        let settings = Settings::from_toml("resolution = \"1280x960\"\ndifficulty = \"medium\"\n").unwrap();
        assert_eq!(settings.resolution, Resolution::Res1280x960);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.music, None);
        assert_eq!(settings.assets, PathBuf::from("Resources"));
    }

    #[test]
    fn music_track() {
        let settings = Settings::from_toml("music = \"horror\"").unwrap();
        assert_eq!(settings.music, Some(Track::Horror));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Settings::from_toml("resolution = \"640x480\"").is_err());
        assert!(Settings::from_toml("difficulty = \"insane\"").is_err());
        assert!(Settings::from_toml("volume = 3").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Settings::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
