//! Lookup of resolution specific artwork and music.
//!
//! Every image that differs per resolution is addressed by an [`AssetRole`] plus a
//! [`Resolution`], so adding a resolution means adding a column to one table rather
//! than inventing another name suffix.
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{layout::Point, resolution::Resolution, state::Mode};

/// Background music tracks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Tortuga,
    Drums,
    Horror,
}

impl Track {
    pub fn file_name(self) -> &'static str {
        match self {
            Track::Tortuga => "Destination_Tortuga.mp3",
            Track::Drums => "Drums_of_Buccaneer.mp3",
            Track::Horror => "horrordrone.mp3",
        }
    }
}

/// Short sound effects played in response to a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sound {
    /// A placement or shot was refused.
    Error,
    Hit,
    /// A ship went down.
    Sink,
    Miss,
    Winner,
    Lose,
}

impl Sound {
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Error => "error.wav",
            Sound::Hit => "hit.wav",
            Sound::Sink => "sink.wav",
            Sound::Miss => "watershot.wav",
            Sound::Winner => "winner.wav",
            Sound::Lose => "lose.wav",
        }
    }
}

/// What an image is used for, independent of resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetRole {
    MenuBackground,
    DiscoveryBackground,
    DeployBackground,
    LeftRightButton,
    UpDownButton,
    SelectedShip,
    PlayButton,
    RandomButton,
    Explosion,
    Splash,
    SetupPanel,
    SoundPanel,
    ResolutionPanel,
}

impl AssetRole {
    /// Image file for this role at the given resolution.
    pub fn file_name(self, res: Resolution) -> &'static str {
        let [small, mid, large] = match self {
            AssetRole::MenuBackground => [
                "main_page.jpg",
                "main_page1024x768.jpg",
                "main_page1280x960.jpg",
            ],
            AssetRole::DiscoveryBackground => [
                "discover.jpg",
                "discover1024x768.jpg",
                "discover1280x960.jpg",
            ],
            AssetRole::DeployBackground => {
                ["deploy.jpg", "deploy1024x768.jpg", "deploy1280x960.jpg"]
            }
            AssetRole::LeftRightButton => [
                "deploy_dir_button_horiz.png",
                "deploy_dir_button_horiz1024x768.png",
                "deploy_dir_button_horiz1280x960.png",
            ],
            AssetRole::UpDownButton => [
                "deploy_dir_button_vert.png",
                "deploy_dir_button_vert1024x768.png",
                "deploy_dir_button_vert1280x960.png",
            ],
            AssetRole::SelectedShip => [
                "deploy_button_hl.png",
                "deploy_button_hl1024x768.png",
                "deploy_button_hl1280x960.png",
            ],
            AssetRole::PlayButton => [
                "deploy_play_button.png",
                "deploy_play_button1024x768.png",
                "deploy_play_button1280x960.png",
            ],
            AssetRole::RandomButton => [
                "deploy_randomize_button.png",
                "deploy_randomize_button1024x768.png",
                "deploy_randomize_button1280x960.png",
            ],
            AssetRole::Explosion => [
                "explosion.png",
                "explosion1024x768.png",
                "explosion1280x960.png",
            ],
            AssetRole::Splash => ["splash.png", "splash1024x768.png", "splash1280x960.png"],
            AssetRole::SetupPanel => [
                "setup_menu.png",
                "setup_menu1024x768.png",
                "setup_menu1280x960.png",
            ],
            AssetRole::SoundPanel => [
                "sound_menu.png",
                "sound_menu1024x768.png",
                "sound_menu1280x960.png",
            ],
            AssetRole::ResolutionPanel => [
                "resolution_menu.png",
                "resolution_menu1024x768.png",
                "resolution_menu1280x960.png",
            ],
        };
        match res {
            Resolution::Res800x600 => small,
            Resolution::Res1024x768 => mid,
            Resolution::Res1280x960 => large,
        }
    }
}

/// Background drawn behind the given mode. `None` means the screen is just cleared.
pub fn background(mode: Mode) -> Option<AssetRole> {
    match mode {
        Mode::MainMenu
        | Mode::GameMenu
        | Mode::Settings
        | Mode::HighScores
        | Mode::AlteringMusic
        | Mode::AlteringResolution => Some(AssetRole::MenuBackground),
        Mode::Discovering | Mode::EndingGame => Some(AssetRole::DiscoveryBackground),
        Mode::Deploying => Some(AssetRole::DeployBackground),
        Mode::Quitting => None,
    }
}

/// Panel drawn behind a sub-menu and its device position. These origins were placed by
/// hand for each resolution and are not derived from the scale factor.
pub fn overlay(mode: Mode, res: Resolution) -> Option<(AssetRole, Point)> {
    let (role, origins): (AssetRole, [(f32, f32); 3]) = match mode {
        Mode::Settings => (AssetRole::SetupPanel, [(59., 484.), (58., 618.), (58., 776.)]),
        Mode::AlteringMusic => (
            AssetRole::SoundPanel,
            [(171., 484.), (200., 618.), (235., 776.)],
        ),
        Mode::AlteringResolution => (
            AssetRole::ResolutionPanel,
            [(389., 484.), (481., 621.), (584., 776.)],
        ),
        _ => return None,
    };
    let origin = match res {
        Resolution::Res800x600 => origins[0],
        Resolution::Res1024x768 => origins[1],
        Resolution::Res1280x960 => origins[2],
    };
    Some((role, Point::new(origin.0, origin.1)))
}

/// Resolves asset files under a resource directory. Missing files are reported as
/// absent rather than treated as errors.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the image for `role` at `res`, if the file exists.
    pub fn image(&self, role: AssetRole, res: Resolution) -> Option<PathBuf> {
        self.existing(self.root.join("images").join(role.file_name(res)))
    }

    /// Path of the music file for `track`, if it exists.
    pub fn music(&self, track: Track) -> Option<PathBuf> {
        self.existing(self.root.join("sounds").join(track.file_name()))
    }

    /// Path of the sound effect file, if it exists.
    pub fn sound(&self, sound: Sound) -> Option<PathBuf> {
        self.existing(self.root.join("sounds").join(sound.file_name()))
    }

    fn existing(&self, path: PathBuf) -> Option<PathBuf> {
        if path.is_file() {
            Some(path)
        } else {
            warn!("asset {} is missing", path.display());
            None
        }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new("Resources")
    }
}
