// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub style: StyleConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    /// Either the path to a scene JSON file or the name of a built-in
    /// scene (anything without a ".json" suffix).
    pub scene: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    /// Page color behind the canvas surfaces, "#rrggbb".
    pub background: String,
}

/// Where the scene for this session comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneSource {
    Builtin(String),
    File(PathBuf),
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_scene(&self) -> SceneSource {
        if self.paths.scene.ends_with(".json") {
            SceneSource::File(self.resolve_scene_path())
        } else {
            SceneSource::Builtin(self.paths.scene.clone())
        }
    }

    fn resolve_scene_path(&self) -> PathBuf {
        if Path::new(&self.paths.scene).is_absolute() {
            PathBuf::from(&self.paths.scene)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                exe_dir.join(&self.paths.scene)
            } else {
                PathBuf::from(&self.paths.scene)
            }
        }
    }
}
