use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ultraviolet::{Mat4, Rotor3, Vec3};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    pub camera: CameraConfig,
    pub placements: Vec<Placement>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CameraConfig {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// One placed model instance: which file to load and where to put it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Placement {
    pub model: PathBuf,
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Rotation around the world up axis, in degrees.
    #[serde(default)]
    pub yaw_degrees: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Placement {
    pub fn transform(&self) -> Mat4 {
        let isometry = ultraviolet::Isometry3::new(
            self.translation,
            Rotor3::from_rotation_xz(self.yaw_degrees.to_radians()),
        );
        isometry.into_homogeneous_matrix()
            * Mat4::from_nonuniform_scale(Vec3::new(self.scale, self.scale, self.scale))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            vsync: true,
            camera: CameraConfig {
                position: Vec3::new(0.0, 2.0, 6.0),
                yaw: 0.0,
                pitch: -0.2,
            },
            placements: vec![Placement {
                model: PathBuf::from("assets/models/cube.gltf"),
                translation: Vec3::zero(),
                scale: 1.0,
                yaw_degrees: 0.0,
            }],
        }
    }
}

impl Config {
    /// Loads the config file, writing out (and returning) the defaults when it
    /// does not exist yet.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Could not parse {}: {}, using defaults", path.display(), err);
                    Config::default()
                }
            },
            Err(_) => {
                let config = Config::default();
                config.save(path);
                config
            }
        }
    }

    pub fn save(&self, path: &Path) {
        let content = serde_json::to_string_pretty(self).expect("Could not serialize config");
        if let Err(err) = std::fs::write(path, content) {
            log::warn!("Could not write {}: {}", path.display(), err);
        }
    }
}
