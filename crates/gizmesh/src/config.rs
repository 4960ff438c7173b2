//! Gizmo configuration structures
//!
//! Settings that can be serialized and loaded from RON files: handle sizing,
//! colors, snapping and state eviction.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::colors;

/// How large handles are drawn and hit-tested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum HandleSizing {
    /// Constant world-space scale
    Fixed {
        /// World units per gizmo unit
        scale: f32,
    },
    /// Proportional to the camera distance, so handles keep their screen size
    CameraDistance {
        /// Scale per unit of camera distance
        factor: f32,
        /// Lower bound for the scale
        min_scale: f32,
    },
}

impl Default for HandleSizing {
    fn default() -> Self {
        HandleSizing::Fixed { scale: 1.0 }
    }
}

impl HandleSizing {
    /// World scale of a handle centered at `center`.
    pub fn scale_for(&self, camera_position: Vec3, center: Vec3) -> f32 {
        let scale = match *self {
            HandleSizing::Fixed { scale } => scale,
            HandleSizing::CameraDistance { factor, min_scale } => {
                (camera_position.distance(center) * factor).max(min_scale)
            }
        };
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        }
    }
}

/// Handle colors (RGBA)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoColors {
    /// X-axis color
    pub x_axis: [f32; 4],
    /// Y-axis color
    pub y_axis: [f32; 4],
    /// Z-axis color
    pub z_axis: [f32; 4],
    /// View-plane handle color
    pub view: [f32; 4],
    /// Hovered element color
    pub hover: [f32; 4],
    /// Dragged element color
    pub active: [f32; 4],
    /// Alpha applied to planar quads
    pub plane_alpha: f32,
}

impl Default for GizmoColors {
    fn default() -> Self {
        Self {
            x_axis: colors::X_AXIS,
            y_axis: colors::Y_AXIS,
            z_axis: colors::Z_AXIS,
            view: colors::VIEW,
            hover: colors::HOVER,
            active: colors::ACTIVE,
            plane_alpha: colors::PLANE_ALPHA,
        }
    }
}

impl GizmoColors {
    /// Idle color for an axis index, or the view color for `None`.
    pub fn axis(&self, axis: Option<usize>) -> [f32; 4] {
        match axis {
            Some(0) => self.x_axis,
            Some(1) => self.y_axis,
            Some(2) => self.z_axis,
            _ => self.view,
        }
    }
}

/// Snapping increments; `None` disables snapping for that mode
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapConfig {
    /// Translation step in world units
    pub translation: Option<f32>,
    /// Rotation step in degrees
    pub rotation_degrees: Option<f32>,
    /// Scale ratio step
    pub scale: Option<f32>,
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GizmoConfig {
    /// Handle sizing policy
    #[serde(default)]
    pub sizing: HandleSizing,
    /// Handle colors
    #[serde(default)]
    pub colors: GizmoColors,
    /// Snapping increments
    #[serde(default)]
    pub snap: SnapConfig,
    /// Drop interaction state for ids not used for this many frames.
    /// `None` keeps every state for the lifetime of the system.
    #[serde(default)]
    pub evict_after_frames: Option<u32>,
}

impl GizmoConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a RON string
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Serialize to a pretty-printed RON string
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!("Loaded gizmo config from {}", path.display());
        Ok(config)
    }

    /// Save to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved gizmo config to {}", path.display());
        Ok(())
    }
}

/// Configuration I/O errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The configuration could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The file is not valid configuration RON
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
