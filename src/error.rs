//! Error types for scene construction and configuration loading.

use thiserror::Error;

/// Invalid scene data, rejected before any ray is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Sphere radius is zero or negative.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    /// Triangle vertices are collinear (or coincide).
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    /// Reflectivity outside [0, 1].
    #[error("reflectivity must lie in [0, 1], got {0}")]
    InvalidReflectivity(f32),

    /// Specular exponent is neither positive nor disabled.
    #[error("specular exponent must be positive, got {0}")]
    InvalidSpecular(f32),

    /// Directional light without a direction.
    #[error("directional light has a zero-length direction")]
    ZeroLightDirection,

    /// Light intensity with a negative channel.
    #[error("light intensity must be non-negative")]
    NegativeIntensity,

    /// A NaN or infinite value in the named field.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// Canvas with a zero dimension.
    #[error("canvas must be at least 1x1, got {0}x{1}")]
    InvalidCanvas(u32, u32),

    /// Viewport or projection plane that does not span any space.
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Scene file does not exist.
    #[error("scene file not found: {0}")]
    NotFound(String),

    /// Scene file could not be read.
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file is not valid TOML or does not match the schema.
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scene file parsed but describes an invalid scene.
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;
