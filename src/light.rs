//! Light sources.
//!
//! Intensities are per-channel multipliers; a uniform white light is the
//! special case with equal channels.

use glam::Vec3A;

use crate::error::{Result, SceneError};
use crate::vector::{self, Color};

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform fill light with no position or direction.
    Ambient {
        /// Per-channel intensity.
        intensity: Color,
    },

    /// Light emitted from a point in world space.
    ///
    /// Falloff is by angle only, not by distance.
    Point {
        /// Per-channel intensity.
        intensity: Color,
        /// World-space position.
        position: Vec3A,
    },

    /// Light arriving from a fixed direction with no position.
    Directional {
        /// Per-channel intensity.
        intensity: Color,
        /// Unit direction from the surface towards the light.
        direction: Vec3A,
    },
}

impl Light {
    /// Ambient light.
    pub fn ambient(intensity: Color) -> Result<Self> {
        check_intensity(intensity)?;
        Ok(Light::Ambient { intensity })
    }

    /// Point light at `position`.
    pub fn point(intensity: Color, position: Vec3A) -> Result<Self> {
        check_intensity(intensity)?;
        if !position.is_finite() {
            return Err(SceneError::NonFinite("light position"));
        }
        Ok(Light::Point {
            intensity,
            position,
        })
    }

    /// Directional light shining from `direction`.
    ///
    /// The direction points from surfaces towards the light. It is stored
    /// normalized, so shadow rays measure their offset from the surface in
    /// world units whatever length the direction was given with.
    pub fn directional(intensity: Color, direction: Vec3A) -> Result<Self> {
        check_intensity(intensity)?;
        if !direction.is_finite() {
            return Err(SceneError::NonFinite("light direction"));
        }
        let direction = vector::normalize(direction).ok_or(SceneError::ZeroLightDirection)?;
        Ok(Light::Directional {
            intensity,
            direction,
        })
    }

    /// Per-channel intensity of any light kind.
    pub fn intensity(&self) -> Color {
        match self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => *intensity,
        }
    }
}

fn check_intensity(intensity: Color) -> Result<()> {
    if !intensity.is_finite() {
        return Err(SceneError::NonFinite("light intensity"));
    }
    if intensity.min_element() < 0.0 {
        return Err(SceneError::NegativeIntensity);
    }
    Ok(())
}
