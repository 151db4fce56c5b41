//! Surface appearance shared by every primitive.
//!
//! A material combines a base color with the two Phong-style knobs the
//! tracer understands: a specular exponent for highlights and a
//! reflectivity weight for mirror bounces.

use crate::error::{Result, SceneError};
use crate::vector::Color;

/// Surface appearance of a sphere or triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color in 0-255 display units.
    pub color: Color,

    /// Specular exponent; `None` disables highlights.
    ///
    /// Higher values give smaller, sharper highlights.
    pub specular: Option<f32>,

    /// Mirror weight in [0, 1]: 0 is fully matte, 1 a perfect mirror.
    pub reflective: f32,
}

impl Material {
    /// Create a validated material.
    ///
    /// Rejects non-finite colors, non-positive specular exponents and
    /// reflectivity outside [0, 1].
    pub fn new(color: Color, specular: Option<f32>, reflective: f32) -> Result<Self> {
        if !color.is_finite() {
            return Err(SceneError::NonFinite("material color"));
        }
        if let Some(exponent) = specular {
            if !exponent.is_finite() {
                return Err(SceneError::NonFinite("specular exponent"));
            }
            if exponent <= 0.0 {
                return Err(SceneError::InvalidSpecular(exponent));
            }
        }
        if !(0.0..=1.0).contains(&reflective) {
            return Err(SceneError::InvalidReflectivity(reflective));
        }

        Ok(Self {
            color,
            specular,
            reflective,
        })
    }

    /// Matte material without highlights or reflections.
    pub fn matte(color: Color) -> Result<Self> {
        Self::new(color, None, 0.0)
    }
}
