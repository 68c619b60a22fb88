//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the navcam crate.
///
/// Camera operations themselves never fail: degenerate input is logged and
/// computed anyway. These errors come from the strict
/// [`try_build`](crate::camera::CameraBuilder::try_build) path and from
/// options I/O.
#[derive(Debug)]
pub enum CameraError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Direction or up vector is zero, non-finite, or the two are parallel.
    DegenerateBasis {
        /// Configured view direction.
        direction: Vec3,
        /// Configured up direction.
        up: Vec3,
    },
    /// Both a perspective field of view and an orthographic half-height were
    /// configured.
    AmbiguousProjection {
        /// Configured field of view in degrees.
        field_of_view: f32,
        /// Configured orthographic half-height in world units.
        world_half_height: f32,
    },
    /// Near plane is not in front of the far plane, or a perspective near
    /// plane is not positive.
    InvalidClipPlanes {
        /// Near clipping plane distance.
        near: f32,
        /// Far clipping plane distance.
        far: f32,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DegenerateBasis { direction, up } => write!(
                f,
                "degenerate camera basis: direction {direction} and up {up} \
                 do not span a plane"
            ),
            Self::AmbiguousProjection {
                field_of_view,
                world_half_height,
            } => write!(
                f,
                "ambiguous projection: field of view {field_of_view} and \
                 world half-height {world_half_height} both configured"
            ),
            Self::InvalidClipPlanes { near, far } => {
                write!(f, "invalid clip planes: near {near}, far {far}")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
