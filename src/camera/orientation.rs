//! Orientation strategies and the camera command vocabulary.
//!
//! A camera is a [`NavigationState`] plus one strategy from a closed set
//! ([`FreeFlight`](super::FreeFlight), [`HorizonLocked`](super::HorizonLocked)),
//! chosen at construction time through the type parameter of
//! [`Camera`](super::Camera). Every input path ends in
//! [`Camera::apply`](super::Camera::apply) with a [`CameraCommand`].

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::builder::NavigationConfig;
use super::navigation::NavigationState;
use crate::error::CameraError;

/// Axis selector for movement commands, relative to the camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the facing direction.
    #[default]
    Forward,
    /// Against the facing direction.
    Backward,
    /// Along `-right`.
    Left,
    /// Along `right`.
    Right,
    /// Along `up`.
    Up,
    /// Along `-up`.
    Down,
}

/// An interactive camera operation.
///
/// Input handling never touches camera internals; it produces commands:
///
/// ```
/// # use navcam::camera::{CameraCommand, FlightCamera, MoveDirection};
/// let mut camera = FlightCamera::builder().build();
/// let _ = camera.apply(CameraCommand::Rotate { pitch: 2.0, yaw: -1.0 });
/// let _ = camera.apply(CameraCommand::Move {
///     direction: Some(MoveDirection::Forward),
///     distance: 0.4,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate along a camera axis (`None` means forward).
    Move {
        /// Axis to move along.
        direction: Option<MoveDirection>,
        /// Distance in world units (negative reverses).
        distance: f32,
    },
    /// Incremental pitch then yaw, in degrees.
    Rotate {
        /// Pitch increment (positive looks up).
        pitch: f32,
        /// Yaw increment (positive turns right).
        yaw: f32,
    },
    /// Incremental roll around the view direction, in degrees. Only
    /// free-flight cameras accept it.
    Roll {
        /// Roll increment.
        degrees: f32,
    },
    /// Zoom (positive narrows a perspective field of view).
    Zoom {
        /// Zoom increment.
        delta: f32,
    },
}

pub(crate) mod sealed {
    use super::{CameraError, NavigationConfig, NavigationState, Vec3};

    /// Orientation-update strategy. Implemented only inside this crate.
    pub trait Strategy: Sized {
        /// Extra builder settings the strategy needs.
        type Settings: Default + Clone + std::fmt::Debug;

        /// Finish initialization after the base state is built.
        fn init(
            state: &mut NavigationState,
            config: &NavigationConfig,
            settings: Self::Settings,
        ) -> Self;

        /// Strict validation for `try_build`.
        fn validate(
            _config: &NavigationConfig,
            _settings: &Self::Settings,
        ) -> Result<(), CameraError> {
            Ok(())
        }

        /// Incremental pitch then yaw, in degrees; must leave the frame
        /// orthonormal and the view transform current.
        fn pitch_and_yaw(
            &mut self,
            state: &mut NavigationState,
            pitch: f32,
            yaw: f32,
        );

        /// Incremental roll in degrees; `false` if the strategy has no roll.
        fn roll(&mut self, state: &mut NavigationState, degrees: f32) -> bool;

        /// Unit world-space vector a movement command travels along.
        fn move_axis(
            &self,
            state: &NavigationState,
            direction: super::MoveDirection,
        ) -> Vec3;
    }
}

/// Marker for the closed set of orientation strategies a
/// [`Camera`](super::Camera) can use.
pub trait Orientation: sealed::Strategy + fmt::Debug + Clone {}
