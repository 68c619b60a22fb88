//! Camera system for real-time 3D scene viewing.
//!
//! Two layers:
//!
//! - [`Transform`]: view matrix, projection configuration, viewport and
//!   screen-to-world unprojection. The renderer reads the matrices once per
//!   frame.
//! - [`Camera`]: a navigable camera that owns a [`Transform`] and keeps an
//!   orthonormal [`Basis`] under unbounded sequences of small rotations.
//!   [`FlightCamera`] rotates freely; [`HorizonCamera`] keeps its right
//!   vector level against a fixed world-up and clamps pitch at the poles.
//!
//! Cameras are built once through [`CameraBuilder`] and then driven by
//! [`CameraCommand`]s.

mod basis;
mod builder;
mod flight;
mod horizon;
mod navigable;
mod navigation;
mod orientation;
mod projection;
mod ray;
mod snapshot;
mod transform;
mod uniform;

pub use basis::{reject, tilt, Basis, ORTHONORMAL_TOLERANCE};
pub use builder::{
    CameraBuilder, DEFAULT_FAR_PLANE, DEFAULT_NEAR_PLANE,
    DEFAULT_ROTATION_SPEED, DEFAULT_SPEED,
};
pub use flight::{FlightCamera, FreeFlight};
pub use horizon::{
    HorizonCamera, HorizonLocked, HorizonSettings, POLE_CLAMP_DEGREES,
};
pub use navigable::Camera;
pub use navigation::{
    Lens, NavigationState, DEFAULT_FIELD_OF_VIEW, DEFAULT_MAX_FIELD_OF_VIEW,
    MIN_FIELD_OF_VIEW,
};
pub use orientation::{CameraCommand, MoveDirection, Orientation};
pub use projection::Projection;
pub use ray::Ray;
pub use snapshot::CameraSnapshot;
pub use transform::{Transform, Viewport};
pub use uniform::CameraUniform;
