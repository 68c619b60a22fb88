// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and navigation core for real-time 3D rendering.
//!
//! Navcam owns the mapping from world space to a renderable view: view and
//! projection matrices, viewport handling and screen-to-world ray
//! unprojection, plus the per-frame orientation math that lets a user fly or
//! walk through a scene while the camera frame stays orthonormal.
//!
//! # Key entry points
//!
//! - [`camera::Transform`] - view/projection transform and unprojection
//! - [`camera::FlightCamera`] - free-flight camera with pitch, yaw and roll
//! - [`camera::HorizonCamera`] - horizon-locked "walking" camera
//! - [`camera::CameraCommand`] - the command vocabulary every input path
//!   produces
//! - [`input::InputProcessor`] - converts window events into commands
//! - [`options::Options`] - TOML presets for camera and controls
//!
//! # Example
//!
//! ```
//! use glam::{UVec2, Vec3};
//! use navcam::camera::{HorizonCamera, MoveDirection};
//!
//! let mut camera = HorizonCamera::builder()
//!     .with_position(Vec3::new(0.0, 0.0, 50.0))
//!     .with_direction(Vec3::NEG_Z)
//!     .with_world_up_direction(Vec3::Y)
//!     .with_field_of_view(45.0)
//!     .build();
//!
//! camera.pitch_and_yaw(2.0, -5.0);
//! camera.walk(0.5, MoveDirection::Forward);
//!
//! let view = camera.view_transform();
//! let projection = camera.projection_transform(UVec2::new(1280, 720));
//! let _view_proj = projection * view;
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use error::CameraError;
