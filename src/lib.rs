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
// Complexity limits
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

//! Quaternion virtual-trackball camera and the small linear-algebra kit it
//! is built on.
//!
//! Quatcam turns pointer drags, scroll steps and key presses into view and
//! projection matrices ready for upload to a shading program.
//!
//! # Key entry points
//!
//! - [`camera::Trackball`] - orientation, distance and pan, with the derived
//!   view/projection matrices and camera position
//! - [`input::InputProcessor`] - platform events to [`input::TrackballCommand`]s
//! - [`math`] - `Vector2`/`Vector3`/`Vector4`, [`math::Quaternion`],
//!   [`math::Matrix4`] builders
//! - [`animation`] - keyframe tracks for model transforms
//! - [`options::Options`] - trackball tuning and key bindings, loadable from
//!   TOML presets
//!
//! # Conventions
//!
//! Right-handed coordinates, column vectors, column-major storage, clip-space
//! depth in `[-1, 1]`. Quaternions are stored `(x, y, z, w)`. Angles passed as
//! plain `f32` are in degrees.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
