//! Stylized spacecraft trajectories toward lunar sites, and the animation
//! cursor that travels along them.
//!
//! Paths are visual, not simulated: Bézier arcs from a fixed Earth point,
//! parametric orbits, and a bulged descent that is clamped to stay above the
//! terrain.

mod curve;
mod profile;
mod session;
mod synth;

pub use curve::{quadratic_bezier, wrap_degrees};
pub use profile::{Mission, MissionProfile, status_color};
pub use session::{CursorPose, DEFAULT_CYCLE_MS, TrajectorySession};
pub use synth::{Trajectory, TrajectoryConfig, TrajectorySynthesizer};
