//! Animation cursor that loops along the active trajectory.

use glam::{DQuat, DVec3};

use crate::synth::Trajectory;

/// Default time for one full pass along a path, in milliseconds.
pub const DEFAULT_CYCLE_MS: f64 = 8000.0;

/// Marker position and heading at the current progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPose {
    /// Marker position.
    pub position: DVec3,
    /// Unit direction of travel, or zero on a degenerate segment.
    pub tangent: DVec3,
}

impl CursorPose {
    /// Rotation taking the marker's +Z axis onto the direction of travel.
    pub fn orientation(&self) -> DQuat {
        if self.tangent == DVec3::ZERO {
            DQuat::IDENTITY
        } else {
            DQuat::from_rotation_arc(DVec3::Z, self.tangent)
        }
    }
}

/// The trajectory currently on screen plus the cursor travelling along it.
///
/// Created when an artifact is selected and cleared on deselection. The
/// render loop calls [`advance`](Self::advance) once per frame; nothing else
/// may mutate the session concurrently.
#[derive(Clone, Debug)]
pub struct TrajectorySession {
    trajectory: Option<Trajectory>,
    progress: f64,
    cycle_ms: f64,
}

impl Default for TrajectorySession {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_MS)
    }
}

impl TrajectorySession {
    /// Create an inert session. `cycle_ms` is the time for one full pass;
    /// values below 1 ms are raised to 1 ms.
    pub fn new(cycle_ms: f64) -> Self {
        let cycle_ms = if cycle_ms.is_finite() {
            cycle_ms.max(1.0)
        } else {
            DEFAULT_CYCLE_MS
        };
        Self {
            trajectory: None,
            progress: 0.0,
            cycle_ms,
        }
    }

    /// Show a new trajectory, dropping any previous one. Progress restarts at 0.
    pub fn start(&mut self, trajectory: Trajectory) {
        self.trajectory = Some(trajectory);
        self.progress = 0.0;
    }

    /// Drop the current trajectory and reset the cursor.
    ///
    /// Returns the released trajectory, if there was one.
    pub fn clear(&mut self) -> Option<Trajectory> {
        self.progress = 0.0;
        self.trajectory.take()
    }

    /// Advance the cursor by `dt_ms` and return its pose.
    ///
    /// Progress wraps to 0 once it passes 1. Returns `None` when no trajectory
    /// is active or it has no points; the session is left untouched in that case.
    pub fn advance(&mut self, dt_ms: f64) -> Option<CursorPose> {
        let trajectory = self.trajectory.as_ref()?;
        if trajectory.points.is_empty() {
            return None;
        }

        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.progress += dt_ms / self.cycle_ms;
        }
        if self.progress > 1.0 {
            self.progress = 0.0;
        }

        Some(pose_at(&trajectory.points, self.progress))
    }

    /// The pose at the current progress, without advancing.
    pub fn pose(&self) -> Option<CursorPose> {
        let trajectory = self.trajectory.as_ref()?;
        if trajectory.points.is_empty() {
            return None;
        }
        Some(pose_at(&trajectory.points, self.progress))
    }

    /// Whether a trajectory is being shown.
    pub fn is_active(&self) -> bool {
        self.trajectory.is_some()
    }

    /// Current progress in \[0, 1\].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The trajectory being shown.
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }
}

fn pose_at(points: &[DVec3], progress: f64) -> CursorPose {
    if points.len() == 1 {
        return CursorPose {
            position: points[0],
            tangent: DVec3::ZERO,
        };
    }

    let last_segment = points.len() - 2;
    let scaled = progress.clamp(0.0, 1.0) * (points.len() - 1) as f64;
    let index = (scaled.floor() as usize).min(last_segment);
    let frac = scaled - index as f64;

    let a = points[index];
    let b = points[index + 1];
    CursorPose {
        position: a.lerp(b, frac),
        tangent: (b - a).normalize_or_zero(),
    }
}
