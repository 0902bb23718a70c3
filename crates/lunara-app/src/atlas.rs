//! The assembled globe: catalog, elevation field, placed labels, and the
//! trajectory session for the selected artifact.

use std::collections::BTreeMap;

use glam::DVec3;
use lunara_catalog::placement::{LabelAnchor, label_anchors, visible_anchors};
use lunara_catalog::{Artifact, Catalog};
use lunara_config::Config;
use lunara_geo::project;
use lunara_labels::{LabelPass, LabelPlacement};
use lunara_terrain::{ElevationField, SurfaceBand, surface_band};
use lunara_trajectory::{CursorPose, Trajectory, TrajectorySession, TrajectorySynthesizer};
use tracing::{debug, info};

use crate::error::AppError;
use crate::frame_clock::{FIXED_DT, FrameClock};

/// Default viewing distance, in Moon radii from the center.
const CAMERA_DISTANCE: f64 = 4.0;

/// Everything built once at startup.
pub struct Atlas {
    catalog: Catalog,
    field: ElevationField,
    anchors: Vec<LabelAnchor>,
    labels: Vec<LabelPlacement>,
    synthesizer: TrajectorySynthesizer,
    session: TrajectorySession,
}

/// Figures reported after startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasSummary {
    pub grid: (usize, usize),
    /// Lowest and highest grid elevation in scene units.
    pub elevation_range: (f64, f64),
    /// Grid vertices per color band.
    pub bands: BTreeMap<SurfaceBand, usize>,
    pub labels: usize,
    pub fallback_labels: usize,
    /// Labels on the hemisphere facing the default camera.
    pub visible_labels: usize,
}

impl Atlas {
    /// Build the field from the catalog's features and place a label for
    /// every anchor, in anchor order.
    pub fn build(config: &Config, catalog: Catalog) -> Self {
        let field = ElevationField::build_with(
            config.field_config(),
            &catalog.basin_features(),
            &catalog.crater_features(),
        );

        let anchors = label_anchors(&field, &catalog);
        let mut pass = LabelPass::new(config.placer_config());
        for anchor in &anchors {
            pass.place(anchor.position);
        }
        debug!(
            labels = pass.placements().len(),
            fallbacks = pass.fallback_count(),
            "placed labels"
        );

        Self {
            catalog,
            field,
            anchors,
            labels: pass.into_placements(),
            synthesizer: TrajectorySynthesizer::new(config.trajectory_config()),
            session: TrajectorySession::new(config.trajectory.cycle_ms),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn field(&self) -> &ElevationField {
        &self.field
    }

    /// Anchors paired with their placed labels.
    pub fn labels(&self) -> impl Iterator<Item = (&LabelAnchor, &LabelPlacement)> {
        self.anchors.iter().zip(&self.labels)
    }

    pub fn session(&self) -> &TrajectorySession {
        &self.session
    }

    /// Build the path for one artifact.
    pub fn trajectory(&self, artifact: &Artifact) -> Trajectory {
        self.synthesizer
            .build(&artifact.to_mission(), Some(&self.field))
    }

    /// Show the named artifact's path, replacing any path on screen.
    pub fn select(&mut self, name: &str) -> Result<(), AppError> {
        let artifact = self
            .catalog
            .find_artifact(name)
            .ok_or_else(|| AppError::UnknownArtifact(name.to_string()))?;
        let trajectory = self.trajectory(artifact);
        info!(
            artifact = %artifact.name,
            profile = ?trajectory.profile,
            points = trajectory.len(),
            length = trajectory.length(),
            "Selected artifact"
        );
        self.session.start(trajectory);
        Ok(())
    }

    /// Hide the current path.
    pub fn deselect(&mut self) {
        if let Some(trajectory) = self.session.clear() {
            debug!(points = trajectory.len(), "Released trajectory");
        }
    }

    /// Run `frames` frames of `frame_time` seconds each through a fixed-step
    /// clock, advancing the cursor once per step. Returns the last pose.
    pub fn animate(&mut self, frames: u32, frame_time: f64) -> Option<CursorPose> {
        let mut clock = FrameClock::new();
        let mut pose = self.session.pose();
        for _ in 0..frames {
            let session = &mut self.session;
            clock.advance(frame_time, |dt| {
                pose = session.advance(dt * 1000.0);
            });
        }
        debug!(
            frames = clock.frame_count(),
            steps = clock.step_count(),
            progress = self.session.progress(),
            "animation finished"
        );
        pose
    }

    /// Run `frames` frames at the fixed rate.
    pub fn animate_fixed(&mut self, frames: u32) -> Option<CursorPose> {
        self.animate(frames, FIXED_DT)
    }

    pub fn summary(&self) -> AtlasSummary {
        let (rows, cols) = self.field.resolution();
        let scale = self.field.model().elevation_scale();
        let mut bands = BTreeMap::new();
        for row in 0..rows {
            for col in 0..cols {
                *bands
                    .entry(surface_band(self.field.value(row, col), scale))
                    .or_insert(0) += 1;
            }
        }

        let camera = default_camera(self.field.moon_radius());
        AtlasSummary {
            grid: (rows, cols),
            elevation_range: self.field.min_max(),
            bands,
            labels: self.labels.len(),
            fallback_labels: self.labels.iter().filter(|l| l.is_fallback()).count(),
            visible_labels: visible_anchors(&self.anchors, camera).count(),
        }
    }
}

/// Camera over the near side at 0°N 0°E.
pub fn default_camera(moon_radius: f64) -> DVec3 {
    project(0.0, 0.0, moon_radius * CAMERA_DISTANCE)
}
