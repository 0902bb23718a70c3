//! Greedy label placement for globe annotations.
//!
//! Each label is offered a fixed, priority-ordered list of offsets from its
//! anchor and takes the first one that keeps a minimum distance to every label
//! already placed in the same pass. When every candidate collides the label
//! falls back to a random jitter above the anchor, which may still overlap.
//! This is first-fit, not an optimal packing: the result depends on the order
//! in which anchors are offered.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Candidate offsets from the anchor, in priority order: above, upper-right,
/// upper-left, further above, far-right, far-left, higher above, high-right.
pub const CANDIDATE_OFFSETS: [DVec3; 8] = [
    DVec3::new(0.0, 8.0, 0.0),
    DVec3::new(8.0, 6.0, 0.0),
    DVec3::new(-8.0, 6.0, 0.0),
    DVec3::new(0.0, 16.0, 0.0),
    DVec3::new(16.0, 4.0, 0.0),
    DVec3::new(-16.0, 4.0, 0.0),
    DVec3::new(0.0, 24.0, 0.0),
    DVec3::new(12.0, 18.0, 0.0),
];

/// Tuning for label placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacerConfig {
    /// Minimum distance between any two chosen label positions. Default: 30.
    pub min_distance: f64,
    /// Half-width of the horizontal jitter used by the fallback. Zero or a
    /// non-finite value disables the jitter. Default: 20.
    pub jitter: f64,
    /// Vertical lift applied by the fallback. Default: 12.
    pub fallback_lift: f64,
    /// Seed for the fallback jitter. Default: 0.
    pub seed: u64,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            min_distance: 30.0,
            jitter: 20.0,
            fallback_lift: 12.0,
            seed: 0,
        }
    }
}

/// Where a label ended up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// The annotated point.
    pub anchor: DVec3,
    /// The chosen label position.
    pub chosen: DVec3,
    /// Index into [`CANDIDATE_OFFSETS`], or `None` if the jitter fallback was used.
    pub candidate: Option<usize>,
}

impl LabelPlacement {
    /// Whether the collision-free search was exhausted.
    pub fn is_fallback(&self) -> bool {
        self.candidate.is_none()
    }
}

/// Chooses label positions against a set of existing ones.
pub struct LabelPlacer {
    config: PlacerConfig,
    rng: ChaCha8Rng,
}

impl LabelPlacer {
    /// Create a placer. The fallback RNG is seeded from `config.seed`.
    pub fn new(config: PlacerConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Choose a position for a label at `anchor` given the positions already
    /// taken. Does not record the result; see [`LabelPass`].
    pub fn place(&mut self, anchor: DVec3, existing: &[DVec3]) -> LabelPlacement {
        let min_sq = self.config.min_distance * self.config.min_distance;

        for (index, offset) in CANDIDATE_OFFSETS.iter().enumerate() {
            let candidate = anchor + *offset;
            if existing.iter().all(|p| p.distance_squared(candidate) >= min_sq) {
                return LabelPlacement {
                    anchor,
                    chosen: candidate,
                    candidate: Some(index),
                };
            }
        }

        let jitter = self.config.jitter.abs();
        let (dx, dz) = if jitter.is_finite() && jitter > 0.0 {
            (
                self.rng.random_range(-jitter..=jitter),
                self.rng.random_range(-jitter..=jitter),
            )
        } else {
            (0.0, 0.0)
        };
        let chosen = anchor + DVec3::new(dx, self.config.fallback_lift, dz);
        warn!(
            x = anchor.x,
            y = anchor.y,
            z = anchor.z,
            "all label candidates collide, using jittered fallback"
        );

        LabelPlacement {
            anchor,
            chosen,
            candidate: None,
        }
    }

    /// Return a reference to the placer configuration.
    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }
}

/// One sequential placement pass: each accepted position constrains the next.
pub struct LabelPass {
    placer: LabelPlacer,
    placements: Vec<LabelPlacement>,
    chosen: Vec<DVec3>,
}

impl LabelPass {
    /// Start an empty pass.
    pub fn new(config: PlacerConfig) -> Self {
        Self {
            placer: LabelPlacer::new(config),
            placements: Vec::new(),
            chosen: Vec::new(),
        }
    }

    /// Place a label and record it for subsequent collision checks.
    pub fn place(&mut self, anchor: DVec3) -> LabelPlacement {
        let placement = self.placer.place(anchor, &self.chosen);
        self.chosen.push(placement.chosen);
        self.placements.push(placement);
        placement
    }

    /// Placements made so far, in order.
    pub fn placements(&self) -> &[LabelPlacement] {
        &self.placements
    }

    /// Number of labels that needed the fallback.
    pub fn fallback_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_fallback()).count()
    }

    /// Finish the pass and take ownership of the placements.
    pub fn into_placements(self) -> Vec<LabelPlacement> {
        self.placements
    }
}
