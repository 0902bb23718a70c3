//! Trajectory construction for each mission profile.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};
use lunara_geo::{normalize_longitude, project, unproject};
use lunara_terrain::ElevationField;
use tracing::debug;

use crate::curve::{push_bezier, wrap_degrees};
use crate::profile::{Mission, MissionProfile, status_color};

/// Shape parameters for synthesized trajectories. Distances are scene units.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryConfig {
    /// Nominal Moon radius, used when no elevation field is available. Default: 100.
    pub moon_radius: f64,
    /// Fixed departure point representing Earth.
    pub earth_position: DVec3,
    /// Orbit height above the nominal radius. Default: 25.
    pub orbit_altitude: f64,
    /// Semi-minor to semi-major axis ratio of a steady orbit. Default: 0.9.
    pub orbit_flattening: f64,
    /// Amplitude of the out-of-plane wobble of a steady orbit. Default: 3.
    pub orbit_wobble: f64,
    /// Minimum height of any descent point above the terrain. Default: 2.
    pub clearance: f64,
    /// Lift of Bézier control points, as a fraction of the chord length. Default: 0.3.
    pub arc_lift: f64,
    /// Outward bulge at the descent midpoint, as a fraction of the chord length. Default: 0.3.
    pub descent_bulge: f64,
    /// Segments in an Earth departure arc. Default: 60.
    pub approach_segments: usize,
    /// Segments in the partial orbit before descent. Default: 90.
    pub orbit_segments: usize,
    /// Segments in the final descent. Default: 60.
    pub descent_segments: usize,
    /// Segments in a closed steady orbit. Default: 128.
    pub loop_segments: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            moon_radius: 100.0,
            earth_position: DVec3::new(450.0, 120.0, 380.0),
            orbit_altitude: 25.0,
            orbit_flattening: 0.9,
            orbit_wobble: 3.0,
            clearance: 2.0,
            arc_lift: 0.3,
            descent_bulge: 0.3,
            approach_segments: 60,
            orbit_segments: 90,
            descent_segments: 60,
            loop_segments: 128,
        }
    }
}

/// A built path. Owned by the caller and discarded when no longer shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Ordered path points.
    pub points: Vec<DVec3>,
    /// Line color derived from the mission status.
    pub color: [f32; 3],
    /// Profile the path was built with.
    pub profile: MissionProfile,
}

impl Trajectory {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total polyline length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Whether the first and last points coincide within `epsilon`.
    pub fn is_closed(&self, epsilon: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.distance(*b) <= epsilon,
            _ => false,
        }
    }
}

/// Builds trajectories. Stateless apart from its configuration.
#[derive(Clone, Debug, Default)]
pub struct TrajectorySynthesizer {
    config: TrajectoryConfig,
}

impl TrajectorySynthesizer {
    /// Create a synthesizer.
    pub fn new(config: TrajectoryConfig) -> Self {
        Self { config }
    }

    /// Build the path for a mission.
    ///
    /// Without an elevation field the surface is taken as the nominal sphere,
    /// so this never fails; paths just lose terrain detail.
    pub fn build(&self, mission: &Mission, field: Option<&ElevationField>) -> Trajectory {
        let profile = mission.profile();
        let points = match profile {
            MissionProfile::SteadyOrbit => self.steady_orbit(mission),
            MissionProfile::OrbiterDescent => self.orbiter_descent(mission, field),
            MissionProfile::DirectArc => self.direct_arc(mission, field),
        };

        debug!(
            mission = %mission.name,
            ?profile,
            points = points.len(),
            terrain = field.is_some(),
            "built trajectory"
        );

        Trajectory {
            points,
            color: status_color(&mission.status),
            profile,
        }
    }

    /// Distance from the Moon's center below which no descent point may lie.
    pub fn minimum_radius(&self, field: Option<&ElevationField>, lat: f64, lon: f64) -> f64 {
        self.surface_radius(field, lat, lon) + self.config.clearance
    }

    /// Return a reference to the synthesizer configuration.
    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    fn steady_orbit(&self, mission: &Mission) -> Vec<DVec3> {
        let semi_major = self.config.moon_radius + self.config.orbit_altitude;
        let semi_minor = semi_major * self.config.orbit_flattening;
        // Tilt by the site latitude, then swing the periapsis over its meridian.
        let rotation = DQuat::from_rotation_y(mission.lon.to_radians())
            * DQuat::from_rotation_x(mission.lat.to_radians());

        let segments = self.config.loop_segments.max(3);
        (0..=segments)
            .map(|i| {
                let t = TAU * i as f64 / segments as f64;
                let local = DVec3::new(
                    semi_major * t.cos(),
                    self.config.orbit_wobble * (3.0 * t).sin(),
                    semi_minor * t.sin(),
                );
                rotation * local
            })
            .collect()
    }

    fn orbiter_descent(&self, mission: &Mission, field: Option<&ElevationField>) -> Vec<DVec3> {
        let orbit_radius = self.config.moon_radius + self.config.orbit_altitude;
        let earth = self.config.earth_position;
        let capacity = self.config.approach_segments
            + self.config.orbit_segments
            + self.config.descent_segments
            + 1;
        let mut points = Vec::with_capacity(capacity);

        // Approach: Earth to an insertion point on the far side of the site.
        let insertion_lon = normalize_longitude(mission.lon + 180.0);
        let insertion = project(0.0, insertion_lon, orbit_radius);
        push_bezier(
            &mut points,
            earth,
            self.arc_control(earth, insertion),
            insertion,
            self.config.approach_segments,
        );

        // Orbit: sweep to 90 degrees short of the site while the plane
        // inclines toward the site latitude.
        let span = wrap_degrees(mission.lon - 90.0 - insertion_lon);
        let orbit_segments = self.config.orbit_segments.max(1);
        for k in 1..=orbit_segments {
            let s = k as f64 / orbit_segments as f64;
            points.push(project(
                mission.lat * s,
                insertion_lon + span * s,
                orbit_radius,
            ));
        }

        // Descent: a bulged chord from the last orbit point to the site.
        let from = project(mission.lat, insertion_lon + span, orbit_radius);
        let target = self.landing_target(mission, field);
        let bulge = from.distance(target) * self.config.descent_bulge;
        let descent_segments = self.config.descent_segments.max(1);
        for k in 1..=descent_segments {
            let s = k as f64 / descent_segments as f64;
            let base = from.lerp(target, s);
            let lift = 4.0 * s * (1.0 - s) * bulge;
            points.push(base + base.normalize_or_zero() * lift);
        }

        self.enforce_clearance(&mut points, field);
        points
    }

    fn direct_arc(&self, mission: &Mission, field: Option<&ElevationField>) -> Vec<DVec3> {
        let earth = self.config.earth_position;
        let target = self.landing_target(mission, field);
        let mut points = Vec::with_capacity(self.config.approach_segments + 1);
        push_bezier(
            &mut points,
            earth,
            self.arc_control(earth, target),
            target,
            self.config.approach_segments,
        );

        self.enforce_clearance(&mut points, field);
        points
    }

    /// Chord midpoint lifted along +Y.
    fn arc_control(&self, from: DVec3, to: DVec3) -> DVec3 {
        (from + to) * 0.5 + DVec3::Y * (from.distance(to) * self.config.arc_lift)
    }

    fn landing_target(&self, mission: &Mission, field: Option<&ElevationField>) -> DVec3 {
        project(
            mission.lat,
            mission.lon,
            self.minimum_radius(field, mission.lat, mission.lon),
        )
    }

    fn surface_radius(&self, field: Option<&ElevationField>, lat: f64, lon: f64) -> f64 {
        match field {
            Some(field) => field.surface_radius(lat, lon),
            None => self.config.moon_radius,
        }
    }

    /// Push any point below the clearance shell radially out onto it.
    fn enforce_clearance(&self, points: &mut [DVec3], field: Option<&ElevationField>) {
        for p in points.iter_mut() {
            let geo = unproject(*p);
            let min_radius = self.minimum_radius(field, geo.lat, geo.lon);
            let r = p.length();
            if r < min_radius {
                *p = if r > 1e-9 {
                    *p * (min_radius / r)
                } else {
                    project(geo.lat, geo.lon, min_radius)
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunara_geo::GeoPoint;
    use lunara_terrain::{BasinFeature, CraterFeature};

    const TOLERANCE: f64 = 1e-6;

    fn field() -> ElevationField {
        let basins = [
            BasinFeature::from_diameter_km(GeoPoint::new(8.5, 31.4), 873.0),
            BasinFeature::from_diameter_km(GeoPoint::new(32.8, -15.6), 1146.0),
        ];
        let craters = [
            CraterFeature::from_diameter_km(GeoPoint::new(9.6, -20.1), 93.0),
            CraterFeature::from_diameter_km(GeoPoint::new(-43.3, -11.2), 85.0),
        ];
        ElevationField::build(&basins, &craters)
    }

    fn missions() -> Vec<Mission> {
        vec![
            Mission::new("Apollo 11", 0.674, 23.473, "landed", "crewed lander"),
            Mission::new("Luna 2", 29.1, 0.0, "impactor", "impactor"),
            Mission::new("Chang'e 4", -45.4, 177.6, "landed", "lander"),
            Mission::new("Lunar Orbiter 5", 2.8, -83.0, "crashed", "orbiter"),
            Mission::new("SMART-1", -34.3, -46.2, "impactor", "orbiter"),
            Mission::new("LCROSS", -84.7, -49.4, "impactor", "impactor"),
            Mission::new("Kaguya", -65.5, 80.4, "crashed", "orbiter"),
            Mission::new("Polar", 89.0, 120.0, "landed", "lander"),
        ]
    }

    fn assert_clearance(
        synth: &TrajectorySynthesizer,
        field: Option<&ElevationField>,
        trajectory: &Trajectory,
        name: &str,
    ) {
        for (i, p) in trajectory.points.iter().enumerate() {
            let g = unproject(*p);
            let min = synth.minimum_radius(field, g.lat, g.lon);
            assert!(
                p.length() >= min - TOLERANCE,
                "{name}: point {i} at radius {} is below {min}",
                p.length()
            );
        }
    }

    #[test]
    fn test_steady_orbit_is_closed_loop() {
        let synth = TrajectorySynthesizer::default();
        let m = Mission::new("LRO", 12.0, -40.0, "orbiting", "orbiter");
        let t = synth.build(&m, None);
        assert_eq!(t.profile, MissionProfile::SteadyOrbit);
        assert_eq!(t.len(), synth.config().loop_segments + 1);
        assert!(t.is_closed(1e-9), "first {:?} last {:?}", t.points[0], t.points[t.len() - 1]);
    }

    #[test]
    fn test_steady_orbit_stays_near_orbit_altitude() {
        let synth = TrajectorySynthesizer::default();
        let config = synth.config();
        let a = config.moon_radius + config.orbit_altitude;
        let b = a * config.orbit_flattening;
        let m = Mission::new("Chandrayaan-2", -70.0, 32.0, "orbiting", "orbiter");
        for p in synth.build(&m, None).points {
            let r = p.length();
            assert!(r >= b - 1e-9 && r <= (a * a + config.orbit_wobble.powi(2)).sqrt() + 1e-9);
        }
    }

    #[test]
    fn test_steady_orbit_has_no_earth_leg() {
        let synth = TrajectorySynthesizer::default();
        let m = Mission::new("LRO", 0.0, 0.0, "orbiting", "orbiter");
        let t = synth.build(&m, Some(&field()));
        let earth = synth.config().earth_position;
        assert!(t.points.iter().all(|p| p.distance(earth) > 100.0));
    }

    #[test]
    fn test_direct_arc_runs_from_earth_to_site() {
        let synth = TrajectorySynthesizer::default();
        let field = field();
        let m = Mission::new("Apollo 11", 0.674, 23.473, "landed", "lander");
        let t = synth.build(&m, Some(&field));
        assert_eq!(t.profile, MissionProfile::DirectArc);
        assert_eq!(t.len(), synth.config().approach_segments + 1);
        assert!((t.points[0] - synth.config().earth_position).length() < TOLERANCE);

        let last = *t.points.last().unwrap();
        let g = unproject(last);
        assert!((g.lat - m.lat).abs() < 1e-6 && (g.lon - m.lon).abs() < 1e-6);
        let expected = field.surface_radius(m.lat, m.lon) + synth.config().clearance;
        assert!((last.length() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_orbiter_descent_segments() {
        let synth = TrajectorySynthesizer::default();
        let c = synth.config();
        let m = Mission::new("Lunar Orbiter 5", 2.8, -83.0, "crashed", "orbiter");
        let t = synth.build(&m, None);
        assert_eq!(t.profile, MissionProfile::OrbiterDescent);
        assert_eq!(
            t.len(),
            c.approach_segments + 1 + c.orbit_segments + c.descent_segments
        );

        // The orbit leg ends 90 degrees before the site at orbit altitude.
        let orbit_end = t.points[c.approach_segments + c.orbit_segments];
        let g = unproject(orbit_end);
        assert!((g.lat - m.lat).abs() < 1e-6);
        assert!(wrap_degrees(g.lon - (m.lon - 90.0)).abs() < 1e-6);
        assert!((orbit_end.length() - (c.moon_radius + c.orbit_altitude)).abs() < TOLERANCE);
    }

    #[test]
    fn test_orbit_leg_takes_shorter_arc() {
        let synth = TrajectorySynthesizer::default();
        let c = synth.config();
        let m = Mission::new("Kaguya", -65.5, 80.4, "crashed", "orbiter");
        let t = synth.build(&m, None);
        let start = c.approach_segments;
        let orbit = &t.points[start..=start + c.orbit_segments];
        let lons: Vec<f64> = orbit.iter().map(|p| unproject(*p).lon).collect();
        let swept: f64 = lons.windows(2).map(|w| wrap_degrees(w[1] - w[0]).abs()).sum();
        assert!(swept <= 180.0 + 1e-6, "swept {swept} degrees");
    }

    #[test]
    fn test_descent_ends_above_site() {
        let synth = TrajectorySynthesizer::default();
        let field = field();
        let m = Mission::new("Kaguya", -65.5, 80.4, "crashed", "orbiter");
        let t = synth.build(&m, Some(&field));
        let last = *t.points.last().unwrap();
        let g = unproject(last);
        assert!((g.lat - m.lat).abs() < 1e-6 && (g.lon - m.lon).abs() < 1e-6);
        let expected = synth.minimum_radius(Some(&field), m.lat, m.lon);
        assert!((last.length() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_descent_profiles_respect_clearance() {
        let synth = TrajectorySynthesizer::default();
        let field = field();
        for m in missions() {
            let t = synth.build(&m, Some(&field));
            assert!(t.profile.has_descent());
            assert_clearance(&synth, Some(&field), &t, &m.name);
        }
    }

    #[test]
    fn test_clearance_without_field() {
        let synth = TrajectorySynthesizer::default();
        for m in missions() {
            let t = synth.build(&m, None);
            assert_clearance(&synth, None, &t, &m.name);
        }
    }

    #[test]
    fn test_large_clearance_lifts_whole_descent() {
        let synth = TrajectorySynthesizer::new(TrajectoryConfig {
            clearance: 15.0,
            ..Default::default()
        });
        let field = field();
        let m = Mission::new("Luna 9", 7.08, -64.37, "landed", "lander");
        let t = synth.build(&m, Some(&field));
        assert_clearance(&synth, Some(&field), &t, &m.name);
    }

    #[test]
    fn test_color_follows_status() {
        let synth = TrajectorySynthesizer::default();
        let crashed = synth.build(&Mission::new("a", 0.0, 0.0, "crashed", "orbiter"), None);
        let landed = synth.build(&Mission::new("b", 0.0, 0.0, "landed", "lander"), None);
        assert_eq!(crashed.color, status_color("crashed"));
        assert_eq!(landed.color, status_color("landed"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let synth = TrajectorySynthesizer::default();
        let field = field();
        let m = Mission::new("SMART-1", -34.3, -46.2, "impactor", "orbiter");
        assert_eq!(synth.build(&m, Some(&field)), synth.build(&m, Some(&field)));
    }

    #[test]
    fn test_zero_segments_still_produce_paths() {
        let synth = TrajectorySynthesizer::new(TrajectoryConfig {
            approach_segments: 0,
            orbit_segments: 0,
            descent_segments: 0,
            loop_segments: 0,
            ..Default::default()
        });
        for m in missions() {
            assert!(synth.build(&m, None).len() >= 2);
        }
        let orbit = synth.build(&Mission::new("o", 0.0, 0.0, "orbiting", "orbiter"), None);
        assert!(orbit.is_closed(1e-9));
    }

    #[test]
    fn test_trajectory_length_is_positive() {
        let synth = TrajectorySynthesizer::default();
        let t = synth.build(&missions()[0], None);
        assert!(t.length() > 0.0);
        assert!(!t.is_empty());
    }
}
