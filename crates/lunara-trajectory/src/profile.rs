//! Missions and the flight profile derived from their status and type.

/// The minimal description of a mission needed to draw its path.
#[derive(Clone, Debug, PartialEq)]
pub struct Mission {
    /// Display name, used for logging.
    pub name: String,
    /// Landing or target latitude in degrees.
    pub lat: f64,
    /// Landing or target longitude in degrees.
    pub lon: f64,
    /// Recorded status, e.g. "landed", "crashed", "impactor", "orbiting".
    pub status: String,
    /// Spacecraft type, e.g. "lander", "orbiter", "rover".
    pub kind: String,
}

impl Mission {
    /// Create a mission record.
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        status: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            status: status.into(),
            kind: kind.into(),
        }
    }

    /// The profile this mission's path is built with.
    pub fn profile(&self) -> MissionProfile {
        MissionProfile::classify(&self.status, &self.kind)
    }
}

/// How a trajectory is shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissionProfile {
    /// Still in orbit: a closed loop around the Moon, no Earth leg.
    SteadyOrbit,
    /// An orbiter that came down: approach, partial orbit, then descent.
    OrbiterDescent,
    /// Direct landing or impact: one arc from Earth to the surface.
    DirectArc,
}

impl MissionProfile {
    /// Derive the profile from status and type strings.
    ///
    /// Matching is ASCII case-insensitive and ignores surrounding whitespace.
    /// Status "orbiting" wins over the type.
    pub fn classify(status: &str, kind: &str) -> Self {
        if status.trim().eq_ignore_ascii_case("orbiting") {
            MissionProfile::SteadyOrbit
        } else if kind.to_ascii_lowercase().contains("orbit") {
            MissionProfile::OrbiterDescent
        } else {
            MissionProfile::DirectArc
        }
    }

    /// Whether the path ends on the surface and is subject to clearance.
    pub fn has_descent(self) -> bool {
        !matches!(self, MissionProfile::SteadyOrbit)
    }
}

/// Path color for a mission status.
pub fn status_color(status: &str) -> [f32; 3] {
    match status.trim().to_ascii_lowercase().as_str() {
        "landed" => [0.27, 1.0, 0.53],
        "crashed" => [1.0, 0.27, 0.27],
        "impactor" => [1.0, 0.67, 0.2],
        "orbiting" => [0.27, 0.8, 1.0],
        _ => [0.67, 0.67, 0.67],
    }
}
