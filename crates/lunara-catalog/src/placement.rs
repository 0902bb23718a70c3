//! Positions of catalog entries on the elevation field.

use glam::DVec3;
use lunara_geo::{destination_point, is_facing};
use lunara_terrain::ElevationField;

use crate::record::{Artifact, Catalog, ResourceDeposit};

/// Height of markers and label anchors above the local surface, in scene units.
pub const MARKER_LIFT: f64 = 1.5;

/// Fewest segments a resource ring is drawn with.
const MIN_RING_SEGMENTS: usize = 3;

/// What a label anchor annotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Artifact,
    Mare,
    Crater,
    Resource,
}

/// A named point a label is attached to.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnchor {
    pub name: String,
    pub kind: AnchorKind,
    pub position: DVec3,
}

/// Marker position for an artifact, `lift` above the sampled surface.
pub fn artifact_marker(field: &ElevationField, artifact: &Artifact, lift: f64) -> DVec3 {
    field.surface_point(artifact.lat, artifact.lon, lift)
}

/// A closed ring around a deposit at its angular radius.
///
/// Returns `segments + 1` points (at least four) following the local surface
/// at `lift`; the last point repeats the first.
pub fn resource_ring(
    field: &ElevationField,
    deposit: &ResourceDeposit,
    segments: usize,
    lift: f64,
) -> Vec<DVec3> {
    let segments = segments.max(MIN_RING_SEGMENTS);
    let center = deposit.location();

    let mut ring: Vec<DVec3> = (0..segments)
        .map(|i| {
            let bearing = i as f64 * 360.0 / segments as f64;
            let p = destination_point(center, bearing, deposit.radius_deg);
            field.surface_point(p.lat, p.lon, lift)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Anchors for every labelled entry: artifacts first, then maria, craters
/// and resources, each in catalog order.
///
/// Label placement is first-fit, so this order decides who gets the
/// preferred positions.
pub fn label_anchors(field: &ElevationField, catalog: &Catalog) -> Vec<LabelAnchor> {
    let anchor = |name: &str, kind, lat, lon| LabelAnchor {
        name: name.to_string(),
        kind,
        position: field.surface_point(lat, lon, MARKER_LIFT),
    };

    let artifacts = catalog
        .artifacts
        .iter()
        .map(|a| anchor(&a.name, AnchorKind::Artifact, a.lat, a.lon));
    let maria = catalog
        .maria
        .iter()
        .map(|m| anchor(&m.name, AnchorKind::Mare, m.lat, m.lon));
    let craters = catalog
        .craters
        .iter()
        .map(|c| anchor(&c.name, AnchorKind::Crater, c.lat, c.lon));
    let resources = catalog
        .resources
        .iter()
        .map(|r| anchor(&r.name, AnchorKind::Resource, r.lat, r.lon));

    artifacts.chain(maria).chain(craters).chain(resources).collect()
}

/// Anchors on the hemisphere facing `camera`.
pub fn visible_anchors(
    anchors: &[LabelAnchor],
    camera: DVec3,
) -> impl Iterator<Item = &LabelAnchor> {
    anchors.iter().filter(move |a| is_facing(a.position, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunara_geo::{project, unproject};
    use lunara_terrain::FieldConfig;

    fn small_field() -> ElevationField {
        let config = FieldConfig {
            lat_bands: 37,
            lon_bands: 73,
            ..FieldConfig::default()
        };
        ElevationField::build_with(config, &[], &[])
    }

    fn deposit(lat: f64, lon: f64, radius_deg: f64) -> ResourceDeposit {
        ResourceDeposit {
            name: "test".to_string(),
            lat,
            lon,
            radius_deg,
            resource: "water ice".to_string(),
        }
    }

    #[test]
    fn test_marker_sits_above_surface() {
        let field = small_field();
        let catalog = Catalog::builtin();
        let artifact = catalog.find_artifact("Apollo 11").unwrap();
        let marker = artifact_marker(&field, artifact, MARKER_LIFT);
        let expected = field.surface_radius(artifact.lat, artifact.lon) + MARKER_LIFT;
        assert!((marker.length() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ring_is_closed_at_requested_radius() {
        let field = small_field();
        let d = deposit(-30.0, 170.0, 6.0);
        let ring = resource_ring(&field, &d, 24, 0.0);
        assert_eq!(ring.len(), 25);
        assert_eq!(ring.first(), ring.last());
        for p in &ring {
            let g = unproject(*p);
            let arc = d.location().distance_deg(&g);
            assert!((arc - 6.0).abs() < 1e-6, "ring point {arc} deg from center");
        }
    }

    #[test]
    fn test_ring_around_pole_stays_valid() {
        let field = small_field();
        let ring = resource_ring(&field, &deposit(-88.5, 0.0, 5.0), 32, 0.5);
        assert!(ring.iter().all(|p| p.is_finite()));
        // Ring crosses the pole's far side, so some points wrap to the other hemisphere.
        assert!(ring.iter().any(|p| unproject(*p).lon.abs() > 90.0));
    }

    #[test]
    fn test_ring_segment_floor() {
        let field = small_field();
        assert_eq!(resource_ring(&field, &deposit(0.0, 0.0, 2.0), 0, 0.0).len(), 4);
    }

    #[test]
    fn test_anchor_order_and_count() {
        let field = small_field();
        let catalog = Catalog::builtin();
        let anchors = label_anchors(&field, &catalog);
        let total = catalog.artifacts.len()
            + catalog.maria.len()
            + catalog.craters.len()
            + catalog.resources.len();
        assert_eq!(anchors.len(), total);
        assert_eq!(anchors[0].kind, AnchorKind::Artifact);
        assert_eq!(anchors[0].name, catalog.artifacts[0].name);
        assert_eq!(anchors[catalog.artifacts.len()].kind, AnchorKind::Mare);
        assert_eq!(anchors.last().map(|a| a.kind), Some(AnchorKind::Resource));
    }

    #[test]
    fn test_visible_anchors_face_camera() {
        let field = small_field();
        let catalog = Catalog::builtin();
        let anchors = label_anchors(&field, &catalog);
        // Camera over the near side at 0°N 0°E.
        let camera = project(0.0, 0.0, 400.0);
        let visible: Vec<_> = visible_anchors(&anchors, camera).collect();
        assert!(visible.iter().any(|a| a.name == "Apollo 11"));
        assert!(!visible.iter().any(|a| a.name == "Chang'e 4"));
        assert!(!visible.iter().any(|a| a.name == "Mare Moscoviense"));
    }
}
