//! Catalog records and their conversions into terrain features and missions.

use std::path::Path;

use lunara_geo::GeoPoint;
use lunara_terrain::{BasinFeature, CraterFeature};
use lunara_trajectory::Mission;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CatalogError;

/// A spacecraft that reached the Moon, or is still orbiting it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Mission or spacecraft name.
    pub name: String,
    /// Landing, impact, or reference latitude in degrees.
    pub lat: f64,
    /// Landing, impact, or reference longitude in degrees.
    pub lon: f64,
    /// "landed", "crashed", "impactor" or "orbiting".
    pub status: String,
    /// Spacecraft type, e.g. "lander", "rover", "orbiter", "impactor".
    pub kind: String,
    /// Operating agency.
    pub operator: String,
    /// Year of arrival.
    pub year: u16,
}

impl Artifact {
    /// Where the artifact sits.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// The mission description a trajectory is built from.
    pub fn to_mission(&self) -> Mission {
        Mission::new(
            self.name.clone(),
            self.lat,
            self.lon,
            self.status.clone(),
            self.kind.clone(),
        )
    }
}

/// A named impact crater.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crater {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Rim-to-rim diameter in km.
    pub diameter_km: f64,
}

impl Crater {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// The terrain feature this crater carves.
    pub fn to_feature(&self) -> CraterFeature {
        CraterFeature::from_diameter_km(self.location(), self.diameter_km)
    }
}

/// A named mare basin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mare {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Approximate basin diameter in km.
    pub diameter_km: f64,
}

impl Mare {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// The terrain feature this basin lowers.
    pub fn to_feature(&self) -> BasinFeature {
        BasinFeature::from_diameter_km(self.location(), self.diameter_km)
    }
}

/// A region of interest for a surface resource, drawn as a ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceDeposit {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Ring radius in degrees of arc.
    pub radius_deg: f64,
    /// What is found there, e.g. "water ice", "helium-3".
    pub resource: String,
}

impl ResourceDeposit {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Everything the atlas shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub artifacts: Vec<Artifact>,
    pub craters: Vec<Crater>,
    pub maria: Vec<Mare>,
    pub resources: Vec<ResourceDeposit>,
}

impl Catalog {
    /// The reference catalog shipped with the atlas.
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    /// Parse a catalog from RON text. Missing sections are empty.
    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        Ok(ron::from_str(text)?)
    }

    /// Serialize to pretty RON.
    pub fn to_ron_string(&self) -> Result<String, CatalogError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_ron_str(&text)?;
        info!(
            artifacts = catalog.artifacts.len(),
            craters = catalog.craters.len(),
            maria = catalog.maria.len(),
            resources = catalog.resources.len(),
            "Loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Write the catalog to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let write_error = |source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, self.to_ron_string()?).map_err(write_error)
    }

    /// Basin features for every mare, in catalog order.
    pub fn basin_features(&self) -> Vec<BasinFeature> {
        self.maria.iter().map(Mare::to_feature).collect()
    }

    /// Crater features for every crater, in catalog order.
    pub fn crater_features(&self) -> Vec<CraterFeature> {
        self.craters.iter().map(Crater::to_feature).collect()
    }

    /// Look up an artifact by name, ignoring ASCII case and surrounding whitespace.
    pub fn find_artifact(&self, name: &str) -> Option<&Artifact> {
        let name = name.trim();
        self.artifacts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunara_trajectory::MissionProfile;

    fn sample() -> Catalog {
        Catalog {
            artifacts: vec![Artifact {
                name: "Apollo 11".to_string(),
                lat: 0.674,
                lon: 23.473,
                status: "landed".to_string(),
                kind: "crewed lander".to_string(),
                operator: "NASA".to_string(),
                year: 1969,
            }],
            craters: vec![Crater {
                name: "Copernicus".to_string(),
                lat: 9.62,
                lon: -20.08,
                diameter_km: 93.0,
            }],
            maria: vec![Mare {
                name: "Mare Crisium".to_string(),
                lat: 17.0,
                lon: 59.1,
                diameter_km: 556.0,
            }],
            resources: Vec::new(),
        }
    }

    #[test]
    fn test_find_artifact_ignores_case() {
        let catalog = sample();
        assert!(catalog.find_artifact("apollo 11").is_some());
        assert!(catalog.find_artifact("  APOLLO 11 ").is_some());
        assert!(catalog.find_artifact("Apollo 12").is_none());
    }

    #[test]
    fn test_artifact_to_mission() {
        let mission = sample().artifacts[0].to_mission();
        assert_eq!(mission.name, "Apollo 11");
        assert_eq!(mission.lat, 0.674);
        assert_eq!(mission.profile(), MissionProfile::DirectArc);
    }

    #[test]
    fn test_feature_conversion() {
        let catalog = sample();
        let craters = catalog.crater_features();
        let basins = catalog.basin_features();
        assert_eq!(craters.len(), 1);
        assert_eq!(basins.len(), 1);
        assert_eq!(craters[0].center, GeoPoint::new(9.62, -20.08));
        assert!((basins[0].angular_radius - 278.0 / lunara_geo::KM_PER_DEGREE).abs() < 1e-9);
        // 0.04 * 93 km
        assert!((craters[0].depth_km - 3.72).abs() < 1e-9);
    }

    #[test]
    fn test_ron_roundtrip() {
        let catalog = sample();
        let text = catalog.to_ron_string().unwrap();
        assert_eq!(Catalog::from_ron_str(&text).unwrap(), catalog);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let catalog = Catalog::from_ron_str(
            "(craters: [(name: \"Tycho\", lat: -43.31, lon: -11.36, diameter_km: 85.0)])",
        )
        .unwrap();
        assert_eq!(catalog.craters.len(), 1);
        assert!(catalog.artifacts.is_empty());
        assert!(catalog.maria.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Catalog::from_ron_str("(craters: [oops])").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.ron");
        let catalog = sample();
        catalog.save(&path).unwrap();
        assert_eq!(Catalog::load(&path).unwrap(), catalog);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("absent.ron"));
    }
}
