//! The reference data set shipped with the atlas.
//!
//! Coordinates are selenographic degrees, diameters in km. Orbiting
//! spacecraft carry the ground-track point their orbit is drawn around.

use crate::record::{Artifact, Catalog, Crater, Mare, ResourceDeposit};

#[rustfmt::skip]
const ARTIFACTS: &[(&str, f64, f64, &str, &str, &str, u16)] = &[
    ("Luna 2",          29.10,    0.00, "impactor", "impactor",      "USSR",    1959),
    ("Ranger 7",       -10.35,  -20.58, "impactor", "impactor",      "NASA",    1964),
    ("Luna 9",           7.08,  -64.37, "landed",   "lander",        "USSR",    1966),
    ("Surveyor 1",      -2.474, -43.339, "landed",  "lander",        "NASA",    1966),
    ("Surveyor 3",      -3.016, -23.418, "landed",  "lander",        "NASA",    1967),
    ("Apollo 11",        0.674,  23.473, "landed",  "crewed lander", "NASA",    1969),
    ("Apollo 12",       -3.012, -23.422, "landed",  "crewed lander", "NASA",    1969),
    ("Lunokhod 1",      38.28,  -35.00, "landed",   "rover",         "USSR",    1970),
    ("Apollo 14",       -3.645, -17.471, "landed",  "crewed lander", "NASA",    1971),
    ("Apollo 15",       26.132,   3.634, "landed",  "crewed lander", "NASA",    1971),
    ("Apollo 16",       -8.973,  15.500, "landed",  "crewed lander", "NASA",    1972),
    ("Apollo 17",       20.191,  30.772, "landed",  "crewed lander", "NASA",    1972),
    ("SMART-1",        -34.262, -46.193, "crashed", "orbiter",       "ESA",     2006),
    ("Kaguya",         -65.50,   80.40, "crashed",  "orbiter",       "JAXA",    2009),
    ("LCROSS",         -84.68,  -49.61, "impactor", "impactor",      "NASA",    2009),
    ("LRO",              0.00,    0.00, "orbiting", "orbiter",       "NASA",    2009),
    ("GRAIL Ebb",       75.61,  -26.63, "crashed",  "orbiter",       "NASA",    2012),
    ("Chang'e 3",       44.12,  -19.51, "landed",   "lander",        "CNSA",    2013),
    ("Chang'e 4",      -45.444, 177.599, "landed",  "lander",        "CNSA",    2019),
    ("Beresheet",       32.59,   19.35, "crashed",  "lander",        "SpaceIL", 2019),
    ("Vikram",         -70.88,   22.78, "crashed",  "lander",        "ISRO",    2019),
    ("Chandrayaan-2",  -70.88,   22.78, "orbiting", "orbiter",       "ISRO",    2019),
    ("Chang'e 5",       43.06,  -51.92, "landed",   "lander",        "CNSA",    2020),
    ("Chandrayaan-3",  -69.373,  32.319, "landed",  "lander",        "ISRO",    2023),
];

#[rustfmt::skip]
const CRATERS: &[(&str, f64, f64, f64)] = &[
    ("Copernicus",     9.62,  -20.08,  93.0),
    ("Tycho",        -43.31,  -11.36,  85.0),
    ("Kepler",         8.10,  -38.00,  32.0),
    ("Aristarchus",   23.70,  -47.40,  40.0),
    ("Plato",         51.62,   -9.38, 101.0),
    ("Clavius",      -58.40,  -14.40, 231.0),
    ("Langrenus",     -8.86,   60.90, 132.0),
    ("Shackleton",   -89.67,  129.20,  21.0),
    ("Tsiolkovskiy", -20.40,  129.10, 185.0),
    ("Daedalus",      -5.90,  179.40,  93.0),
];

#[rustfmt::skip]
const MARIA: &[(&str, f64, f64, f64)] = &[
    ("Mare Imbrium",         32.80, -15.60, 1146.0),
    ("Mare Serenitatis",     28.00,  17.50,  674.0),
    ("Mare Tranquillitatis",  8.50,  31.40,  873.0),
    ("Mare Crisium",         17.00,  59.10,  556.0),
    ("Mare Nubium",         -21.30, -16.60,  715.0),
    ("Mare Fecunditatis",    -7.80,  51.30,  909.0),
    ("Mare Nectaris",       -15.20,  35.50,  333.0),
    ("Mare Orientale",      -19.40, -92.80,  294.0),
    ("Mare Moscoviense",     27.30, 147.90,  277.0),
];

#[rustfmt::skip]
const RESOURCES: &[(&str, f64, f64, f64, &str)] = &[
    ("South polar ice",          -88.50,    0.00,  5.0, "water ice"),
    ("Cabeus cold trap",         -84.90,  -35.50,  2.5, "water ice"),
    ("North polar ice",           88.50,    0.00,  4.0, "water ice"),
    ("Procellarum KREEP terrane", 20.00,  -40.00, 20.0, "KREEP"),
    ("Tranquillitatis regolith",   8.50,   31.40,  8.0, "helium-3"),
    ("Aristarchus pyroclastics",  24.50,  -49.00,  3.0, "ilmenite"),
];

pub(crate) fn catalog() -> Catalog {
    Catalog {
        artifacts: ARTIFACTS
            .iter()
            .map(|&(name, lat, lon, status, kind, operator, year)| Artifact {
                name: name.to_string(),
                lat,
                lon,
                status: status.to_string(),
                kind: kind.to_string(),
                operator: operator.to_string(),
                year,
            })
            .collect(),
        craters: CRATERS
            .iter()
            .map(|&(name, lat, lon, diameter_km)| Crater {
                name: name.to_string(),
                lat,
                lon,
                diameter_km,
            })
            .collect(),
        maria: MARIA
            .iter()
            .map(|&(name, lat, lon, diameter_km)| Mare {
                name: name.to_string(),
                lat,
                lon,
                diameter_km,
            })
            .collect(),
        resources: RESOURCES
            .iter()
            .map(|&(name, lat, lon, radius_deg, resource)| ResourceDeposit {
                name: name.to_string(),
                lat,
                lon,
                radius_deg,
                resource: resource.to_string(),
            })
            .collect(),
    }
}
