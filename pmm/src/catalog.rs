//! Reference plate motion model (PMM) parameter tables.
//!
//! Three published tables are carried: ITRF2014 (Altamimi et al. 2017,
//! Cartesian angular velocities), GSRM v2.1 (Kreemer et al. 2014, Euler
//! poles) and NNR-MORVEL56 (Argus et al. 2011, Euler poles). The boundary
//! parser only needs the abbreviation-to-name map derived from a table;
//! the rotation parameters themselves feed an external Euler-pole
//! collaborator.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::errors::PmmError;

/// Rotation parameters for one plate, in one of the two published shapes.
///
/// A record carries exactly one shape; which one depends on how the source
/// publication states its model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PmmParams {
    /// Cartesian angular velocity components plus fit statistics.
    Cartesian {
        /// X component of angular velocity (mas/yr).
        omega_x: f64,
        /// Y component of angular velocity (mas/yr).
        omega_y: f64,
        /// Z component of angular velocity (mas/yr).
        omega_z: f64,
        /// Scalar rotation rate (deg/Ma).
        omega: f64,
        /// Number of GNSS sites used in the fit.
        num_site: u32,
        /// Weighted RMS residual, east component (mm/yr).
        wrms_e: f64,
        /// Weighted RMS residual, north component (mm/yr).
        wrms_n: f64,
    },
    /// Euler pole position and rotation rate.
    Pole {
        /// Pole latitude (deg N).
        pole_lat: f64,
        /// Pole longitude (deg E).
        pole_lon: f64,
        /// Scalar rotation rate (deg/Ma).
        omega: f64,
    },
}

/// One row of a plate motion model table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateMotionRecord {
    /// Plate name, the table key (e.g. "Arabia").
    pub name: &'static str,
    /// Short plate code, unique within a table (e.g. "AR").
    pub abbrev: &'static str,
    /// Rotation parameters in the shape the source publication uses.
    pub params: PmmParams,
}

const fn cart(
    name: &'static str,
    abbrev: &'static str,
    num_site: u32,
    omega_x: f64,
    omega_y: f64,
    omega_z: f64,
    omega: f64,
    wrms_e: f64,
    wrms_n: f64,
) -> PlateMotionRecord {
    PlateMotionRecord {
        name,
        abbrev,
        params: PmmParams::Cartesian { omega_x, omega_y, omega_z, omega, num_site, wrms_e, wrms_n },
    }
}

const fn pole(
    name: &'static str,
    abbrev: &'static str,
    pole_lat: f64,
    pole_lon: f64,
    omega: f64,
) -> PlateMotionRecord {
    PlateMotionRecord { name, abbrev, params: PmmParams::Pole { pole_lat, pole_lon, omega } }
}

/// ITRF2014 plate motion model, Altamimi et al. (2017).
/// Reference frame ITRF2014; Cartesian rates in mas/yr, omega in deg/Ma,
/// WRMS residuals in mm/yr.
pub static ITRF2014_PMM: &[PlateMotionRecord] = &[
    cart("Antartica", "ANTA", 7, -0.248, -0.324, 0.675, 0.219, 0.20, 0.16),
    cart("Arabia", "ARAB", 5, 1.154, -0.136, 1.444, 0.515, 0.36, 0.43),
    cart("Australia", "AUST", 36, 1.510, 1.182, 1.215, 0.631, 0.24, 0.20),
    cart("Eurasia", "EURA", 97, -0.085, -0.531, 0.770, 0.261, 0.23, 0.19),
    cart("India", "INDI", 3, 1.154, -0.005, 1.454, 0.516, 0.21, 0.21),
    cart("Nazca", "NAZC", 2, -0.333, -1.544, 1.623, 0.629, 0.13, 0.19),
    cart("NorthAmerica", "NOAM", 72, 0.024, -0.694, -0.063, 0.194, 0.23, 0.28),
    cart("Nubia", "NUBI", 24, 0.099, -0.614, 0.733, 0.267, 0.28, 0.36),
    cart("Pacific", "PCFC", 18, -0.409, 1.047, -2.169, 0.679, 0.36, 0.31),
    cart("SouthAmerica", "SOAM", 30, -0.270, -0.301, -0.140, 0.119, 0.34, 0.35),
    cart("Somalia", "SOMA", 3, -0.121, -0.794, 0.884, 0.332, 0.32, 0.30),
];

/// GSRM v2.1 plate motion model, Kreemer et al. (2014).
/// Reference frame IGS08; pole lat/lon in degrees, omega in deg/Ma.
pub static GSRM_V21_PMM: &[PlateMotionRecord] = &[
    pole("Africa", "AF", 49.66, -78.08, 0.285),
    pole("Amur", "AM", 61.64, -101.29, 0.287),
    pole("Antarctica", "AN", 60.08, -120.14, 0.234),
    pole("Arabia", "AR", 51.12, -19.87, 0.484),
    pole("AegeanSea", "AS", 47.78, 59.86, 0.253),
    pole("Australia", "AU", 33.31, 36.38, 0.639),
    pole("BajaCalifornia", "BC", -63.04, 104.02, 0.640),
    pole("Bering", "BG", -40.62, -53.84, 0.333),
    pole("Burma", "BU", -4.38, -76.17, 2.343),
    pole("Caribbean", "CA", 37.84, -96.49, 0.290),
    pole("Caroline", "CL", -76.41, 30.22, 0.552),
    pole("Cocos", "CO", 27.21, -124.02, 1.169),
    pole("Capricorn", "CP", 42.13, 24.28, 0.622),
    pole("Danakil", "DA", 21.80, 36.05, 2.497),
    pole("Easter", "EA", 25.14, 67.55, 11.331),
    pole("Eurasia", "EU", 55.38, -95.41, 0.271),
    pole("Galapagos", "GP", 2.83, 81.26, 5.473),
    pole("Gonave", "GV", 23.89, -84.86, 0.476),
    pole("India", "IN", 50.95, -8.00, 0.524),
    pole("JuandeFuca", "JF", -37.71, 59.44, 0.977),
    pole("JuanFernandez", "JZ", 34.33, 70.76, 22.370),
    pole("Lwandle", "LW", 52.20, -60.68, 0.273),
    pole("Mariana", "MA", 11.20, 142.82, 2.165),
    pole("NorthAmerica", "NA", 2.19, -83.75, 0.219),
    pole("NorthBismarck", "NB", -30.20, 135.30, 1.201),
    pole("Niuafo`ou", "NI", -3.51, -174.04, 3.296),
    pole("Nazca", "NZ", 49.05, -102.13, 0.611),
    pole("Okhotsk", "OK", 28.80, -90.91, 0.209),
    pole("Okinawa", "ON", 39.11, 145.94, 1.361),
    pole("Pacific", "PA", -63.09, 109.63, 0.663),
    pole("Panama", "PM", 16.55, -84.30, 1.392),
    pole("PuertoRico", "PR", 27.81, -81.51, 0.502),
    pole("PhilippineSea", "PS", -46.62, -28.39, 0.895),
    pole("Rivera", "RI", 20.27, -107.10, 4.510),
    pole("Rovuma", "RO", 51.72, -69.88, 0.270),
    pole("SouthAmerica", "SA", -14.10, -117.86, 0.123),
    pole("SouthBismarck", "SB", 6.91, -32.41, 6.665),
    pole("Scotia", "SC", 23.02, -98.78, 0.122),
    pole("Sinai", "SI", 53.34, -7.27, 0.476),
    pole("Sakishima", "SK", 27.31, 128.68, 7.145),
    pole("Shetland", "SL", 66.05, 134.03, 1.710),
    pole("Somalia", "SO", 47.59, -94.36, 0.346),
    pole("SolomonSea", "SS", -3.33, 130.60, 1.672),
    pole("Satunam", "ST", 36.68, 135.30, 2.846),
    pole("Sunda", "SU", 51.11, -91.75, 0.350),
    pole("Sandwich", "SW", -30.11, -35.58, 1.369),
    pole("Tonga", "TO", 26.38, 4.27, 8.853),
    pole("Victoria", "VI", 44.96, -102.19, 0.330),
    pole("Woodlark", "WL", -1.62, 130.63, 1.957),
    pole("Yangtze", "YA", 64.76, -109.19, 0.335),
];

/// NNR-MORVEL56 plate motion model, Argus et al. (2011).
/// Pole lat/lon in degrees, omega in deg/Ma. The Nubia plate uses "NU"
/// rather than the paper's "nb" to stay distinct from North Bismarck "NB".
pub static NNR_MORVEL56_PMM: &[PlateMotionRecord] = &[
    pole("Amur", "AM", 63.17, -122.82, 0.297),
    pole("Antarctica", "AN", 65.42, -118.11, 0.250),
    pole("Arabia", "AR", 48.88, -8.49, 0.559),
    pole("Australia", "AU", 33.86, 37.94, 0.632),
    pole("Capricorn", "CP", 44.44, 23.09, 0.608),
    pole("Caribbean", "CA", 35.20, -92.62, 0.286),
    pole("Cocos", "CO", 26.93, -124.31, 1.198),
    pole("Eurasia", "EU", 48.85, -106.50, 0.223),
    pole("India", "IN", 50.37, -3.29, 0.544),
    pole("JuandeFuca", "JF", -38.31, 60.04, 0.951),
    pole("Lwandle", "LW", 51.89, -69.52, 0.286),
    pole("Macquarie", "MQ", 49.19, 11.05, 1.144),
    pole("Nazca", "NZ", 46.23, -101.06, 0.696),
    pole("NorthAmerica", "NA", -4.85, -80.64, 0.209),
    pole("Nubia", "NU", 47.68, -68.44, 0.292),
    pole("Pacific", "PA", -63.58, 114.70, 0.651),
    pole("PhilippineSea", "PS", -46.02, -31.36, 0.910),
    pole("Rivera", "RI", 20.25, -107.29, 4.536),
    pole("Sandwich", "SW", -29.94, -36.87, 1.362),
    pole("Scotia", "SC", 22.52, -106.15, 0.146),
    pole("Somalia", "SM", 49.95, -84.52, 0.339),
    pole("SouthAmerica", "SA", -22.62, -112.83, 0.109),
    pole("Sunda", "SU", 50.06, -95.02, 0.337),
    pole("Sur", "SR", -32.50, -111.32, 0.107),
    pole("Yangtze", "YZ", 63.03, -116.62, 0.334),
    pole("AegeanSea", "AS", 19.43, 122.87, 0.124),
    pole("Altiplano", "AP", -6.58, -83.98, 0.488),
    pole("Anatolia", "AT", 40.11, 26.66, 1.210),
    pole("BalmoralReef", "BR", -63.74, 142.06, 0.490),
    pole("BandaSea", "BS", -1.49, 121.64, 2.475),
    pole("BirdsHead", "BH", -40.00, 100.50, 0.799),
    pole("Burma", "BU", -6.13, -78.10, 2.229),
    pole("Caroline", "CL", -72.78, 72.05, 0.607),
    pole("ConwayReef", "CR", -20.40, 170.53, 3.923),
    pole("Easter", "EA", 24.97, 67.53, 11.334),
    pole("Futuna", "FT", -16.33, 178.07, 5.101),
    pole("Galapagos", "GP", 2.53, 81.18, 5.487),
    pole("JuanFernandez", "JZ", 34.25, 70.74, 22.368),
    pole("Kermadec", "KE", 39.99, 6.46, 2.347),
    pole("Manus", "MN", -3.67, 150.27, 51.569),
    pole("Maoke", "MO", 14.25, 92.67, 0.774),
    pole("Mariana", "MA", 11.05, 137.84, 1.306),
    pole("MoluccaSea", "MS", 2.15, -56.09, 3.566),
    pole("NewHebrides", "NH", 0.57, -6.60, 2.469),
    pole("Niuafo`ou", "NI", -3.29, -174.49, 3.314),
    pole("NorthAndes", "ND", 17.73, -122.68, 0.116),
    pole("NorthBismarck", "NB", -45.04, 127.64, 0.856),
    pole("Okhotsk", "OK", 30.30, -92.28, 0.229),
    pole("Okinawa", "ON", 36.12, 137.92, 2.539),
    pole("Panama", "PM", 31.35, -113.90, 0.317),
    pole("Shetland", "SL", 50.71, -143.47, 0.268),
    pole("SolomonSea", "SS", -2.87, 130.62, 1.703),
    pole("SouthBismarck", "SB", 6.88, -31.89, 8.111),
    pole("Timor", "TI", -4.44, 113.50, 1.864),
    pole("Tonga", "TO", 25.87, 4.48, 8.942),
    pole("Woodlark", "WL", 0.10, 128.52, 1.744),
];

/// The two models with an associated plate boundary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateMotionModel {
    /// GSRM v2.1 (Kreemer et al. 2014).
    Gsrm,
    /// NNR-MORVEL56 (Argus et al. 2011).
    Morvel,
}

impl PlateMotionModel {
    /// Resolve a model from a (possibly fuller) name such as "GSRMv2.1" or
    /// "NNR-MORVEL56". Substring match, as the source datasets are usually
    /// referred to by versioned names.
    pub fn resolve(name: &str) -> Result<Self, PmmError> {
        if name.contains("GSRM") {
            Ok(Self::Gsrm)
        } else if name.contains("MORVEL") {
            Ok(Self::Morvel)
        } else {
            Err(PmmError::UnknownModel { name: name.to_string() })
        }
    }

    /// The model's full parameter table.
    pub fn table(self) -> &'static [PlateMotionRecord] {
        match self {
            Self::Gsrm => GSRM_V21_PMM,
            Self::Morvel => NNR_MORVEL56_PMM,
        }
    }
}

static GSRM_ABBREV_TO_NAME: Lazy<BTreeMap<String, String>> =
    Lazy::new(|| build_abbrev_map(GSRM_V21_PMM));
static MORVEL_ABBREV_TO_NAME: Lazy<BTreeMap<String, String>> =
    Lazy::new(|| build_abbrev_map(NNR_MORVEL56_PMM));

/// Upper-cased abbreviation -> plate name map for the given model.
pub fn abbrev_to_name(model: PlateMotionModel) -> &'static BTreeMap<String, String> {
    match model {
        PlateMotionModel::Gsrm => &GSRM_ABBREV_TO_NAME,
        PlateMotionModel::Morvel => &MORVEL_ABBREV_TO_NAME,
    }
}

fn build_abbrev_map(table: &[PlateMotionRecord]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for rec in table {
        let prev = map.insert(rec.abbrev.to_ascii_uppercase(), rec.name.to_string());
        // Abbreviations are unique within a table; the tables are static data
        // validated by tests, so a duplicate here is a programming error.
        debug_assert!(prev.is_none(), "duplicate abbreviation {}", rec.abbrev);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbrev_maps_cover_their_tables() {
        for (model, table) in
            [(PlateMotionModel::Gsrm, GSRM_V21_PMM), (PlateMotionModel::Morvel, NNR_MORVEL56_PMM)]
        {
            let map = abbrev_to_name(model);
            assert_eq!(map.len(), table.len());
            for rec in table {
                assert_eq!(map[&rec.abbrev.to_ascii_uppercase()], rec.name);
            }
        }
    }
}
