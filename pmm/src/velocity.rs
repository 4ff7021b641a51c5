//! East-convergence correction of sampled velocity vectors and scene
//! assembly for the render adapter.
//!
//! Raw east/north components live in a locally flat tangent frame. Drawn on
//! an equirectangular-style map, the east component over-extends toward the
//! poles because one degree of longitude shrinks with cos(lat). The
//! correction biases the drawn direction accordingly while keeping the true
//! speed unchanged.

use log::debug;

use crate::errors::PmmError;
use crate::polygon::PlatePolygon;
use crate::sampler;

/// Scale factor from m/yr to mm/yr, the unit plotted on plate-motion maps.
pub const MM_PER_M: f64 = 1.0e3;

/// Below this cos(lat) a sample counts as polar and its corrected vector is
/// clamped to zero instead of diverging.
const POLAR_COS_EPS: f64 = 1e-9;

/// The external Euler-pole collaborator: surface velocity from rigid
/// rotation, evaluated at each (lat, lon) in degrees.
///
/// Implementations return parallel east/north components in m/yr, one pair
/// per input coordinate. The vertical component, if the kinematics produce
/// one, is not part of this seam.
pub trait EulerVelocity {
    /// East and north velocity components (m/yr) at the given coordinates.
    fn velocity_enu(&self, lats: &[f64], lons: &[f64]) -> (Vec<f64>, Vec<f64>);
}

/// Correct east components for spherical convergence, preserving magnitude.
///
/// Per sample: divide east by cos(lat), then rescale the (east, north) pair
/// so its norm equals the input norm. Zero input vectors stay zero; samples
/// at the poles (cos(lat) ~ 0) are clamped to zero rather than diverging.
pub fn correct_east_convergence(
    lats: &[f64],
    ve: &[f64],
    vn: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), PmmError> {
    if lats.len() != ve.len() {
        return Err(PmmError::LengthMismatch { left: lats.len(), right: ve.len() });
    }
    if ve.len() != vn.len() {
        return Err(PmmError::LengthMismatch { left: ve.len(), right: vn.len() });
    }

    let mut ve_out = Vec::with_capacity(ve.len());
    let mut vn_out = Vec::with_capacity(vn.len());
    for i in 0..lats.len() {
        let norm = (ve[i] * ve[i] + vn[i] * vn[i]).sqrt();
        let cos_lat = lats[i].to_radians().cos();
        if norm == 0.0 || cos_lat.abs() < POLAR_COS_EPS {
            ve_out.push(0.0);
            vn_out.push(0.0);
            continue;
        }
        let ve_adj = ve[i] / cos_lat;
        let renorm = (ve_adj * ve_adj + vn[i] * vn[i]).sqrt() / norm;
        ve_out.push(ve_adj / renorm);
        vn_out.push(vn[i] / renorm);
    }
    Ok((ve_out, vn_out))
}

/// Scale velocity components in place from m/yr to mm/yr.
pub fn scale_to_mm_per_yr(v: &mut [f64]) {
    for x in v.iter_mut() {
        *x *= MM_PER_M;
    }
}

/// Everything the render adapter needs to draw one plate: its outline ring,
/// centroid, and a corrected interior velocity field (parallel arrays, mm/yr).
#[derive(Debug, Clone, PartialEq)]
pub struct PlateMotionScene {
    /// Outline ring as [lat, lon] vertices, in file order.
    pub ring: Vec<[f64; 2]>,
    /// Polygon centroid as [lat, lon], a default map center.
    pub centroid: [f64; 2],
    /// Latitudes of the interior sample points (deg).
    pub sample_lats: Vec<f64>,
    /// Longitudes of the interior sample points (deg).
    pub sample_lons: Vec<f64>,
    /// Corrected east velocity components (mm/yr).
    pub ve_mm_yr: Vec<f64>,
    /// Corrected north velocity components (mm/yr).
    pub vn_mm_yr: Vec<f64>,
}

/// Run the sample -> kinematics -> mm/yr -> correction pipeline for one
/// plate and assemble the render handoff.
pub fn build_scene<E: EulerVelocity>(
    polygon: &PlatePolygon,
    epole: &E,
    ny: usize,
    nx: usize,
) -> Result<PlateMotionScene, PmmError> {
    let (lats, lons) = sampler::sample_within(polygon, ny, nx)?;
    let (mut ve, mut vn) = epole.velocity_enu(&lats, &lons);
    if ve.len() != lats.len() {
        return Err(PmmError::LengthMismatch { left: lats.len(), right: ve.len() });
    }
    if vn.len() != lats.len() {
        return Err(PmmError::LengthMismatch { left: lats.len(), right: vn.len() });
    }
    scale_to_mm_per_yr(&mut ve);
    scale_to_mm_per_yr(&mut vn);
    let (ve, vn) = correct_east_convergence(&lats, &ve, &vn)?;
    let (clat, clon) = polygon.centroid()?;
    debug!("scene built with {} interior velocity samples", lats.len());
    Ok(PlateMotionScene {
        ring: polygon.ring().to_vec(),
        centroid: [clat, clon],
        sample_lats: lats,
        sample_lons: lons,
        ve_mm_yr: ve,
        vn_mm_yr: vn,
    })
}
