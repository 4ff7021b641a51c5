//! Interior grid sampling of a plate polygon.

use log::debug;

use crate::errors::PmmError;
use crate::polygon::PlatePolygon;

/// Sample the interior of `polygon` on a regular `ny`-by-`nx` candidate
/// lattice spanning its bounding box (endpoints inclusive on both axes).
///
/// Returns parallel (latitudes, longitudes) of the candidates that lie
/// inside the polygon, in row-major lattice order. Zero interior points is a
/// valid result for sliver polygons. Containment is tested per candidate in
/// O(ny*nx); at visualization resolutions a spatial index would not pay off.
pub fn sample_within(
    polygon: &PlatePolygon,
    ny: usize,
    nx: usize,
) -> Result<(Vec<f64>, Vec<f64>), PmmError> {
    if ny == 0 || nx == 0 {
        return Err(PmmError::EmptyGrid);
    }
    let (min_lat, max_lat, min_lon, max_lon) = polygon.bounds();
    let lat_axis = linspace(min_lat, max_lat, ny);
    let lon_axis = linspace(min_lon, max_lon, nx);

    let mut lats = Vec::new();
    let mut lons = Vec::new();
    for &lat in &lat_axis {
        for &lon in &lon_axis {
            if polygon.contains(lat, lon) {
                lats.push(lat);
                lons.push(lon);
            }
        }
    }
    debug!("interior sample kept {} of {} candidates", lats.len(), ny * nx);
    Ok((lats, lons))
}

/// `n` evenly spaced values over [a, b], endpoints included.
/// With `n == 1` the single value is pinned at `a`.
fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![a];
    }
    let step = (b - a) / (n - 1) as f64;
    (0..n).map(|i| if i == n - 1 { b } else { a + step * i as f64 }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_exact() {
        let v = linspace(0.0, 10.0, 11);
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[10], 10.0);
        assert!((v[5] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_single_point() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }
}
