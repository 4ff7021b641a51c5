//! Full pipeline: parse -> polygon -> sample -> kinematics double -> correct.

use pmm::polygon::PlatePolygon;
use pmm::velocity::{build_scene, EulerVelocity};

const RADIUS_M: f64 = 6_371_000.0;

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[1] * b[2] - a[2] * b[1], a[2] * b[0] - a[0] * b[2], a[0] * b[1] - a[1] * b[0]]
}
fn normalize(v: [f64; 3]) -> [f64; 3] {
    let n = dot(v, v).sqrt();
    [v[0] / n, v[1] / n, v[2] / n]
}

/// Rigid-rotation kinematics double: v = w x (R * r), projected onto the
/// local east/north basis. Stands in for the external Euler-pole collaborator.
struct RigidRotation {
    /// Angular velocity vector (rad/yr).
    w: [f64; 3],
}

impl EulerVelocity for RigidRotation {
    fn velocity_enu(&self, lats: &[f64], lons: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut ve = Vec::with_capacity(lats.len());
        let mut vn = Vec::with_capacity(lats.len());
        for (&lat, &lon) in lats.iter().zip(lons) {
            let (la, lo) = (lat.to_radians(), lon.to_radians());
            let r = [la.cos() * lo.cos(), la.cos() * lo.sin(), la.sin()];
            let rp = [r[0] * RADIUS_M, r[1] * RADIUS_M, r[2] * RADIUS_M];
            let v = cross(self.w, rp);
            let east = normalize(cross([0.0, 0.0, 1.0], r));
            let north = normalize(cross(r, east));
            ve.push(dot(v, east));
            vn.push(dot(v, north));
        }
        (ve, vn)
    }
}

fn arabia_like_polygon() -> PlatePolygon {
    PlatePolygon::new(vec![[12.0, 40.0], [12.0, 55.0], [30.0, 55.0], [30.0, 40.0]]).unwrap()
}

#[test]
fn scene_arrays_are_parallel_and_nonempty() {
    let poly = arabia_like_polygon();
    let epole = RigidRotation { w: [0.0, 0.0, 1.0e-8] };
    let scene = build_scene(&poly, &epole, 6, 6).unwrap();
    assert!(!scene.sample_lats.is_empty());
    assert_eq!(scene.sample_lats.len(), scene.sample_lons.len());
    assert_eq!(scene.sample_lats.len(), scene.ve_mm_yr.len());
    assert_eq!(scene.sample_lats.len(), scene.vn_mm_yr.len());
    assert_eq!(scene.ring.len(), 4);
}

#[test]
fn scene_centroid_matches_polygon() {
    let poly = arabia_like_polygon();
    let epole = RigidRotation { w: [0.0, 0.0, 1.0e-8] };
    let scene = build_scene(&poly, &epole, 6, 6).unwrap();
    let (clat, clon) = poly.centroid().unwrap();
    assert!((scene.centroid[0] - clat).abs() < 1e-12);
    assert!((scene.centroid[1] - clon).abs() < 1e-12);
}

#[test]
fn corrected_speeds_match_raw_speeds_in_mm_per_yr() {
    let poly = arabia_like_polygon();
    let epole = RigidRotation { w: [3.0e-9, -1.0e-9, 1.0e-8] };
    let scene = build_scene(&poly, &epole, 8, 8).unwrap();
    let (ve_raw, vn_raw) = epole.velocity_enu(&scene.sample_lats, &scene.sample_lons);
    for i in 0..scene.sample_lats.len() {
        let raw_mm = 1.0e3 * (ve_raw[i] * ve_raw[i] + vn_raw[i] * vn_raw[i]).sqrt();
        let out =
            (scene.ve_mm_yr[i] * scene.ve_mm_yr[i] + scene.vn_mm_yr[i] * scene.vn_mm_yr[i]).sqrt();
        assert!((out - raw_mm).abs() < 1e-6, "sample {i}: {out} vs {raw_mm}");
    }
}

#[test]
fn samples_lie_inside_the_polygon() {
    let poly = arabia_like_polygon();
    let epole = RigidRotation { w: [0.0, 0.0, 1.0e-8] };
    let scene = build_scene(&poly, &epole, 7, 7).unwrap();
    for (&la, &lo) in scene.sample_lats.iter().zip(&scene.sample_lons) {
        assert!(poly.contains(la, lo));
    }
}

#[test]
fn z_axis_rotation_moves_eastward_everywhere() {
    // A pure +z rotation carries every non-polar point due east, so after
    // correction the north components stay zero and east stays positive.
    let poly = arabia_like_polygon();
    let epole = RigidRotation { w: [0.0, 0.0, 1.0e-8] };
    let scene = build_scene(&poly, &epole, 6, 6).unwrap();
    for i in 0..scene.ve_mm_yr.len() {
        assert!(scene.ve_mm_yr[i] > 0.0);
        assert!(scene.vn_mm_yr[i].abs() < 1e-6);
    }
}
