use pmm::errors::PmmError;
use pmm::polygon::PlatePolygon;
use pmm::sampler::sample_within;

fn square() -> PlatePolygon {
    PlatePolygon::new(vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]).unwrap()
}

#[test]
fn square_grid_keeps_interior_only() {
    // 11x11 lattice over [0,10]^2: integer grid points. Boundary-exclusive
    // containment keeps the 9x9 interior block.
    let (lats, lons) = sample_within(&square(), 11, 11).unwrap();
    assert_eq!(lats.len(), lons.len());
    assert_eq!(lats.len(), 81);
    assert!(lats.iter().zip(&lons).any(|(&la, &lo)| la == 5.0 && lo == 5.0));
    assert!(!lats.iter().zip(&lons).any(|(&la, &lo)| la == 20.0 && lo == 20.0));
    assert!(lats.iter().all(|&la| la > 0.0 && la < 10.0));
    assert!(lons.iter().all(|&lo| lo > 0.0 && lo < 10.0));
}

#[test]
fn traversal_order_is_row_major() {
    let (lats, _lons) = sample_within(&square(), 11, 11).unwrap();
    // Latitudes never decrease along the flattened output.
    assert!(lats.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sliver_polygon_yields_empty_sample() {
    // All four lattice candidates land on the bounding-box corners, none
    // strictly inside the triangle.
    let tri = PlatePolygon::new(vec![[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]]).unwrap();
    let (lats, lons) = sample_within(&tri, 2, 2).unwrap();
    assert!(lats.is_empty());
    assert!(lons.is_empty());
}

#[test]
fn zero_axis_is_rejected() {
    let err = sample_within(&square(), 0, 5).unwrap_err();
    assert!(matches!(err, PmmError::EmptyGrid));
    let err = sample_within(&square(), 5, 0).unwrap_err();
    assert!(matches!(err, PmmError::EmptyGrid));
}

#[test]
fn single_axis_point_pins_to_minimum() {
    // ny = 1 collapses the lat axis to min_lat = 0, which is on the boundary,
    // so nothing survives; the call itself must still be well-defined.
    let (lats, lons) = sample_within(&square(), 1, 11).unwrap();
    assert_eq!(lats.len(), lons.len());
    assert!(lats.iter().all(|&la| la == 0.0));
}
