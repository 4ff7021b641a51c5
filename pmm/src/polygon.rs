//! Queryable polygon built from a single plate's parsed outline ring.

use geo::{Centroid, Contains, Coord, LineString, Point, Polygon};

use crate::errors::PmmError;
use crate::outline::PlateOutline;

/// A plate outline wrapped as a simple polygon supporting containment and
/// centroid queries.
///
/// Coordinates follow the parser's normalization: x = latitude,
/// y = longitude, both in degrees. The ring is assumed simple
/// (non-self-intersecting); winding is whatever the source file used.
#[derive(Debug)]
pub struct PlatePolygon {
    ring: Vec<[f64; 2]>,
    poly: Polygon<f64>,
}

impl PlatePolygon {
    /// Build a polygon from an ordered [lat, lon] vertex ring.
    ///
    /// Rings with fewer than 3 vertices cannot enclose area and are rejected.
    pub fn new(ring: Vec<[f64; 2]>) -> Result<Self, PmmError> {
        if ring.len() < 3 {
            return Err(PmmError::DegenerateRing { n_vertices: ring.len() });
        }
        let coords: Vec<Coord<f64>> = ring.iter().map(|v| Coord { x: v[0], y: v[1] }).collect();
        let poly = Polygon::new(LineString::from(coords), vec![]);
        Ok(Self { ring, poly })
    }

    /// Whether (lat, lon) lies strictly inside the polygon.
    ///
    /// Points exactly on the boundary are classified as OUTSIDE (the
    /// underlying geometric predicate's convention, kept consistent here).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.poly.contains(&Point::new(lat, lon))
    }

    /// The polygon centroid as (lat, lon).
    ///
    /// Degenerate geometry with no defined centroid surfaces an error rather
    /// than a silently wrong position.
    pub fn centroid(&self) -> Result<(f64, f64), PmmError> {
        let c = self.poly.centroid().ok_or(PmmError::NoCentroid)?;
        Ok((c.x(), c.y()))
    }

    /// The source vertex ring, in file order.
    pub fn ring(&self) -> &[[f64; 2]] {
        &self.ring
    }

    /// Bounding extrema of the vertex ring:
    /// (min_lat, max_lat, min_lon, max_lon).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for v in &self.ring {
            min_lat = min_lat.min(v[0]);
            max_lat = max_lat.max(v[0]);
            min_lon = min_lon.min(v[1]);
            max_lon = max_lon.max(v[1]);
        }
        (min_lat, max_lat, min_lon, max_lon)
    }
}

/// Select one plate's outline from a parsed [`PlateOutline`] and wrap it as
/// a [`PlatePolygon`].
pub fn outline_for(name: &str, parsed: &PlateOutline) -> Result<PlatePolygon, PmmError> {
    let ring =
        parsed.get(name).ok_or_else(|| PmmError::PlateNotFound { name: name.to_string() })?;
    PlatePolygon::new(ring.clone())
}
