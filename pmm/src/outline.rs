//! Tolerant line parser for plate boundary outline files.
//!
//! A boundary file is a plain-text sequence of records. A record header is a
//! line starting with `"> "` or `"# "` followed by the plate abbreviation, or
//! a bare single-token line holding the abbreviation. Data lines hold exactly
//! two whitespace-separated floats. The file extension declares the
//! coordinate order (`.lalo` = latitude first, `.lola` = longitude first);
//! vertices are always stored as [lat, lon] regardless of the source order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::catalog::{self, PlateMotionModel};
use crate::errors::PmmError;

/// Coordinate order of the data lines in a boundary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordOrder {
    /// Latitude listed first (`.lalo` files).
    LatLon,
    /// Longitude listed first (`.lola` files).
    LonLat,
}

impl CoordOrder {
    /// Derive the coordinate order from the boundary file extension.
    pub fn from_path(path: &Path) -> Result<Self, PmmError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "lalo" => Ok(Self::LatLon),
            "lola" => Ok(Self::LonLat),
            other => Err(PmmError::UnknownCoordOrder { extension: other.to_string() }),
        }
    }
}

/// Parsed outlines: plate name -> ordered ring of [lat, lon] vertices.
///
/// A `BTreeMap` keeps iteration order deterministic, so parsing the same
/// file twice yields identical results.
pub type PlateOutline = BTreeMap<String, Vec<[f64; 2]>>;

/// Line-dispatch state: looking for the first header, or accumulating the
/// current record's vertices. Headers are recognized in either state.
enum ParserState {
    SeekHeader,
    CollectVertices,
}

/// Read and parse a boundary file for the given model.
///
/// The file handle is opened, consumed, and released before returning. The
/// abbreviation table comes from the model's catalog entry.
pub fn read_plate_outline<P: AsRef<Path>>(
    path: P,
    model: PlateMotionModel,
) -> Result<PlateOutline, PmmError> {
    let path = path.as_ref();
    let order = CoordOrder::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let outlines =
        parse_outline(&text, order, catalog::abbrev_to_name(model), &path.display().to_string())?;
    debug!("parsed {} plate outlines from {}", outlines.len(), path.display());
    Ok(outlines)
}

/// Parse boundary-file text into a [`PlateOutline`].
///
/// `source` names the origin of the text (usually the file path) and is only
/// used in error messages. Errors abort the whole parse; no partial outline
/// is returned.
pub fn parse_outline(
    text: &str,
    order: CoordOrder,
    abbrev_to_name: &BTreeMap<String, String>,
    source: &str,
) -> Result<PlateOutline, PmmError> {
    let mut outlines = PlateOutline::new();
    let mut pending: Option<(String, Vec<[f64; 2]>)> = None;
    let mut state = ParserState::SeekHeader;

    for (idx, line) in text.lines().enumerate() {
        if let Some(abbrev) = header_abbrev(line) {
            commit_pending(&mut outlines, pending.take(), abbrev_to_name, source)?;
            pending = Some((abbrev.to_string(), Vec::new()));
            state = ParserState::CollectVertices;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        match state {
            ParserState::SeekHeader => {
                // Leading noise before the first header is tolerated.
                debug!("skipping line {} before first header: {:?}", idx + 1, line);
            }
            ParserState::CollectVertices => {
                let vert = parse_vertex(line, order, idx + 1)?;
                if let Some((_, verts)) = pending.as_mut() {
                    verts.push(vert);
                }
            }
        }
    }
    commit_pending(&mut outlines, pending.take(), abbrev_to_name, source)?;
    Ok(outlines)
}

/// Extract the abbreviation if `line` is a record header, else `None`.
/// Recognized forms, in priority order: `"> "` prefix, `"# "` prefix, bare
/// single-token line.
fn header_abbrev(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("> ") {
        return Some(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Some(rest.trim());
    }
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}

/// Parse a data line into a [lat, lon] vertex, swapping if the source lists
/// longitude first.
fn parse_vertex(line: &str, order: CoordOrder, line_no: usize) -> Result<[f64; 2], PmmError> {
    let malformed =
        || PmmError::MalformedLine { line_no, content: line.trim_end().to_string() };
    let mut tokens = line.split_whitespace();
    let (a, b) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Err(malformed()),
    };
    let a: f64 = a.parse().map_err(|_| malformed())?;
    let b: f64 = b.parse().map_err(|_| malformed())?;
    Ok(match order {
        CoordOrder::LatLon => [a, b],
        CoordOrder::LonLat => [b, a],
    })
}

/// Commit a pending (abbreviation, vertices) record if it holds any vertices.
/// A header immediately followed by another header leaves an empty record,
/// which is discarded silently.
fn commit_pending(
    outlines: &mut PlateOutline,
    pending: Option<(String, Vec<[f64; 2]>)>,
    abbrev_to_name: &BTreeMap<String, String>,
    source: &str,
) -> Result<(), PmmError> {
    let Some((abbrev, verts)) = pending else {
        return Ok(());
    };
    if verts.is_empty() {
        debug!("discarding record {:?} with no vertices", abbrev);
        return Ok(());
    }
    let name = abbrev_to_name.get(&abbrev.to_ascii_uppercase()).ok_or_else(|| {
        PmmError::UnknownAbbrev { abbrev: abbrev.clone(), source: source.to_string() }
    })?;
    outlines.insert(name.clone(), verts);
    Ok(())
}
