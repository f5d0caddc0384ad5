//! Planar coordinates and the WKT geometry parser.
//!
//! The city dataset stores locations as ASCII WKT in a projected plane (not
//! lat/lon), so coordinates are plain `f64` pairs.  Only the two shapes the
//! dataset uses are recognised:
//!
//! ```text
//! POINT (x y)
//! POLYGON ((x1 y1, x2 y2, ..., xn yn))
//! ```
//!
//! Polygon holes (`POLYGON ((outer), (inner))`) parse, but only the exterior
//! ring is kept.

use std::fmt;

use crate::{CtError, CtResult};

// ── Point ─────────────────────────────────────────────────────────────────────

/// A planar coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A parsed WKT geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    /// Exterior ring, in file order.  The closing vertex is kept if present.
    Polygon(Vec<Point>),
}

impl Geometry {
    /// Parse WKT text.
    ///
    /// # Errors
    ///
    /// [`CtError::Geometry`] for anything that is not a well-formed `POINT`
    /// or `POLYGON`, including non-finite coordinates and polygons with fewer
    /// than three vertices.
    pub fn parse(text: &str) -> CtResult<Geometry> {
        let malformed = || CtError::Geometry(text.to_owned());
        let s = text.trim();

        if let Some(rest) = strip_keyword(s, "POINT") {
            let body = unwrap_parens(rest).ok_or_else(malformed)?;
            let point = parse_coord(body).ok_or_else(malformed)?;
            return Ok(Geometry::Point(point));
        }

        if let Some(rest) = strip_keyword(s, "POLYGON") {
            let rings = unwrap_parens(rest).ok_or_else(malformed)?;
            // Exterior ring is the first parenthesised group.
            let close = rings.find(')').ok_or_else(malformed)?;
            let exterior = unwrap_parens(&rings[..=close]).ok_or_else(malformed)?;
            let points = exterior
                .split(',')
                .map(parse_coord)
                .collect::<Option<Vec<Point>>>()
                .ok_or_else(malformed)?;
            if points.len() < 3 {
                return Err(malformed());
            }
            return Ok(Geometry::Polygon(points));
        }

        Err(malformed())
    }

    /// The point, if this is a `POINT`.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Geometry::Point(p) => Some(*p),
            Geometry::Polygon(_) => None,
        }
    }
}

/// Parse `"POINT (x y)"` straight to a [`Point`].
///
/// Convenience for loaders that only accept points.
pub fn parse_point(text: &str) -> CtResult<Point> {
    Geometry::parse(text)?
        .as_point()
        .ok_or_else(|| CtError::Geometry(text.to_owned()))
}

// ── Extent ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// Bounding box of `points`, or `None` for an empty iterator.
    pub fn of<I: IntoIterator<Item = Point>>(points: I) -> Option<Extent> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut ext = Extent { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for p in iter {
            ext.min_x = ext.min_x.min(p.x);
            ext.max_x = ext.max_x.max(p.x);
            ext.min_y = ext.min_y.min(p.y);
            ext.max_y = ext.max_y.max(p.y);
        }
        Some(ext)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Case-insensitive keyword prefix.  Requires the keyword to end at a
/// whitespace or `(` boundary so `POINTS (..)` is rejected.
fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let head = s.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &s[keyword.len()..];
    match rest.chars().next() {
        Some(c) if c.is_whitespace() || c == '(' => Some(rest.trim_start()),
        _ => None,
    }
}

/// `"( body )"` → `"body"`.  The outer parentheses must enclose the whole
/// string.
fn unwrap_parens(s: &str) -> Option<&str> {
    s.trim().strip_prefix('(')?.strip_suffix(')').map(str::trim)
}

/// `"x y"` → `Point`.  Exactly two finite numbers.
fn parse_coord(s: &str) -> Option<Point> {
    let mut parts = s.split_whitespace();
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x, y))
}
