// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths: ordered sequences of sub-paths.

use std::fmt;

use crate::{PathEl, RoundingRule, SubPath};

/// A path of a general 2D form: an ordered sequence of closed [`SubPath`]s.
///
/// The path itself carries no drawing state; it exists to apply the
/// per-sub-path transforms ([`Path::thinned`], [`Path::rounded`]) across a
/// whole figure and to move element sequences across the crate boundary.
/// Sub-path order is meaningful to downstream consumers (it defines paint
/// order) and is preserved by every transform.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a path from a sequence of sub-paths.
    pub fn from_subpaths(subpaths: Vec<SubPath>) -> Path {
        Path { subpaths }
    }

    /// Create a path from a flat element sequence, splitting it into
    /// sub-paths on each [`PathEl::ClosePath`].
    ///
    /// Every sub-path goes through the closing-gap normalization of
    /// [`SubPath::new`]. Elements after the final close do not form a closed
    /// contour and are discarded.
    pub fn from_els(els: impl IntoIterator<Item = PathEl>) -> Path {
        let mut subpaths = Vec::new();
        let mut pending: Vec<PathEl> = Vec::new();
        for el in els {
            let is_close = matches!(el, PathEl::ClosePath);
            pending.push(el);
            if is_close {
                subpaths.push(SubPath::new(std::mem::take(&mut pending)));
            }
        }
        Path { subpaths }
    }

    /// The path's sub-paths.
    #[inline]
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// The number of sub-paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    /// Returns `true` if the path contains no sub-paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// The path flattened back into one element sequence, sub-paths in
    /// order.
    pub fn elements(&self) -> Vec<PathEl> {
        self.subpaths
            .iter()
            .flat_map(|subpath| subpath.elements().iter().copied())
            .collect()
    }

    /// Convert the path to an SVG path string representation.
    pub fn to_svg(&self) -> String {
        self.subpaths
            .iter()
            .map(SubPath::to_svg)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns a thinned representation of this path.
    ///
    /// Applies [`SubPath::thinned`] to every sub-path independently; see
    /// there for the transform itself.
    pub fn thinned(&self, min_length: f64) -> Path {
        Path {
            subpaths: self
                .subpaths
                .iter()
                .map(|subpath| subpath.thinned(min_length))
                .collect(),
        }
    }

    /// Returns a rounded representation of this path.
    ///
    /// Every sub-path is first thinned with `min_length` of half the radius,
    /// so that no element left in the sub-path is consumed from both ends by
    /// the rounding cut-points, then rounded with [`SubPath::rounded`].
    /// Sub-paths that cannot be rounded pass through unchanged.
    pub fn rounded(&self, radius: f64, rule: RoundingRule) -> Path {
        Path {
            subpaths: self
                .subpaths
                .iter()
                .map(|subpath| subpath.thinned(radius / 2.0).rounded(radius, rule))
                .collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, subpath) in self.subpaths.iter().enumerate() {
            writeln!(f, "SubPath #{i}:")?;
            writeln!(f, "{subpath}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a SubPath;
    type IntoIter = std::slice::Iter<'a, SubPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Vec2};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square_els(origin: Point, side: f64) -> Vec<PathEl> {
        vec![
            PathEl::MoveTo(origin),
            PathEl::LineTo(origin + Vec2::new(0.0, side)),
            PathEl::LineTo(origin + Vec2::new(side, side)),
            PathEl::LineTo(origin + Vec2::new(side, 0.0)),
            PathEl::ClosePath,
        ]
    }

    #[test]
    fn from_els_splits_on_close() {
        let mut els = square_els(pt(0.0, 0.0), 100.0);
        els.extend(square_els(pt(300.0, 0.0), 50.0));
        let path = Path::from_els(els);
        assert_eq!(path.len(), 2);
        // Each sub-path was normalized independently.
        assert_eq!(path.subpaths()[0].len(), 6);
        assert_eq!(path.subpaths()[1].len(), 6);
    }

    #[test]
    fn from_els_discards_trailing_unclosed_run() {
        let mut els = square_els(pt(0.0, 0.0), 100.0);
        els.push(PathEl::MoveTo(pt(500.0, 0.0)));
        els.push(PathEl::LineTo(pt(600.0, 0.0)));
        let path = Path::from_els(els);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn elements_round_trip() {
        let els = square_els(pt(0.0, 0.0), 100.0);
        let path = Path::from_els(els);
        let flattened = path.elements();
        assert_eq!(Path::from_els(flattened), path);
    }

    #[test]
    fn thinned_maps_every_subpath() {
        let mut els = vec![
            PathEl::MoveTo(pt(0.0, 0.0)),
            PathEl::LineTo(pt(0.5, 0.0)),
            PathEl::LineTo(pt(1.0, 0.0)),
            PathEl::LineTo(pt(1.0, 10.0)),
            PathEl::LineTo(pt(0.0, 10.0)),
            PathEl::ClosePath,
        ];
        els.extend(square_els(pt(100.0, 100.0), 40.0));
        let path = Path::from_els(els);
        let thinned = path.thinned(1.0);

        assert_eq!(thinned.len(), 2);
        // The jittered contour lost its sub-threshold element...
        assert_eq!(thinned.subpaths()[0].len(), 6);
        assert_eq!(
            thinned.subpaths()[0].elements()[1],
            PathEl::LineTo(pt(1.0, 0.0))
        );
        // ...and the clean square came through untouched.
        assert_eq!(thinned.subpaths()[1], path.subpaths()[1]);
    }

    #[test]
    fn rounded_pre_thins_each_subpath() {
        // The 4-unit jitter element is below radius / 2 and gets merged
        // away before rounding, leaving clean quarter-turn corners.
        let els = vec![
            PathEl::MoveTo(pt(0.0, 0.0)),
            PathEl::LineTo(pt(0.0, 96.0)),
            PathEl::LineTo(pt(0.0, 100.0)),
            PathEl::LineTo(pt(100.0, 100.0)),
            PathEl::LineTo(pt(100.0, 0.0)),
            PathEl::ClosePath,
        ];
        let path = Path::from_els(els);
        let rounded = path.rounded(10.0, RoundingRule::All);

        assert_eq!(rounded.len(), 1);
        let subpath = &rounded.subpaths()[0];
        // Move + 4 shortened lines interleaved with 4 blends + close.
        assert_eq!(subpath.len(), 10);
        let quads = subpath
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        assert_eq!(quads, 4);
    }

    #[test]
    fn rounded_passes_degenerate_subpaths_through() {
        let mut els = square_els(pt(0.0, 0.0), 100.0);
        els.push(PathEl::MoveTo(pt(500.0, 0.0)));
        els.push(PathEl::ClosePath);
        let path = Path::from_els(els);
        let rounded = path.rounded(10.0, RoundingRule::All);

        assert_eq!(rounded.len(), 2);
        assert_eq!(rounded.subpaths()[0].len(), 10);
        // The two-element contour cannot be rounded and survives as-is.
        assert_eq!(rounded.subpaths()[1], path.subpaths()[1]);
    }

    #[test]
    fn order_is_preserved() {
        let mut els = square_els(pt(0.0, 0.0), 100.0);
        els.extend(square_els(pt(300.0, 0.0), 50.0));
        let path = Path::from_els(els).rounded(5.0, RoundingRule::All);
        let first = path.subpaths()[0].end_point(0);
        let second = path.subpaths()[1].end_point(0);
        assert!(first.x < second.x);
    }

    #[test]
    fn to_svg_joins_subpaths() {
        let els = vec![
            PathEl::MoveTo(pt(0.0, 0.0)),
            PathEl::LineTo(pt(1.0, 0.0)),
            PathEl::ClosePath,
            PathEl::MoveTo(pt(5.0, 5.0)),
            PathEl::LineTo(pt(6.0, 5.0)),
            PathEl::ClosePath,
        ];
        let path = Path::from_els(els);
        assert_eq!(path.to_svg(), "M0 0L1 0Z M5 5L6 5Z");
    }
}
