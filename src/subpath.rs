// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-paths: single closed contours, with the thinning and corner rounding
//! transforms.

use std::fmt;
use std::fmt::Write as _;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::{CubicBez, Line, ParamCurveArclen, PathEl, Point, QuadBez, Vec2, ZeroLengthLine};

/// A gap of at most this many units between the last destination and the
/// sub-path's start point is considered already closed.
const CLOSE_GAP_TOLERANCE: f64 = 1.0;

/// Curve-to-curve joints turning less than this angle (in radians, roughly
/// 10°) are left unrounded.
const MIN_CURVE_JOINT_ANGLE: f64 = 0.17;

/// Selects which vertices of a sub-path are rounded, by turn direction.
///
/// Turn direction is the sign of the cross product of the incoming and
/// outgoing tangent vectors at the vertex, in the y-up convention of
/// [`Vec2::cross`]: negative is a clockwise bend (a right turn), positive a
/// counterclockwise bend (a left turn), zero colinear. Colinear vertices are
/// never rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingRule {
    /// Round only left (counterclockwise) turns.
    Left,
    /// Round only right (clockwise) turns.
    Right,
    /// Round every turning vertex.
    All,
}

impl RoundingRule {
    /// Whether a vertex with the given turn cross product is rounded under
    /// this rule.
    #[inline]
    pub fn admits(self, turn: f64) -> bool {
        match self {
            RoundingRule::Left => turn > 0.0,
            RoundingRule::Right => turn < 0.0,
            RoundingRule::All => turn != 0.0,
        }
    }
}

/// The reasons a sub-path can be rejected for rounding.
///
/// Rejection is non-fatal: [`SubPath::rounded`] passes the sub-path through
/// unchanged, since a path may legitimately mix well-formed and degenerate
/// contours. [`SubPath::try_rounded`] surfaces the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedSubPath {
    /// Rounding needs a leading move, at least two real elements and a
    /// trailing close.
    #[error("sub-path of {count} elements is too short to round")]
    TooFewElements {
        /// The number of elements the sub-path has.
        count: usize,
    },
    /// The sub-path does not begin with a [`PathEl::MoveTo`].
    #[error("sub-path does not start with a move")]
    NoLeadingMove,
    /// The sub-path does not end with a [`PathEl::ClosePath`].
    #[error("sub-path does not end with a close")]
    NoTrailingClose,
}

/// A single closed contour: an ordered sequence of path elements starting
/// with a [`PathEl::MoveTo`] and ending with a [`PathEl::ClosePath`].
///
/// Construction normalizes nominally-closed input into geometrically closed
/// input: when the element before the trailing close does not land back on
/// the start point (within a one-unit tolerance), the closing gap is
/// rewritten as an explicit line.
///
/// Sub-paths are immutable values; [`SubPath::thinned`] and
/// [`SubPath::rounded`] build new sub-paths.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubPath {
    els: Vec<PathEl>,
}

impl SubPath {
    /// Create a sub-path from a sequence of elements, normalizing the
    /// closing gap.
    pub fn new(els: Vec<PathEl>) -> SubPath {
        let mut subpath = SubPath { els };
        subpath.close_gap();
        subpath
    }

    /// The sub-path's elements.
    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    /// The number of elements, including the move and the close.
    #[inline]
    pub fn len(&self) -> usize {
        self.els.len()
    }

    /// Returns `true` if the sub-path contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Convert the sub-path to an SVG path string representation.
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => write!(result, "M{} {}", p.x, p.y),
                PathEl::LineTo(p) => write!(result, "L{} {}", p.x, p.y),
                PathEl::QuadTo(p1, p2) => write!(result, "Q{} {} {} {}", p1.x, p1.y, p2.x, p2.y),
                PathEl::CurveTo(p1, p2, p3) => write!(
                    result,
                    "C{} {} {} {} {} {}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                ),
                PathEl::ClosePath => write!(result, "Z"),
            }
            .expect("formatting into a string is infallible");
        }
        result
    }

    /// The start point of the first element, falling back to the origin for
    /// pathological sequences with no destination at all.
    fn first_point(&self) -> Point {
        self.els
            .first()
            .and_then(PathEl::end_point)
            .unwrap_or(Point::ZERO)
    }

    // closePath -> line back to the start point + closePath
    fn close_gap(&mut self) {
        let n = self.els.len();
        if n < 3 {
            return;
        }
        if matches!(self.els[0], PathEl::ClosePath) || !matches!(self.els[n - 1], PathEl::ClosePath)
        {
            return;
        }
        let target = self.first_point();
        let Some(last_end) = self.els[n - 2].end_point() else {
            return;
        };
        if last_end.distance(target) > CLOSE_GAP_TOLERANCE {
            self.els[n - 1] = PathEl::LineTo(target);
            self.els.push(PathEl::ClosePath);
        }
    }
}

/// Indexed geometric queries.
///
/// These treat the element sequence as cyclic: the element at index 0 starts
/// where the last element ends, and a trailing close ends back at the
/// sub-path's start point.
impl SubPath {
    /// The destination point of the element at `ix`.
    ///
    /// A close carries no coordinate; its destination is the destination of
    /// the element after it, wrapping to the sub-path's start point when the
    /// close is the last element.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds.
    pub fn end_point(&self, ix: usize) -> Point {
        if let Some(p) = self.els[ix].end_point() {
            return p;
        }
        self.els
            .get(ix + 1)
            .and_then(PathEl::end_point)
            .unwrap_or_else(|| self.first_point())
    }

    /// The start point of the element at `ix`: the destination of the
    /// previous element, wrapping to the last element for `ix` 0.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds or the sub-path is empty.
    pub fn start_point(&self, ix: usize) -> Point {
        let prev = if ix == 0 { self.els.len() - 1 } else { ix - 1 };
        self.end_point(prev)
    }

    /// The incoming tangent chord of the element at `ix`: the line from the
    /// element's start point to its first control point, or to its
    /// destination when it has no control points.
    ///
    /// A close's chord runs back to the sub-path's start point; a move has a
    /// degenerate chord at its own point.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds or the sub-path is empty.
    pub fn start_chord(&self, ix: usize) -> Line {
        let prev = self.start_point(ix);
        match self.els[ix] {
            PathEl::MoveTo(p) => Line::new(p, p),
            PathEl::LineTo(p) => Line::new(prev, p),
            PathEl::QuadTo(c, _) => Line::new(prev, c),
            PathEl::CurveTo(c1, _, _) => Line::new(prev, c1),
            PathEl::ClosePath => Line::new(prev, self.end_point(ix)),
        }
    }

    /// The outgoing tangent chord of the element at `ix`: the line from the
    /// element's last control point to its destination. For elements without
    /// control points this is the start chord reversed.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds or the sub-path is empty.
    pub fn end_chord(&self, ix: usize) -> Line {
        match self.els[ix] {
            PathEl::MoveTo(p) => Line::new(p, p),
            PathEl::LineTo(_) | PathEl::ClosePath => self.start_chord(ix).reversed(),
            PathEl::QuadTo(c, p) => Line::new(c, p),
            PathEl::CurveTo(_, c2, p) => Line::new(c2, p),
        }
    }

    /// The incoming tangent direction of the element at `ix`, as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds or the sub-path is empty.
    pub fn start_tangent(&self, ix: usize) -> Vec2 {
        self.start_chord(ix).vector()
    }

    /// The outgoing tangent direction of the element at `ix`, as a vector.
    ///
    /// For straight elements this is the direction of travel, not the
    /// reversed chord of [`SubPath::end_chord`].
    ///
    /// # Panics
    ///
    /// Panics if `ix` is out of bounds or the sub-path is empty.
    pub fn end_tangent(&self, ix: usize) -> Vec2 {
        match self.els[ix] {
            PathEl::MoveTo(_) => Vec2::ZERO,
            PathEl::LineTo(_) | PathEl::ClosePath => self.start_tangent(ix),
            PathEl::QuadTo(c, p) => p - c,
            PathEl::CurveTo(_, c2, p) => p - c2,
        }
    }
}

/// Thinning.
impl SubPath {
    /// Returns a thinned representation of this sub-path.
    ///
    /// Thinning merges runs of consecutive insignificant elements into one
    /// with respect to the figure's general form, reducing noise before
    /// rounding. An element is insignificant if the chord from the previous
    /// destination to its own destination is shorter than `min_length`.
    ///
    /// A merged run keeps the direction of approach into and out of the run:
    /// the run's entry element is emitted with its destination moved to the
    /// crossing of its outgoing chord with the incoming chord of the next
    /// significant element. When those chords are parallel the entry element
    /// is emitted unmodified.
    ///
    /// The leading move and trailing close are never changed.
    pub fn thinned(&self, min_length: f64) -> SubPath {
        let count = self.els.len();
        let mut thinned: Vec<PathEl> = self.els.iter().take(1).copied().collect();

        let mut i = 1;
        while i + 1 < count {
            let next = self.find_next_long(i + 1, min_length);
            if next == i + 1 {
                thinned.push(self.els[i]);
                i += 1;
            } else {
                match self.end_chord(i).crossing_point(self.start_chord(next)) {
                    Some(p) => thinned.push(self.els[i].with_end_point(p)),
                    None => thinned.push(self.els[i]),
                }
                i = next;
            }
        }

        thinned.push(PathEl::ClosePath);
        SubPath::new(thinned)
    }

    /// Finds the first element at or after `from` whose chord is at least
    /// `min_length` long. Returns `from` if there is none.
    fn find_next_long(&self, from: usize, min_length: f64) -> usize {
        let mut i = from;
        while i < self.els.len() {
            if self.end_point(i - 1).distance(self.end_point(i)) >= min_length {
                return i;
            }
            i += 1;
        }
        from
    }
}

/// Rounding.
impl SubPath {
    /// Returns a rounded representation of this sub-path.
    ///
    /// Rounding replaces every vertex admitted by `rule` with a quadratic
    /// Bézier blend of the given `radius`: the incoming element is shortened
    /// by `radius` along its own parameterization, and a blend curve through
    /// the original vertex joins it to the point `radius` past the start of
    /// the outgoing element. The vertex closing the contour is rounded too,
    /// by relocating the initial move onto the closing blend's end.
    ///
    /// `radius` is not clamped against element lengths. Call
    /// [`SubPath::thinned`] with `min_length` of about half the radius first
    /// so that no element is consumed from both ends;
    /// [`Path::rounded`](crate::Path::rounded) does this automatically.
    ///
    /// A malformed sub-path (at most 3 elements, or not move-led and
    /// close-terminated) is returned unchanged and a warning is emitted; use
    /// [`SubPath::try_rounded`] to observe the reason.
    pub fn rounded(&self, radius: f64, rule: RoundingRule) -> SubPath {
        match self.try_rounded(radius, rule) {
            Ok(rounded) => rounded,
            Err(reason) => {
                tracing::warn!(%reason, "sub-path rounding is not possible");
                self.clone()
            }
        }
    }

    /// Returns a rounded representation of this sub-path, or the reason it
    /// cannot be rounded.
    ///
    /// See [`SubPath::rounded`] for the transform itself.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSubPath`] when the sub-path has 3 or fewer
    /// elements, does not start with a move, or does not end with a close.
    pub fn try_rounded(
        &self,
        radius: f64,
        rule: RoundingRule,
    ) -> Result<SubPath, MalformedSubPath> {
        let count = self.els.len();
        if count <= 3 {
            return Err(MalformedSubPath::TooFewElements { count });
        }
        if !matches!(self.els[0], PathEl::MoveTo(_)) {
            return Err(MalformedSubPath::NoLeadingMove);
        }
        if !matches!(self.els[count - 1], PathEl::ClosePath) {
            return Err(MalformedSubPath::NoTrailingClose);
        }

        let mut out: Vec<PathEl> = Vec::with_capacity(2 * count);
        for (i, el) in self.els.iter().enumerate() {
            let i_prev = if i == 0 { count - 1 } else { i - 1 };
            let i_next = if i + 1 < count { i + 1 } else { 0 };

            if matches!(el, PathEl::MoveTo(_)) {
                out.push(*el);
                continue;
            }
            // The element before the trailing close is the incoming side of
            // the closing vertex; it is emitted there.
            if matches!(self.els[i_next], PathEl::ClosePath) {
                continue;
            }
            if matches!(el, PathEl::ClosePath) {
                self.close_with_round(&mut out, i_prev, radius, rule);
                break;
            }

            out.extend(self.round_vertex(i, i_next, radius, rule));
        }

        Ok(SubPath::new(out))
    }

    /// Rounds the vertex between the elements at `prev` and `next`.
    ///
    /// Emits the shortened incoming element followed by the blend curve, or
    /// just the unmodified incoming element when the vertex is not rounded.
    fn round_vertex(
        &self,
        prev: usize,
        next: usize,
        radius: f64,
        rule: RoundingRule,
    ) -> ArrayVec<PathEl, 2> {
        let curr = self.els[prev];
        let mut out: ArrayVec<PathEl, 2> = ArrayVec::new();

        let ao = self.end_tangent(prev);
        let ob = self.start_tangent(next);
        if !rule.admits(ao.cross(ob)) {
            out.push(curr);
            return out;
        }
        // Skip curve-to-curve joints turning less than ~10°.
        if curr.is_curve()
            && self.els[next].is_curve()
            && ao.angle_between(ob).abs() < MIN_CURVE_JOINT_ANGLE
        {
            out.push(curr);
            return out;
        }

        let a = self.start_point(prev);
        let o = self.end_point(prev);
        let b = self.end_point(next);

        // Pull the incoming element's destination back by `radius` along
        // its own parameterization; control points stay.
        let shortened = match curr {
            PathEl::LineTo(_) => match Line::new(a, o).point_at_end(radius) {
                Ok(p) => PathEl::LineTo(p),
                Err(ZeroLengthLine) => {
                    out.push(curr);
                    return out;
                }
            },
            PathEl::QuadTo(c, _) => {
                PathEl::QuadTo(c, QuadBez::new(a, c, o).point_from_end(radius))
            }
            PathEl::CurveTo(c1, c2, _) => {
                PathEl::CurveTo(c1, c2, CubicBez::new(a, c1, c2, o).point_from_end(radius))
            }
            _ => {
                out.push(curr);
                return out;
            }
        };

        // The blend runs through the original vertex to the point `radius`
        // past the outgoing element's start.
        let blend_end = match self.els[next] {
            PathEl::LineTo(_) => match Line::new(o, b).point_at_start(radius) {
                Ok(p) => p,
                Err(ZeroLengthLine) => {
                    out.push(curr);
                    return out;
                }
            },
            PathEl::QuadTo(c, _) => QuadBez::new(o, c, b).point_at_arclen(radius),
            PathEl::CurveTo(c1, c2, _) => CubicBez::new(o, c1, c2, b).point_at_arclen(radius),
            _ => {
                out.push(curr);
                return out;
            }
        };

        out.push(shortened);
        out.push(PathEl::QuadTo(o, blend_end));
        out
    }

    /// Rounds the cyclic vertex between the last real element (at `i_prev`)
    /// and the first real element, relocating the initial move onto the
    /// closing blend's end.
    ///
    /// Always terminates `out` with a close, whether or not the closing
    /// vertex was rounded.
    fn close_with_round(&self, out: &mut Vec<PathEl>, i_prev: usize, radius: f64, rule: RoundingRule) {
        let first_real = self
            .els
            .iter()
            .position(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath));

        let Some(i_next) = first_real else {
            out.push(PathEl::ClosePath);
            return;
        };

        let seq = self.round_vertex(i_prev, i_next, radius, rule);
        if seq.len() > 1 {
            if let Some(p) = seq.last().and_then(PathEl::end_point) {
                if let Some(first) = out.first_mut() {
                    *first = PathEl::MoveTo(p);
                }
            }
        }
        out.extend(seq);
        out.push(PathEl::ClosePath);
    }
}

impl fmt::Display for SubPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.els.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{i}: {el}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SubPath {
    type Item = PathEl;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.els.iter().copied()
    }
}
