// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ParamCurve, ParamCurveArclen, Point};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
    ) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Is this curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        let x = mt2 * mt * self.p0.x
            + 3.0 * mt2 * t * self.p1.x
            + 3.0 * mt * t2 * self.p2.x
            + t2 * t * self.p3.x;

        let y = mt2 * mt * self.p0.y
            + 3.0 * mt2 * t * self.p1.y
            + 3.0 * mt * t2 * self.p2.y
            + t2 * t * self.p3.y;

        Point::new(x, y)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveArclen for CubicBez {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubicbez_eval() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
        // Symmetric control cage: the midpoint sits on the symmetry axis.
        assert_eq!(c.eval(0.5), Point::new(50.0, 75.0));
    }

    #[test]
    fn cubicbez_arclen_straight() {
        // All control points on the x axis with monotone x(t): the arc
        // length is the chord length, and the sampled sum matches exactly.
        let c = CubicBez::new((0.0, 0.0), (25.0, 0.0), (75.0, 0.0), (100.0, 0.0));
        assert!((c.arclen() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cubicbez_arclen_monotonic() {
        // An S-curve; the sampled arc length must still be non-decreasing.
        let c = CubicBez::new((0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0));
        let mut last = 0.0;
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let len = c.arclen_to(t);
            assert!(len >= last, "arclen decreased at t={t}");
            last = len;
        }
    }

    #[test]
    fn cubicbez_point_at_arclen_boundaries() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        assert_eq!(c.point_at_arclen(0.0), c.p0);
        assert_eq!(c.point_at_arclen(-1.0), c.p0);
        assert_eq!(c.point_at_arclen(c.arclen()), c.p3);
        assert_eq!(c.point_at_arclen(f64::MAX), c.p3);
        assert_eq!(c.point_from_end(0.0), c.p3);
    }

    #[test]
    fn cubicbez_point_at_arclen_midpoint() {
        // Symmetric about x = 50, so the half-arc-length point lies on the
        // symmetry axis.
        let c = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        let half = c.point_at_arclen(c.arclen() / 2.0);
        assert!((half.x - 50.0).abs() < 1.0);
    }
}
