// Copyright 2026 the Glato Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::{ParamCurve, ParamCurveArclen, Point};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>, p2: impl Into<Point>) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Is this curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let x = mt * mt * self.p0.x + 2.0 * mt * t * self.p1.x + t * t * self.p2.x;
        let y = mt * mt * self.p0.y + 2.0 * mt * t * self.p1.y + t * t * self.p2.y;
        Point::new(x, y)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveArclen for QuadBez {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadbez_eval() {
        let q = QuadBez::new((0.0, 0.0), (50.0, 50.0), (100.0, 0.0));
        assert_eq!(q.eval(0.0), q.p0);
        assert_eq!(q.eval(1.0), q.p2);
        // Apex of the symmetric parabola.
        assert_eq!(q.eval(0.5), Point::new(50.0, 25.0));
    }

    #[test]
    fn quadbez_arclen() {
        // y = x^2 over [0, 1], scaled up; closed-form length of the
        // parabola's arc.
        let q = QuadBez::new((0.0, 0.0), (0.0, 0.5), (1.0, 1.0));
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let error = q.arclen() - true_arclen;
        assert!(error.abs() < 1e-2, "error {error:e}");

        // More samples tighten the approximation.
        let coarse = q.arclen_to_with_steps(1.0, 4);
        let fine = q.arclen_to_with_steps(1.0, 256);
        assert!((fine - true_arclen).abs() < (coarse - true_arclen).abs());
    }

    #[test]
    fn quadbez_arclen_monotonic() {
        let q = QuadBez::new((0.0, 0.0), (0.0, 50.0), (100.0, 100.0));
        let mut last = 0.0;
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let len = q.arclen_to(t);
            assert!(len >= last, "arclen decreased at t={t}");
            last = len;
        }
    }

    #[test]
    fn quadbez_point_at_arclen_boundaries() {
        let q = QuadBez::new((0.0, 0.0), (0.0, 50.0), (100.0, 100.0));
        assert_eq!(q.point_at_arclen(0.0), q.p0);
        assert_eq!(q.point_at_arclen(-5.0), q.p0);
        assert_eq!(q.point_at_arclen(q.arclen()), q.p2);
        assert_eq!(q.point_at_arclen(q.arclen() + 5.0), q.p2);
        assert_eq!(q.point_from_end(0.0), q.p2);
    }

    #[test]
    fn quadbez_point_at_arclen_midpoint() {
        // Symmetric about x = 50, so the half-arc-length point is the apex.
        let q = QuadBez::new((0.0, 0.0), (50.0, 50.0), (100.0, 0.0));
        let half = q.point_at_arclen(q.arclen() / 2.0);
        assert!(half.distance(Point::new(50.0, 25.0)) < 1.0);
    }

    #[test]
    fn quadbez_point_at_arclen_degenerate_line() {
        // Control point on the chord: the "curve" is a straight segment and
        // arc length walking is exact up to the bisection tolerance.
        let q = QuadBez::new((0.0, 0.0), (50.0, 0.0), (100.0, 0.0));
        let p = q.point_at_arclen(30.0);
        assert!((p.x - 30.0).abs() < crate::ARCLEN_TOLERANCE);
        assert_eq!(p.y, 0.0);
    }
}
