// burin/content/src/glyph.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The glyph-space input model and the tracer that decompresses TrueType
//! quadratic B-spline contours into scan-convertible paths.
//!
//! A glyph outline arrives from an external font parser as contours of
//! flagged points in font units: on-curve points lie on the rendered
//! outline, off-curve points are quadratic Bézier control points, and two
//! consecutive off-curve points imply an on-curve point at their midpoint.

use crate::outline::{Contour, Outline};
use burin_geometry::fixed::Vector2Fx;
use burin_geometry::vector::{vec2f, Vector2F, Vector2I};

/// A single contour point in font units, flagged on- or off-curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphPoint {
    /// The position in font units. The y axis grows upward.
    pub position: Vector2I,
    /// True if the outline passes through this point; false if it is a
    /// quadratic Bézier control point.
    pub on_curve: bool,
}

impl GlyphPoint {
    #[inline]
    pub fn new(x: i32, y: i32, on_curve: bool) -> GlyphPoint {
        GlyphPoint {
            position: Vector2I::new(x, y),
            on_curve,
        }
    }
}

/// An ordered, implicitly closed sequence of glyph points.
#[derive(Clone, Debug, Default)]
pub struct GlyphContour {
    points: Vec<GlyphPoint>,
}

impl GlyphContour {
    #[inline]
    pub fn new() -> GlyphContour {
        GlyphContour::default()
    }

    #[inline]
    pub fn from_points(points: Vec<GlyphPoint>) -> GlyphContour {
        GlyphContour { points }
    }

    #[inline]
    pub fn push(&mut self, point: GlyphPoint) {
        self.points.push(point);
    }

    #[inline]
    pub fn points(&self) -> &[GlyphPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Horizontal metrics for a glyph, in font units.
///
/// These travel with the outline because the upstream font parser supplies
/// them together; scan conversion itself does not consume them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Font units per em square.
    pub units_per_em: u16,
    /// The horizontal advance width.
    pub advance_width: i32,
    /// The left side bearing.
    pub left_side_bearing: i32,
}

/// A complete glyph outline: zero or more contours plus metrics.
#[derive(Clone, Debug, Default)]
pub struct GlyphOutline {
    contours: Vec<GlyphContour>,
    metrics: GlyphMetrics,
}

impl GlyphOutline {
    #[inline]
    pub fn new(metrics: GlyphMetrics) -> GlyphOutline {
        GlyphOutline {
            contours: vec![],
            metrics,
        }
    }

    /// Builds an outline from the packed TrueType `glyf` layout: a flat
    /// point array plus the inclusive index of each contour's last point.
    ///
    /// Contour end indices that are out of range or non-monotonic are
    /// skipped.
    pub fn from_packed(
        points: &[GlyphPoint],
        contour_ends: &[usize],
        metrics: GlyphMetrics,
    ) -> GlyphOutline {
        let mut outline = GlyphOutline::new(metrics);
        let mut start = 0;
        for &end in contour_ends {
            if end >= points.len() || end < start {
                warn!("skipping malformed contour range {}..={}", start, end);
                start = end.wrapping_add(1);
                continue;
            }
            outline.push_contour(GlyphContour::from_points(points[start..=end].to_vec()));
            start = end + 1;
        }
        outline
    }

    #[inline]
    pub fn push_contour(&mut self, contour: GlyphContour) {
        self.contours.push(contour);
    }

    #[inline]
    pub fn contours(&self) -> &[GlyphContour] {
        &self.contours
    }

    #[inline]
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    /// Traces every contour of this glyph into a device-space outline.
    ///
    /// Each contour is decompressed independently; malformed contours are
    /// skipped so the rest of the glyph still renders.
    pub fn trace(&self, transform: &GlyphTransform) -> Outline {
        let mut outline = Outline::new();
        for glyph_contour in &self.contours {
            if let Some(contour) = trace_contour(glyph_contour, transform) {
                outline.push_contour(contour);
            }
        }
        outline
    }
}

/// The fixed affine map from glyph space to device space for one render:
/// a uniform scale and an origin offset, with the y axis inverted (glyph
/// y grows upward, device y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphTransform {
    scale: f32,
    offset: Vector2F,
}

impl GlyphTransform {
    #[inline]
    pub fn new(scale: f32, offset: Vector2F) -> GlyphTransform {
        GlyphTransform { scale, offset }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn offset(&self) -> Vector2F {
        self.offset
    }

    /// Maps a glyph-space position to fixed-point device coordinates.
    #[inline]
    pub fn apply(&self, position: Vector2I) -> Vector2Fx {
        Vector2Fx::from_f32(vec2f(
            self.offset.x() + position.x() as f32 * self.scale,
            self.offset.y() - position.y() as f32 * self.scale,
        ))
    }
}

/// Decompresses one quadratic B-spline contour into a closed path contour.
///
/// Returns `None` for contours with no renderable geometry.
fn trace_contour(glyph_contour: &GlyphContour, transform: &GlyphTransform) -> Option<Contour> {
    let points = glyph_contour.points();
    if points.len() < 2 {
        warn!("skipping contour with fewer than 2 points");
        return None;
    }
    if !points.iter().any(|point| point.on_curve) {
        warn!("skipping contour with no on-curve points");
        return None;
    }

    let device = |index: usize| transform.apply(points[index].position);
    let last = points.len() - 1;

    // The walk starts at an on-curve point. TrueType guarantees the first
    // point is on-curve for most outlines, but the compact format also
    // permits an off-curve start: then either the last point is on-curve
    // and the walk is rotated to begin there, or both ends are off-curve
    // and the implied on-curve midpoint between them opens the contour.
    let (start, walk) = if points[0].on_curve {
        (device(0), 1..points.len())
    } else if points[last].on_curve {
        (device(last), 0..last)
    } else {
        (device(0).midpoint(device(last)), 0..points.len())
    };

    let mut contour = Contour::new();
    contour.push_endpoint(start.to_f32());

    // The pending control point is the tracer's whole state: an off-curve
    // point seen but not yet attached to an endpoint.
    let mut pending_ctrl: Option<Vector2Fx> = None;
    for index in walk {
        let position = device(index);
        if points[index].on_curve {
            match pending_ctrl.take() {
                None => contour.push_endpoint(position.to_f32()),
                Some(ctrl) => contour.push_quadratic(ctrl.to_f32(), position.to_f32()),
            }
        } else {
            match pending_ctrl.replace(position) {
                None => {}
                Some(ctrl) => {
                    // Two consecutive off-curve points imply an on-curve
                    // point at their midpoint.
                    let implied = ctrl.midpoint(position);
                    contour.push_quadratic(ctrl.to_f32(), implied.to_f32());
                }
            }
        }
    }

    // Close back to the start point.
    match pending_ctrl {
        None => contour.close(),
        Some(ctrl) => contour.close_quadratic(ctrl.to_f32()),
    }
    Some(contour)
}

#[cfg(test)]
mod tests {
    use super::{GlyphContour, GlyphMetrics, GlyphOutline, GlyphPoint, GlyphTransform};
    use crate::segment::{Segment, SegmentKind};
    use burin_geometry::vector::{vec2f, vec2i};

    fn identity() -> GlyphTransform {
        GlyphTransform::new(1.0, vec2f(0.0, 0.0))
    }

    fn trace_one(points: Vec<GlyphPoint>, transform: &GlyphTransform) -> Vec<Segment> {
        let mut outline = GlyphOutline::new(GlyphMetrics::default());
        outline.push_contour(GlyphContour::from_points(points));
        let traced = outline.trace(transform);
        assert_eq!(traced.contours().len(), 1);
        traced.contours()[0].iter().collect()
    }

    #[test]
    fn test_transform_maps_and_inverts_y() {
        let transform = GlyphTransform::new(0.25, vec2f(20.0, 380.0));
        assert_eq!(transform.apply(vec2i(0, 0)).to_f32(), vec2f(20.0, 380.0));
        assert_eq!(transform.apply(vec2i(400, 400)).to_f32(), vec2f(120.0, 280.0));
        assert_eq!(transform.apply(vec2i(-80, -80)).to_f32(), vec2f(0.0, 400.0));
    }

    #[test]
    fn test_all_on_curve_emits_lines_only() {
        // N on-curve points produce N - 1 lines plus the closing line.
        let segments = trace_one(
            vec![
                GlyphPoint::new(0, 0, true),
                GlyphPoint::new(10, 0, true),
                GlyphPoint::new(10, 10, true),
                GlyphPoint::new(0, 10, true),
            ],
            &identity(),
        );
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|segment| segment.is_line()));
        assert_eq!(segments[3].baseline.to(), vec2f(0.0, 0.0));
    }

    #[test]
    fn test_single_off_curve_emits_one_quadratic() {
        let segments = trace_one(
            vec![
                GlyphPoint::new(0, 0, true),
                GlyphPoint::new(5, 10, false),
                GlyphPoint::new(10, 0, true),
            ],
            &identity(),
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Quadratic);
        assert_eq!(segments[0].ctrl, vec2f(5.0, -10.0));
        assert!(segments[1].is_line());
    }

    #[test]
    fn test_consecutive_off_curve_points_synthesize_midpoint() {
        let segments = trace_one(
            vec![
                GlyphPoint::new(0, 0, true),
                GlyphPoint::new(10, 0, false),
                GlyphPoint::new(20, 10, false),
                GlyphPoint::new(20, 20, true),
            ],
            &identity(),
        );
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentKind::Quadratic);
        // The implied endpoint is exactly the mean of the two control
        // points (y negated by the device-space flip).
        assert_eq!(segments[0].baseline.to(), vec2f(15.0, -5.0));
        assert_eq!(segments[1].kind, SegmentKind::Quadratic);
        assert_eq!(segments[1].ctrl, vec2f(20.0, -10.0));
        assert!(segments[2].is_line());
    }

    #[test]
    fn test_off_curve_close_uses_pending_control() {
        let segments = trace_one(
            vec![
                GlyphPoint::new(0, 0, true),
                GlyphPoint::new(10, 0, true),
                GlyphPoint::new(5, 5, false),
            ],
            &identity(),
        );
        assert_eq!(segments.len(), 2);
        assert!(segments[0].is_line());
        assert_eq!(segments[1].kind, SegmentKind::Quadratic);
        assert_eq!(segments[1].ctrl, vec2f(5.0, -5.0));
        assert_eq!(segments[1].baseline.to(), vec2f(0.0, 0.0));
    }

    #[test]
    fn test_off_curve_start_rotates_to_last_on_curve() {
        let segments = trace_one(
            vec![
                GlyphPoint::new(5, 5, false),
                GlyphPoint::new(10, 0, true),
                GlyphPoint::new(0, 0, true),
            ],
            &identity(),
        );
        // Walk starts from the trailing on-curve point; the leading
        // off-curve point becomes an ordinary interior control point.
        assert_eq!(segments[0].kind, SegmentKind::Quadratic);
        assert_eq!(segments[0].baseline.from(), vec2f(0.0, 0.0));
        assert_eq!(segments[0].ctrl, vec2f(5.0, -5.0));
        assert_eq!(segments[0].baseline.to(), vec2f(10.0, 0.0));
    }

    #[test]
    fn test_off_curve_start_and_end_synthesize_start() {
        let segments = trace_one(
            vec![
                GlyphPoint::new(0, 10, false),
                GlyphPoint::new(10, 10, true),
                GlyphPoint::new(10, 0, false),
            ],
            &identity(),
        );
        // The implied start is the midpoint of the first and last points.
        assert_eq!(segments[0].baseline.from(), vec2f(5.0, -5.0));
        assert_eq!(segments[0].kind, SegmentKind::Quadratic);
        assert_eq!(segments[0].ctrl, vec2f(0.0, -10.0));
        let closing = segments.last().unwrap();
        assert_eq!(closing.kind, SegmentKind::Quadratic);
        assert_eq!(closing.baseline.to(), vec2f(5.0, -5.0));
    }

    #[test]
    fn test_malformed_contours_are_skipped() {
        let mut outline = GlyphOutline::new(GlyphMetrics::default());
        outline.push_contour(GlyphContour::new());
        outline.push_contour(GlyphContour::from_points(vec![GlyphPoint::new(3, 3, true)]));
        outline.push_contour(GlyphContour::from_points(vec![
            GlyphPoint::new(0, 0, false),
            GlyphPoint::new(10, 0, false),
            GlyphPoint::new(10, 10, false),
        ]));
        outline.push_contour(GlyphContour::from_points(vec![
            GlyphPoint::new(0, 0, true),
            GlyphPoint::new(10, 0, true),
            GlyphPoint::new(10, 10, true),
        ]));

        let traced = outline.trace(&identity());
        assert_eq!(traced.contours().len(), 1);
        assert_eq!(traced.contours()[0].len(), 3);
    }

    #[test]
    fn test_from_packed() {
        let points = [
            GlyphPoint::new(0, 0, true),
            GlyphPoint::new(10, 0, true),
            GlyphPoint::new(10, 10, true),
            GlyphPoint::new(100, 100, true),
            GlyphPoint::new(110, 100, true),
            GlyphPoint::new(110, 110, true),
        ];
        let metrics = GlyphMetrics {
            units_per_em: 2048,
            advance_width: 120,
            left_side_bearing: 0,
        };
        let outline = GlyphOutline::from_packed(&points, &[2, 5], metrics);
        assert_eq!(outline.contours().len(), 2);
        assert_eq!(outline.contours()[0].len(), 3);
        assert_eq!(outline.contours()[1].points()[0], GlyphPoint::new(100, 100, true));
        assert_eq!(outline.metrics().units_per_em, 2048);

        // An end index past the point array is ignored.
        let outline = GlyphOutline::from_packed(&points, &[2, 9], metrics);
        assert_eq!(outline.contours().len(), 1);
    }
}
