// burin/content/src/outline.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A compressed in-memory representation of a scan-convertible path.

use crate::segment::Segment;
use burin_geometry::line_segment::LineSegment2F;
use burin_geometry::rect::RectF;
use burin_geometry::vector::Vector2F;

/// A device-space path to be filled. Outlines consist of *contours* (a.k.a.
/// subpaths), which are filled according to a fill rule.
///
/// The names "outline" and "contour" come from the TrueType specification.
#[derive(Clone, Debug)]
pub struct Outline {
    contours: Vec<Contour>,
    bounds: RectF,
}

/// An individual closed subpath, stored as a series of on-curve endpoints
/// and quadratic control points.
#[derive(Clone, Debug)]
pub struct Contour {
    points: Vec<Vector2F>,
    flags: Vec<PointFlags>,
    bounds: RectF,
    closed: bool,
}

bitflags! {
    /// Flags that each point can have, indicating whether it is an on-curve
    /// endpoint or a quadratic Bézier control point.
    pub struct PointFlags: u8 {
        /// This point is the control point of a quadratic Bézier curve.
        const CONTROL_POINT = 0x01;
    }
}

impl Outline {
    /// Creates a new empty outline with no contours.
    #[inline]
    pub fn new() -> Outline {
        Outline {
            contours: vec![],
            bounds: RectF::default(),
        }
    }

    /// Adds a contour to this outline, ignoring empty ones.
    pub fn push_contour(&mut self, contour: Contour) {
        if contour.is_empty() {
            return;
        }
        if self.contours.is_empty() {
            self.bounds = contour.bounds;
        } else {
            self.bounds = self.bounds.union_rect(contour.bounds);
        }
        self.contours.push(contour);
    }

    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns true if this outline has no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Returns the dimensions of an axis-aligned rectangle that encloses
    /// every point of this outline, including control points.
    #[inline]
    pub fn bounds(&self) -> RectF {
        self.bounds
    }
}

impl Default for Outline {
    #[inline]
    fn default() -> Outline {
        Outline::new()
    }
}

impl Contour {
    /// Creates a new empty contour.
    #[inline]
    pub fn new() -> Contour {
        Contour {
            points: vec![],
            flags: vec![],
            bounds: RectF::default(),
            closed: false,
        }
    }

    /// Returns true if this contour has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of points (endpoints and control points) in this
    /// contour.
    #[inline]
    pub fn len(&self) -> u32 {
        self.points.len() as u32
    }

    #[inline]
    pub fn bounds(&self) -> RectF {
        self.bounds
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the position of the point with the given index.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn position_of(&self, index: u32) -> Vector2F {
        self.points[index as usize]
    }

    /// Returns true if the point with the given index is an on-curve
    /// endpoint, false if it is a control point.
    #[inline]
    pub fn point_is_endpoint(&self, index: u32) -> bool {
        !self.flags[index as usize].contains(PointFlags::CONTROL_POINT)
    }

    /// Adds a new on-curve point at the given position to this contour.
    #[inline]
    pub fn push_endpoint(&mut self, to: Vector2F) {
        self.push_point(to, PointFlags::empty());
    }

    /// Adds a quadratic Bézier curve to the given on-curve position via the
    /// given control point.
    #[inline]
    pub fn push_quadratic(&mut self, ctrl: Vector2F, to: Vector2F) {
        self.push_point(ctrl, PointFlags::CONTROL_POINT);
        self.push_point(to, PointFlags::empty());
    }

    /// Marks this contour as closed, which results in an implicit line from
    /// the last point back to the first.
    #[inline]
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Closes this contour with a quadratic Bézier curve back to the first
    /// point via the given control point.
    #[inline]
    pub fn close_quadratic(&mut self, ctrl: Vector2F) {
        self.push_point(ctrl, PointFlags::CONTROL_POINT);
        self.closed = true;
    }

    /// Returns an iterator over the segments in this contour.
    #[inline]
    pub fn iter(&self) -> ContourIter {
        ContourIter {
            contour: self,
            index: 1,
        }
    }

    fn push_point(&mut self, point: Vector2F, flags: PointFlags) {
        debug_assert!(!point.x().is_nan() && !point.y().is_nan());
        if self.points.is_empty() {
            self.bounds = RectF::from_points(point, point);
        } else {
            self.bounds = self.bounds.union_point(point);
        }
        self.points.push(point);
        self.flags.push(flags);
    }
}

impl Default for Contour {
    #[inline]
    fn default() -> Contour {
        Contour::new()
    }
}

/// Iterates over all segments within a contour, ending with the closing
/// segment back to the first point.
pub struct ContourIter<'a> {
    contour: &'a Contour,
    index: u32,
}

impl<'a> Iterator for ContourIter<'a> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let contour = self.contour;
        let len = contour.len();
        if self.index > len {
            return None;
        }

        if self.index == len {
            // The closing line segment. A quadratic close was already
            // emitted when its trailing control point was consumed below.
            self.index += 1;
            if !contour.closed || len < 2 {
                return None;
            }
            let from = contour.position_of(len - 1);
            return Some(Segment::line(LineSegment2F::new(
                from,
                contour.position_of(0),
            )));
        }

        let point0 = contour.position_of(self.index - 1);
        let point1_index = self.index;
        let point1 = contour.position_of(point1_index);
        self.index += 1;
        if contour.point_is_endpoint(point1_index) {
            return Some(Segment::line(LineSegment2F::new(point0, point1)));
        }

        if self.index == len {
            // `point1` is the trailing control point of a quadratic close;
            // its endpoint is the start of the contour.
            debug_assert!(contour.closed);
            self.index += 2;
            return Some(Segment::quadratic(
                LineSegment2F::new(point0, contour.position_of(0)),
                point1,
            ));
        }

        let point2_index = self.index;
        let point2 = contour.position_of(point2_index);
        self.index += 1;
        debug_assert!(contour.point_is_endpoint(point2_index));
        Some(Segment::quadratic(LineSegment2F::new(point0, point2), point1))
    }
}
