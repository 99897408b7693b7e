// burin/geometry/src/line_segment.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use crate::vector::Vector2F;

/// A line segment from one device-space point to another.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineSegment2F {
    from: Vector2F,
    to: Vector2F,
}

impl LineSegment2F {
    #[inline]
    pub fn new(from: Vector2F, to: Vector2F) -> LineSegment2F {
        LineSegment2F { from, to }
    }

    #[inline]
    pub fn from(self) -> Vector2F {
        self.from
    }

    #[inline]
    pub fn to(self) -> Vector2F {
        self.to
    }

    #[inline]
    pub fn from_x(self) -> f32 {
        self.from.x()
    }

    #[inline]
    pub fn from_y(self) -> f32 {
        self.from.y()
    }

    #[inline]
    pub fn to_x(self) -> f32 {
        self.to.x()
    }

    #[inline]
    pub fn to_y(self) -> f32 {
        self.to.y()
    }

    #[inline]
    pub fn midpoint(self) -> Vector2F {
        self.from.lerp(self.to, 0.5)
    }

    /// The signed vector from the start point to the endpoint.
    #[inline]
    pub fn vector(self) -> Vector2F {
        self.to - self.from
    }
}
