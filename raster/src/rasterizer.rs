// burin/raster/src/rasterizer.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Anti-aliased scan conversion by signed-area accumulation.
//!
//! Every line segment deposits its exact analytic per-pixel x-coverage,
//! signed by winding direction, into an accumulation buffer; the per-row
//! prefix sum of that buffer is the fractional winding number at each
//! pixel, which the fill rule maps to coverage. Quadratic segments are
//! flattened to line segments first.

use crate::mask::CoverageMask;
use burin_content::fill::FillRule;
use burin_content::outline::Outline;
use burin_content::segment::SegmentKind;
use burin_geometry::line_segment::LineSegment2F;
use burin_geometry::vector::{Vector2F, Vector2I};

/// A quadratic segment is considered flat once its control point deviates
/// from the chord midpoint by no more than this many pixels. The curve
/// itself deviates by half as much.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// Bail out of subdivision at this depth no matter what.
const MAX_SUBDIVISION_DEPTH: u8 = 8;

/// Scan-converts outlines into coverage masks for one canvas size.
///
/// The accumulation buffer is an owned, reusable resource: call `clear()`
/// between glyphs to rasterize several with one instance.
pub struct Rasterizer {
    size: Vector2I,
    accum: Vec<f32>,
}

impl Rasterizer {
    /// Creates a rasterizer for the given canvas size.
    pub fn new(size: Vector2I) -> Rasterizer {
        debug_assert!(size.x() >= 0 && size.y() >= 0);
        Rasterizer {
            size,
            accum: vec![0.0; size.area().max(0) as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> Vector2I {
        self.size
    }

    /// Resets the accumulation buffer so this instance can scan-convert
    /// another outline.
    pub fn clear(&mut self) {
        for value in &mut self.accum {
            *value = 0.0;
        }
    }

    /// Accumulates coverage for every segment of the given outline.
    ///
    /// An empty outline accumulates nothing, which resolves to an all-zero
    /// mask.
    pub fn fill_outline(&mut self, outline: &Outline) {
        for contour in outline.contours() {
            for segment in contour.iter() {
                match segment.kind {
                    SegmentKind::Line => self.accumulate_line(segment.baseline),
                    SegmentKind::Quadratic => self.accumulate_quadratic(
                        segment.baseline.from(),
                        segment.ctrl,
                        segment.baseline.to(),
                        0,
                    ),
                }
            }
        }
    }

    /// Resolves the accumulated winding into a coverage mask under the
    /// given fill rule.
    pub fn coverage(&self, fill_rule: FillRule) -> CoverageMask {
        let width = self.size.x().max(0) as usize;
        let mut data = vec![0; self.accum.len()];
        for y in 0..self.size.y().max(0) as usize {
            let row = y * width;
            let mut winding = 0.0;
            for x in 0..width {
                winding += self.accum[row + x];
                let coverage = match fill_rule {
                    FillRule::Winding => winding.abs().min(1.0),
                    FillRule::EvenOdd => {
                        let wrapped = winding.abs() % 2.0;
                        if wrapped > 1.0 {
                            2.0 - wrapped
                        } else {
                            wrapped
                        }
                    }
                };
                data[row + x] = (coverage * 255.0 + 0.5) as u8;
            }
        }
        CoverageMask::from_data(self.size, data)
    }

    fn accumulate_quadratic(&mut self, from: Vector2F, ctrl: Vector2F, to: Vector2F, depth: u8) {
        let deviation = ctrl - from.lerp(to, 0.5);
        if depth >= MAX_SUBDIVISION_DEPTH
            || deviation.square_length() <= FLATTEN_TOLERANCE * FLATTEN_TOLERANCE
        {
            return self.accumulate_line(LineSegment2F::new(from, to));
        }

        // De Casteljau split at t = 1/2.
        let ctrl0 = from.lerp(ctrl, 0.5);
        let ctrl1 = ctrl.lerp(to, 0.5);
        let mid = ctrl0.lerp(ctrl1, 0.5);
        self.accumulate_quadratic(from, ctrl0, mid, depth + 1);
        self.accumulate_quadratic(mid, ctrl1, to, depth + 1);
    }

    /// Deposits the signed per-pixel x-coverage of one line segment.
    fn accumulate_line(&mut self, line: LineSegment2F) {
        let height = self.size.y() as f32;
        let (from, to) = (line.from(), line.to());
        if from.y() == to.y() {
            // Horizontal edges never change the winding.
            return;
        }
        let (dir, top, bottom) = if from.y() < to.y() {
            (1.0, from, to)
        } else {
            (-1.0, to, from)
        };
        if bottom.y() <= 0.0 || top.y() >= height {
            return;
        }
        let dxdy = (bottom.x() - top.x()) / (bottom.y() - top.y());

        let y0 = top.y().max(0.0);
        let y1 = bottom.y().min(height);
        let mut x = top.x() + (y0 - top.y()) * dxdy;

        let row_stride = self.size.x().max(0) as usize;
        for yi in y0 as usize..y1.ceil() as usize {
            let row = yi * row_stride;
            let row_top = (yi as f32).max(y0);
            let row_bottom = ((yi + 1) as f32).min(y1);
            let dy = row_bottom - row_top;
            let xnext = x + dxdy * dy;
            let d = dy * dir;
            let (x0, x1) = if x < xnext { (x, xnext) } else { (xnext, x) };

            let x0floor = x0.floor();
            let x0i = x0floor as i32;
            let x1ceil = x1.ceil();
            let x1i = x1ceil as i32;
            if x1i <= x0i + 1 {
                // The segment crosses this row within one pixel column;
                // split its area between that column and the next by the
                // mean x position.
                let xmf = 0.5 * (x + xnext) - x0floor;
                self.deposit(row, x0i, d - d * xmf);
                self.deposit(row, x0i + 1, d * xmf);
            } else {
                // The crossing spans several columns: trapezoidal area for
                // the partial end columns, a constant slab for the middle.
                let s = 1.0 / (x1 - x0);
                let x0f = x0 - x0floor;
                let a0 = 0.5 * s * (1.0 - x0f) * (1.0 - x0f);
                let x1f = x1 - x1ceil + 1.0;
                let am = 0.5 * s * x1f * x1f;
                self.deposit(row, x0i, d * a0);
                if x1i == x0i + 2 {
                    self.deposit(row, x0i + 1, d * (1.0 - a0 - am));
                } else {
                    let a1 = s * (1.5 - x0f);
                    self.deposit(row, x0i + 1, d * (a1 - a0));
                    for xi in x0i + 2..x1i - 1 {
                        self.deposit(row, xi, d * s);
                    }
                    let a2 = a1 + (x1i - x0i - 3) as f32 * s;
                    self.deposit(row, x1i - 1, d * (1.0 - a2 - am));
                }
                self.deposit(row, x1i, d * am);
            }
            x = xnext;
        }
    }

    #[inline]
    fn deposit(&mut self, row: usize, column: i32, delta: f32) {
        // Winding left of the canvas is already active when the prefix sum
        // enters the row, so it lands in column 0; winding at or past the
        // right edge can never reach a visible pixel, so it is dropped.
        if column >= self.size.x() {
            return;
        }
        self.accum[row + column.max(0) as usize] += delta;
    }
}
