// burin/raster/src/options.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration for a glyph render.

use burin_color::ColorU;
use burin_content::fill::FillRule;
use burin_content::glyph::GlyphTransform;
use burin_geometry::vector::{vec2f, vec2i, Vector2I};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Everything one render needs beyond the glyph itself. All parameters are
/// explicit; there is no global state.
#[derive(Clone, Debug)]
pub struct RasterOptions {
    /// The canvas size in device pixels. Both dimensions must be positive.
    pub canvas_size: Vector2I,
    /// The glyph-space to device-space map.
    pub transform: GlyphTransform,
    /// The color the canvas is filled with before compositing.
    pub background: ColorU,
    /// The fill color, composited through the coverage mask. Its alpha
    /// scales the coverage.
    pub foreground: ColorU,
    /// The marker color stamped on on-curve points.
    pub on_curve_marker: ColorU,
    /// The marker color stamped on off-curve points.
    pub off_curve_marker: ColorU,
    /// How winding resolves to coverage.
    pub fill_rule: FillRule,
}

impl RasterOptions {
    /// Checks this configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size.x() <= 0 || self.canvas_size.y() <= 0 {
            return Err(ConfigError::InvalidCanvasSize(self.canvas_size));
        }
        if !self.transform.scale().is_finite() {
            return Err(ConfigError::InvalidScale(self.transform.scale()));
        }
        Ok(())
    }
}

impl Default for RasterOptions {
    /// A 400×400 canvas with the glyph at quarter scale: half-transparent
    /// black ink on white, red on-curve and cyan off-curve markers.
    fn default() -> RasterOptions {
        RasterOptions {
            canvas_size: vec2i(400, 400),
            transform: GlyphTransform::new(0.25, vec2f(20.0, 380.0)),
            background: ColorU::white(),
            foreground: ColorU::new(0, 0, 0, 128),
            on_curve_marker: ColorU::new(255, 0, 0, 255),
            off_curve_marker: ColorU::new(0, 255, 255, 255),
            fill_rule: FillRule::Winding,
        }
    }
}

/// A fatal configuration problem, reported before any rasterization work
/// begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The canvas has a zero or negative dimension.
    InvalidCanvasSize(Vector2I),
    /// The glyph transform's scale factor is not finite.
    InvalidScale(f32),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            ConfigError::InvalidCanvasSize(size) => write!(
                formatter,
                "canvas dimensions must be positive, got {}×{}",
                size.x(),
                size.y()
            ),
            ConfigError::InvalidScale(scale) => {
                write!(formatter, "glyph scale must be finite, got {}", scale)
            }
        }
    }
}

impl Error for ConfigError {}
