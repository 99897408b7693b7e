// burin/raster/src/render.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The one-glyph render pipeline: trace, scan-convert, composite, overlay.

use crate::canvas::Canvas;
use crate::options::{ConfigError, RasterOptions};
use crate::rasterizer::Rasterizer;
use burin_content::glyph::GlyphOutline;

/// Renders glyphs with a reusable rasterizer.
///
/// The options are fixed at construction; every `render` call reuses the
/// same accumulation buffer, clearing it first, so batches of glyphs avoid
/// reallocating per glyph.
pub struct Renderer {
    options: RasterOptions,
    rasterizer: Rasterizer,
}

impl Renderer {
    /// Creates a renderer, validating the configuration up front.
    pub fn new(options: RasterOptions) -> Result<Renderer, ConfigError> {
        options.validate()?;
        let rasterizer = Rasterizer::new(options.canvas_size);
        Ok(Renderer {
            options,
            rasterizer,
        })
    }

    #[inline]
    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    /// Renders one glyph to a fresh canvas.
    pub fn render(&mut self, glyph: &GlyphOutline) -> Canvas {
        let options = &self.options;
        let outline = glyph.trace(&options.transform);
        debug!(
            "rendering glyph: {} of {} contours traced",
            outline.contours().len(),
            glyph.contours().len()
        );

        self.rasterizer.clear();
        self.rasterizer.fill_outline(&outline);
        let mask = self.rasterizer.coverage(options.fill_rule);

        let mut canvas = Canvas::new(options.canvas_size, options.background);
        canvas.composite_mask(&mask, options.foreground);
        self.overlay_points(&mut canvas, glyph);
        canvas
    }

    /// Stamps a marker on every glyph point, colored by its on/off-curve
    /// flag. Points mapping outside the canvas are skipped.
    fn overlay_points(&self, canvas: &mut Canvas, glyph: &GlyphOutline) {
        for contour in glyph.contours() {
            for point in contour.points() {
                let pixel = self.options.transform.apply(point.position).floor();
                let color = if point.on_curve {
                    self.options.on_curve_marker
                } else {
                    self.options.off_curve_marker
                };
                canvas.set_pixel(pixel, color);
            }
        }
    }
}

/// Renders one glyph with the given options: traces its contours into a
/// path, scan-converts the path into a coverage mask, composites the
/// foreground over the background through the mask, and overlays the
/// control-point markers.
pub fn render_glyph(glyph: &GlyphOutline, options: &RasterOptions) -> Result<Canvas, ConfigError> {
    let mut renderer = Renderer::new(options.clone())?;
    Ok(renderer.render(glyph))
}
