// burin/color/src/lib.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! RGBA colors, in both 8-bits-per-channel and floating point form.
//!
//! All colors are non-premultiplied.

use std::fmt::{self, Debug, Formatter};

/// A color with 8-bit red, green, blue, and alpha channels.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> ColorU {
        ColorU { r, g, b, a }
    }

    /// Opaque black.
    #[inline]
    pub fn black() -> ColorU {
        ColorU::new(0, 0, 0, 255)
    }

    /// Opaque white.
    #[inline]
    pub fn white() -> ColorU {
        ColorU::new(255, 255, 255, 255)
    }

    /// Fully transparent black.
    #[inline]
    pub fn transparent_black() -> ColorU {
        ColorU::default()
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Converts to floating point, mapping 255 to 1.0.
    #[inline]
    pub fn to_f32(self) -> ColorF {
        ColorF::new(
            self.r as f32 * (1.0 / 255.0),
            self.g as f32 * (1.0 / 255.0),
            self.b as f32 * (1.0 / 255.0),
            self.a as f32 * (1.0 / 255.0),
        )
    }
}

impl Debug for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.a == 255 {
            write!(formatter, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                formatter,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// A color with 32-bit floating point red, green, blue, and alpha channels,
/// each nominally in [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorF {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl ColorF {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> ColorF {
        ColorF { r, g, b, a }
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.r
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.g
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.b
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.a
    }

    /// Linearly interpolates each channel between this color and `other`.
    #[inline]
    pub fn lerp(self, other: ColorF, t: f32) -> ColorF {
        ColorF {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Converts to 8 bits per channel, rounding and saturating.
    #[inline]
    pub fn to_u8(self) -> ColorU {
        ColorU {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
            a: channel_to_u8(self.a),
        }
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (value.max(0.0).min(1.0) * 255.0 + 0.5) as u8
}

/// Flattens a pixel buffer into raw RGBA bytes for handoff to an external
/// image encoder.
pub fn color_vec_to_u8_vec(colors: Vec<ColorU>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(colors.len() * 4);
    for color in colors {
        bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::{color_vec_to_u8_vec, ColorF, ColorU};

    #[test]
    fn test_conversions() {
        let color = ColorU::new(255, 0, 128, 255);
        let float = color.to_f32();
        assert_eq!(float.to_u8(), color);
        assert_eq!(ColorF::new(2.0, -1.0, 0.5, 1.0).to_u8(), ColorU::new(255, 0, 128, 255));
    }

    #[test]
    fn test_lerp() {
        let black = ColorU::black().to_f32();
        let white = ColorU::white().to_f32();
        assert_eq!(black.lerp(white, 0.0).to_u8(), ColorU::black());
        assert_eq!(black.lerp(white, 1.0).to_u8(), ColorU::white());
        assert_eq!(black.lerp(white, 0.5).to_u8().r, 128);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", ColorU::new(255, 0, 255, 255)), "#ff00ff");
        assert_eq!(format!("{:?}", ColorU::new(0, 0, 0, 0)), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_color_vec_to_u8_vec() {
        let colors = vec![ColorU::new(1, 2, 3, 4), ColorU::new(5, 6, 7, 8)];
        assert_eq!(color_vec_to_u8_vec(colors), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
