// burin/content/src/lib.rs
//
// Copyright © 2026 The Burin Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Glyph outlines, scan-convertible paths, and the tracer that turns the
//! former into the latter.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

pub mod fill;
pub mod glyph;
pub mod outline;
pub mod segment;
