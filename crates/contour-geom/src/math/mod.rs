// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Planar math helpers: the `Vec2` value type, angle conversion, and a
//! seeded PRNG for reproducible scenes.
//!
//! All operations use `f32`.

use std::f32::consts::TAU;

mod prng;
mod vec2;

pub use prng::Prng;
pub use vec2::Vec2;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
