// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised while constructing geometry.
///
/// Only constructors fail. Once a shape exists, the per-tick pipeline never
/// returns an error; anomalies degrade to empty results instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// A vertex (or offset) contained a NaN or infinite component.
    #[error("non-finite coordinate at vertex {index}")]
    NonFiniteVertex {
        /// Position of the offending vertex in the input slice.
        index: usize,
    },
    /// Regular polygons need at least three sides.
    #[error("regular polygon needs at least 3 sides, got {0}")]
    InvalidSides(usize),
    /// Regular polygon radius must be finite and strictly positive.
    #[error("invalid radius: {0}")]
    InvalidRadius(f32),
    /// An AABB was given a min corner above its max corner.
    #[error("invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds {
        /// Requested minimum corner.
        min: [f32; 2],
        /// Requested maximum corner.
        max: [f32; 2],
    },
}
