// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene files: the JSON shape list `contour check` reads and
//! `contour generate` writes.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use contour_geom::{ConvexPolygon, ShapeSnapshot, Transform2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One named shape. Either half may be absent; such shapes sit the tick out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneShape {
    /// Identity, unique within the scene.
    pub id: String,
    /// World placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform2>,
    /// Local-space geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<ConvexPolygon>,
}

/// A full scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Shapes in file order.
    pub shapes: Vec<SceneShape>,
}

impl Scene {
    /// Reads and validates a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read scene {}", path.display()))?;
        let scene: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse scene {}", path.display()))?;
        scene.validate()?;
        debug!(path = %path.display(), shapes = scene.shapes.len(), "scene loaded");
        Ok(scene)
    }

    /// Writes the scene as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        fs::write(path, data).with_context(|| format!("failed to write scene {}", path.display()))
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize scene")
    }

    /// Rejects duplicate ids; warns on polygons the tick would treat as convex
    /// even though they are not.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for shape in &self.shapes {
            if !seen.insert(shape.id.as_str()) {
                bail!("duplicate shape id {:?}", shape.id);
            }
            if let Some(poly) = &shape.polygon {
                if !poly.is_convex() {
                    warn!(id = %shape.id, "polygon is not convex; results may be wrong");
                }
            }
        }
        Ok(())
    }

    /// Per-tick views borrowing this scene, keyed by shape id.
    pub fn snapshots(&self) -> Vec<ShapeSnapshot<'_, &str>> {
        self.shapes
            .iter()
            .map(|shape| ShapeSnapshot {
                id: shape.id.as_str(),
                transform: shape.transform,
                polygon: shape.polygon.as_ref(),
            })
            .collect()
    }
}
