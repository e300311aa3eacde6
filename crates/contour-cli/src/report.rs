// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering of one tick's outcome as a table or JSON.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use contour_geom::{polygon_area, CollisionResult, TickStats};
use serde::Serialize;

use crate::config::OutputFormat;

/// One overlapping pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionRow<'a> {
    /// Lesser id of the pair.
    pub first: &'a str,
    /// Greater id of the pair.
    pub second: &'a str,
    /// Overlap area; zero for edge or corner contact.
    pub area: f32,
    /// Overlap outline, present only when `area` reaches the report threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Vec<[f32; 2]>>,
}

/// Everything `contour check` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    /// Area threshold used for `region` outlines.
    pub min_area: f32,
    /// Overlapping pairs in id order.
    pub collisions: Vec<CollisionRow<'a>>,
    /// Stage counters.
    pub stats: TickStats,
}

impl<'a> Report<'a> {
    /// Builds a report from a tick keyed by scene ids.
    pub fn from_result(result: &CollisionResult<&'a str>, min_area: f32) -> Self {
        let collisions = result
            .pairs()
            .map(|pair| {
                let region = result.intersection(pair.first(), pair.second());
                let area = region.map_or(0.0, polygon_area);
                let outline = region
                    .filter(|_| area >= min_area)
                    .map(|r| r.iter().map(|v| v.to_array()).collect());
                CollisionRow {
                    first: pair.first(),
                    second: pair.second(),
                    area,
                    region: outline,
                }
            })
            .collect();
        Self {
            min_area,
            collisions,
            stats: result.stats(),
        }
    }

    /// Renders in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize report")
            }
        }
    }

    fn to_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["first", "second", "area", "region"]);
        for row in &self.collisions {
            let region = row
                .region
                .as_ref()
                .map_or_else(|| "-".to_owned(), |r| format!("{} vertices", r.len()));
            table.add_row(vec![
                Cell::new(row.first),
                Cell::new(row.second),
                Cell::new(format!("{:.3}", row.area)).set_alignment(CellAlignment::Right),
                Cell::new(region),
            ]);
        }
        let s = self.stats;
        format!(
            "{table}\n{} collision(s) among {} shape(s) ({} skipped); {} candidate(s), {} rejected by SAT, {} region(s)",
            s.collisions, s.shapes, s.skipped, s.candidates, s.sat_rejections, s.regions,
        )
    }
}
