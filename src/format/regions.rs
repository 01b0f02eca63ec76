//! Wire format for region lists.
//!
//! A saved session is a JSON array of `{"nodes": [{"x": .., "y": ..}, ..]}`
//! objects. Only geometry is stored; every decoded region comes back closed.

use regionmark_ui::Point;
use serde::{Deserialize, Serialize};

use super::error::FormatError;
use crate::model::{Region, RegionId};

/// A node as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeEntry {
    pub x: f32,
    pub y: f32,
}

/// A region as stored on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEntry {
    pub nodes: Vec<NodeEntry>,
}

impl RegionEntry {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| Point::new(n.x, n.y))
    }

    /// Build an owned, closed region from this entry.
    pub fn into_region(self, id: RegionId) -> Region {
        Region::closed_from_points(id, self.points())
    }
}

impl From<&Region> for RegionEntry {
    fn from(region: &Region) -> Self {
        Self {
            nodes: region
                .nodes()
                .iter()
                .map(|n| NodeEntry { x: n.x, y: n.y })
                .collect(),
        }
    }
}

// Permissive mirrors of the wire types; presence of every field is checked
// explicitly so errors can name the offending entry.
#[derive(Deserialize)]
struct RawRegion {
    nodes: Option<Vec<RawNode>>,
}

#[derive(Deserialize)]
struct RawNode {
    x: Option<f32>,
    y: Option<f32>,
}

impl RawRegion {
    fn validate(self, region: usize) -> Result<RegionEntry, FormatError> {
        let raw_nodes = self
            .nodes
            .ok_or(FormatError::MalformedRegion { region })?;

        let nodes = raw_nodes
            .into_iter()
            .enumerate()
            .map(|(node, raw)| {
                let x = raw.x.ok_or(FormatError::MalformedNode {
                    region,
                    node,
                    field: "x",
                })?;
                let y = raw.y.ok_or(FormatError::MalformedNode {
                    region,
                    node,
                    field: "y",
                })?;
                Ok(NodeEntry { x, y })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        Ok(RegionEntry { nodes })
    }
}

/// Encode regions into the save payload.
pub fn encode_regions<'a>(
    regions: impl IntoIterator<Item = &'a Region>,
) -> Result<String, FormatError> {
    let entries: Vec<RegionEntry> = regions.into_iter().map(RegionEntry::from).collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Decode a save payload.
///
/// Fails on the first malformed entry; nothing is returned for a partially
/// valid payload.
pub fn decode_regions(json: &str) -> Result<Vec<RegionEntry>, FormatError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(FormatError::invalid_format("expected an array of regions"));
    }

    let raw: Vec<RawRegion> = serde_json::from_value(value)?;
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| r.validate(i))
        .collect()
}

/// Encode a single region as a `{"nodes": [..]}` object.
pub fn encode_region(region: &Region) -> Result<String, FormatError> {
    Ok(serde_json::to_string(&RegionEntry::from(region))?)
}

/// Decode a single `{"nodes": [..]}` object.
pub fn decode_region(json: &str) -> Result<RegionEntry, FormatError> {
    let raw: RawRegion = serde_json::from_str(json)?;
    raw.validate(0)
}
