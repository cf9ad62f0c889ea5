//! Mind Map - tree of labeled, described nodes
//!
//! Wire types shared by every generation endpoint, the structural check
//! applied to model output, and the radial layout the UI draws.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::types::User;

/// Declared layout style of a map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Hierarchical,
    Radial,
    Flowchart,
    Network,
    Timeline,
    Concept,
    Organizational,
    Circular,
}

impl ChartType {
    pub const ALL: [ChartType; 8] = [
        ChartType::Hierarchical,
        ChartType::Radial,
        ChartType::Flowchart,
        ChartType::Network,
        ChartType::Timeline,
        ChartType::Concept,
        ChartType::Organizational,
        ChartType::Circular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Hierarchical => "hierarchical",
            ChartType::Radial => "radial",
            ChartType::Flowchart => "flowchart",
            ChartType::Network => "network",
            ChartType::Timeline => "timeline",
            ChartType::Concept => "concept",
            ChartType::Organizational => "organizational",
            ChartType::Circular => "circular",
        }
    }

    /// Parse a client or model supplied tag; unknown and blank values map to the default
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(h) => h.parse().unwrap_or_else(|_| {
                tracing::debug!(chart_type = h, "unknown chart type, using hierarchical");
                ChartType::default()
            }),
            None => ChartType::default(),
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ChartType::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("unknown chart type: {}", s))
    }
}

impl<'de> Deserialize<'de> for ChartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(ChartType::from_hint(raw.as_deref()))
    }
}

/// Node in the mind map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
    #[serde(deserialize_with = "level_from_any")]
    pub level: u32,
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Horizontal position in percent of the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical position in percent of the canvas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl MindMapNode {
    pub fn root(id: &str, text: &str, description: String) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            level: 0,
            parent_id: None,
            description,
            color: None,
            x: None,
            y: None,
        }
    }

    pub fn child(id: &str, parent_id: &str, level: u32, text: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            level,
            parent_id: Some(parent_id.to_string()),
            description: description.to_string(),
            color: None,
            x: None,
            y: None,
        }
    }
}

/// Generated mind map, as returned by the generation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    pub title: String,
    #[serde(default)]
    pub chart_type: ChartType,
    pub nodes: Vec<MindMapNode>,
}

/// Structural defects in a generated map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    Empty,
    RootCount(usize),
    DuplicateId(String),
    EmptyText(String),
    MissingParent(String),
    UnknownParent { id: String, parent_id: String },
    ParentNotAbove { id: String, parent_id: String },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Empty => write!(f, "map has no nodes"),
            TreeError::RootCount(n) => write!(f, "expected exactly one root node, found {}", n),
            TreeError::DuplicateId(id) => write!(f, "duplicate node id {}", id),
            TreeError::EmptyText(id) => write!(f, "node {} has empty text", id),
            TreeError::MissingParent(id) => write!(f, "node {} has no parentId", id),
            TreeError::UnknownParent { id, parent_id } => {
                write!(f, "node {} references unknown parent {}", id, parent_id)
            }
            TreeError::ParentNotAbove { id, parent_id } => {
                write!(f, "node {} is not below its parent {}", id, parent_id)
            }
        }
    }
}

impl std::error::Error for TreeError {}

impl MindMap {
    /// Check the tree invariants: one root without parent, unique ids,
    /// non-empty labels, every parent resolving to a shallower node.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut by_id: HashMap<&str, &MindMapNode> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if by_id.insert(node.id.as_str(), node).is_some() {
                return Err(TreeError::DuplicateId(node.id.clone()));
            }
        }

        let roots = self
            .nodes
            .iter()
            .filter(|n| n.level == 0 && n.parent_id.is_none())
            .count();
        if roots != 1 {
            return Err(TreeError::RootCount(roots));
        }

        for node in &self.nodes {
            if node.text.trim().is_empty() {
                return Err(TreeError::EmptyText(node.id.clone()));
            }
            if node.level == 0 && node.parent_id.is_none() {
                continue;
            }
            let parent_id = node
                .parent_id
                .as_deref()
                .ok_or_else(|| TreeError::MissingParent(node.id.clone()))?;
            let parent = by_id.get(parent_id).ok_or_else(|| TreeError::UnknownParent {
                id: node.id.clone(),
                parent_id: parent_id.to_string(),
            })?;
            if parent.level >= node.level {
                return Err(TreeError::ParentNotAbove {
                    id: node.id.clone(),
                    parent_id: parent_id.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.level == 0 && n.parent_id.is_none())
    }

    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a MindMapNode> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.parent_id.as_deref() == Some(id))
    }
}

// ============ Layout ============

/// Radius of the level-1 ring, in percent of the canvas
const BRANCH_RADIUS: f64 = 250.0 / 8.0;
/// Distance of a child from its parent, in percent of the canvas
const CHILD_RADIUS: f64 = 140.0 / 8.0;
/// Angular gap between siblings fanned around a parent
const CHILD_SPREAD: f64 = 0.6;
const CENTER: f64 = 50.0;

/// Assign `x`/`y` to every node reachable from the root.
///
/// Root sits at the center, level-1 nodes are spaced evenly on a circle and
/// deeper nodes fan out around their parent's angle at a smaller radius.
/// Nodes whose parent cannot be resolved keep no position.
pub fn apply_layout(map: &mut MindMap) {
    let Some(root_id) = map.root().map(|r| r.id.clone()) else {
        return;
    };

    // id -> (x, y, angle)
    let mut placed: HashMap<String, (f64, f64, f64)> = HashMap::new();
    placed.insert(root_id.clone(), (CENTER, CENTER, 0.0));

    let branches: Vec<String> = map
        .nodes
        .iter()
        .filter(|n| n.level == 1)
        .map(|n| n.id.clone())
        .collect();
    let count = branches.len().max(1) as f64;
    for (index, id) in branches.iter().enumerate() {
        let angle = index as f64 * 2.0 * PI / count;
        placed.insert(
            id.clone(),
            (
                CENTER + BRANCH_RADIUS * angle.cos(),
                CENTER + BRANCH_RADIUS * angle.sin(),
                angle,
            ),
        );
    }

    // Breadth-first from the branches so every child sees its parent placed
    let mut frontier = branches;
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for parent_id in &frontier {
            let Some(&(px, py, parent_angle)) = placed.get(parent_id) else {
                continue;
            };
            let children: Vec<String> = map
                .children_of(parent_id)
                .filter(|c| c.level > 1 && !placed.contains_key(&c.id))
                .map(|c| c.id.clone())
                .collect();
            let mid = (children.len() as f64 - 1.0) / 2.0;
            for (index, id) in children.into_iter().enumerate() {
                let angle = parent_angle + (index as f64 - mid) * CHILD_SPREAD;
                placed.insert(
                    id.clone(),
                    (px + CHILD_RADIUS * angle.cos(), py + CHILD_RADIUS * angle.sin(), angle),
                );
                next.push(id);
            }
        }
        frontier = next;
    }

    for node in map.nodes.iter_mut() {
        if let Some(&(x, y, _)) = placed.get(&node.id) {
            node.x = Some(round2(x));
            node.y = Some(round2(y));
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ============ Client-side record ============

/// A map as the UI keeps it for the session; never stored server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapRecord {
    pub id: Uuid,
    pub title: String,
    pub template: ChartType,
    pub nodes: Vec<MindMapNode>,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

impl MindMapRecord {
    pub fn new(map: MindMap, user: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: map.title,
            template: map.chart_type,
            nodes: map.nodes,
            created_at: Utc::now(),
            user_id: user.id.clone(),
        }
    }
}

// ============ Lenient id decoding ============

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(v: StringOrNumber) -> Self {
        match v {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(String::from).filter(|s| !s.is_empty()))
}

/// Depth given as a number or a numeric string (`1`, `1.0`, `"1"`)
fn level_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let level = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(i) => u32::try_from(i).ok(),
        StringOrNumber::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        StringOrNumber::Float(_) => None,
        StringOrNumber::Str(s) => s.trim().parse().ok(),
    };
    level.ok_or_else(|| de::Error::custom("level must be a non-negative integer"))
}
