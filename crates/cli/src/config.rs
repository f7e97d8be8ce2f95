use anyhow::{anyhow, Context, Result};
use context_grid_lattice::NodeKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const RANKDIRS: [&str; 4] = ["TB", "BT", "LR", "RL"];

/// Fill colour and shape for one node category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub fill_color: String,
    pub shape: String,
}

impl NodeStyle {
    fn new(fill_color: &str, shape: &str) -> Self {
        Self {
            fill_color: fill_color.to_string(),
            shape: shape.to_string(),
        }
    }
}

/// Style table as written in TOML; absent keys keep the category default
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleOverride {
    fill_color: Option<String>,
    shape: Option<String>,
}

impl StyleOverride {
    fn apply(self, style: &mut NodeStyle) {
        if let Some(fill_color) = self.fill_color {
            style.fill_color = fill_color;
        }
        if let Some(shape) = self.shape {
            style.shape = shape;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRenderConfig {
    rankdir: Option<String>,
    font_size: Option<u32>,
    root: StyleOverride,
    row: StyleOverride,
    column: StyleOverride,
    intersection: StyleOverride,
}

impl From<RawRenderConfig> for RenderConfig {
    fn from(raw: RawRenderConfig) -> Self {
        let mut config = Self::default();
        if let Some(rankdir) = raw.rankdir {
            config.rankdir = rankdir;
        }
        if let Some(font_size) = raw.font_size {
            config.font_size = font_size;
        }
        raw.root.apply(&mut config.root);
        raw.row.apply(&mut config.row);
        raw.column.apply(&mut config.column);
        raw.intersection.apply(&mut config.intersection);
        config
    }
}

/// Presentation settings for the Graphviz renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRenderConfig")]
pub struct RenderConfig {
    /// Graphviz rank direction (TB keeps coarse levels on top)
    pub rankdir: String,

    /// Node label font size in points
    pub font_size: u32,

    pub root: NodeStyle,
    pub row: NodeStyle,
    pub column: NodeStyle,
    pub intersection: NodeStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rankdir: "TB".to_string(),
            font_size: 10,
            root: NodeStyle::new("lightgray", "box"),
            row: NodeStyle::new("lightblue", "box"),
            column: NodeStyle::new("lightgreen", "box"),
            intersection: NodeStyle::new("lightcoral", "ellipse"),
        }
    }
}

impl RenderConfig {
    /// Load from a TOML file; missing keys, including single keys of a style
    /// table, fall back to that category's defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read render config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Invalid render config {}", path.display()))?;
        config
            .validate()
            .map_err(|msg| anyhow!("Invalid render config {}: {msg}", path.display()))?;
        Ok(config)
    }

    pub fn style(&self, kind: NodeKind) -> &NodeStyle {
        match kind {
            NodeKind::Root => &self.root,
            NodeKind::RowLevel => &self.row,
            NodeKind::ColumnLevel => &self.column,
            NodeKind::Intersection => &self.intersection,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !RANKDIRS.contains(&self.rankdir.as_str()) {
            return Err(format!(
                "rankdir must be one of {}, got {:?}",
                RANKDIRS.join("/"),
                self.rankdir
            ));
        }

        if self.font_size == 0 {
            return Err("font_size must be > 0".to_string());
        }

        let styles = [
            ("root", &self.root),
            ("row", &self.row),
            ("column", &self.column),
            ("intersection", &self.intersection),
        ];
        for (name, style) in styles {
            if style.fill_color.trim().is_empty() {
                return Err(format!("{name}.fill_color must not be empty"));
            }
            if style.shape.trim().is_empty() {
                return Err(format!("{name}.shape must not be empty"));
            }
            if !style
                .shape
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(format!(
                    "{name}.shape must be a Graphviz shape name, got {:?}",
                    style.shape
                ));
            }
        }

        Ok(())
    }
}
