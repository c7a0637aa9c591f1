//! Document rendering of a parsed structogram as JSON or YAML.
//!
//! The document keeps the field names downstream consumers read: `Name` and
//! `Nodes` at the root, `NodeType`, `Value` and `Nodes` on every node. Leaf
//! nodes and an empty top level carry `"Nodes": null`.

use serde::{Deserialize, Serialize};

use crate::dsl::{Node, Structogram};
use crate::error::Result;

/// Indent width of the reference JSON output.
pub const DEFAULT_INDENT: usize = 4;

/// Output document format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Root of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nodes")]
    pub nodes: Option<Vec<NodeRecord>>,
}

/// One rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(rename = "NodeType")]
    pub node_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Nodes")]
    pub nodes: Option<Vec<NodeRecord>>,
}

impl From<&Structogram> for Document {
    fn from(structogram: &Structogram) -> Self {
        Self {
            name: structogram.name.clone(),
            nodes: records(&structogram.nodes),
        }
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            node_type: node.keyword().to_string(),
            value: node.value().to_string(),
            nodes: node.children().and_then(records),
        }
    }
}

fn records(nodes: &[Node]) -> Option<Vec<NodeRecord>> {
    if nodes.is_empty() {
        None
    } else {
        Some(nodes.iter().map(NodeRecord::from).collect())
    }
}

/// Render as JSON. An indent of 0 yields compact single-line output.
pub fn to_json(structogram: &Structogram, indent: usize) -> serde_json::Result<String> {
    let document = Document::from(structogram);
    if indent == 0 {
        return serde_json::to_string(&document);
    }

    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// Render as YAML.
pub fn to_yaml(structogram: &Structogram) -> serde_yaml::Result<String> {
    serde_yaml::to_string(&Document::from(structogram))
}

/// Render in the requested format.
pub fn render(structogram: &Structogram, format: OutputFormat, indent: usize) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => to_json(structogram, indent)?,
        OutputFormat::Yaml => to_yaml(structogram)?,
    };
    tracing::debug!(?format, bytes = rendered.len(), "rendered document");
    Ok(rendered)
}
