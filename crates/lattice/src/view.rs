use crate::types::{EdgeKind, LatticeGraph, NodeKind};
use serde::{Deserialize, Serialize};

/// Node as seen by a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
    pub category: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub parent: String,
    pub child: String,
    pub kind: EdgeKind,
}

/// Structural snapshot handed across the renderer boundary.
///
/// Carries no positions or styles; layout and drawing belong to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub rows: usize,
    pub columns: usize,
}

impl GraphView {
    /// Payload for the "nothing to render" case
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

impl From<&LatticeGraph> for GraphView {
    fn from(graph: &LatticeGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeView {
                id: node.id.clone(),
                label: node.label.clone(),
                category: node.category().to_string(),
                kind: node.kind,
                row_depth: node.row_depth,
                column_depth: node.column_depth,
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(parent, child, kind)| EdgeView {
                parent: parent.to_string(),
                child: child.to_string(),
                kind,
            })
            .collect();

        let (rows, columns) = graph.dimensions();

        Self {
            nodes,
            edges,
            rows,
            columns,
        }
    }
}

impl LatticeGraph {
    pub fn to_view(&self) -> GraphView {
        GraphView::from(self)
    }
}

/// Snapshot for an optional graph, mapping the empty-signal to [`GraphView::empty`]
impl From<Option<&LatticeGraph>> for GraphView {
    fn from(graph: Option<&LatticeGraph>) -> Self {
        graph.map(LatticeGraph::to_view).unwrap_or_default()
    }
}
