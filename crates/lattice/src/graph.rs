use crate::error::{LatticeError, Result};
use crate::types::{EdgeKind, LatticeGraph, LatticeNode, NodeKind};
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

impl LatticeGraph {
    /// Find node by id
    pub fn node(&self, id: &str) -> Option<&LatticeNode> {
        self.index_of(id)
            .and_then(|idx| self.inner().node_weight(idx))
    }

    /// All nodes in construction order (root, rows, columns, grid row-major)
    pub fn nodes(&self) -> impl Iterator<Item = &LatticeNode> {
        self.inner().node_weights()
    }

    /// All edges as `(parent id, child id, kind)` in construction order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeKind)> {
        let graph = self.inner();
        graph.edge_references().map(move |edge| {
            (
                graph[edge.source()].id.as_str(),
                graph[edge.target()].id.as_str(),
                edge.weight().kind,
            )
        })
    }

    /// The single root node
    pub fn root(&self) -> Option<&LatticeNode> {
        self.nodes().find(|node| node.kind == NodeKind::Root)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &LatticeNode> {
        self.nodes().filter(move |node| node.kind == kind)
    }

    /// Direct predecessors of `id`, in edge insertion order
    pub fn parents(&self, id: &str) -> Result<Vec<&LatticeNode>> {
        self.neighbours(id, Direction::Incoming)
    }

    /// Direct successors of `id`, in edge insertion order
    pub fn children(&self, id: &str) -> Result<Vec<&LatticeNode>> {
        self.neighbours(id, Direction::Outgoing)
    }

    fn neighbours(&self, id: &str, direction: Direction) -> Result<Vec<&LatticeNode>> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| LatticeError::NodeNotFound(id.to_string()))?;
        let graph = self.inner();

        // petgraph walks adjacency lists newest-first
        let mut edges: Vec<_> = graph.edges_directed(idx, direction).collect();
        edges.sort_by_key(|edge| edge.id());

        Ok(edges
            .into_iter()
            .map(|edge| match direction {
                Direction::Incoming => &graph[edge.source()],
                Direction::Outgoing => &graph[edge.target()],
            })
            .collect())
    }

    /// `(R, L)`: number of row levels and column levels
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.nodes_of_kind(NodeKind::RowLevel).count(),
            self.nodes_of_kind(NodeKind::ColumnLevel).count(),
        )
    }

    /// Finest granularity: the node nothing refines into
    pub fn finest(&self) -> Option<&LatticeNode> {
        let graph = self.inner();
        graph
            .externals(Direction::Outgoing)
            .max_by_key(|idx: &NodeIndex| idx.index())
            .map(|idx| &graph[idx])
    }

    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(self.inner())
    }

    /// Node ids ordered so every parent precedes its children
    pub fn topological_ids(&self) -> Result<Vec<&str>> {
        let graph = self.inner();
        let order = toposort(graph, None).map_err(|cycle| {
            LatticeError::Other(format!(
                "Cycle through node {}",
                graph[cycle.node_id()].id
            ))
        })?;
        Ok(order.into_iter().map(|idx| graph[idx].id.as_str()).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{build, AxisSpec, LatticeError, NodeKind};
    use pretty_assertions::assert_eq;

    fn ids<'a>(nodes: impl IntoIterator<Item = &'a crate::LatticeNode>) -> Vec<&'a str> {
        nodes.into_iter().map(|node| node.id.as_str()).collect()
    }

    #[test]
    fn nodes_follow_construction_order() {
        let spec = AxisSpec::new().with_rows(["A", "B"]).with_columns(["C"]);
        let graph = build(&spec).unwrap();
        assert_eq!(
            ids(graph.nodes()),
            vec!["Nivel 0", "R_1", "R_2", "C_1", "I_1_1", "I_2_1"]
        );
    }

    #[test]
    fn parents_and_children_by_id() {
        let spec = AxisSpec::new().with_rows(["A", "B"]).with_columns(["C", "D"]);
        let graph = build(&spec).unwrap();

        assert_eq!(ids(graph.parents("I_1_2").unwrap()), vec!["C_2", "I_1_1"]);
        assert_eq!(ids(graph.children("Nivel 0").unwrap()), vec!["R_1", "C_1"]);
        assert_eq!(ids(graph.children("R_2").unwrap()), vec!["I_2_1"]);
        assert!(graph.parents("Nivel 0").unwrap().is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let graph = build(&AxisSpec::new().with_rows(["A"])).unwrap();
        let err = graph.parents("R_9").unwrap_err();
        assert!(matches!(err, LatticeError::NodeNotFound(ref id) if id == "R_9"));
    }

    #[test]
    fn finest_is_grid_corner_or_chain_tail() {
        let grid = build(&AxisSpec::new().with_rows(["A", "B"]).with_columns(["C", "D", "E"])).unwrap();
        assert_eq!(grid.finest().map(|node| node.id.as_str()), Some("I_2_3"));

        let chain = build(&AxisSpec::new().with_columns(["C", "D"])).unwrap();
        assert_eq!(chain.finest().map(|node| node.id.as_str()), Some("C_2"));
    }

    #[test]
    fn topological_order_puts_parents_first() {
        let spec = AxisSpec::new().with_rows(["A", "B"]).with_columns(["C", "D"]);
        let graph = build(&spec).unwrap();
        let order = graph.topological_ids().unwrap();
        let position = |id: &str| order.iter().position(|other| *other == id).unwrap();

        assert_eq!(order[0], "Nivel 0");
        for (parent, child, _) in graph.edges() {
            assert!(position(parent) < position(child), "{parent} -> {child}");
        }
    }

    #[test]
    fn dimensions_and_kinds() {
        let graph = build(&AxisSpec::new().with_rows(["A", "B", "C"]).with_columns(["D"])).unwrap();
        assert_eq!(graph.dimensions(), (3, 1));
        assert_eq!(graph.nodes_of_kind(NodeKind::Intersection).count(), 3);
        assert_eq!(graph.root().map(|node| node.id.as_str()), Some("Nivel 0"));
        assert!(graph.is_acyclic());
    }
}
