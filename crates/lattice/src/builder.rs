use crate::types::*;
use context_grid_clause::AxisSpec;
use petgraph::graph::NodeIndex;

const FIELD_SEPARATOR: &str = " X ";
const PREFIX_SEPARATOR: &str = " | ";
const AXIS_BREAK: &str = "\n X \n";

fn row_id(depth: usize) -> String {
    format!("R_{depth}")
}

fn column_id(depth: usize) -> String {
    format!("C_{depth}")
}

fn intersection_id(row: usize, column: usize) -> String {
    format!("I_{row}_{column}")
}

fn bracketed(fields: &[String]) -> Vec<String> {
    fields.iter().map(|field| format!("[{field}]")).collect()
}

/// `[Anio] X [Trimestre]`
fn chain_label(fields: &[String]) -> String {
    bracketed(fields).join(FIELD_SEPARATOR)
}

/// Row prefix and column prefix on separate lines around an ` X ` line
fn intersection_label(rows: &[String], columns: &[String]) -> String {
    format!(
        "{}{AXIS_BREAK}{}",
        bracketed(rows).join(PREFIX_SEPARATOR),
        bracketed(columns).join(PREFIX_SEPARATOR)
    )
}

/// Parents of `I_row_column` in the grid
fn intersection_parents(row: usize, column: usize) -> [String; 2] {
    match (row, column) {
        (1, 1) => [row_id(1), column_id(1)],
        (_, 1) => [row_id(row), intersection_id(row - 1, 1)],
        (1, _) => [column_id(column), intersection_id(1, column - 1)],
        _ => [
            intersection_id(row - 1, column),
            intersection_id(row, column - 1),
        ],
    }
}

/// Wire `child` to every parent id present in `graph`; absent parents are skipped
fn link_parents(graph: &mut LatticeGraph, child: NodeIndex, parent_ids: &[String]) {
    for parent_id in parent_ids {
        match graph.index_of(parent_id) {
            Some(parent) => graph.add_edge(parent, child, EdgeKind::Grid),
            None => log::warn!("Lattice parent {parent_id} missing, edge omitted"),
        }
    }
}

/// Builds a [`LatticeGraph`] from an [`AxisSpec`].
///
/// The builder keeps no state between calls; every `build` starts from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeBuilder;

impl LatticeBuilder {
    pub const fn new() -> Self {
        Self
    }

    /// Build the context grid for `spec`.
    ///
    /// Returns `None` when the spec has neither row nor column fields, since a
    /// lone root has nothing to show.
    pub fn build(&self, spec: &AxisSpec) -> Option<LatticeGraph> {
        let rows = spec.rows();
        let columns = spec.columns();
        let mut graph = LatticeGraph::new();

        // Phase 1: root
        let root = graph.add_node(LatticeNode {
            id: ROOT_ID.to_string(),
            kind: NodeKind::Root,
            label: ROOT_LABEL.to_string(),
            row_depth: None,
            column_depth: None,
        });

        // Phase 2: row chain
        let mut previous = root;
        for depth in 1..=rows.len() {
            let prefix = &rows[..depth];
            let idx = graph.add_node(LatticeNode {
                id: row_id(depth),
                kind: NodeKind::RowLevel,
                label: chain_label(prefix),
                row_depth: Some(depth),
                column_depth: None,
            });
            graph.add_edge(previous, idx, EdgeKind::RowChain);
            previous = idx;
        }

        // Phase 3: column chain
        let mut previous = root;
        for depth in 1..=columns.len() {
            let prefix = &columns[..depth];
            let idx = graph.add_node(LatticeNode {
                id: column_id(depth),
                kind: NodeKind::ColumnLevel,
                label: chain_label(prefix),
                row_depth: None,
                column_depth: Some(depth),
            });
            graph.add_edge(previous, idx, EdgeKind::ColumnChain);
            previous = idx;
        }

        // Phase 4: intersection grid, row-major so both parents already exist
        if !rows.is_empty() && !columns.is_empty() {
            for row in 1..=rows.len() {
                for column in 1..=columns.len() {
                    let row_prefix = &rows[..row];
                    let column_prefix = &columns[..column];
                    let idx = graph.add_node(LatticeNode {
                        id: intersection_id(row, column),
                        kind: NodeKind::Intersection,
                        label: intersection_label(row_prefix, column_prefix),
                        row_depth: Some(row),
                        column_depth: Some(column),
                    });
                    link_parents(&mut graph, idx, &intersection_parents(row, column));
                }
            }
        }

        if graph.node_count() <= 1 {
            log::debug!("Axis spec has no rows and no columns, nothing to build");
            return None;
        }

        log::info!(
            "Built context grid: {} nodes, {} edges ({} rows x {} columns)",
            graph.node_count(),
            graph.edge_count(),
            rows.len(),
            columns.len()
        );

        Some(graph)
    }
}

/// Build the context grid for `spec` with a default [`LatticeBuilder`]
pub fn build(spec: &AxisSpec) -> Option<LatticeGraph> {
    LatticeBuilder::new().build(spec)
}
