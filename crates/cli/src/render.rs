use crate::config::RenderConfig;
use anyhow::Result;
use clap::ValueEnum;
use context_grid_lattice::{GraphView, LatticeGraph};
use serde_json::json;
use std::fmt::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Structural graph as JSON
    Json,
    /// Graphviz DOT for hierarchical layout with `dot`
    Dot,
    /// Plain text, one node per line with its parents
    Outline,
}

/// Render the lattice, or the empty-signal when there is none
pub(crate) fn render(
    graph: Option<&LatticeGraph>,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<String> {
    let Some(graph) = graph else {
        return Ok(match format {
            OutputFormat::Json => json!({ "status": "empty" }).to_string(),
            OutputFormat::Dot | OutputFormat::Outline => String::new(),
        });
    };

    match format {
        OutputFormat::Json => render_json(graph),
        OutputFormat::Dot => render_dot(graph, config),
        OutputFormat::Outline => render_outline(graph),
    }
}

fn render_json(graph: &LatticeGraph) -> Result<String> {
    let view = GraphView::from(graph);
    Ok(serde_json::to_string_pretty(
        &json!({ "status": "ok", "graph": view }),
    )?)
}

fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

pub(crate) fn render_dot(graph: &LatticeGraph, config: &RenderConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "digraph context_grid {{")?;
    writeln!(out, "    rankdir={};", config.rankdir)?;
    writeln!(out, "    node [style=filled, fontsize={}];", config.font_size)?;

    for node in graph.nodes() {
        let style = config.style(node.kind);
        writeln!(
            out,
            "    \"{}\" [label=\"{}\", shape=\"{}\", fillcolor=\"{}\"];",
            dot_escape(&node.id),
            dot_escape(&node.label),
            dot_escape(&style.shape),
            dot_escape(&style.fill_color)
        )?;
    }

    for (parent, child, _) in graph.edges() {
        writeln!(
            out,
            "    \"{}\" -> \"{}\";",
            dot_escape(parent),
            dot_escape(child)
        )?;
    }

    writeln!(out, "}}")?;
    Ok(out)
}

/// Multi-line labels folded onto one line
fn flat_label(label: &str) -> String {
    label.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

fn render_outline(graph: &LatticeGraph) -> Result<String> {
    let mut out = String::new();
    for node in graph.nodes() {
        let parents: Vec<&str> = graph
            .parents(&node.id)?
            .into_iter()
            .map(|parent| parent.id.as_str())
            .collect();

        write!(out, "{:<8} {:<12} {}", node.id, node.category(), flat_label(&node.label))?;
        if !parents.is_empty() {
            write!(out, "  <- {}", parents.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}
