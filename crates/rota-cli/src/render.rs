//! Text and JSON rendering of command results.
//!
//! Text output uses node labels where the graph has them; JSON output
//! serializes the result types as-is (node ids, infinite totals as `null`).

use anyhow::Result;
use serde::Serialize;

use rota_engine::{PlanSummary, RouteExplanation, RouteResult, TraversalStep};
use rota_graph::Graph;

/// Pretty-printed JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Number for display: up to three decimals, trailing zeros dropped,
/// `∞` for an infinite value.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "∞".to_string();
    }
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// One route: header, node sequence, and totals.
pub fn route_text(graph: &Graph, route: &RouteResult) -> String {
    let mut lines = vec![format!(
        "Route {} -> {} (criterion: {})",
        graph.node_name(route.origin.as_str()),
        graph.node_name(route.destination.as_str()),
        route.criterion
    )];

    if !route.is_reachable() {
        lines.push("  unreachable".to_string());
        return lines.join("\n");
    }

    let names: Vec<&str> = route
        .path
        .iter()
        .map(|id| graph.node_name(id.as_str()))
        .collect();
    lines.push(format!("  path: {}", names.join(" -> ")));
    lines.push(format!("  hops: {}", route.hop_count()));
    lines.push(format!(
        "  {}: {}",
        route.criterion,
        format_value(route.primary_total)
    ));
    for (metric, total) in &route.totals {
        if *metric != route.criterion {
            lines.push(format!("  {metric}: {}", format_value(*total)));
        }
    }
    lines.join("\n")
}

/// Step-by-step narration of the engine run followed by the route.
pub fn explanation_text(graph: &Graph, explanation: &RouteExplanation) -> String {
    let mut lines = Vec::with_capacity(explanation.trace.len() + 1);
    if explanation.trace.is_empty() {
        lines.push("origin and destination coincide, nothing to explore".to_string());
    }
    for step in &explanation.trace {
        lines.push(step_text(graph, step));
    }
    lines.push(String::new());
    lines.push(route_text(graph, &explanation.route));
    lines.join("\n")
}

fn step_text(graph: &Graph, step: &TraversalStep) -> String {
    let name = |id: &rota_core::NodeId| graph.node_name(id.as_str()).to_string();
    match step {
        TraversalStep::Visited { node, distance } => {
            format!("visit {} at {}", name(node), format_value(*distance))
        }
        TraversalStep::Relaxed {
            from,
            to,
            edge_weight,
            previous,
            updated,
        } => format!(
            "  {} -> {} (+{}): {} improves on {}",
            name(from),
            name(to),
            format_value(*edge_weight),
            format_value(*updated),
            previous.map_or_else(|| "∞".to_string(), format_value)
        ),
        TraversalStep::Retained {
            from,
            to,
            edge_weight,
            candidate,
            current,
        } => format!(
            "  {} -> {} (+{}): {} does not beat {}",
            name(from),
            name(to),
            format_value(*edge_weight),
            format_value(*candidate),
            format_value(*current)
        ),
        TraversalStep::TargetReached { node, distance } => format!(
            "reached {} at {}, stopping",
            name(node),
            format_value(*distance)
        ),
        TraversalStep::Exhausted => "no reachable unvisited node left".to_string(),
    }
}

/// Routes of a multi-destination plan and their summary.
pub fn plan_text(graph: &Graph, routes: &[RouteResult], summary: &PlanSummary) -> String {
    let mut blocks: Vec<String> = routes.iter().map(|r| route_text(graph, r)).collect();
    let mut footer = vec![format!(
        "Deliveries: {} reachable, {} unreachable",
        summary.reachable, summary.unreachable
    )];
    footer.push(format!("  total: {}", format_value(summary.total_cost)));
    if let Some(mean) = summary.mean_cost {
        footer.push(format!("  mean: {}", format_value(mean)));
    }
    blocks.push(footer.join("\n"));
    blocks.join("\n\n")
}

/// Destinations ranked by cost, one per line.
pub fn rank_text(graph: &Graph, routes: &[RouteResult]) -> String {
    let width = routes
        .iter()
        .map(|r| graph.node_name(r.destination.as_str()).chars().count())
        .max()
        .unwrap_or(0);
    routes
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let name = graph.node_name(route.destination.as_str());
            let cost = if route.is_reachable() {
                format!("{} ({} hops)", format_value(route.primary_total), route.hop_count())
            } else {
                "unreachable".to_string()
            };
            format!("{:>3}. {name:<width$}  {cost}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Node listing with labels and out-degree.
pub fn nodes_text(graph: &Graph) -> String {
    let metrics: Vec<String> = graph.metrics().iter().map(ToString::to_string).collect();
    let mut lines = vec![format!(
        "Nodes ({}), metrics: {}",
        graph.node_count(),
        if metrics.is_empty() {
            "none".to_string()
        } else {
            metrics.join(", ")
        }
    )];
    for (id, record) in graph.records() {
        let label = record
            .label()
            .map(|l| format!(" \"{l}\""))
            .unwrap_or_default();
        lines.push(format!("  {id}{label} ({} edges)", record.out_degree()));
    }
    lines.join("\n")
}

/// JSON view of a graph's nodes.
#[derive(Debug, Serialize)]
pub struct NodeView<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub out_degree: usize,
}

pub fn node_views(graph: &Graph) -> Vec<NodeView<'_>> {
    graph
        .records()
        .map(|(id, record)| NodeView {
            id: id.as_str(),
            label: record.label(),
            out_degree: record.out_degree(),
        })
        .collect()
}
