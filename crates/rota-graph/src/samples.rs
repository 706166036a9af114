//! # Sample Graphs
//!
//! Reference graphs used throughout the test suites and exposed by the CLI
//! as `--sample worked`, `--sample delivery` and `--sample streets`.
//!
//! The factories validate their own literals and therefore return
//! `Result`; for the built-in data they always succeed.

use rota_core::{NodeId, ValidationError, WeightBundle};

use crate::graph::Graph;

/// Names accepted by [`by_name`].
pub const SAMPLE_NAMES: [&str; 3] = ["worked", "delivery", "streets"];

/// Look up a sample graph by name.
///
/// Returns `Ok(None)` for an unknown name.
pub fn by_name(name: &str) -> Result<Option<Graph>, ValidationError> {
    match name {
        "worked" => worked_example().map(Some),
        "delivery" => delivery_city().map(Some),
        "streets" => city_streets().map(Some),
        _ => Ok(None),
    }
}

/// Five-node, single-metric graph.
///
/// ```text
/// A-B(4) A-C(2) B-C(1) B-D(5) C-D(8) C-E(10) D-E(2)
/// ```
///
/// From `A`: `A=0, C=2, B=3, D=8, E=10`, and the route to `E` is
/// `A, C, B, D, E`.
pub fn worked_example() -> Result<Graph, ValidationError> {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D", "E"] {
        graph.add_node(NodeId::new(name)?, Some(format!("Point {name}")));
    }
    for (a, b, w) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
    ] {
        graph.add_edge(NodeId::new(a)?, NodeId::new(b)?, WeightBundle::single(w)?);
    }
    Ok(graph)
}

/// City map around a distribution center; edges carry `time` in minutes.
pub fn delivery_city() -> Result<Graph, ValidationError> {
    let mut graph = Graph::new();
    for (id, label) in [
        ("CD", "Distribution center"),
        ("R1", "Residence 1 - North district"),
        ("R2", "Residence 2 - South district"),
        ("R3", "Residence 3 - Downtown"),
        ("R4", "Residence 4 - East district"),
        ("R5", "Residence 5 - West district"),
        ("PC", "Gas station"),
        ("SM", "Supermarket"),
        ("HO", "Hospital"),
    ] {
        graph.add_node(NodeId::new(id)?, Some(label.to_string()));
    }
    for (a, b, minutes) in [
        ("CD", "PC", 5.0),
        ("CD", "R3", 8.0),
        ("CD", "SM", 10.0),
        ("PC", "R1", 7.0),
        ("PC", "R3", 6.0),
        ("R1", "R4", 9.0),
        ("R1", "HO", 12.0),
        ("R3", "R2", 4.0),
        ("R3", "SM", 7.0),
        ("R2", "R5", 6.0),
        ("R2", "SM", 8.0),
        ("R4", "HO", 5.0),
        ("R4", "R5", 11.0),
        ("SM", "R5", 9.0),
        ("SM", "HO", 15.0),
        ("R5", "HO", 10.0),
    ] {
        graph.add_edge(
            NodeId::new(a)?,
            NodeId::new(b)?,
            WeightBundle::new().with("time", minutes)?,
        );
    }
    Ok(graph)
}

/// Street network where every edge carries `distance` (km) and `time`
/// (minutes). The distance-optimal and time-optimal routes differ for
/// several pairs, e.g. `Av. Paulista, 1000` → `Alameda Santos, 300`.
pub fn city_streets() -> Result<Graph, ValidationError> {
    const PAULISTA: &str = "Av. Paulista, 1000";
    const AUGUSTA: &str = "Rua Augusta, 500";
    const CONSOLACAO: &str = "Rua Consolação, 200";
    const OSCAR_FREIRE: &str = "Rua Oscar Freire, 100";
    const SANTOS: &str = "Alameda Santos, 300";
    const REPUBLICA: &str = "Praça da República, 50";
    const BRIGADEIRO: &str = "Av. Brigadeiro, 800";
    const IGUATEMI: &str = "Shopping Iguatemi";
    const REBOUCAS: &str = "Av. Rebouças, 1500";
    const IBIRAPUERA: &str = "Av. Ibirapuera, 2000";
    const PARQUE: &str = "Parque Ibirapuera - Portão 2";
    const SAO_JOAO: &str = "Av. São João, 1200";
    const DOM_PEDRO: &str = "Terminal Parque Dom Pedro";
    const PINHEIROS: &str = "Marginal Pinheiros, Km 5";

    let mut graph = Graph::new();
    for (a, b, km, minutes) in [
        (PAULISTA, AUGUSTA, 2.3, 8.0),
        (PAULISTA, CONSOLACAO, 1.5, 12.0),
        (AUGUSTA, OSCAR_FREIRE, 1.8, 6.0),
        (AUGUSTA, SANTOS, 1.2, 5.0),
        (CONSOLACAO, REPUBLICA, 2.0, 15.0),
        (CONSOLACAO, SANTOS, 1.0, 7.0),
        (OSCAR_FREIRE, IGUATEMI, 3.5, 10.0),
        (OSCAR_FREIRE, REBOUCAS, 2.2, 9.0),
        (SANTOS, BRIGADEIRO, 1.8, 6.0),
        (SANTOS, REPUBLICA, 1.5, 10.0),
        (REPUBLICA, SAO_JOAO, 1.0, 8.0),
        (REPUBLICA, DOM_PEDRO, 2.5, 18.0),
        (BRIGADEIRO, IBIRAPUERA, 3.0, 11.0),
        (BRIGADEIRO, IGUATEMI, 2.5, 8.0),
        (IGUATEMI, IBIRAPUERA, 4.0, 12.0),
        (IGUATEMI, REBOUCAS, 1.5, 5.0),
        (REBOUCAS, PINHEIROS, 3.8, 14.0),
        (IBIRAPUERA, PARQUE, 1.0, 4.0),
        (IBIRAPUERA, DOM_PEDRO, 5.5, 25.0),
        (PARQUE, SAO_JOAO, 6.0, 28.0),
        (SAO_JOAO, DOM_PEDRO, 2.0, 12.0),
        (DOM_PEDRO, PINHEIROS, 8.0, 22.0),
    ] {
        graph.add_edge(
            NodeId::new(a)?,
            NodeId::new(b)?,
            WeightBundle::new()
                .with("distance", km)?
                .with("time", minutes)?,
        );
    }
    Ok(graph)
}
