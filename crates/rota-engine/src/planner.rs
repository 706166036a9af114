//! # Route Planner
//!
//! Turns engine output into routes a caller can act on: the ordered node
//! list, the edges taken, and totals for every reported metric.
//!
//! ## Totals
//!
//! Only the criterion's total is guaranteed minimal. Every other reported
//! metric is summed along the *criterion-optimal* route; it describes that
//! route and is not its own optimum. A route that is fastest by `time` may
//! well be longer by `distance` than the shortest-`distance` route.
//!
//! ## Endpoints
//!
//! | Case | `find_route` | `plan_routes` |
//! |---|---|---|
//! | unknown origin | `Err(UnknownNode)` | `Err(UnknownNode)` |
//! | unknown destination | `Err(UnknownNode)` | unreachable marker |
//! | origin == destination | trivial `[origin]`, all totals 0 | same |
//! | unreachable | empty path, primary total +∞ | same |

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use rota_core::{Metric, NodeId, RoutingError, WeightBundle};
use rota_graph::Graph;

use crate::engine::{compute_shortest_paths, SelectionStrategy, ShortestPathRequest, ShortestPaths};
use crate::path::reconstruct_path;
use crate::trace::TraversalStep;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One edge of a route, with the full weight bundle it carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: NodeId,
    pub to: NodeId,
    pub weights: WeightBundle,
}

/// A route between two nodes under one criterion.
///
/// Serialized for output only; an unreachable route's `primary_total` is
/// +∞, which JSON renders as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub origin: NodeId,
    pub destination: NodeId,
    /// Metric the route minimizes.
    pub criterion: Metric,
    /// Nodes from origin to destination, both included. Empty when
    /// unreachable.
    pub path: Vec<NodeId>,
    /// Minimal accumulated criterion weight; +∞ when unreachable.
    pub primary_total: f64,
    /// Sum of each reported metric along `path`. Includes the criterion.
    /// A metric missing from any leg is left out.
    pub totals: BTreeMap<Metric, f64>,
    pub legs: Vec<RouteLeg>,
}

impl RouteResult {
    fn unreachable(origin: NodeId, destination: NodeId, criterion: Metric) -> Self {
        Self {
            origin,
            destination,
            criterion,
            path: Vec::new(),
            primary_total: f64::INFINITY,
            totals: BTreeMap::new(),
            legs: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Total of `metric` along the route, if it was reported.
    pub fn total(&self, metric: &str) -> Option<f64> {
        self.totals.get(metric).copied()
    }
}

/// A route together with the engine steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteExplanation {
    pub route: RouteResult,
    /// Empty for a trivial route, where the engine is not run.
    pub trace: Vec<TraversalStep>,
}

/// Aggregate over a batch of routes from one origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub reachable: usize,
    pub unreachable: usize,
    /// Sum of primary totals over reachable routes.
    pub total_cost: f64,
    /// `total_cost / reachable`, absent when nothing is reachable.
    pub mean_cost: Option<f64>,
}

impl PlanSummary {
    pub fn from_routes(routes: &[RouteResult]) -> Self {
        let (reachable, unreachable): (Vec<&RouteResult>, Vec<&RouteResult>) =
            routes.iter().partition(|r| r.is_reachable());
        let total_cost: f64 = reachable.iter().map(|r| r.primary_total).sum();
        let mean_cost = (!reachable.is_empty()).then(|| total_cost / reachable.len() as f64);
        Self {
            reachable: reachable.len(),
            unreachable: unreachable.len(),
            total_cost,
            mean_cost,
        }
    }
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Route planning over a borrowed graph.
///
/// The planner holds configuration only; every method runs the engine
/// afresh, so one planner can be shared across threads.
#[derive(Debug, Clone)]
pub struct RoutePlanner<'g> {
    graph: &'g Graph,
    strategy: SelectionStrategy,
    reported_metrics: BTreeSet<Metric>,
}

impl<'g> RoutePlanner<'g> {
    /// Planner using the default strategy and reporting every metric that
    /// appears in `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            strategy: SelectionStrategy::default(),
            reported_metrics: graph.metrics(),
        }
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Restrict (or extend) the metrics totalled along each route. The
    /// criterion is always reported.
    pub fn with_reported_metrics(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.reported_metrics = metrics.into_iter().collect();
        self
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    pub fn reported_metrics(&self) -> &BTreeSet<Metric> {
        &self.reported_metrics
    }

    /// Best route from `origin` to `destination` under `criterion`.
    ///
    /// The engine stops as soon as `destination` is settled.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownNode`] for an endpoint outside the graph;
    /// [`RoutingError::MissingMetric`] if an explored edge lacks `criterion`.
    pub fn find_route(
        &self,
        origin: &NodeId,
        destination: &NodeId,
        criterion: &Metric,
    ) -> Result<RouteResult, RoutingError> {
        self.explain(origin, destination, criterion, false)
            .map(|explanation| explanation.route)
    }

    /// [`find_route`](Self::find_route) plus the engine's traversal trace.
    pub fn explain_route(
        &self,
        origin: &NodeId,
        destination: &NodeId,
        criterion: &Metric,
    ) -> Result<RouteExplanation, RoutingError> {
        self.explain(origin, destination, criterion, true)
    }

    /// Routes from `origin` to each of `destinations`, in input order.
    ///
    /// The engine runs once, without a target; all paths are read from the
    /// shared predecessor map. A destination that is unknown or unreachable
    /// gets an unreachable marker instead of failing the whole plan.
    pub fn plan_routes(
        &self,
        origin: &NodeId,
        destinations: &[NodeId],
        criterion: &Metric,
    ) -> Result<Vec<RouteResult>, RoutingError> {
        let paths = self.run(origin, None, criterion, false)?;

        Ok(destinations
            .iter()
            .map(|destination| {
                if !self.graph.contains(destination.as_str()) {
                    tracing::debug!(destination = %destination, "unknown destination in plan");
                    RouteResult::unreachable(origin.clone(), destination.clone(), criterion.clone())
                } else {
                    self.route_from(&paths, destination)
                }
            })
            .collect())
    }

    /// Every other node as a route from `origin`, cheapest first.
    ///
    /// Ties are ordered by node id; unreachable nodes come last.
    pub fn rank_destinations(
        &self,
        origin: &NodeId,
        criterion: &Metric,
    ) -> Result<Vec<RouteResult>, RoutingError> {
        let paths = self.run(origin, None, criterion, false)?;

        let mut routes: Vec<RouteResult> = self
            .graph
            .nodes()
            .filter(|node| *node != origin)
            .map(|node| self.route_from(&paths, node))
            .collect();
        routes.sort_by(|a, b| {
            a.primary_total
                .total_cmp(&b.primary_total)
                .then_with(|| a.destination.cmp(&b.destination))
        });
        Ok(routes)
    }

    fn explain(
        &self,
        origin: &NodeId,
        destination: &NodeId,
        criterion: &Metric,
        record_trace: bool,
    ) -> Result<RouteExplanation, RoutingError> {
        for endpoint in [origin, destination] {
            if !self.graph.contains(endpoint.as_str()) {
                return Err(RoutingError::UnknownNode(endpoint.clone()));
            }
        }

        if origin == destination {
            tracing::debug!(node = %origin, "origin equals destination, trivial route");
            return Ok(RouteExplanation {
                route: self.trivial(origin, criterion),
                trace: Vec::new(),
            });
        }

        let paths = self.run(origin, Some(destination), criterion, record_trace)?;
        let route = self.route_from(&paths, destination);
        let trace = paths.trace().map(<[_]>::to_vec).unwrap_or_default();
        Ok(RouteExplanation { route, trace })
    }

    fn run(
        &self,
        origin: &NodeId,
        target: Option<&NodeId>,
        criterion: &Metric,
        record_trace: bool,
    ) -> Result<ShortestPaths, RoutingError> {
        let mut request =
            ShortestPathRequest::new(origin.clone(), criterion.clone()).with_strategy(self.strategy);
        if let Some(target) = target {
            request = request.with_target(target.clone());
        }
        if record_trace {
            request = request.with_trace();
        }
        compute_shortest_paths(self.graph, &request)
    }

    fn trivial(&self, node: &NodeId, criterion: &Metric) -> RouteResult {
        let totals = self
            .reported_metrics
            .iter()
            .chain(std::iter::once(criterion))
            .map(|metric| (metric.clone(), 0.0))
            .collect();
        RouteResult {
            origin: node.clone(),
            destination: node.clone(),
            criterion: criterion.clone(),
            path: vec![node.clone()],
            primary_total: 0.0,
            totals,
            legs: Vec::new(),
        }
    }

    /// Build the result for `destination` from a completed (or
    /// target-terminated) engine run.
    fn route_from(&self, paths: &ShortestPaths, destination: &NodeId) -> RouteResult {
        let origin = paths.source();
        let criterion = paths.criterion();
        if origin == destination {
            return self.trivial(origin, criterion);
        }

        let path = reconstruct_path(paths.predecessors(), origin, destination);
        if path.is_empty() {
            return RouteResult::unreachable(origin.clone(), destination.clone(), criterion.clone());
        }

        let legs: Vec<RouteLeg> = path
            .windows(2)
            .filter_map(|pair| {
                self.graph
                    .edge(pair[0].as_str(), pair[1].as_str())
                    .map(|weights| RouteLeg {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                        weights: weights.clone(),
                    })
            })
            .collect();

        let primary_total = paths.distance(destination.as_str());
        let mut totals = BTreeMap::new();
        for metric in &self.reported_metrics {
            if metric == criterion {
                continue;
            }
            match sum_along(&legs, metric) {
                Some(total) => {
                    totals.insert(metric.clone(), total);
                }
                None => tracing::warn!(
                    origin = %origin,
                    destination = %destination,
                    metric = %metric,
                    "metric missing on route edge, omitted from totals"
                ),
            }
        }
        totals.insert(criterion.clone(), primary_total);

        RouteResult {
            origin: origin.clone(),
            destination: destination.clone(),
            criterion: criterion.clone(),
            path,
            primary_total,
            totals,
            legs,
        }
    }
}

/// Sum of `metric` over `legs`, or `None` if any leg lacks it.
fn sum_along(legs: &[RouteLeg], metric: &Metric) -> Option<f64> {
    legs.iter()
        .try_fold(0.0, |acc, leg| leg.weights.get(metric.as_str()).map(|w| acc + w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_graph::samples;

    const PAULISTA: &str = "Av. Paulista, 1000";
    const SANTOS: &str = "Alameda Santos, 300";

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn names(route: &RouteResult) -> Vec<&str> {
        route.path.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn worked_example_route() {
        let g = samples::worked_example().unwrap();
        let route = RoutePlanner::new(&g)
            .find_route(&id("A"), &id("E"), &Metric::weight())
            .unwrap();
        assert_eq!(names(&route), ["A", "C", "B", "D", "E"]);
        assert_eq!(route.primary_total, 10.0);
        assert_eq!(route.total("weight"), Some(10.0));
        assert_eq!(route.hop_count(), 4);
        assert_eq!(route.legs.len(), 4);
        assert_eq!(route.legs[1].from, id("C"));
        assert_eq!(route.legs[1].to, id("B"));
    }

    #[test]
    fn delivery_route_to_hospital() {
        let g = samples::delivery_city().unwrap();
        let route = RoutePlanner::new(&g)
            .find_route(&id("CD"), &id("HO"), &Metric::time())
            .unwrap();
        assert_eq!(names(&route), ["CD", "PC", "R1", "HO"]);
        assert_eq!(route.primary_total, 24.0);
    }

    #[test]
    fn criterion_changes_the_route() {
        let g = samples::city_streets().unwrap();
        let planner = RoutePlanner::new(&g);

        let by_distance = planner
            .find_route(&id(PAULISTA), &id(SANTOS), &Metric::distance())
            .unwrap();
        assert_eq!(names(&by_distance), [PAULISTA, "Rua Consolação, 200", SANTOS]);
        assert_eq!(by_distance.primary_total, 2.5);
        assert_eq!(by_distance.total("time"), Some(19.0));

        let by_time = planner
            .find_route(&id(PAULISTA), &id(SANTOS), &Metric::time())
            .unwrap();
        assert_eq!(names(&by_time), [PAULISTA, "Rua Augusta, 500", SANTOS]);
        assert_eq!(by_time.primary_total, 13.0);
        let km = by_time.total("distance").unwrap();
        assert!((km - 3.5).abs() < 1e-9);

        // The secondary total describes the chosen route; it is not minimal.
        assert!(km > by_distance.primary_total);
    }

    #[test]
    fn trivial_route_reports_zero_for_every_metric() {
        let g = samples::city_streets().unwrap();
        let route = RoutePlanner::new(&g)
            .find_route(&id(SANTOS), &id(SANTOS), &Metric::time())
            .unwrap();
        assert_eq!(route.path, vec![id(SANTOS)]);
        assert_eq!(route.primary_total, 0.0);
        assert_eq!(route.total("time"), Some(0.0));
        assert_eq!(route.total("distance"), Some(0.0));
        assert!(route.legs.is_empty());
        assert!(route.is_reachable());
    }

    #[test]
    fn trivial_route_is_explained_without_a_trace() {
        let g = samples::worked_example().unwrap();
        let explanation = RoutePlanner::new(&g)
            .explain_route(&id("A"), &id("A"), &Metric::weight())
            .unwrap();
        assert!(explanation.trace.is_empty());
    }

    #[test]
    fn unreachable_destination() {
        let mut g = samples::worked_example().unwrap();
        g.add_edge(id("X"), id("Y"), WeightBundle::single(1.0).unwrap());
        let route = RoutePlanner::new(&g)
            .find_route(&id("A"), &id("Y"), &Metric::weight())
            .unwrap();
        assert!(!route.is_reachable());
        assert!(route.path.is_empty());
        assert_eq!(route.primary_total, f64::INFINITY);
        assert!(route.totals.is_empty());
    }

    #[test]
    fn unknown_endpoints_are_errors() {
        let g = samples::worked_example().unwrap();
        let planner = RoutePlanner::new(&g);
        assert_eq!(
            planner.find_route(&id("Q"), &id("A"), &Metric::weight()),
            Err(RoutingError::UnknownNode(id("Q")))
        );
        assert_eq!(
            planner.find_route(&id("A"), &id("Q"), &Metric::weight()),
            Err(RoutingError::UnknownNode(id("Q")))
        );
    }

    #[test]
    fn missing_secondary_metric_is_omitted() {
        let mut g = Graph::new();
        g.add_edge(
            id("A"),
            id("B"),
            WeightBundle::new().with("time", 3.0).unwrap().with("distance", 1.0).unwrap(),
        );
        g.add_edge(id("B"), id("C"), WeightBundle::new().with("time", 4.0).unwrap());
        let route = RoutePlanner::new(&g)
            .find_route(&id("A"), &id("C"), &Metric::time())
            .unwrap();
        assert_eq!(route.total("time"), Some(7.0));
        assert_eq!(route.total("distance"), None);
    }

    #[test]
    fn reported_metrics_can_be_restricted() {
        let g = samples::city_streets().unwrap();
        let route = RoutePlanner::new(&g)
            .with_reported_metrics([])
            .find_route(&id(PAULISTA), &id(SANTOS), &Metric::distance())
            .unwrap();
        assert_eq!(route.totals.len(), 1);
        assert_eq!(route.total("distance"), Some(2.5));
    }

    #[test]
    fn plan_matches_repeated_find_route() {
        let g = samples::delivery_city().unwrap();
        let planner = RoutePlanner::new(&g).with_strategy(SelectionStrategy::BinaryHeap);
        let destinations = [id("R1"), id("R4"), id("HO"), id("CD"), id("R5")];
        let plan = planner
            .plan_routes(&id("CD"), &destinations, &Metric::time())
            .unwrap();
        assert_eq!(plan.len(), destinations.len());
        for (route, destination) in plan.iter().zip(&destinations) {
            let single = planner
                .find_route(&id("CD"), destination, &Metric::time())
                .unwrap();
            assert_eq!(route, &single);
        }
        assert_eq!(plan[1].primary_total, 21.0);
    }

    #[test]
    fn plan_marks_unknown_destination_unreachable() {
        let g = samples::delivery_city().unwrap();
        let plan = RoutePlanner::new(&g)
            .plan_routes(&id("CD"), &[id("R2"), id("Airport")], &Metric::time())
            .unwrap();
        assert!(plan[0].is_reachable());
        assert!(!plan[1].is_reachable());
        assert_eq!(plan[1].destination, id("Airport"));
    }

    #[test]
    fn plan_with_unknown_origin_fails() {
        let g = samples::delivery_city().unwrap();
        let err = RoutePlanner::new(&g)
            .plan_routes(&id("Depot"), &[id("R2")], &Metric::time())
            .unwrap_err();
        assert_eq!(err, RoutingError::UnknownNode(id("Depot")));
    }

    #[test]
    fn summary_counts_and_averages() {
        let mut g = samples::delivery_city().unwrap();
        g.add_node(id("Island"), None);
        let planner = RoutePlanner::new(&g);
        let plan = planner
            .plan_routes(&id("CD"), &[id("R4"), id("HO"), id("Island")], &Metric::time())
            .unwrap();
        let summary = PlanSummary::from_routes(&plan);
        assert_eq!(summary.reachable, 2);
        assert_eq!(summary.unreachable, 1);
        assert_eq!(summary.total_cost, 45.0);
        assert_eq!(summary.mean_cost, Some(22.5));
    }

    #[test]
    fn summary_of_nothing_has_no_mean() {
        let summary = PlanSummary::from_routes(&[]);
        assert_eq!(summary.reachable, 0);
        assert_eq!(summary.mean_cost, None);
    }

    #[test]
    fn ranking_is_sorted_with_unreachable_last() {
        let mut g = samples::worked_example().unwrap();
        g.add_node(id("Z"), None);
        let ranked = RoutePlanner::new(&g)
            .rank_destinations(&id("A"), &Metric::weight())
            .unwrap();
        let order: Vec<&str> = ranked.iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(order, ["C", "B", "D", "E", "Z"]);
        assert!(!ranked[4].is_reachable());
    }

    #[test]
    fn explanation_trace_ends_at_destination() {
        let g = samples::worked_example().unwrap();
        let explanation = RoutePlanner::new(&g)
            .explain_route(&id("A"), &id("D"), &Metric::weight())
            .unwrap();
        assert_eq!(explanation.route.primary_total, 8.0);
        assert!(explanation.trace.last().is_some_and(TraversalStep::is_terminal));
    }

    #[test]
    fn unreachable_route_serializes_total_as_null() {
        let mut g = samples::worked_example().unwrap();
        g.add_node(id("Z"), None);
        let route = RoutePlanner::new(&g)
            .find_route(&id("A"), &id("Z"), &Metric::weight())
            .unwrap();
        let json = serde_json::to_value(&route).unwrap();
        assert!(json["primary_total"].is_null());
        assert_eq!(json["path"], serde_json::json!([]));
    }
}
