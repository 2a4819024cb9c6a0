use petgraph::visit::EdgeRef;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::DependencyGraph;

/// Controls the force-directed layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Seed for the layout's random number generator. The same set and the
    /// same seed produce identical positions.
    pub seed: u64,
    /// Number of simulation iterations. This is the termination bound:
    /// cycles and self-loops in the graph cannot extend it.
    pub iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 100,
        }
    }
}

/// A 2-D position on the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in `[0, 1]`.
    pub x: f32,
    /// Vertical coordinate in `[0, 1]`.
    pub y: f32,
}

/// Computes a spring-model layout for the graph.
///
/// Fruchterman–Reingold on the unit square: all node pairs repel, edges
/// attract, displacement is capped by a cooling temperature. The returned
/// positions are indexed by node index and are finite and pairwise
/// distinct.
#[must_use]
pub fn layout(graph: &DependencyGraph, options: &LayoutOptions) -> Vec<Point> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut positions: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.random::<f32>(),
            y: rng.random::<f32>(),
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let k = (1.0 / n as f32).sqrt();
    let mut temperature = 0.1_f32;
    #[allow(clippy::cast_precision_loss)]
    let cooling = temperature / options.iterations.max(1) as f32;

    for _ in 0..options.iterations {
        let mut displacement = vec![(0.0_f32, 0.0_f32); n];

        // Repulsion between every node pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(1e-6);
                let force = k * k / distance;
                let (fx, fy) = (dx / distance * force, dy / distance * force);
                displacement[i].0 += fx;
                displacement[i].1 += fy;
                displacement[j].0 -= fx;
                displacement[j].1 -= fy;
            }
        }

        // Attraction along edges. A self-loop exerts no force.
        for edge in graph.inner().edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            if a == b {
                continue;
            }
            let dx = positions[a].x - positions[b].x;
            let dy = positions[a].y - positions[b].y;
            let distance = (dx * dx + dy * dy).sqrt().max(1e-6);
            let force = distance * distance / k;
            let (fx, fy) = (dx / distance * force, dy / distance * force);
            displacement[a].0 -= fx;
            displacement[a].1 -= fy;
            displacement[b].0 += fx;
            displacement[b].1 += fy;
        }

        for (position, (dx, dy)) in positions.iter_mut().zip(&displacement) {
            let length = (dx * dx + dy * dy).sqrt().max(1e-6);
            let step = length.min(temperature);
            position.x = (position.x + dx / length * step).clamp(0.0, 1.0);
            position.y = (position.y + dy / length * step).clamp(0.0, 1.0);
        }

        temperature = (temperature - cooling).max(1e-3);
    }

    separate_coincident(&mut positions, &mut rng);
    positions
}

/// Nudges exactly-coincident nodes apart so every node gets a distinct
/// position. Bounded: a few attempts per pair, then give up (good enough
/// for display).
fn separate_coincident(positions: &mut [Point], rng: &mut StdRng) {
    const MIN_SEPARATION: f32 = 1e-4;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let mut attempts = 0;
            while attempts < 8 {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                if (dx * dx + dy * dy).sqrt() >= MIN_SEPARATION {
                    break;
                }
                positions[j].x =
                    (positions[j].x + rng.random_range(-0.01..0.01_f32)).clamp(0.0, 1.0);
                positions[j].y =
                    (positions[j].y + rng.random_range(-0.01..0.01_f32)).clamp(0.0, 1.0);
                attempts += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutOptions, layout};
    use crate::{
        domain::{Requirement, RequirementSet},
        graph::DependencyGraph,
    };

    fn chain(count: usize) -> DependencyGraph {
        let requirements = (0..count)
            .map(|i| Requirement {
                id: format!("REQ-{i:03}"),
                dependencies: if i == 0 {
                    Vec::new()
                } else {
                    vec![format!("REQ-{:03}", i - 1)]
                },
                ..Requirement::default()
            })
            .collect();
        DependencyGraph::build(&RequirementSet {
            requirements,
            ..RequirementSet::default()
        })
    }

    #[test]
    fn empty_graph_has_no_positions() {
        let graph = DependencyGraph::build(&RequirementSet::default());
        assert!(layout(&graph, &LayoutOptions::default()).is_empty());
    }

    #[test]
    fn same_seed_gives_identical_positions() {
        let graph = chain(6);
        let options = LayoutOptions {
            seed: 7,
            ..LayoutOptions::default()
        };
        let first = layout(&graph, &options);
        let second = layout(&graph, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_positions() {
        let graph = chain(6);
        let a = layout(&graph, &LayoutOptions { seed: 1, iterations: 50 });
        let b = layout(&graph, &LayoutOptions { seed: 2, iterations: 50 });
        assert_ne!(a, b);
    }

    #[test]
    fn positions_are_finite_and_distinct() {
        let graph = chain(12);
        let positions = layout(&graph, &LayoutOptions::default());
        assert_eq!(positions.len(), 12);
        for position in &positions {
            assert!(position.x.is_finite() && position.y.is_finite());
            assert!((0.0..=1.0).contains(&position.x));
            assert!((0.0..=1.0).contains(&position.y));
        }
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert_ne!(positions[i], positions[j]);
            }
        }
    }

    #[test]
    fn cyclic_graph_terminates() {
        let set = RequirementSet {
            requirements: vec![
                Requirement {
                    id: "A".to_string(),
                    dependencies: vec!["B".to_string(), "A".to_string()],
                    ..Requirement::default()
                },
                Requirement {
                    id: "B".to_string(),
                    dependencies: vec!["A".to_string()],
                    ..Requirement::default()
                },
            ],
            ..RequirementSet::default()
        };
        let graph = DependencyGraph::build(&set);
        let positions = layout(&graph, &LayoutOptions::default());
        assert_eq!(positions.len(), 2);
    }
}
