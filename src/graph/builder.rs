use std::collections::HashMap;

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::domain::RequirementSet;

/// Maximum number of description characters carried into a node label.
const LABEL_TRUNCATE: usize = 20;

/// Data stored on each node of the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// The requirement (or dangling dependency) id.
    pub id: String,
    /// Display label: the id, plus a truncated description when the node
    /// corresponds to a requirement record.
    pub label: String,
}

/// A directed dependency graph over a requirement set.
///
/// Edges point from a dependency to the requirement that depends on it. A
/// dependency id with no matching requirement record still becomes a node
/// (labeled with the id alone); duplicate references become parallel edges
/// and self-references become self-loops.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<NodeData, ()>,
}

impl DependencyGraph {
    /// Derives the dependency graph from a requirement set.
    #[must_use]
    pub fn build(set: &RequirementSet) -> Self {
        let mut graph = DiGraph::new();
        let mut index: HashMap<&str, NodeIndex> = HashMap::new();

        for requirement in set.iter() {
            let node = *index.entry(requirement.id.as_str()).or_insert_with(|| {
                graph.add_node(NodeData {
                    id: requirement.id.clone(),
                    label: String::new(),
                })
            });
            graph[node].label = label(&requirement.id, &requirement.description);
        }

        for requirement in set.iter() {
            let target = index[requirement.id.as_str()];
            for dependency in &requirement.dependencies {
                let source = *index.entry(dependency.as_str()).or_insert_with(|| {
                    graph.add_node(NodeData {
                        id: dependency.clone(),
                        label: dependency.clone(),
                    })
                });
                graph.add_edge(source, target, ());
            }
        }

        Self { graph }
    }

    /// The number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of edges, counting duplicates and self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Edges as `(dependency id, dependent id)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
            )
        })
    }

    pub(crate) fn inner(&self) -> &DiGraph<NodeData, ()> {
        &self.graph
    }
}

fn label(id: &str, description: &str) -> String {
    if description.is_empty() {
        return id.to_string();
    }
    let truncated: String = description.chars().take(LABEL_TRUNCATE).collect();
    if description.chars().count() > LABEL_TRUNCATE {
        format!("{id}\n{truncated}...")
    } else {
        format!("{id}\n{truncated}")
    }
}

#[cfg(test)]
mod tests {
    use super::{DependencyGraph, label};
    use crate::domain::{Requirement, RequirementSet, RequirementType};

    fn requirement(id: &str, dependencies: &[&str]) -> Requirement {
        Requirement {
            id: id.to_string(),
            kind: RequirementType::DataProcessing,
            description: format!("Description of {id}"),
            dependencies: dependencies.iter().map(ToString::to_string).collect(),
            ..Requirement::default()
        }
    }

    fn set_of(requirements: Vec<Requirement>) -> RequirementSet {
        RequirementSet {
            requirements,
            ..RequirementSet::default()
        }
    }

    #[test]
    fn two_requirements_one_dependency() {
        let set = set_of(vec![
            requirement("REQ-001", &[]),
            requirement("REQ-002", &["REQ-001"]),
        ]);
        let graph = DependencyGraph::build(&set);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().next(), Some(("REQ-001", "REQ-002")));
    }

    #[test]
    fn dangling_dependency_becomes_a_node_and_edge() {
        let set = set_of(vec![requirement("REQ-003", &["REQ-999"])]);
        let graph = DependencyGraph::build(&set);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges().any(|edge| edge == ("REQ-999", "REQ-003")));
    }

    #[test]
    fn dangling_node_is_labeled_with_id_alone() {
        let set = set_of(vec![requirement("REQ-003", &["REQ-999"])]);
        let graph = DependencyGraph::build(&set);
        let labels: Vec<_> = graph
            .inner()
            .node_indices()
            .map(|node| graph.inner()[node].label.clone())
            .collect();
        assert!(labels.contains(&"REQ-999".to_string()));
    }

    #[test]
    fn duplicate_and_self_references_are_counted() {
        let set = set_of(vec![
            requirement("REQ-001", &[]),
            requirement("REQ-002", &["REQ-001", "REQ-001", "REQ-002"]),
        ]);
        let graph = DependencyGraph::build(&set);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn cycles_are_tolerated() {
        let set = set_of(vec![
            requirement("REQ-001", &["REQ-002"]),
            requirement("REQ-002", &["REQ-001"]),
        ]);
        let graph = DependencyGraph::build(&set);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn empty_set_builds_an_empty_graph() {
        let graph = DependencyGraph::build(&RequirementSet::default());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn long_descriptions_are_truncated_with_ellipsis() {
        assert_eq!(
            label("REQ-001", "A very long description that keeps going"),
            "REQ-001\nA very long descript..."
        );
        assert_eq!(label("REQ-001", "Short"), "REQ-001\nShort");
        assert_eq!(label("REQ-001", ""), "REQ-001");
    }
}
