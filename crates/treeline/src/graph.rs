//! Graph model: id lookup, edges, roots and depth assignment.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::geometry::Point;

/// One parsed record.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    /// Raw label text. May be empty.
    pub label: String,
    /// Child ids in record order. Duplicates and unknown ids are kept.
    pub children: Vec<String>,
    /// Persisted position, present only when the record carried a valid `x;y`.
    pub position: Option<Point>,
}

/// A directed connector from a parent to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The node sequence of one diagram plus an id index.
///
/// Ids are expected to be unique but this is not enforced. Every record stays in
/// the node sequence; for id-keyed lookups the first record with that id wins.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.contains_key(&node.id) {
                tracing::warn!(id = %node.id, record = i, "duplicate node id; first record wins");
            } else {
                index.insert(node.id.clone(), i);
            }
        }
        let graph = Self { nodes, index };
        for (parent, child) in graph.dangling_references() {
            tracing::warn!(parent, child, "child id has no record; its edge will not be drawn");
        }
        graph
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node carrying `id`.
    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// One edge per children entry, in record order. Dangling targets are kept.
    pub fn edges(&self) -> Vec<Edge> {
        self.nodes
            .iter()
            .flat_map(|node| {
                node.children
                    .iter()
                    .map(move |child| Edge::new(node.id.clone(), child.clone()))
            })
            .collect()
    }

    /// Ids that never appear in any children list, in input order without repeats.
    ///
    /// Empty when every node is somebody's child (a pure cycle or self-reference).
    pub fn roots(&self) -> Vec<&str> {
        let referenced: HashSet<&str> = self
            .nodes
            .iter()
            .flat_map(|n| n.children.iter().map(String::as_str))
            .collect();
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !referenced.contains(id) && seen.insert(*id))
            .collect()
    }

    /// Ids that appear on more than one record, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !seen.insert(*id) && reported.insert(*id))
            .collect()
    }

    /// `(parent, child)` pairs whose child id has no record.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .flat_map(|n| {
                n.children
                    .iter()
                    .filter(|c| !self.contains(c))
                    .map(move |c| (n.id.as_str(), c.as_str()))
            })
            .collect()
    }

    /// Depth of every distinct id.
    ///
    /// Roots sit at depth 0. A node reached along several paths takes the longest
    /// one, so it lands below all of its parents. Edges that close a cycle (the
    /// child is already on the walk from a root) are ignored, which keeps the
    /// assignment finite. Nodes no root reaches fall back to depth 0.
    ///
    /// A walk that followed cycle-closing edges once would push nodes deeper
    /// instead: in `r -> a -> b -> a` it would put `a` at 3 and a self-loop
    /// `r -> s -> s` would leave `s` at 2. Here `a` stays at 1 and `s` at 1, so
    /// the depth of a cycle member depends only on its acyclic parents.
    pub fn depths(&self) -> HashMap<String, usize> {
        // Work on canonical indices: the first record of each id.
        let canonical: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.index.get(&self.nodes[i].id) == Some(&i))
            .collect();
        let slot: HashMap<usize, usize> = canonical
            .iter()
            .enumerate()
            .map(|(slot, &i)| (i, slot))
            .collect();
        let adjacency: Vec<Vec<usize>> = canonical
            .iter()
            .map(|&i| {
                self.nodes[i]
                    .children
                    .iter()
                    .filter_map(|c| self.index.get(c).map(|ci| slot[ci]))
                    .collect()
            })
            .collect();

        let n = canonical.len();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut back_edges: HashSet<(usize, usize)> = HashSet::new();

        fn dfs(
            v: usize,
            adjacency: &[Vec<usize>],
            visited: &mut [bool],
            on_stack: &mut [bool],
            back_edges: &mut HashSet<(usize, usize)>,
        ) {
            visited[v] = true;
            on_stack[v] = true;
            for &w in &adjacency[v] {
                if on_stack[w] {
                    back_edges.insert((v, w));
                } else if !visited[w] {
                    dfs(w, adjacency, visited, on_stack, back_edges);
                }
            }
            on_stack[v] = false;
        }

        let roots: Vec<usize> = self
            .roots()
            .into_iter()
            .filter_map(|id| self.index.get(id).map(|i| slot[i]))
            .collect();
        for &root in &roots {
            if !visited[root] {
                dfs(root, &adjacency, &mut visited, &mut on_stack, &mut back_edges);
            }
        }
        if !back_edges.is_empty() {
            tracing::debug!(count = back_edges.len(), "ignoring cycle-closing edges for depth");
        }

        // Longest path over the reached, cycle-free part.
        let mut indegree = vec![0usize; n];
        for v in (0..n).filter(|&v| visited[v]) {
            for &w in &adjacency[v] {
                if !back_edges.contains(&(v, w)) {
                    indegree[w] += 1;
                }
            }
        }
        let mut depth = vec![0usize; n];
        let mut queue: VecDeque<usize> = (0..n)
            .filter(|&v| visited[v] && indegree[v] == 0)
            .collect();
        while let Some(v) = queue.pop_front() {
            for &w in &adjacency[v] {
                if back_edges.contains(&(v, w)) {
                    continue;
                }
                depth[w] = depth[w].max(depth[v] + 1);
                indegree[w] -= 1;
                if indegree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }

        canonical
            .iter()
            .enumerate()
            .map(|(slot, &i)| (self.nodes[i].id.clone(), depth[slot]))
            .collect()
    }
}
