use crate::Hub;
use crate::tree_blocks::path_node::{NodeId, NodeKind, ROOT};
use crate::tree_blocks::path_tree::PathTree;
use crate::tree_pair::TreePair;
use dot::{Edges, GraphWalk, Labeller, Nodes};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    tree: usize,
    id: NodeId,
}

#[derive(Debug, Clone)]
struct Edge {
    from: Node,
    to: Node,
    label: String,
}

struct Graph<'a> {
    pair: &'a TreePair<'a>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph<'_> {
    fn tree(&self, n: &Node) -> &PathTree {
        match n.tree {
            0 => self.pair.source_tree(),
            _ => self.pair.target_tree(),
        }
    }
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("TreePair").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        let prefix = if n.tree == 0 { "S" } else { "T" };
        dot::Id::new(format!("{}{}", prefix, n.id)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let node = self.tree(n).node(n.id);
        dot::LabelText::label(format!(
            "{}\n{}",
            self.pair.network().name(node.hub()),
            node.kind()
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.label.clone())
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.from
    }

    fn target(&self, e: &Edge) -> Node {
        e.to
    }
}

/// Renders both live trees of `pair` in DOT format.
///
/// Tree edges point from parent to child. Every recorded connection is drawn as one
/// extra edge between the roots, labelled with its interior hubs.
pub fn draw_tree_pair(pair: &TreePair) -> io::Result<String> {
    let mut graph = Graph {
        pair,
        nodes: Vec::new(),
        edges: Vec::new(),
    };

    for (tree, path_tree) in [pair.source_tree(), pair.target_tree()].into_iter().enumerate() {
        for (id, node) in path_tree.nodes() {
            graph.nodes.push(Node { tree, id });
            if let Some(parent) = node.parent() {
                graph.edges.push(Edge {
                    from: Node { tree, id: parent },
                    to: Node { tree, id },
                    label: String::new(),
                });
            }
        }
    }

    let roots = (Node { tree: 0, id: ROOT }, Node { tree: 1, id: ROOT });
    for connection in pair.connections() {
        let interior = pair.network().names(connection.interior());
        graph.edges.push(Edge {
            from: roots.0,
            to: roots.1,
            label: if interior.is_empty() {
                "direct".to_string()
            } else {
                interior.join(" ")
            },
        });
    }

    let mut buffer = io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer)?;
    String::from_utf8(buffer.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// One line per live node: indentation by depth, then hub name and role.
pub fn outline(tree: &PathTree, names: impl Fn(Hub) -> String) -> String {
    let mut output = String::new();
    let mut stack = vec![ROOT];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        let marker = match node.kind() {
            NodeKind::Root => "*",
            NodeKind::Trunk => "+",
            NodeKind::Branch { .. } => "-",
        };
        output.push_str(&format!(
            "{}{} {}\n",
            "  ".repeat(tree.depth(id)),
            marker,
            names(node.hub())
        ));
        stack.extend(node.children().iter().rev());
    }
    output
}
