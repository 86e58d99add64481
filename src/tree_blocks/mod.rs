pub mod connection;
pub mod path_node;
pub mod path_tree;
pub mod visualize;
