pub mod graph_ops;
pub mod scalar_ops;
