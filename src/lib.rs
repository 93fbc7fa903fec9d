pub mod error;
pub mod graph;
pub mod io;
pub mod problems;

pub use error::{Error, Result};
pub use graph::{max_flow, min_cost_flow, min_cost_max_flow, FlowNetwork, FlowResult, NodeId};
