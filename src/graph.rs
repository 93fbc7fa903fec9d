pub mod bellman_ford;
pub mod dinic;
pub mod min_cost_flow;
pub mod network;
pub mod node;


pub use bellman_ford::residual_distances;
pub use dinic::{cut_capacity, max_flow, min_cut};
pub use min_cost_flow::{min_cost_flow, min_cost_flow_exact, min_cost_max_flow, FlowResult};
pub use network::{Edge, EdgeId, FlowNetwork, FlowNum};
pub use node::{NodeBlock, NodeId, NodeLayout};
