pub mod transport;
pub mod types;

pub use transport::Transport;
pub use types::{DriftDetection, ModelInfo};
