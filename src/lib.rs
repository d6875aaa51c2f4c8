pub mod api;
pub use api::{cluster, cluster_batch, ClusterConfig, ClusterOutcome};

pub mod error;
pub use error::{ClusterError, Result};

pub mod init;
pub mod kmeans;
pub mod point_set;
pub mod utils;

pub use init::sample_initial_centers;
pub use kmeans::{Center, ClusteringRun, RunState};
pub use point_set::{Point, PointSet};
