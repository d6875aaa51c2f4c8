use thiserror::Error;

/// Errors produced by point-set construction, center initialization,
/// and the Lloyd iteration itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// A coordinate's length disagrees with the dimension fixed by the
    /// first coordinate of the point set.
    #[error("coordinate dimension mismatch at index {index}: expected {expected}, got {got}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// A point set must contain at least one coordinate.
    #[error("point set cannot be empty")]
    EmptyPointSet,

    /// Requested cluster count is outside [1, N].
    #[error("invalid cluster count {k}: must be in [1, {n}]")]
    InvalidClusterCount { k: usize, n: usize },

    /// A center's identifier does not match its storage position, so
    /// the snapshot would not be indexable by identifier.
    #[error("center at index {index} carries identifier {cluster_id}: centers must be stored in identifier order 0..K-1")]
    InvalidCenterIdentifier { index: usize, cluster_id: usize },

    /// Requested cluster count exceeds the number of distinct
    /// coordinates, so sampling without replacement is impossible.
    #[error("insufficient distinct points: requested {k} centers but only {distinct} distinct coordinates exist")]
    InsufficientDistinctPoints { k: usize, distinct: usize },

    /// A cluster ended an iteration with no members; its mean is
    /// undefined. The run is left in a terminal failed state and the
    /// caller decides whether to restart with a new initialization.
    #[error("cluster {cluster_id} has no members after iteration {iteration}")]
    EmptyCluster { cluster_id: usize, iteration: usize },

    /// The run previously failed and cannot be stepped further.
    #[error("clustering run is in a failed state and cannot be stepped")]
    RunFailed,
}

pub type Result<T> = std::result::Result<T, ClusterError>;
