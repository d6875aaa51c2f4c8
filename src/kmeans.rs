use crate::error::{ClusterError, Result};
use crate::point_set::PointSet;
use crate::utils::euclidean_distance;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A cluster center. The identifier is assigned at initialization
/// (0..K-1, in storage order) and never reassigned.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Center {
    pub cluster_id: usize,
    pub coordinate: Vec<f32>,
}

impl Center {
    pub fn new(cluster_id: usize, coordinate: Vec<f32>) -> Self {
        Center {
            cluster_id,
            coordinate,
        }
    }
}

/// Lifecycle of a [`ClusteringRun`].
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Stability has not been observed yet.
    Running,
    /// The last step left every center exactly unchanged.
    Converged,
    /// A cluster lost all members; the run is terminal and rejects
    /// further steps.
    Failed,
}

/// One Lloyd clustering run: owns its point set and the full history of
/// center snapshots, one per iteration, with `center_history()[0]`
/// being the caller-supplied initial centers.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ClusteringRun {
    points: PointSet,
    history: Vec<Vec<Center>>,
    state: RunState,
    k: usize,
}

impl ClusteringRun {
    /// Build a run over `points` starting from `initial_centers`.
    ///
    /// Centers must be stored in identifier order 0..K-1 (as produced
    /// by [`crate::init::sample_initial_centers`]) and share the point
    /// set's dimension; K must lie in [1, N].
    pub fn new(points: PointSet, initial_centers: Vec<Center>) -> Result<Self> {
        let k = initial_centers.len();
        if k == 0 || k > points.len() {
            return Err(ClusterError::InvalidClusterCount {
                k,
                n: points.len(),
            });
        }
        for (i, center) in initial_centers.iter().enumerate() {
            if center.coordinate.len() != points.dimension() {
                return Err(ClusterError::DimensionMismatch {
                    index: i,
                    expected: points.dimension(),
                    got: center.coordinate.len(),
                });
            }
            if center.cluster_id != i {
                return Err(ClusterError::InvalidCenterIdentifier {
                    index: i,
                    cluster_id: center.cluster_id,
                });
            }
        }

        Ok(ClusteringRun {
            points,
            history: vec![initial_centers],
            state: RunState::Running,
            k,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// All center snapshots so far, index 0 = initial centers. Grows by
    /// exactly one per successful step.
    pub fn center_history(&self) -> &[Vec<Center>] {
        &self.history
    }

    /// Number of successful steps performed so far.
    pub fn iterations(&self) -> usize {
        self.history.len() - 1
    }

    /// Final label per point; `None` until the first step has run.
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.points.labels()
    }

    /// One Lloyd iteration: reassign every point to its nearest center,
    /// recompute centers as member means, append the new snapshot, and
    /// report stability.
    ///
    /// Stability is *exact* componentwise f32 equality between the new
    /// and previous snapshots, not an epsilon test. This is sensitive
    /// to floating-point noise in the mean recomputation and is the
    /// intended behavior; the iteration cap in
    /// [`run_to_convergence`](Self::run_to_convergence) bounds inputs
    /// that never reach bit-exact equality.
    ///
    /// Ties in the distance scan go to the first center examined, i.e.
    /// the lowest identifier. A cluster ending the pass with no members
    /// fails the step, moves the run to [`RunState::Failed`], and every
    /// later step is rejected. Stepping a [`RunState::Converged`] run
    /// is permitted and reproduces the snapshot.
    pub fn step(&mut self) -> Result<bool> {
        if self.state == RunState::Failed {
            return Err(ClusterError::RunFailed);
        }

        let iteration = self.history.len();
        let current = &self.history[iteration - 1];

        // Assignment: scan centers in identifier order, first-seen-wins
        // on exact ties. The running minimum is an explicit Option
        // sentinel, None meaning no distance recorded yet.
        let new_labels: Vec<usize> = self
            .points
            .points()
            .par_iter()
            .map(|point| {
                let mut nearest = 0;
                let mut min_distance: Option<f32> = None;
                for center in current {
                    let d = euclidean_distance(&point.coordinate, &center.coordinate);
                    if min_distance.map_or(true, |m| d < m) {
                        min_distance = Some(d);
                        nearest = center.cluster_id;
                    }
                }
                nearest
            })
            .collect();

        // Membership index, dense by cluster identifier.
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); self.k];
        for (i, &label) in new_labels.iter().enumerate() {
            self.points.set_label(i, label);
            members[label].push(i);
        }

        // A memberless cluster has no defined mean; fail before
        // computing anything.
        for (cluster_id, m) in members.iter().enumerate() {
            if m.is_empty() {
                self.state = RunState::Failed;
                return Err(ClusterError::EmptyCluster {
                    cluster_id,
                    iteration,
                });
            }
        }

        // New center per cluster = coordinate-wise mean of its members.
        let dim = self.points.dimension();
        let new_snapshot: Vec<Center> = members
            .iter()
            .enumerate()
            .map(|(cluster_id, member_idx)| {
                let mut sum = vec![0.0f32; dim];
                for &i in member_idx {
                    for (axis, v) in self.points.points()[i].coordinate.iter().enumerate() {
                        sum[axis] += v;
                    }
                }
                let count = member_idx.len() as f32;
                let coordinate = sum.into_iter().map(|s| s / count).collect();
                Center::new(cluster_id, coordinate)
            })
            .collect();

        let stable = current
            .iter()
            .zip(new_snapshot.iter())
            .all(|(old, new)| old.coordinate == new.coordinate);

        self.history.push(new_snapshot);
        if stable {
            self.state = RunState::Converged;
        }
        debug!(iteration, stable, "lloyd step complete");
        Ok(stable)
    }

    /// Step until the run converges, up to `max_iterations` further
    /// steps when a cap is given. Returns the number of steps performed
    /// by this call; the run is left `Running` if the cap was hit
    /// first.
    pub fn run_to_convergence(&mut self, max_iterations: Option<usize>) -> Result<usize> {
        let mut performed = 0;
        while self.state != RunState::Converged {
            if let Some(cap) = max_iterations {
                if performed >= cap {
                    break;
                }
            }
            self.step()?;
            performed += 1;
        }
        Ok(performed)
    }
}
