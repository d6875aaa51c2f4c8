use crate::error::Result;
use crate::init::sample_initial_centers;
use crate::kmeans::{Center, ClusteringRun, RunState};
use crate::point_set::PointSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a clustering run.
#[derive(Clone, Debug)]
pub struct ClusterConfig {
    /// Number of clusters. Bounded above by the number of distinct
    /// coordinates in the data.
    pub k: usize,

    /// Seed for initial-center sampling. `None` draws from OS entropy;
    /// fixing it makes the whole run reproducible.
    pub seed: Option<u64>,

    /// Cap on Lloyd iterations. `None` loops until exact stability,
    /// matching the strict convergence test.
    pub max_iterations: Option<usize>,
}

impl ClusterConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seed: None,
            max_iterations: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Everything a reporting collaborator needs from a finished run.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ClusterOutcome {
    /// Final cluster label per point, in point order. `None` only when
    /// an iteration cap of zero stopped the run before any
    /// classification happened.
    pub labels: Vec<Option<usize>>,

    /// Center snapshots per iteration, index 0 = initial centers.
    pub center_history: Vec<Vec<Center>>,

    /// Lloyd iterations performed.
    pub iterations: usize,

    /// False only when an iteration cap stopped the run first.
    pub converged: bool,
}

/// Cluster one dataset: sample initial centers, build a run, and step
/// it to convergence (or the configured cap).
pub fn cluster(points: PointSet, cfg: &ClusterConfig) -> Result<ClusterOutcome> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let centers = sample_initial_centers(&points, cfg.k, &mut rng)?;
    let mut run = ClusteringRun::new(points, centers)?;
    run.run_to_convergence(cfg.max_iterations)?;

    let converged = run.state() == RunState::Converged;
    debug!(
        k = cfg.k,
        iterations = run.iterations(),
        converged,
        "clustering run finished"
    );

    Ok(ClusterOutcome {
        labels: run.labels(),
        center_history: run.center_history().to_vec(),
        iterations: run.iterations(),
        converged,
    })
}

/// Cluster several independent datasets in parallel, one run each.
/// Typical use is one 2-D task per attribute pair of a source table.
///
/// With a base seed, task `i` runs under `seed + i`, so a batch is as
/// reproducible as a single run.
pub fn cluster_batch(
    datasets: Vec<PointSet>,
    cfg: &ClusterConfig,
) -> Vec<Result<ClusterOutcome>> {
    datasets
        .into_par_iter()
        .enumerate()
        .map(|(i, points)| {
            let task_cfg = ClusterConfig {
                seed: cfg.seed.map(|s| s + i as u64),
                ..cfg.clone()
            };
            cluster(points, &task_cfg)
        })
        .collect()
}
