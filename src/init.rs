use crate::error::{ClusterError, Result};
use crate::kmeans::Center;
use crate::point_set::PointSet;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Draw `k` initial centers uniformly at random, without replacement,
/// from the distinct coordinates of `points`. Identifiers 0..k-1 are
/// assigned in draw order and stay fixed for the run's lifetime.
///
/// The RNG is caller-supplied so runs are reproducible under a fixed
/// seed.
pub fn sample_initial_centers<R: Rng + ?Sized>(
    points: &PointSet,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Center>> {
    if k == 0 {
        return Err(ClusterError::InvalidClusterCount {
            k,
            n: points.len(),
        });
    }

    // The distinct count never exceeds N, so this also rejects K > N.
    let candidates = points.distinct_coordinates();
    if k > candidates.len() {
        return Err(ClusterError::InsufficientDistinctPoints {
            k,
            distinct: candidates.len(),
        });
    }

    let centers: Vec<Center> = candidates
        .choose_multiple(rng, k)
        .enumerate()
        .map(|(id, coordinate)| Center::new(id, coordinate.clone()))
        .collect();

    debug!(k, distinct = candidates.len(), "sampled initial centers");
    Ok(centers)
}
