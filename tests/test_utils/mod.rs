use cluster_engine::kmeans::Center;
use cluster_engine::point_set::PointSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a point set from 2-D coordinate pairs.
#[allow(dead_code)]
pub fn point_set_2d(coords: &[(f32, f32)]) -> PointSet {
    PointSet::new(coords.iter().map(|&(x, y)| vec![x, y]).collect())
        .expect("valid 2-D coordinates")
}

/// The canonical two-blob dataset: two tight pairs far apart.
#[allow(dead_code)]
pub fn two_blob_points() -> PointSet {
    point_set_2d(&[(0.0, 0.0), (0.0, 1.0), (10.0, 10.0), (10.0, 11.0)])
}

/// Initial centers placed on the blob anchors, identifiers in order.
#[allow(dead_code)]
pub fn two_blob_centers() -> Vec<Center> {
    vec![
        Center::new(0, vec![0.0, 0.0]),
        Center::new(1, vec![10.0, 10.0]),
    ]
}

/// Synthetic data with well-separated clusters, reproducible per seed.
/// Returns one coordinate per point, `num_clusters * points_per_cluster`
/// points total, cluster c offset by `separation * c` on every axis.
#[allow(dead_code)]
pub fn gaussian_clusters(
    num_clusters: usize,
    points_per_cluster: usize,
    dim: usize,
    separation: f32,
    seed: u64,
) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coords = Vec::with_capacity(num_clusters * points_per_cluster);

    for c in 0..num_clusters {
        let offset = separation * c as f32;
        for _ in 0..points_per_cluster {
            let coordinate = (0..dim)
                .map(|_| offset + rng.gen_range(-0.5..0.5))
                .collect();
            coords.push(coordinate);
        }
    }
    coords
}
