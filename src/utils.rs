use wide::f32x8;

/// Euclidean distance between two equal-length coordinates.
///
/// Panics if the lengths differ; the point set's dimension invariant
/// guarantees this never happens for coordinates from one run.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance, SIMD over 8-lane chunks with a scalar tail.
pub fn euclidean_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(
        a.len(),
        b.len(),
        "coordinate dimension mismatch: {} vs {}",
        a.len(),
        b.len()
    );
    let dim = a.len();
    let mut j = 0;

    // SIMD 8-element chunks
    let mut acc = f32x8::splat(0.0);
    while j + 8 <= dim {
        let x: [f32; 8] = a[j..j + 8].try_into().unwrap();
        let y: [f32; 8] = b[j..j + 8].try_into().unwrap();
        let diff = f32x8::from(x) - f32x8::from(y);
        acc += diff * diff;
        j += 8;
    }

    // Tail elements
    let mut tail = 0.0;
    while j < dim {
        let diff = a[j] - b[j];
        tail += diff * diff;
        j += 1;
    }

    acc.reduce_add() + tail
}
