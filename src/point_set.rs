use crate::error::{ClusterError, Result};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single coordinate with its (initially unset) cluster label.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Point {
    pub coordinate: Vec<f32>,
    pub label: Option<usize>,
}

impl Point {
    pub fn new(coordinate: Vec<f32>) -> Self {
        Point {
            coordinate,
            label: None,
        }
    }
}

/// An ordered, fixed-shape collection of points sharing one dimension.
///
/// Points can never be added or removed after construction; only their
/// labels are mutated, and only through [`PointSet::set_label`].
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    dimension: usize,
}

impl PointSet {
    /// Build a point set from raw coordinates. Every coordinate must
    /// have the same length as the first.
    pub fn new(coordinates: Vec<Vec<f32>>) -> Result<Self> {
        let first = coordinates.first().ok_or(ClusterError::EmptyPointSet)?;
        let dimension = first.len();

        for (i, c) in coordinates.iter().enumerate() {
            if c.len() != dimension {
                return Err(ClusterError::DimensionMismatch {
                    index: i,
                    expected: dimension,
                    got: c.len(),
                });
            }
        }

        let points = coordinates.into_iter().map(Point::new).collect();
        Ok(PointSet { points, dimension })
    }

    /// Build a point set from a rectangular table, one point per row.
    pub fn from_matrix(data: &Array2<f32>) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(ClusterError::EmptyPointSet);
        }
        let coordinates = data
            .axis_iter(Axis(0))
            .map(|row| row.to_vec())
            .collect();
        Self::new(coordinates)
    }

    /// Pair two columns of equal length into a 2-D point set, the shape
    /// each attribute-pair clustering task consumes.
    pub fn from_columns(x: &[f32], y: &[f32]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ClusterError::DimensionMismatch {
                index: 0,
                expected: x.len(),
                got: y.len(),
            });
        }
        let coordinates = x
            .iter()
            .zip(y.iter())
            .map(|(&a, &b)| vec![a, b])
            .collect();
        Self::new(coordinates)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn set_label(&mut self, index: usize, label: usize) {
        self.points[index].label = Some(label);
    }

    /// Final label per point. `None` entries mean the point was never
    /// classified (no step has run yet).
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.points.iter().map(|p| p.label).collect()
    }

    /// The distinct coordinates present in the set, in first-seen
    /// order. Duplicate rows collapse to one candidate, so initial
    /// centers can be sampled without replacement even when the source
    /// table repeats values. Distinctness follows f32 equality: keys
    /// are bit patterns with both zero signs collapsed to +0.0.
    pub fn distinct_coordinates(&self) -> Vec<Vec<f32>> {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for p in &self.points {
            let key: Vec<u32> = p
                .coordinate
                .iter()
                .map(|v| if *v == 0.0 { 0.0f32 } else { *v }.to_bits())
                .collect();
            if seen.insert(key) {
                distinct.push(p.coordinate.clone());
            }
        }
        distinct
    }
}
