use crate::math::{Point2, Real, Vector2};
use crate::partitioning::SpatialHash;
use crate::utils::hashmap::{Entry, HashMap};

/// The result of welding a set of points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeldedPoints {
    /// The welded points, in order of first appearance of their bucket in the input.
    pub points: Vec<Point2<Real>>,
    /// For each input point, the index of the welded point it was merged into.
    pub indices: Vec<u32>,
}

impl WeldedPoints {
    /// The number of welded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is there no welded point?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Merges points falling in the same bucket of a regular grid.
///
/// Each coordinate `v` of a point is quantized to the bucket `floor(v / tolerance + 0.5)`, i.e.,
/// it is rounded to the nearest multiple of `tolerance` (halfway values being rounded up).
/// All the points sharing the same bucket on both axes are replaced by their average.
///
/// Merging is bucket-exact, not radius-exact: two points closer than `tolerance` but on each
/// side of a bucket boundary are not merged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointWelder {
    tolerance: Real,
}

impl PointWelder {
    /// Creates a welder with the given tolerance.
    ///
    /// The tolerance must be finite and strictly positive.
    pub fn new(tolerance: Real) -> Self {
        Self { tolerance }
    }

    /// The welding tolerance.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// The bucket of the point `pt`.
    #[inline]
    pub fn bucket_key(&self, pt: &Point2<Real>) -> [i64; 2] {
        [
            (pt.x / self.tolerance + 0.5).floor() as i64,
            (pt.y / self.tolerance + 0.5).floor() as i64,
        ]
    }

    /// Welds the given points.
    pub fn weld(&self, points: &[Point2<Real>]) -> WeldedPoints {
        let mut buckets = HashMap::default();
        let mut sums: Vec<(Vector2<Real>, u32)> = vec![];
        let mut indices = Vec::with_capacity(points.len());

        for pt in points {
            let id = match buckets.entry(self.bucket_key(pt)) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    let id = sums.len() as u32;
                    sums.push((Vector2::zeros(), 0));
                    let _ = entry.insert(id);
                    id
                }
            };

            let sum = &mut sums[id as usize];
            sum.0 += pt.coords;
            sum.1 += 1;
            indices.push(id);
        }

        let points: Vec<_> = sums
            .into_iter()
            .map(|(sum, count)| Point2::from(sum / count as Real))
            .collect();

        if log::log_enabled!(log::Level::Debug) {
            let near_misses = self.count_near_misses(&points);
            if near_misses > 0 {
                log::debug!(
                    "{} pairs of welded points are closer than the welding tolerance {} but fell in distinct buckets",
                    near_misses,
                    self.tolerance
                );
            }
        }

        WeldedPoints { points, indices }
    }

    /// Counts the pairs of distinct welded points that are closer than the tolerance.
    ///
    /// Such pairs are a consequence of bucket-exact welding: they were not merged because they
    /// were quantized to adjacent buckets.
    pub fn count_near_misses(&self, welded: &[Point2<Real>]) -> usize {
        let mut hash = SpatialHash::new(self.tolerance);
        for (i, pt) in welded.iter().enumerate() {
            hash.insert(i as u32, pt);
        }

        let mut count = 0;
        for (i, pt) in welded.iter().enumerate() {
            hash.for_each_neighbor(pt, |j| {
                if j as usize > i && na::distance(pt, &welded[j as usize]) < self.tolerance {
                    count += 1;
                }
            });
        }

        count
    }
}
