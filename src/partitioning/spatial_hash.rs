use crate::math::{Point2, Real};
use crate::utils::hashmap::HashMap;

/// A uniform 2D grid storing point indices, hashed by cell.
///
/// Points are stored in the cell `(floor(x / cell_size), floor(y / cell_size))`. There is no
/// removal operation: the grid is meant to be filled once then queried.
#[derive(Clone, Debug)]
pub struct SpatialHash {
    cell_size: Real,
    grid: HashMap<[i64; 2], Vec<u32>>,
}

impl SpatialHash {
    /// An empty grid with square cells of the given size.
    pub fn new(cell_size: Real) -> Self {
        Self {
            cell_size,
            grid: HashMap::default(),
        }
    }

    /// The size of the cells of this grid.
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The key of the cell containing `pt`.
    #[inline]
    pub fn cell_key(&self, pt: &Point2<Real>) -> [i64; 2] {
        [
            (pt.x / self.cell_size).floor() as i64,
            (pt.y / self.cell_size).floor() as i64,
        ]
    }

    /// Records the point identified by `index` at the position `pt`.
    pub fn insert(&mut self, index: u32, pt: &Point2<Real>) {
        let key = self.cell_key(pt);
        self.grid.entry(key).or_default().push(index);
    }

    /// Calls `f` on every index stored in the 3×3 block of cells centered on the cell
    /// containing `pt`.
    pub fn for_each_neighbor(&self, pt: &Point2<Real>, mut f: impl FnMut(u32)) {
        let [x, y] = self.cell_key(pt);

        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(cell) = self.grid.get(&[x + dx, y + dy]) {
                    cell.iter().copied().for_each(&mut f);
                }
            }
        }
    }

    /// All the indices stored in the 3×3 block of cells centered on the cell containing `pt`.
    pub fn neighbors(&self, pt: &Point2<Real>) -> Vec<u32> {
        let mut result = vec![];
        self.for_each_neighbor(pt, |i| result.push(i));
        result
    }

    /// The number of non-empty cells of this grid.
    pub fn num_cells(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod test {
    use super::SpatialHash;
    use crate::math::Point2;

    #[test]
    fn neighbors_cover_adjacent_cells_only() {
        let mut hash = SpatialHash::new(1.0);
        hash.insert(0, &Point2::new(0.5, 0.5));
        hash.insert(1, &Point2::new(1.5, 1.5));
        hash.insert(2, &Point2::new(-0.5, 0.2));
        hash.insert(3, &Point2::new(2.5, 0.5));
        hash.insert(4, &Point2::new(0.7, 0.1));

        assert_eq!(hash.num_cells(), 4);
        assert_eq!(hash.cell_key(&Point2::new(-0.5, 0.2)), [-1, 0]);

        let mut neighbors = hash.neighbors(&Point2::new(0.2, 0.9));
        neighbors.sort();
        assert_eq!(neighbors, vec![0, 1, 2, 4]);

        let mut neighbors = hash.neighbors(&Point2::new(10.0, 10.0));
        neighbors.sort();
        assert!(neighbors.is_empty());
    }
}
