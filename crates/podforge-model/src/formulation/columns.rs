//! Cube column space.

/// The cube columns of a round: one per real cube, padded with virtual
/// "no cube" columns up to the pod count.
///
/// Columns `0..cube_count` are the real cubes in instance order; the rest
/// are virtual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpace {
    cube_count: usize,
    width: usize,
}

impl ColumnSpace {
    pub fn new(cube_count: usize, pod_count: usize) -> Self {
        Self {
            cube_count,
            width: cube_count.max(pod_count),
        }
    }

    /// Total number of columns.
    pub fn len(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn cube_count(&self) -> usize {
        self.cube_count
    }

    pub fn virtual_count(&self) -> usize {
        self.width - self.cube_count
    }

    #[inline]
    pub fn is_real(&self, column: usize) -> bool {
        column < self.cube_count
    }

    /// Maps a column to its cube index, `None` for virtual columns.
    #[inline]
    pub fn cube(&self, column: usize) -> Option<usize> {
        self.is_real(column).then_some(column)
    }

    pub fn real(&self) -> std::ops::Range<usize> {
        0..self.cube_count
    }

    pub fn all(&self) -> std::ops::Range<usize> {
        0..self.width
    }
}
