use murmuration_data::AgentId;

#[derive(Clone, Debug)]
/// Uniform grid over the simulated area for proximity queries.
///
/// Every placed agent lives in exactly one cell. Unlike a rebuild-per-tick index, cells
/// are updated incrementally on insert, relocate and remove, so a query issued halfway
/// through a tick sees the positions committed so far.
///
/// # Performance Characteristics
/// - Insert / remove / relocate: O(cell occupancy)
/// - Radius query: O(cells overlapped + agents in them)
/// - Memory: O(agents) for ids + O(cols * rows) for cell headers
///
/// # Fields
/// - `cell_size`: Width/height of each grid cell in world units
/// - `width/height`: World dimensions in world units
/// - `cols/rows`: Grid dimensions (# cells horizontally/vertically)
/// - `wrap`: Whether queries spill over the far edges of the area
///
/// # Examples
/// ```
/// use murmuration_core::spatial_hash::SpatialHash;
/// use murmuration_data::AgentId;
///
/// let mut grid = SpatialHash::new(10.0, 100.0, 100.0, false);
/// grid.insert(AgentId(1), 15.0, 15.0);
/// grid.insert(AgentId(2), 85.0, 85.0);
///
/// let mut nearby = Vec::new();
/// grid.query_into(15.0, 15.0, 20.0, &mut nearby);
/// assert_eq!(nearby, vec![AgentId(1)]);
/// ```
pub struct SpatialHash {
    pub cell_size: f64,
    pub width: f64,
    pub height: f64,
    pub cols: usize,
    pub rows: usize,
    wrap: bool,
    cells: Vec<Vec<AgentId>>,
    len: usize,
}

impl SpatialHash {
    /// Creates an empty grid covering `width` x `height`.
    ///
    /// A partial last column/row is allowed when the dimensions are not a multiple of
    /// `cell_size`.
    pub fn new(cell_size: f64, width: f64, height: f64, wrap: bool) -> Self {
        let cols = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);
        Self {
            cell_size,
            width,
            height,
            cols,
            rows,
            wrap,
            cells: vec![Vec::new(); cols * rows],
            len: 0,
        }
    }

    /// Computes the cell index for a world coordinate.
    ///
    /// Handles edge cases:
    /// - Non-finite or negative coordinates return None
    /// - Coordinates more than one cell past the far edge return None
    /// - Overflow protection via i32 boundary checks
    ///
    /// Coordinates sitting on the far edge fold into the last column/row.
    #[inline]
    pub fn get_cell_idx(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        if x > i32::MAX as f64 * self.cell_size || y > i32::MAX as f64 * self.cell_size {
            return None;
        }

        let cx = (x / self.cell_size) as usize;
        let cy = (y / self.cell_size) as usize;
        if cx > self.cols || cy > self.rows {
            return None;
        }
        Some(cy.min(self.rows - 1) * self.cols + cx.min(self.cols - 1))
    }

    /// Files `id` under the cell containing `(x, y)` and returns that cell.
    pub fn insert(&mut self, id: AgentId, x: f64, y: f64) -> Option<usize> {
        let cell = self.get_cell_idx(x, y)?;
        self.cells[cell].push(id);
        self.len += 1;
        Some(cell)
    }

    /// Removes `id` from `cell`. Returns whether it was present.
    pub fn remove(&mut self, id: AgentId, cell: usize) -> bool {
        let Some(bucket) = self.cells.get_mut(cell) else {
            return false;
        };
        match bucket.iter().position(|&other| other == id) {
            Some(slot) => {
                bucket.swap_remove(slot);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Moves `id` out of `from` into the cell containing `(x, y)`.
    ///
    /// Returns the new cell, or None (leaving the grid untouched) if the target
    /// coordinate has no cell or `id` was not filed under `from`.
    pub fn relocate(&mut self, id: AgentId, from: usize, x: f64, y: f64) -> Option<usize> {
        let to = self.get_cell_idx(x, y)?;
        if to == from {
            return Some(to);
        }
        if !self.remove(id, from) {
            return None;
        }
        self.cells[to].push(id);
        self.len += 1;
        Some(to)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits every id filed in a cell overlapping the square of half-side `radius`
    /// around `(x, y)`. Each overlapping cell is visited once, even when the square
    /// wraps around the whole torus.
    ///
    /// Candidates are not distance-filtered.
    pub fn query_callback<F>(&self, x: f64, y: f64, radius: f64, mut callback: F)
    where
        F: FnMut(AgentId),
    {
        if !x.is_finite() || !y.is_finite() || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let cols = self.axis_cells(x, radius, self.width, self.cols);
        let rows = self.axis_cells(y, radius, self.height, self.rows);

        for &cy in &rows {
            for &cx in &cols {
                for &id in &self.cells[cy * self.cols + cx] {
                    callback(id);
                }
            }
        }
    }

    #[inline]
    pub fn query_into(&self, x: f64, y: f64, radius: f64, result: &mut Vec<AgentId>) {
        result.clear();
        self.query_callback(x, y, radius, |id| result.push(id));
    }

    /// Cell coordinates along one axis touched by `[center - radius, center + radius]`.
    fn axis_cells(&self, center: f64, radius: f64, extent: f64, count: usize) -> Vec<usize> {
        let lo = center - radius;
        let hi = center + radius;

        if self.wrap && hi - lo >= extent {
            return (0..count).collect();
        }

        let mut spans = [(lo, hi), (f64::NAN, f64::NAN)];
        if self.wrap {
            if lo < 0.0 {
                spans = [(0.0, hi), (lo + extent, extent)];
            } else if hi >= extent {
                spans = [(lo, extent), (0.0, hi - extent)];
            }
        }

        let last = count as i64 - 1;
        let mut cells = Vec::with_capacity(count.min(8));
        for (a, b) in spans {
            if a.is_nan() {
                continue;
            }
            let first = ((a / self.cell_size).floor() as i64).clamp(0, last);
            let end = ((b / self.cell_size).floor() as i64).clamp(0, last);
            cells.extend((first..=end).map(|c| c as usize));
        }
        cells.sort_unstable();
        cells.dedup();
        cells
    }
}
