/// Row-major grid of heat levels, row 0 at the top
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl HeatGrid {
    /// All cells start unlit
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, heat: u8) {
        let idx = self.index(x, y);
        self.cells[idx] = heat;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Row holding the ignition source
    pub fn bottom(&self) -> usize {
        self.height - 1
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn max_heat(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn is_cold(&self) -> bool {
        self.cells.iter().all(|&h| h == 0)
    }
}
