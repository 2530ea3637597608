//! Heat propagation: ignition, spread and extinguish passes over a `HeatGrid`

use crate::grid::HeatGrid;
use crate::rng::FireRng;

/// Set the whole bottom row to `max_heat`
pub fn ignite(grid: &mut HeatGrid, max_heat: u8) {
    let bottom = grid.bottom();
    grid.row_mut(bottom).fill(max_heat);
}

/// One full pass moving heat a row up, with sideways drift and random cooling.
///
/// Each source cell at `(x, y)` writes into row `y - 1`. A draw `d` from
/// `0..=spread` shifts the destination column by `1 - d` and cools the heat
/// by one on odd draws. Columns wrap around the row, so drift off one side
/// re-enters on the other and never touches a neighbouring row.
pub fn spread<R: FireRng + ?Sized>(grid: &mut HeatGrid, spread: u32, rng: &mut R) {
    let w = grid.width() as isize;

    for y in 1..grid.height() {
        for x in 0..grid.width() {
            let heat = grid.get(x, y);
            if heat == 0 {
                grid.set(x, y - 1, 0);
                continue;
            }

            let d = rng.next_in_range(spread + 1);
            let dx = 1 - d as isize;
            let dst = (x as isize + dx).rem_euclid(w) as usize;
            grid.set(dst, y - 1, heat.saturating_sub((d & 1) as u8));
        }
    }
}

/// Cool the bottom `rows` rows by a random amount in `0..=spread`
pub fn extinguish<R: FireRng + ?Sized>(grid: &mut HeatGrid, rows: usize, spread: u32, rng: &mut R) {
    let h = grid.height();
    for y in h.saturating_sub(rows)..h {
        for heat in grid.row_mut(y) {
            if *heat > 0 {
                let cool = rng.next_in_range(spread + 1);
                *heat = heat.saturating_sub(cool.min(u8::MAX as u32) as u8);
            }
        }
    }
}
