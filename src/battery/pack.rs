use nalgebra::DVector;
use rand::Rng;

use super::cell::Cell;

// ---------------------------------------------------------------------------
// Series pack: every cell carries the same current
// ---------------------------------------------------------------------------

/// Electrical snapshot of the pack after one update.
#[derive(Debug, Clone, PartialEq)]
pub struct PackSample {
    /// Terminal voltage of each cell, in stack order.
    pub cell_voltages: DVector<f64>,
    /// Sum of the cell voltages, V.
    pub voltage: f64,
    /// Mean cell SoC, percent.
    pub soc: f64,
}

impl PackSample {
    pub fn cell_max(&self) -> f64 {
        self.cell_voltages.max()
    }

    pub fn cell_min(&self) -> f64 {
        self.cell_voltages.min()
    }

    /// Spread between the strongest and weakest cell, V.
    pub fn imbalance(&self) -> f64 {
        self.cell_max() - self.cell_min()
    }
}

#[derive(Debug, Clone)]
pub struct Pack {
    cells: Vec<Cell>,
}

impl Pack {
    /// Build `count` independently sampled cells.
    pub fn sample<R: Rng + ?Sized>(
        count: usize,
        nominal_capacity_ah: f64,
        nominal_resistance_mohm: f64,
        nominal_voltage: f64,
        rng: &mut R,
    ) -> Self {
        let cells = (0..count)
            .map(|_| Cell::sample(nominal_capacity_ah, nominal_resistance_mohm, nominal_voltage, rng))
            .collect();
        Self { cells }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells in series.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Mean of per-cell SoC fractions, as a percentage.
    pub fn soc(&self) -> f64 {
        let sum: f64 = self.cells.iter().map(Cell::soc).sum();
        sum / self.cells.len() as f64 * 100.0
    }

    /// Push `current_amps` through the whole stack for `dt` seconds.
    pub fn update(&mut self, current_amps: f64, dt: f64) -> PackSample {
        let cell_voltages = DVector::from_iterator(
            self.cells.len(),
            self.cells.iter_mut().map(|c| c.update(current_amps, dt)),
        );
        let voltage = cell_voltages.sum();

        PackSample { cell_voltages, voltage, soc: self.soc() }
    }
}
