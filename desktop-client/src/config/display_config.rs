use common::storage::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    /// Side of one board cell in pixels.
    pub cell_size: f32,
    pub grid_opacity: f32,
    pub show_grid: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(4.0..=40.0).contains(&self.cell_size) {
            return Err(format!(
                "Cell size must be between 4 and 40 pixels, got {}",
                self.cell_size
            ));
        }
        if !(0.0..=1.0).contains(&self.grid_opacity) {
            return Err(format!(
                "Grid opacity must be between 0 and 1, got {}",
                self.grid_opacity
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            grid_opacity: 0.2,
            show_grid: true,
        }
    }
}
