//! Simulation controller: play/pause state, tick throttle, display colors.
//!
//! The presentation loop calls [`Simulation::on_frame`] once per rendered
//! frame; the grid only advances every `update_rate` frames while running,
//! so simulation speed is decoupled from the frame rate.

use crate::config::LifeConfig;
use crate::grid::{Grid, GridError};
use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed fill for dead cells, contrasting with the grayscale live fill.
const DEAD_COLOR: Color = Color::Rgb { r: 25, g: 24, b: 25 };

/// Scale and floor for mapping live fraction to a gray level.
const GRAY_SCALE: f64 = 500.0;
const GRAY_FLOOR: u32 = 30;

pub struct Simulation {
    grid: Grid,
    running: bool,
    tick: u32,
    update_rate: u32,
    generation: u64,
    live_color: Color,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: &LifeConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.width, config.height)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sim = Self {
            grid,
            running: false,
            tick: 0,
            update_rate: config.update_rate.max(1),
            generation: 0,
            live_color: DEAD_COLOR,
            rng,
        };
        sim.recompute_colors();
        Ok(sim)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flip between running and paused. The tick counter keeps its value so
    /// resuming continues the throttle window where it left off.
    pub fn toggle_play(&mut self) {
        self.running = !self.running;
    }

    /// Advance exactly one generation, paused or not.
    pub fn step(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
    }

    /// Kill the whole board. Running state and tick counter are untouched.
    pub fn reset_board(&mut self) {
        self.grid.reset();
    }

    /// Re-roll the board weighted by its own current live fraction.
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut self.rng);
    }

    /// Toggle a single cell, permitted at any time including mid-run.
    pub fn on_tile(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.toggle(x, y)
    }

    /// Per-frame hook. Colors are refreshed every frame; the grid advances
    /// only while running, once per `update_rate` frames.
    pub fn on_frame(&mut self) {
        self.recompute_colors();
        if !self.running {
            return;
        }
        self.tick += 1;
        if self.tick == self.update_rate {
            self.tick = 0;
            self.step();
        }
    }

    /// Uniform fill for living cells this frame: brighter the more of the
    /// board is alive, clamped to a visible range.
    pub fn live_color(&self) -> Color {
        self.live_color
    }

    pub fn dead_color(&self) -> Color {
        DEAD_COLOR
    }

    fn recompute_colors(&mut self) {
        let gray = ((self.grid.live_fraction() * GRAY_SCALE) as u32 + GRAY_FLOOR).min(255) as u8;
        self.live_color = Color::Rgb {
            r: gray,
            g: gray,
            b: gray,
        };
    }
}
