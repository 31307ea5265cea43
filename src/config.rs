/// Default board size, matching the original 17x29 portrait layout
pub const DEFAULT_WIDTH: usize = 17;
pub const DEFAULT_HEIGHT: usize = 29;

/// Frames between generations while running
pub const DEFAULT_UPDATE_RATE: u32 = 4;

/// Render loop frames per second
pub const DEFAULT_FPS: u32 = 30;

/// Resolved runtime configuration for the simulation
#[derive(Clone)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub update_rate: u32,
    pub fps: u32,
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            update_rate: DEFAULT_UPDATE_RATE,
            fps: DEFAULT_FPS,
            seed: None,
        }
    }
}
