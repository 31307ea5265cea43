//! Terminal presentation: control bar, board tiles, event plumbing.
//!
//! The simulation knows nothing about the terminal; this module owns a flat
//! list of button descriptors, translates mouse coordinates into controller
//! actions or cell toggles, and repaints the full back buffer every frame.

use crate::config::LifeConfig;
use crate::help::render_help_overlay;
use crate::sim::Simulation;
use crate::terminal::{rgb, Terminal};
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};
use crossterm::style::Color;
use std::io;
use std::time::Duration;

const HELP_TEXT: &str = "\
TERMLIFE
─────────────────
Space  Play/pause
s      Step one generation
c      Clear the board
r      Randomize (density-weighted)
Mouse  Click/drag tiles to toggle
?      Close help
q/Esc  Quit
─────────────────";

/// Each board cell is drawn this many columns wide and rows tall.
const TILE_WIDTH: u16 = 2;
const TILE_HEIGHT: u16 = 1;

const BUTTON_WIDTH: u16 = 8;

const PLAY_IDLE: Color = Color::Rgb { r: 197, g: 54, b: 54 };
const PLAY_ACTIVE: Color = Color::Rgb { r: 100, g: 148, b: 100 };
const CLEAR_COLOR: Color = Color::Rgb { r: 159, g: 170, b: 165 };
const STEP_COLOR: Color = Color::Rgb { r: 182, g: 203, b: 154 };
const RNG_COLOR: Color = Color::Rgb { r: 203, g: 140, b: 194 };

/// Controller operations a button can invoke
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    TogglePlay,
    Clear,
    Step,
    Randomize,
}

#[derive(Copy, Clone, Default, Debug)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }
}

/// Button descriptor: a rectangle, a fill color, a label, and the action it
/// fires. No widget hierarchy, just data.
pub struct Button {
    pub area: Area,
    pub color: Color,
    pub label: &'static str,
    pub action: Action,
}

/// Screen placement for the current terminal size. Rebuilt on resize rather
/// than kept in a mutable global.
pub struct Layout {
    pub board_width: usize,
    pub board_height: usize,
    pub origin_x: u16,
    pub origin_y: u16,
    pub buttons: Vec<Button>,
}

impl Layout {
    /// Place the control bar and center the board, or None if the terminal
    /// cannot fit them.
    pub fn build(term_w: u16, term_h: u16, board_width: usize, board_height: usize) -> Option<Self> {
        let board_cols = board_width as u16 * TILE_WIDTH;
        let board_rows = board_height as u16 * TILE_HEIGHT;

        let num_buttons = 4u16;
        let total_button_width = BUTTON_WIDTH * num_buttons;
        // control bar row, board below it, status line at the bottom
        let needed_h = 2 + board_rows + 2;
        let needed_w = board_cols.max(total_button_width + num_buttons + 1);
        if term_w < needed_w || term_h < needed_h {
            return None;
        }

        let gap = (term_w - total_button_width) / (num_buttons + 1);
        let bar_y = 1;
        let labels = [
            ("play", PLAY_IDLE, Action::TogglePlay),
            ("clear", CLEAR_COLOR, Action::Clear),
            ("step", STEP_COLOR, Action::Step),
            ("rng", RNG_COLOR, Action::Randomize),
        ];
        let buttons = labels
            .into_iter()
            .enumerate()
            .map(|(i, (label, color, action))| Button {
                area: Area {
                    x: gap * (i as u16 + 1) + BUTTON_WIDTH * i as u16,
                    y: bar_y,
                    width: BUTTON_WIDTH,
                    height: 1,
                },
                color,
                label,
                action,
            })
            .collect();

        Some(Self {
            board_width,
            board_height,
            origin_x: (term_w - board_cols) / 2,
            origin_y: 3,
            buttons,
        })
    }

    /// Map a terminal coordinate to a board cell, None if it misses the board.
    pub fn cell_at(&self, col: u16, row: u16) -> Option<(usize, usize)> {
        if col < self.origin_x || row < self.origin_y {
            return None;
        }
        let x = ((col - self.origin_x) / TILE_WIDTH) as usize;
        let y = ((row - self.origin_y) / TILE_HEIGHT) as usize;
        if x < self.board_width && y < self.board_height {
            Some((x, y))
        } else {
            None
        }
    }

    /// Which button, if any, sits under a terminal coordinate.
    pub fn button_at(&self, col: u16, row: u16) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.area.contains(col, row))
            .map(|b| b.action)
    }
}

/// Run the interactive loop until the user quits.
pub fn run(term: &mut Terminal, sim: &mut Simulation, config: &LifeConfig) -> io::Result<()> {
    let mut show_help = false;
    let frame_time = 1.0 / config.fps.max(1) as f32;

    let (mut prev_w, mut prev_h) = term.size();
    let mut layout = Layout::build(prev_w, prev_h, sim.grid().width(), sim.grid().height());

    loop {
        if let Ok((w, h)) = crossterm::terminal::size() {
            if w != prev_w || h != prev_h {
                term.resize(w, h);
                term.clear_screen()?;
                prev_w = w;
                prev_h = h;
                layout = Layout::build(w, h, sim.grid().width(), sim.grid().height());
            }
        }

        // Drain everything queued this frame so drag painting keeps up
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('?') => show_help = !show_help,
                    KeyCode::Char(' ') => sim.toggle_play(),
                    KeyCode::Char('s') => sim.step(),
                    KeyCode::Char('c') => sim.reset_board(),
                    KeyCode::Char('r') => sim.randomize(),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let Some(layout) = &layout {
                        match mouse.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                handle_press(sim, layout, mouse.column, mouse.row);
                            }
                            MouseEventKind::Drag(MouseButton::Left) => {
                                // drag paints tiles only, like the touch-move path
                                if let Some((x, y)) = layout.cell_at(mouse.column, mouse.row) {
                                    sim.on_tile(x, y).ok();
                                }
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }

        sim.on_frame();

        term.clear();
        match &layout {
            Some(layout) => render(term, sim, layout),
            None => {
                let msg = "terminal too small for the board";
                let (w, h) = term.size();
                let x = (w as usize).saturating_sub(msg.len()) / 2;
                term.set_str(x as i32, h as i32 / 2, msg, Some(Color::Grey), None);
            }
        }

        if show_help {
            let (w, h) = term.size();
            render_help_overlay(term, w, h, HELP_TEXT);
        }

        term.present()?;
        term.sleep(frame_time);
    }
}

/// Button hit test first, board second, misses ignored.
fn handle_press(sim: &mut Simulation, layout: &Layout, col: u16, row: u16) {
    if let Some(action) = layout.button_at(col, row) {
        match action {
            Action::TogglePlay => sim.toggle_play(),
            Action::Clear => sim.reset_board(),
            Action::Step => sim.step(),
            Action::Randomize => sim.randomize(),
        }
        return;
    }
    if let Some((x, y)) = layout.cell_at(col, row) {
        sim.on_tile(x, y).ok();
    }
}

fn render(term: &mut Terminal, sim: &Simulation, layout: &Layout) {
    for button in &layout.buttons {
        let color = if button.action == Action::TogglePlay && sim.running() {
            PLAY_ACTIVE
        } else {
            button.color
        };
        term.fill_rect(
            button.area.x as i32,
            button.area.y as i32,
            button.area.width,
            button.area.height,
            color,
        );
        let pad = (button.area.width as usize).saturating_sub(button.label.len()) / 2;
        term.set_str(
            (button.area.x as usize + pad) as i32,
            button.area.y as i32,
            button.label,
            Some(rgb(0, 0, 0)),
            Some(color),
        );
    }

    let live = sim.live_color();
    let dead = sim.dead_color();
    for y in 0..layout.board_height {
        for x in 0..layout.board_width {
            let alive = sim.grid().get(x, y).unwrap_or(false);
            term.fill_rect(
                (layout.origin_x + x as u16 * TILE_WIDTH) as i32,
                (layout.origin_y + y as u16 * TILE_HEIGHT) as i32,
                TILE_WIDTH,
                TILE_HEIGHT,
                if alive { live } else { dead },
            );
        }
    }

    let (w, h) = term.size();
    let status = format!(
        "gen {}   alive {}   {}   ?:help q:quit",
        sim.generation(),
        sim.grid().count_living(),
        if sim.running() { "running" } else { "paused" },
    );
    let x = (w as usize).saturating_sub(status.chars().count()) / 2;
    term.set_str(x as i32, h as i32 - 1, &status, Some(Color::DarkGrey), None);
}
