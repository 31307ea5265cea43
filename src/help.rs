use crate::terminal::Terminal;
use crossterm::style::Color;

/// Render a centered help overlay box with the provided text.
pub fn render_help_overlay(term: &mut Terminal, width: u16, height: u16, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2; // 1 row padding top/bottom

    // Center the box
    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    let border_color = Color::White;
    let text_color = Color::Grey;
    let backdrop = Color::Rgb { r: 10, g: 10, b: 10 };

    // Top border: ┌─────┐
    term.set(start_x as i32, start_y as i32, '┌', Some(border_color), Some(backdrop));
    for x in 1..box_width - 1 {
        term.set((start_x + x) as i32, start_y as i32, '─', Some(border_color), Some(backdrop));
    }
    term.set(
        (start_x + box_width - 1) as i32,
        start_y as i32,
        '┐',
        Some(border_color),
        Some(backdrop),
    );

    // Content rows with side borders
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + 1 + i;
        term.set(start_x as i32, y as i32, '│', Some(border_color), Some(backdrop));

        let padding = max_width.saturating_sub(line.chars().count());
        let padded = format!(" {}{} ", line, " ".repeat(padding));
        for (j, ch) in padded.chars().enumerate() {
            term.set((start_x + 1 + j) as i32, y as i32, ch, Some(text_color), Some(backdrop));
        }

        term.set(
            (start_x + box_width - 1) as i32,
            y as i32,
            '│',
            Some(border_color),
            Some(backdrop),
        );
    }

    // Bottom border: └─────┘
    let bottom_y = start_y + box_height - 1;
    term.set(start_x as i32, bottom_y as i32, '└', Some(border_color), Some(backdrop));
    for x in 1..box_width - 1 {
        term.set((start_x + x) as i32, bottom_y as i32, '─', Some(border_color), Some(backdrop));
    }
    term.set(
        (start_x + box_width - 1) as i32,
        bottom_y as i32,
        '┘',
        Some(border_color),
        Some(backdrop),
    );
}
