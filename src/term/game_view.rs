//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{grid, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BOARD_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    ///
    /// While the game runs, every board cell draws from independent
    /// membership tests (snake / apple / bomb / boost). Once it ends, the
    /// grid is replaced by a terminal screen with the final score.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = BOARD_SIZE * self.cell_w;
        let board_px_h = BOARD_SIZE * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        if state.game_over {
            self.draw_end_screen(&mut fb, state, start_x, start_y, frame_w, frame_h);
        } else {
            self.draw_cells(&mut fb, state, start_x, start_y);
        }

        self.draw_score_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        fb
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let empty = CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let snake = CellStyle {
            fg: Rgb::new(100, 220, 120),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };
        let apple = CellStyle {
            fg: Rgb::new(230, 70, 70),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };
        let bomb = CellStyle {
            fg: Rgb::new(255, 165, 0),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };
        let boost = CellStyle {
            fg: Rgb::new(80, 200, 230),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = grid::index(row, col);
                let (ch, style) = if state.snake.contains(&cell) {
                    ('█', snake)
                } else if state.apple == Some(cell) {
                    ('●', apple)
                } else if state.bomb == Some(cell) {
                    ('◉', bomb)
                } else if state.boost == Some(cell) {
                    ('◆', boost)
                } else {
                    ('·', empty)
                };
                self.fill_cell_rect(fb, start_x, start_y, col, row, ch, style);
            }
        }
    }

    fn draw_end_screen(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let title = if state.won { "YOU WIN" } else { "GAME OVER" };
        let line = format!("SCORE {}", state.score);

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let mid_y = start_y + frame_h / 2;
        self.put_centered(fb, start_x, mid_y.saturating_sub(1), frame_w, title, style);
        self.put_centered(
            fb,
            start_x,
            mid_y + 1,
            frame_w,
            &line,
            CellStyle {
                bold: false,
                ..style
            },
        );
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 6 >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.snake.len()), value);
    }
}
