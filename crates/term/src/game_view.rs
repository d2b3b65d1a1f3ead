//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FallerStatus, JewelKind, Position};

const BACKGROUND: Rgb = Rgb::new(57, 62, 65);
const BOARD: Rgb = Rgb::new(84, 73, 75);
const BORDER: Rgb = Rgb::new(200, 200, 200);

const GAME_OVER_TEXT: &str = "GAME OVER";

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

/// Presentation color of a jewel kind.
pub fn jewel_color(kind: JewelKind) -> Rgb {
    match kind {
        JewelKind::S => Rgb::new(241, 247, 237),
        JewelKind::T => Rgb::new(179, 57, 81),
        JewelKind::W => Rgb::new(145, 199, 177),
        JewelKind::X => Rgb::new(227, 208, 129),
        JewelKind::Y => Rgb::new(238, 150, 75),
        JewelKind::Z => Rgb::new(100, 255, 169),
    }
}

/// Draws the visible playfield, centered, with the faller highlighted.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares the terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        if snap.game_over {
            self.draw_game_over(fb, viewport);
            return;
        }
        fb.fill(CellStyle::new(BORDER, BACKGROUND).into_cell(' '));

        // Boards wider or taller than u16 are clipped by the viewport anyway.
        let cols = u16::try_from(snap.cols).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.playfield_rows()).unwrap_or(u16::MAX);
        let board_w = cols.saturating_mul(self.cell_w);
        let frame_w = board_w.saturating_add(2);
        let frame_h = rows.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(BORDER, BACKGROUND);
        let board = CellStyle::new(BORDER, BOARD);
        fb.fill_rect(start_x + 1, start_y + 1, board_w, rows, ' ', board);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in snap.buffer_rows..snap.rows {
            let Some(y) = screen_offset(start_y + 1, row - snap.buffer_rows, 1)
                .filter(|&y| y < viewport.height)
            else {
                break;
            };
            for col in 0..snap.cols {
                let Some(x) = screen_offset(start_x + 1, col, self.cell_w)
                    .filter(|&x| x < viewport.width)
                else {
                    break;
                };
                let Some(Some(kind)) = snap.get(row, col) else {
                    continue;
                };
                let (ch, style) = jewel_glyph(kind, snap.faller_at(Position::new(row, col)));
                fb.fill_rect(x, y, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: Rgb::new(255, 255, 255),
            bold: true,
            dim: false,
        };
        fb.fill(style.into_cell(' '));
        let x = viewport.width.saturating_sub(GAME_OVER_TEXT.len() as u16) / 2;
        fb.put_str(x, viewport.height / 2, GAME_OVER_TEXT, style);
    }
}

/// Terminal coordinate of board cell `index`, `None` past `u16::MAX`.
fn screen_offset(origin: u16, index: usize, step: u16) -> Option<u16> {
    u16::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(step))
        .and_then(|d| d.checked_add(origin))
}

/// Glyph and style for a jewel; faller jewels are marked by status.
fn jewel_glyph(kind: JewelKind, faller: Option<FallerStatus>) -> (char, CellStyle) {
    let mut style = CellStyle::new(jewel_color(kind), BOARD);
    let ch = match faller {
        Some(FallerStatus::Falling) => {
            style.bold = true;
            '▓'
        }
        Some(FallerStatus::Landed) => {
            style.dim = true;
            '▒'
        }
        Some(FallerStatus::Frozen | FallerStatus::None) | None => '█',
    };
    (ch, style)
}
