//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CoreLastEvent, Outcome, Player, GRID_COLS};

/// Card box width in terminal columns.
pub const CARD_W: u16 = 7;
/// Card box height in terminal rows.
pub const CARD_H: u16 = 3;
/// Blank columns between cards.
pub const GAP_X: u16 = 1;

const HEADER_H: u16 = 5;
const FOOTER_H: u16 = 3;
const MIN_WIDTH: u16 = 40;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const FACE_DOWN_BG: Rgb = Rgb::new(60, 110, 220);
const FACE_UP_BG: Rgb = Rgb::new(245, 245, 245);
const MATCHED_BG: Rgb = Rgb::new(190, 240, 200);
const ACTIVE_BG: Rgb = Rgb::new(200, 220, 255);

const SYMBOL_COLORS: [Rgb; 6] = [
    Rgb::new(200, 40, 40),
    Rgb::new(30, 120, 200),
    Rgb::new(210, 130, 0),
    Rgb::new(120, 50, 170),
    Rgb::new(20, 140, 90),
    Rgb::new(200, 40, 140),
];

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

/// Presentation-only state drawn alongside the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub cursor: Option<usize>,
    pub last_event: Option<CoreLastEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where everything lands for a given viewport and deck size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub grid_x: u16,
    pub grid_y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Layout {
    /// Top-left corner of card `index`.
    pub fn card_origin(&self, index: usize) -> (u16, u16) {
        let cols = usize::from(self.cols.max(1));
        let col = clamp_u16(index % cols);
        let row = clamp_u16(index / cols);
        (
            self.grid_x
                .saturating_add(col.saturating_mul(CARD_W + GAP_X)),
            self.grid_y.saturating_add(row.saturating_mul(CARD_H)),
        )
    }

    fn footer_y(&self) -> u16 {
        self.grid_y
            .saturating_add(self.rows.saturating_mul(CARD_H))
            .saturating_add(1)
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    cols: usize,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cols: usize) -> Self {
        Self {
            cols: cols.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport, card_count: usize) -> Layout {
        // Oversized decks saturate instead of wrapping; they simply run off-screen.
        let cols = clamp_u16(self.cols.min(card_count).max(1));
        let rows = clamp_u16(card_count.div_ceil(usize::from(cols)));
        let grid_w = cols
            .saturating_mul(CARD_W)
            .saturating_add((cols - 1).saturating_mul(GAP_X));
        let width = grid_w.max(MIN_WIDTH);
        let height = HEADER_H
            .saturating_add(rows.saturating_mul(CARD_H))
            .saturating_add(FOOTER_H);

        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            x,
            y,
            width,
            grid_x: x + (width - grid_w) / 2,
            grid_y: y.saturating_add(HEADER_H),
            cols,
            rows,
        }
    }

    /// Map a pointer position to the card under it.
    ///
    /// Gaps between cards hit nothing.
    pub fn card_at(&self, viewport: Viewport, card_count: usize, px: u16, py: u16) -> Option<usize> {
        if card_count == 0 {
            return None;
        }
        let layout = self.layout(viewport, card_count);
        let rel_x = px.checked_sub(layout.grid_x)?;
        let rel_y = py.checked_sub(layout.grid_y)?;

        let pitch = CARD_W + GAP_X;
        if rel_x % pitch >= CARD_W {
            return None;
        }
        let col = rel_x / pitch;
        let row = rel_y / CARD_H;
        if col >= layout.cols || row >= layout.rows {
            return None;
        }

        let index = row as usize * layout.cols as usize + col as usize;
        (index < card_count).then_some(index)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport, snap.cards.len());

        self.draw_header(fb, snap, &layout);

        for (i, card) in snap.cards.iter().enumerate() {
            let (x, y) = layout.card_origin(i);
            if x >= fb.width() || y >= fb.height() {
                continue;
            }
            self.draw_card(fb, x, y, card, hud.cursor == Some(i));
        }

        self.draw_footer(fb, snap, hud, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let title = CellStyle::default().bold();
        fb.put_str_centered(layout.x, layout.y, layout.width, "MEMORY", title);

        let half = layout.width / 2;
        for player in Player::ALL {
            let px = layout.x + half * player.index() as u16;
            let active = snap.current_player == player && snap.outcome.is_none();
            let style = if active {
                CellStyle::new(BLACK, ACTIVE_BG).bold()
            } else {
                CellStyle::default()
            };
            fb.fill_rect(px, layout.y + 2, half.saturating_sub(1), 1, ' ', style);
            let label = match player {
                Player::One => " PLAYER 1: ",
                Player::Two => " PLAYER 2: ",
            };
            let w = fb.put_str(px, layout.y + 2, label, style);
            fb.put_u32(px + w, layout.y + 2, snap.score(player), style);
        }

        let turn = match snap.outcome {
            Some(Outcome::Winner(Player::One)) => "PLAYER 1 WINS",
            Some(Outcome::Winner(Player::Two)) => "PLAYER 2 WINS",
            Some(Outcome::Tie) => "TIE GAME",
            None => match snap.current_player {
                Player::One => "TURN: PLAYER 1",
                Player::Two => "TURN: PLAYER 2",
            },
        };
        fb.put_str_centered(layout.x, layout.y + 3, layout.width, turn, title);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardSnapshot, cursor: bool) {
        let (bg, face) = if card.matched {
            (MATCHED_BG, Some(card.symbol.glyph()))
        } else if card.face_up {
            (FACE_UP_BG, Some(card.symbol.glyph()))
        } else {
            (FACE_DOWN_BG, None)
        };

        let border = if cursor {
            CellStyle::new(Rgb::new(255, 220, 60), BLACK).bold()
        } else if card.matched {
            CellStyle::new(Rgb::new(90, 170, 110), BLACK).dim()
        } else {
            CellStyle::new(Rgb::new(170, 170, 180), BLACK)
        };
        fb.draw_box(x, y, CARD_W, CARD_H, border);

        let fill = CellStyle::new(Rgb::new(230, 230, 240), bg);
        fb.fill_rect(x + 1, y + 1, CARD_W - 2, 1, ' ', fill);

        let mid = x + CARD_W / 2;
        match face {
            Some(glyph) => {
                let fg = symbol_color(glyph);
                fb.put_char(mid, y + 1, glyph, CellStyle::new(fg, bg).bold());
            }
            None => fb.put_char(mid, y + 1, '?', fill.dim()),
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &HudView, layout: &Layout) {
        let y = layout.footer_y();
        let status = CellStyle::default().bold();

        if snap.reveal_all {
            fb.put_str_centered(layout.x, y, layout.width, "ALL CARDS SHOWN", status);
        } else if let Some(event) = hud.last_event {
            let text = event_text(event);
            fb.put_str_centered(layout.x, y, layout.width, &text, status);
        } else if snap.pending_ms.is_some() {
            fb.put_str_centered(layout.x, y, layout.width, "...", status);
        }

        let help = CellStyle::default().dim();
        fb.put_str_centered(
            layout.x,
            y.saturating_add(1),
            layout.width,
            "arrows move  enter flip  v show  p switch",
            help,
        );
        fb.put_str_centered(
            layout.x,
            y.saturating_add(2),
            layout.width,
            "1/2 P1 +/-  3/4 P2 +/-  r new game  q quit",
            help,
        );
    }
}

fn symbol_color(glyph: char) -> Rgb {
    SYMBOL_COLORS[glyph as usize % SYMBOL_COLORS.len()]
}

fn event_text(event: CoreLastEvent) -> String {
    match event {
        CoreLastEvent::Matched {
            symbol,
            player,
            points,
        } => format!(
            "PLAYER {} FOUND {} +{}",
            player.number(),
            symbol.glyph(),
            points
        ),
        CoreLastEvent::Mismatched { next_player } => {
            format!("NO MATCH - PLAYER {} TO PLAY", next_player.number())
        }
    }
}
