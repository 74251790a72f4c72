//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term`. The engine is advanced on a fixed 16ms timestep.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::info;

use tui_memory::core::{GameConfig, GameSnapshot, GameState};
use tui_memory::input::{should_quit, InputHandler};
use tui_memory::runtime::{finish, RuntimeConfig};
use tui_memory::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, GRID_COLS, TICK_MS};

fn main() -> Result<()> {
    let runtime = RuntimeConfig::from_env()?;
    runtime.init_logging()?;
    let config = GameConfig::from_env()?;

    let seed = runtime.seed_or_random();
    info!(
        "starting: seed {}, {} symbols, resolve delay {}ms",
        seed,
        config.alphabet().len(),
        config.resolve_delay_ms()
    );
    let mut game = GameState::new(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let restored = term.exit();
    finish(result, restored)
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::new(GRID_COLS);
    let mut input =
        InputHandler::with_config(game.cards().len(), GRID_COLS, game.config().adjust_step());
    let mut hud = HudView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        hud.cursor = Some(input.cursor().index());
        view.render_into(&snap, &hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    input.handle_key_press(key)
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => view
                    .card_at(viewport, snap.cards.len(), mouse.column, mouse.row)
                    .and_then(|index| input.click(index)),
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                apply(game, &mut input, &mut hud, action);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if game.tick(TICK_MS) {
                hud.last_event = game.take_last_event();
            }
        }
    }
}

fn apply(game: &mut GameState, input: &mut InputHandler, hud: &mut HudView, action: GameAction) {
    let changed = game.apply_action(action);
    match action {
        GameAction::Reset => {
            input.reset();
            hud.last_event = None;
        }
        GameAction::ActivateCard(_) if changed => hud.last_event = None,
        _ => {}
    }
}
