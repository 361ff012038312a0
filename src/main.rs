//! Terminal Upstair runner (default binary).
//!
//! Hop left or right onto the next platform. A wrong hop restarts the stage.
//! Uses crossterm for input and a framebuffer-based renderer.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use upstair::engine::Session;
use upstair::input::{handle_key_event, should_quit};
use upstair::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use upstair::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    // Rows are fixed for the whole run; resizes only re-layout.
    let rows = view.rows_for_viewport(Viewport::new(w, h));
    let mut session = Session::new(config.columns, rows, config.seed_source())
        .context("building stage")?;
    info!(columns = config.columns, rows, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(best_score = session.best_score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, session: &mut Session) -> Result<()> {
    let mut snap = session.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudView {
            best_score: session.best_score(),
        };
        view.render_into_with_hud(&snap, Some(&hud), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                    session.snapshot_into(&mut snap);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
