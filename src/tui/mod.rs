//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the event loop, starts
//! the fetch when the view mounts and renders whatever the core state says.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! ```text
//! mount ──▶ update(Mount) ──▶ Effect::SpawnFetch ──▶ FetchSubscription::start
//!                                                          │ tokio task
//!                                                          ▼
//! render ◀── update(PostsFetched(result)) ◀──── mpsc ◀── fetch_posts()
//! ```
//!
//! The subscription is dropped when the loop exits. Dropping it marks the
//! pending result as stale and aborts the task, so nothing reaches the state
//! after teardown.
//!
//! ## Redraw Strategy
//!
//! While loading, the loop polls every 100ms so the settled state shows up
//! promptly. Once settled it sleeps up to 500ms and only redraws on input or
//! resize.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::feed::{HttpPostSource, PostSource};
use crate::tui::component::EventHandler;
use crate::tui::components::PostListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const LOADING_POLL: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub post_list: PostListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The one in-flight fetch of a mounted view.
///
/// Dropping the subscription disposes it: the task is aborted and, should it
/// already be past its last await point, its result is discarded.
pub struct FetchSubscription {
    active: Arc<AtomicBool>,
    handle: tokio::task::AbortHandle,
}

impl FetchSubscription {
    /// Spawn the fetch on the current tokio runtime. The result is delivered
    /// as `Action::PostsFetched` on `tx`.
    pub fn start(source: Arc<dyn PostSource>, tx: mpsc::Sender<Action>) -> Self {
        info!("Starting fetch from {}", source.describe());
        let active = Arc::new(AtomicBool::new(true));
        let task_active = Arc::clone(&active);

        let handle = tokio::spawn(async move {
            let result = source.fetch_posts().await;
            if !task_active.load(Ordering::Acquire) {
                debug!("View disposed before fetch settled, dropping result");
                return;
            }
            if tx.send(Action::PostsFetched(result)).is_err() {
                warn!("Failed to deliver fetch result: receiver dropped");
            }
        });

        Self {
            active,
            handle: handle.abort_handle(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchSubscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        self.handle.abort();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Apply every action waiting on `rx`, starting the fetch when asked to.
/// Returns `(changed, quit)`.
pub fn drain_actions(
    app: &mut App,
    rx: &mpsc::Receiver<Action>,
    tx: &mpsc::Sender<Action>,
    subscription: &mut Option<FetchSubscription>,
) -> (bool, bool) {
    let mut changed = false;
    let mut quit = false;
    while let Ok(action) = rx.try_recv() {
        changed = true;
        debug!("Event loop received: {:?}", action);
        match update(app, action) {
            Effect::Quit => quit = true,
            Effect::SpawnFetch => {
                *subscription = Some(FetchSubscription::start(app.source.clone(), tx.clone()));
            }
            Effect::None => {}
        }
    }
    (changed, quit)
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source: Arc<dyn PostSource> = Arc::new(HttpPostSource::new(config.endpoint.clone()));
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut subscription: Option<FetchSubscription> = None;

    // Mount: the first (and only) fetch of this view
    if tx.send(Action::Mount).is_err() {
        warn!("Failed to queue mount action");
    }
    let (_, mut should_quit) = drain_actions(app, &rx, &tx, &mut subscription);
    let mut needs_redraw = true;

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if app.view.is_loading() {
            LOADING_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            match event {
                TuiEvent::Quit => {
                    if update(app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::Resize => {}
                scroll => {
                    tui.post_list.handle_event(&scroll);
                }
            }
            pending = poll_event_immediate()?;
        }

        let (changed, quit) = drain_actions(app, &rx, &tx, &mut subscription);
        needs_redraw |= changed;
        should_quit |= quit;
    }

    // Unmount
    if subscription.as_ref().is_some_and(|s| !s.is_finished()) {
        info!("Quitting with fetch still in flight, disposing");
    }
    drop(subscription);
    Ok(())
}
