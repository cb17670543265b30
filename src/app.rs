//! The interactive runner.
//!
//! [`App`] owns the engine and everything around it: the event receiver,
//! the ticker, the display adapter and the notifier. All timer work happens
//! on one task:
//!
//! ```text
//! input line ──▶ handle_line ──▶ engine command ─┐
//!                                                ├──▶ drain updates ──▶ display / notifier
//! ticker fires ─▶ on_tick ─────▶ engine.tick ────┘         │
//!                                  (chain_next on expiry)  └──▶ re-arm or cancel ticker
//! ```
//!
//! Notifications are handed to blocking tasks so a slow notification
//! service never delays a tick.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cli::control::ControlCommand;
use crate::cli::display::DisplayAdapter;
use crate::engine::{wait_for, EngineError, TickOutcome, Ticker, TimerEngine, TimerEvent, TimerUpdate};
use crate::notification::{notify_best_effort, NotificationContent, Notifier};
use crate::types::IntervalConfig;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive timer. Must be driven from inside a tokio runtime.
pub struct App<D: DisplayAdapter, N: Notifier + 'static> {
    engine: TimerEngine,
    updates: mpsc::UnboundedReceiver<TimerUpdate>,
    ticker: Ticker,
    display: D,
    notifier: Arc<N>,
    pending_notifications: Vec<JoinHandle<bool>>,
}

impl<D: DisplayAdapter, N: Notifier + 'static> App<D, N> {
    pub fn new(config: IntervalConfig, display: D, notifier: N) -> Self {
        let (tx, updates) = mpsc::unbounded_channel();
        Self {
            engine: TimerEngine::new(config, tx),
            updates,
            ticker: Ticker::default(),
            display,
            notifier: Arc::new(notifier),
            pending_notifications: Vec::new(),
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Draws the settings and the idle timer.
    pub fn show_welcome(&mut self) -> Result<()> {
        self.display
            .render_settings(self.engine.config())
            .context("failed to write to display")?;
        self.apply(|engine| engine.snapshot())
    }

    /// Parses and applies one line of control input.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match line.parse::<ControlCommand>() {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                debug!(input = line, error = %e, "Unparsable control input");
                self.display
                    .show_error(&e.to_string())
                    .context("failed to write to display")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Applies one control command.
    pub fn handle_command(&mut self, command: ControlCommand) -> Result<Flow> {
        info!(?command, "Control command");
        match command {
            ControlCommand::Start => self.apply(TimerEngine::start)?,
            ControlCommand::Pause => self.apply(TimerEngine::pause)?,
            ControlCommand::Resume => self.apply(TimerEngine::resume)?,
            ControlCommand::Toggle => {
                if self.engine.state().is_paused() {
                    self.apply(TimerEngine::resume)?
                } else {
                    self.apply(TimerEngine::pause)?
                }
            }
            ControlCommand::Reset => self.apply(TimerEngine::reset)?,
            ControlCommand::AdjustWork(delta) => {
                self.apply(|engine| engine.adjust_work_duration(delta).map(|_| ()))?
            }
            ControlCommand::AdjustBreak(delta) => {
                self.apply(|engine| engine.adjust_break_duration(delta).map(|_| ()))?
            }
            ControlCommand::Status => self.apply(|engine| engine.snapshot())?,
            ControlCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Applies one elapsed second, starting the next interval on expiry.
    pub fn on_tick(&mut self) -> Result<()> {
        self.ticker.cancel();
        self.apply(|engine| {
            if engine.tick()? == TickOutcome::Expired {
                engine.chain_next()?;
            }
            Ok(())
        })
    }

    /// Runs until `quit` or until every input sender is dropped.
    pub async fn run(&mut self, mut input: mpsc::UnboundedReceiver<String>) -> Result<()> {
        self.show_welcome()?;

        loop {
            let deadline = self.ticker.deadline();
            tokio::select! {
                _ = wait_for(deadline) => self.on_tick()?,
                line = input.recv() => match line {
                    Some(line) => {
                        if self.handle_line(&line)? == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        debug!("Control input closed");
                        break;
                    }
                },
            }
        }

        self.display.finish().context("failed to write to display")
    }

    /// Waits for notifications still in flight.
    ///
    /// Returns how many of them were delivered.
    pub async fn settle_notifications(&mut self) -> usize {
        let mut delivered = 0;
        for handle in std::mem::take(&mut self.pending_notifications) {
            match handle.await {
                Ok(true) => delivered += 1,
                Ok(false) => {}
                Err(e) => warn!(error = %e, "Notification task failed"),
            }
        }
        delivered
    }

    /// Runs an engine operation, shows rejected commands, then flushes
    /// updates and lines the ticker up with the new state.
    fn apply<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(&mut TimerEngine) -> Result<(), EngineError>,
    {
        if let Err(e) = op(&mut self.engine) {
            if !e.is_recoverable() {
                return Err(e.into());
            }
            warn!(error = %e, "Command rejected");
            self.display
                .show_error(&e.to_string())
                .context("failed to write to display")?;
        }

        self.flush_updates()?;
        self.sync_ticker();
        Ok(())
    }

    fn flush_updates(&mut self) -> Result<()> {
        while let Ok(update) = self.updates.try_recv() {
            match update.event {
                TimerEvent::DurationsChanged { config } => {
                    self.display
                        .render_settings(&config)
                        .context("failed to write to display")?;
                }
                TimerEvent::IntervalStarted { kind, .. } => {
                    self.display
                        .render(&update)
                        .context("failed to write to display")?;
                    let content = NotificationContent::interval_started(kind, self.engine.config());
                    self.dispatch_notification(content);
                }
                _ => {
                    self.display
                        .render(&update)
                        .context("failed to write to display")?;
                }
            }
        }
        Ok(())
    }

    fn dispatch_notification(&mut self, content: NotificationContent) {
        self.pending_notifications.retain(|handle| !handle.is_finished());
        let notifier = Arc::clone(&self.notifier);
        self.pending_notifications
            .push(tokio::task::spawn_blocking(move || {
                notify_best_effort(notifier.as_ref(), &content)
            }));
    }

    fn sync_ticker(&mut self) {
        let running = self.engine.state().is_running();
        if running && !self.ticker.is_armed() {
            self.ticker.arm();
        } else if !running && self.ticker.cancel() {
            debug!("Pending tick cancelled");
        }
    }
}
