//! Application core — event loop, overlay management, mutation dispatch.
//!
//! The browse screen is always underneath; the form and the delete
//! confirmation render as overlays. Mutations run in spawned tasks and
//! report back over an action channel: success closes the overlay, failure
//! leaves it open (the error has already surfaced as a toast) so the user
//! can retry or cancel.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info};

use klima_core::{Conditioner, ConditionerDraft, Console};

use crate::event::{Event, EventReader};
use crate::screens::browse::{BrowseAction, BrowseScreen};
use crate::screens::form::{FormAction, FormMode, FormScreen};
use crate::tui::Tui;
use crate::widgets;

enum Overlay {
    None,
    Form(FormScreen),
    ConfirmDelete { target: Conditioner, pending: bool },
}

#[derive(Debug, Clone, Copy)]
enum MutationKind {
    Save,
    Delete,
}

#[derive(Debug)]
enum AppAction {
    MutationDone { kind: MutationKind, success: bool },
}

/// Top-level application state and event loop.
pub struct App {
    console: Console,
    browse: BrowseScreen,
    overlay: Overlay,
    running: bool,
    action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
}

impl App {
    pub fn new(console: Console) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let browse = BrowseScreen::new(console.clone());

        Self {
            console,
            browse,
            overlay: Overlay::None,
            running: true,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        // Initial loads: lookups then list, once per session. Subsequent
        // mounts of this screen would be no-ops.
        let console = self.console.clone();
        tokio::spawn(async move {
            console.ensure_lookups_loaded().await;
            console.ensure_loaded().await;
        });

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else { break };

            // Drain completed mutation callbacks before handling the event;
            // render ticks arrive at ~30 FPS, so the latency is invisible.
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(action);
            }

            match event {
                Event::Key(key) => self.handle_key(key),
                Event::Tick => self.browse.on_tick(),
                Event::Render => tui.draw(|frame| self.render(frame))?,
                Event::Resize(..) => {}
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    // ── Key routing ──────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        if matches!(self.overlay, Overlay::Form(_)) {
            let action = match &mut self.overlay {
                Overlay::Form(form) => form.handle_key(key),
                _ => None,
            };
            match action {
                Some(FormAction::Cancel) => self.overlay = Overlay::None,
                Some(FormAction::Submit { mode, draft }) => self.spawn_save(mode, draft),
                None => {}
            }
            return;
        }

        if let Overlay::ConfirmDelete { target, pending } = &mut self.overlay {
            if *pending {
                return;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    let id = target.id;
                    *pending = true;
                    self.spawn_delete(id);
                }
                KeyCode::Char('n') | KeyCode::Esc => self.overlay = Overlay::None,
                _ => {}
            }
            return;
        }

        match self.browse.handle_key(key) {
            Some(BrowseAction::Quit) => self.running = false,
            Some(BrowseAction::Refetch) => {
                let console = self.console.clone();
                tokio::spawn(async move {
                    console.refetch_lookups().await;
                    console.refetch().await;
                });
            }
            Some(BrowseAction::OpenCreate) => {
                self.overlay = Overlay::Form(FormScreen::create(self.console.clone()));
            }
            Some(BrowseAction::OpenEdit(conditioner)) => {
                self.overlay = Overlay::Form(FormScreen::edit(self.console.clone(), &conditioner));
            }
            Some(BrowseAction::ConfirmDelete(conditioner)) => {
                self.overlay = Overlay::ConfirmDelete {
                    target: conditioner,
                    pending: false,
                };
            }
            None => {}
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    fn spawn_save(&self, mode: FormMode, draft: ConditionerDraft) {
        let console = self.console.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let success = match mode {
                FormMode::Create => console.create(&draft).await.is_ok(),
                FormMode::Edit(id) => console.update(id, &draft).await.is_ok(),
            };
            let _ = tx.send(AppAction::MutationDone {
                kind: MutationKind::Save,
                success,
            });
        });
    }

    fn spawn_delete(&self, id: i64) {
        let console = self.console.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let success = console.delete(id).await.is_ok();
            let _ = tx.send(AppAction::MutationDone {
                kind: MutationKind::Delete,
                success,
            });
        });
    }

    fn process_action(&mut self, action: AppAction) {
        match action {
            AppAction::MutationDone { kind, success } => {
                debug!(?kind, success, "mutation finished");
                if success {
                    // The list refresh has already landed in the store.
                    self.overlay = Overlay::None;
                } else if let Overlay::ConfirmDelete { pending, .. } = &mut self.overlay {
                    // Failed delete: drop back to the open dialog.
                    *pending = false;
                }
                // A failed save keeps the form open as-is.
            }
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.browse.render(frame, area);

        match &self.overlay {
            Overlay::Form(form) => form.render(frame, area),
            Overlay::ConfirmDelete { target, pending } => {
                let label = target
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("conditioner #{}", target.id));
                widgets::confirm::render(frame, area, &label, *pending);
            }
            Overlay::None => {}
        }

        let toasts = self.console.notifier().active();
        widgets::toasts::render(frame, area, &toasts);
    }
}
