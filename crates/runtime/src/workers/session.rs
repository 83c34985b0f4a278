//! Session worker that owns the authoritative [`TimeMachine`].
//!
//! Receives commands from [`TabletopHandle`](crate::TabletopHandle) through a
//! bounded queue and handles them one at a time, so every inverse is resolved
//! against the state left by the previous command. After each commit the
//! worker publishes a new [`Snapshot`] before replying.

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use tabletop_core::{
    Action, ActionKind, CharacterKey, Dispatched, DrawMonsterAbilityCardSuccessAction,
    DrawMonsterAbilityCardsSuccessAction, History, Initiative, MonsterKey, TimeMachine,
    TransitionPhase,
};

use crate::api::{Result, RuntimeError, Snapshot};
use crate::draw::AbilityCardDrawer;
use crate::events::{EventBus, HistoryEvent, TabletopEvent};
use crate::oracle::CatalogValidator;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Apply an action; tracked actions are recorded.
    Dispatch {
        action: Action,
        reply: oneshot::Sender<Result<Dispatched>>,
    },
    Undo {
        count: usize,
        reply: oneshot::Sender<Result<usize>>,
    },
    Redo {
        count: usize,
        reply: oneshot::Sender<Result<usize>>,
    },
    /// Draw one card per monster in play and end card selection.
    DrawAbilityCards {
        initiatives: BTreeMap<CharacterKey, Initiative>,
        reply: oneshot::Sender<Result<DrawMonsterAbilityCardsSuccessAction>>,
    },
    /// Draw a card for a single monster.
    DrawAbilityCard {
        key: MonsterKey,
        reply: oneshot::Sender<Result<DrawMonsterAbilityCardSuccessAction>>,
    },
    /// Query the recorded history (read-only).
    QueryHistory { reply: oneshot::Sender<History> },
    /// Stop after every command queued ahead of this one.
    Shutdown,
}

/// Background task that serializes every mutation of one session.
pub struct SessionWorker {
    machine: TimeMachine,
    validator: CatalogValidator,
    drawer: AbilityCardDrawer,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    snapshot_tx: watch::Sender<Snapshot>,
    revision: u64,
}

impl SessionWorker {
    pub fn new(
        machine: TimeMachine,
        validator: CatalogValidator,
        drawer: AbilityCardDrawer,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        snapshot_tx: watch::Sender<Snapshot>,
    ) -> Self {
        info!(
            target: "runtime::worker",
            round = machine.state().round,
            characters = machine.state().characters.len(),
            monsters = machine.state().monsters.len(),
            "SessionWorker initialized"
        );

        Self {
            machine,
            validator,
            drawer,
            command_rx,
            event_bus,
            snapshot_tx,
            revision: 0,
        }
    }

    /// Main worker loop. Ends on [`Command::Shutdown`] or once every handle
    /// has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if self.handle_command(cmd).is_break() {
                info!(target: "runtime::worker", "Shutdown command received");
                break;
            }
        }
        debug!(target: "runtime::worker", revision = self.revision, "SessionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Dispatch { action, reply } => {
                let result = self.handle_dispatch(action);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::Undo { count, reply } => {
                let result = self.handle_undo(count);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Undo reply channel closed (caller dropped)");
                }
            }
            Command::Redo { count, reply } => {
                let result = self.handle_redo(count);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Redo reply channel closed (caller dropped)");
                }
            }
            Command::DrawAbilityCards { initiatives, reply } => {
                let result = self.handle_draw_all(initiatives);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "DrawAbilityCards reply channel closed (caller dropped)");
                }
            }
            Command::DrawAbilityCard { key, reply } => {
                let result = self.handle_draw_one(key);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "DrawAbilityCard reply channel closed (caller dropped)");
                }
            }
            Command::QueryHistory { reply } => {
                if reply.send(self.machine.history().clone()).is_err() {
                    debug!(target: "runtime::worker", "QueryHistory reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Validates and applies one action.
    ///
    /// This is the only method that calls [`TimeMachine::dispatch`], so every
    /// forward action publishes its events the same way.
    fn handle_dispatch(&mut self, action: Action) -> Result<Dispatched> {
        let kind = action.kind();

        if let Err(error) = self.validator.validate(&action) {
            self.reject(kind, None, &error);
            return Err(error);
        }

        match self.machine.dispatch(action) {
            Ok(outcome) => {
                self.commit();
                self.event_bus.publish(TabletopEvent::ActionApplied {
                    kind,
                    revision: self.revision,
                });
                if outcome == Dispatched::Recorded {
                    self.event_bus.publish(HistoryEvent::Recorded {
                        kind,
                        past_len: self.machine.past().len(),
                    });
                }
                debug!(target: "runtime::worker", %kind, ?outcome, revision = self.revision, "Action applied");
                Ok(outcome)
            }
            Err(error) => {
                let phase = error.phase();
                let error = RuntimeError::from(error);
                self.reject(kind, Some(phase), &error);
                Err(error)
            }
        }
    }

    fn handle_undo(&mut self, count: usize) -> Result<usize> {
        let steps = self.machine.undo(count).inspect_err(|error| {
            warn!(target: "runtime::worker", count, %error, "Undo failed");
        })?;

        if steps > 0 {
            self.commit();
            self.event_bus.publish(HistoryEvent::Undone {
                steps,
                past_len: self.machine.past().len(),
                future_len: self.machine.future().len(),
            });
        }
        debug!(target: "runtime::worker", count, steps, "Undo");
        Ok(steps)
    }

    fn handle_redo(&mut self, count: usize) -> Result<usize> {
        let steps = self.machine.redo(count).inspect_err(|error| {
            warn!(target: "runtime::worker", count, %error, "Redo failed");
        })?;

        if steps > 0 {
            self.commit();
            self.event_bus.publish(HistoryEvent::Redone {
                steps,
                past_len: self.machine.past().len(),
                future_len: self.machine.future().len(),
            });
        }
        debug!(target: "runtime::worker", count, steps, "Redo");
        Ok(steps)
    }

    fn handle_draw_all(
        &mut self,
        initiatives: BTreeMap<CharacterKey, Initiative>,
    ) -> Result<DrawMonsterAbilityCardsSuccessAction> {
        let mut action = DrawMonsterAbilityCardsSuccessAction {
            character_initiatives: initiatives,
            ..Default::default()
        };

        for monster in &self.machine.state().monsters {
            let Some(deck) = self.validator.catalog().monster(&monster.key) else {
                continue;
            };
            if let Some(draw) = self.drawer.draw(monster, deck) {
                action.ability_card_ids.insert(monster.key.clone(), draw.id);
                if draw.reshuffled {
                    action.reshuffled.insert(monster.key.clone());
                }
            }
        }

        self.handle_dispatch(action.clone().into())?;
        Ok(action)
    }

    fn handle_draw_one(&mut self, key: MonsterKey) -> Result<DrawMonsterAbilityCardSuccessAction> {
        let action = {
            let deck = self.validator.monster(&key)?;
            let monster = self
                .machine
                .state()
                .monster(&key)
                .ok_or_else(|| RuntimeError::MonsterNotInPlay(key.clone()))?;
            let draw = self
                .drawer
                .draw(monster, deck)
                .ok_or_else(|| RuntimeError::EmptyAbilityDeck(key.clone()))?;

            DrawMonsterAbilityCardSuccessAction {
                key,
                ability_card_id: draw.id,
                reshuffled: draw.reshuffled,
            }
        };

        self.handle_dispatch(action.clone().into())?;
        Ok(action)
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.snapshot_tx
            .send_replace(Snapshot::capture(self.revision, &self.machine));
    }

    fn reject(&self, kind: ActionKind, phase: Option<TransitionPhase>, error: &RuntimeError) {
        let severity = error.severity();
        if severity.is_internal() {
            error!(target: "runtime::worker", %kind, ?phase, severity = severity.as_str(), %error, "Action failed");
        } else {
            warn!(target: "runtime::worker", %kind, ?phase, severity = severity.as_str(), %error, "Action rejected");
        }
        self.event_bus.publish(TabletopEvent::ActionRejected {
            kind,
            phase,
            error: error.to_string(),
        });
    }
}
