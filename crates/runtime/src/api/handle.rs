//! Cloneable façade for issuing commands to the session.
//!
//! [`TabletopHandle`] hides channel plumbing and offers async helpers for
//! dispatching actions, moving through history, and observing the session.
use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::debug;

use tabletop_core::{
    Action, CharacterKey, Dispatched, DrawMonsterAbilityCardSuccessAction,
    DrawMonsterAbilityCardsSuccessAction, History, Initiative, MonsterKey, TabletopState,
};

use super::errors::{Result, RuntimeError};
use super::snapshot::Snapshot;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the session
#[derive(Clone)]
pub struct TabletopHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl TabletopHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        snapshot_rx: watch::Receiver<Snapshot>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            snapshot_rx,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Enqueue an action. Resolves once it has been applied or rejected.
    pub async fn dispatch(&self, action: impl Into<Action>) -> Result<Dispatched> {
        let action = action.into();
        self.request(|reply| Command::Dispatch { action, reply })
            .await?
    }

    /// Undo up to `count` recorded actions; returns how many were undone.
    pub async fn undo(&self, count: usize) -> Result<usize> {
        self.request(|reply| Command::Undo { count, reply }).await?
    }

    /// Redo up to `count` undone actions; returns how many were redone.
    pub async fn redo(&self, count: usize) -> Result<usize> {
        self.request(|reply| Command::Redo { count, reply }).await?
    }

    /// Draw one ability card for every monster in play and record the result
    /// together with the characters' initiatives.
    pub async fn draw_monster_ability_cards(
        &self,
        initiatives: BTreeMap<CharacterKey, Initiative>,
    ) -> Result<DrawMonsterAbilityCardsSuccessAction> {
        self.request(|reply| Command::DrawAbilityCards { initiatives, reply })
            .await?
    }

    /// Draw one ability card for a single monster already in play.
    pub async fn draw_monster_ability_card(
        &self,
        key: impl Into<MonsterKey>,
    ) -> Result<DrawMonsterAbilityCardSuccessAction> {
        let key = key.into();
        self.request(|reply| Command::DrawAbilityCard { key, reply })
            .await?
    }

    /// Recorded history as of this request's turn in the queue.
    pub async fn history(&self) -> Result<History> {
        self.request(|reply| Command::QueryHistory { reply }).await
    }

    /// Ask the worker to stop. A worker that already stopped is not an error.
    pub(crate) async fn request_shutdown(&self) {
        if self.command_tx.send(Command::Shutdown).await.is_err() {
            debug!(target: "runtime::worker", "Worker already stopped before shutdown");
        }
    }

    /// Latest committed state.
    pub fn current_state(&self) -> Arc<TabletopState> {
        Arc::clone(&self.snapshot_rx.borrow().state)
    }

    /// Latest committed snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn can_undo(&self) -> bool {
        self.snapshot_rx.borrow().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.snapshot_rx.borrow().can_redo()
    }

    /// Watch committed snapshots. The receiver always holds the latest one.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Tabletop` - Applied and rejected actions
    /// - `Topic::History` - Recording, undo and redo
    pub fn subscribe_events(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
