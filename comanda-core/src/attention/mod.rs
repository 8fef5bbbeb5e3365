//! Per-table attention timer
//!
//! When a table first receives orders, a one-shot timer is armed; if the
//! table still holds orders when the delay elapses, an `AttentionDue`
//! event is broadcast exactly once. Emptying the table (settlement or
//! removing the last item) disarms the timer and makes the table
//! re-armable for its next seating. A fired timer does not re-fire until
//! the table has emptied in between.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use shared::order::{EventPayload, TableEvent};
use shared::types::TableId;
use shared::util::now_millis;

enum TimerEntry {
    Armed(CancellationToken),
    Fired,
}

/// One-shot attention timers over the table roster
pub struct AttentionScheduler {
    delay: Duration,
    event_tx: broadcast::Sender<TableEvent>,
    timers: DashMap<TableId, TimerEntry>,
    shutdown: CancellationToken,
}

impl AttentionScheduler {
    pub fn new(
        delay: Duration,
        event_tx: broadcast::Sender<TableEvent>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            delay,
            event_tx,
            timers: DashMap::new(),
            shutdown,
        }
    }

    /// Arm the timer for an occupied table
    ///
    /// Idempotent: an armed or already-fired table is left alone until
    /// [`disarm`](Self::disarm) resets it.
    pub fn arm(self: &Arc<Self>, table_id: TableId, table_name: String) {
        if self.timers.contains_key(&table_id) {
            return;
        }

        let token = CancellationToken::new();
        self.timers.insert(table_id, TimerEntry::Armed(token.clone()));
        tracing::debug!(table_id, "attention timer armed");

        let scheduler = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(scheduler.delay) => {
                    scheduler.timers.insert(table_id, TimerEntry::Fired);
                    tracing::info!(table_id, table = %table_name, "attention timer fired");
                    let event = TableEvent::new(
                        table_id,
                        now_millis(),
                        EventPayload::AttentionDue { table_name },
                    );
                    let _ = scheduler.event_tx.send(event);
                }
                _ = token.cancelled() => {}
                _ = scheduler.shutdown.cancelled() => {}
            }
        });
    }

    /// Disarm on table emptying; cancels a pending timer and clears the
    /// fired marker so the next seating arms again
    pub fn disarm(&self, table_id: TableId) {
        if let Some((_, entry)) = self.timers.remove(&table_id) {
            if let TimerEntry::Armed(token) = entry {
                token.cancel();
                tracing::debug!(table_id, "attention timer cancelled");
            }
        }
    }

    /// A timer is pending or has fired for this table
    pub fn is_tracking(&self, table_id: TableId) -> bool {
        self.timers.contains_key(&table_id)
    }
}
