//! TablesManager - command processing over the shared table roster
//!
//! The manager owns the process-wide state (table store + sales log)
//! behind one `RwLock`: each command takes the write lock, mutates, and
//! releases before broadcasting — the single-writer "replace the
//! collection atomically" discipline that keeps two screens reacting to
//! the same table from losing updates.
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Convert command to action
//!     ├─ 2. Take write lock, run action against CommandContext
//!     ├─ 3. Release lock
//!     ├─ 4. Sync the table's attention timer
//!     ├─ 5. Broadcast event(s), fire-and-forget
//!     └─ 6. Return outcome (Applied with events, or Noop)
//! ```

mod error;
pub use error::*;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use shared::models::{Catalog, DiningTable, Product, Sale};
use shared::order::{
    EventPayload, LineItemInput, ModifierKind, PaymentMethod, PaymentReceipt, TableCommand,
    TableCommandPayload, TableEvent,
};
use shared::types::TableId;
use shared::util::now_millis;
use uuid::Uuid;

use crate::attention::AttentionScheduler;
use crate::catalog::classifier::StationSets;
use crate::core::config::CoreConfig;
use crate::core::state::{SalesLog, TableStore};
use crate::orders::actions::CommandAction;
use crate::orders::money;
use crate::orders::traits::{CommandContext, CommandHandler};
use crate::views::{
    self, ServiceEntry, StationEntry, StationGroup, StationId, StationProfile, TableStatus,
};

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 4096;

/// Result of executing one command
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// State changed; these events were broadcast
    Applied { events: Vec<TableEvent> },
    /// Stale reference or nothing to do; state untouched
    Noop,
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied { .. })
    }

    pub fn events(&self) -> &[TableEvent] {
        match self {
            CommandOutcome::Applied { events } => events,
            CommandOutcome::Noop => &[],
        }
    }
}

struct EngineState {
    store: TableStore,
    sales: SalesLog,
}

/// The engine's front door
///
/// The `epoch` is a unique id generated per construction; remote screens
/// use it to detect an engine restart and drop their cached snapshots.
pub struct TablesManager {
    state: RwLock<EngineState>,
    catalog: Catalog,
    sets: StationSets,
    event_tx: broadcast::Sender<TableEvent>,
    attention: Option<Arc<AttentionScheduler>>,
    epoch: String,
}

impl std::fmt::Debug for TablesManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablesManager")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl TablesManager {
    /// Create a manager over a catalog and configuration
    pub fn new(catalog: Catalog, config: &CoreConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let sets = StationSets::from_catalog(&catalog, &config.classifier);
        let epoch = Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, tables = config.roster.len(), "TablesManager started");
        Self {
            state: RwLock::new(EngineState {
                store: TableStore::from_roster(&config.roster),
                sales: SalesLog::default(),
            }),
            catalog,
            sets,
            event_tx,
            attention: None,
            epoch,
        }
    }

    /// Default menu and floor plan
    pub fn with_defaults() -> Self {
        Self::new(crate::catalog::menu::default_menu(), &CoreConfig::default())
    }

    /// Unique instance id, regenerated on every construction
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Sender half of the event channel (for collaborators that emit
    /// events themselves, like the attention scheduler)
    pub fn event_sender(&self) -> broadcast::Sender<TableEvent> {
        self.event_tx.clone()
    }

    /// Subscribe to the event stream
    pub fn subscribe(&self) -> broadcast::Receiver<TableEvent> {
        self.event_tx.subscribe()
    }

    /// Attach the attention scheduler (must share this manager's event
    /// channel; see [`AttentionScheduler`])
    pub fn set_attention_scheduler(&mut self, scheduler: Arc<AttentionScheduler>) {
        self.attention = Some(scheduler);
    }

    // ========================================================================
    // Command execution
    // ========================================================================

    /// Execute one staff command
    pub fn execute_command(&self, cmd: &TableCommand) -> ManagerResult<CommandOutcome> {
        let action = CommandAction::from(&cmd.payload);

        let events = {
            let mut state = self.state.write();
            let EngineState { store, sales } = &mut *state;
            let mut ctx = CommandContext::new(store, sales, now_millis());
            action.execute(&mut ctx)?
        };

        if events.is_empty() {
            tracing::debug!(command_id = %cmd.command_id, "command was a no-op");
            return Ok(CommandOutcome::Noop);
        }

        self.sync_attention(cmd.payload.table_id());
        for event in &events {
            // Fire-and-forget: no subscribers is fine
            let _ = self.event_tx.send(event.clone());
        }

        Ok(CommandOutcome::Applied { events })
    }

    /// Arm or disarm the table's attention timer to match its occupancy
    fn sync_attention(&self, table_id: TableId) {
        let Some(attention) = &self.attention else {
            return;
        };
        let occupied_as = {
            let state = self.state.read();
            state
                .store
                .get(table_id)
                .filter(|t| t.is_occupied())
                .map(|t| t.name.clone())
        };
        match occupied_as {
            Some(name) => attention.arm(table_id, name),
            None => attention.disarm(table_id),
        }
    }

    // ========================================================================
    // Typed command wrappers (§6 input actions)
    // ========================================================================

    pub fn add_item(&self, table_id: TableId, input: LineItemInput) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::AddItem {
            table_id,
            input,
        }))
    }

    pub fn remove_item(&self, table_id: TableId, item_id: Uuid) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::RemoveItem {
            table_id,
            item_id,
        }))
    }

    pub fn modify_item(
        &self,
        table_id: TableId,
        item_id: Uuid,
        input: LineItemInput,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ModifyItem {
            table_id,
            item_id,
            input,
        }))
    }

    pub fn toggle_done(&self, table_id: TableId, item_id: Uuid) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ToggleDone {
            table_id,
            item_id,
        }))
    }

    pub fn toggle_marchado(
        &self,
        table_id: TableId,
        item_id: Uuid,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ToggleMarchado {
            table_id,
            item_id,
        }))
    }

    pub fn toggle_second(&self, table_id: TableId, item_id: Uuid) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ToggleSecond {
            table_id,
            item_id,
        }))
    }

    pub fn apply_modifier(
        &self,
        table_id: TableId,
        item_id: Uuid,
        name: impl Into<String>,
        surcharge: f64,
        kind: ModifierKind,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ApplyModifier {
            table_id,
            item_id,
            name: name.into(),
            surcharge,
            kind,
        }))
    }

    pub fn add_comment(
        &self,
        table_id: TableId,
        item_id: Uuid,
        text: impl Into<String>,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::AddComment {
            table_id,
            item_id,
            text: text.into(),
        }))
    }

    pub fn set_notes(
        &self,
        table_id: TableId,
        notes: impl Into<String>,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::SetNotes {
            table_id,
            notes: notes.into(),
        }))
    }

    pub fn set_pickup_time(
        &self,
        table_id: TableId,
        pickup_time: impl Into<String>,
    ) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::SetPickupTime {
            table_id,
            pickup_time: pickup_time.into(),
        }))
    }

    pub fn release_seconds(&self, table_id: TableId) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::ReleaseSeconds {
            table_id,
        }))
    }

    pub fn mark_served(&self, table_id: TableId, item_id: Uuid) -> ManagerResult<CommandOutcome> {
        self.execute_command(&TableCommand::new(TableCommandPayload::MarkServed {
            table_id,
            item_id,
        }))
    }

    /// Settle a table: `None` when it has no completed items (or vanished)
    pub fn close_table(&self, table_id: TableId) -> ManagerResult<Option<Sale>> {
        let outcome = self.execute_command(&TableCommand::new(TableCommandPayload::CloseTable {
            table_id,
        }))?;
        Ok(outcome.events().iter().find_map(|e| match &e.payload {
            EventPayload::TableSettled { sale } => Some(sale.clone()),
            _ => None,
        }))
    }

    /// Record a payment: `None` when the table vanished
    pub fn record_payment(
        &self,
        table_id: TableId,
        method: PaymentMethod,
        tendered: Option<&str>,
    ) -> ManagerResult<Option<PaymentReceipt>> {
        let outcome =
            self.execute_command(&TableCommand::new(TableCommandPayload::RecordPayment {
                table_id,
                method,
                tendered: tendered.map(str::to_string),
            }))?;
        Ok(outcome.events().iter().find_map(|e| match &e.payload {
            EventPayload::PaymentRecorded {
                method,
                total,
                tendered,
                change,
            } => Some(PaymentReceipt {
                method: *method,
                total: *total,
                tendered: *tendered,
                change: *change,
            }),
            _ => None,
        }))
    }

    // ========================================================================
    // Queries (§6 output queries)
    // ========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn station_sets(&self) -> &StationSets {
        &self.sets
    }

    /// Resolve a product from the catalog, case-insensitively
    pub fn product(&self, name: &str) -> Option<Product> {
        self.catalog.lookup(name)
    }

    /// Snapshot of the whole roster
    pub fn tables(&self) -> Vec<DiningTable> {
        self.state.read().store.tables().to_vec()
    }

    /// Snapshot of one table
    pub fn table(&self, table_id: TableId) -> Option<DiningTable> {
        self.state.read().store.get(table_id).cloned()
    }

    /// Derived table total (Σ price_base)
    pub fn table_total(&self, table_id: TableId) -> Option<f64> {
        self.state.read().store.get(table_id).map(money::table_total)
    }

    /// The append-only sales log
    pub fn sales_log(&self) -> Vec<Sale> {
        self.state.read().sales.all().to_vec()
    }

    /// Ordered visible items for one station screen
    pub fn visible_items_for_station(&self, station: StationId) -> Vec<StationEntry> {
        let state = self.state.read();
        views::visible_items_for_station(station, state.store.tables(), &self.sets)
    }

    /// One kitchen screen, grouped by table
    pub fn kitchen_queue(&self, profile: &StationProfile) -> Vec<StationGroup> {
        let state = self.state.read();
        views::kitchen_queue(state.store.tables(), &self.sets, profile)
    }

    /// The service screen's done queue
    pub fn service_queue(&self) -> Vec<ServiceEntry> {
        let state = self.state.read();
        views::service_queue(state.store.tables(), &self.sets)
    }

    /// The tables overview
    pub fn occupied_tables(&self) -> Vec<TableStatus> {
        let state = self.state.read();
        views::occupied_tables(state.store.tables())
    }
}

#[cfg(test)]
mod tests;
