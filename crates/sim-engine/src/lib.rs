#![deny(warnings)]

//! Simulation state machine: week progression, completed-week tracking, and
//! decision history for one student session.
//!
//! The engine wires the event catalog to the transform registry (verified at
//! construction so a catalog/library mismatch fails at startup, not at
//! confirmation time) and folds transform results back into the session
//! state. Every mutation is all-or-nothing: a rejected confirmation leaves
//! `SimulationState` exactly as it was.

use serde::{Deserialize, Serialize};
use sim_core::{
    validate_dataset, Dataset, HistoryEntry, ImpactSummary, ValidationError,
};
use sim_events::{CatalogError, Event, EventCatalog};
use sim_transforms::{TransformError, TransformRegistry};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::{debug, info};

mod unlock;

pub use unlock::UnlockBoard;

/// One user session's simulation state.
///
/// The serialized form is the session snapshot handed back and forth with the
/// UI layer: `{"week", "data", "history", "completed_weeks"}`. It must
/// round-trip exactly, with no field loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    #[serde(rename = "week")]
    pub current_week: u8,
    #[serde(rename = "data")]
    pub dataset: Dataset,
    pub history: Vec<HistoryEntry>,
    pub completed_weeks: BTreeSet<u8>,
}

impl SimulationState {
    /// Serialize to the session snapshot JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore from a session snapshot produced by [`Self::to_json`].
    pub fn from_json(snapshot: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snapshot)
    }
}

/// What a confirmed choice hands back to the caller, alongside the mutated
/// state: the latest-month impact, the canned narrative, and the choice's
/// feedback bullets.
#[derive(Clone, Debug)]
pub struct Decision {
    pub impact: ImpactSummary,
    pub narrative: &'static str,
    pub student_feedback: Vec<String>,
}

/// Core-level errors. All are non-retryable; the calling layer decides
/// whether to surface a message or silently ignore the rejection.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Catalog/library mismatch. Programmer error; surfaces at startup.
    #[error(transparent)]
    UnknownTransform(#[from] TransformError),
    /// Choice id not belonging to the event; no state change.
    #[error(transparent)]
    ChoiceNotFound(#[from] CatalogError),
    /// Guard violation: the instructor has not unlocked the week.
    #[error("week {0} is locked")]
    WeekLocked(u8),
    /// Guard violation: the week was already confirmed in this session.
    #[error("week {0} is already completed")]
    WeekAlreadyCompleted(u8),
    /// No event is registered for the week.
    #[error("no event registered for week {0}")]
    EventNotFound(u8),
    /// Started or transformed with no data; rejected, no state change.
    #[error("dataset is empty")]
    EmptyDataset,
    /// Dataset handed to `start` violates a core invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The simulation engine: catalog + verified transform registry.
pub struct Engine {
    catalog: EventCatalog,
    registry: TransformRegistry,
}

impl Engine {
    /// Build the engine and verify every catalog-declared transform resolves.
    pub fn new() -> Result<Self, EngineError> {
        let catalog = EventCatalog::builtin();
        let registry = TransformRegistry::builtin();
        registry.verify(catalog.transform_names())?;
        debug!(
            events = catalog.weeks().count(),
            transforms = registry.names().count(),
            "engine initialized"
        );
        Ok(Engine { catalog, registry })
    }

    /// Start a session: week 1, empty history, nothing completed.
    pub fn start(&self, dataset: Dataset) -> Result<SimulationState, EngineError> {
        if dataset.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        validate_dataset(&dataset)?;
        info!(records = dataset.records.len(), "simulation started");
        Ok(SimulationState {
            current_week: 1,
            dataset,
            history: Vec::new(),
            completed_weeks: BTreeSet::new(),
        })
    }

    /// Weeks that currently may be opened: unlocked by the instructor, not
    /// yet completed, and carrying a catalog event. Read-only.
    pub fn unlocked_openable_weeks(
        &self,
        state: &SimulationState,
        unlocked: &BTreeMap<u8, bool>,
    ) -> BTreeSet<u8> {
        self.catalog
            .weeks()
            .filter(|week| *unlocked.get(week).unwrap_or(&false))
            .filter(|week| !state.completed_weeks.contains(week))
            .collect()
    }

    /// Look up the event for a week without mutating anything. The unlock
    /// and completed guards are enforced here as well as in the UI.
    pub fn open_event(
        &self,
        state: &SimulationState,
        unlocked: &BTreeMap<u8, bool>,
        week: u8,
    ) -> Result<&Event, EngineError> {
        if !unlocked.get(&week).copied().unwrap_or(false) {
            return Err(EngineError::WeekLocked(week));
        }
        if state.completed_weeks.contains(&week) {
            return Err(EngineError::WeekAlreadyCompleted(week));
        }
        self.catalog
            .event_for_week(week)
            .ok_or(EngineError::EventNotFound(week))
    }

    /// Confirm a choice for a week: run its transform, then atomically
    /// replace the dataset, append one history entry, mark the week
    /// completed, and advance `current_week` to at least `week`.
    ///
    /// Any rejection (locked, already completed, unknown event/choice, empty
    /// dataset) happens before the first mutation, so failure leaves the
    /// state untouched.
    pub fn confirm_choice(
        &self,
        state: &mut SimulationState,
        unlocked: &BTreeMap<u8, bool>,
        week: u8,
        choice_id: &str,
    ) -> Result<Decision, EngineError> {
        if !unlocked.get(&week).copied().unwrap_or(false) {
            return Err(EngineError::WeekLocked(week));
        }
        if state.completed_weeks.contains(&week) {
            return Err(EngineError::WeekAlreadyCompleted(week));
        }
        if state.dataset.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        let event = self
            .catalog
            .event_for_week(week)
            .ok_or(EngineError::EventNotFound(week))?;
        let choice = event.choice(choice_id)?;
        let transform = self.registry.get(&choice.transform_name)?;

        let outcome = transform(&state.dataset);

        state.dataset = outcome.dataset;
        state.history.push(HistoryEntry {
            week,
            event_id: event.id.clone(),
            choice_id: choice.id.clone(),
            impact: outcome.impact.clone(),
            student_feedback: choice.student_feedback.clone(),
            instructor_notes: String::new(),
        });
        state.completed_weeks.insert(week);
        state.current_week = state.current_week.max(week);
        info!(
            week,
            choice = %choice.id,
            transform = %choice.transform_name,
            profit_delta = %outcome.impact.profit,
            "choice confirmed"
        );
        Ok(Decision {
            impact: outcome.impact,
            narrative: outcome.narrative,
            student_feedback: choice.student_feedback.clone(),
        })
    }

    /// Overwrite the instructor notes on the most recent history entry.
    /// Silent no-op when the history is empty.
    pub fn annotate_last_entry(&self, state: &mut SimulationState, notes: &str) {
        if let Some(entry) = state.history.last_mut() {
            entry.instructor_notes = notes.to_string();
        }
    }
}
