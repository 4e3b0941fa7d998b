#![deny(warnings)]

//! Weekly event catalog for the Discount4U retail simulation.
//!
//! Events are a load-time constant: one scenario per week for weeks 2..=7,
//! each with 2–3 mutually exclusive choices bound to a named transform. The
//! catalog exposes read-only lookup only; there is no mutation API.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

mod builtin;

/// First week that carries an operational event.
pub const FIRST_EVENT_WEEK: u8 = 2;
/// Last week that carries an operational event.
pub const LAST_EVENT_WEEK: u8 = 7;

/// One selectable reaction to an event, bound to exactly one transform.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Choice {
    /// Choice id, unique within its event ("A", "B", "C").
    pub id: String,
    /// Button label shown to the student.
    pub label: String,
    /// Lookup key into the transform registry.
    pub transform_name: String,
    /// Canned feedback bullets surfaced after confirmation.
    pub student_feedback: Vec<String>,
    /// Teaching prompt; never shown to students.
    pub instructor_note: String,
}

/// A weekly scenario with a fixed set of mutually exclusive choices.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub week: u8,
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
}

/// Errors for catalog lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The caller passed a choice id that does not belong to the event.
    #[error("choice {choice_id} does not belong to event {event_id}")]
    ChoiceNotFound { event_id: String, choice_id: String },
}

impl Event {
    /// Look up a choice by exact id.
    pub fn choice(&self, choice_id: &str) -> Result<&Choice, CatalogError> {
        self.choices
            .iter()
            .find(|c| c.id == choice_id)
            .ok_or_else(|| CatalogError::ChoiceNotFound {
                event_id: self.id.clone(),
                choice_id: choice_id.to_string(),
            })
    }
}

/// Read-only registry mapping a week number to its event.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    events: BTreeMap<u8, Event>,
}

impl EventCatalog {
    /// The full six-week catalog, defined once at load time.
    pub fn builtin() -> Self {
        let mut events = BTreeMap::new();
        for event in builtin::events() {
            events.insert(event.week, event);
        }
        EventCatalog { events }
    }

    /// Event for a week, absent for weeks outside 2..=7 or unregistered ones.
    pub fn event_for_week(&self, week: u8) -> Option<&Event> {
        self.events.get(&week)
    }

    /// Weeks that have a registered event, in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = u8> + '_ {
        self.events.keys().copied()
    }

    /// Every transform name declared by any choice, so the engine can verify
    /// the registry resolves them all at startup.
    pub fn transform_names(&self) -> impl Iterator<Item = &str> {
        self.events
            .values()
            .flat_map(|e| e.choices.iter().map(|c| c.transform_name.as_str()))
    }
}
