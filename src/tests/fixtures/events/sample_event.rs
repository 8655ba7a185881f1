// Minimal event used to exercise the shared infrastructure without a bounded context.

use crate::shared::core::domain_event::DomainEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEvent {
    pub name: String,
    pub occurred_at: i64,
}

impl SampleEvent {
    pub fn new(name: &str, occurred_at: i64) -> Self {
        Self {
            name: name.to_string(),
            occurred_at,
        }
    }
}

impl DomainEvent for SampleEvent {
    fn event_type(&self) -> &'static str {
        "SampleHappened"
    }

    fn occurred_at(&self) -> i64 {
        self.occurred_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleState {
    pub names: Vec<String>,
}

pub fn evolve_sample(mut state: SampleState, event: SampleEvent) -> SampleState {
    state.names.push(event.name);
    state
}
