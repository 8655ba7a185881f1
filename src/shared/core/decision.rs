use std::convert::Infallible;

/// Outcome of a pure decide function. Intents are side effects the handler
/// performs once the events are durably stored.
#[derive(Debug)]
pub enum Decision<Event, Reason, Intent = Infallible> {
    Accepted {
        events: Vec<Event>,
        intents: Vec<Intent>,
    },
    Rejected {
        reason: Reason,
    },
}

impl<Event, Reason, Intent> Decision<Event, Reason, Intent> {
    pub fn accepted(events: Vec<Event>) -> Self {
        Decision::Accepted {
            events,
            intents: Vec::new(),
        }
    }

    pub fn rejected(reason: Reason) -> Self {
        Decision::Rejected { reason }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }
}
