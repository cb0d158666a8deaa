use crate::context::RequestContext;
use crate::policy::{Condition, Policy};
use conditions_types::TriState;
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Votes the same outcome at both levels.
pub struct Fixed {
    outcome: TriState,
    name: String,
}

impl Fixed {
    pub fn new(outcome: TriState) -> Self {
        Self {
            outcome,
            name: format!("Fixed({outcome})"),
        }
    }
}

impl Condition for Fixed {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn permits_collective(&self, _ctx: &dyn RequestContext) -> TriState {
        self.outcome
    }

    fn permits_instance(&self, _ctx: &dyn RequestContext, _obj: &dyn Any) -> TriState {
        self.outcome
    }
}

pub fn fixed(outcome: TriState) -> Policy {
    Policy::custom(Fixed::new(outcome))
}

/// Like [`Fixed`] but without a name.
pub struct Unnamed(pub TriState);

impl Condition for Unnamed {
    fn permits_collective(&self, _ctx: &dyn RequestContext) -> TriState {
        self.0
    }

    fn permits_instance(&self, _ctx: &dyn RequestContext, _obj: &dyn Any) -> TriState {
        self.0
    }
}

/// Panics when evaluated; used to prove an operand was skipped.
pub struct Tripwire;

impl Condition for Tripwire {
    fn name(&self) -> Option<&str> {
        Some("Tripwire")
    }

    fn permits_collective(&self, _ctx: &dyn RequestContext) -> TriState {
        panic!("tripwire condition evaluated")
    }

    fn permits_instance(&self, _ctx: &dyn RequestContext, _obj: &dyn Any) -> TriState {
        panic!("tripwire condition evaluated")
    }
}

pub fn tripwire() -> Policy {
    Policy::custom(Tripwire)
}

/// Counts evaluations and votes a fixed outcome.
#[derive(Clone, Default)]
pub struct Counter {
    calls: Arc<AtomicUsize>,
}

impl Counter {
    pub fn policy(&self, outcome: TriState) -> Policy {
        Policy::custom(Counting {
            calls: Arc::clone(&self.calls),
            outcome,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

struct Counting {
    calls: Arc<AtomicUsize>,
    outcome: TriState,
}

impl Condition for Counting {
    fn name(&self) -> Option<&str> {
        Some("Counting")
    }

    fn permits_collective(&self, _ctx: &dyn RequestContext) -> TriState {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }

    fn permits_instance(&self, _ctx: &dyn RequestContext, _obj: &dyn Any) -> TriState {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }
}
