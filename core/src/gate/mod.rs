//! Turn readiness gate
//!
//! This module provides:
//! - **Manager**: the `TurnGate` state machine driven by the host's frame loop
//! - **Scheduler**: single-shot deferred callbacks counted down per frame
//! - **View**: display snapshot for timer bars and action buttons

mod manager;
pub mod scheduler;
mod view;


pub use manager::{ActionRecord, TurnGate};
pub use scheduler::{Deferred, Scheduler};
pub use view::{CombatantView, GateView};
