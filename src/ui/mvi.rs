//! Unidirectional data flow primitives for the dialog controllers.
//!
//! Each dialog keeps its state in an immutable value, user actions and
//! remote-call outcomes become intents, and a reducer is the only place
//! where transitions happen:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//! ```

/// Marker trait for dialog state values. `Default` lets the dispatcher take
/// the current state out by value; `PartialEq` lets tests compare states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or remote-call outcomes.
pub trait Intent: Send + 'static {}

/// Pure state transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
