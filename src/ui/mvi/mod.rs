//! Model-View-Intent (MVI) primitives shared by the planner state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                  │
//!    └──────────── dispatch ────────────┘
//! ```
//!
//! - **State**: Immutable snapshot handed to views
//! - **Intent**: Description of a requested change
//! - **Reducer**: Pure function that turns (State, Intent) into the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
