//! Ingredient and meal state: the records, the actions that change them and
//! the reducer that applies those actions.

mod intent;
mod reducer;
mod state;

pub use intent::PlannerIntent;
pub use reducer::PlannerReducer;
pub use state::{GlobalState, Ingredient, Keyed, Meal};
