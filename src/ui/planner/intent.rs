use serde::{Deserialize, Serialize};

use crate::ui::mvi::Intent;
use crate::ui::planner::state::{Ingredient, Meal};

/// Changes that can be dispatched to the planner store.
///
/// On the wire each variant is `{"type": "<KIND>", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlannerIntent {
    /// Append an ingredient. Uniqueness of the id is up to the caller.
    AddIngredient(Ingredient),
    RemoveIngredient { id: String },
    /// Replace the ingredient carrying the same id.
    UpdateIngredient(Ingredient),
    AddMeal(Meal),
    RemoveMeal { id: String },
    UpdateMeal(Meal),
}

impl PlannerIntent {
    /// Every wire name, in declaration order.
    pub const KINDS: [&'static str; 6] = [
        "ADD_INGREDIENT",
        "REMOVE_INGREDIENT",
        "UPDATE_INGREDIENT",
        "ADD_MEAL",
        "REMOVE_MEAL",
        "UPDATE_MEAL",
    ];

    pub fn is_known_kind(kind: &str) -> bool {
        Self::KINDS.contains(&kind)
    }
}

impl Intent for PlannerIntent {
    fn kind(&self) -> &'static str {
        match self {
            PlannerIntent::AddIngredient(_) => Self::KINDS[0],
            PlannerIntent::RemoveIngredient { .. } => Self::KINDS[1],
            PlannerIntent::UpdateIngredient(_) => Self::KINDS[2],
            PlannerIntent::AddMeal(_) => Self::KINDS[3],
            PlannerIntent::RemoveMeal { .. } => Self::KINDS[4],
            PlannerIntent::UpdateMeal(_) => Self::KINDS[5],
        }
    }
}
