use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// A pantry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
}

/// A meal planned for a day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub day_of_week: String,
}

/// Records addressed by their `id`.
pub trait Keyed {
    fn id(&self) -> &str;
}

impl Keyed for Ingredient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Meal {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Global planner state.
///
/// Each collection sits behind its own `Arc` so a transition that touches
/// one collection hands the other one over untouched. Two snapshots share a
/// collection exactly when `Arc::ptr_eq` holds for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalState {
    pub ingredients: Arc<Vec<Ingredient>>,
    pub meals: Arc<Vec<Meal>>,
}

impl UiState for GlobalState {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ingredients, &other.ingredients) && Arc::ptr_eq(&self.meals, &other.meals)
    }
}

impl GlobalState {
    /// First ingredient with the given id.
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    /// First meal with the given id.
    pub fn meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }
}
