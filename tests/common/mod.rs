//! Shared fixtures for planner tests.

#![allow(dead_code, unused_imports)]

use mealplan::ui::planner::{GlobalState, Ingredient, Meal, PlannerIntent, PlannerReducer};
use mealplan::ui::mvi::Reducer;

pub fn ingredient(id: &str, name: &str, category: &str, quantity: f64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
    }
}

pub fn egg() -> Ingredient {
    ingredient("1", "Egg", "Dairy", 12.0)
}

pub fn meal(id: &str, name: &str, day: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        day_of_week: day.to_string(),
    }
}

/// Reduce every intent in order, starting from the empty state.
pub fn state_from(intents: impl IntoIterator<Item = PlannerIntent>) -> GlobalState {
    PlannerReducer::reduce_all(GlobalState::default(), intents)
}

/// Three ingredients and two meals.
pub fn stocked_state() -> GlobalState {
    state_from([
        PlannerIntent::AddIngredient(egg()),
        PlannerIntent::AddIngredient(ingredient("2", "Flour", "Baking", 1.5)),
        PlannerIntent::AddIngredient(ingredient("3", "Milk", "Dairy", 2.0)),
        PlannerIntent::AddMeal(meal("m1", "Pancakes", "Saturday")),
        PlannerIntent::AddMeal(meal("m2", "Omelette", "Sunday")),
    ])
}
