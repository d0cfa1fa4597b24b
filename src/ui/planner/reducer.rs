use std::sync::Arc;

use crate::ui::mvi::Reducer;
use crate::ui::planner::intent::PlannerIntent;
use crate::ui::planner::state::{GlobalState, Keyed};

pub struct PlannerReducer;

impl Reducer for PlannerReducer {
    type State = GlobalState;
    type Intent = PlannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlannerIntent::AddIngredient(ingredient) => GlobalState {
                ingredients: appended(&state.ingredients, ingredient),
                ..state
            },
            PlannerIntent::RemoveIngredient { id } => match removed(&state.ingredients, &id) {
                Some(ingredients) => GlobalState {
                    ingredients,
                    ..state
                },
                None => state,
            },
            PlannerIntent::UpdateIngredient(ingredient) => {
                match replaced(&state.ingredients, ingredient) {
                    Some(ingredients) => GlobalState {
                        ingredients,
                        ..state
                    },
                    None => state,
                }
            }
            PlannerIntent::AddMeal(meal) => GlobalState {
                meals: appended(&state.meals, meal),
                ..state
            },
            PlannerIntent::RemoveMeal { id } => match removed(&state.meals, &id) {
                Some(meals) => GlobalState { meals, ..state },
                None => state,
            },
            PlannerIntent::UpdateMeal(meal) => match replaced(&state.meals, meal) {
                Some(meals) => GlobalState { meals, ..state },
                None => state,
            },
        }
    }
}

fn appended<T: Clone>(items: &Arc<Vec<T>>, item: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item);
    Arc::new(next)
}

/// `None` when no record has `id`; the caller keeps the old collection.
fn removed<T: Keyed + Clone>(items: &Arc<Vec<T>>, id: &str) -> Option<Arc<Vec<T>>> {
    if !items.iter().any(|item| item.id() == id) {
        return None;
    }
    Some(Arc::new(
        items.iter().filter(|item| item.id() != id).cloned().collect(),
    ))
}

/// Replaces every record sharing the replacement's id, in place.
fn replaced<T: Keyed + Clone>(items: &Arc<Vec<T>>, replacement: T) -> Option<Arc<Vec<T>>> {
    if !items.iter().any(|item| item.id() == replacement.id()) {
        return None;
    }
    Some(Arc::new(
        items
            .iter()
            .map(|item| {
                if item.id() == replacement.id() {
                    replacement.clone()
                } else {
                    item.clone()
                }
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::planner::state::Meal;

    fn meal(id: &str, day: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: format!("meal {id}"),
            day_of_week: day.to_string(),
        }
    }

    #[test]
    fn removed_returns_none_without_match() {
        let items = Arc::new(vec![meal("a", "Monday")]);
        assert!(removed(&items, "b").is_none());
    }

    #[test]
    fn removed_drops_every_duplicate() {
        let items = Arc::new(vec![meal("a", "Monday"), meal("b", "Tuesday"), meal("a", "Friday")]);
        let next = removed(&items, "a").unwrap();
        assert_eq!(*next, vec![meal("b", "Tuesday")]);
    }

    #[test]
    fn replaced_updates_every_duplicate_in_place() {
        let items = Arc::new(vec![meal("a", "Monday"), meal("b", "Tuesday"), meal("a", "Friday")]);
        let next = replaced(&items, meal("a", "Sunday")).unwrap();
        assert_eq!(
            *next,
            vec![meal("a", "Sunday"), meal("b", "Tuesday"), meal("a", "Sunday")]
        );
    }
}
