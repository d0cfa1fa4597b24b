mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{egg, ingredient, meal};
use mealplan::ui::mvi::UiState;
use mealplan::ui::planner::PlannerIntent;
use mealplan::ui::provider::{use_global_state, ContextError, GlobalProvider, GlobalScope};

#[test]
fn provider_starts_empty() {
    let provider = GlobalProvider::new();
    let context = use_global_state(&provider.scope()).unwrap();

    assert!(context.state.ingredients.is_empty());
    assert!(context.state.meals.is_empty());
}

#[test]
fn accessor_without_provider_fails() {
    let result = use_global_state(&GlobalScope::detached());
    assert_eq!(result.err(), Some(ContextError::ContextUnavailable));
}

#[test]
fn default_scope_is_detached() {
    let scope = GlobalScope::default();
    assert!(!scope.is_bound());
    assert!(use_global_state(&scope).is_err());
}

#[test]
fn dispatch_add_then_remove_egg() {
    let provider = GlobalProvider::new();
    let scope = provider.scope();
    let context = use_global_state(&scope).unwrap();

    assert!(context.dispatch.dispatch(PlannerIntent::AddIngredient(egg())));
    let state = use_global_state(&scope).unwrap().state;
    assert_eq!(*state.ingredients, vec![egg()]);

    assert!(context.dispatch.dispatch(PlannerIntent::RemoveIngredient {
        id: "1".to_string(),
    }));
    let state = use_global_state(&scope).unwrap().state;
    assert!(state.ingredients.is_empty());
}

#[test]
fn snapshot_is_not_affected_by_later_dispatches() {
    let provider = GlobalProvider::new();
    let context = use_global_state(&provider.scope()).unwrap();

    context.dispatch.dispatch(PlannerIntent::AddMeal(meal("m1", "Soup", "Monday")));

    assert!(context.state.meals.is_empty());
    assert_eq!(provider.state().meals.len(), 1);
}

#[test]
fn subscribers_see_changes() {
    let provider = GlobalProvider::new();
    let mut rx = provider.subscribe();
    let dispatch = provider.dispatcher();

    dispatch.dispatch(PlannerIntent::AddIngredient(egg()));

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.ingredients.len(), 1);
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn noop_dispatch_does_not_notify() {
    let provider = GlobalProvider::new();
    let dispatch = provider.dispatcher();
    dispatch.dispatch(PlannerIntent::AddIngredient(egg()));

    let mut rx = provider.subscribe();
    let before = rx.borrow_and_update().clone();

    let changed = dispatch.dispatch(PlannerIntent::UpdateIngredient(ingredient(
        "missing", "Salt", "Spice", 1.0,
    )));

    assert!(!changed);
    assert!(!rx.has_changed().unwrap());
    assert!(provider.state().is_same(&before));
}

#[test]
fn dispatch_keeps_untouched_collection_shared() {
    let provider = GlobalProvider::new();
    let dispatch = provider.dispatcher();
    dispatch.dispatch(PlannerIntent::AddMeal(meal("m1", "Soup", "Monday")));
    let before = provider.state();

    dispatch.dispatch(PlannerIntent::AddIngredient(egg()));
    let after = provider.state();

    assert!(Arc::ptr_eq(&before.meals, &after.meals));
    assert!(!Arc::ptr_eq(&before.ingredients, &after.ingredients));
}

#[test]
fn inner_provider_shadows_outer() {
    let outer = GlobalProvider::new();
    let inner = GlobalProvider::new();
    let outer_scope = outer.scope();
    let inner_scope = inner.scope();

    use_global_state(&inner_scope)
        .unwrap()
        .dispatch
        .dispatch(PlannerIntent::AddIngredient(egg()));

    assert_eq!(use_global_state(&inner_scope).unwrap().state.ingredients.len(), 1);
    assert!(use_global_state(&outer_scope).unwrap().state.ingredients.is_empty());
}

#[test]
fn dropping_provider_unbinds_scope_and_dispatch() {
    let provider = GlobalProvider::new();
    let scope = provider.scope();
    let dispatch = use_global_state(&scope).unwrap().dispatch;
    assert!(scope.is_bound());

    drop(provider);

    assert!(!scope.is_bound());
    assert_eq!(
        use_global_state(&scope).err(),
        Some(ContextError::ContextUnavailable)
    );
    assert!(!dispatch.dispatch(PlannerIntent::AddIngredient(egg())));
    assert!(dispatch.subscribe().is_none());
}

#[test]
fn cloned_dispatch_handles_share_one_store() {
    let provider = GlobalProvider::new();
    let first = provider.dispatcher();
    let second = first.clone();

    first.dispatch(PlannerIntent::AddIngredient(egg()));
    second.dispatch(PlannerIntent::AddIngredient(ingredient("2", "Flour", "Baking", 1.0)));

    let ids: Vec<String> = provider
        .state()
        .ingredients
        .iter()
        .map(|i| i.id.clone())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn async_subscriber_wakes_on_dispatch() {
    let provider = GlobalProvider::new();
    let mut rx = provider.subscribe();
    let dispatch = provider.dispatcher();

    let waiter = tokio::spawn(async move {
        rx.changed().await.unwrap();
        let meals = rx.borrow().meals.len();
        meals
    });

    dispatch.dispatch(PlannerIntent::AddMeal(meal("m1", "Curry", "Friday")));

    let meals = tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(meals, 1);
}
