//! Reducer tests for the shopping list slice

use super::*;
use crate::model::{Ingredient, IngredientPatch};
use std::sync::Arc;

fn seeded() -> Arc<ShoppingListState> {
    Arc::new(ShoppingListState::default())
}

fn editing(index: usize) -> Arc<ShoppingListState> {
    reduce(&seeded(), &ShoppingListAction::StartEdit(index))
}

#[test]
fn test_initial_state_has_two_seed_ingredients() {
    let state = ShoppingListState::default();
    assert_eq!(
        *state.ingredients,
        vec![
            Ingredient::new("Apples", 5.0),
            Ingredient::new("Tomatoes", 10.0)
        ]
    );
    assert!(state.edited_ingredient().is_none());
    assert_eq!(state.edited_index(), -1);
}

#[test]
fn test_add_ingredient_appends_without_touching_original() {
    let state = seeded();
    let before = state.ingredients.as_ref().clone();
    let lemon = Ingredient::new("Lemon", 1.0);

    let next = reduce(&state, &ShoppingListAction::AddIngredient(lemon.clone()));

    let mut expected = before.clone();
    expected.push(lemon);
    assert_eq!(*next.ingredients, expected);
    assert_eq!(*state.ingredients, before);
    assert!(!Arc::ptr_eq(&state.ingredients, &next.ingredients));
}

#[test]
fn test_add_ingredients_flattens_in_order() {
    let state = seeded();
    let i1 = Ingredient::new("Flour", 500.0);
    let i2 = Ingredient::new("Eggs", 3.0);

    let next = reduce(
        &state,
        &ShoppingListAction::AddIngredients(vec![i1.clone(), i2.clone()]),
    );

    assert_eq!(next.ingredients.len(), state.ingredients.len() + 2);
    assert_eq!(&next.ingredients[next.ingredients.len() - 2..], &[i1, i2]);
}

#[test]
fn test_add_ingredients_empty_sequence_keeps_contents() {
    let state = seeded();
    let next = reduce(&state, &ShoppingListAction::AddIngredients(vec![]));
    assert_eq!(next.ingredients, state.ingredients);
}

#[test]
fn test_start_edit_snapshots_the_ingredient() {
    let state = seeded();
    let next = reduce(&state, &ShoppingListAction::StartEdit(1));

    assert_eq!(next.edited_index(), 1);
    let snapshot = next.edited_ingredient().unwrap();
    assert_eq!(snapshot, &state.ingredients[1]);
    assert!(!std::ptr::eq(snapshot, &state.ingredients[1]));
    assert!(Arc::ptr_eq(&state.ingredients, &next.ingredients));
}

#[test]
fn test_update_ingredient_merges_and_clears_cursor() {
    let state = editing(0);
    let next = reduce(
        &state,
        &ShoppingListAction::UpdateIngredient(IngredientPatch::amount(9.0)),
    );

    assert_eq!(next.ingredients[0].amount, 9.0);
    assert_eq!(next.ingredients[0].name, "Apples");
    assert_eq!(next.ingredients[1], state.ingredients[1]);
    assert_eq!(next.edited_index(), -1);
    assert!(next.edited_ingredient().is_none());
    assert_eq!(state.ingredients[0].amount, 5.0);
}

#[test]
fn test_delete_ingredient_removes_exactly_the_edited_position() {
    let state = editing(0);
    let next = reduce(&state, &ShoppingListAction::DeleteIngredient);

    assert_eq!(next.ingredients.len(), state.ingredients.len() - 1);
    assert_eq!(*next.ingredients, vec![Ingredient::new("Tomatoes", 10.0)]);
    assert_eq!(next.edited_index(), -1);
}

#[test]
fn test_delete_removes_by_position_not_identity() {
    let duplicate = Ingredient::new("Salt", 1.0);
    let state = Arc::new(ShoppingListState::new(vec![
        duplicate.clone(),
        duplicate.clone(),
        duplicate.clone(),
    ]));
    let state = reduce(&state, &ShoppingListAction::StartEdit(1));
    let next = reduce(&state, &ShoppingListAction::DeleteIngredient);
    assert_eq!(next.ingredients.len(), 2);
}

#[test]
fn test_stop_edit_clears_cursor_and_shares_list() {
    let state = editing(1);
    let next = reduce(&state, &ShoppingListAction::StopEdit);

    assert_eq!(next.edited_index(), -1);
    assert!(Arc::ptr_eq(&state.ingredients, &next.ingredients));
}

#[test]
fn test_add_during_edit_keeps_cursor() {
    let state = editing(1);
    let next = reduce(
        &state,
        &ShoppingListAction::AddIngredient(Ingredient::new("Basil", 1.0)),
    );
    assert_eq!(next.edited_index(), 1);
    assert_eq!(next.edited_ingredient(), state.edited_ingredient());
}

#[test]
fn test_update_without_edit_is_rejected() {
    let state = seeded();
    assert_eq!(
        state.apply(&ShoppingListAction::UpdateIngredient(IngredientPatch::amount(1.0))),
        Err(ListError::NoActiveEdit)
    );

    let next = reduce(
        &state,
        &ShoppingListAction::UpdateIngredient(IngredientPatch::amount(1.0)),
    );
    assert!(Arc::ptr_eq(&state, &next));
}

#[test]
fn test_stale_edit_index_is_rejected() {
    let stale = ShoppingListState {
        ingredients: Arc::new(vec![Ingredient::new("Apples", 5.0)]),
        edit: Some(EditCursor {
            index: 3,
            ingredient: Ingredient::new("Ghost", 1.0),
        }),
    };

    assert_eq!(
        stale.apply(&ShoppingListAction::DeleteIngredient),
        Err(ListError::IndexOutOfRange { index: 3, len: 1 })
    );

    let stale = Arc::new(stale);
    let next = reduce(&stale, &ShoppingListAction::DeleteIngredient);
    assert!(Arc::ptr_eq(&stale, &next));
}

#[test]
fn test_start_edit_out_of_range_is_rejected() {
    let state = seeded();
    let next = reduce(&state, &ShoppingListAction::StartEdit(7));
    assert!(Arc::ptr_eq(&state, &next));
    assert_eq!(next.edited_index(), -1);
}
