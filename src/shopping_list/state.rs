//! Shopping list state and its checked transitions

use super::ShoppingListAction;
use crate::model::Ingredient;
use std::sync::Arc;
use thiserror::Error;

/// Position and snapshot of the ingredient currently being edited
#[derive(Debug, Clone, PartialEq)]
pub struct EditCursor {
    pub index: usize,
    pub ingredient: Ingredient,
}

/// Reasons a shopping list transition is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("no ingredient is being edited")]
    NoActiveEdit,

    #[error("index {index} is out of range for a list of {len} ingredients")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListState {
    pub ingredients: Arc<Vec<Ingredient>>,
    pub edit: Option<EditCursor>,
}

impl Default for ShoppingListState {
    fn default() -> Self {
        Self {
            ingredients: Arc::new(vec![
                Ingredient::new("Apples", 5.0),
                Ingredient::new("Tomatoes", 10.0),
            ]),
            edit: None,
        }
    }
}

impl ShoppingListState {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients: Arc::new(ingredients),
            edit: None,
        }
    }

    /// Ingredient under edit, if any
    pub fn edited_ingredient(&self) -> Option<&Ingredient> {
        self.edit.as_ref().map(|cursor| &cursor.ingredient)
    }

    /// Position under edit, or -1 when nothing is being edited
    pub fn edited_index(&self) -> i64 {
        self.edit
            .as_ref()
            .map(|cursor| cursor.index as i64)
            .unwrap_or(-1)
    }

    /// Compute the state that follows `action`.
    ///
    /// Update and delete require an edit cursor that still points inside the
    /// list; starting an edit requires an index inside the list.
    pub fn apply(&self, action: &ShoppingListAction) -> Result<Self, ListError> {
        match action {
            ShoppingListAction::AddIngredient(ingredient) => {
                let mut ingredients = Vec::with_capacity(self.ingredients.len() + 1);
                ingredients.extend(self.ingredients.iter().cloned());
                ingredients.push(ingredient.clone());
                Ok(Self {
                    ingredients: Arc::new(ingredients),
                    edit: self.edit.clone(),
                })
            }
            ShoppingListAction::AddIngredients(added) => {
                let mut ingredients = Vec::with_capacity(self.ingredients.len() + added.len());
                ingredients.extend(self.ingredients.iter().cloned());
                ingredients.extend(added.iter().cloned());
                Ok(Self {
                    ingredients: Arc::new(ingredients),
                    edit: self.edit.clone(),
                })
            }
            ShoppingListAction::UpdateIngredient(patch) => {
                let index = self.checked_edit_index()?;
                let mut ingredients = self.ingredients.as_ref().clone();
                ingredients[index] = ingredients[index].merged(patch);
                Ok(Self {
                    ingredients: Arc::new(ingredients),
                    edit: None,
                })
            }
            ShoppingListAction::DeleteIngredient => {
                let index = self.checked_edit_index()?;
                let ingredients = self
                    .ingredients
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != index)
                    .map(|(_, ingredient)| ingredient.clone())
                    .collect();
                Ok(Self {
                    ingredients: Arc::new(ingredients),
                    edit: None,
                })
            }
            ShoppingListAction::StartEdit(index) => {
                let ingredient = self.ingredients.get(*index).cloned().ok_or(
                    ListError::IndexOutOfRange {
                        index: *index,
                        len: self.ingredients.len(),
                    },
                )?;
                Ok(Self {
                    ingredients: Arc::clone(&self.ingredients),
                    edit: Some(EditCursor {
                        index: *index,
                        ingredient,
                    }),
                })
            }
            ShoppingListAction::StopEdit => Ok(Self {
                ingredients: Arc::clone(&self.ingredients),
                edit: None,
            }),
        }
    }

    fn checked_edit_index(&self) -> Result<usize, ListError> {
        let cursor = self.edit.as_ref().ok_or(ListError::NoActiveEdit)?;
        if cursor.index >= self.ingredients.len() {
            return Err(ListError::IndexOutOfRange {
                index: cursor.index,
                len: self.ingredients.len(),
            });
        }
        Ok(cursor.index)
    }
}
