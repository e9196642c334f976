//! # Recipe book
//!
//! State core for a recipe book with a shopping list, synchronised with a
//! remote JSON document store and authenticated against a remote identity
//! provider.
//!
//! ## Modules
//!
//! - `model` - Ingredient and recipe records
//! - `shopping_list` - Shopping list slice and its reducer
//! - `recipes` - Recipe slice, remote store client and sync effects
//! - `auth` - Session handling, identity client and auth effects
//! - `store` - Action bus, root state and the store loop
//! - `storage` - Local key-value blob storage
//! - `navigation` - Route changes requested by effects
//! - `app` - Configuration, logging and runtime wiring
//! - `testing` - Test doubles for the external collaborators
pub mod app;
pub mod auth;
pub mod error;
pub mod model;
pub mod navigation;
pub mod recipes;
pub mod shopping_list;
pub mod storage;
pub mod store;

pub mod testing;

pub use error::{Error, Result};
