pub mod conversation;
pub mod error;
pub mod food_item;
pub mod grocery_scan;
pub mod health;
pub mod recipe;
pub mod tags;
