pub mod health;
pub mod todo;
