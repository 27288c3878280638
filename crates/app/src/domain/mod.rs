//! Bitewise Domain Concerns

pub mod carts;
pub mod catalog;
pub mod merchants;
pub mod recommendations;
pub mod users;
