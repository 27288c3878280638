//! Cart Handlers

pub(crate) mod add_item;
pub(crate) mod add_modifier;
pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod customer;
pub(crate) mod get;
pub(crate) mod remove_item;
pub(crate) mod session;
pub(crate) mod totals;
pub(crate) mod update_item;
