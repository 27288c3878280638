//! Domain, persistence and Clover integration for the Bitewise ordering
//! backend.

pub mod clover;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
