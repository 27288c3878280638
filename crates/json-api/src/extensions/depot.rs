//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Access to values the router injects into the depot.
pub(crate) trait DepotExt {
    /// The shared application state, or a 500 if the router never injected
    /// it.
    fn app_state(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn app_state(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("application state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
