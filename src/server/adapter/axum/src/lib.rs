/* src/server/adapter/axum/src/lib.rs */

mod error;
mod middleware;

use hintsync_server::HintSync;

pub use error::HintsRejection;
pub use middleware::{Hints, client_hints_middleware};

/// Re-export hintsync-server core for convenience
pub use hintsync_server;

/// Extension trait that wraps every route of an Axum router in the client hints middleware.
pub trait ClientHintsRouter {
  fn client_hints(self, sync: HintSync) -> Self;
}

impl<S> ClientHintsRouter for axum::Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  fn client_hints(self, sync: HintSync) -> Self {
    self.layer(axum::middleware::from_fn_with_state(sync, client_hints_middleware))
  }
}
