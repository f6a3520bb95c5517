use tracing::{error, info};

use crate::clients::CatalogClient;
use crate::store::{CatalogStore, StoreHandle};

/// The assembled catalog stack: one store task plus the client wired to it.
///
/// Responsible for starting the store, handing out the client, and shutting
/// the task down cleanly.
pub struct CatalogSystem {
    pub client: CatalogClient,
    pub store: StoreHandle,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (store_actor, store) = CatalogStore::new(32);
        let handle = tokio::spawn(store_actor.run());
        let client = CatalogClient::new(base_url, store.clone());

        Self {
            client,
            store,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");
        // The store task stops once every handle is dropped and its channel
        // closes.
        drop(self.client);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
