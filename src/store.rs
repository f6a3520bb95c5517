use tokio::sync::{mpsc, oneshot};

use crate::domain::Product;
use crate::error::StoreError;

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Ack = oneshot::Sender<()>;

/// Typed messages for the catalog store. Setters carry an ack channel so the
/// caller can await the write before issuing a dependent read.
#[derive(Debug)]
pub enum StoreRequest {
    SetLoading {
        value: bool,
        respond_to: Ack,
    },
    SetErrorMsg {
        message: String,
        respond_to: Ack,
    },
    SetProducts {
        products: Vec<Product>,
        respond_to: Ack,
    },
    GetProducts {
        respond_to: oneshot::Sender<Vec<Product>>,
    },
    Snapshot {
        respond_to: oneshot::Sender<CatalogState>,
    },
}

/// Everything the store holds, cloned out for inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error_msg: Option<String>,
}

// =============================================================================
// 2. THE STORE ACTOR
// =============================================================================

/// Task owning the UI-facing catalog state: the product list, the loading
/// flag, and the last error message.
///
/// The list is only ever replaced wholesale; the error message is overwritten
/// (not appended) on each new failure. All mutation goes through
/// [`StoreHandle`] setters, so there is exactly one owner and one write path.
pub struct CatalogStore {
    receiver: mpsc::Receiver<StoreRequest>,
    state: CatalogState,
}

impl CatalogStore {
    pub fn new(buffer_size: usize) -> (Self, StoreHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            state: CatalogState::default(),
        };
        (store, StoreHandle::new(sender))
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::SetLoading { value, respond_to } => {
                    self.state.loading = value;
                    let _ = respond_to.send(());
                }
                StoreRequest::SetErrorMsg {
                    message,
                    respond_to,
                } => {
                    self.state.error_msg = Some(message);
                    let _ = respond_to.send(());
                }
                StoreRequest::SetProducts {
                    products,
                    respond_to,
                } => {
                    self.state.products = products;
                    let _ = respond_to.send(());
                }
                StoreRequest::GetProducts { respond_to } => {
                    let _ = respond_to.send(self.state.products.clone());
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }
    }
}

// =============================================================================
// 3. THE STORE HANDLE
// =============================================================================

/// Client handle to the store task. Cloneable; every consumer mutates the
/// same underlying state through these setters and nothing else.
#[derive(Clone)]
pub struct StoreHandle {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreHandle {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    pub async fn set_loading(&self, value: bool) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::SetLoading { value, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    pub async fn set_error_msg(&self, message: impl Into<String>) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::SetErrorMsg {
                message: message.into(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    pub async fn set_products(&self, products: Vec<Product>) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::SetProducts {
                products,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Snapshot of the current product list.
    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetProducts { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    /// Snapshot of the full state, for inspection after an operation settles.
    pub async fn snapshot(&self) -> Result<CatalogState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }
}

// =============================================================================
// 4. TESTS
// =============================================================================
