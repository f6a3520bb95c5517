//! # Mock Framework
//!
//! Utilities for testing the catalog client in isolation.
//!
//! Use [`create_mock_store`] to get a store handle and a receiver.
//! Then use helpers like [`expect_set_loading`] or [`expect_set_products`]
//! to assert the exact sequence of store writes an operation performs.

use tokio::sync::{mpsc, oneshot};

use crate::domain::Product;
use crate::store::{Ack, StoreHandle, StoreRequest};

/// Creates a mock store handle and a receiver for asserting requests.
///
/// # Testing Strategy
/// We don't want to spin up a full `CatalogStore` if we are just testing the
/// *client* logic. Instead, the handle sends messages to a channel we control
/// (`receiver`); tests inspect the messages arriving on that channel, assert
/// they are correct, and ack them to let the operation proceed.
pub fn create_mock_store(buffer_size: usize) -> (StoreHandle, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreHandle::new(sender), receiver)
}

/// Helper to verify that the next message is a SetLoading write
pub async fn expect_set_loading(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<(bool, Ack)> {
    match receiver.recv().await {
        Some(StoreRequest::SetLoading { value, respond_to }) => Some((value, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SetErrorMsg write
pub async fn expect_set_error_msg(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, Ack)> {
    match receiver.recv().await {
        Some(StoreRequest::SetErrorMsg {
            message,
            respond_to,
        }) => Some((message, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SetProducts write
pub async fn expect_set_products(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Vec<Product>, Ack)> {
    match receiver.recv().await {
        Some(StoreRequest::SetProducts {
            products,
            respond_to,
        }) => Some((products, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetProducts read
pub async fn expect_get_products(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<oneshot::Sender<Vec<Product>>> {
    match receiver.recv().await {
        Some(StoreRequest::GetProducts { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store() {
        let (handle, mut receiver) = create_mock_store(10);

        // Test SetLoading
        let set_task = tokio::spawn(async move { handle.set_loading(true).await });

        let (value, responder) = expect_set_loading(&mut receiver)
            .await
            .expect("Expected SetLoading write");
        assert!(value);
        responder.send(()).unwrap();

        let result = set_task.await.unwrap();
        assert_eq!(result, Ok(()));
    }
}
