use thiserror::Error;

/// Failure to reach the catalog store task.
///
/// This is the only error surfaced to callers of [`crate::clients::CatalogClient`]
/// operations. Transport failures are never returned; they are normalized via
/// [`user_facing_message`] and written to the store's error field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Store actor closed")]
    Closed,
    #[error("Store actor dropped")]
    Dropped,
}

/// Maps a transport failure to a display-ready message.
///
/// The catalog client never inspects transport error shapes beyond this
/// boundary; the returned string lands in the store's error field as the sole
/// failure signal callers can observe.
pub fn user_facing_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "The product service took too long to respond.".to_string();
    }
    if err.is_connect() {
        return "Could not reach the product service.".to_string();
    }
    if let Some(status) = err.status() {
        return format!("The product service responded with {status}.");
    }
    if err.is_decode() {
        return "The product service returned an unreadable response.".to_string();
    }
    "Something went wrong while talking to the product service.".to_string()
}
