use reqwest::Client;
use tracing::{debug, instrument};

use crate::domain::{Product, ProductDraft};
use crate::error::{user_facing_message, StoreError};
use crate::store::StoreHandle;
use crate::transform::{self, PriceDirection};

/// Client for the remote product resource.
///
/// Mediates between the HTTP API and the catalog store. Callers observe
/// outcomes through the store, not through return values: transport failures
/// are normalized into the store's error field, and the only error these
/// operations return is a [`StoreError`] meaning the store task itself is
/// gone.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    store: StoreHandle,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, store: StoreHandle) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            store,
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    // =========================================================================
    // Network operations
    // =========================================================================

    /// Fetches the full product list and replaces the store's list with it.
    /// Marks the store loading for the duration, success or failure.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        self.store.set_loading(true).await?;
        match self.request_all().await {
            Ok(products) => {
                debug!(count = products.len(), "Product list fetched");
                self.store.set_products(products).await?;
            }
            Err(err) => {
                self.store.set_error_msg(user_facing_message(&err)).await?;
            }
        }
        self.store.set_loading(false).await
    }

    /// Peeks at a single product: the response is logged at debug level and
    /// discarded, and the loading flag stays untouched on both paths. Only a
    /// failure leaves a trace in the store.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: u64) -> Result<(), StoreError> {
        debug!("Sending request");
        match self.request_one(id).await {
            Ok(product) => debug!(?product, "Product fetched"),
            Err(err) => {
                self.store.set_error_msg(user_facing_message(&err)).await?;
            }
        }
        Ok(())
    }

    /// Upserts a product: updates when the draft carries an id, creates
    /// otherwise.
    ///
    /// On update, the server echo is merged with the draft's own rating (or
    /// the zero rating when the draft has none) and swapped into the list at
    /// the matching id, order preserved. On create, the response is appended
    /// to the end of the list, with an omitted rating defaulting to zero. A
    /// transport failure records an error message and mutates nothing.
    #[instrument(skip(self, draft), fields(id = ?draft.id))]
    pub async fn save(&self, draft: ProductDraft) -> Result<(), StoreError> {
        debug!("Sending request");
        self.store.set_loading(true).await?;
        let outcome = if let Some(id) = draft.id {
            self.request_update(id, &draft).await.map(|mut updated| {
                updated.rating = draft.rating.unwrap_or_default();
                (updated, true)
            })
        } else {
            self.request_create(&draft).await.map(|created| (created, false))
        };
        match outcome {
            Ok((product, replace_existing)) => {
                let mut products = self.store.products().await?;
                if replace_existing {
                    for item in products.iter_mut() {
                        if item.id == product.id {
                            *item = product.clone();
                        }
                    }
                } else {
                    products.push(product);
                }
                self.store.set_products(products).await?;
            }
            Err(err) => {
                self.store.set_error_msg(user_facing_message(&err)).await?;
            }
        }
        self.store.set_loading(false).await
    }

    /// Deletes a product and drops the matching entry from the store's list.
    /// An id with no matching entry leaves the list unchanged; that is not a
    /// failure.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: u64) -> Result<(), StoreError> {
        debug!("Sending request");
        self.store.set_loading(true).await?;
        match self.request_delete(id).await {
            Ok(()) => {
                let products = self.store.products().await?;
                let remaining = products.into_iter().filter(|item| item.id != id).collect();
                self.store.set_products(remaining).await?;
            }
            Err(err) => {
                self.store.set_error_msg(user_facing_message(&err)).await?;
            }
        }
        self.store.set_loading(false).await
    }

    async fn request_all(&self) -> Result<Vec<Product>, reqwest::Error> {
        self.http
            .get(self.products_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn request_one(&self, id: u64) -> Result<Product, reqwest::Error> {
        self.http
            .get(self.product_url(id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn request_update(
        &self,
        id: u64,
        draft: &ProductDraft,
    ) -> Result<Product, reqwest::Error> {
        self.http
            .put(self.product_url(id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn request_create(&self, draft: &ProductDraft) -> Result<Product, reqwest::Error> {
        self.http
            .post(self.products_url())
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn request_delete(&self, id: u64) -> Result<(), reqwest::Error> {
        self.http
            .delete(self.product_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    // =========================================================================
    // Store-level transforms (no network)
    // =========================================================================

    /// Reorders the store's list by category, ascending.
    #[instrument(skip(self))]
    pub async fn sort_by_category(&self) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::sort_by_category(products))
            .await
    }

    /// Reorders the store's list by price in the given direction.
    #[instrument(skip(self))]
    pub async fn sort_by_price(&self, direction: PriceDirection) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::sort_by_price(products, direction))
            .await
    }

    /// Reorders the store's list most-rated first.
    #[instrument(skip(self))]
    pub async fn sort_by_rating_count(&self) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::sort_by_rating_count(products))
            .await
    }

    /// Narrows the store's list to the given rating bucket.
    #[instrument(skip(self))]
    pub async fn filter_by_rating_bucket(&self, bucket: u32) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::filter_by_rating_bucket(products, bucket))
            .await
    }

    /// Narrows the store's list to an exact category match.
    #[instrument(skip(self))]
    pub async fn filter_by_category(&self, category: &str) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::filter_by_category(products, category))
            .await
    }

    /// Narrows the store's list to case-insensitive title/category matches.
    #[instrument(skip(self))]
    pub async fn search_by_text(&self, term: &str) -> Result<(), StoreError> {
        let products = self.store.products().await?;
        self.store
            .set_products(transform::search_by_text(products, term))
            .await
    }
}
