//! # Cart Client
//!
//! Provides a high-level API for the cart store. It wraps a `StoreClient<CartState>` and turns
//! each operation into a [`CartAction`] dispatch with a typed result.
use crate::cart_store::{parse_quantity_input, CartAction, CartActionResult, CartError, CartState};
use crate::model::{CartLine, FoodItem, ItemId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use store_framework::{FrameworkError, StoreClient, StoreHandle};
use tracing::{debug, instrument, warn};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StoreClient<CartState>) -> Self {
        Self { inner }
    }

    async fn dispatch(&self, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StoreError(inner) => match inner.downcast::<CartError>() {
                Ok(err) => *err,
                Err(other) => CartError::StoreCommunicationError(other.to_string()),
            },
            other => CartError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Adds one unit of `item`. Returns the item's quantity afterwards.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, item: FoodItem) -> Result<u32, CartError> {
        debug!("Sending request");
        match self.dispatch(CartAction::AddItem(item)).await? {
            CartActionResult::ItemAdded { quantity } => Ok(quantity),
            other => Err(CartError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Removes the item's line. Returns whether there was one.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ItemId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.dispatch(CartAction::RemoveItem(id)).await? {
            CartActionResult::ItemRemoved { existed } => Ok(existed),
            other => Err(CartError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Sets the item's quantity, removing the line when `quantity <= 0`.
    ///
    /// Returns the quantity now on the line, or `None` if the item is not in the cart.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: ItemId, quantity: i64) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self.dispatch(CartAction::SetQuantity { id, quantity }).await? {
            CartActionResult::QuantitySet(quantity) => Ok(quantity),
            other => Err(CartError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Empties the cart. Returns how many lines were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        match self.dispatch(CartAction::Clear).await? {
            CartActionResult::Cleared { removed } => Ok(removed),
            other => Err(CartError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Applies a quantity typed into a text field.
    ///
    /// Valid input sets the quantity. Invalid input changes nothing. Either way the value the
    /// field should show afterwards is returned, which is `None` once the line is gone.
    #[instrument(skip(self))]
    pub async fn apply_quantity_input(
        &self,
        id: ItemId,
        raw: &str,
    ) -> Result<Option<u32>, CartError> {
        match parse_quantity_input(raw) {
            Ok(quantity) => self.set_quantity(id, i64::from(quantity)).await,
            Err(e) => {
                warn!(error = %e, "Ignoring quantity input");
                Ok(self.snapshot().await?.quantity_of(&id))
            }
        }
    }

    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        Ok(self.snapshot().await?.lines().to_vec())
    }

    pub async fn item_count(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.item_count())
    }

    pub async fn total(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total())
    }

    pub async fn is_empty(&self) -> Result<bool, CartError> {
        Ok(self.snapshot().await?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use store_framework::mock::{create_mock_client, expect_dispatch, MockStore};
    use store_framework::StoreState;

    fn burger() -> FoodItem {
        Catalog::standard()
            .find_item(&"food-1".into())
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_item_returns_quantity() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move { cart_client.add_item(burger()).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        match action {
            CartAction::AddItem(item) => assert_eq!(item.id, ItemId::from("food-1")),
            other => panic!("Expected AddItem, got {:?}", other),
        }
        responder
            .send(Ok(CartActionResult::ItemAdded { quantity: 3 }))
            .unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(3));
    }

    #[tokio::test]
    async fn test_store_error_is_downcast() {
        let mut mock = MockStore::<CartState>::new();
        mock.expect_dispatch()
            .return_err(FrameworkError::StoreError(Box::new(
                CartError::InvalidQuantity("too many".to_string()),
            )));

        let cart_client = CartClient::new(mock.client());
        let result = cart_client.set_quantity("food-1".into(), i64::MAX).await;

        assert_eq!(
            result,
            Err(CartError::InvalidQuantity("too many".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_store_maps_to_communication_error() {
        let mut mock = MockStore::<CartState>::new();
        mock.expect_snapshot().return_err(FrameworkError::ActorClosed);

        let cart_client = CartClient::new(mock.client());

        assert!(matches!(
            cart_client.item_count().await,
            Err(CartError::StoreCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_valid_quantity_input_sets_quantity() {
        let mut mock = MockStore::<CartState>::new();
        mock.expect_dispatch()
            .return_ok(CartActionResult::QuantitySet(Some(4)));

        let cart_client = CartClient::new(mock.client());
        let shown = cart_client
            .apply_quantity_input("food-1".into(), " 4 ")
            .await
            .unwrap();

        assert_eq!(shown, Some(4));
        match mock.take_dispatched().as_slice() {
            [CartAction::SetQuantity { id, quantity }] => {
                assert_eq!(id, &ItemId::from("food-1"));
                assert_eq!(*quantity, 4);
            }
            other => panic!("Expected one SetQuantity, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_quantity_input_reverts() {
        let mut cart = CartState::default();
        cart.reduce(CartAction::AddItem(burger())).unwrap();
        cart.reduce(CartAction::AddItem(burger())).unwrap();

        let mut mock = MockStore::<CartState>::new();
        mock.expect_snapshot().return_ok(cart);

        let cart_client = CartClient::new(mock.client());
        let shown = cart_client
            .apply_quantity_input("food-1".into(), "two")
            .await
            .unwrap();

        assert_eq!(shown, Some(2));
        assert!(mock.take_dispatched().is_empty());
        mock.verify();
    }
}
