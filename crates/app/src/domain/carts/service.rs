//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCart, NewCartItem, NewCartItemModifier},
            errors::CartsServiceError,
            records::{
                CartItemModifierRecord, CartItemRecord, CartItemUuid, CartRecord, CartSummary,
                CartUuid, QuantityUpdate,
            },
            repositories::{
                PgCartItemModifiersRepository, PgCartItemsRepository, PgCartsRepository,
            },
            totals::{self, CartTotals},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    modifiers_repository: PgCartItemModifiersRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            modifiers_repository: PgCartItemModifiersRepository::new(),
        }
    }

    /// Recompute totals from the stored rows and persist them. Callers must
    /// already hold the cart lock.
    async fn recalculate(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let items = self.items_repository.list_cart_items(tx, cart).await?;

        let modifiers = self
            .modifiers_repository
            .list_cart_modifiers(tx, cart)
            .await?;

        let totals = CartTotals::calculate(&items, &modifiers)?;

        debug!(
            cart_uuid = %cart,
            subtotal = totals.subtotal,
            total = totals.total,
            "recalculated cart totals"
        );

        Ok(self
            .carts_repository
            .update_cart_totals(tx, cart, totals)
            .await?)
    }

    async fn summarize(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartRecord,
    ) -> Result<CartSummary, CartsServiceError> {
        let items = self.items_repository.list_cart_items(tx, cart.uuid).await?;

        let modifiers = self
            .modifiers_repository
            .list_cart_modifiers(tx, cart.uuid)
            .await?;

        Ok(CartSummary::assemble(cart, items, modifiers))
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    #[tracing::instrument(
        name = "carts.service.create_cart",
        skip(self, cart),
        fields(cart_uuid = %cart.uuid, merchant_uuid = %cart.merchant_uuid),
        err
    )]
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.carts_repository.create_cart(&mut tx, cart).await?;

        tx.commit().await?;

        info!("cart created");

        Ok(created)
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn get_active_cart_for_session(
        &self,
        session_id: &str,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .carts_repository
            .get_active_cart_for_session(&mut tx, session_id)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(cart_uuid = %cart, clover_item_id = %item.clover_item_id, quantity = item.quantity),
        err
    )]
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        if item.quantity == 0 || i32::try_from(item.quantity).is_err() {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let line_total = totals::line_total(item.price, item.quantity)?;

        let mut tx = self.db.begin_transaction().await?;

        self.carts_repository.lock_cart(&mut tx, cart).await?;

        let item = self
            .items_repository
            .upsert_cart_item(&mut tx, cart, item, line_total)
            .await?;

        self.recalculate(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(item)
    }

    #[tracing::instrument(
        name = "carts.service.update_item_quantity",
        skip(self),
        fields(cart_item_uuid = %item),
        err
    )]
    async fn update_item_quantity(
        &self,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError> {
        let quantity = if quantity <= 0 {
            None
        } else {
            let quantity = u32::try_from(quantity)
                .ok()
                .filter(|quantity| i32::try_from(*quantity).is_ok())
                .ok_or(CartsServiceError::InvalidQuantity)?;

            Some(quantity)
        };

        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .carts_repository
            .lock_cart_for_item(&mut tx, item)
            .await?;

        let update = match quantity {
            None => {
                self.items_repository.delete_cart_item(&mut tx, item).await?;

                QuantityUpdate::Removed
            }
            Some(quantity) => QuantityUpdate::Updated(
                self.items_repository
                    .update_cart_item_quantity(&mut tx, item, quantity)
                    .await?,
            ),
        };

        self.recalculate(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(update)
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self),
        fields(cart_item_uuid = %item),
        err
    )]
    async fn remove_item(&self, item: CartItemUuid) -> Result<bool, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = match self
            .carts_repository
            .lock_cart_for_item(&mut tx, item)
            .await
        {
            Ok(cart) => cart,
            Err(sqlx::Error::RowNotFound) => return Ok(false),
            Err(error) => return Err(error.into()),
        };

        let rows_affected = self.items_repository.delete_cart_item(&mut tx, item).await?;

        if rows_affected == 0 {
            return Ok(false);
        }

        self.recalculate(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(true)
    }

    #[tracing::instrument(
        name = "carts.service.add_modifier",
        skip(self, modifier),
        fields(cart_item_uuid = %item, clover_modifier_id = %modifier.clover_modifier_id),
        err
    )]
    async fn add_modifier(
        &self,
        item: CartItemUuid,
        modifier: NewCartItemModifier,
    ) -> Result<CartItemModifierRecord, CartsServiceError> {
        totals::storable_amount(modifier.price)?;

        let mut tx = self.db.begin_transaction().await?;

        let cart = self
            .carts_repository
            .lock_cart_for_item(&mut tx, item)
            .await?;

        let modifier = self
            .modifiers_repository
            .create_modifier(&mut tx, item, modifier)
            .await?;

        self.recalculate(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(modifier)
    }

    #[tracing::instrument(
        name = "carts.service.clear_cart",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn clear_cart(&self, cart: CartUuid) -> Result<bool, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        match self.carts_repository.lock_cart(&mut tx, cart).await {
            Ok(_) => {}
            Err(sqlx::Error::RowNotFound) => return Ok(false),
            Err(error) => return Err(error.into()),
        }

        let removed = self
            .items_repository
            .delete_cart_items(&mut tx, cart)
            .await?;

        self.recalculate(&mut tx, cart).await?;

        tx.commit().await?;

        info!(removed, "cart cleared");

        Ok(true)
    }

    async fn get_cart_summary(&self, cart: CartUuid) -> Result<CartSummary, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;
        let summary = self.summarize(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(summary)
    }

    async fn list_customer_cart_summaries(
        &self,
        customer: UserUuid,
    ) -> Result<Vec<CartSummary>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let carts = self
            .carts_repository
            .list_customer_carts(&mut tx, customer)
            .await?;

        let mut summaries = Vec::with_capacity(carts.len());

        for cart in carts {
            summaries.push(self.summarize(&mut tx, cart).await?);
        }

        tx.commit().await?;

        Ok(summaries)
    }

    #[tracing::instrument(
        name = "carts.service.recalculate_totals",
        skip(self),
        fields(cart_uuid = %cart),
        err
    )]
    async fn recalculate_totals(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.carts_repository.lock_cart(&mut tx, cart).await?;

        let cart = self.recalculate(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }
}

/// The cart ledger. Every mutation runs in a single transaction that locks
/// the cart row, applies the change and recomputes the stored totals, so
/// readers never see totals that disagree with the items.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates an empty, active cart.
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// The newest active cart for a session.
    async fn get_active_cart_for_session(
        &self,
        session_id: &str,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Adds an item, accumulating quantity onto an existing line for the same
    /// Clover item.
    async fn add_item(
        &self,
        cart: CartUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Sets an item's quantity; zero or less removes the item.
    async fn update_item_quantity(
        &self,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError>;

    /// Removes an item and its modifiers. Returns `false` if there was no
    /// such item.
    async fn remove_item(&self, item: CartItemUuid) -> Result<bool, CartsServiceError>;

    /// Attaches a modifier to an item.
    async fn add_modifier(
        &self,
        item: CartItemUuid,
        modifier: NewCartItemModifier,
    ) -> Result<CartItemModifierRecord, CartsServiceError>;

    /// Removes every item from the cart. Returns `false` if there was no
    /// such cart.
    async fn clear_cart(&self, cart: CartUuid) -> Result<bool, CartsServiceError>;

    /// The cart with all of its items and modifiers.
    async fn get_cart_summary(&self, cart: CartUuid) -> Result<CartSummary, CartsServiceError>;

    /// Summaries of a customer's carts, newest first.
    async fn list_customer_cart_summaries(
        &self,
        customer: UserUuid,
    ) -> Result<Vec<CartSummary>, CartsServiceError>;

    /// Recomputes and stores the cart totals.
    async fn recalculate_totals(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;
}
