//! Test Helpers

use crate::{
    clover::AccessToken,
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::{NewCart, NewCartItem, NewCartItemModifier},
            records::{
                CartItemModifierRecord, CartItemModifierUuid, CartItemRecord, CartItemUuid,
                CartRecord, CartUuid,
            },
        },
        merchants::{
            MerchantsService, MerchantsServiceError,
            data::NewMerchant,
            records::{MerchantRecord, MerchantUuid},
        },
        users::{
            UsersService, UsersServiceError,
            data::NewUser,
            records::{UserRecord, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) const DEFAULT_CLOVER_MERCHANT_ID: &str = "TESTMERCHANT1";
pub(crate) const DEFAULT_ACCESS_TOKEN: &str = "test-access-token";

pub(crate) async fn create_merchant(
    ctx: &TestContext,
    clover_merchant_id: &str,
) -> Result<MerchantRecord, MerchantsServiceError> {
    ctx.merchants
        .create_merchant(NewMerchant {
            uuid: MerchantUuid::new(),
            clover_merchant_id: clover_merchant_id.to_string(),
            name: format!("Merchant {clover_merchant_id}"),
            access_token: AccessToken::new(format!("token-{clover_merchant_id}")),
        })
        .await
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    mobile_number: &str,
) -> Result<UserRecord, UsersServiceError> {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            mobile_number: mobile_number.to_string(),
            name: None,
            is_guest: true,
        })
        .await
}

pub(crate) async fn create_cart(
    ctx: &TestContext,
    session_id: Option<&str>,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .create_cart(NewCart {
            uuid: CartUuid::new(),
            merchant_uuid: ctx.merchant_uuid,
            session_id: session_id.map(str::to_string),
            customer_uuid: None,
        })
        .await
}

pub(crate) async fn create_customer_cart(
    ctx: &TestContext,
    customer: UserUuid,
) -> Result<CartRecord, CartsServiceError> {
    ctx.carts
        .create_cart(NewCart {
            uuid: CartUuid::new(),
            merchant_uuid: ctx.merchant_uuid,
            session_id: None,
            customer_uuid: Some(customer),
        })
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    cart: CartUuid,
    clover_item_id: &str,
    price: u64,
    quantity: u32,
) -> Result<CartItemRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            cart,
            NewCartItem {
                uuid: CartItemUuid::new(),
                clover_item_id: clover_item_id.to_string(),
                name: clover_item_id.to_string(),
                price,
                quantity,
                notes: None,
            },
        )
        .await
}

pub(crate) async fn add_modifier(
    ctx: &TestContext,
    item: CartItemUuid,
    name: &str,
    price: u64,
) -> Result<CartItemModifierRecord, CartsServiceError> {
    ctx.carts
        .add_modifier(
            item,
            NewCartItemModifier {
                uuid: CartItemModifierUuid::new(),
                clover_modifier_id: name.to_string(),
                clover_modifier_group_id: "GROUP".to_string(),
                name: name.to_string(),
                price,
            },
        )
        .await
}
