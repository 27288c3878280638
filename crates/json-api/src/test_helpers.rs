//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use bitewise_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{
                CartItemModifierRecord, CartItemModifierUuid, CartItemRecord, CartItemUuid,
                CartRecord, CartStatus, CartUuid,
            },
        },
        catalog::MockCatalogService,
        merchants::{MockMerchantsService, records::MerchantUuid},
        recommendations::MockRecommendationsService,
        users::MockUsersService,
    },
};

use crate::state::State;

/// An app context whose services reject every call. Tests swap in the one
/// mock they set expectations on.
pub(crate) fn strict_app_context() -> AppContext {
    AppContext {
        carts: Arc::new(MockCartsService::new()),
        catalog: Arc::new(MockCatalogService::new()),
        merchants: Arc::new(MockMerchantsService::new()),
        users: Arc::new(MockUsersService::new()),
        recommendations: Arc::new(MockRecommendationsService::new()),
    }
}

pub(crate) fn app_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    app_service(
        AppContext {
            carts: Arc::new(carts),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    app_service(
        AppContext {
            catalog: Arc::new(catalog),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn merchants_service(merchants: MockMerchantsService, route: Router) -> Service {
    app_service(
        AppContext {
            merchants: Arc::new(merchants),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    app_service(
        AppContext {
            users: Arc::new(users),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn recommendations_service(
    recommendations: MockRecommendationsService,
    route: Router,
) -> Service {
    app_service(
        AppContext {
            recommendations: Arc::new(recommendations),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn make_cart(uuid: CartUuid) -> CartRecord {
    CartRecord {
        uuid,
        merchant_uuid: MerchantUuid::new(),
        session_id: Some("session-1".to_string()),
        customer_uuid: None,
        status: CartStatus::Active,
        subtotal: 0,
        total: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(
    uuid: CartItemUuid,
    cart_uuid: CartUuid,
    price: u64,
    quantity: u32,
) -> CartItemRecord {
    CartItemRecord {
        uuid,
        cart_uuid,
        clover_item_id: "ITEM1".to_string(),
        name: "Margherita".to_string(),
        price,
        quantity,
        line_total: price * u64::from(quantity),
        notes: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_modifier(cart_item_uuid: CartItemUuid, price: u64) -> CartItemModifierRecord {
    CartItemModifierRecord {
        uuid: CartItemModifierUuid::new(),
        cart_item_uuid,
        clover_modifier_id: "MOD1".to_string(),
        clover_modifier_group_id: "GROUP1".to_string(),
        name: "Extra cheese".to_string(),
        price,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
