//! App Router

use salvo::Router;

use crate::{carts, merchants, recommendations, users};

/// Every documented API route. Middleware, health, metrics and docs are
/// attached in `main`.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("merchants")
                .get(merchants::index::handler)
                .post(merchants::create::handler)
                .push(
                    Router::with_path("{merchant}")
                        .push(Router::with_path("categories").get(merchants::categories::handler))
                        .push(
                            Router::with_path("modifier-groups")
                                .get(merchants::modifier_groups::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("carts").post(carts::create::handler).push(
                Router::with_path("{cart}")
                    .get(carts::get::handler)
                    .push(
                        Router::with_path("items")
                            .post(carts::add_item::handler)
                            .delete(carts::clear::handler),
                    )
                    .push(Router::with_path("totals").post(carts::totals::handler)),
            ),
        )
        .push(
            Router::with_path("cart-items/{item}")
                .put(carts::update_item::handler)
                .delete(carts::remove_item::handler)
                .push(Router::with_path("modifiers").post(carts::add_modifier::handler)),
        )
        .push(Router::with_path("sessions/{session}/cart").get(carts::session::handler))
        .push(Router::with_path("customers/{customer}/carts").get(carts::customer::handler))
        .push(
            Router::with_path("users").post(users::create::handler).push(
                Router::with_path("{user}")
                    .get(users::get::handler)
                    .push(Router::with_path("preferences").put(users::preferences::handler))
                    .push(
                        Router::with_path("recommendations")
                            .get(recommendations::index::handler)
                            .post(recommendations::create::handler),
                    ),
            ),
        )
}
