use axum::{
    Router,
    middleware::from_extractor_with_state,
    routing::{delete, get, post},
};

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::health::health_routes;

use crate::handlers::{
    bill::{estimate_bill, order_bill, preview, purchase_bill},
    estimate::{
        bulk_delete_estimates, create_estimate, delete_estimate, get_estimate, list_estimates,
        update_estimate,
    },
    order::{create_order, delete_order, get_order, list_orders, update_order},
    party::{create_party, delete_party, get_party, list_parties, update_party},
    product::{create_product, delete_product, get_product, list_products, update_product},
    purchase::{create_purchase, delete_purchase, get_purchase, list_purchases, update_purchase},
    sale::{create_sale, delete_sale, get_sale, list_sales, patch_sale},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Parties
        .route("/parties", get(list_parties).post(create_party))
        .route(
            "/parties/{id}",
            get(get_party).put(update_party).delete(delete_party),
        )
        // Purchases
        .route(
            "/purchases/purchases",
            get(list_purchases).post(create_purchase),
        )
        .route(
            "/purchases/purchases/{id}",
            get(get_purchase).put(update_purchase).delete(delete_purchase),
        )
        .route("/purchases/purchases/{id}/bill", get(purchase_bill))
        // Estimates
        .route("/estimates", get(list_estimates).post(create_estimate))
        .route("/estimates/bulk-delete", delete(bulk_delete_estimates))
        .route(
            "/estimates/{id}",
            get(get_estimate).put(update_estimate).delete(delete_estimate),
        )
        .route("/estimates/{id}/bill", get(estimate_bill))
        // Sales
        .route("/sales", get(list_sales).post(create_sale))
        .route(
            "/sales/{id}",
            get(get_sale).patch(patch_sale).delete(delete_sale),
        )
        // Orders
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/{id}/bill", get(order_bill))
        // Products
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Bills
        .route("/bills/preview", post(preview))
        .route_layer(from_extractor_with_state::<BearerIdentity, AppState>(
            state.clone(),
        ));

    Router::new()
        .merge(health_routes("backoffice"))
        .nest("/api", api)
        .with_state(state)
}
