use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// All application routes with request logging and CORS applied
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Category
        .route(
            "/api/categorias",
            get(handlers::a001_category::list_all).post(handlers::a001_category::create),
        )
        .route(
            "/api/categorias/:id",
            get(handlers::a001_category::get_by_id)
                .put(handlers::a001_category::update)
                .delete(handlers::a001_category::delete),
        )
        // A002 Supplier
        .route(
            "/api/proveedores",
            get(handlers::a002_supplier::list_all).post(handlers::a002_supplier::create),
        )
        .route(
            "/api/proveedores/:id",
            get(handlers::a002_supplier::get_by_id)
                .put(handlers::a002_supplier::update)
                .delete(handlers::a002_supplier::delete),
        )
        // A003 Product
        .route(
            "/api/productos",
            get(handlers::a003_product::list_all).post(handlers::a003_product::create),
        )
        .route(
            "/api/productos/bajo-stock",
            get(handlers::a003_product::list_low_stock),
        )
        .route(
            "/api/productos/:id",
            get(handlers::a003_product::get_by_id)
                .put(handlers::a003_product::update)
                .delete(handlers::a003_product::delete),
        )
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
