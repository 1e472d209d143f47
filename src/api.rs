//! HTTP surface for the catalog and related-product selection

use axum::{extract::{Path, Query, State}, http::StatusCode, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{validate_product, Catalog};
use crate::domain::Product;
use crate::related::RelatedProductSelector;
use crate::StorefrontError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub selector: RelatedProductSelector,
}

impl AppState {
    pub fn new(catalog: Catalog, selector: RelatedProductSelector) -> Self {
        Self { catalog: Arc::new(catalog), selector }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v1/products/:id/related", get(related_for_product))
        .route("/api/v1/related", post(related_from_pool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(s): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "solar-storefront",
        "products": s.catalog.len(),
        "timestamp": chrono::Utc::now(),
    }))
}

#[derive(Debug, Deserialize)] pub struct ListParams { pub page: Option<u32>, pub per_page: Option<u32>, pub category: Option<String>, pub brand: Option<String> }
#[derive(Debug, Serialize, Deserialize)] pub struct PaginatedResponse<T> { pub data: Vec<T>, pub total: usize, pub page: u32 }

async fn list_products(State(s): State<AppState>, Query(p): Query<ListParams>) -> Json<PaginatedResponse<Product>> {
    let page = p.page.unwrap_or(1).max(1);
    let per_page = p.per_page.unwrap_or(20).clamp(1, 100);
    let matching: Vec<&Product> = s.catalog.filter(p.category.as_deref(), p.brand.as_deref()).collect();
    let offset = (page - 1).saturating_mul(per_page) as usize;
    let data = matching.iter().skip(offset).take(per_page as usize).map(|&product| product.clone()).collect();
    Json(PaginatedResponse { data, total: matching.len(), page })
}

async fn get_product(State(s): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, (StatusCode, String)> {
    s.catalog.get(&id).cloned().map(Json).ok_or_else(|| not_found(&id))
}

#[derive(Debug, Serialize, Deserialize)] pub struct RelatedResponse { pub product_id: String, pub related: Vec<Product> }

async fn related_for_product(State(s): State<AppState>, Path(id): Path<String>) -> Result<Json<RelatedResponse>, (StatusCode, String)> {
    let product = s.catalog.get(&id).ok_or_else(|| not_found(&id))?;
    let related = select(&s.selector, product, s.catalog.products());
    tracing::debug!(product_id = %id, count = related.len(), "related products selected from catalog");
    Ok(Json(RelatedResponse { product_id: id, related }))
}

#[derive(Debug, Serialize, Deserialize)] pub struct RelatedRequest { pub product: Product, #[serde(default)] pub candidates: Vec<Product> }

async fn related_from_pool(State(s): State<AppState>, Json(r): Json<RelatedRequest>) -> Result<Json<RelatedResponse>, (StatusCode, String)> {
    for product in std::iter::once(&r.product).chain(r.candidates.iter()) {
        validate_product(product).map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    }
    let related = select(&s.selector, &r.product, &r.candidates);
    tracing::debug!(product_id = %r.product.id, pool = r.candidates.len(), count = related.len(), "related products selected from request pool");
    Ok(Json(RelatedResponse { product_id: r.product.id, related }))
}

fn select(selector: &RelatedProductSelector, product: &Product, pool: &[Product]) -> Vec<Product> {
    let mut rng = rand::thread_rng();
    selector.select(product, pool, &mut rng).into_iter().cloned().collect()
}

fn not_found(id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, StorefrontError::ProductNotFound(id.to_string()).to_string())
}
