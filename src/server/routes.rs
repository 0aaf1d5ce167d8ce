use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::product::{Product, ProductDraft};
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /products - insert a row, respond with the assigned id
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let id = store
        .insert_product(&draft)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(serde_json::json!({
        "message": "Product created",
        "id": id,
    })))
}

/// GET /products - the full table as a JSON array
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let products = store
        .list_products()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(products))
}

/// GET /products/{id} - a single row, or JSON null when absent
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Product>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let product = store
        .get_product(id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(product))
}

/// PUT /products/{id} - overwrite all mutable fields.
///
/// Responds with the confirmation message whether or not a row matched;
/// a missing id is a zero-affected no-op at the store.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    store
        .update_product(id, &draft)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(serde_json::json!({ "message": "Product updated" })))
}

/// DELETE /products/{id} - remove the row, same no-op policy as update
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    store
        .delete_product(id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))?;

    Ok(Json(serde_json::json!({ "message": "Product deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;
    use tokio::sync::Mutex;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            store: Mutex::new(SqliteStore::open_in_memory().unwrap()),
        })
    }

    fn pen_draft() -> ProductDraft {
        ProductDraft::new("Pen", Some("Blue ink".to_string()), 1.5)
    }

    #[tokio::test]
    async fn test_create_list_get_update_delete_scenario() {
        let state = test_state();

        // Create: first row gets id 1
        let created = create_product(State(state.clone()), Json(pen_draft()))
            .await
            .unwrap();
        assert_eq!(created.0["message"], "Product created");
        assert_eq!(created.0["id"], 1);

        // List: exactly the row we created
        let listed = list_products(State(state.clone())).await.unwrap();
        assert_eq!(listed.0.len(), 1);
        assert_eq!(listed.0[0].name, "Pen");

        // Get: full field fidelity
        let fetched = get_product(State(state.clone()), Path(1)).await.unwrap();
        let product = fetched.0.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.description.as_deref(), Some("Blue ink"));
        assert_eq!(product.price, 1.5);

        // Update: overwrite, then observe the new price
        let updated = update_product(
            State(state.clone()),
            Path(1),
            Json(ProductDraft::new("Pen", Some("Black ink".to_string()), 1.75)),
        )
        .await
        .unwrap();
        assert_eq!(updated.0["message"], "Product updated");

        let fetched = get_product(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(fetched.0.unwrap().price, 1.75);

        // Delete: row gone, subsequent get is null-shaped
        let deleted = delete_product(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(deleted.0["message"], "Product deleted");

        let fetched = get_product(State(state.clone()), Path(1)).await.unwrap();
        assert!(fetched.0.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_id_is_null_not_error() {
        let state = test_state();
        let fetched = get_product(State(state), Path(42)).await.unwrap();
        assert!(fetched.0.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_id_still_confirms() {
        let state = test_state();
        let updated = update_product(State(state), Path(42), Json(pen_draft()))
            .await
            .unwrap();
        assert_eq!(updated.0["message"], "Product updated");
    }

    #[tokio::test]
    async fn test_delete_missing_id_still_confirms() {
        let state = test_state();
        let deleted = delete_product(State(state), Path(42)).await.unwrap();
        assert_eq!(deleted.0["message"], "Product deleted");
    }

    #[tokio::test]
    async fn test_create_without_name_is_500_with_error_body() {
        let state = test_state();
        let draft = ProductDraft {
            name: None,
            description: None,
            price: Some(1.0),
        };

        let (status, body) = create_product(State(state), Json(draft))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.0.error.contains("NOT NULL"));
    }

    #[tokio::test]
    async fn test_list_empty_table_is_empty_array() {
        let state = test_state();
        let listed = list_products(State(state)).await.unwrap();
        assert!(listed.0.is_empty());
    }
}
