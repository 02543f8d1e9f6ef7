use super::response::ApiError;
use super::AppState;
use crate::core::Resource;
use crate::domain::model::{
    Aging, GoodsReceipt, Invoice, LoginRequest, Memo, Profile, PurchaseOrder, Rfq,
};
use crate::utils::error::AdapterError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn healthz() -> Json<Value> {
    Json(json!({"ok": true}))
}

pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(
            Resource::Login,
            AdapterError::bad_request(format!(
                "Lifnr and password are required ({})",
                rejection.body_text()
            )),
        )
    })?;

    let message = state
        .service
        .login(request)
        .await
        .map_err(|e| ApiError::new(Resource::Login, e))?;

    Ok(Json(json!({ "message": message })))
}

pub async fn profile(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Profile>> {
    state
        .service
        .profile(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::Profile, e))
}

pub async fn goods_receipts(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<GoodsReceipt>>> {
    state
        .service
        .goods_receipts(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::GoodsReceipts, e))
}

pub async fn invoices(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<Invoice>>> {
    state
        .service
        .invoices(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::Invoices, e))
}

/// Streams the invoice PDF back as an attachment.
pub async fn invoice_pdf(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> ApiResult<Response> {
    let document = state
        .service
        .invoice_pdf(&invoice_id)
        .await
        .map_err(|e| ApiError::new(Resource::InvoicePdf, e))?;

    let disposition =
        HeaderValue::from_str(&format!("attachment; filename={}", document.file_name)).map_err(
            |e| {
                ApiError::new(
                    Resource::InvoicePdf,
                    AdapterError::bad_request(format!("Invalid invoice ID: {}", e)),
                )
            },
        )?;
    let length = HeaderValue::from(document.bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, length),
        ],
        document.bytes,
    )
        .into_response())
}

pub async fn memos(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<Memo>>> {
    state
        .service
        .memos(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::Memos, e))
}

pub async fn purchase_orders(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<PurchaseOrder>>> {
    state
        .service
        .purchase_orders(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::PurchaseOrders, e))
}

pub async fn rfqs(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<Rfq>>> {
    state
        .service
        .rfqs(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::Rfqs, e))
}

pub async fn aging(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> ApiResult<Json<Vec<Aging>>> {
    state
        .service
        .aging(&vendor_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Resource::Aging, e))
}
