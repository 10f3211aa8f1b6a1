use axum::{extract::State, http::StatusCode, response::Json, routing::get, routing::post, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::adapter::driver::request_dto::PurchaseTicketsRequest;
use crate::adapter::driver::response_dto::{PriceTableResponse, PurchaseResponse};
use crate::application::TicketPurchaseService;
use crate::domain::error::ValidationError;
use crate::domain::model::AccountId;
use crate::domain::port::{SeatReservationService, TicketPaymentService};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

// アプリケーションサービスを含む状態
pub struct AppState<PS, RS>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    pub purchase_service: Arc<TicketPurchaseService<PS, RS>>,
}

impl<PS, RS> Clone for AppState<PS, RS>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    fn clone(&self) -> Self {
        Self {
            purchase_service: self.purchase_service.clone(),
        }
    }
}

// REST APIルーターを作成
pub fn create_router<PS, RS>() -> Router<AppState<PS, RS>>
where
    PS: TicketPaymentService + 'static,
    RS: SeatReservationService + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/prices", get(get_prices::<PS, RS>))
        .route("/purchases", post(purchase_tickets::<PS, RS>))
}

// ヘルスチェックエンドポイント
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ticket-purchase-service",
        "version": "0.1.0"
    }))
}

// 価格表取得エンドポイント
async fn get_prices<PS, RS>(State(state): State<AppState<PS, RS>>) -> Json<PriceTableResponse>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    let price_table = state.purchase_service.price_table();
    Json(PriceTableResponse::from_price_table(&price_table))
}

// チケット購入エンドポイント
async fn purchase_tickets<PS, RS>(
    State(state): State<AppState<PS, RS>>,
    Json(request): Json<PurchaseTicketsRequest>,
) -> Result<Json<PurchaseResponse>, (StatusCode, Json<ApiError>)>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    let command = request.into_command().map_err(map_validation_error)?;

    let totals = state
        .purchase_service
        .purchase_tickets(command.account_id, &command.entries)
        .map_err(map_validation_error)?;

    // 購入が成功した時点でアカウントIDは検証済み
    let account_id = AccountId::new(command.account_id).map_err(map_validation_error)?;
    Ok(Json(PurchaseResponse::from_totals(account_id, &totals)))
}

// 検証エラーをHTTPエラーにマッピング
// すべての検証エラーはクライアントの入力に起因する
fn map_validation_error(err: ValidationError) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: err.to_string(),
            code: err.code().to_string(),
        }),
    )
}
