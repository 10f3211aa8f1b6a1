use ticket_purchase_service::adapter::driven::{
    ConsoleLogger, ConsoleSeatReservationService, ConsoleTicketPaymentService,
};
use ticket_purchase_service::adapter::driver::rest_api::{create_router, AppState};
use ticket_purchase_service::adapter::ServiceConfig;
use ticket_purchase_service::application::TicketPurchaseService;
use ticket_purchase_service::domain::port::Logger;

use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .envファイルから環境変数を読み込む
    dotenvy::dotenv().ok();

    // サービス設定を読み込む
    let config = ServiceConfig::from_env()?;

    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(config.log_level));

    // 外部サービスの代替実装（コンソール出力）
    let payment_service = ConsoleTicketPaymentService::new(logger.clone());
    let reservation_service = ConsoleSeatReservationService::new(logger.clone());

    // アプリケーションサービスを作成
    let purchase_service = TicketPurchaseService::new(
        payment_service,
        reservation_service,
        config.price_table(),
        logger.clone(),
    );

    let app_state = AppState {
        purchase_service: Arc::new(purchase_service),
    };

    // REST APIルーターを作成
    let app = create_router()
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // サーバーを起動
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    logger.info(
        "Server",
        &format!("REST API server started on {}", config.bind_address()),
        None,
        None,
    );
    println!("API仕様:");
    println!("  GET  /health    - ヘルスチェック");
    println!("  GET  /prices    - 価格表取得");
    println!("  POST /purchases - チケット購入");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}
