// アプリケーション層
// ユースケース（チケット購入）の実行を担当

pub mod service;

pub use service::TicketPurchaseService;
