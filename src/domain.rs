// ドメイン層
// チケット購入のビジネスルールと値オブジェクト

pub mod error;
pub mod model;
pub mod port;
pub mod rules;
pub mod service;
