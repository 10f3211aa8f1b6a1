use crate::domain::model::{AccountId, PurchaseTotals, TicketType};
use crate::domain::service::PriceTable;
use serde::{Deserialize, Serialize};

/// チケット購入結果のレスポンスDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub account_id: u64,
    pub total_amount: u64,
    pub total_seats: u32,
}

/// 価格表のレスポンスDTO
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceTableResponse {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl PurchaseResponse {
    /// ドメインオブジェクトからPurchaseResponseを作成
    pub fn from_totals(account_id: AccountId, totals: &PurchaseTotals) -> Self {
        Self {
            account_id: account_id.value(),
            total_amount: totals.total_amount(),
            total_seats: totals.total_seats(),
        }
    }
}

impl PriceTableResponse {
    /// ドメインオブジェクトからPriceTableResponseを作成
    pub fn from_price_table(price_table: &PriceTable) -> Self {
        Self {
            adult: price_table.price_of(TicketType::Adult),
            child: price_table.price_of(TicketType::Child),
            infant: price_table.price_of(TicketType::Infant),
        }
    }
}
