// ドメインサービス
// 集計結果から支払金額と座席数を導出する

use crate::domain::error::ValidationError;
use crate::domain::model::{TicketCounts, TicketType};
use serde::{Deserialize, Serialize};

/// 大人チケットの既定価格
pub const DEFAULT_ADULT_PRICE: u32 = 20;
/// 子供チケットの既定価格
pub const DEFAULT_CHILD_PRICE: u32 = 10;

/// チケット価格表
/// 幼児は常に無料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    adult: u32,
    child: u32,
}

impl PriceTable {
    /// 大人と子供の価格を指定して作成
    pub fn new(adult: u32, child: u32) -> Self {
        Self { adult, child }
    }

    /// 指定した種別の単価
    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => 0,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE)
    }
}

/// 料金計算サービス
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingCalculator {
    price_table: PriceTable,
}

impl PricingCalculator {
    /// 新しい料金計算サービスを作成
    ///
    /// # Arguments
    /// * `price_table` - 使用する価格表
    pub fn new(price_table: PriceTable) -> Self {
        Self { price_table }
    }

    /// 使用中の価格表
    pub fn price_table(&self) -> PriceTable {
        self.price_table
    }

    /// 支払金額を計算する（大人 × 大人価格 + 子供 × 子供価格）
    ///
    /// # Returns
    /// * `Ok(u64)` - 支払金額
    /// * `Err(ValidationError::NoPayableTickets)` - 支払金額が0
    pub fn compute_cost(&self, counts: &TicketCounts) -> Result<u64, ValidationError> {
        let total_amount = TicketType::ALL
            .iter()
            .map(|ticket_type| {
                u64::from(counts.count_of(*ticket_type))
                    * u64::from(self.price_table.price_of(*ticket_type))
            })
            .fold(0u64, u64::saturating_add);

        if total_amount == 0 {
            return Err(ValidationError::NoPayableTickets);
        }
        Ok(total_amount)
    }
}

/// 座席数計算サービス
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatCalculator;

impl SeatCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 必要な座席数を計算する（大人 + 子供、幼児は座席なし）
    ///
    /// # Returns
    /// * `Ok(u32)` - 座席数
    /// * `Err(ValidationError::NoSeatsRequired)` - 座席数が0
    pub fn compute_seats(&self, counts: &TicketCounts) -> Result<u32, ValidationError> {
        let total_seats = TicketType::ALL
            .iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .fold(0u32, |seats, ticket_type| {
                seats.saturating_add(counts.count_of(*ticket_type))
            });

        if total_seats == 0 {
            return Err(ValidationError::NoSeatsRequired);
        }
        Ok(total_seats)
    }
}
