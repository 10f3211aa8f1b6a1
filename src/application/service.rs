use crate::domain::error::ValidationError;
use crate::domain::model::{PurchaseTotals, RequestEntry, TicketTypeRequest};
use crate::domain::port::{Logger, SeatReservationService, TicketPaymentService};
use crate::domain::rules::RuleEngine;
use crate::domain::service::{PriceTable, PricingCalculator, SeatCalculator};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

const COMPONENT: &str = "TicketPurchaseService";

/// チケット購入アプリケーションサービス
/// 検証、金額・座席数の計算、外部サービスの呼び出しを順番に実行する
pub struct TicketPurchaseService<PS, RS>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    payment_service: PS,
    reservation_service: RS,
    rule_engine: RuleEngine,
    pricing_calculator: PricingCalculator,
    seat_calculator: SeatCalculator,
    logger: Arc<dyn Logger>,
}

impl<PS, RS> TicketPurchaseService<PS, RS>
where
    PS: TicketPaymentService,
    RS: SeatReservationService,
{
    /// 新しいアプリケーションサービスを作成
    ///
    /// # Arguments
    /// * `payment_service` - 支払いサービス
    /// * `reservation_service` - 座席予約サービス
    /// * `price_table` - 価格表
    /// * `logger` - ロガー
    pub fn new(
        payment_service: PS,
        reservation_service: RS,
        price_table: PriceTable,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            payment_service,
            reservation_service,
            rule_engine: RuleEngine::new(),
            pricing_calculator: PricingCalculator::new(price_table),
            seat_calculator: SeatCalculator::new(),
            logger,
        }
    }

    /// 使用中の価格表
    pub fn price_table(&self) -> PriceTable {
        self.pricing_calculator.price_table()
    }

    /// チケットを購入する
    ///
    /// # Arguments
    /// * `account_id` - アカウントID
    /// * `requests` - チケット購入リクエスト
    ///
    /// # Returns
    /// * `Ok(PurchaseTotals)` - 購入成功（請求金額と確保した座席数）
    /// * `Err(ValidationError)` - 最初に違反したルールのエラー
    pub fn purchase(
        &self,
        account_id: i128,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseTotals, ValidationError> {
        let entries: Vec<RequestEntry> = requests.iter().copied().map(RequestEntry::from).collect();
        self.purchase_tickets(account_id, &entries)
    }

    /// 未検証のリクエスト要素からチケットを購入する
    /// いずれかのルールに違反した場合、外部サービスは呼び出されない
    ///
    /// # Arguments
    /// * `account_id` - 検証前のアカウントID
    /// * `entries` - 検証前のリクエスト要素
    ///
    /// # Returns
    /// * `Ok(PurchaseTotals)` - 購入成功（請求金額と確保した座席数）
    /// * `Err(ValidationError)` - 最初に違反したルールのエラー
    pub fn purchase_tickets(
        &self,
        account_id: i128,
        entries: &[RequestEntry],
    ) -> Result<PurchaseTotals, ValidationError> {
        let start_time = Instant::now();
        let correlation_id = Uuid::new_v4();

        let mut context = HashMap::new();
        context.insert("account_id".to_string(), account_id.to_string());
        context.insert("request_count".to_string(), entries.len().to_string());
        self.logger.info(
            COMPONENT,
            "Ticket purchase started",
            Some(correlation_id),
            Some(context),
        );

        match self.execute(account_id, entries) {
            Ok(totals) => {
                let mut context = HashMap::new();
                context.insert("account_id".to_string(), account_id.to_string());
                context.insert("total_amount".to_string(), totals.total_amount().to_string());
                context.insert("total_seats".to_string(), totals.total_seats().to_string());
                context.insert(
                    "execution_time_ms".to_string(),
                    start_time.elapsed().as_millis().to_string(),
                );
                self.logger.info(
                    COMPONENT,
                    "Ticket purchase completed",
                    Some(correlation_id),
                    Some(context),
                );
                Ok(totals)
            }
            Err(err) => {
                let mut context = HashMap::new();
                context.insert("account_id".to_string(), account_id.to_string());
                context.insert("code".to_string(), err.code().to_string());
                if let Some(rule) = self.rule_engine.rule_for(err) {
                    context.insert("rule".to_string(), rule.to_string());
                }
                self.logger.warn(
                    COMPONENT,
                    &format!("Ticket purchase rejected: {}", err),
                    Some(correlation_id),
                    Some(context),
                );
                Err(err)
            }
        }
    }

    fn execute(
        &self,
        account_id: i128,
        entries: &[RequestEntry],
    ) -> Result<PurchaseTotals, ValidationError> {
        let purchase = self.rule_engine.validate(account_id, entries)?;
        let counts = purchase.counts();

        let total_amount = self.pricing_calculator.compute_cost(&counts)?;
        let total_seats = self.seat_calculator.compute_seats(&counts)?;

        // 請求後に予約が失敗した場合の補償は行わない（外部サービスは失敗しない前提）
        self.payment_service
            .make_payment(purchase.account_id(), total_amount);
        self.reservation_service
            .reserve_seat(purchase.account_id(), total_seats);

        Ok(PurchaseTotals::new(total_amount, total_seats))
    }
}
