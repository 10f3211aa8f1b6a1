use crate::domain::model::AccountId;
use crate::domain::port::{Logger, SeatReservationService, TicketPaymentService};
use std::collections::HashMap;
use std::sync::Arc;

/// コンソール支払いサービス
/// 外部の決済サービスの代わりに、請求内容をログに出力する
pub struct ConsoleTicketPaymentService {
    logger: Arc<dyn Logger>,
}

impl ConsoleTicketPaymentService {
    /// 新しいコンソール支払いサービスを作成
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl TicketPaymentService for ConsoleTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        let mut context = HashMap::new();
        context.insert("account_id".to_string(), account_id.to_string());
        context.insert("amount".to_string(), total_amount_to_pay.to_string());
        self.logger
            .info("TicketPaymentService", "Payment made", None, Some(context));
    }
}

/// コンソール座席予約サービス
/// 外部の座席予約サービスの代わりに、予約内容をログに出力する
pub struct ConsoleSeatReservationService {
    logger: Arc<dyn Logger>,
}

impl ConsoleSeatReservationService {
    /// 新しいコンソール座席予約サービスを作成
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl SeatReservationService for ConsoleSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        let mut context = HashMap::new();
        context.insert("account_id".to_string(), account_id.to_string());
        context.insert("seats".to_string(), total_seats_to_allocate.to_string());
        self.logger
            .info("SeatReservationService", "Seats reserved", None, Some(context));
    }
}
