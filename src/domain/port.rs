// 出力ポート
// ドメイン層が外部に依存する機能をトレイトとして定義
// アダプター層でこれらのトレイトを実装する

use crate::domain::model::AccountId;
use std::collections::HashMap;
use uuid::Uuid;

/// ログレベル
/// 宣言順に重要度が高くなる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// 文字列からLogLevelを作成（大文字小文字を区別しない）
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" | "WARNING" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// ロガートレイト
/// ログ出力を抽象化するポート
pub trait Logger: Send + Sync {
    /// デバッグレベルのログを出力
    fn debug(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 情報レベルのログを出力
    fn info(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// 警告レベルのログを出力
    fn warn(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );

    /// エラーレベルのログを出力
    fn error(
        &self,
        component: &str,
        message: &str,
        correlation_id: Option<Uuid>,
        context: Option<HashMap<String, String>>,
    );
}

/// 支払いサービストレイト
/// 外部の決済サービスを抽象化する
/// 呼び出しは同期的で、常に成功することが前提
pub trait TicketPaymentService: Send + Sync {
    /// アカウントに支払金額を請求する
    ///
    /// # Arguments
    /// * `account_id` - 請求先のアカウント
    /// * `total_amount_to_pay` - 支払金額
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64);
}

/// 座席予約サービストレイト
/// 外部の座席予約サービスを抽象化する
/// 呼び出しは同期的で、常に成功することが前提
pub trait SeatReservationService: Send + Sync {
    /// アカウントのために座席を確保する
    ///
    /// # Arguments
    /// * `account_id` - 予約するアカウント
    /// * `total_seats_to_allocate` - 確保する座席数
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32);
}
