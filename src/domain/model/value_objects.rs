use crate::domain::error::ValidationError;
use serde::{Deserialize, Serialize};

use std::fmt;

/// アカウントの識別子
/// 正の整数のみを保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(u64);

impl AccountId {
    /// 整数からAccountIdを作成
    /// 1未満の値と、u64に収まらない値は無効
    pub fn new(value: i128) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::InvalidAccountId);
        }
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::InvalidAccountId)
    }

    /// 内部の値を取得
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// チケット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// 大人
    Adult,
    /// 子供
    Child,
    /// 幼児（大人の膝の上に座るため座席なし）
    Infant,
}

impl TicketType {
    /// すべてのチケット種別
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// 文字列からTicketTypeを作成
    pub fn from_string(s: &str) -> Result<Self, ValidationError> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(ValidationError::InvalidTicketType),
        }
    }

    /// 座席を占有するかどうか
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str = match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        };
        write!(f, "{}", type_str)
    }
}

/// チケット購入リクエストを表す値オブジェクト
/// 作成後は変更できない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    /// 新しいチケット購入リクエストを作成
    /// 枚数は1以上である必要がある
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Result<Self, ValidationError> {
        if no_of_tickets == 0 {
            return Err(ValidationError::InvalidTicketCount);
        }
        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    /// 外部入力（種別文字列と整数の枚数）から作成
    /// u32を超える枚数はu32::MAXに飽和させる（上限ルールで必ず拒否される）
    pub fn from_raw(ticket_type: &str, no_of_tickets: i128) -> Result<Self, ValidationError> {
        let ticket_type = TicketType::from_string(ticket_type)?;
        if no_of_tickets < 1 {
            return Err(ValidationError::InvalidTicketCount);
        }
        Self::new(ticket_type, u32::try_from(no_of_tickets).unwrap_or(u32::MAX))
    }

    /// チケット種別を取得
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// 枚数を取得
    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// 購入処理に渡される未検証のリクエスト要素
/// 型付きでない入力を受け取る呼び出し元は、チケット購入リクエストとして
/// 解釈できなかった要素を `Malformed` として渡す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEntry {
    /// 正しく作成されたチケット購入リクエスト
    Ticket(TicketTypeRequest),
    /// チケット購入リクエストではない要素（受け取った値の説明）
    Malformed(String),
}

impl RequestEntry {
    /// チケット購入リクエストであれば取得
    pub fn as_ticket(&self) -> Option<&TicketTypeRequest> {
        match self {
            RequestEntry::Ticket(request) => Some(request),
            RequestEntry::Malformed(_) => None,
        }
    }
}

impl From<TicketTypeRequest> for RequestEntry {
    fn from(request: TicketTypeRequest) -> Self {
        RequestEntry::Ticket(request)
    }
}

/// 購入の合計（支払金額と座席数）
/// 検証を通過した購入ごとに一度だけ計算される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    total_amount: u64,
    total_seats: u32,
}

impl PurchaseTotals {
    pub fn new(total_amount: u64, total_seats: u32) -> Self {
        Self {
            total_amount,
            total_seats,
        }
    }

    /// 支払金額を取得
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    /// 座席数を取得
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }
}
