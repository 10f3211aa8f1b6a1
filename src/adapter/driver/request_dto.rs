use crate::domain::error::ValidationError;
use crate::domain::model::{RequestEntry, TicketTypeRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// チケット購入用のリクエストDTO
/// 型の検証はドメインのルールに従って行うため、各フィールドは未検証のJSON値として受け取る
#[derive(Debug, Serialize, Deserialize)]
pub struct PurchaseTicketsRequest {
    #[serde(default)]
    pub account_id: Value,
    #[serde(default)]
    pub ticket_type_requests: Value,
}

/// チケット購入リクエスト1件分のDTO
/// 枚数は整数値かどうかを値で判定するため、未検証のJSON値として受け取る
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketTypeRequestDto {
    pub ticket_type: String,
    pub no_of_tickets: Value,
}

/// リクエストDTOから変換された購入コマンド
#[derive(Debug, PartialEq)]
pub struct PurchaseCommand {
    pub account_id: i128,
    pub entries: Vec<RequestEntry>,
}

impl PurchaseTicketsRequest {
    /// 購入コマンドに変換する
    /// アカウントIDを先に読み取り、その後リクエスト要素を一覧の順に作成する
    /// - 整数でないアカウントIDは `InvalidAccountId`
    /// - チケット購入リクエストの形をしていない要素は `RequestEntry::Malformed`
    /// - 形は正しいが作成できない要素は作成時のエラー
    pub fn into_command(self) -> Result<PurchaseCommand, ValidationError> {
        let account_id =
            whole_number(&self.account_id).ok_or(ValidationError::InvalidAccountId)?;

        let entries = match self.ticket_type_requests {
            Value::Null => Vec::new(),
            Value::Array(values) => values
                .into_iter()
                .map(to_entry)
                .collect::<Result<Vec<_>, _>>()?,
            // 配列でない値は1件の不正な要素として扱う
            other => vec![RequestEntry::Malformed(other.to_string())],
        };

        Ok(PurchaseCommand {
            account_id,
            entries,
        })
    }
}

fn to_entry(value: Value) -> Result<RequestEntry, ValidationError> {
    let description = value.to_string();
    let Ok(dto) = serde_json::from_value::<TicketTypeRequestDto>(value) else {
        return Ok(RequestEntry::Malformed(description));
    };
    let Some(no_of_tickets) = whole_number(&dto.no_of_tickets) else {
        return Ok(RequestEntry::Malformed(description));
    };

    let request = TicketTypeRequest::from_raw(&dto.ticket_type, no_of_tickets)?;
    Ok(RequestEntry::Ticket(request))
}

/// 小数部のない数値を整数として読み取る（2.0 は 2）
/// i128に収まらない値は飽和させる
fn whole_number(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(i128::from(n));
    }
    number
        .as_f64()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .map(|n| n as i128)
}
