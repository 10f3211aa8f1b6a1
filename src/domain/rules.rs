// 購入ルールエンジン
// 固定された順序でビジネスルールを評価し、最初の違反で停止する

use crate::domain::error::ValidationError;
use crate::domain::model::{AccountId, RequestEntry, TicketCounts, TicketTypeRequest};

use std::fmt;

/// 1回の購入で購入できるチケットの最大枚数
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// 購入ルール
/// 評価順は `PurchaseRule::ORDER` で固定されている
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRule {
    /// アカウントIDは正の整数
    AccountId,
    /// リクエストは空でなく、すべてチケット購入リクエスト
    RequestList,
    /// 合計枚数は上限以下
    MaxTicketCount,
    /// 子供・幼児がいる場合は大人が必要
    AdultRequired,
    /// 大人の枚数は幼児の枚数以上
    InfantAdultRatio,
}

impl PurchaseRule {
    /// 評価順
    pub const ORDER: [PurchaseRule; 5] = [
        PurchaseRule::AccountId,
        PurchaseRule::RequestList,
        PurchaseRule::MaxTicketCount,
        PurchaseRule::AdultRequired,
        PurchaseRule::InfantAdultRatio,
    ];

    /// 集計結果に対して評価するルール
    const COUNT_RULES: [PurchaseRule; 3] = [
        PurchaseRule::MaxTicketCount,
        PurchaseRule::AdultRequired,
        PurchaseRule::InfantAdultRatio,
    ];

    /// ルール違反時のエラー
    pub fn violation(&self) -> ValidationError {
        match self {
            PurchaseRule::AccountId => ValidationError::InvalidAccountId,
            PurchaseRule::RequestList => ValidationError::EmptyOrMalformedRequestList,
            PurchaseRule::MaxTicketCount => ValidationError::MaxTicketsExceeded,
            PurchaseRule::AdultRequired => ValidationError::AdultRequiredForChildOrInfant,
            PurchaseRule::InfantAdultRatio => ValidationError::AdultCountBelowInfantCount,
        }
    }

    /// 集計結果に対するルールを評価する
    fn check_counts(&self, counts: &TicketCounts) -> Result<(), ValidationError> {
        let satisfied = match self {
            PurchaseRule::MaxTicketCount => counts.total() <= MAX_TICKETS_PER_PURCHASE,
            PurchaseRule::AdultRequired => {
                (counts.child() == 0 && counts.infant() == 0) || counts.adult() > 0
            }
            PurchaseRule::InfantAdultRatio => counts.adult() >= counts.infant(),
            PurchaseRule::AccountId | PurchaseRule::RequestList => true,
        };

        if satisfied {
            Ok(())
        } else {
            Err(self.violation())
        }
    }
}

impl fmt::Display for PurchaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule_str = match self {
            PurchaseRule::AccountId => "AccountId",
            PurchaseRule::RequestList => "RequestList",
            PurchaseRule::MaxTicketCount => "MaxTicketCount",
            PurchaseRule::AdultRequired => "AdultRequired",
            PurchaseRule::InfantAdultRatio => "InfantAdultRatio",
        };
        write!(f, "{}", rule_str)
    }
}

/// すべてのルールを通過した購入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    counts: TicketCounts,
}

impl ValidatedPurchase {
    /// アカウントIDを取得
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// 種別ごとの合計枚数を取得
    pub fn counts(&self) -> TicketCounts {
        self.counts
    }
}

/// ルールエンジン
/// 状態を持たず、呼び出しごとに独立して評価する
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// すべてのルールを順番に評価する
    ///
    /// # Arguments
    /// * `account_id` - 検証前のアカウントID
    /// * `entries` - 検証前のリクエスト要素
    ///
    /// # Returns
    /// * `Ok(ValidatedPurchase)` - すべてのルールを通過
    /// * `Err(ValidationError)` - 最初に違反したルールのエラー
    pub fn validate(
        &self,
        account_id: i128,
        entries: &[RequestEntry],
    ) -> Result<ValidatedPurchase, ValidationError> {
        let account_id = self.validate_account_id(account_id)?;
        let requests = self.validate_request_list(entries)?;

        let counts = TicketCounts::aggregate(&requests);
        self.validate_counts(&counts)?;

        Ok(ValidatedPurchase { account_id, counts })
    }

    /// アカウントIDを検証する
    pub fn validate_account_id(&self, account_id: i128) -> Result<AccountId, ValidationError> {
        AccountId::new(account_id).map_err(|_| PurchaseRule::AccountId.violation())
    }

    /// リクエスト一覧を検証する
    /// 空の一覧、またはチケット購入リクエスト以外の要素を含む一覧は無効
    pub fn validate_request_list(
        &self,
        entries: &[RequestEntry],
    ) -> Result<Vec<TicketTypeRequest>, ValidationError> {
        if entries.is_empty() {
            return Err(PurchaseRule::RequestList.violation());
        }

        entries
            .iter()
            .map(|entry| {
                entry
                    .as_ticket()
                    .copied()
                    .ok_or_else(|| PurchaseRule::RequestList.violation())
            })
            .collect()
    }

    /// 集計結果に対するルール（上限・大人必須・幼児比率）を順番に評価する
    pub fn validate_counts(&self, counts: &TicketCounts) -> Result<(), ValidationError> {
        PurchaseRule::COUNT_RULES
            .iter()
            .try_for_each(|rule| rule.check_counts(counts))
    }

    /// エラーに対応するルールを取得する（ログ出力用）
    pub fn rule_for(&self, error: ValidationError) -> Option<PurchaseRule> {
        PurchaseRule::ORDER
            .into_iter()
            .find(|rule| rule.violation() == error)
    }
}
