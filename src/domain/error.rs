/// ドメイン層のエラー型
/// チケット購入のビジネスルール違反を表現する
/// 最初に違反したルールのみが報告される
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// 無効なアカウントID（正の整数でない）
    #[error("Invalid account ID. Account ID must be a positive integer.")]
    InvalidAccountId,
    /// リクエストが空、またはTicketTypeRequest以外の要素を含む
    #[error("Ticket type requests must be a non-empty list of ticket type requests.")]
    EmptyOrMalformedRequestList,
    /// チケット枚数の上限超過
    #[error("Number of tickets cannot exceed 20.")]
    MaxTicketsExceeded,
    /// 子供・幼児のチケットに大人が含まれていない
    #[error("There must be at least one adult for child or infant tickets.")]
    AdultRequiredForChildOrInfant,
    /// 大人の枚数が幼児の枚数より少ない
    #[error("Number of adults must be greater than or equal to the number of infants.")]
    AdultCountBelowInfantCount,
    /// 支払い対象のチケットがない
    #[error("No payable tickets in the purchase.")]
    NoPayableTickets,
    /// 座席を必要とするチケットがない
    #[error("No seats required for the purchase.")]
    NoSeatsRequired,
    /// 無効なチケット種別（ADULT / CHILD / INFANT 以外）
    #[error("Invalid ticket type. Ticket type must be ADULT, CHILD or INFANT.")]
    InvalidTicketType,
    /// 無効なチケット枚数（1以上の整数でない）
    #[error("Invalid number of tickets. Number of tickets must be a positive integer.")]
    InvalidTicketCount,
}

impl ValidationError {
    /// APIやログで使用する安定したエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAccountId => "INVALID_ACCOUNT_ID",
            ValidationError::EmptyOrMalformedRequestList => "EMPTY_OR_MALFORMED_REQUEST_LIST",
            ValidationError::MaxTicketsExceeded => "MAX_TICKETS_EXCEEDED",
            ValidationError::AdultRequiredForChildOrInfant => "ADULT_REQUIRED_FOR_CHILD_OR_INFANT",
            ValidationError::AdultCountBelowInfantCount => "ADULT_COUNT_BELOW_INFANT_COUNT",
            ValidationError::NoPayableTickets => "NO_PAYABLE_TICKETS",
            ValidationError::NoSeatsRequired => "NO_SEATS_REQUIRED",
            ValidationError::InvalidTicketType => "INVALID_TICKET_TYPE",
            ValidationError::InvalidTicketCount => "INVALID_TICKET_COUNT",
        }
    }
}
