// ドメインモデル（値オブジェクトと集計結果）

mod value_objects;
mod ticket_counts;

pub use value_objects::{
    AccountId,
    TicketType, TicketTypeRequest,
    RequestEntry,
    PurchaseTotals,
};

pub use ticket_counts::TicketCounts;
