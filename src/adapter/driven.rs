// 駆動される側アダプター（ロガー、外部サービスの代替実装）

mod console_logger;
mod console_collaborators;

pub use console_logger::{ConsoleLogger, LogEntry};
pub use console_collaborators::{ConsoleSeatReservationService, ConsoleTicketPaymentService};
