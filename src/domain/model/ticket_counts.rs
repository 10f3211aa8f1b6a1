use crate::domain::model::{TicketType, TicketTypeRequest};

/// チケット種別ごとの合計枚数
/// 1回の購入処理の中でのみ導出され、永続化されない
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    adult: u32,
    child: u32,
    infant: u32,
}

impl TicketCounts {
    /// 種別ごとの枚数を指定して作成
    pub fn new(adult: u32, child: u32, infant: u32) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// リクエストを種別ごとに集計する
    /// 同じ種別のリクエストは上書きではなく加算される
    /// 加算は飽和するため、溢れた合計は必ず上限を超える
    pub fn aggregate<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        requests
            .into_iter()
            .fold(Self::default(), |counts, request| {
                counts.add(request.ticket_type(), request.no_of_tickets())
            })
    }

    fn add(mut self, ticket_type: TicketType, no_of_tickets: u32) -> Self {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(no_of_tickets);
        self
    }

    /// 大人の枚数
    pub fn adult(&self) -> u32 {
        self.adult
    }

    /// 子供の枚数
    pub fn child(&self) -> u32 {
        self.child
    }

    /// 幼児の枚数
    pub fn infant(&self) -> u32 {
        self.infant
    }

    /// 指定した種別の枚数
    pub fn count_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// 全種別の合計枚数
    pub fn total(&self) -> u32 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }
}
