use super::aggregate::Order;
use serde::{Deserialize, Serialize};

/// Размер страницы задаёт сервер, клиент его только отображает
pub const ORDERS_PAGE_SIZE: usize = 20;

/// Параметры запроса страницы заказов (`?pageIndex=N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPageQuery {
    /// Номер страницы, с нуля
    pub page_index: u32,
}

/// Ответ со страницей заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPageResponse {
    pub orders: Vec<Order>,
    /// Общее количество заказов на сервере
    pub order_count: u64,
}

/// Number of pages for the reported order count
pub fn total_pages(order_count: u64) -> usize {
    let count = usize::try_from(order_count).unwrap_or(usize::MAX);
    count.div_ceil(ORDERS_PAGE_SIZE)
}
