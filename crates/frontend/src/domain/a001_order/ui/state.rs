use contracts::domain::a001_order::dto::total_pages;
use contracts::domain::a001_order::{Order, OrderPageResponse, Product, ORDERS_PAGE_SIZE};

/// Позиции заказа листаются страницами того же размера, что и заказы
pub const ITEMS_PAGE_SIZE: usize = ORDERS_PAGE_SIZE;

/// Квитанция на запрос страницы.
///
/// Ответ применяется, только если квитанция всё ещё последняя:
/// при нескольких одновременных запросах побеждает последний запрошенный.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub page: usize,
}

impl PageRequest {
    pub fn page_index(&self) -> u32 {
        u32::try_from(self.page).unwrap_or(u32::MAX)
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// Заказы текущей страницы, `id` уже скопирован из `number`
    pub orders: Vec<Order>,
    pub total_count: u64,
    /// Запрошенная страница (0-indexed)
    pub page: usize,
    /// `id` выбранного заказа
    pub selected: Option<i64>,
    /// Страница в таблице позиций выбранного заказа
    pub item_page: usize,

    pub is_loading: bool,
    pub error: Option<String>,
    pub is_loaded: bool,

    last_request: u64,
}

impl DashboardState {
    /// Start loading `page`: selection is dropped right away
    pub fn begin_page_load(&mut self, page: usize) -> PageRequest {
        self.last_request += 1;
        self.page = page;
        self.selected = None;
        self.item_page = 0;
        self.is_loading = true;
        self.error = None;
        PageRequest {
            seq: self.last_request,
            page,
        }
    }

    pub fn is_current(&self, request: PageRequest) -> bool {
        request.seq == self.last_request
    }

    /// Replace the order list with a loaded page.
    /// Returns `false` when a newer request was issued meanwhile.
    pub fn apply_page(&mut self, request: PageRequest, response: OrderPageResponse) -> bool {
        if !self.is_current(request) {
            return false;
        }

        let mut orders = response.orders;
        for order in &mut orders {
            order.tag_id();
        }

        self.orders = orders;
        self.total_count = response.order_count;
        self.selected = None;
        self.item_page = 0;
        self.is_loading = false;
        self.is_loaded = true;
        true
    }

    /// Record a failed load. The previous list stays visible.
    pub fn fail_page(&mut self, request: PageRequest, error: String) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.is_loading = false;
        self.error = Some(error);
        true
    }

    /// Select the order with this `id` in the current page, or nothing
    pub fn select(&mut self, id: i64) {
        self.selected = self.orders.iter().find(|o| o.id == id).map(|o| o.id);
        self.item_page = 0;
    }

    pub fn selected_order(&self) -> Option<&Order> {
        let id = self.selected?;
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count)
    }

    pub fn item_pages(&self) -> usize {
        self.selected_order()
            .map(|o| o.products.len().div_ceil(ITEMS_PAGE_SIZE))
            .unwrap_or(0)
    }

    pub fn set_item_page(&mut self, page: usize) {
        self.item_page = page.min(self.item_pages().saturating_sub(1));
    }
}

/// Позиции на странице `page`
pub fn items_page(products: &[Product], page: usize) -> &[Product] {
    let start = page.saturating_mul(ITEMS_PAGE_SIZE).min(products.len());
    let end = start.saturating_add(ITEMS_PAGE_SIZE).min(products.len());
    &products[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product(name: &str, quantity: u32, price: f64) -> Product {
        Product {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    fn order(number: i64, products: Vec<Product>) -> Order {
        Order {
            id: 0,
            number,
            creation_date: Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap(),
            delivery_date: None,
            address: format!("Rua {}", number),
            delivery_team: None,
            products,
        }
    }

    fn page(numbers: &[i64], order_count: u64) -> OrderPageResponse {
        OrderPageResponse {
            orders: numbers
                .iter()
                .map(|n| order(*n, vec![product("Item", 1, 1.0)]))
                .collect(),
            order_count,
        }
    }

    #[test]
    fn test_apply_page_tags_ids() {
        let mut state = DashboardState::default();
        let request = state.begin_page_load(0);
        assert!(state.is_loading);

        assert!(state.apply_page(request, page(&[100, 101], 45)));
        assert_eq!(state.orders.iter().map(|o| o.id).collect::<Vec<_>>(), vec![100, 101]);
        assert_eq!(state.total_count, 45);
        assert_eq!(state.total_pages(), 3);
        assert!(!state.is_loading);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_page_change_clears_selection() {
        let mut state = DashboardState::default();
        let first = state.begin_page_load(0);
        state.apply_page(first, page(&[1, 2], 40));
        state.select(2);
        assert_eq!(state.selected, Some(2));

        let second = state.begin_page_load(1);
        assert_eq!(state.selected, None);
        assert_eq!(state.page, 1);

        state.select(1);
        state.apply_page(second, page(&[21, 22], 40));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_select_existing_and_missing() {
        let mut state = DashboardState::default();
        let request = state.begin_page_load(0);
        state.apply_page(request, page(&[100, 101], 2));

        state.select(101);
        assert_eq!(state.selected_order().map(|o| o.number), Some(101));
        assert_eq!(state.selected_order(), Some(&state.orders[1]));

        state.select(999);
        assert_eq!(state.selected, None);
        assert!(state.selected_order().is_none());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut state = DashboardState::default();
        let slow = state.begin_page_load(1);
        let fast = state.begin_page_load(2);

        assert!(state.apply_page(fast, page(&[41], 60)));
        // the older response arrives last and is dropped
        assert!(!state.apply_page(slow, page(&[21], 60)));

        assert_eq!(state.orders[0].number, 41);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut state = DashboardState::default();
        let old = state.begin_page_load(0);
        let new = state.begin_page_load(1);

        assert!(!state.fail_page(old, "timeout".to_string()));
        assert!(state.is_loading);
        assert_eq!(state.error, None);

        assert!(state.apply_page(new, page(&[21], 30)));
    }

    #[test]
    fn test_failure_keeps_previous_orders() {
        let mut state = DashboardState::default();
        let first = state.begin_page_load(0);
        state.apply_page(first, page(&[1, 2, 3], 3));

        let second = state.begin_page_load(1);
        assert!(state.fail_page(second, "HTTP error: 500".to_string()));

        assert_eq!(state.orders.len(), 3);
        assert_eq!(state.error.as_deref(), Some("HTTP error: 500"));
        assert!(!state.is_loading);

        // a new attempt clears the error
        state.begin_page_load(1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_items_page() {
        let products: Vec<_> = (0..45).map(|i| product(&format!("P{}", i), 1, 1.0)).collect();
        assert_eq!(items_page(&products, 0).len(), 20);
        assert_eq!(items_page(&products, 2).len(), 5);
        assert_eq!(items_page(&products, 2)[0].name, "P40");
        assert!(items_page(&products, 3).is_empty());
        assert!(items_page(&[], 0).is_empty());
    }

    #[test]
    fn test_item_page_resets_and_clamps() {
        let mut state = DashboardState::default();
        let request = state.begin_page_load(0);
        let mut response = page(&[7], 1);
        response.orders[0].products = (0..25).map(|i| product(&format!("P{}", i), 1, 1.0)).collect();
        state.apply_page(request, response);

        state.select(7);
        assert_eq!(state.item_pages(), 2);
        state.set_item_page(5);
        assert_eq!(state.item_page, 1);

        state.select(7);
        assert_eq!(state.item_page, 0);
    }
}
