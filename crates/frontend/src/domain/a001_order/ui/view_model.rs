//! Display values for the orders table and the detail panel.
//!
//! Everything here is derived from an [`Order`] already held by the page,
//! the detail panel never goes back to the server.

use crate::shared::components::table::format_brl;
use crate::shared::date_utils::{format_date, format_datetime};
use chrono::TimeZone;
use contracts::domain::a001_order::{Order, Product};
use std::fmt::Display;

/// Shown in the delivery column for undelivered orders
pub const NOT_DELIVERED: &str = "Não entregue";

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRowVm {
    pub id: i64,
    pub number: String,
    pub creation_date: String,
    /// `None` renders the [`NOT_DELIVERED`] placeholder
    pub delivery_date: Option<String>,
    pub total_value: f64,
}

impl OrderRowVm {
    pub fn from_order<Tz>(order: &Order, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: order.id,
            number: order.number.to_string(),
            creation_date: format_date(&order.creation_date, tz),
            delivery_date: order.delivery_date.as_ref().map(|d| format_date(d, tz)),
            total_value: order.total_value(),
        }
    }

    pub fn total(&self) -> String {
        format_brl(self.total_value)
    }

    pub fn delivery_label(&self) -> &str {
        self.delivery_date.as_deref().unwrap_or(NOT_DELIVERED)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryVm {
    pub delivered_at: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetailsVm {
    pub number: String,
    pub created_at: String,
    pub address: String,
    pub status: &'static str,
    pub total: String,
    /// Present only for delivered orders
    pub delivery: Option<DeliveryVm>,
}

impl OrderDetailsVm {
    pub fn from_order<Tz>(order: &Order, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let delivery = order.delivery_date.as_ref().map(|d| DeliveryVm {
            delivered_at: format_datetime(d, tz),
            team: order.delivery_team_name().unwrap_or_default().to_string(),
        });

        Self {
            number: order.number.to_string(),
            created_at: format_datetime(&order.creation_date, tz),
            address: order.address.clone(),
            status: order.delivery_status().label(),
            total: format_brl(order.total_value()),
            delivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowVm {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

impl From<&Product> for ItemRowVm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            quantity: product.quantity,
            unit_price: product.price,
            line_total: product.line_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::ui::state::{items_page, DashboardState};
    use chrono::Utc;
    use contracts::domain::a001_order::OrderPageResponse;

    /// Two orders as the API sends them: 100 waiting, 101 delivered by "Team A"
    const FIRST_PAGE: &str = r#"{
        "orders": [
            {
                "number": 100,
                "creationDate": "2021-03-01T10:00:00.000Z",
                "deliveryDate": null,
                "address": "Rua das Flores, 100",
                "deliveryTeam": null,
                "products": [{ "name": "Cadeira", "quantity": 1, "price": 50.0 }]
            },
            {
                "number": 101,
                "creationDate": "2021-03-02T09:30:00.000Z",
                "deliveryDate": "2021-03-05T14:45:10.000Z",
                "address": "Av. Brasil, 2000",
                "deliveryTeam": { "id": 1, "name": "Team A" },
                "products": [
                    { "name": "Caneta", "quantity": 1, "price": 10.0 },
                    { "name": "Lápis", "quantity": 1, "price": 5.0 }
                ]
            }
        ],
        "orderCount": 2
    }"#;

    fn loaded_state() -> DashboardState {
        let response: OrderPageResponse = serde_json::from_str(FIRST_PAGE).unwrap();
        let mut state = DashboardState::default();
        let request = state.begin_page_load(0);
        assert!(state.apply_page(request, response));
        state
    }

    #[test]
    fn test_order_table_rows() {
        let state = loaded_state();
        let rows: Vec<_> = state
            .orders
            .iter()
            .map(|o| OrderRowVm::from_order(o, &Utc))
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, "100");
        assert_eq!(rows[0].creation_date, "01/03/2021");
        assert_eq!(rows[0].delivery_label(), NOT_DELIVERED);
        assert_eq!(rows[0].total(), "R$ 50,00");

        assert_eq!(rows[1].delivery_label(), "05/03/2021");
        assert_eq!(rows[1].total(), "R$ 15,00");
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_selected_order_details() {
        let mut state = loaded_state();
        state.select(101);
        let order = state.selected_order().unwrap();

        let details = OrderDetailsVm::from_order(order, &Utc);
        assert_eq!(details.number, "101");
        assert_eq!(details.created_at, "02/03/2021, 09:30:00");
        assert_eq!(details.status, "Entregue");
        assert!(details.delivery.is_some());
        assert_eq!(details.total, "R$ 15,00");
        assert_eq!(
            details.delivery,
            Some(DeliveryVm {
                delivered_at: "05/03/2021, 14:45:10".to_string(),
                team: "Team A".to_string(),
            })
        );

        let items: Vec<ItemRowVm> = items_page(&order.products, 0)
            .iter()
            .map(ItemRowVm::from)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(format_brl(items[0].unit_price), "R$ 10,00");
        assert_eq!(format_brl(items[0].line_total), "R$ 10,00");
        assert_eq!(format_brl(items[1].line_total), "R$ 5,00");
        let items_sum: f64 = items.iter().map(|i| i.line_total).sum();
        assert_eq!(format_brl(items_sum), "R$ 15,00");
    }

    #[test]
    fn test_undelivered_details() {
        let mut state = loaded_state();
        state.select(100);
        let details = OrderDetailsVm::from_order(state.selected_order().unwrap(), &Utc);

        assert_eq!(details.status, "Não entregue");
        assert!(details.delivery.is_none());
        assert_eq!(details.address, "Rua das Flores, 100");
    }

    #[test]
    fn test_item_row_totals() {
        let row = ItemRowVm::from(&Product {
            name: "Caderno".to_string(),
            quantity: 3,
            price: 4.0,
        });
        assert_eq!(row.quantity, 3);
        assert_eq!(format_brl(row.unit_price), "R$ 4,00");
        assert_eq!(format_brl(row.line_total), "R$ 12,00");
    }

    #[test]
    fn test_total_is_sum_of_prices() {
        let order = Order {
            id: 1,
            number: 1,
            creation_date: Utc::now(),
            delivery_date: None,
            address: String::new(),
            delivery_team: None,
            products: vec![
                Product {
                    name: "A".to_string(),
                    quantity: 4,
                    price: 10.5,
                },
                Product {
                    name: "B".to_string(),
                    quantity: 2,
                    price: 2.0,
                },
            ],
        };
        assert_eq!(OrderRowVm::from_order(&order, &Utc).total(), "R$ 12,50");
    }
}
