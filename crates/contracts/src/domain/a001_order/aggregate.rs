use crate::shared::{iso_datetime, nullable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Заказ клиента в том виде, в котором его отдаёт API заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Локальный идентификатор строки. Сервер его не присылает:
    /// значение копируется из `number` при загрузке страницы.
    #[serde(default)]
    pub id: i64,
    /// Номер заказа, уникален в пределах страницы
    pub number: i64,
    #[serde(with = "iso_datetime")]
    pub creation_date: DateTime<Utc>,
    /// Пусто, пока заказ не доставлен
    #[serde(default, with = "iso_datetime::option")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub address: String,
    /// Заполняется вместе с `delivery_date`
    #[serde(default)]
    pub delivery_team: Option<DeliveryTeam>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub name: String,
}

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub quantity: u32,
    /// Цена за единицу
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    NotDelivered,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "Entregue",
            DeliveryStatus::NotDelivered => "Não entregue",
        }
    }
}

impl Order {
    /// Total shown for the order: the sum of unit prices.
    ///
    /// Quantities are not applied here, unlike [`Product::line_total`].
    /// The dashboard has always displayed this figure, so it is kept as is.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    pub fn is_delivered(&self) -> bool {
        self.delivery_date.is_some()
    }

    pub fn delivery_status(&self) -> DeliveryStatus {
        if self.is_delivered() {
            DeliveryStatus::Delivered
        } else {
            DeliveryStatus::NotDelivered
        }
    }

    /// Team name, only for delivered orders
    pub fn delivery_team_name(&self) -> Option<&str> {
        if !self.is_delivered() {
            return None;
        }
        self.delivery_team.as_ref().map(|t| t.name.as_str())
    }

    /// Mirror `number` into `id`; rows are looked up by `id`.
    pub fn tag_id(&mut self) {
        self.id = self.number;
    }
}

impl Product {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}
