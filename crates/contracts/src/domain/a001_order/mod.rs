pub mod aggregate;
pub mod dto;

pub use aggregate::{DeliveryStatus, DeliveryTeam, Order, Product};
pub use dto::{OrderPageQuery, OrderPageResponse, ORDERS_PAGE_SIZE};
