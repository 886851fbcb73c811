//! Wire contracts shared by the orders dashboard.

pub mod domain;
pub mod shared;
