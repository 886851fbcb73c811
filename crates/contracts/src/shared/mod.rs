pub mod iso_datetime;
pub mod nullable;
