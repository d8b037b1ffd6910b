//! Progressive scan ordering for the square render grid.

pub mod z_order;

pub use z_order::ZOrderScan;
