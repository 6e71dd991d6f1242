//! Derived-field computers: pure, column-in/column-out transforms with no
//! hidden randomness.
//!
//! Given identical input columns the output is bit-identical, so every
//! business-rule formula here is testable without generating a full table.

mod assignment;
mod dates;
mod price;
mod status;
mod text;

pub use self::assignment::partsupp_supplier;
pub use self::dates::date_add;
pub use self::price::{extended_price, retail_price, total_price};
pub use self::status::{line_status, order_status, return_flag};
pub use self::text::{brand, join_words, manufacturer, numbered_name, phone_number};
