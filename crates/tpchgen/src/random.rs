//! Column primitives: stateless generators producing one column of a
//! requested length.
//!
//! Every primitive is independent across calls; composing several columns
//! into one table is order-insensitive. A requested length of zero yields an
//! empty column, never an error.

mod choice;
mod numeric;
mod sequence;
mod string;

pub use self::choice::random_choice;
pub use self::numeric::{RandomValue, random_date, random_numeric};
pub use self::sequence::{primary_key, repeat_sequence, repeat_value};
pub use self::string::random_string;
