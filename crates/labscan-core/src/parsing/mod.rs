pub mod normalize;
pub mod values;

pub use normalize::{names_overlap, normalize_label};
pub use values::parse_leading_decimal;
