use crate::model::{ReferenceRange, Status};
use rust_decimal::Decimal;

/// Classify a value against an inclusive reference range.
///
/// Values on either bound are `Normal`. Never yields `NeedsAttention`.
pub fn classify(value: Decimal, range: &ReferenceRange) -> Status {
    if value < range.low {
        Status::Low
    } else if value > range.high {
        Status::High
    } else {
        Status::Normal
    }
}
