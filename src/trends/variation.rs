//! Change between two price values.

use crate::models::{Direction, PriceVariation};

/// Compute the change from `previous` to `current`.
///
/// `percent_change` is zero when `previous` is not strictly positive. The
/// direction is `Stable` only for an exact zero difference; no tolerance is
/// applied, so callers that need smoothing must round their inputs first.
pub fn variation(current: f64, previous: f64) -> PriceVariation {
    let absolute_change = current - previous;
    let percent_change = if previous > 0.0 {
        absolute_change / previous * 100.0
    } else {
        0.0
    };
    let direction = if absolute_change > 0.0 {
        Direction::Up
    } else if absolute_change < 0.0 {
        Direction::Down
    } else {
        Direction::Stable
    };
    PriceVariation {
        absolute_change,
        percent_change,
        direction,
    }
}
