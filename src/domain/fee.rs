//! Parking fee calculation
//!
//! Fees are billed in 30-minute blocks (a partial block counts as a full
//! one), clamped to a flat per-ticket cap, and reduced by 10% when the
//! vehicle entered on a Saturday or Sunday. The cap is applied first, the
//! discount second.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::domain::{Amount, VehicleCategory};

/// Length of one billing block in minutes
pub const BLOCK_MINUTES: i64 = 30;

/// Maximum fee for a single ticket, however long the stay
pub const DAILY_CAP: Amount = 15_000;

/// Discount applied when the entry falls on a weekend
pub const WEEKEND_DISCOUNT_PERCENT: Amount = 10;

/// Step-by-step result of a fee calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    /// Whole minutes between entry and exit (may be zero or negative)
    pub minutes: i64,
    pub blocks: u64,
    pub rate_per_block: Amount,
    pub raw_amount: Amount,
    /// `raw_amount` clamped to [`DAILY_CAP`]
    pub capped_amount: Amount,
    pub weekend_discount: Amount,
    pub total: Amount,
}

/// Compute the amount due for a stay
pub fn calculate_fee(
    category: VehicleCategory,
    entry_time: NaiveDateTime,
    exit_time: NaiveDateTime,
) -> Amount {
    calculate_fee_breakdown(category, entry_time, exit_time).total
}

/// Same as [`calculate_fee`], keeping the intermediate figures
pub fn calculate_fee_breakdown(
    category: VehicleCategory,
    entry_time: NaiveDateTime,
    exit_time: NaiveDateTime,
) -> FeeBreakdown {
    let minutes = (exit_time - entry_time).num_minutes();
    let rate_per_block = category.rate_per_block();

    if minutes <= 0 {
        return FeeBreakdown {
            minutes,
            blocks: 0,
            rate_per_block,
            raw_amount: 0,
            capped_amount: 0,
            weekend_discount: 0,
            total: 0,
        };
    }

    let blocks = block_count(minutes);
    let raw_amount = blocks.saturating_mul(rate_per_block);
    let capped_amount = raw_amount.min(DAILY_CAP);

    let weekend_discount = if is_weekend(entry_time) {
        capped_amount * WEEKEND_DISCOUNT_PERCENT / 100
    } else {
        0
    };

    FeeBreakdown {
        minutes,
        blocks,
        rate_per_block,
        raw_amount,
        capped_amount,
        weekend_discount,
        total: capped_amount - weekend_discount,
    }
}

/// Number of billed blocks for a positive duration, rounding up
fn block_count(minutes: i64) -> u64 {
    let minutes = minutes.max(0) as u64;
    minutes.div_ceil(BLOCK_MINUTES as u64)
}

fn is_weekend(at: NaiveDateTime) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

// ── Tests ──────────────────────────────────────────────────────
