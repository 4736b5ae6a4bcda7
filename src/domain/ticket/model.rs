//! Ticket domain entity

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::fee::{calculate_fee_breakdown, FeeBreakdown};
use crate::domain::{Amount, VehicleCategory};
use crate::shared::errors::{DomainError, DomainResult};

/// Ticket identifier, assigned sequentially from 1
pub type TicketId = u64;

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Vehicle is still inside
    Open,
    /// Exit registered, amount fixed
    Closed,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// One parking session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: TicketId,
    /// License plate as typed, not validated
    pub plate: String,
    pub category: VehicleCategory,
    pub entry_time: NaiveDateTime,
    /// Set once, on close
    pub exit_time: Option<NaiveDateTime>,
    /// Zero until closed
    pub amount: Amount,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn new(
        id: TicketId,
        plate: impl Into<String>,
        category: VehicleCategory,
        entry_time: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            plate: plate.into(),
            category,
            entry_time,
            exit_time: None,
            amount: 0,
            status: TicketStatus::Open,
        }
    }

    /// Fix the exit time and amount. A closed ticket is left untouched.
    pub fn close(&mut self, exit_time: NaiveDateTime, amount: Amount) -> DomainResult<()> {
        if self.status == TicketStatus::Closed {
            return Err(DomainError::TicketAlreadyClosed(self.id));
        }
        self.exit_time = Some(exit_time);
        self.amount = amount;
        self.status = TicketStatus::Closed;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }

    /// What this ticket would cost if it were closed at `at`
    pub fn fee_at(&self, at: NaiveDateTime) -> FeeBreakdown {
        calculate_fee_breakdown(self.category, self.entry_time, at)
    }

    pub fn entry_date(&self) -> NaiveDate {
        self.entry_time.date()
    }

    pub fn exit_date(&self) -> Option<NaiveDate> {
        self.exit_time.map(|t| t.date())
    }

    /// Whether the amount counts towards the revenue of `day`
    pub fn collected_on(&self, day: NaiveDate) -> bool {
        self.status == TicketStatus::Closed
            && (self.entry_date() == day || self.exit_date() == Some(day))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_ticket() -> Ticket {
        Ticket::new(1, "AAA111", VehicleCategory::Standard, dec(4, 9, 0))
    }

    #[test]
    fn new_ticket_is_open() {
        let t = sample_ticket();
        assert!(t.is_open());
        assert_eq!(t.status, TicketStatus::Open);
        assert_eq!(t.plate, "AAA111");
        assert_eq!(t.amount, 0);
        assert!(t.exit_time.is_none());
        assert!(t.exit_date().is_none());
    }

    #[test]
    fn close_sets_exit_and_amount() {
        let mut t = sample_ticket();
        t.close(dec(4, 10, 0), 1600).unwrap();
        assert_eq!(t.status, TicketStatus::Closed);
        assert_eq!(t.exit_time, Some(dec(4, 10, 0)));
        assert_eq!(t.amount, 1600);
        assert!(!t.is_open());
    }

    #[test]
    fn second_close_is_rejected_and_changes_nothing() {
        let mut t = sample_ticket();
        t.close(dec(4, 10, 0), 1600).unwrap();

        let err = t.close(dec(4, 12, 0), 4000).unwrap_err();
        assert_eq!(err, DomainError::TicketAlreadyClosed(1));
        assert_eq!(t.exit_time, Some(dec(4, 10, 0)));
        assert_eq!(t.amount, 1600);
    }

    #[test]
    fn fee_preview_does_not_close() {
        let t = sample_ticket();
        assert_eq!(t.fee_at(dec(4, 9, 45)).total, 1600);
        assert!(t.is_open());
        assert_eq!(t.amount, 0);
    }

    #[test]
    fn collected_on_entry_or_exit_day() {
        let mut t = Ticket::new(7, "Y1", VehicleCategory::Standard, dec(3, 23, 30));
        assert!(!t.collected_on(dec(3, 0, 0).date()));

        t.close(dec(4, 0, 30), 1600).unwrap();
        assert!(t.collected_on(dec(3, 0, 0).date()));
        assert!(t.collected_on(dec(4, 0, 0).date()));
        assert!(!t.collected_on(dec(5, 0, 0).date()));
    }

    #[test]
    fn status_display() {
        assert_eq!(TicketStatus::Open.to_string(), "open");
        assert_eq!(TicketStatus::Closed.to_string(), "closed");
    }
}
