//! Ticket lifecycle: entries, exits, listings and revenue

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::domain::{
    calculate_fee, Amount, DomainError, DomainResult, FeeBreakdown, Ticket, TicketId,
    TicketRepository, TicketStatus, VehicleCategory,
};

/// Service for parking ticket operations
pub struct ParkingService {
    tickets: Arc<dyn TicketRepository>,
}

impl ParkingService {
    pub fn new(tickets: Arc<dyn TicketRepository>) -> Self {
        Self { tickets }
    }

    /// Open a ticket for a vehicle entering at `entry_time`
    pub fn register_entry(
        &self,
        plate: impl Into<String>,
        category: VehicleCategory,
        entry_time: NaiveDateTime,
    ) -> DomainResult<Ticket> {
        let id = self.tickets.next_id();
        let ticket = Ticket::new(id, plate, category, entry_time);
        self.tickets.save(ticket.clone())?;

        info!(
            ticket_id = id,
            plate = ticket.plate.as_str(),
            %category,
            %entry_time,
            "Entry registered"
        );

        Ok(ticket)
    }

    /// Close a ticket and return the amount due.
    ///
    /// Rejected exits leave the ticket exactly as it was.
    pub fn register_exit(
        &self,
        ticket_id: TicketId,
        exit_time: NaiveDateTime,
    ) -> DomainResult<Amount> {
        let ticket = match self.tickets.find_by_id(ticket_id)? {
            Some(ticket) => ticket,
            None => {
                warn!(ticket_id, "Exit rejected: unknown ticket");
                return Err(DomainError::TicketNotFound(ticket_id));
            }
        };

        if !ticket.is_open() {
            warn!(ticket_id, "Exit rejected: ticket already closed");
            return Err(DomainError::TicketAlreadyClosed(ticket_id));
        }

        let breakdown = ticket.fee_at(exit_time);
        debug!(ticket_id, ?breakdown, "Fee computed");

        // Racing exits are settled by the store; the loser sees AlreadyClosed
        let closed = self
            .tickets
            .close(ticket_id, exit_time, breakdown.total)
            .inspect_err(|e| warn!(ticket_id, error = %e, "Exit rejected"))?;

        info!(
            ticket_id,
            plate = closed.plate.as_str(),
            %exit_time,
            minutes = breakdown.minutes,
            amount = closed.amount,
            "Exit registered"
        );

        Ok(closed.amount)
    }

    pub fn list_open_tickets(&self) -> DomainResult<Vec<Ticket>> {
        self.tickets.find_by_status(TicketStatus::Open)
    }

    pub fn list_closed_tickets(&self) -> DomainResult<Vec<Ticket>> {
        self.tickets.find_by_status(TicketStatus::Closed)
    }

    pub fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>> {
        self.tickets.find_by_id(id)
    }

    /// Revenue of `day`: closed tickets that entered or left that day,
    /// each counted once
    pub fn total_collected_today(&self, day: NaiveDate) -> DomainResult<Amount> {
        let total: Amount = self
            .tickets
            .find_by_status(TicketStatus::Closed)?
            .iter()
            .filter(|t| t.collected_on(day))
            .map(|t| t.amount)
            .sum();

        debug!(%day, total, "Collected total computed");
        Ok(total)
    }

    /// Fee for a hypothetical stay; touches no ticket
    pub fn calculate_fee(
        &self,
        category: VehicleCategory,
        entry_time: NaiveDateTime,
        exit_time: NaiveDateTime,
    ) -> Amount {
        calculate_fee(category, entry_time, exit_time)
    }

    /// What an open ticket would cost if it left at `at`
    pub fn preview_fee(
        &self,
        ticket_id: TicketId,
        at: NaiveDateTime,
    ) -> DomainResult<FeeBreakdown> {
        let ticket = self
            .tickets
            .find_by_id(ticket_id)?
            .ok_or(DomainError::TicketNotFound(ticket_id))?;

        if !ticket.is_open() {
            return Err(DomainError::TicketAlreadyClosed(ticket_id));
        }

        Ok(ticket.fee_at(at))
    }
}

// ── Tests ──────────────────────────────────────────────────────
