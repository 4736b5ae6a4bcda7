//! In-memory ticket storage

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    Amount, DomainError, DomainResult, Ticket, TicketId, TicketRepository, TicketStatus,
};

/// Process-lifetime ticket store: an id-keyed map plus a monotonic counter
pub struct InMemoryTicketRepository {
    tickets: DashMap<TicketId, Ticket>,
    ticket_counter: AtomicU64,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self {
            tickets: DashMap::new(),
            ticket_counter: AtomicU64::new(1),
        }
    }

    fn sorted(mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.sort_unstable_by_key(|t| t.id);
        tickets
    }
}

impl Default for InMemoryTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn next_id(&self) -> TicketId {
        self.ticket_counter.fetch_add(1, Ordering::SeqCst)
    }

    fn save(&self, ticket: Ticket) -> DomainResult<()> {
        match self.tickets.entry(ticket.id) {
            Entry::Occupied(_) => Err(DomainError::TicketAlreadyExists(ticket.id)),
            Entry::Vacant(slot) => {
                slot.insert(ticket);
                Ok(())
            }
        }
    }

    fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>> {
        Ok(self.tickets.get(&id).map(|t| t.value().clone()))
    }

    fn close(
        &self,
        id: TicketId,
        exit_time: NaiveDateTime,
        amount: Amount,
    ) -> DomainResult<Ticket> {
        // The entry guard is held across check and update
        let mut ticket = self
            .tickets
            .get_mut(&id)
            .ok_or(DomainError::TicketNotFound(id))?;
        ticket.close(exit_time, amount)?;
        Ok(ticket.value().clone())
    }

    fn find_by_status(&self, status: TicketStatus) -> DomainResult<Vec<Ticket>> {
        Ok(Self::sorted(
            self.tickets
                .iter()
                .filter(|t| t.status == status)
                .map(|t| t.value().clone())
                .collect(),
        ))
    }

    fn find_all(&self) -> DomainResult<Vec<Ticket>> {
        Ok(Self::sorted(
            self.tickets.iter().map(|t| t.value().clone()).collect(),
        ))
    }
}

// ── Tests ──────────────────────────────────────────────────────
