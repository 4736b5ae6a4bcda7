//! Ticket repository interface

use chrono::NaiveDateTime;

use super::model::{Ticket, TicketId, TicketStatus};
use crate::domain::Amount;
use crate::shared::errors::DomainResult;

/// Owner of all tickets. Reads hand out copies; the only mutation after
/// insertion is [`TicketRepository::close`].
pub trait TicketRepository: Send + Sync {
    /// Allocate the next id. Ids start at 1 and are never reused.
    fn next_id(&self) -> TicketId;
    /// Insert a new ticket. Fails with `TicketAlreadyExists` if the id is taken.
    fn save(&self, ticket: Ticket) -> DomainResult<()>;
    fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>>;
    /// Close an open ticket atomically, returning the closed copy.
    ///
    /// Fails with `TicketNotFound` or `TicketAlreadyClosed` without
    /// touching the stored ticket.
    fn close(&self, id: TicketId, exit_time: NaiveDateTime, amount: Amount)
        -> DomainResult<Ticket>;
    /// Tickets with the given status, ascending by id
    fn find_by_status(&self, status: TicketStatus) -> DomainResult<Vec<Ticket>>;
    /// All tickets, ascending by id
    fn find_all(&self) -> DomainResult<Vec<Ticket>>;
}
