//! Human and JSON renderings of tickets and fees

use std::io::{self, Write};

use parking_service::{DisplayConfig, FeeBreakdown, OutputFormat, Ticket, TicketId};

/// One-line summary of a ticket
pub fn ticket_line(ticket: &Ticket, date_format: &str) -> String {
    let entry = ticket.entry_time.format(date_format).to_string();
    let exit = ticket
        .exit_time
        .map(|t| t.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "[Ticket #{}] Plate: {} | Category: {} | Entry: {} | Exit: {} | Amount: {} | Status: {}",
        ticket.id, ticket.plate, ticket.category, entry, exit, ticket.amount, ticket.status
    )
}

pub fn fee_line(ticket_id: TicketId, fee: &FeeBreakdown) -> String {
    format!(
        "Ticket #{} so far: {} min, {} block(s) x {} = {}, capped {}, weekend discount {}, total {}",
        ticket_id,
        fee.minutes,
        fee.blocks,
        fee.rate_per_block,
        fee.raw_amount,
        fee.capped_amount,
        fee.weekend_discount,
        fee.total
    )
}

pub fn write_ticket(
    out: &mut impl Write,
    ticket: &Ticket,
    display: &DisplayConfig,
) -> io::Result<()> {
    match display.output {
        OutputFormat::Text => writeln!(out, "{}", ticket_line(ticket, &display.date_format)),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, ticket)?;
            writeln!(out)
        }
    }
}

pub fn write_fee(
    out: &mut impl Write,
    ticket_id: TicketId,
    fee: &FeeBreakdown,
    display: &DisplayConfig,
) -> io::Result<()> {
    match display.output {
        OutputFormat::Text => writeln!(out, "{}", fee_line(ticket_id, fee)),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, fee)?;
            writeln!(out)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
