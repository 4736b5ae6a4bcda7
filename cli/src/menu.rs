//! Interactive text menu over the parking service

use std::io::{self, BufRead, Write};

use parking_service::{Clock, DisplayConfig, ParkingService, Ticket, TicketId, VehicleCategory};

use crate::render;

const OPTIONS: &str = "\
-- Parking Fee Calculator --
1) Register entry
2) Register exit
3) List open tickets
4) List closed tickets
5) Show ticket
6) Preview fee
7) Total collected today
8) Quit";

pub struct Menu<'a, R, W> {
    service: &'a ParkingService,
    clock: &'a dyn Clock,
    display: &'a DisplayConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        service: &'a ParkingService,
        clock: &'a dyn Clock,
        display: &'a DisplayConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            clock,
            display,
            input,
            output,
        }
    }

    /// Serve menu choices until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{OPTIONS}")?;
            let Some(choice) = self.prompt("Option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.register_entry()?,
                "2" => self.register_exit()?,
                "3" => self.list_open()?,
                "4" => self.list_closed()?,
                "5" => self.show_ticket()?,
                "6" => self.preview_fee()?,
                "7" => self.total_today()?,
                "8" => break,
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }

        writeln!(self.output, "Bye.")?;
        self.output.flush()
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_ticket_id(&mut self) -> io::Result<Option<TicketId>> {
        let Some(raw) = self.prompt("Ticket id: ")? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ticket id. Enter a ticket number.")?;
                Ok(None)
            }
        }
    }

    fn register_entry(&mut self) -> io::Result<()> {
        let Some(plate) = self.prompt("Plate: ")? else {
            return Ok(());
        };
        let Some(raw_category) = self.prompt("Category (standard, motorcycle, pickup): ")? else {
            return Ok(());
        };

        let category: VehicleCategory = match raw_category.parse() {
            Ok(category) => category,
            Err(e) => return writeln!(self.output, "{e}"),
        };

        match self.service.register_entry(plate, category, self.clock.now()) {
            Ok(ticket) => writeln!(self.output, "Entry registered. Ticket #{}", ticket.id),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn register_exit(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_ticket_id()? else {
            return Ok(());
        };

        match self.service.register_exit(id, self.clock.now()) {
            Ok(amount) => writeln!(self.output, "Ticket closed. Amount: {amount}"),
            Err(e) => writeln!(self.output, "Could not register exit: {e}"),
        }
    }

    fn list_open(&mut self) -> io::Result<()> {
        match self.service.list_open_tickets() {
            Ok(tickets) => self.print_tickets(&tickets, "No open tickets."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn list_closed(&mut self) -> io::Result<()> {
        match self.service.list_closed_tickets() {
            Ok(tickets) => self.print_tickets(&tickets, "No closed tickets."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn print_tickets(&mut self, tickets: &[Ticket], empty_message: &str) -> io::Result<()> {
        if tickets.is_empty() {
            return writeln!(self.output, "{empty_message}");
        }
        for ticket in tickets {
            render::write_ticket(&mut self.output, ticket, self.display)?;
        }
        Ok(())
    }

    fn show_ticket(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_ticket_id()? else {
            return Ok(());
        };

        match self.service.find_by_id(id) {
            Ok(Some(ticket)) => render::write_ticket(&mut self.output, &ticket, self.display),
            Ok(None) => writeln!(self.output, "Ticket not found."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn preview_fee(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_ticket_id()? else {
            return Ok(());
        };

        match self.service.preview_fee(id, self.clock.now()) {
            Ok(fee) => render::write_fee(&mut self.output, id, &fee, self.display),
            Err(e) => writeln!(self.output, "Cannot preview fee: {e}"),
        }
    }

    fn total_today(&mut self) -> io::Result<()> {
        match self.service.total_collected_today(self.clock.today()) {
            Ok(total) => writeln!(self.output, "Total collected today: {total}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};
    use parking_service::{FixedClock, InMemoryTicketRepository, OutputFormat, TicketStatus};

    use super::*;

    fn dec(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_service() -> ParkingService {
        ParkingService::new(Arc::new(InMemoryTicketRepository::new()))
    }

    fn run_script(
        service: &ParkingService,
        clock: &FixedClock,
        display: &DisplayConfig,
        script: &str,
    ) -> String {
        let mut output = Vec::new();
        Menu::new(service, clock, display, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn register_entry_then_list_open() {
        let service = sample_service();
        let clock = FixedClock::new(dec(4, 9, 0));
        let out = run_script(
            &service,
            &clock,
            &DisplayConfig::default(),
            "1\nAAA111\nstandard\n3\n8\n",
        );

        assert!(out.contains("Entry registered. Ticket #1"));
        assert!(out.contains(
            "[Ticket #1] Plate: AAA111 | Category: standard | Entry: 04-12-2025 09:00 \
             | Exit: - | Amount: 0 | Status: open"
        ));
        assert!(out.ends_with("Bye.\n"));
    }

    #[test]
    fn unknown_category_registers_nothing() {
        let service = sample_service();
        let clock = FixedClock::new(dec(4, 9, 0));
        let out = run_script(
            &service,
            &clock,
            &DisplayConfig::default(),
            "1\nXYZ\ntruck\n3\n8\n",
        );

        assert!(out.contains("Invalid vehicle category"));
        assert!(out.contains("No open tickets."));
        assert!(service.find_by_id(1).unwrap().is_none());
    }

    #[test]
    fn exit_then_repeated_exit() {
        let service = sample_service();
        service
            .register_entry("ABC123", VehicleCategory::Standard, dec(1, 8, 0))
            .unwrap();
        let clock = FixedClock::new(dec(1, 8, 31));

        let out = run_script(&service, &clock, &DisplayConfig::default(), "2\n1\n2\n1\n8\n");

        assert!(out.contains("Ticket closed. Amount: 1600"));
        assert!(out.contains("Could not register exit: Ticket already closed: 1"));
        let stored = service.find_by_id(1).unwrap().unwrap();
        assert_eq!(stored.status, TicketStatus::Closed);
        assert_eq!(stored.amount, 1600);
    }

    #[test]
    fn bad_and_unknown_ids() {
        let service = sample_service();
        let clock = FixedClock::new(dec(4, 9, 0));
        let out = run_script(
            &service,
            &clock,
            &DisplayConfig::default(),
            "2\nabc\n2\n42\n5\n42\n8\n",
        );

        assert!(out.contains("Invalid ticket id."));
        assert!(out.contains("Could not register exit: Ticket not found: 42"));
        assert!(out.contains("Ticket not found."));
    }

    #[test]
    fn preview_leaves_ticket_open() {
        let service = sample_service();
        service
            .register_entry("PRE", VehicleCategory::Standard, dec(1, 8, 0))
            .unwrap();
        let clock = FixedClock::new(dec(1, 9, 1));

        let out = run_script(&service, &clock, &DisplayConfig::default(), "6\n1\n4\n8\n");

        assert!(out.contains("Ticket #1 so far: 61 min, 3 block(s) x 800 = 2400"));
        assert!(out.contains("total 2400"));
        assert!(out.contains("No closed tickets."));
        assert!(service.find_by_id(1).unwrap().unwrap().is_open());
    }

    #[test]
    fn total_collected_today_uses_clock_day() {
        let service = sample_service();
        let t = service
            .register_entry("Y1", VehicleCategory::Standard, dec(3, 23, 30))
            .unwrap();
        service.register_exit(t.id, dec(4, 0, 30)).unwrap();
        let clock = FixedClock::new(dec(4, 18, 0));

        let out = run_script(&service, &clock, &DisplayConfig::default(), "7\n8\n");
        assert!(out.contains("Total collected today: 1600"));

        clock.set(dec(5, 8, 0));
        let out = run_script(&service, &clock, &DisplayConfig::default(), "7\n8\n");
        assert!(out.contains("Total collected today: 0"));
    }

    #[test]
    fn invalid_option_and_end_of_input() {
        let service = sample_service();
        let clock = FixedClock::new(dec(4, 9, 0));
        let out = run_script(&service, &clock, &DisplayConfig::default(), "9\n1\nHALF");

        assert!(out.contains("Invalid option."));
        assert!(out.ends_with("Bye.\n"));
        assert!(service.list_open_tickets().unwrap().is_empty());
    }

    #[test]
    fn json_listing() {
        let service = sample_service();
        let clock = FixedClock::new(dec(6, 10, 0));
        let display = DisplayConfig {
            output: OutputFormat::Json,
            ..DisplayConfig::default()
        };
        let out = run_script(&service, &clock, &display, "1\nJ1\npickup\n3\n8\n");

        assert!(out.contains(r#""plate":"J1""#));
        assert!(out.contains(r#""category":"pickup""#));
        assert!(out.contains(r#""status":"open""#));
    }
}
