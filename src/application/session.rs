// src/application/session.rs
//
// Interactive console session - the thin I/O driver over the service layer.
//
// The session owns no business rules: it tokenizes input, re-prompts on bad
// tokens, relays domain errors, and renders the final report. Input and
// output are generic handles so the whole flow runs against scripted
// buffers in tests.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use crate::application::dto::CourierDto;
use crate::error::{AppError, AppResult};
use crate::services::{BookCourierRequest, CourierService};
use crate::store::StoreError;

/// One sitting at the desk: entry loop, status pass, final report.
pub struct Session<R: BufRead, W: Write> {
    service: Arc<CourierService>,
    input: R,
    output: W,
    json_report: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: Arc<CourierService>, input: R, output: W, json_report: bool) -> Self {
        Self {
            service,
            input,
            output,
            json_report,
        }
    }

    /// Run the whole desk flow. End of input at any prompt ends the session
    /// cleanly; whatever was booked up to that point still gets reported.
    pub fn run(&mut self) -> AppResult<()> {
        self.entry_loop()?;
        self.status_update_pass()?;
        self.render_report()
    }

    fn entry_loop(&mut self) -> AppResult<()> {
        loop {
            if self.service.is_full() {
                writeln!(
                    self.output,
                    "Storage full (max {} couriers).",
                    self.service.capacity()
                )?;
                return Ok(());
            }

            let Some(courier_id) = self.prompt_u32("\nEnter Courier ID : ")? else {
                return Ok(());
            };
            let Some(sender) = self.prompt_line("Enter Sender Name : ")? else {
                return Ok(());
            };
            let Some(receiver) = self.prompt_line("Enter Receiver Name : ")? else {
                return Ok(());
            };
            let Some(weight_kg) = self.prompt_f64("Enter Weight (kg) : ")? else {
                return Ok(());
            };
            let Some(mode) = self.prompt_line("Enter Transport Mode (TRAIN/CAR/FLIGHT/SHIP): ")?
            else {
                return Ok(());
            };

            match self.service.book_courier(BookCourierRequest {
                courier_id,
                sender,
                receiver,
                weight_kg,
                mode,
            }) {
                Ok(courier) => {
                    writeln!(
                        self.output,
                        "Booked courier {} ({} charge units).",
                        courier.courier_id, courier.charges
                    )?;
                }
                Err(AppError::Store(err @ StoreError::CapacityExceeded { .. })) => {
                    // Terminal for the entry loop, not a per-record retry.
                    writeln!(self.output, "{err}")?;
                    return Ok(());
                }
                Err(err) => self.report_error(&err)?,
            }

            let Some(answer) = self.prompt_line("Add another courier? (yes/no): ")? else {
                return Ok(());
            };
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(());
            }
        }
    }

    /// Offer a status update for every stored record, in booking order.
    /// Blank input keeps the current status; an invalid status is reported
    /// and the record is left as it was.
    fn status_update_pass(&mut self) -> AppResult<()> {
        for courier in self.service.list_couriers() {
            let prompt = format!(
                "Update status for Courier ID {} (BOOKED/IN_TRANSIT/DELIVERED): ",
                courier.courier_id
            );
            let Some(answer) = self.prompt_line(&prompt)? else {
                return Ok(());
            };
            if answer.is_empty() {
                continue;
            }
            if let Err(err) = self.service.update_status(courier.courier_id, &answer) {
                self.report_error(&err)?;
            }
        }
        Ok(())
    }

    fn render_report(&mut self) -> AppResult<()> {
        let couriers = self.service.list_couriers();
        let rows: Vec<CourierDto> = couriers.iter().map(CourierDto::from).collect();

        writeln!(self.output, "\n----------- Courier Details -----------")?;

        if self.json_report {
            let rendered = serde_json::to_string_pretty(&rows)?;
            writeln!(self.output, "{rendered}")?;
            return Ok(());
        }

        for row in &rows {
            writeln!(self.output, "Courier ID : {}", row.courier_id)?;
            writeln!(self.output, "Sender     : {}", row.sender)?;
            writeln!(self.output, "Receiver   : {}", row.receiver)?;
            writeln!(self.output, "Weight     : {} kg", row.weight_kg)?;
            writeln!(self.output, "Transport  : {}", row.mode)?;
            writeln!(self.output, "Status     : {}", row.status)?;
            writeln!(self.output, "Charges    : {}", row.charges)?;
            writeln!(self.output, "-------------------------------------------")?;
        }
        Ok(())
    }

    /// Prompt and read one line, trimmed. Ok(None) means the input ended.
    fn prompt_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input stream closed mid-session");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the user supplies an integer. Bad tokens never reach the
    /// core; they are re-prompted here.
    fn prompt_u32(&mut self, prompt: &str) -> AppResult<Option<u32>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.output, "Error: numeric input expected. Try again.")?;
                }
            }
        }
    }

    fn prompt_f64(&mut self, prompt: &str) -> AppResult<Option<f64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.output, "Error: numeric input expected. Try again.")?;
                }
            }
        }
    }

    /// Print an error the way the clerk should see it: the message itself,
    /// without the wrapper layer's prefix.
    fn report_error(&mut self, err: &AppError) -> AppResult<()> {
        match err {
            AppError::Domain(e) => writeln!(self.output, "Error: {e}")?,
            AppError::Store(e) => writeln!(self.output, "Error: {e}")?,
            other => writeln!(self.output, "Error: {other}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourierStatus;
    use crate::events::EventBus;
    use crate::store::CourierStore;
    use std::io::Cursor;

    fn run_session(capacity: usize, json: bool, script: &str) -> (String, Arc<CourierService>) {
        let service = Arc::new(CourierService::new(
            CourierStore::with_capacity(capacity),
            Arc::new(EventBus::new()),
        ));
        let mut output = Vec::new();
        {
            let mut session = Session::new(
                Arc::clone(&service),
                Cursor::new(script.to_string()),
                &mut output,
                json,
            );
            session.run().unwrap();
        }
        (String::from_utf8(output).unwrap(), service)
    }

    #[test]
    fn test_full_flow_book_update_report() {
        let script = "1\nAlice\nBob\n10\ncar\nno\nin_transit\n";
        let (output, service) = run_session(5, false, script);

        assert!(output.contains("Update status for Courier ID 1"));
        assert!(output.contains("Courier ID : 1"));
        assert!(output.contains("Status     : IN_TRANSIT"));
        assert!(output.contains("Charges    : 150"));

        let couriers = service.list_couriers();
        assert_eq!(couriers.len(), 1);
        assert_eq!(couriers[0].status, CourierStatus::InTransit);
    }

    #[test]
    fn test_non_numeric_tokens_reprompt() {
        let script = "abc\n2\nAlice\nBob\nheavy\n10\ntrain\nno\n\n";
        let (output, service) = run_session(5, false, script);

        assert_eq!(
            output.matches("Error: numeric input expected. Try again.").count(),
            2
        );

        // Blank status input keeps the record as booked.
        let couriers = service.list_couriers();
        assert_eq!(couriers[0].status, CourierStatus::Booked);
        assert_eq!(couriers[0].charges, 100.0);
    }

    #[test]
    fn test_invalid_mode_reports_and_entry_retries() {
        let script = "1\nA\nB\n10\nplane\nyes\n2\nA\nB\n10\nship\nno\n\n";
        let (output, service) = run_session(5, false, script);

        assert!(output.contains("Transport mode \"plane\" is not available"));
        assert_eq!(service.count(), 1);
        assert_eq!(service.list_couriers()[0].courier_id, 2);
    }

    #[test]
    fn test_invalid_status_leaves_record_and_reports() {
        let script = "1\nA\nB\n10\ntrain\nno\nbogus\n";
        let (output, service) = run_session(5, false, script);

        assert!(output.contains("Invalid status \"bogus\""));
        assert_eq!(service.list_couriers()[0].status, CourierStatus::Booked);
    }

    #[test]
    fn test_storage_full_ends_entry_loop() {
        let script = "1\nA\nB\n1\ntrain\nyes\n";
        let (output, service) = run_session(1, false, script);

        assert!(output.contains("Storage full (max 1 couriers)."));
        assert_eq!(service.count(), 1);
        // The report still renders after input ran out.
        assert!(output.contains("----------- Courier Details -----------"));
    }

    #[test]
    fn test_empty_input_is_a_clean_session() {
        let (output, service) = run_session(5, false, "");

        assert_eq!(service.count(), 0);
        assert!(output.contains("----------- Courier Details -----------"));
    }

    #[test]
    fn test_json_report() {
        let script = "1\nAlice\nBob\n2.5\nflight\nno\n\n";
        let (output, _service) = run_session(5, true, script);

        assert!(output.contains("\"mode\": \"FLIGHT\""));
        assert!(output.contains("\"status\": \"BOOKED\""));
        assert!(output.contains("\"charges\": 75.0"));
    }
}
