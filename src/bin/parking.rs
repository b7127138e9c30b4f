//! Parking lot simulator
//!
//! Reads one command per line from stdin until `exit` or end of input.

use std::io::{self, BufRead, Write};

use parking_judge::{config::Config, services::ParkingService, utils::logging};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.logging);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut lot = ParkingService::new();

    for line in stdin.lock().lines() {
        let line = line?;
        for reply in lot.execute_line(&line) {
            writeln!(out, "{}", reply)?;
        }
        out.flush()?;

        if !lot.is_open() {
            break;
        }
    }

    tracing::debug!("parking lot closed");
    Ok(())
}
