use anyhow::Result;
use log::error;
use crate::errors::RunError;
use crate::initialization::init;
use crate::worker::run;

mod errors;
mod manager_geocoding;
mod manager_weather;
mod config;
mod initialization;
mod logging;
pub mod models;
mod worker;
#[cfg(test)]
mod test_support;

fn main() -> Result<()> {
    // If initialization fails logging may not be set up, so the error goes straight to the caller
    let (args, mgr) = match init() {
        Ok((a, m)) => (a, m),
        Err(e) => {
            return Err(RunError(format!("Initialization failed: {}", e)))?;
        }
    };

    if let Err(e) = run(&mgr, &args.location) {
        error!("Run failed: {}", e);
        return Err(RunError(format!("Run failed: {}", e)))?;
    }

    Ok(())
}
