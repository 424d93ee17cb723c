use std::io::{self, Write};
use std::process::ExitCode;

use feature_tour::tour::{registry, run_all};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let topics = registry();
    info!(topics = topics.len(), "starting the tour");

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    match run_all(&topics, &mut sink) {
        Ok(failed) => {
            info!(failed, "tour finished");
            ExitCode::SUCCESS
        },
        Err(err) => {
            let _ = sink.flush();
            error!(error = %err, "could not write the transcript");
            ExitCode::FAILURE
        },
    }
}
