use std::sync::Arc;

use clap::Parser;
use payouts::prelude::*;
use tokio::io::{BufWriter, Stdout};

#[tokio::main]
async fn main() {
    // Invalid arguments exit here, before any network activity
    let config = Args::parse().into_config();
    init_tracing(config.debug);

    CliApp::new("payouts")
        .run(|writer| run_payout_summary(writer, config))
        .await
}

/// Main application logic - sums the payouts and writes the JSON summary
async fn run_payout_summary(writer: BufWriter<Stdout>, config: RunConfig) -> Result<(), AppError> {
    let source = Arc::new(HttpReportSource::with_timeout(
        config.base_url.as_str(),
        config.timeout,
    )?);

    let summary = summarize_payouts(source, &config).await?;

    // Writer is flushed by write_summary
    write_summary(&summary, writer).await?;

    Ok(())
}
