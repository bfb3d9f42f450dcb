use std::io;

use tickwatch_core::{AlphaVantageClient, ProviderConfig};

use crate::cli::WatchArgs;
use crate::error::CliError;
use crate::session::WatchSession;

pub async fn run(_args: &WatchArgs, timeout_ms: u64) -> Result<(), CliError> {
    let client = AlphaVantageClient::new(ProviderConfig::from_env()).with_timeout_ms(timeout_ms);
    let session = WatchSession::new(client);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout).await
}
