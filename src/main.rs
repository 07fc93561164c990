use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_shell::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("rookery starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
