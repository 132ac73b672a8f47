// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    parse_date::demo::run(&mut stdout, &Local).context("timestamp demonstration failed")?;
    stdout.flush()?;
    Ok(())
}
