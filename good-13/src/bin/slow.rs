use std::time::Instant;

use good_13::{slow::count_direct, Params};
use miette::Context;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Checks every 13-symbol number one at a time. Takes days; progress is
/// logged every few seconds.
#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let started = Instant::now();
    let result = count_direct(Params::GOOD13, None).context("brute force good numbers")?;
    println!("{}", result);
    println!("Finished. Elapsed: {:?}", started.elapsed());
    Ok(())
}

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("good_13=info".parse().unwrap()),
        )
        .with_span_events(FmtSpan::NONE)
        .try_init();
}
