use std::time::Instant;

use good_13::{fast::process, Params};
use miette::Context;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let started = Instant::now();
    let result = process(Params::GOOD13).context("count good numbers")?;
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
