use day_01::{check::self_check, loader::load_locations};
use miette::{Context, IntoDiagnostic};
use tracing::info;
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

const TEST_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test.txt");
const INPUT_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/input.txt");

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init()?;

    let example = load_locations(TEST_FILE).context("load test.txt")?;
    self_check(&example).context("self-check against test.txt")?;

    let locations = load_locations(INPUT_FILE).context("load input.txt")?;
    info!(records = locations.left.len(), "input loaded");

    // Part 1
    let distance_sum = locations.distance_sum().context("process part 1")?;
    println!("The sum of distances is : {distance_sum}");

    // Part 2
    let similarity_score = locations.similarity_score();
    println!("The similarity score is : {similarity_score}");

    Ok(())
}

fn init() -> miette::Result<()> {
    let directive = "day_01=info".parse::<Directive>().into_diagnostic()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_span_events(FmtSpan::NONE)
        .try_init();
    Ok(())
}
