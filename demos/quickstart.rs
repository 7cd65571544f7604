use eday::{from_date, to_date, EpochDay};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eday::EdayError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eday=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let today = eday::now();
    println!("now: {today}");

    println!("2022-02-17 -> {}", from_date("2022-02-17")?);
    println!("25:50 -> {}", from_date("25:50")?);
    println!("18864.5 -> {}", to_date(18_864.5)?);

    let shift = EpochDay::new("8:00")?;
    println!("now + 8h: {}", today + shift);
    println!("far future: {}", EpochDay::from_value(1e7).to_civil()?);
    Ok(())
}
