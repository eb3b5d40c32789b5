use anyhow::Result;
use directorio::{directory, ConvertConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdout is reserved for the confirmation line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = ConvertConfig::default();
    directory::convert(&config)?;

    println!("JSON file generated: {}", config.output.display());
    Ok(())
}
