#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use tessellated::server::{self, ServerConfig};
use tessellated::Rect;

/// Largest width or height the console client will render.
///
/// Far above the HTTP limit, but keeps the row buffers to a sane size.
const MAX_DIMENSION: f64 = 100_000.0;

#[derive(Parser, Debug)]
#[command(
    name = "tessellated",
    about = "Generate a tessellated-triangle background as SVG",
    long_about = "Writes one SVG to stdout (or --output), or serves /triangle.svg over HTTP when --http is given."
)]
struct Cli {
    /// Serve over HTTP on this port instead of printing a single image.
    #[arg(long, value_name = "PORT")]
    http: Option<u16>,

    /// Address to bind when serving over HTTP (defaults to `ServerConfig`'s 127.0.0.1).
    #[arg(long, value_name = "ADDR")]
    bind: Option<IpAddr>,

    /// The width of the svg.
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// The height of the svg.
    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the svg here instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.http {
        Some(port) => run_server(server_config(&cli, port)),
        None => run_once(&cli),
    }
}

fn server_config(cli: &Cli, port: u16) -> ServerConfig {
    let defaults = ServerConfig::default();
    let ip = cli.bind.unwrap_or_else(|| defaults.bind.ip());
    ServerConfig {
        bind: SocketAddr::new(ip, port),
        ..defaults
    }
}

/// Rejects sizes the engine cannot render: non-positive, NaN, infinite or above `MAX_DIMENSION`.
fn checked_size(width: f64, height: f64) -> anyhow::Result<Rect> {
    for (name, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            bail!("{name} must be a positive number, got {value}");
        }
        if value > MAX_DIMENSION {
            bail!("{name} {value} exceeds the maximum of {MAX_DIMENSION}");
        }
    }
    Ok(Rect::new(width, height))
}

fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let bind = config.bind;
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime
        .block_on(server::serve(config))
        .with_context(|| format!("server on {bind} failed"))
}

fn run_once(cli: &Cli) -> anyhow::Result<()> {
    let rect = checked_size(cli.width, cli.height)?;

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = BufWriter::new(sink);

    let started = Instant::now();
    match cli.seed {
        Some(seed) => tessellated::generate_with_seed(rect, &mut sink, seed),
        None => tessellated::generate(rect, &mut sink, &mut rand::rng()),
    }
    .and_then(|()| sink.flush())
    .context("failed to write svg")?;

    log::info!(
        "Triangle background of size {}, {} took {:?}",
        rect.width,
        rect.height,
        started.elapsed()
    );
    Ok(())
}
