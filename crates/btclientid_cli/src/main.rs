use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use btclientid::{Classifier, ClientRegistration, ClientRegistryBuilder, PeerId};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Parser)]
#[command(version, author, about)]
struct Opts {
    /// The loglevel
    #[arg(value_enum, short = 'v')]
    log_level: Option<LogLevel>,

    /// JSON files with extra client registrations, e.g.
    /// [{"kind": "az", "code": "rQ", "client": "rqbit"}]
    #[arg(short = 'c', long = "clients", env = "BTCLIENTID_CLIENTS", value_delimiter = ',')]
    clients: Vec<PathBuf>,

    /// Don't load the built-in client table.
    #[arg(long = "no-builtin")]
    no_builtin: bool,

    /// Peer ids are hex encoded bytes, as they appear on the wire.
    #[arg(long)]
    hex: bool,

    /// Print one JSON object per peer id.
    #[arg(long)]
    json: bool,

    /// Peer ids to classify. If none are given, they are read from stdin,
    /// one per line.
    peer_ids: Vec<String>,
}

fn init_logging(opts: &Opts) -> anyhow::Result<()> {
    let default_rust_log = match opts.log_level.as_ref() {
        Some(level) => match level {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        },
        None => "info",
    };

    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let stderr_filter = match std::env::var("RUST_LOG").ok() {
        Some(rust_log) => EnvFilter::builder()
            .parse(&rust_log)
            .context("can't parse RUST_LOG")?,
        None => EnvFilter::builder()
            .parse(default_rust_log)
            .context("can't parse default_rust_log")?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(stderr_filter)
        .init();
    Ok(())
}

fn load_registrations(path: &Path) -> anyhow::Result<Vec<ClientRegistration>> {
    let f = File::open(path).with_context(|| format!("error opening {path:?}"))?;
    let regs: Vec<ClientRegistration> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("error parsing client registrations in {path:?}"))?;
    Ok(regs)
}

fn build_registry(opts: &Opts) -> anyhow::Result<btclientid::ClientRegistry> {
    let mut builder = if opts.no_builtin {
        ClientRegistryBuilder::new()
    } else {
        ClientRegistryBuilder::with_builtin().context("error loading builtin clients")?
    };
    for path in opts.clients.iter() {
        let regs = load_registrations(path)?;
        info!(count = regs.len(), ?path, "loaded client registrations");
        builder
            .configure_all(regs)
            .with_context(|| format!("invalid client registration in {path:?}"))?;
    }
    Ok(builder.build()?)
}

fn parse_peer_id(opts: &Opts, s: &str) -> anyhow::Result<PeerId> {
    if opts.hex {
        return PeerId::from_hex(s).with_context(|| format!("error decoding {s:?}"));
    }
    Ok(PeerId::from_text(s))
}

fn print_one(opts: &Opts, classifier: &Classifier<'_>, raw: &str) -> anyhow::Result<()> {
    let peer_id = match parse_peer_id(opts, raw) {
        Ok(p) => p,
        Err(e) => {
            warn!("skipping peer id: {e:#}");
            return Ok(());
        }
    };
    let r = classifier.classify(&peer_id);
    debug!(%peer_id, client = %r, "classified");
    if opts.json {
        let line = serde_json::json!({
            "peer_id": raw,
            "client": r.client,
            "version": r.version,
        });
        println!("{line}");
    } else {
        println!("{raw}\t{r}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    init_logging(&opts)?;

    let registry = build_registry(&opts)?;
    let classifier = Classifier::new(&registry);

    if !opts.peer_ids.is_empty() {
        for raw in opts.peer_ids.iter() {
            print_one(&opts, &classifier, raw)?;
        }
        return Ok(());
    }

    for line in std::io::stdin().lines() {
        let line = line.context("error reading stdin")?;
        let raw = line.trim_end_matches(['\r', '\n']);
        if raw.is_empty() {
            continue;
        }
        print_one(&opts, &classifier, raw)?;
    }
    Ok(())
}
