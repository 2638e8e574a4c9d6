//! toll-ledger: invoke one record function against a local sled store
//!
//! ```text
//! toll-ledger CreateAgency '{"agency_id":"NJTA", ...}'
//! toll-ledger --config ledger.toml ListCharges '{"agency_a":"NJTA","agency_b":"PANYNJ"}'
//! echo '{"tag_serial_number":"0123"}' | toll-ledger GetTag -
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use toll_ledger::{Config, InvocationContext, RecordService, Response, SledStore, dispatch};

#[derive(Parser, Debug)]
#[command(name = "toll-ledger")]
#[command(about = "Invoke a toll interoperability record function against a local store")]
struct Args {
    /// TOML configuration file; defaults plus TOLL_LEDGER_* variables when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Identity of the submitting agency
    #[arg(long, default_value = "local")]
    caller: String,

    /// Function name, e.g. CreateCharge
    function: String,

    /// JSON payload, or `-` to read it from stdin
    payload: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?
            .with_env()?,
        None => Config::from_env()?,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let payload = match args.payload.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(payload) => payload.to_string(),
        None => String::new(),
    };

    let store = SledStore::open(&config)
        .with_context(|| format!("opening store at {}", config.data_dir.display()))?;
    let service = RecordService::new(store);
    let ctx = InvocationContext::now(args.caller);

    let response = dispatch::respond(&service, &ctx, &args.function, payload.as_bytes());
    service.store().flush()?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(match response {
        Response::Ok { .. } => ExitCode::SUCCESS,
        Response::Error(_) => ExitCode::FAILURE,
    })
}
