use anyhow::{Context, Result};
use cbsflights::{
    config::Config,
    fetch,
    process::reshape,
    state::session,
};
use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// What the UI layer is handed: the year selector range and the dataset.
#[derive(Serialize)]
struct Handoff<'a> {
    years: cbsflights::YearWindow,
    data: &'a cbsflights::ReshapedDataset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env()?;

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) fetch (or load) the dataset ──────────────────────────────
    let payload = match &cfg.payload_path {
        Some(path) => {
            info!(path = %path.display(), "loading saved payload");
            fetch::load_payload(path)
        }
        None => fetch::fetch_payload(&Client::new(), &cfg.dataset_url).await,
    };
    let payload = match payload {
        Ok(p) => p,
        Err(e) => {
            // terminal: nothing is shown without data
            error!("fetch failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // ─── 3) reshape into the session ─────────────────────────────────
    let session = session();
    let window = session.init_window(Local::now().date_naive());
    let dataset = session.install_dataset(reshape(&payload, &window)?);
    for (city, count) in dataset.city_counts() {
        info!(%city, records = count, "city ready");
    }

    // ─── 4) hand off ─────────────────────────────────────────────────
    let handoff = Handoff {
        years: window,
        data: dataset,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&handoff).context("serializing dataset")?
    );

    if let Some((city, metric)) = cfg.chart {
        let chart = session.show_chart(city, metric)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&chart).context("serializing chart")?
        );
    }

    info!("all done");
    Ok(())
}
