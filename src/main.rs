//! Wiring & DI. Entry point: bootstrap adapters, inject into the flow, run.
//! No business logic here; one cycle by default, continuous mode when a schedule is configured.

use daily_mentor::adapters::ai::GeminiAdapter;
use daily_mentor::adapters::http::build_client;
use daily_mentor::adapters::telegram::TelegramBotAdapter;
use daily_mentor::ports::{ChatPort, CompletionPort};
use daily_mentor::shared::AppConfig;
use daily_mentor::usecases::{MentorFlow, Schedule, ScheduleService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    if cfg.google_api_key().is_some() {
        info!("GOOGLE_API_KEY is set");
    } else {
        warn!("GOOGLE_API_KEY is not set; generation will fail with an auth error");
    }

    // --- Adapters (one HTTP client, shared) ---
    let client = build_client(cfg.http_timeout())?;
    let ai: Arc<dyn CompletionPort> = Arc::new(GeminiAdapter::new(
        client.clone(),
        cfg.gemini_api_url_or_default(),
        cfg.google_api_key().unwrap_or_default(),
    ));
    let chat: Arc<dyn ChatPort> = Arc::new(TelegramBotAdapter::new(
        client,
        cfg.telegram_api_url_or_default(),
    ));
    info!(
        model = %cfg.gemini_model_or_default(),
        temperature = cfg.temperature_or_default(),
        retries = cfg.generate_retries_or_default(),
        "adapters ready"
    );

    let flow = MentorFlow::from_config(&cfg, ai, chat);

    // --- Run once (default) or serve on a schedule ---
    match Schedule::from_config(&cfg)? {
        None => {
            let report = flow.run_once().await?;
            info!(
                attempts = report.generation_attempts,
                "✅ run finished"
            );
        }
        Some(schedule) => {
            ScheduleService::new(flow, schedule).run_loop().await;
        }
    }

    Ok(())
}
