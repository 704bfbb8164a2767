use homework_bot::config::Config;
use homework_bot::logging;
use homework_bot::module::homework::PracticumClient;
use homework_bot::module::poller::Poller;
use homework_bot::module::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let _logging_guard = logging::init_logging("logs", "homework-bot", &log_level);

    // Missing credentials are the only fatal condition; everything after
    // this point keeps the loop alive.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Refusing to start: {e}");
            return Err(e.into());
        }
    };

    tracing::info!(
        "Homework bot starting, polling {} every {}s",
        config.endpoint,
        config.retry_period.as_secs()
    );

    let api = PracticumClient::new(&config.endpoint, &config.practicum_token);
    let notifier = TelegramNotifier::new(&config.telegram_token, &config.telegram_chat_id);
    let mut poller = Poller::new(api, notifier, config.retry_period);

    let poll_task = tokio::spawn(async move { poller.run().await });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received.");
    poll_task.abort();

    Ok(())
}
