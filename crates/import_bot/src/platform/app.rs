use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bot_logging::{bot_info, bot_trace, bot_warn};
use chrono::Datelike;
use telegram_transport::{TelegramClient, Transport, TransportError};

use super::config::Config;
use super::dispatcher::Dispatcher;
use super::effects::EffectRunner;

/// How long shutdown waits for replies that are still being sent.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Runs the bot until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    bot_info!(
        "starting bot api_base={} poll_timeout={:?} admin_chat={}",
        config.bot.api_base,
        config.bot.poll_timeout,
        config.admin_chat
    );

    let client =
        TelegramClient::new(config.bot.clone()).context("failed to build the Telegram client")?;
    let transport: Arc<dyn Transport> = Arc::new(client);
    let effects = EffectRunner::new(transport.clone(), config.admin_chat);
    let mut dispatcher = Dispatcher::new(
        transport.clone(),
        effects,
        Arc::new(|| chrono::Local::now().year()),
    );

    tokio::select! {
        _ = poll_forever(transport.as_ref(), &mut dispatcher, config.retry_backoff) => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            bot_info!("shutdown requested");
        }
    }

    if tokio::time::timeout(SHUTDOWN_GRACE, dispatcher.flush())
        .await
        .is_err()
    {
        bot_warn!("pending replies dropped at shutdown");
    }
    Ok(())
}

/// Polls until the task is dropped; failures wait `backoff` and retry.
async fn poll_forever(
    transport: &dyn Transport,
    dispatcher: &mut Dispatcher,
    backoff: Duration,
) {
    let mut offset = None;
    loop {
        match poll_once(transport, dispatcher, offset).await {
            Ok(next) => offset = next,
            Err(err) => {
                bot_warn!("polling failed: {}; retrying in {:?}", err, backoff);
                tokio::time::sleep(backoff).await;
            }
        }
    }
}

/// Fetches one batch, dispatches it and returns the offset for the next call.
async fn poll_once(
    transport: &dyn Transport,
    dispatcher: &mut Dispatcher,
    offset: Option<i64>,
) -> Result<Option<i64>, TransportError> {
    let updates = transport.get_updates(offset).await?;
    let mut next = offset;
    for update in updates {
        let update_id = update.update_id;
        next = Some(update_id + 1);
        match update.into_event() {
            Some(event) => dispatcher.handle(event),
            None => bot_trace!("skipping update {}", update_id),
        }
    }
    Ok(next)
}
