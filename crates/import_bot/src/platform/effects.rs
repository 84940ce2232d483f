use std::sync::Arc;

use bot_logging::{bot_error, bot_info, bot_warn};
use import_core::{Effect, Keyboard};
use telegram_transport::{ChatId, Transport};

use super::ui::{keyboards, render};

/// Delivers the effects produced by `update` for one chat.
pub struct EffectRunner {
    transport: Arc<dyn Transport>,
    admin_chat: ChatId,
}

impl EffectRunner {
    pub fn new(transport: Arc<dyn Transport>, admin_chat: ChatId) -> Self {
        Self {
            transport,
            admin_chat,
        }
    }

    /// Runs effects in order. Delivery failures are logged and never abort the
    /// remaining effects.
    pub async fn run(&self, chat_id: ChatId, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Prompt { prompt, keyboard } => {
                    let text = render::prompt_text(prompt);
                    let markup = keyboards::markup(keyboard);
                    if let Err(err) = self
                        .transport
                        .send_message(chat_id, &text, markup.as_ref())
                        .await
                    {
                        bot_warn!("prompt to chat {} not delivered: {}", chat_id, err);
                    }
                }
                Effect::ShowReport(report) => {
                    let text = render::report_text(&report);
                    // The age question's cancel button must not outlive the report.
                    let markup = keyboards::markup(Keyboard::Remove);
                    if let Err(err) = self
                        .transport
                        .send_message(chat_id, &text, markup.as_ref())
                        .await
                    {
                        bot_warn!("report to chat {} not delivered: {}", chat_id, err);
                    }
                }
                Effect::NotifyAdmin(lead) => {
                    let text = render::lead_text(chat_id, &lead);
                    match self
                        .transport
                        .send_message(self.admin_chat, &text, None)
                        .await
                    {
                        Ok(()) => bot_info!("lead from chat {} forwarded", chat_id),
                        Err(err) => bot_error!(
                            "lead from chat {} not forwarded to admin chat {}: {}",
                            chat_id,
                            self.admin_chat,
                            err
                        ),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use import_core::{CalculationInputs, Country, FuelType, Prompt, Report};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::platform::testing::RecordingTransport;

    #[tokio::test]
    async fn prompt_carries_rendered_text_and_markup() {
        let transport = Arc::new(RecordingTransport::default());
        let runner = EffectRunner::new(transport.clone(), ChatId(1));

        runner
            .run(
                ChatId(5),
                vec![Effect::Prompt {
                    prompt: Prompt::Cancelled,
                    keyboard: Keyboard::Remove,
                }],
            )
            .await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].chat_id, ChatId(5));
        assert_eq!(sent[0].text, render::prompt_text(Prompt::Cancelled));
        assert_eq!(sent[0].markup, keyboards::markup(Keyboard::Remove));
    }

    #[tokio::test]
    async fn report_removes_reply_keyboard() {
        let transport = Arc::new(RecordingTransport::default());
        let runner = EffectRunner::new(transport.clone(), ChatId(1));
        let inputs = CalculationInputs {
            country: Country::Georgia,
            car_price_usd: 20_000.0,
            auction_fee_usd: 1_000.0,
            delivery_usa_usd: 500.0,
            sea_delivery_usd: 1_200.0,
            engine_cc: 0,
            fuel_type: FuelType::Electric,
            car_age_years: 2,
        };

        runner
            .run(ChatId(5), vec![Effect::ShowReport(Report::assemble(&inputs, 2025))])
            .await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].markup, Some(telegram_transport::ReplyMarkup::remove()));
    }

    #[tokio::test]
    async fn failed_delivery_does_not_stop_later_effects() {
        let transport = Arc::new(RecordingTransport::failing_for(ChatId(5)));
        let runner = EffectRunner::new(transport.clone(), ChatId(1));

        runner
            .run(
                ChatId(5),
                vec![
                    Effect::Prompt {
                        prompt: Prompt::ChooseAction,
                        keyboard: Keyboard::Actions,
                    },
                    Effect::Prompt {
                        prompt: Prompt::StartOver,
                        keyboard: Keyboard::Keep,
                    },
                ],
            )
            .await;

        assert_eq!(transport.attempts(), 2);
        assert!(transport.sent().is_empty());
    }
}
