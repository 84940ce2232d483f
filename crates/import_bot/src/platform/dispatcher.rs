use std::collections::HashMap;
use std::sync::Arc;

use bot_logging::{bot_debug, bot_warn};
use import_core::labels::{CANCEL_COMMAND, START_COMMAND};
use import_core::{update, Action, Effect, Msg, SessionState};
use telegram_transport::{ChatId, InboundEvent, Transport};
use tokio::task::JoinHandle;

use super::effects::EffectRunner;

pub type YearSource = Arc<dyn Fn() -> i32 + Send + Sync>;

/// Owns every chat's session and feeds inbound events through `update`.
///
/// Sessions are updated in place as events arrive. Outbound messages for a
/// chat run on a spawned task chained behind that chat's previous delivery,
/// so replies keep their order within a chat while a slow send in one chat
/// never holds up another.
pub struct Dispatcher {
    sessions: HashMap<ChatId, SessionState>,
    deliveries: HashMap<ChatId, JoinHandle<()>>,
    transport: Arc<dyn Transport>,
    effects: Arc<EffectRunner>,
    current_year: YearSource,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        effects: EffectRunner,
        current_year: YearSource,
    ) -> Self {
        Self {
            sessions: HashMap::new(),
            deliveries: HashMap::new(),
            transport,
            effects: Arc::new(effects),
            current_year,
        }
    }

    #[cfg(test)]
    pub fn session(&self, chat_id: ChatId) -> Option<&SessionState> {
        self.sessions.get(&chat_id)
    }

    /// Applies one event and schedules its replies. Must run inside a Tokio
    /// runtime.
    pub fn handle(&mut self, event: InboundEvent) {
        let chat_id = event.chat_id();
        let (callback_id, msg) = split_event(event);
        let effects = match msg {
            Some(msg) => self.apply(chat_id, msg),
            None => Vec::new(),
        };
        if callback_id.is_some() || !effects.is_empty() {
            self.deliver(chat_id, callback_id, effects);
        }
    }

    /// Waits for every scheduled delivery to finish.
    pub async fn flush(&mut self) {
        for (chat_id, delivery) in self.deliveries.drain() {
            if let Err(err) = delivery.await {
                bot_warn!("delivery task for chat {} failed: {}", chat_id, err);
            }
        }
    }

    fn apply(&mut self, chat_id: ChatId, msg: Msg) -> Vec<Effect> {
        bot_debug!("chat {} -> {}", chat_id, msg_kind(&msg));

        let session = self.sessions.remove(&chat_id);
        let before = session.as_ref().map(SessionState::step);
        let (next, effects) = update(session, msg, (self.current_year)());
        let after = next.as_ref().map(SessionState::step);
        if before != after {
            bot_debug!("chat {} step {:?} -> {:?}", chat_id, before, after);
        }
        if let Some(state) = next {
            self.sessions.insert(chat_id, state);
        }
        effects
    }

    fn deliver(&mut self, chat_id: ChatId, callback_id: Option<String>, effects: Vec<Effect>) {
        self.deliveries.retain(|_, delivery| !delivery.is_finished());

        let previous = self.deliveries.remove(&chat_id);
        let transport = Arc::clone(&self.transport);
        let runner = Arc::clone(&self.effects);
        let delivery = tokio::spawn(async move {
            if let Some(previous) = previous {
                if let Err(err) = previous.await {
                    bot_warn!("delivery task for chat {} failed: {}", chat_id, err);
                }
            }
            if let Some(callback_id) = callback_id {
                if let Err(err) = transport.answer_callback(&callback_id).await {
                    bot_warn!("callback for chat {} not answered: {}", chat_id, err);
                }
            }
            runner.run(chat_id, effects).await;
        });
        self.deliveries.insert(chat_id, delivery);
    }
}

/// Splits an event into the callback to acknowledge, if any, and the message
/// for `update`, if any.
fn split_event(event: InboundEvent) -> (Option<String>, Option<Msg>) {
    match event {
        InboundEvent::Text { text, .. } => (None, Some(text_to_msg(text))),
        InboundEvent::Selection {
            chat_id,
            callback_id,
            data,
        } => {
            let action = Action::from_callback_data(&data);
            if action.is_none() {
                bot_debug!("chat {} sent unknown callback data {:?}", chat_id, data);
            }
            (Some(callback_id), action.map(Msg::Action))
        }
        InboundEvent::Contact {
            phone,
            display_name,
            ..
        } => (
            None,
            Some(Msg::ContactShared {
                phone,
                display_name,
            }),
        ),
    }
}

/// Recognises `/start` and `/cancel`, including the `/start@BotName` form
/// used in group chats.
fn text_to_msg(text: String) -> Msg {
    let command = text
        .split_whitespace()
        .next()
        .map(|word| word.split('@').next().unwrap_or(word));
    match command {
        Some(START_COMMAND) => Msg::Start,
        Some(CANCEL_COMMAND) => Msg::Cancel,
        _ => Msg::Text(text),
    }
}

fn msg_kind(msg: &Msg) -> &'static str {
    match msg {
        Msg::Start => "start",
        Msg::Text(_) => "text",
        Msg::Action(Action::NewCalculation) => "action:restart",
        Msg::Action(Action::RequestContact) => "action:request",
        Msg::ContactShared { .. } => "contact",
        Msg::Cancel => "cancel",
    }
}
