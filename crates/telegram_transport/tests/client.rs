use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use telegram_transport::{
    BotSettings, ChatId, FailureKind, InboundEvent, KeyboardButton, ReplyMarkup, TelegramClient,
    Transport,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "123:TEST";

fn client_for(server: &MockServer) -> TelegramClient {
    let settings = BotSettings {
        api_base: server.uri(),
        poll_timeout: Duration::from_secs(0),
        request_margin: Duration::from_secs(2),
        ..BotSettings::new(TOKEN)
    };
    TelegramClient::new(settings).expect("client")
}

#[tokio::test]
async fn get_updates_decodes_messages_and_callbacks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .and(body_partial_json(json!({
            "offset": 41,
            "allowed_updates": ["message", "callback_query"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": [
                {
                    "update_id": 41,
                    "message": {
                        "message_id": 1,
                        "date": 0,
                        "chat": { "id": 77, "type": "private" },
                        "from": { "id": 77, "is_bot": false, "first_name": "Taras" },
                        "text": "/start"
                    }
                },
                {
                    "update_id": 42,
                    "callback_query": {
                        "id": "cb-1",
                        "chat_instance": "x",
                        "from": { "id": 77, "is_bot": false, "first_name": "Taras" },
                        "message": {
                            "message_id": 9,
                            "date": 0,
                            "chat": { "id": 77, "type": "private" }
                        },
                        "data": "restart"
                    }
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updates = client.get_updates(Some(41)).await.expect("updates");
    let ids: Vec<i64> = updates.iter().map(|update| update.update_id).collect();
    assert_eq!(ids, vec![41, 42]);

    let events: Vec<InboundEvent> = updates.into_iter().filter_map(|u| u.into_event()).collect();
    assert_eq!(
        events,
        vec![
            InboundEvent::Text {
                chat_id: ChatId(77),
                text: "/start".to_string(),
            },
            InboundEvent::Selection {
                chat_id: ChatId(77),
                callback_id: "cb-1".to_string(),
                data: "restart".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn send_message_serializes_keyboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(body_partial_json(json!({
            "chat_id": 5,
            "text": "hello",
            "reply_markup": {
                "keyboard": [[{ "text": "📞 Share", "request_contact": true }], [{ "text": "❌" }]],
                "resize_keyboard": true,
                "one_time_keyboard": true
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 3, "date": 0, "chat": { "id": 5, "type": "private" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let markup = ReplyMarkup::keyboard(
        vec![
            vec![KeyboardButton::request_contact("📞 Share")],
            vec![KeyboardButton::text("❌")],
        ],
        true,
    );
    let client = client_for(&server);
    client
        .send_message(ChatId(5), "hello", Some(&markup))
        .await
        .expect("sent");
}

#[tokio::test]
async fn api_errors_carry_code_and_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send_message(ChatId(5), "hello", None)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::Api {
            error_code: Some(403)
        }
    );
    assert_eq!(err.message, "Forbidden: bot was blocked by the user");
}

#[tokio::test]
async fn non_json_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/answerCallbackQuery")))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.answer_callback("cb-1").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(502));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_updates(None).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({ "ok": true, "result": [] })),
        )
        .mount(&server)
        .await;

    let settings = BotSettings {
        api_base: server.uri(),
        poll_timeout: Duration::from_secs(0),
        request_margin: Duration::from_millis(50),
        ..BotSettings::new(TOKEN)
    };
    let client = TelegramClient::new(settings).expect("client");
    let err = client.get_updates(None).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert!(!err.message.contains(TOKEN));
}

#[test]
fn debug_output_hides_the_token() {
    let settings = BotSettings::new(TOKEN);
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains(TOKEN));
    assert!(rendered.contains("<redacted>"));
}
