use pretty_assertions::assert_eq;
use serde_json::json;
use telegram_transport::{ChatId, InboundEvent, Update};

fn parse(value: serde_json::Value) -> Update {
    serde_json::from_value(value).expect("valid update")
}

#[test]
fn contact_uses_sender_name() {
    let update = parse(json!({
        "update_id": 1,
        "message": {
            "message_id": 4,
            "date": 0,
            "chat": { "id": 10, "type": "private" },
            "from": { "id": 10, "is_bot": false, "first_name": "Olena", "last_name": "K" },
            "contact": { "phone_number": "+380501234567", "first_name": "Mom" }
        }
    }));

    assert_eq!(
        update.into_event(),
        Some(InboundEvent::Contact {
            chat_id: ChatId(10),
            phone: "+380501234567".to_string(),
            display_name: "Olena K".to_string(),
        })
    );
}

#[test]
fn contact_without_sender_falls_back_to_contact_name() {
    let update = parse(json!({
        "update_id": 1,
        "message": {
            "chat": { "id": 10 },
            "contact": { "phone_number": "+1", "first_name": "Ann", "last_name": "Lee" }
        }
    }));

    let event = update.into_event().expect("event");
    assert_eq!(
        event,
        InboundEvent::Contact {
            chat_id: ChatId(10),
            phone: "+1".to_string(),
            display_name: "Ann Lee".to_string(),
        }
    );
    assert_eq!(event.chat_id(), ChatId(10));
}

#[test]
fn callback_without_message_uses_sender_id() {
    let update = parse(json!({
        "update_id": 2,
        "callback_query": {
            "id": "q",
            "from": { "id": 99, "first_name": "B" }
        }
    }));

    assert_eq!(
        update.into_event(),
        Some(InboundEvent::Selection {
            chat_id: ChatId(99),
            callback_id: "q".to_string(),
            data: String::new(),
        })
    );
}

#[test]
fn unsupported_updates_are_skipped() {
    let sticker = parse(json!({
        "update_id": 3,
        "message": { "chat": { "id": 1 }, "sticker": { "file_id": "x" } }
    }));
    assert_eq!(sticker.into_event(), None);

    let edited = parse(json!({ "update_id": 4, "edited_message": { "chat": { "id": 1 } } }));
    assert_eq!(edited.into_event(), None);
}
