/// Table key used when a webhook names no event, or one we don't know.
pub const DEFAULT_EVENT: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSound {
    pub sound: &'static str,
    pub message: &'static str,
}

const CASH_REGISTER: &str = "cash-register.mp3";

static EVENT_SOUNDS: &[(&str, EventSound)] = &[
    ("sale", EventSound { sound: CASH_REGISTER, message: "Cha-ching! New sale!" }),
    ("new_sale", EventSound { sound: CASH_REGISTER, message: "Cha-ching! New sale!" }),
    ("payment", EventSound { sound: CASH_REGISTER, message: "Payment received!" }),
    (
        "stripe.payment_intent.succeeded",
        EventSound { sound: CASH_REGISTER, message: "Stripe payment received!" },
    ),
    (
        "stripe.charge.succeeded",
        EventSound { sound: CASH_REGISTER, message: "Stripe charge succeeded!" },
    ),
    ("shopify.orders.create", EventSound { sound: CASH_REGISTER, message: "New Shopify order!" }),
    ("new_order", FIXED_SOUND),
    ("new_lead", EventSound { sound: "new-lead.mp3", message: "New lead received!" }),
    ("lead", EventSound { sound: "new-lead.mp3", message: "New lead received!" }),
    ("form_submission", EventSound { sound: "form-submit.mp3", message: "New form submission!" }),
    ("form", EventSound { sound: "form-submit.mp3", message: "New form submission!" }),
    ("doorbell", EventSound { sound: "doorbell.mp3", message: "Someone is at the door!" }),
    (DEFAULT_EVENT, DEFAULT_SOUND),
];

pub const DEFAULT_SOUND: EventSound = EventSound {
    sound: "notification.mp3",
    message: "You have a new notification",
};

/// The single notification used when the speaker runs in fixed mode.
pub const FIXED_SOUND: EventSound = EventSound {
    sound: "new-order.mp3",
    message: "You have a new order",
};

/// Exact-match lookup; no prefix or case folding.
pub fn lookup(event: &str) -> Option<&'static EventSound> {
    EVENT_SOUNDS
        .iter()
        .find(|(key, _)| *key == event)
        .map(|(_, sound)| sound)
}

/// Lookup that falls back to the default entry.
pub fn sound_for(event: &str) -> &'static EventSound {
    lookup(event).unwrap_or(&DEFAULT_SOUND)
}

pub fn known_events() -> impl Iterator<Item = (&'static str, &'static EventSound)> {
    EVENT_SOUNDS.iter().map(|(key, sound)| (*key, sound))
}
