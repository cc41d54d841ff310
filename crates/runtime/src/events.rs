#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SessionEvent {
    Connected {
        session_id: u64,
    },
    PriceTicked {
        tick: u64,
        timestamp_ms: i64,
        price: f64,
    },
    Bought {
        tick: u64,
        amount_usd: f64,
        price: f64,
        fee: f64,
        btc_amount: f64,
        message: String,
    },
    Sold {
        tick: u64,
        final_value: f64,
        scenario: &'static str,
        amount: f64,
        message: String,
    },
    RoundReset {
        tick: u64,
    },
    PayoutReady {
        tick: u64,
        final_value: f64,
        profit: f64,
        transaction_fee: f64,
        net_amount: f64,
        mail_recipient: &'static str,
        mail_subject: &'static str,
        mail_body: String,
    },
    ActionIgnored {
        tick: u64,
        action: &'static str,
    },
}

impl SessionEvent {
    pub fn connected(session_id: u64) -> Self {
        Self::Connected { session_id }
    }

    pub fn ignored(tick: u64, action: &'static str) -> Self {
        Self::ActionIgnored { tick, action }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionEvent;

    #[test]
    fn events_serialize_with_a_snake_case_tag() {
        let event = SessionEvent::PriceTicked {
            tick: 3,
            timestamp_ms: 1_700_000_000_000,
            price: 91_250.5,
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "price_ticked");
        assert_eq!(json["tick"], 3);
        assert_eq!(json["price"], 91_250.5);
    }

    #[test]
    fn ignored_actions_name_the_rejected_action() {
        let json = serde_json::to_value(SessionEvent::ignored(9, "sell")).unwrap();

        assert_eq!(json["event_type"], "action_ignored");
        assert_eq!(json["action"], "sell");
    }
}
