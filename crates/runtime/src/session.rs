use price_sim::{PriceGenerator, PriceHistory, PriceSample, TickerConfig};
use wager::messages;
use wager::{payout_summary, RoundState};

use crate::events::SessionEvent;

/// One player's game: a price signal, its trailing window, and the current
/// round. All mutation goes through `&mut self`, so a session driven by a
/// single task applies ticks and actions strictly in arrival order.
pub struct GameSession {
    generator: PriceGenerator,
    history: PriceHistory,
    round: RoundState,
    tick: u64,
}

impl GameSession {
    pub fn new(seed: u64, config: TickerConfig) -> Self {
        Self::with_start_price(seed, config.target, config)
    }

    pub fn with_start_price(seed: u64, start_price: f64, config: TickerConfig) -> Self {
        Self {
            generator: PriceGenerator::new(seed, start_price, config),
            history: PriceHistory::new(config.history_cap),
            round: RoundState::default(),
            tick: 0,
        }
    }

    pub fn price(&self) -> f64 {
        self.generator.price()
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn step_once(&mut self, now_ms: i64) -> SessionEvent {
        self.tick += 1;
        let price = self.generator.tick();
        self.history.push(PriceSample {
            timestamp_ms: now_ms,
            price,
        });

        SessionEvent::PriceTicked {
            tick: self.tick,
            timestamp_ms: now_ms,
            price,
        }
    }

    pub fn buy(&mut self) -> SessionEvent {
        match self.round.buy(self.generator.price()) {
            Some(receipt) => SessionEvent::Bought {
                tick: self.tick,
                amount_usd: receipt.amount_usd,
                price: receipt.price,
                fee: receipt.fee,
                btc_amount: receipt.btc_amount,
                message: messages::buy_message(&receipt),
            },
            None => SessionEvent::ignored(self.tick, "buy"),
        }
    }

    pub fn sell(&mut self) -> SessionEvent {
        match self.round.sell(self.generator.price()) {
            Some(outcome) => SessionEvent::Sold {
                tick: self.tick,
                final_value: outcome.final_value,
                scenario: outcome.scenario.as_str(),
                amount: outcome.amount,
                message: messages::sale_message(&outcome),
            },
            None => SessionEvent::ignored(self.tick, "sell"),
        }
    }

    pub fn reset(&mut self) -> SessionEvent {
        self.round.reset();

        SessionEvent::RoundReset { tick: self.tick }
    }

    pub fn payout(&self) -> SessionEvent {
        match payout_summary(&self.round) {
            Some(summary) => SessionEvent::PayoutReady {
                tick: self.tick,
                final_value: summary.final_value,
                profit: summary.profit,
                transaction_fee: summary.transaction_fee,
                net_amount: summary.net_amount,
                mail_recipient: messages::PAYOUT_MAIL_RECIPIENT,
                mail_subject: messages::PAYOUT_MAIL_SUBJECT,
                mail_body: messages::payout_mail_body(&summary),
            },
            None => SessionEvent::ignored(self.tick, "payout"),
        }
    }
}
