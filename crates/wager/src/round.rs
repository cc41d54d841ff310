pub const LOAN: f64 = 1_000.0;
pub const BUY_FEE: f64 = 20.0;
pub const SMALL_PROFIT_CEILING: f64 = 1_025.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Loss,
    SmallProfit,
    BigProfit,
}

impl Scenario {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loss => "loss",
            Self::SmallProfit => "small_profit",
            Self::BigProfit => "big_profit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoundState {
    #[default]
    Idle,
    Holding {
        btc_amount: f64,
        entry_price: f64,
    },
    Finished {
        final_value: f64,
        scenario: Scenario,
        entry_price: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyReceipt {
    pub amount_usd: f64,
    pub price: f64,
    pub fee: f64,
    pub btc_amount: f64,
}

/// `amount` is the scenario-specific figure: the shortfall owed on a loss,
/// the profit won on a small profit, or the displayed transaction fee on a
/// big profit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleOutcome {
    pub final_value: f64,
    pub scenario: Scenario,
    pub amount: f64,
}

impl RoundState {
    /// Transitions `Idle -> Holding` at the given price. Any other phase, or
    /// an invalid price, leaves the state untouched and returns `None`.
    pub fn buy(&mut self, price: f64) -> Option<BuyReceipt> {
        if !matches!(self, Self::Idle) || !is_valid_price(price) {
            return None;
        }

        let amount_usd = LOAN - BUY_FEE;
        let btc_amount = amount_usd / price;
        *self = Self::Holding {
            btc_amount,
            entry_price: price,
        };

        Some(BuyReceipt {
            amount_usd,
            price,
            fee: BUY_FEE,
            btc_amount,
        })
    }

    /// Transitions `Holding -> Finished` at the given price, classifying the
    /// outcome. No-op (`None`) outside `Holding` or for an invalid price.
    pub fn sell(&mut self, price: f64) -> Option<SaleOutcome> {
        let (btc_amount, entry_price) = match *self {
            Self::Holding {
                btc_amount,
                entry_price,
            } if btc_amount > 0.0 => (btc_amount, entry_price),
            _ => return None,
        };
        if !is_valid_price(price) {
            return None;
        }

        let final_value = btc_amount * price;
        let (scenario, amount) = if final_value < LOAN {
            (Scenario::Loss, LOAN - final_value)
        } else if final_value <= SMALL_PROFIT_CEILING {
            (Scenario::SmallProfit, final_value - LOAN)
        } else {
            let profit = final_value - LOAN;
            (
                Scenario::BigProfit,
                (profit - crate::payout::BIG_PROFIT_FEE_THRESHOLD).max(0.0),
            )
        };

        *self = Self::Finished {
            final_value,
            scenario,
            entry_price,
        };

        Some(SaleOutcome {
            final_value,
            scenario,
            amount,
        })
    }

    /// Always returns to `Idle`, whatever the current phase. The price signal
    /// is a separate lifecycle and is unaffected.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn entry_price(&self) -> Option<f64> {
        match *self {
            Self::Idle => None,
            Self::Holding { entry_price, .. } | Self::Finished { entry_price, .. } => {
                Some(entry_price)
            }
        }
    }

    pub fn btc_amount(&self) -> f64 {
        match *self {
            Self::Holding { btc_amount, .. } => btc_amount,
            _ => 0.0,
        }
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
