use crate::round::{RoundState, LOAN};

pub const BIG_PROFIT_FEE_THRESHOLD: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutSummary {
    pub final_value: f64,
    pub profit: f64,
    pub transaction_fee: f64,
    pub net_amount: f64,
}

/// Computes the payout figures for a finished round. Returns `None` in any
/// other phase; out-of-order payout requests are ignored, not errors.
pub fn payout_summary(state: &RoundState) -> Option<PayoutSummary> {
    let final_value = match *state {
        RoundState::Finished { final_value, .. } => final_value,
        _ => return None,
    };

    let profit = final_value - LOAN;
    let transaction_fee = if profit > BIG_PROFIT_FEE_THRESHOLD {
        profit - BIG_PROFIT_FEE_THRESHOLD
    } else {
        0.0
    };
    let net_amount = (profit - transaction_fee).max(0.0);

    Some(PayoutSummary {
        final_value,
        profit,
        transaction_fee,
        net_amount,
    })
}
