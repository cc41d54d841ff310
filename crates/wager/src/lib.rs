pub mod messages;
pub mod payout;
pub mod round;

pub use payout::{payout_summary, PayoutSummary, BIG_PROFIT_FEE_THRESHOLD};
pub use round::{
    BuyReceipt, RoundState, SaleOutcome, Scenario, BUY_FEE, LOAN, SMALL_PROFIT_CEILING,
};
