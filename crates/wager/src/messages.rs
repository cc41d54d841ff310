use crate::payout::PayoutSummary;
use crate::round::{BuyReceipt, SaleOutcome, Scenario};

pub const PAYOUT_MAIL_RECIPIENT: &str = "banker@example.com";
pub const PAYOUT_MAIL_SUBJECT: &str = "Bitcoin minigame - payout summary";

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_btc(value: f64) -> String {
    format!("{value:.6}")
}

pub fn buy_message(receipt: &BuyReceipt) -> String {
    format!(
        "Bought ${} of BTC at ${} with a ${} transaction fee. You now have {} BTC in your wallet.",
        format_money(receipt.amount_usd),
        format_money(receipt.price),
        format_money(receipt.fee),
        format_btc(receipt.btc_amount),
    )
}

pub fn sale_message(outcome: &SaleOutcome) -> String {
    match outcome.scenario {
        Scenario::Loss => format!(
            "You lost some of my money. Please pay me ${} or try again.",
            format_money(outcome.amount),
        ),
        Scenario::SmallProfit => format!(
            "You won ${}. Pay out now or try again?",
            format_money(outcome.amount),
        ),
        Scenario::BigProfit => format!(
            "Big winner! Final value: ${}. Transaction fee: ${}.",
            format_money(outcome.final_value),
            format_money(outcome.amount),
        ),
    }
}

pub fn payout_mail_body(summary: &PayoutSummary) -> String {
    format!(
        "Hey,\n\n\
         Here's the trade result:\n\n\
         Final value: ${}\n\
         Profit: ${}\n\
         Transaction fee: ${}\n\
         Net amount owed: ${}\n\n\
         Time to pay up!",
        format_money(summary.final_value),
        format_money(summary.profit),
        format_money(summary.transaction_fee),
        format_money(summary.net_amount),
    )
}
