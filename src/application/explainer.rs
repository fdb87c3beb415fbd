use crate::domain::{currency_symbol, PricingBreakdown};

/// Renders a breakdown as one paragraph for display or for an agent's prompt context.
///
/// Amounts are shown in US dollars. Output is fully determined by the breakdown.
/// Downstream consumers match on the literal "final total", so that wording must not change.
pub fn describe_team_pricing(breakdown: &PricingBreakdown) -> String {
    describe_team_pricing_in(breakdown, "USD")
}

/// Same paragraph as [`describe_team_pricing`], with amounts prefixed by the
/// symbol of `currency` (an ISO 4217 code such as `"EUR"`).
pub fn describe_team_pricing_in(breakdown: &PricingBreakdown, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    let period = breakdown.billing_interval.period();
    let seat_word = if breakdown.total_seats == 1 {
        "seat"
    } else {
        "seats"
    };

    let lines: Vec<String> = breakdown
        .occupied_lines()
        .map(|line| {
            format!(
                "{} × {} ({}{}/user)",
                line.count, line.display_name, symbol, line.unit_price
            )
        })
        .collect();

    let mut sentences = Vec::with_capacity(4);

    if lines.is_empty() {
        sentences.push(format!("Your team has {} {}.", breakdown.total_seats, seat_word));
    } else {
        sentences.push(format!(
            "Your team has {} {}: {}.",
            breakdown.total_seats,
            seat_word,
            lines.join(", ")
        ));
    }

    sentences.push(format!(
        "The list price before discounts is {}{}.",
        symbol, breakdown.list_subtotal
    ));

    if breakdown.is_discounted() {
        sentences.push(format!(
            "A team discount of {}% saves you {}{} per {}.",
            breakdown.discount_percent.whole_percent(),
            symbol,
            breakdown.discount_amount,
            period
        ));
    } else {
        sentences.push(
            "No team discount applies yet (add more seats to unlock discounts).".to_string(),
        );
    }

    sentences.push(format!(
        "Your final total is {}{} per {}.",
        symbol, breakdown.final_total, period
    ));

    sentences.join(" ")
}
