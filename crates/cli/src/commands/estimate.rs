use anyhow::{Context, Result};
use ongkir_core::config::AppConfig;
use ongkir_core::fuzzy::RuleFiring;
use ongkir_core::{
    ApplicationError, DeliveryInput, DeliveryPricingEngine, Estimate, ExplainedEstimate,
    SugenoPricingEngine,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::EstimateArgs;

const COMMAND: &str = "estimate";

#[derive(Debug, Serialize)]
struct EstimateOutcome<'a> {
    command: &'static str,
    status: &'static str,
    input: DeliveryInput,
    estimate: Estimate,
    display_price: String,
    fallback_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fired_rules: Option<Vec<&'a RuleFiring>>,
}

pub fn run(config: &AppConfig, args: &EstimateArgs) -> CommandResult {
    let input = DeliveryInput::new(args.distance, args.temperature, args.items);

    if let Err(error) = validate(config, &input) {
        tracing::warn!(
            event_name = "cli.estimate.rejected",
            error_class = error.error_class(),
            "estimate input rejected"
        );
        return CommandResult::failure(COMMAND, error.error_class(), error.to_string(), 3);
    }

    let explained = SugenoPricingEngine.explain(&input);
    let symbol = &config.display.currency_symbol;
    let display_price = match format_price(symbol, explained.estimate.price) {
        Ok(display_price) => display_price,
        Err(error) => {
            return CommandResult::failure(COMMAND, "render", format!("{error:#}"), 4);
        }
    };

    tracing::info!(
        event_name = "cli.estimate.completed",
        price = explained.estimate.price,
        tier = explained.estimate.tier.label(),
        weather = explained.estimate.weather.label(),
        fallback_used = explained.trace.fallback_used,
        "delivery price estimated"
    );

    if args.json {
        let outcome = EstimateOutcome {
            command: COMMAND,
            status: "ok",
            input,
            estimate: explained.estimate,
            display_price,
            fallback_used: explained.trace.fallback_used,
            fired_rules: args.explain.then(|| explained.trace.fired().collect()),
        };
        return CommandResult::json(&outcome);
    }

    CommandResult::text(render_human(symbol, &input, &explained, &display_price, args.explain))
}

fn validate(config: &AppConfig, input: &DeliveryInput) -> Result<(), ApplicationError> {
    input.check_finite()?;
    if config.input.enforce_operating_range {
        input.check_operating_range()?;
    }
    Ok(())
}

fn render_human(
    symbol: &str,
    input: &DeliveryInput,
    explained: &ExplainedEstimate,
    display_price: &str,
    explain: bool,
) -> String {
    let estimate = &explained.estimate;
    let mut lines = vec![
        format!("Jarak         : {:.1} km", input.distance_km),
        format!("Suhu          : {:.1} °C ({})", input.temperature_c, estimate.weather),
        format!("Barang        : {:.1} item", input.items),
        format!("Harga layanan : {display_price}"),
        format!("Kategori      : {}", estimate.tier),
    ];

    if explain {
        lines.push(String::new());
        if explained.trace.fallback_used {
            lines.push("Tidak ada aturan aktif; harga cadangan dipakai.".to_string());
        } else {
            lines.push("Aturan aktif:".to_string());
            for firing in explained.trace.fired() {
                let consequent = format_price(symbol, firing.rule.consequent)
                    .unwrap_or_else(|_| firing.rule.consequent.to_string());
                lines.push(format!(
                    "  - jarak {}, cuaca {}, barang {}: kekuatan {:.4} -> {consequent}",
                    firing.rule.distance.label(),
                    firing.rule.weather.label(),
                    firing.rule.items.label(),
                    firing.strength,
                ));
            }
        }
    }

    lines.join("\n")
}

/// Whole-currency amount with comma thousands separators, e.g. `Rp12,400`.
pub fn format_price(symbol: &str, price: f64) -> Result<String> {
    let amount = Decimal::from_f64_retain(price)
        .with_context(|| format!("price {price} cannot be represented as a decimal"))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    let digits = amount.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    Ok(format!("{sign}{symbol}{grouped}"))
}
