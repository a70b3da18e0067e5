use ongkir_core::fuzzy::{consequent, DistanceTerm, ItemCountTerm, Rule, WeatherTerm, RULE_BASE};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct RuleTable<'a> {
    command: &'static str,
    status: &'static str,
    rules: &'a [Rule],
}

pub fn run(json_output: bool) -> CommandResult {
    if json_output {
        let table = RuleTable { command: "rules", status: "ok", rules: &RULE_BASE };
        return CommandResult::json(&table);
    }

    CommandResult::text(render_table())
}

/// Distance rows, weather column groups, each cell listing few/some/many prices.
fn render_table() -> String {
    let header = format!(
        "{:<8} | {:<22} | {:<22} | {}",
        "jarak",
        WeatherTerm::Rain.label(),
        WeatherTerm::Cloudy.label(),
        WeatherTerm::Hot.label()
    );
    let mut rows = Vec::with_capacity(DistanceTerm::ALL.len());

    for distance in DistanceTerm::ALL {
        let cells: Vec<String> = WeatherTerm::ALL
            .iter()
            .map(|weather| {
                ItemCountTerm::ALL
                    .iter()
                    .map(|items| format!("{:.0}", consequent(distance, *weather, *items)))
                    .collect::<Vec<_>>()
                    .join(" / ")
            })
            .collect();
        rows.push(format!(
            "{:<8} | {:<22} | {:<22} | {}",
            distance.label(),
            cells[0],
            cells[1],
            cells[2]
        ));
    }

    let width = rows.iter().chain(Some(&header)).map(|row| row.chars().count()).max().unwrap_or(0);
    let mut lines = vec![header, "-".repeat(width)];
    lines.extend(rows);
    lines.push(String::new());
    lines.push(format!(
        "cells: barang {} / {} / {}",
        ItemCountTerm::Few.label(),
        ItemCountTerm::Some.label(),
        ItemCountTerm::Many.label()
    ));

    lines.join("\n")
}
