use serde::{Deserialize, Serialize};

use super::membership::{DistanceTerm, Fuzzified, ItemCountTerm, WeatherTerm};

/// One row of the knowledge base: an antecedent triple bound to a constant price.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub distance: DistanceTerm,
    pub weather: WeatherTerm,
    pub items: ItemCountTerm,
    pub consequent: f64,
}

impl Rule {
    const fn new(
        distance: DistanceTerm,
        weather: WeatherTerm,
        items: ItemCountTerm,
        consequent: f64,
    ) -> Self {
        Self { distance, weather, items, consequent }
    }

    /// Firing strength: the minimum of the three antecedent degrees.
    pub fn strength(&self, degrees: &Fuzzified) -> f64 {
        f64::min(
            f64::min(degrees.distance(self.distance), degrees.weather(self.weather)),
            degrees.items(self.items),
        )
    }
}

pub const RULE_COUNT: usize = 27;

use DistanceTerm::{Far, Medium, Near};
use ItemCountTerm::{Few, Many, Some as SomeItems};
use WeatherTerm::{Cloudy, Hot, Rain};

/// Distance-major, then weather, then item count. Aggregation sums in this order.
pub static RULE_BASE: [Rule; RULE_COUNT] = [
    Rule::new(Near, Rain, Few, 7_000.0),
    Rule::new(Near, Rain, SomeItems, 8_000.0),
    Rule::new(Near, Rain, Many, 9_000.0),
    Rule::new(Near, Cloudy, Few, 8_500.0),
    Rule::new(Near, Cloudy, SomeItems, 9_500.0),
    Rule::new(Near, Cloudy, Many, 10_500.0),
    Rule::new(Near, Hot, Few, 10_000.0),
    Rule::new(Near, Hot, SomeItems, 11_000.0),
    Rule::new(Near, Hot, Many, 12_000.0),
    Rule::new(Medium, Rain, Few, 9_500.0),
    Rule::new(Medium, Rain, SomeItems, 10_500.0),
    Rule::new(Medium, Rain, Many, 11_500.0),
    Rule::new(Medium, Cloudy, Few, 11_000.0),
    Rule::new(Medium, Cloudy, SomeItems, 12_000.0),
    Rule::new(Medium, Cloudy, Many, 13_000.0),
    Rule::new(Medium, Hot, Few, 12_500.0),
    Rule::new(Medium, Hot, SomeItems, 13_500.0),
    Rule::new(Medium, Hot, Many, 15_000.0),
    Rule::new(Far, Rain, Few, 15_000.0),
    Rule::new(Far, Rain, SomeItems, 17_000.0),
    Rule::new(Far, Rain, Many, 19_000.0),
    Rule::new(Far, Cloudy, Few, 18_000.0),
    Rule::new(Far, Cloudy, SomeItems, 20_000.0),
    Rule::new(Far, Cloudy, Many, 22_000.0),
    Rule::new(Far, Hot, Few, 21_000.0),
    Rule::new(Far, Hot, SomeItems, 23_000.0),
    Rule::new(Far, Hot, Many, 25_000.0),
];

/// Position of a term combination inside [`RULE_BASE`].
pub const fn rule_index(
    distance: DistanceTerm,
    weather: WeatherTerm,
    items: ItemCountTerm,
) -> usize {
    distance.index() * 9 + weather.index() * 3 + items.index()
}

pub fn rule(distance: DistanceTerm, weather: WeatherTerm, items: ItemCountTerm) -> &'static Rule {
    &RULE_BASE[rule_index(distance, weather, items)]
}

pub fn consequent(distance: DistanceTerm, weather: WeatherTerm, items: ItemCountTerm) -> f64 {
    rule(distance, weather, items).consequent
}
