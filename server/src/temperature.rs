pub const UNKNOWN_TEMPERATURE_RANGE: &str = "unknown temperature range";

/// Inclusive temperature bounds in degrees Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: i64,
    pub max: i64,
}

impl TemperatureRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, temp: i64) -> bool {
        temp >= self.min && temp <= self.max
    }
}

// Neighbouring ranges share their boundary values (and 40..=50 overlaps
// entirely); the first matching entry wins.
pub const TEMPERATURE_DESCRIPTIONS: [(TemperatureRange, &str); 6] = [
    (TemperatureRange::new(12, 32), "very cold"),
    (TemperatureRange::new(32, 50), "cold"),
    (TemperatureRange::new(40, 60), "moderate"),
    (TemperatureRange::new(60, 80), "warm"),
    (TemperatureRange::new(80, 95), "hot"),
    (TemperatureRange::new(95, 120), "very hot"),
];

pub fn describe_temperature(temp: i64) -> &'static str {
    TEMPERATURE_DESCRIPTIONS
        .iter()
        .find(|(range, _)| range.contains(temp))
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN_TEMPERATURE_RANGE)
}
