use bigdecimal::BigDecimal;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::Level;

pub fn convert_log_level_to_tracing_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO, // Default to INFO if the log level is not recognized
    }
}

/// Stored CO2 values carry at most one decimal place, so the string round
/// trip between the two decimal representations is lossless here.
pub fn bigdecimal_to_decimal(value: &BigDecimal) -> Decimal {
    Decimal::from_str(&value.to_string()).unwrap_or_default()
}

pub fn decimal_to_bigdecimal(value: &Decimal) -> BigDecimal {
    BigDecimal::from_str(&value.to_string()).unwrap_or_default()
}
