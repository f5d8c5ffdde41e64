// src/domain/rates.rs
//
// Per-kilogram shipping rates.
//
// This table is the single source of truth for pricing. Charge computation
// must go through `rate_per_kg`; the constants are not duplicated anywhere.

use crate::domain::courier::TransportMode;

/// Fixed per-kilogram rate for a transport mode (currency-agnostic unit).
///
/// Total over the enumeration: every mode has a rate, there is no error case.
pub fn rate_per_kg(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Train => 10.0,
        TransportMode::Car => 15.0,
        TransportMode::Flight => 30.0,
        TransportMode::Ship => 8.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table_values() {
        assert_eq!(rate_per_kg(TransportMode::Train), 10.0);
        assert_eq!(rate_per_kg(TransportMode::Car), 15.0);
        assert_eq!(rate_per_kg(TransportMode::Flight), 30.0);
        assert_eq!(rate_per_kg(TransportMode::Ship), 8.0);
    }
}
