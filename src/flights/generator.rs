//! # Flight Generator
//!
//! Produces a randomized, price-sorted batch of candidate flights for a
//! given route. Each search generates a fresh batch of 4-6 flights; the
//! previous batch is discarded wholesale.

use rand::Rng;

/// An airline in the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct Airline {
    pub name: &'static str,
    /// Two-letter code shown as the airline badge.
    pub code: &'static str,
}

/// Static airline catalog the generator picks from uniformly.
pub const AIRLINES: [Airline; 4] = [
    Airline { name: "SkyLuxe", code: "SL" },
    Airline { name: "AeroJet", code: "AJ" },
    Airline { name: "Nimbus", code: "NI" },
    Airline { name: "RoyalAir", code: "RA" },
];

/// A candidate flight in one results batch.
///
/// Times and duration are pre-formatted display strings; the batch lives
/// only until the next search, so nothing here is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Unique within a generated batch.
    pub id: u32,
    pub airline: &'static str,
    pub airline_code: &'static str,
    pub origin: String,
    pub destination: String,
    /// Departure wall-clock time, "HH:MM".
    pub departs: String,
    /// Arrival wall-clock time, "HH:MM". May wrap past midnight; the display
    /// shows hour and minute only, so no cross-day correction is applied.
    pub arrives: String,
    /// Duration label, "{H}h {M}m" with the minutes suffix omitted when zero.
    pub duration: String,
    /// Base (Economy) price in whole currency units.
    pub base_price: u32,
}

/// Generate a randomized results batch for a route, sorted ascending by
/// base price. Batch length is uniform in [4, 6].
///
/// Per flight: departure hour uniform in [6, 20), minute on a quarter-hour;
/// duration hours uniform in [2, 10), minutes on a quarter-hour;
/// `base_price = 200 + 50 * duration_hours + uniform[0, 100)`.
pub fn generate_flights(origin: &str, destination: &str) -> Vec<Flight> {
    let mut rng = rand::rng();
    let count: u32 = rng.random_range(4..=6);
    let mut flights = Vec::with_capacity(count as usize);

    for id in 0..count {
        let airline = &AIRLINES[rng.random_range(0..AIRLINES.len())];
        let dep_hour: u32 = rng.random_range(6..20);
        let dep_min: u32 = rng.random_range(0..4) * 15;
        let duration_hours: u32 = rng.random_range(2..10);
        let duration_mins: u32 = rng.random_range(0..4) * 15;

        let departs = dep_hour * 60 + dep_min;
        let arrives = departs + duration_hours * 60 + duration_mins;
        let base_price = 200 + 50 * duration_hours + rng.random_range(0..100);

        flights.push(Flight {
            id,
            airline: airline.name,
            airline_code: airline.code,
            origin: origin.to_string(),
            destination: destination.to_string(),
            departs: format_time(departs),
            arrives: format_time(arrives),
            duration: format_duration(duration_hours, duration_mins),
            base_price,
        });
    }

    flights.sort_by_key(|f| f.base_price);
    flights
}

/// Format minutes-since-midnight as "HH:MM", wrapping past midnight.
fn format_time(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60 % 24, total_minutes % 60)
}

/// Format a duration label; the minutes segment is omitted when zero.
fn format_duration(hours: u32, minutes: u32) -> String {
    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_length_in_range() {
        for _ in 0..50 {
            let batch = generate_flights("NYC", "LON");
            assert!((4..=6).contains(&batch.len()), "batch length {}", batch.len());
        }
    }

    #[test]
    fn test_batch_sorted_by_base_price() {
        for _ in 0..50 {
            let batch = generate_flights("NYC", "LON");
            for pair in batch.windows(2) {
                assert!(pair[0].base_price <= pair[1].base_price);
            }
        }
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let batch = generate_flights("NYC", "LON");
        let mut ids: Vec<u32> = batch.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), batch.len());
    }

    #[test]
    fn test_base_price_within_formula_bounds() {
        // 200 + 50*h + r with h in [2, 10) and r in [0, 100)
        for _ in 0..50 {
            for flight in generate_flights("NYC", "LON") {
                assert!((300..750).contains(&flight.base_price), "price {}", flight.base_price);
            }
        }
    }

    #[test]
    fn test_route_endpoints_carried_through() {
        let batch = generate_flights("Paris", "Tokyo");
        for flight in &batch {
            assert_eq!(flight.origin, "Paris");
            assert_eq!(flight.destination, "Tokyo");
        }
    }

    #[test]
    fn test_duration_label_omits_zero_minutes() {
        assert_eq!(format_duration(3, 0), "3h");
        assert_eq!(format_duration(3, 15), "3h 15m");
        assert_eq!(format_duration(9, 45), "9h 45m");
    }

    #[test]
    fn test_time_formatting_wraps_past_midnight() {
        assert_eq!(format_time(6 * 60 + 15), "06:15");
        assert_eq!(format_time(19 * 60 + 45), "19:45");
        // 19:45 departure + 9h30m duration lands at 05:15 next day
        assert_eq!(format_time(19 * 60 + 45 + 9 * 60 + 30), "05:15");
    }
}
