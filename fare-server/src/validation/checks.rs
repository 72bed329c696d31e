//! Individual validation checks.
//!
//! Each check returns `Err(reason)` with the caller-facing message when
//! the itinerary breaks its rule.

use chrono::{Days, Duration, NaiveDate};

use crate::domain::{Carrier, City, Itinerary, TimeSlot, parse_departure_date};

use super::rules::RuleBook;

/// How far ahead a departure may be booked.
pub const BOOKING_HORIZON_DAYS: u64 = 180;

/// Origin and destination must differ.
pub fn check_distinct_cities(source: City, destination: City) -> Result<(), String> {
    if source == destination {
        return Err("Source and destination cities cannot be the same".to_string());
    }
    Ok(())
}

/// The departure date must parse and fall within `[today, today + 180 days]`.
pub fn check_departure_date(text: &str, today: NaiveDate) -> Result<(), String> {
    let departure = match parse_departure_date(text) {
        Ok(date) => date,
        Err(_) => return Err("Invalid departure date format".to_string()),
    };

    if departure < today {
        return Err("Departure date cannot be in the past".to_string());
    }

    let latest = today
        .checked_add_days(Days::new(BOOKING_HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX);
    if departure > latest {
        return Err("Departure date cannot be more than 6 months in advance".to_string());
    }

    Ok(())
}

/// Arrival must follow departure by at least the route's minimum flight time.
///
/// Slot distance is measured forwards with an overnight wrap and costed
/// at four hours per slot. Equal slots are only accepted on routes the
/// rule book lists as same-slot exceptions.
pub fn check_time_sequence(
    rules: &RuleBook,
    departure: TimeSlot,
    arrival: TimeSlot,
    source: City,
    destination: City,
) -> Result<(), String> {
    if departure == arrival {
        if rules.allows_same_slot(source, destination) {
            return Ok(());
        }
        return Err("Arrival time cannot be the same as departure time for this route".to_string());
    }

    let min_duration = rules.min_duration(source, destination);
    if departure.approx_duration_until(arrival) < min_duration {
        return Err(format!(
            "Flight duration must be at least {} hours for this route",
            format_hours(min_duration)
        ));
    }

    Ok(())
}

/// The carrier must serve both cities.
pub fn check_route(
    rules: &RuleBook,
    carrier: &Carrier,
    source: City,
    destination: City,
) -> Result<(), String> {
    if !rules.operates(carrier, source, destination) {
        return Err(format!(
            "{carrier} does not operate on the route {source} to {destination}"
        ));
    }
    Ok(())
}

/// Every required field must be present and non-empty.
pub fn check_required_fields(itinerary: &Itinerary) -> Result<(), String> {
    match itinerary.first_missing() {
        Some(field) => Err(format!("Missing required field: {field}")),
        None => Ok(()),
    }
}

/// Hours as a plain number: `2`, `2.5`, `1.5`.
fn format_hours(duration: Duration) -> String {
    let mins = duration.num_minutes();
    if mins % 60 == 0 {
        (mins / 60).to_string()
    } else {
        (mins as f64 / 60.0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_whole_and_fractional_hours() {
        assert_eq!(format_hours(Duration::hours(2)), "2");
        assert_eq!(format_hours(Duration::minutes(150)), "2.5");
        assert_eq!(format_hours(Duration::minutes(90)), "1.5");
        assert_eq!(format_hours(Duration::hours(1)), "1");
    }

    #[test]
    fn distinct_cities() {
        assert!(check_distinct_cities(City::Delhi, City::Mumbai).is_ok());
        assert_eq!(
            check_distinct_cities(City::Chennai, City::Chennai),
            Err("Source and destination cities cannot be the same".to_string())
        );
    }

    #[test]
    fn duration_floor_message_uses_route_minimum() {
        let mut rules = RuleBook::new();
        rules.add_min_duration(City::Delhi, City::Chennai, 330);

        let err = check_time_sequence(
            &rules,
            TimeSlot::Morning,
            TimeSlot::Afternoon,
            City::Delhi,
            City::Chennai,
        )
        .unwrap_err();
        assert_eq!(
            err,
            "Flight duration must be at least 5.5 hours for this route"
        );

        // Two slots is eight hours, which clears the floor
        assert!(
            check_time_sequence(
                &rules,
                TimeSlot::Morning,
                TimeSlot::Evening,
                City::Delhi,
                City::Chennai,
            )
            .is_ok()
        );
    }

    #[test]
    fn overnight_wrap_counts_forward() {
        let mut rules = RuleBook::new();
        rules.add_min_duration(City::Mumbai, City::Kolkata, 600);

        // Late_Night -> Early_Morning is one slot: 4h
        assert!(
            check_time_sequence(
                &rules,
                TimeSlot::LateNight,
                TimeSlot::EarlyMorning,
                City::Mumbai,
                City::Kolkata,
            )
            .is_err()
        );

        // Evening -> Morning is four slots: 16h
        assert!(
            check_time_sequence(
                &rules,
                TimeSlot::Evening,
                TimeSlot::Morning,
                City::Mumbai,
                City::Kolkata,
            )
            .is_ok()
        );
    }

    #[test]
    fn route_message_names_carrier_and_cities() {
        let rules = RuleBook::new();
        let carrier = Carrier::Unlisted("Jet_Airways".into());
        assert_eq!(
            check_route(&rules, &carrier, City::Delhi, City::Kolkata),
            Err("Jet_Airways does not operate on the route Delhi to Kolkata".to_string())
        );
    }
}
