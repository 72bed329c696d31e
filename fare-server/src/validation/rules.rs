//! Static rule tables for itinerary validation.
//!
//! These tables are built once at startup and shared read-only between
//! requests.

use std::collections::{HashMap, HashSet};

use chrono::Duration;

use crate::domain::{Airline, Carrier, City};

/// Minimum flight time for city pairs absent from the duration table.
pub const DEFAULT_MIN_DURATION_MINS: i64 = 60;

/// Route network, flight-time floors, and same-slot exceptions.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    /// Cities each airline serves, as both origin and destination.
    served: HashMap<Airline, HashSet<City>>,

    /// Minimum flight time in minutes, per ordered (origin, destination).
    min_duration_mins: HashMap<(City, City), i64>,

    /// Ordered pairs whose departure and arrival may share a slot.
    same_slot_pairs: HashSet<(City, City)>,
}

impl RuleBook {
    /// Create an empty rule book. No airline serves any city.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule book used in production.
    pub fn standard() -> Self {
        let mut rules = Self::new();

        for airline in Airline::ALL {
            rules.serve(
                airline,
                [
                    City::Delhi,
                    City::Mumbai,
                    City::Bangalore,
                    City::Kolkata,
                    City::Hyderabad,
                    City::Chennai,
                ],
            );
        }

        rules.add_min_duration(City::Delhi, City::Mumbai, 120);
        rules.add_min_duration(City::Delhi, City::Bangalore, 150);
        rules.add_min_duration(City::Mumbai, City::Bangalore, 90);
        rules.add_min_duration(City::Delhi, City::Kolkata, 120);
        rules.add_min_duration(City::Delhi, City::Chennai, 150);
        rules.add_min_duration(City::Mumbai, City::Kolkata, 150);

        rules.allow_same_slot(City::Delhi, City::Mumbai);
        rules.allow_same_slot(City::Delhi, City::Kolkata);
        rules.allow_same_slot(City::Mumbai, City::Bangalore);

        rules
    }

    /// Record cities served by an airline.
    pub fn serve(&mut self, airline: Airline, cities: impl IntoIterator<Item = City>) {
        self.served.entry(airline).or_default().extend(cities);
    }

    /// Set the minimum flight time between two cities.
    ///
    /// Stored in both directions.
    pub fn add_min_duration(&mut self, a: City, b: City, minutes: i64) {
        self.min_duration_mins.insert((a, b), minutes);
        self.min_duration_mins.insert((b, a), minutes);
    }

    /// Allow equal departure and arrival slots between two cities.
    ///
    /// Stored in both directions.
    pub fn allow_same_slot(&mut self, a: City, b: City) {
        self.same_slot_pairs.insert((a, b));
        self.same_slot_pairs.insert((b, a));
    }

    /// Whether the carrier flies between the two cities.
    ///
    /// Unlisted carriers serve nothing.
    pub fn operates(&self, carrier: &Carrier, from: City, to: City) -> bool {
        let Some(airline) = carrier.airline() else {
            return false;
        };
        self.served
            .get(&airline)
            .is_some_and(|cities| cities.contains(&from) && cities.contains(&to))
    }

    /// Minimum flight time from `from` to `to`.
    pub fn min_duration(&self, from: City, to: City) -> Duration {
        let mins = self
            .min_duration_mins
            .get(&(from, to))
            .copied()
            .unwrap_or(DEFAULT_MIN_DURATION_MINS);
        Duration::minutes(mins)
    }

    /// Whether departure and arrival may share a slot on this route.
    pub fn allows_same_slot(&self, from: City, to: City) -> bool {
        self.same_slot_pairs.contains(&(from, to))
    }

    /// Cities served by an airline, in origin code order.
    pub fn cities_served(&self, airline: Airline) -> Vec<City> {
        let mut cities: Vec<City> = self
            .served
            .get(&airline)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        cities.sort();
        cities
    }
}
