use serde::{Serialize, Serializer};

/// Volume discount rate stored in basis points (1/100 of a percent).
///
/// Serializes as a fraction (`0.1` for 10%) to match what billing consumers expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate(u32);

impl DiscountRate {
    pub const SCALE: u32 = 10_000;
    pub const NONE: DiscountRate = DiscountRate(0);

    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    pub const fn bps(self) -> u32 {
        self.0
    }

    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }

    /// Percentage with the fractional part dropped (2500 bps -> 25).
    pub fn whole_percent(self) -> u32 {
        self.0 / 100
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Serialize for DiscountRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_fraction())
    }
}

/// A seat-count threshold and the rate it unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumeDiscount {
    pub min_seats: u32,
    pub rate: DiscountRate,
}

/// Volume discount schedule, highest threshold first.
pub const VOLUME_DISCOUNTS: [VolumeDiscount; 3] = [
    VolumeDiscount {
        min_seats: 20,
        rate: DiscountRate::from_bps(2500),
    },
    VolumeDiscount {
        min_seats: 10,
        rate: DiscountRate::from_bps(2000),
    },
    VolumeDiscount {
        min_seats: 5,
        rate: DiscountRate::from_bps(1000),
    },
];

/// Rate for the highest threshold `total_seats` meets.
///
/// Thresholds apply to seats summed across every tier.
pub fn volume_discount(total_seats: u32) -> DiscountRate {
    VOLUME_DISCOUNTS
        .iter()
        .find(|d| total_seats >= d.min_seats)
        .map(|d| d.rate)
        .unwrap_or(DiscountRate::NONE)
}

/// How far a team is from its next discount step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextDiscount {
    pub seats_needed: u32,
    pub rate: DiscountRate,
}

/// `None` once the top threshold is reached.
pub fn next_discount(total_seats: u32) -> Option<NextDiscount> {
    VOLUME_DISCOUNTS
        .iter()
        .rev()
        .find(|d| d.min_seats > total_seats)
        .map(|d| NextDiscount {
            seats_needed: d.min_seats - total_seats,
            rate: d.rate,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_apply_at_exact_boundaries() {
        let cases = [
            (0, 0),
            (4, 0),
            (5, 1000),
            (9, 1000),
            (10, 2000),
            (19, 2000),
            (20, 2500),
            (500, 2500),
        ];
        for (seats, bps) in cases {
            assert_eq!(volume_discount(seats).bps(), bps, "seats = {}", seats);
        }
    }

    #[test]
    fn discount_never_regresses() {
        let mut previous = DiscountRate::NONE;
        for seats in 0..=100 {
            let rate = volume_discount(seats);
            assert!(rate >= previous, "discount dropped at {} seats", seats);
            previous = rate;
        }
    }

    #[test]
    fn next_discount_counts_remaining_seats() {
        assert_eq!(
            next_discount(0),
            Some(NextDiscount {
                seats_needed: 5,
                rate: DiscountRate::from_bps(1000),
            })
        );
        assert_eq!(next_discount(7).map(|n| n.seats_needed), Some(3));
        assert_eq!(next_discount(10).map(|n| n.rate.whole_percent()), Some(25));
        assert_eq!(next_discount(20), None);
    }

    #[test]
    fn rate_conversions() {
        let rate = DiscountRate::from_bps(2500);
        assert_eq!(rate.whole_percent(), 25);
        assert!((rate.as_fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(serde_json::to_string(&rate).unwrap(), "0.25");
        assert!(DiscountRate::NONE.is_zero());
    }
}
