//! The five readings collected by the form and their validation rules.

use std::fmt;

/// One of the five numeric inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Temperature,
    Co,
    No2,
    Humidity,
    PopDensity,
}

/// Range and message table for a single field.
///
/// Bounds are inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRule {
    pub min: f64,
    pub max: f64,
    pub required_message: &'static str,
    /// Human label used in the form, including the unit.
    pub label: &'static str,
    /// Name used at the start of validation messages.
    pub display_name: &'static str,
    pub below_min_message: &'static str,
    pub above_max_message: &'static str,
}

impl FieldName {
    /// All fields, in form order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Temperature,
        FieldName::Co,
        FieldName::No2,
        FieldName::Humidity,
        FieldName::PopDensity,
    ];

    /// JSON key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Co => "co",
            Self::No2 => "no2",
            Self::Humidity => "humidity",
            Self::PopDensity => "pop_density",
        }
    }

    /// Look up a field by its wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn rule(self) -> &'static FieldRule {
        &FIELD_RULES[self.index()]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

static FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        min: -50.0,
        max: 60.0,
        required_message: "Temperature is required",
        label: "Temperature (°C)",
        display_name: "Temperature",
        below_min_message: "Temperature must be at least -50°C",
        above_max_message: "Temperature cannot exceed 60°C",
    },
    FieldRule {
        min: 0.0,
        max: 100.0,
        required_message: "CO is required",
        label: "CO (ppm)",
        display_name: "CO",
        below_min_message: "CO cannot be negative",
        above_max_message: "CO cannot exceed 100 ppm",
    },
    FieldRule {
        min: 0.0,
        max: 1000.0,
        required_message: "NO2 is required",
        label: "NO2 (ppb)",
        display_name: "NO2",
        below_min_message: "NO2 cannot be negative",
        above_max_message: "NO2 cannot exceed 1000 ppb",
    },
    FieldRule {
        min: 0.0,
        max: 100.0,
        required_message: "Humidity is required",
        label: "Humidity (%)",
        display_name: "Humidity",
        below_min_message: "Humidity cannot be negative",
        above_max_message: "Humidity cannot exceed 100%",
    },
    FieldRule {
        min: 0.0,
        max: 100_000.0,
        required_message: "Population Density is required",
        label: "Population Density (people/km²)",
        display_name: "Population Density",
        below_min_message: "Population Density cannot be negative",
        above_max_message: "Population Density cannot exceed 100,000 people/km²",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_and_follow_form_order() {
        let keys: Vec<_> = FieldName::ALL.iter().map(|field| field.key()).collect();
        assert_eq!(keys, ["temperature", "co", "no2", "humidity", "pop_density"]);
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_key(field.key()), Some(field));
        }
        assert_eq!(FieldName::from_key("pm25"), None);
    }

    #[test]
    fn rules_carry_declared_domains() {
        let domains: Vec<_> = FieldName::ALL
            .iter()
            .map(|field| (field.rule().min, field.rule().max))
            .collect();
        assert_eq!(
            domains,
            [
                (-50.0, 60.0),
                (0.0, 100.0),
                (0.0, 1000.0),
                (0.0, 100.0),
                (0.0, 100_000.0)
            ]
        );
        assert_eq!(
            FieldName::PopDensity.rule().required_message,
            "Population Density is required"
        );
    }
}
