//! Numeric stat records and their sparse counterparts.
//!
//! Every record has a fixed key set and a sparse twin holding an optional
//! value per key. The sparse form is used both as an additive delta (scenario
//! effects) and as a minimum-threshold gate (option requirements).
//!
//! Unknown keys in serialized sparse values are ignored on read, so content
//! written for a newer stat layout still loads.

use serde::{Deserialize, Serialize};

use super::keys::{AttributeKey, LifeStatusKey, PersonalityTrait};
use crate::common::floor_at_zero;

macro_rules! define_stat_record {
    (
        $(#[$record_meta:meta])*
        record $record:ident;
        $(#[$sparse_meta:meta])*
        sparse $sparse:ident;
        key $key:ident;
        {
            $($field:ident: $variant:ident = $default:expr, $wire:literal;)+
        }
    ) => {
        $(#[$record_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $record {
            $(
                #[serde(rename = $wire)]
                $field: i64,
            )+
        }

        impl Default for $record {
            fn default() -> Self {
                Self {
                    $($field: $default,)+
                }
            }
        }

        impl $record {
            $(
                #[inline]
                pub fn $field(&self) -> i64 {
                    self.$field
                }
            )+

            pub fn get(&self, key: $key) -> i64 {
                match key {
                    $($key::$variant => self.$field,)+
                }
            }

            /// Adds every key present in `delta`, flooring each result at zero.
            /// Keys absent from `delta` are untouched.
            pub fn apply(&mut self, delta: &$sparse) {
                $(
                    if let Some(value) = delta.$field {
                        self.$field = floor_at_zero(self.$field, value);
                    }
                )+
            }

            /// All keys with their current values, in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = ($key, i64)> + '_ {
                $key::all().into_iter().map(move |key| (key, self.get(key)))
            }
        }

        $(#[$sparse_meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $sparse {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<i64>,
            )+
        }

        impl $sparse {
            pub fn new() -> Self {
                Self::default()
            }

            /// Builder-style setter.
            pub fn with(mut self, key: $key, value: i64) -> Self {
                self.set(key, value);
                self
            }

            pub fn set(&mut self, key: $key, value: i64) {
                match key {
                    $($key::$variant => self.$field = Some(value),)+
                }
            }

            pub fn get(&self, key: $key) -> Option<i64> {
                match key {
                    $($key::$variant => self.$field,)+
                }
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())+
            }

            /// Present keys only, in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = ($key, i64)> + '_ {
                $key::all()
                    .into_iter()
                    .filter_map(move |key| self.get(key).map(|value| (key, value)))
            }
        }
    };
}

define_stat_record! {
    /// The four visible attributes. Each is >= 0 and unbounded above.
    record Attributes;
    /// Sparse per-attribute values (a delta or a set of minimums).
    sparse SparseAttributes;
    key AttributeKey;
    {
        intellect: Intellect = 10, "intellect";
        physical: Physical = 10, "physical";
        inspiration: Inspiration = 10, "inspiration";
        luck: Luck = 10, "luck";
    }
}

define_stat_record! {
    /// Money, stress, happiness and integrity. Each is >= 0.
    record LifeStatus;
    /// Sparse per-gauge values (a delta or a set of minimums).
    sparse SparseLifeStatus;
    key LifeStatusKey;
    {
        money: Money = 100, "money";
        stress: Stress = 10, "stress";
        happiness: Happiness = 50, "happiness";
        integrity: Integrity = 50, "integrity";
    }
}

define_stat_record! {
    /// Hidden RIASEC scores accumulated from choices.
    record PersonalityVector;
    /// Sparse per-category personality values.
    sparse SparsePersonality;
    key PersonalityTrait;
    {
        realistic: Realistic = 10, "R";
        investigative: Investigative = 10, "I";
        artistic: Artistic = 10, "A";
        social: Social = 10, "S";
        enterprising: Enterprising = 10, "E";
        conventional: Conventional = 10, "C";
    }
}

impl Attributes {
    /// Spread between the highest and lowest attribute.
    pub fn spread(&self) -> i64 {
        let values = [self.intellect, self.physical, self.inspiration, self.luck];
        let max = values.iter().copied().max().unwrap_or(0);
        let min = values.iter().copied().min().unwrap_or(0);
        max - min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_life() {
        let attributes = Attributes::default();
        assert!(attributes.iter().all(|(_, v)| v == 10));

        let status = LifeStatus::default();
        assert_eq!(status.money(), 100);
        assert_eq!(status.stress(), 10);
        assert_eq!(status.happiness(), 50);
        assert_eq!(status.integrity(), 50);

        assert!(PersonalityVector::default().iter().all(|(_, v)| v == 10));
    }

    #[test]
    fn apply_adds_present_keys_and_floors_at_zero() {
        let mut status = LifeStatus::default();
        status.apply(
            &SparseLifeStatus::new()
                .with(LifeStatusKey::Happiness, 5)
                .with(LifeStatusKey::Money, -10_000),
        );
        assert_eq!(status.happiness(), 55);
        assert_eq!(status.money(), 0);
        // untouched keys keep their value
        assert_eq!(status.stress(), 10);
        assert_eq!(status.integrity(), 50);
    }

    #[test]
    fn empty_delta_is_a_no_op() {
        let mut attributes = Attributes::default();
        attributes.apply(&SparseAttributes::new());
        assert_eq!(attributes, Attributes::default());
        assert!(SparseAttributes::new().is_empty());
    }

    #[test]
    fn sparse_iter_yields_only_present_keys_in_order() {
        let delta = SparsePersonality::new()
            .with(PersonalityTrait::Conventional, 3)
            .with(PersonalityTrait::Investigative, -2);
        let entries: Vec<_> = delta.iter().collect();
        assert_eq!(
            entries,
            vec![
                (PersonalityTrait::Investigative, -2),
                (PersonalityTrait::Conventional, 3)
            ]
        );
    }

    #[test]
    fn sparse_deserialize_ignores_unknown_keys() {
        let delta: SparsePersonality =
            serde_json::from_str(r#"{"I": 5, "X": 99, "S": -1}"#).unwrap();
        assert_eq!(delta.investigative, Some(5));
        assert_eq!(delta.social, Some(-1));
        assert_eq!(delta.iter().count(), 2);
    }

    #[test]
    fn sparse_serialize_skips_absent_keys() {
        let delta = SparseAttributes::new().with(AttributeKey::Luck, 2);
        assert_eq!(serde_json::to_string(&delta).unwrap(), r#"{"luck":2}"#);
    }

    #[test]
    fn spread_is_max_minus_min() {
        let mut attributes = Attributes::default();
        attributes.apply(&SparseAttributes::new().with(AttributeKey::Intellect, 20));
        assert_eq!(attributes.spread(), 20);
    }
}
