//! Passenger input types and the feature encoding consumed by the classifier.
//!
//! The controls in the UI bind directly to [`PassengerDetails`]; the encode
//! step is a pure function from those values to the fixed column order the
//! trained model expects. No scaling or normalization happens here.

use std::ops::RangeInclusive;

/// Number of `f32` values per feature vector.
pub const FEATURE_LEN: usize = 8;

/// Classifier column names, in the order the artifact weights expect.
pub const FEATURE_NAMES: [&str; FEATURE_LEN] = [
    "pclass",
    "age",
    "sibsp",
    "parch",
    "fare",
    "sex_male",
    "embarked_q",
    "embarked_s",
];

/// Age control domain in years.
pub const AGE_RANGE: RangeInclusive<u32> = 0..=80;
/// Siblings/spouses control domain.
pub const SIBLINGS_SPOUSES_RANGE: RangeInclusive<u32> = 0..=10;
/// Parents/children control domain.
pub const PARENTS_CHILDREN_RANGE: RangeInclusive<u32> = 0..=10;
/// Fare control domain.
pub const FARE_RANGE: RangeInclusive<f32> = 0.0..=520.0;

/// Ticket class of the passenger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassengerClass {
    /// First class.
    First,
    /// Second class.
    Second,
    /// Third class.
    Third,
}

impl PassengerClass {
    /// All classes in control order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Class number used by the classifier.
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Label shown in the class selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1 (First)",
            Self::Second => "2 (Second)",
            Self::Third => "3 (Third)",
        }
    }
}

/// Recorded sex of the passenger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    /// Male passenger.
    Male,
    /// Female passenger.
    Female,
}

impl Sex {
    /// Whether the one-hot `sex_male` column is set.
    pub fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Label shown in the gender selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Port where the passenger embarked.
///
/// The training feature set one-hot encodes only Queenstown and Southampton;
/// Cherbourg has no column in the artifact, so it is not offered here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbarkPort {
    /// Queenstown, Ireland.
    Queenstown,
    /// Southampton, England.
    Southampton,
}

impl EmbarkPort {
    /// Label shown in the embarkation selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Queenstown => "Queenstown (Q)",
            Self::Southampton => "Southampton (S)",
        }
    }
}

/// Raw passenger attributes captured by the form controls.
///
/// Every field is bounded by its control's declared domain, so no validation
/// branch exists anywhere downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassengerDetails {
    /// Ticket class.
    pub class: PassengerClass,
    /// Age in years.
    pub age: u32,
    /// Siblings and spouses aboard.
    pub siblings_spouses: u32,
    /// Parents and children aboard.
    pub parents_children: u32,
    /// Ticket fare paid.
    pub fare: f32,
    /// Recorded sex.
    pub sex: Sex,
    /// Port of embarkation.
    pub embarked: EmbarkPort,
}

impl Default for PassengerDetails {
    fn default() -> Self {
        Self {
            class: PassengerClass::First,
            age: 25,
            siblings_spouses: 0,
            parents_children: 0,
            fare: 30.0,
            sex: Sex::Male,
            embarked: EmbarkPort::Queenstown,
        }
    }
}

impl PassengerDetails {
    /// Encode the details into classifier column order.
    ///
    /// Integers widen to `f32`, the fare passes through unmodified, and the
    /// three categorical fields become their one-hot columns.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector([
            f32::from(self.class.number()),
            self.age as f32,
            self.siblings_spouses as f32,
            self.parents_children as f32,
            self.fare,
            if self.sex.is_male() { 1.0 } else { 0.0 },
            if self.embarked == EmbarkPort::Queenstown {
                1.0
            } else {
                0.0
            },
            if self.embarked == EmbarkPort::Southampton {
                1.0
            } else {
                0.0
            },
        ])
    }
}

/// Fixed-order numeric features for one classifier invocation.
///
/// Rebuilt from the form on every prediction and discarded after rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector([f32; FEATURE_LEN]);

impl FeatureVector {
    /// Borrow the feature values in column order.
    pub fn values(&self) -> &[f32; FEATURE_LEN] {
        &self.0
    }
}
