//! Type-safe identifiers for timetabled vehicles.
//!
//! All identifiers use Arc<str> for cheap cloning and minimal memory overhead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_identifier!(TrainNumber);
impl_identifier!(BusIdentifier);
impl_identifier!(NumberPlate);

impl NumberPlate {
    /// Lowercased form used as the key of the plate index
    pub fn normalized(&self) -> String {
        normalize_plate(&self.0)
    }
}

pub(crate) fn normalize_plate(plate: &str) -> String {
    plate.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = TrainNumber::new("12951");
        let id2 = TrainNumber::new("12951");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_identifier_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TrainNumber::new("12951"), 42);

        assert_eq!(map.get(&TrainNumber::new("12951")), Some(&42));
        assert_eq!(map.get(&TrainNumber::new("12952")), None);
    }

    #[test]
    fn test_identifier_display() {
        let id = BusIdentifier::new("bus_1");
        assert_eq!(format!("{}", id), "bus_1");
    }

    #[test]
    fn test_plate_normalization_ignores_case() {
        let plate = NumberPlate::new("AB-123");
        assert_eq!(plate.normalized(), "ab-123");
        assert_eq!(plate.normalized(), normalize_plate("Ab-123"));
        assert_ne!(plate.normalized(), normalize_plate("AB-124"));
        // The original spelling is kept for display
        assert_eq!(plate.as_str(), "AB-123");
    }
}
