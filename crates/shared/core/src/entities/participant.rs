use serde::{Deserialize, Serialize};

/// An agent identified by its cohort and its index within that cohort.
///
/// Serialized as a two-element array `[cohort, local_index]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct Participant {
    pub cohort: u64,
    pub local_index: u64,
}

impl Participant {
    pub fn new(cohort: u64, local_index: u64) -> Self {
        Self {
            cohort,
            local_index,
        }
    }
}

impl From<[u64; 2]> for Participant {
    fn from([cohort, local_index]: [u64; 2]) -> Self {
        Self::new(cohort, local_index)
    }
}

impl From<Participant> for [u64; 2] {
    fn from(p: Participant) -> Self {
        [p.cohort, p.local_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_pair() {
        let p = Participant::new(1, 499);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1,499]");

        let back: Participant = serde_json::from_str("[2,7]").unwrap();
        assert_eq!(back, Participant::new(2, 7));
    }
}
