use serde::{Deserialize, Serialize};

/// Half of the day on a 12-hour clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Parse "AM"/"PM" in any case, with or without dots ("a.m.").
    pub fn from_str_opt(s: &str) -> Option<Self> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != '.')
            .collect::<String>()
            .to_uppercase();

        match cleaned.as_str() {
            "AM" => Some(Period::Am),
            "PM" => Some(Period::Pm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_period_case_insensitively() {
        assert_eq!(Period::from_str_opt("am"), Some(Period::Am));
        assert_eq!(Period::from_str_opt(" PM "), Some(Period::Pm));
        assert_eq!(Period::from_str_opt("p.m."), Some(Period::Pm));
        assert_eq!(Period::from_str_opt("noon"), None);
    }
}
