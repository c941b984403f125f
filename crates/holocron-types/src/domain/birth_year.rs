use crate::{Error, Result};
use std::str::FromStr;

/// Era code for years before the Battle of Yavin
pub const BEFORE_BATTLE: &str = "BBY";
/// Era code for years after the Battle of Yavin
pub const AFTER_BATTLE: &str = "ABY";

const ERA_CODE_LEN: usize = 3;

/// Convert a catalog birth-year string into a signed year.
///
/// `"19BBY"` becomes `-19`, `"8ABY"` becomes `8`. A fractional prefix is
/// truncated toward zero (`"41.9BBY"` -> `-41`). Anything else, including
/// the catalog's `"unknown"`, yields `None`.
pub fn convert_birth_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.len() <= ERA_CODE_LEN || !raw.is_char_boundary(raw.len() - ERA_CODE_LEN) {
        return None;
    }

    let (number, era) = raw.split_at(raw.len() - ERA_CODE_LEN);
    let sign = match era {
        BEFORE_BATTLE => -1,
        AFTER_BATTLE => 1,
        _ => return None,
    };

    // The era code carries the sign
    if number.starts_with(['-', '+']) {
        return None;
    }

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let years = i32::try_from(value.trunc() as i64).ok()?;
    years.checked_mul(sign)
}

/// A birth-year bound supplied by a user.
///
/// Accepts either a signed integer (`-19`, `8`) or the catalog notation
/// (`19BBY`, `8ABY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthYear(i32);

impl BirthYear {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl FromStr for BirthYear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(year) = trimmed.parse::<i32>() {
            return Ok(Self(year));
        }
        convert_birth_year(&trimmed.to_ascii_uppercase())
            .map(Self)
            .ok_or_else(|| Error::InvalidBirthYear(s.to_string()))
    }
}

impl From<BirthYear> for i32 {
    fn from(year: BirthYear) -> Self {
        year.0
    }
}

impl std::fmt::Display for BirthYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "{}{}", -(self.0 as i64), BEFORE_BATTLE)
        } else {
            write!(f, "{}{}", self.0, AFTER_BATTLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_era_codes() {
        assert_eq!(convert_birth_year("19BBY"), Some(-19));
        assert_eq!(convert_birth_year("8ABY"), Some(8));
        assert_eq!(convert_birth_year("0ABY"), Some(0));
    }

    #[test]
    fn test_convert_fractional_truncates() {
        assert_eq!(convert_birth_year("41.9BBY"), Some(-41));
        assert_eq!(convert_birth_year("896BBY"), Some(-896));
    }

    #[test]
    fn test_convert_malformed() {
        assert_eq!(convert_birth_year("unknown"), None);
        assert_eq!(convert_birth_year(""), None);
        assert_eq!(convert_birth_year("BBY"), None);
        assert_eq!(convert_birth_year("19"), None);
        assert_eq!(convert_birth_year("19XYZ"), None);
        assert_eq!(convert_birth_year("infBBY"), None);
        assert_eq!(convert_birth_year("ééBBY"), None);
        assert_eq!(convert_birth_year("-3000000000BBY"), None);
        assert_eq!(convert_birth_year("-19BBY"), None);
        assert_eq!(convert_birth_year("3000000000ABY"), None);
        assert_eq!(convert_birth_year("1e300BBY"), None);
    }

    #[test]
    fn test_oversized_user_bound_is_rejected() {
        assert!("-3000000000bby".parse::<BirthYear>().is_err());
        assert!("3000000000ABY".parse::<BirthYear>().is_err());
        assert_eq!(
            "2147483647ABY".parse::<BirthYear>().unwrap().value(),
            i32::MAX
        );
    }

    #[test]
    fn test_parse_user_bound() {
        assert_eq!("-19".parse::<BirthYear>().unwrap().value(), -19);
        assert_eq!("19bby".parse::<BirthYear>().unwrap().value(), -19);
        assert_eq!(" 8ABY ".parse::<BirthYear>().unwrap().value(), 8);
        assert!("yesterday".parse::<BirthYear>().is_err());
    }

    #[test]
    fn test_display_round_trips_notation() {
        assert_eq!(BirthYear::new(-19).to_string(), "19BBY");
        assert_eq!(BirthYear::new(8).to_string(), "8ABY");
    }
}
