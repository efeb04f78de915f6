use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

/// Money type with 2 decimal places, serialized as a json number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(2)))
    }

    /// create from integer amount (dollars, shillings, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(2))
    }
}

/// rate type for interest rates, held as a ratio (0.05 for 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// create from fractional percentage (e.g., 3.5 for 3.5%)
    pub fn from_percentage_decimal(p: Decimal) -> Self {
        Rate(p / Decimal::from(100))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

/// serde adapter writing whole `Money` amounts as json integers (10000, not
/// 10000.0); fractional amounts fall back to a float
pub mod whole_number {
    use super::*;
    use serde::ser;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if money.0.fract().is_zero() {
            if let Some(whole) = money.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        let value = money.0.to_f64().ok_or_else(|| {
            <S::Error as ser::Error>::custom(format!("amount {} is not representable as f64", money))
        })?;
        serializer.serialize_f64(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let d = rust_decimal::serde::float::deserialize(deserializer)?;
        Ok(Money(d.round_dp(2)))
    }
}

/// serde adapter exposing a `Rate` as a percentage float (5.0 for 5%)
pub mod percentage_float {
    use super::*;
    use serde::{de, ser};

    pub fn serialize<S: Serializer>(rate: &Rate, serializer: S) -> Result<S::Ok, S::Error> {
        let value = rate.as_percentage().to_f64().ok_or_else(|| {
            <S::Error as ser::Error>::custom(format!("rate {} is not representable as f64", rate))
        })?;
        serializer.serialize_f64(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rate, D::Error> {
        let value = f64::deserialize(deserializer)?;
        let percentage = Decimal::from_f64(value)
            .ok_or_else(|| <D::Error as de::Error>::custom(format!("invalid percentage: {value}")))?;
        Ok(Rate::from_percentage_decimal(percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.125").unwrap();
        assert_eq!(m.to_string(), "100.12"); // banker's rounding to cents
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_value(Money::from_major(5_000)).unwrap();
        assert_eq!(json.as_f64(), Some(5000.0));

        let back: Money = serde_json::from_str("2500.5").unwrap();
        assert_eq!(back, Money::from_str_exact("2500.50").unwrap());

        let from_int: Money = serde_json::from_str("42").unwrap();
        assert_eq!(from_int, Money::from_major(42));
    }

    #[test]
    fn test_whole_number_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "super::whole_number")]
            principal: Money,
        }

        let whole = serde_json::to_string(&Wrapper { principal: Money::from_major(10_000) }).unwrap();
        assert_eq!(whole, r#"{"principal":10000}"#);

        let cents = Wrapper { principal: Money::from_str_exact("250.75").unwrap() };
        let json = serde_json::to_value(&cents).unwrap();
        assert_eq!(json["principal"].as_f64(), Some(250.75));

        let parsed: Wrapper = serde_json::from_str(r#"{"principal": 40000}"#).unwrap();
        assert_eq!(parsed.principal, Money::from_major(40_000));
    }

    #[test]
    fn test_rate_percentage() {
        let rate = Rate::from_percentage_decimal(dec!(3.5));
        assert_eq!(rate.as_decimal(), dec!(0.035));
        assert_eq!(rate.as_percentage(), dec!(3.5));
        assert_eq!(rate.to_string(), "3.5%");
    }

    #[test]
    fn test_percentage_float_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "super::percentage_float")]
            rate: Rate,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{"rate": 4.5}"#).unwrap();
        assert_eq!(parsed.rate, Rate::from_percentage_decimal(dec!(4.5)));

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["rate"].as_f64(), Some(4.5));
    }
}
