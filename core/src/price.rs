//! Integer price arithmetic.
//!
//! RULES:
//!   - Prices are wei-denominated, non-negative 128-bit integers.
//!   - Every percentage move uses explicit floor division.
//!   - Decreases saturate at zero; a price can never underflow.
//!   - Floating point never touches a price.
//!
//! On the wire a price travels as a decimal string (wei values overflow
//! JSON number ranges); deserialization also accepts plain unsigned
//! integers for small hand-written fixtures.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u128);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(raw: u128) -> Self {
        Price(raw)
    }

    pub fn raw(self) -> u128 {
        self.0
    }

    /// floor(self * pct / 100) without overflowing u128.
    ///
    /// Split at the hundreds boundary: for self = 100q + r,
    /// floor(self * pct / 100) = q * pct + floor(r * pct / 100) exactly.
    fn pct_of(self, pct: u32) -> u128 {
        let pct = u128::from(pct);
        let whole = (self.0 / 100).saturating_mul(pct);
        whole.saturating_add((self.0 % 100) * pct / 100)
    }

    /// Raise by pct percent, floor-truncated.
    pub fn add_pct(self, pct: u32) -> Price {
        Price(self.0.saturating_add(self.pct_of(pct)))
    }

    /// Cut by pct percent, floor-truncated, saturating at zero.
    pub fn sub_pct(self, pct: u32) -> Price {
        Price(self.0.saturating_sub(self.pct_of(pct)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Price {
    fn from(raw: u128) -> Self {
        Price(raw)
    }
}

impl FromStr for Price {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(Price)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl de::Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or decimal string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Price, E> {
                value
                    .parse()
                    .map_err(|_| E::custom(format!("invalid price: {value:?}")))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
                Ok(Price(u128::from(value)))
            }

            fn visit_u128<E: de::Error>(self, value: u128) -> Result<Price, E> {
                Ok(Price(value))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}
