//! Фиксированные коды pain.001.001.03, которые не зависят от входных данных.

use crate::error::SepaError;
use std::fmt;
use std::str::FromStr;

/// Пространство имён схемы pain.001.001.03.
pub const PAIN_001_001_03_NS: &str = "urn:iso:std:iso:20022:tech:xsd:pain.001.001.03";

/// Подставляется в EndToEndId, если идентификатор не передан или пуст.
pub const END_TO_END_NOT_PROVIDED: &str = "NOTPROVIDED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Eur,
}

/// ChargeBearerType1Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeBearer {
    /// SLEV: расходы делятся по правилам схемы.
    Shared,
}

/// PaymentMethod3Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLevel {
    Sepa,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl ChargeBearer {
    pub fn code(self) -> &'static str {
        match self {
            ChargeBearer::Shared => "SLEV",
        }
    }
}

impl PaymentMethod {
    pub fn code(self) -> &'static str {
        match self {
            PaymentMethod::Transfer => "TRF",
        }
    }
}

impl ServiceLevel {
    pub fn code(self) -> &'static str {
        match self {
            ServiceLevel::Sepa => "SEPA",
        }
    }
}

macro_rules! code_traits {
    ($ty:ident, $what:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = SepaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $ty::$variant.code() {
                        return Ok($ty::$variant);
                    }
                )+
                Err(SepaError::Unsupported(format!("{} {s}", $what)))
            }
        }
    };
}

code_traits!(Currency, "currency", [Eur]);
code_traits!(ChargeBearer, "charge bearer", [Shared]);
code_traits!(PaymentMethod, "payment method", [Transfer]);
code_traits!(ServiceLevel, "service level", [Sepa]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_iso_values() {
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(ChargeBearer::Shared.to_string(), "SLEV");
        assert_eq!(PaymentMethod::Transfer.to_string(), "TRF");
        assert_eq!(ServiceLevel::Sepa.to_string(), "SEPA");
    }

    #[test]
    fn unknown_codes_are_unsupported() {
        assert_eq!("TRF".parse::<PaymentMethod>().unwrap(), PaymentMethod::Transfer);
        assert!(matches!("USD".parse::<Currency>(), Err(SepaError::Unsupported(_))));
        assert!(matches!("DEBT".parse::<ChargeBearer>(), Err(SepaError::Unsupported(_))));
        assert!("sepa".parse::<ServiceLevel>().is_err());
    }
}
