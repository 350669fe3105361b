//! Defines the settlement currencies a cash account can be denominated in.

use serde::Deserialize;
use serde::Serialize;

/// A settlement currency, with its code, symbol, and formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    AUD, // Australian Dollar
    BHD, // Bahraini Dinar
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    EUR, // Euro
    GBP, // Great British Pound
    HKD, // Hong Kong Dollar
    JPY, // Japanese Yen
    KRW, // South Korean Won
    KWD, // Kuwaiti Dinar
    NOK, // Norwegian Krone
    SEK, // Swedish Krona
    SGD, // Singapore Dollar
    #[default]
    USD, // United States Dollar
}

impl Currency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// USD uses 2 (cents), JPY and KRW use 0, KWD and BHD use 3.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::KRW => 0,
            Self::KWD | Self::BHD => 3,
            _ => 2,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "A$",
            Self::BHD => ".د.ب",
            Self::CAD => "C$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::HKD => "HK$",
            Self::JPY => "¥",
            Self::KRW => "₩",
            Self::KWD => "د.ك",
            Self::NOK => "kr",
            Self::SEK => "kr",
            Self::SGD => "S$",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 code (e.g., "USD"), courtesy of `strum::IntoStaticStr`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::BHD => "Bahraini Dinar",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::HKD => "Hong Kong Dollar",
            Self::JPY => "Japanese Yen",
            Self::KRW => "South Korean Won",
            Self::KWD => "Kuwaiti Dinar",
            Self::NOK => "Norwegian Krone",
            Self::SEK => "Swedish Krona",
            Self::SGD => "Singapore Dollar",
            Self::USD => "United States Dollar",
        }
    }
}
