use serde::Deserialize;
use serde::Serialize;

/// A column of the cash transactions table, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Column {
    Date,
    Kind,
    Description,
    Amount,
    Pnl,
    Balance,
}

impl Column {
    /// Header label shown to the viewer.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Kind => "Type",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Pnl => "P&L",
            Self::Balance => "Balance",
        }
    }

    /// Stable machine name, as used in configuration and CSS classes.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Money columns are right-aligned.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Amount | Self::Pnl | Self::Balance)
    }
}
