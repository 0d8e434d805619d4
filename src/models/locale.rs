use serde::Deserialize;
use strum::{Display, EnumString};

/// Language the model is asked to write its free-text answers in.
///
/// JSON keys stay English regardless of locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl TryFrom<String> for Locale {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}
