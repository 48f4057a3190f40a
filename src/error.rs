// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration value was rejected at the setter or loader boundary.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An asset index does not address any asset currently in the sheet.
    #[error("Asset index {index} out of range ({count} assets)")]
    AssetIndexOutOfRange { index: usize, count: usize },

    /// A row index does not address any sheet row or action.
    #[error("Row index {row} out of range ({count} rows)")]
    RowIndexOutOfRange { row: usize, count: usize },

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_formats_message() {
        let err = Error::InvalidConfiguration("maximum_selection must be at least 1".into());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: maximum_selection must be at least 1"
        );
    }

    #[test]
    fn asset_index_out_of_range_mentions_both_numbers() {
        let err = Error::AssetIndexOutOfRange { index: 7, count: 3 };
        let message = format!("{}", err);
        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }

    #[test]
    fn toml_decode_error_becomes_config_variant() {
        let decode_error = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = decode_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
