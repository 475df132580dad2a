use std::num::ParseIntError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::ServerConfig;
use crate::tessellation::Rect;

/// Raw `width` / `height` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SizeQuery {
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SizeError {
    #[error("missing `{0}` parameter")]
    Missing(&'static str),

    #[error("invalid `{name}`: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("Size not valid")]
    NotPositive,

    #[error(
        "Maximum resolution via server is {max_width}x{max_height}. Use the console client to generate larger images."
    )]
    TooLarge { max_width: u32, max_height: u32 },
}

impl IntoResponse for SizeError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl SizeQuery {
    /// Parses both dimensions and checks them against the configured ceiling.
    pub fn validate(&self, config: &ServerConfig) -> Result<Rect, SizeError> {
        let width = parse_dimension("width", self.width.as_deref())?;
        let height = parse_dimension("height", self.height.as_deref())?;

        if width <= 0 || height <= 0 {
            return Err(SizeError::NotPositive);
        }
        if width > i64::from(config.max_width) || height > i64::from(config.max_height) {
            return Err(SizeError::TooLarge {
                max_width: config.max_width,
                max_height: config.max_height,
            });
        }

        Ok(Rect::new(width as f64, height as f64))
    }
}

fn parse_dimension(name: &'static str, value: Option<&str>) -> Result<i64, SizeError> {
    let value = value.ok_or(SizeError::Missing(name))?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| SizeError::Invalid { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(width: &str, height: &str) -> SizeQuery {
        SizeQuery {
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    #[test]
    fn accepts_sizes_within_limits() {
        let config = ServerConfig::default();
        let rect = query("2000", "1000").validate(&config).unwrap();
        assert_eq!(rect, Rect::new(2000.0, 1000.0));

        let rect = query("5120", "2880").validate(&config).unwrap();
        assert_eq!(rect, Rect::new(5120.0, 2880.0));
    }

    #[test]
    fn rejects_missing_and_malformed() {
        let config = ServerConfig::default();
        let missing = SizeQuery {
            width: Some("10".into()),
            height: None,
        };
        assert!(matches!(
            missing.validate(&config),
            Err(SizeError::Missing("height"))
        ));
        assert!(matches!(
            query("ten", "10").validate(&config),
            Err(SizeError::Invalid { name: "width", .. })
        ));
        assert!(matches!(
            query("10.5", "10").validate(&config),
            Err(SizeError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_non_positive() {
        let config = ServerConfig::default();
        assert!(matches!(
            query("0", "10").validate(&config),
            Err(SizeError::NotPositive)
        ));
        assert!(matches!(
            query("10", "-3").validate(&config),
            Err(SizeError::NotPositive)
        ));
    }

    #[test]
    fn rejects_above_ceiling() {
        let config = ServerConfig {
            max_width: 100,
            max_height: 50,
            ..ServerConfig::default()
        };
        let err = query("101", "10").validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Maximum resolution via server is 100x50. Use the console client to generate larger images."
        );
        assert!(query("100", "51").validate(&config).is_err());
    }
}
