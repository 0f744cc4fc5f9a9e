//! DTOs for link creation and listing.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::error::AppError;

/// Largest page `GET /links` returns.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Request body for `POST /links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL; must carry a scheme and a host.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Query string of `GET /links`.
///
/// Both parameters are required. Numbers arrive as strings and are parsed
/// with `serde_with`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ListLinksQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(
        required(message = "limit is required"),
        range(min = 1, max = 1000, message = "limit must be between 1 and 1000")
    )]
    pub limit: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(
        required(message = "skip is required"),
        range(min = 0, message = "skip must be greater than or equal to 0")
    )]
    pub skip: Option<i64>,
}

impl ListLinksQuery {
    /// Validates the query and returns `(limit, skip)`.
    pub fn into_limit_skip(self) -> Result<(i64, i64), AppError> {
        self.validate()?;

        match (self.limit, self.skip) {
            (Some(limit), Some(skip)) => Ok((limit, skip)),
            _ => Err(AppError::bad_request(
                "limit and skip are required",
                json!({}),
            )),
        }
    }
}
