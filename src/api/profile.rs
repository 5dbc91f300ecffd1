//! Profile validation API handlers.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{ApiResult, ErrorBody};
use crate::domain::profile::validate_profile;

/// Query parameters for [`validate`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateQuery {
    /// Age in years; must lie in 18..=100.
    #[param(example = 25)]
    pub age: u8,
    /// Email address to validate.
    #[param(example = "valid@example.com")]
    pub email: String,
}

/// Echo of the accepted inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    /// Accepted age.
    #[schema(example = 25)]
    pub age: u8,
    /// Accepted email address.
    #[schema(example = "valid@example.com")]
    pub email: String,
}

/// Validate an age/email pair and echo it back.
#[utoipa::path(
    get,
    path = "/validate",
    params(ValidateQuery),
    responses(
        (status = 200, description = "Inputs are valid", body = ProfileResponse),
        (status = 400, description = "Malformed query string or failed domain rule", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "validateProfile"
)]
#[get("/validate")]
pub async fn validate(query: web::Query<ValidateQuery>) -> ApiResult<web::Json<ProfileResponse>> {
    let profile = validate_profile(query.age, &query.email)?;
    Ok(web::Json(ProfileResponse {
        age: profile.age,
        email: profile.email,
    }))
}
