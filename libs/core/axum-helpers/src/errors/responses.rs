//! Shared utoipa response components for the error paths every handler
//! documents.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "InternalServerError",
        "message": "An internal server error occurred",
        "details": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the path id is not a valid UUID",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Invalid UUID format",
        "details": null
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the body is not valid JSON for this operation",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Failed to deserialize the JSON body into the target type",
        "details": null
    })
)]
pub struct BadRequestBodyResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "The record does not exist",
    content_type = "application/json",
    example = json!({
        "error": "NotFound",
        "message": "User not found",
        "details": null
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
