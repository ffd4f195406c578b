//! Environment requests.

use hyperstack::{EnvironmentRequest, Request, UpdateEnvironmentRequest};

use crate::cli::{CreateEnvironmentArgs, ListEnvironmentsArgs, UpdateEnvironmentArgs};
use crate::error::CliError;

const ENVIRONMENTS_PATH: &str = "/core/environments";

/// `POST /core/environments`
pub fn create(args: &CreateEnvironmentArgs) -> Result<Request, CliError> {
    let body = EnvironmentRequest {
        name: args.name.clone(),
        region: args.region.into(),
    };
    Ok(Request::post(ENVIRONMENTS_PATH).with_json(&body)?)
}

/// `GET /core/environments/{id}`
pub fn get(environment_id: &str) -> Result<Request, CliError> {
    Ok(Request::get(ENVIRONMENTS_PATH).with_segment(environment_id)?)
}

/// `GET /core/environments`, with optional search and paging.
#[must_use]
pub fn list(args: &ListEnvironmentsArgs) -> Request {
    Request::get(ENVIRONMENTS_PATH)
        .with_optional_query("search", args.search.as_deref())
        .with_optional_query("page", args.page)
        .with_optional_query("pageSize", args.page_size)
}

/// `PUT /core/environments/{id}`
pub fn update(args: &UpdateEnvironmentArgs) -> Result<Request, CliError> {
    let body = UpdateEnvironmentRequest {
        name: args.new_name.clone(),
    };
    Ok(Request::put(ENVIRONMENTS_PATH)
        .with_segment(args.environment_id.as_str())?
        .with_json(&body)?)
}

/// `DELETE /core/environments/{id}`
pub fn delete(environment_id: &str) -> Result<Request, CliError> {
    Ok(Request::delete(ENVIRONMENTS_PATH).with_segment(environment_id)?)
}
