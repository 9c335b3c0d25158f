use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestDto {
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query parameters accepted by `POST /api/helpRequest/post`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateHelpRequestDto {
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

/// Replacement body for `PUT /api/helpRequest`.
///
/// A `code` field in the body is ignored; the key always comes from the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHelpRequestDto {
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}
