//! Help request domain models and parameters.
//!
//! A help request is keyed by a caller-chosen `code`. Creating one with a code that
//! already exists replaces the stored request.

use crate::model::help_request::{CreateHelpRequestDto, HelpRequestDto, UpdateHelpRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct HelpRequest {
    /// Natural key supplied by the caller.
    pub code: String,
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl HelpRequest {
    /// Type name used in not-found and deletion messages.
    pub const ENTITY_NAME: &'static str = "HelpRequest";

    pub fn from_entity(entity: entity::help_request::Model) -> Self {
        Self {
            code: entity.code,
            name: entity.name,
            has_sack_meal: entity.has_sack_meal,
            has_take_out_meal: entity.has_take_out_meal,
            has_dining_cam: entity.has_dining_cam,
            latitude: entity.latitude,
            longitude: entity.longitude,
        }
    }

    pub fn into_dto(self) -> HelpRequestDto {
        HelpRequestDto {
            code: self.code,
            name: self.name,
            has_sack_meal: self.has_sack_meal,
            has_take_out_meal: self.has_take_out_meal,
            has_dining_cam: self.has_dining_cam,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Non-key fields of a help request.
#[derive(Debug, Clone)]
pub struct HelpRequestFields {
    pub name: String,
    pub has_sack_meal: bool,
    pub has_take_out_meal: bool,
    pub has_dining_cam: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl HelpRequestFields {
    pub fn from_update_dto(dto: UpdateHelpRequestDto) -> Self {
        Self {
            name: dto.name,
            has_sack_meal: dto.has_sack_meal,
            has_take_out_meal: dto.has_take_out_meal,
            has_dining_cam: dto.has_dining_cam,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

/// Parameters for creating, or overwriting, the help request stored under `code`.
#[derive(Debug, Clone)]
pub struct UpsertHelpRequestParams {
    pub code: String,
    pub fields: HelpRequestFields,
}

impl UpsertHelpRequestParams {
    pub fn from_dto(dto: CreateHelpRequestDto) -> Self {
        Self {
            code: dto.code,
            fields: HelpRequestFields {
                name: dto.name,
                has_sack_meal: dto.has_sack_meal,
                has_take_out_meal: dto.has_take_out_meal,
                has_dining_cam: dto.has_dining_cam,
                latitude: dto.latitude,
                longitude: dto.longitude,
            },
        }
    }
}
