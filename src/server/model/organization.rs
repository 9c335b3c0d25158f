//! Student organization domain models and parameters.

use crate::model::organization::{
    CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto,
};

/// A registered student organization, keyed by its short code (e.g. `zpr`).
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Organization {
    /// Type name used in not-found and deletion messages.
    pub const ENTITY_NAME: &'static str = "UCSBOrganization";

    pub fn from_entity(entity: entity::ucsb_organization::Model) -> Self {
        Self {
            org_code: entity.org_code,
            org_translation_short: entity.org_translation_short,
            org_translation: entity.org_translation,
            inactive: entity.inactive,
        }
    }

    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            org_code: self.org_code,
            org_translation_short: self.org_translation_short,
            org_translation: self.org_translation,
            inactive: self.inactive,
        }
    }
}

/// Non-key fields of an organization.
#[derive(Debug, Clone)]
pub struct OrganizationFields {
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl OrganizationFields {
    pub fn from_update_dto(dto: UpdateOrganizationDto) -> Self {
        Self {
            org_translation_short: dto.org_translation_short,
            org_translation: dto.org_translation,
            inactive: dto.inactive,
        }
    }
}

/// Parameters for creating, or overwriting, the organization stored under `org_code`.
#[derive(Debug, Clone)]
pub struct UpsertOrganizationParams {
    pub org_code: String,
    pub fields: OrganizationFields,
}

impl UpsertOrganizationParams {
    pub fn from_dto(dto: CreateOrganizationDto) -> Self {
        Self {
            org_code: dto.org_code,
            fields: OrganizationFields {
                org_translation_short: dto.org_translation_short,
                org_translation: dto.org_translation,
                inactive: dto.inactive,
            },
        }
    }
}
