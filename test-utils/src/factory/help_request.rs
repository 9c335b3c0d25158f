//! Help request factory for creating test help request entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test help requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let request = HelpRequestFactory::new(&db)
///     .code("ortega")
///     .has_dining_cam(true)
///     .build()
///     .await?;
/// ```
pub struct HelpRequestFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    has_sack_meal: bool,
    has_take_out_meal: bool,
    has_dining_cam: bool,
    latitude: f64,
    longitude: f64,
}

impl<'a> HelpRequestFactory<'a> {
    /// Creates a new HelpRequestFactory with default values.
    ///
    /// Defaults:
    /// - code: `"code-{n}"`
    /// - name: `"Help Request {n}"`
    /// - all flags `false`
    /// - latitude / longitude: `34.41` / `-119.85`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("code-{}", id),
            name: format!("Help Request {}", id),
            has_sack_meal: false,
            has_take_out_meal: false,
            has_dining_cam: false,
            latitude: 34.41,
            longitude: -119.85,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn has_sack_meal(mut self, value: bool) -> Self {
        self.has_sack_meal = value;
        self
    }

    pub fn has_take_out_meal(mut self, value: bool) -> Self {
        self.has_take_out_meal = value;
        self
    }

    pub fn has_dining_cam(mut self, value: bool) -> Self {
        self.has_dining_cam = value;
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the help request entity into the database.
    pub async fn build(self) -> Result<entity::help_request::Model, DbErr> {
        entity::help_request::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            has_sack_meal: ActiveValue::Set(self.has_sack_meal),
            has_take_out_meal: ActiveValue::Set(self.has_take_out_meal),
            has_dining_cam: ActiveValue::Set(self.has_dining_cam),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a help request with default values.
pub async fn create_help_request(
    db: &DatabaseConnection,
) -> Result<entity::help_request::Model, DbErr> {
    HelpRequestFactory::new(db).build().await
}
