//! Dashboard and widget factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating dashboards.
pub struct DashboardFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    name: String,
    dashboard_type: String,
    owner_id: Option<i32>,
    public: bool,
}

impl<'a> DashboardFactory<'a> {
    /// Creates a new DashboardFactory.
    ///
    /// Defaults:
    /// - name: `"Dashboard {id}"`
    /// - dashboard_type: `"business_alignment"`
    /// - owner: none
    /// - public: `false`
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        Self {
            db,
            tenant_id,
            name: format!("Dashboard {}", next_id()),
            dashboard_type: "business_alignment".to_string(),
            owner_id: None,
            public: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dashboard_type(mut self, dashboard_type: impl Into<String>) -> Self {
        self.dashboard_type = dashboard_type.into();
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub async fn build(self) -> Result<entity::dashboard::Model, DbErr> {
        let now = Utc::now();
        entity::dashboard::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            name: ActiveValue::Set(self.name),
            dashboard_type: ActiveValue::Set(self.dashboard_type),
            owner_id: ActiveValue::Set(self.owner_id),
            query: ActiveValue::Set(json!({})),
            metadata: ActiveValue::Set(json!({})),
            public: ActiveValue::Set(self.public),
            demo: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private dashboard with default values.
pub async fn create_dashboard(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::dashboard::Model, DbErr> {
    DashboardFactory::new(db, tenant_id).build().await
}

/// Creates a widget on the dashboard with default values.
pub async fn create_widget(
    db: &DatabaseConnection,
    dashboard_id: i32,
) -> Result<entity::widget::Model, DbErr> {
    entity::widget::ActiveModel {
        dashboard_id: ActiveValue::Set(dashboard_id),
        name: ActiveValue::Set(format!("Widget {}", next_id())),
        widget_type: ActiveValue::Set("bar_chart".to_string()),
        query: ActiveValue::Set(json!({})),
        metadata: ActiveValue::Set(json!({})),
        display_info: ActiveValue::Set(json!({})),
        precalculate: ActiveValue::Set(false),
        precalculate_frequency_in_mins: ActiveValue::Set(0),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
