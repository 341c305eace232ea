//! Org unit fixtures.

use chrono::{TimeZone, Utc};
use entity::org_unit;
use serde_json::json;

/// Default test org unit name.
pub const DEFAULT_NAME: &str = "Engineering";

/// Creates an active root org unit model with default values.
///
/// # Default Values
/// - id: `1`, tenant_id: `1`, ref_id: `1`, version: `1`
/// - name: `"Engineering"`, path: `"/Engineering"`
/// - tag_ids: `[7, 9]`
/// - created/updated: 2026-01-01T00:00:00Z
pub fn entity() -> org_unit::Model {
    let timestamp = Utc
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    org_unit::Model {
        id: 1,
        tenant_id: 1,
        ref_id: 1,
        version: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
        parent_ref_id: None,
        tag_ids: json!([7, 9]),
        active: true,
        path: format!("/{}", DEFAULT_NAME),
        ou_category_id: None,
        default_dashboard_id: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
