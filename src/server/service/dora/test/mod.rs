use crate::server::{
    error::AppError,
    model::dora::{
        DoraBand, DoraQuery, Interval, RecordDeploymentParams, RecordIncidentParams, TimeRange,
    },
    service::dora::DoraService,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        deployment::{create_incident, DeploymentFactory},
        org_unit::{add_section, OrgUnitFactory},
    },
};

mod record;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap()
}

fn query(tenant_id: i32, ou_ref_id: Option<i32>) -> DoraQuery {
    DoraQuery {
        tenant_id,
        ou_ref_id,
        range: TimeRange {
            start: day(1),
            end: day(11),
        },
    }
}
