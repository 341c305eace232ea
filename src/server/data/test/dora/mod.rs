use crate::server::data::dora::DoraRepository;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        deployment::{create_incident, DeploymentFactory},
    },
};

mod deployments_between;
mod incidents_opened_between;
