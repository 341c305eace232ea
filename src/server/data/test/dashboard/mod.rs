use crate::server::{
    data::dashboard::DashboardRepository,
    model::dashboard::{DashboardFilter, UpdateWidgetParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        dashboard::{create_widget, DashboardFactory},
    },
};

mod delete;
mod get_paginated;
mod widgets;
