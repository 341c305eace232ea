mod category;
mod dashboard;
mod dora;
mod org_unit;
mod org_user;
