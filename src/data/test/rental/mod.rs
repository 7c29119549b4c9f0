use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{data::rental::RentalRepository, model::rental::CreateRentalParams};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod activate_current;
mod cancel;
mod create;
mod deactivate_ended;
mod find_expiring;
