use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::apartment::ApartmentRepository;

mod get_by_id;
