use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::notification::NotificationRepository;

mod create;
