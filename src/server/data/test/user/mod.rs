use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user::UserRepository;

mod ensure_admin;
mod get_all;
