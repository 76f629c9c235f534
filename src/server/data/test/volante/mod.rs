use chrono::{Duration, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::volante::VolanteRepository,
    error::{store::StoreError, AppError},
    model::volante::CreateVolanteParam,
};

mod create;
mod delete_all;
mod get_all;

fn param(name: &str, cpf: &str, numbers: Vec<u8>) -> CreateVolanteParam {
    CreateVolanteParam {
        name: name.to_string(),
        cpf: cpf.to_string(),
        numbers,
        timestamp: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap(),
    }
}
