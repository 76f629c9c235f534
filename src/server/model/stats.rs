//! Statistics domain model.

use crate::model::stats::{NumberCountDto, StatsDto};

/// How often one number was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberCount {
    pub number: u8,
    pub count: u64,
}

/// Frequency ranking over every stored volante.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_volantes: u64,
    /// Most chosen numbers, count descending then number ascending.
    pub top_numbers: Vec<NumberCount>,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_volantes: self.total_volantes,
            top_numbers: self
                .top_numbers
                .into_iter()
                .map(|n| NumberCountDto {
                    number: n.number,
                    count: n.count,
                })
                .collect(),
        }
    }
}
