//! Number frequency statistics.

use std::collections::BTreeMap;

use crate::server::{
    data::VolanteStore,
    error::AppError,
    model::{
        stats::{NumberCount, Stats},
        volante::Volante,
    },
};

/// How many numbers the ranking keeps.
pub const TOP_NUMBERS_LIMIT: usize = 10;

/// Ranks numbers by how many volantes chose them.
///
/// Sorted by count descending, ties broken by the smaller number first, truncated
/// to [`TOP_NUMBERS_LIMIT`].
pub fn compute_stats(volantes: &[Volante]) -> Stats {
    let mut frequency: BTreeMap<u8, u64> = BTreeMap::new();
    for number in volantes.iter().flat_map(|v| v.numbers.iter()) {
        *frequency.entry(*number).or_default() += 1;
    }

    let mut top_numbers: Vec<NumberCount> = frequency
        .into_iter()
        .map(|(number, count)| NumberCount { number, count })
        .collect();
    top_numbers.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    top_numbers.truncate(TOP_NUMBERS_LIMIT);

    Stats {
        total_volantes: volantes.len() as u64,
        top_numbers,
    }
}

pub struct StatsService<'a> {
    store: &'a dyn VolanteStore,
}

impl<'a> StatsService<'a> {
    pub fn new(store: &'a dyn VolanteStore) -> Self {
        Self { store }
    }

    /// Computes statistics over every stored volante.
    ///
    /// # Returns
    /// - `Ok(Stats)` - Total count and top numbers
    /// - `Err(AppError)` - Datastore failure while fetching volantes
    pub async fn top_numbers(&self) -> Result<Stats, AppError> {
        let volantes = self.store.fetch_entries().await?;
        Ok(compute_stats(&volantes))
    }
}
