pub mod local;
pub mod provider;

use anyhow::Result;
use huaywin_core::pool::DigitPool;

use crate::provider::StatisticsProvider;

/// Transforme les chiffres « chauds » d'un fournisseur en sélection
/// ordinaire : le cœur les consomme comme n'importe quelle autre.
pub fn suggest_pool(
    provider: &dyn StatisticsProvider,
    draw_id: &str,
    count: usize,
) -> Result<DigitPool> {
    let freq = provider.fetch(draw_id)?;
    DigitPool::from_digits(&freq.hot_digits(count))
}
