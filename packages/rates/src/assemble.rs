//! Rate assembly - turn normalized cell rows into ordered records.

use crate::error::{RatesError, Result};
use crate::types::ExchangeRate;

/// Upstream renders the full list plus footer rows; only the first 24 data
/// rows carry currencies.
pub const MAX_ROWS: usize = 24;

/// Build the final record list from normalized rows.
///
/// Rows past [`MAX_ROWS`] are ignored. Within the cap, every row must carry
/// at least the five expected cells; a short row aborts the whole assembly
/// rather than producing a partial list.
///
/// Records whose label appears in `priority` are moved to the front. Both
/// the priority block and the remainder keep their original table order, so
/// the output is a stable partition of the input.
pub fn assemble(rows: &[Vec<String>], priority: &[String]) -> Result<Vec<ExchangeRate>> {
    let mut prioritized = Vec::new();
    let mut remainder = Vec::new();

    for (index, cells) in rows.iter().take(MAX_ROWS).enumerate() {
        let record = ExchangeRate::from_cells(cells).ok_or(RatesError::MalformedRow {
            index,
            found: cells.len(),
            expected: ExchangeRate::FIELDS,
        })?;

        if priority.iter().any(|code| code == &record.label) {
            prioritized.push(record);
        } else {
            remainder.push(record);
        }
    }

    prioritized.extend(remainder);
    Ok(prioritized)
}
