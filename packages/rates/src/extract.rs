//! Row extraction - locate the rate table and yield its data rows.

use scraper::{Html, Selector};

/// Structural marker of the middle-rate table on the upstream page.
const RATE_TABLE_ROWS: &str = ".indexsrednjiKursListaTable tr";

/// Extract the inner markup of every data row of the rate table.
///
/// Rows come back in document order. The first matched row is always the
/// table header and is skipped. When the page carries no rate table the
/// result is empty - the caller decides whether zero rows is a problem.
pub fn extract_rows(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let row_selector = match Selector::parse(RATE_TABLE_ROWS) {
        Ok(selector) => selector,
        Err(_) => return vec![],
    };

    document
        .select(&row_selector)
        .skip(1)
        .map(|row| row.inner_html().trim().to_string())
        .collect()
}
