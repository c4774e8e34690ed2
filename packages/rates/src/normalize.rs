//! Row normalization - strip presentation markup down to cell values.

/// Decorative accessibility attribute carried by every cell of the upstream
/// table. The leading space matters: removing the attribute first leaves a
/// plain `<td>` marker for the second pass.
const TABINDEX_MARKER: &str = " tabindex=\"0\"";

const CELL_OPEN: &str = "<td>";
const CELL_CLOSE: &str = "</td>";

/// Split one row fragment into its trimmed cell values.
///
/// A row that ends in `</td>` (every well-formed row does) would leave one
/// spurious empty element after the final split; exactly that one is dropped,
/// so the output length equals the row's cell count. An intentionally empty
/// cell in the middle - or at the end - survives, since it contributes its
/// own delimiter.
///
/// No semantic validation happens here; arbitrary cell text passes through.
pub fn normalize_row(row: &str) -> Vec<String> {
    let stripped = row.replace(TABINDEX_MARKER, "").replace(CELL_OPEN, "");

    let mut cells: Vec<String> = stripped
        .split(CELL_CLOSE)
        .map(|cell| cell.trim().to_string())
        .collect();

    if cells.last().map(|cell| cell.is_empty()).unwrap_or(false) {
        cells.pop();
    }

    cells
}
