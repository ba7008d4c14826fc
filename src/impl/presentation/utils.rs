/// Quantities and sums are shown with exactly two decimals (`1.50`).
pub(crate) fn format_quantity(quantity: f64) -> String {
    format!("{quantity:.2}")
}

/// Pads every cell of a row to its column width and joins them with ` | `.
pub(crate) fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_have_two_decimals() {
        assert_eq!(format_quantity(3.0), "3.00");
        assert_eq!(format_quantity(0.5), "0.50");
        assert_eq!(format_quantity(1.0 / 3.0), "0.33");
    }

    #[test]
    fn rows_are_padded_per_column() {
        let cells = vec!["a".to_string(), "bb".to_string(), "c".to_string()];
        assert_eq!(format_row(&cells, &[3, 2, 1]), "a   | bb | c");
    }
}
