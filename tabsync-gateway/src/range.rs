//! A1-notation helpers for header-row ranges.

use tabsync_core::TabName;

/// 1-based column index → A1 column letters (`1 → A`, `27 → AA`).
///
/// `0` has no column and maps to `A`.
pub fn column_letters(index: usize) -> String {
    let mut n = index.max(1);
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Quote a tab name for A1 notation: `O'Brien` → `'O''Brien'`.
pub fn quote_tab(tab: &TabName) -> String {
    format!("'{}'", tab.as_str().replace('\'', "''"))
}

/// The entire first row of `tab`, however wide it is.
pub fn header_row(tab: &TabName) -> String {
    format!("{}!1:1", quote_tab(tab))
}

/// The first `width` cells of the first row: `'Users'!A1:C1`.
pub fn header_cells(tab: &TabName, width: usize) -> String {
    format!("{}!A1:{}1", quote_tab(tab), column_letters(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_cover_multi_letter_columns() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(3), "C");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(53), "BA");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
    }

    #[test]
    fn quotes_embedded_apostrophes() {
        assert_eq!(quote_tab(&TabName::from("O'Brien")), "'O''Brien'");
        assert_eq!(quote_tab(&TabName::from("Q1 Sales")), "'Q1 Sales'");
    }

    #[test]
    fn header_ranges() {
        let users = TabName::from("Users");
        assert_eq!(header_row(&users), "'Users'!1:1");
        assert_eq!(header_cells(&users, 3), "'Users'!A1:C1");
        assert_eq!(header_cells(&users, 28), "'Users'!A1:AB1");
    }
}
