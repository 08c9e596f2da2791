//! Menu listing shown before the first prompt.

use std::io::{BufRead, Write};

use hotel_core::MenuStore;

use crate::error::AppResult;
use crate::terminal::Terminal;

const BANNER: &str = "--- Welcome to Our Hotel ---";
const RULE: &str = "----------------------------";

/// Lines of the menu listing, names padded to the longest one.
///
/// ```text
///
/// --- Welcome to Our Hotel ---
/// Available Menu Items:
///   Biryani   : Rs. 100
///   Whiterice : Rs. 60
/// ----------------------------
/// ```
pub fn menu_lines(menu: &MenuStore) -> Vec<String> {
    let width = menu.longest_name_len();

    let mut lines = vec![
        String::new(),
        BANNER.to_string(),
        "Available Menu Items:".to_string(),
    ];
    lines.extend(
        menu.entries()
            .iter()
            .map(|entry| format!("  {:<width$} : {}", entry.display_name(), entry.unit_price)),
    );
    lines.push(RULE.to_string());
    lines
}

/// Prints the menu.
pub fn show_menu<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    menu: &MenuStore,
) -> AppResult<()> {
    terminal.say_all(menu_lines(menu))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_listing() {
        let lines = menu_lines(&MenuStore::standard());
        assert_eq!(
            lines,
            [
                "",
                "--- Welcome to Our Hotel ---",
                "Available Menu Items:",
                "  Biryani   : Rs. 100",
                "  Chapathi  : Rs. 50",
                "  Parota    : Rs. 50",
                "  Ragimudda : Rs. 30",
                "  Whiterice : Rs. 60",
                "----------------------------",
            ]
        );
    }

    #[test]
    fn test_alignment_follows_longest_name() {
        let menu = MenuStore::new([("tea", 10), ("masala dosa", 80)]).unwrap();
        let lines = menu_lines(&menu);
        assert_eq!(lines[3], "  Tea         : Rs. 10");
        assert_eq!(lines[4], "  Masala dosa : Rs. 80");
    }
}
