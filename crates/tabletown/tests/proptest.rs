//! Property-based tests for table rendering using proptest.

use proptest::prelude::*;
use tabletown::{display_width, expand_tabs, Align, BorderStyle, Table};

// ============================================================================
// Strategies
// ============================================================================

/// Cell text mixing narrow, wide, tab and line-break characters.
fn cell_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 ,.日本한국🚀\t\n]{0,12}"
}

fn border_strategy() -> impl Strategy<Value = BorderStyle> {
    prop::sample::select(BorderStyle::ALL.to_vec())
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop::sample::select(vec![Align::Left, Align::Center, Align::Right])
}

/// Headers plus rows of matching length.
fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..5).prop_flat_map(|columns| {
        (
            prop::collection::vec(cell_strategy(), columns),
            prop::collection::vec(prop::collection::vec(cell_strategy(), columns), 0..5),
        )
    })
}

fn bold(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("\x1b[1m{line}\x1b[0m"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every output line has the same display width.
    #[test]
    fn lines_have_uniform_width(
        (headers, rows) in table_strategy(),
        border in border_strategy(),
        align in prop::collection::vec(align_strategy(), 0..5),
    ) {
        let table = Table::new(headers).rows(rows).border(border).align(align);
        let width = table.layout().unwrap().line_width() as isize;
        let output = table.render().unwrap();

        for line in output.split('\n') {
            prop_assert_eq!(display_width(line), width);
        }
    }

    /// Output has three dividers plus one line per header and row line.
    #[test]
    fn line_count_follows_heights((headers, rows) in table_strategy()) {
        let table = Table::new(headers).rows(rows);
        let layout = table.layout().unwrap();
        let output = table.render().unwrap();

        let expected = 3 + layout.header_height + layout.row_heights.iter().sum::<usize>();
        prop_assert_eq!(output.split('\n').count(), expected);
        prop_assert!(!output.ends_with('\n'));
    }

    /// Wrapping tab-free cells in ANSI styling leaves the layout unchanged.
    #[test]
    fn ansi_styling_keeps_layout((headers, rows) in table_strategy()) {
        let headers: Vec<String> = headers.iter().map(|h| h.replace('\t', " ")).collect();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|c| c.replace('\t', " ")).collect())
            .collect();
        let plain = Table::new(headers.iter()).rows(rows.iter().map(|r| r.iter()));
        let styled = Table::new(headers.iter().map(|h| bold(h)))
            .rows(rows.iter().map(|r| r.iter().map(|c| bold(c))));

        prop_assert_eq!(plain.layout().unwrap(), styled.layout().unwrap());
    }

    /// Expanding tabs twice changes nothing and leaves no tabs behind.
    #[test]
    fn expand_tabs_is_idempotent(text in "[a-z日🚀\t\n]{0,20}", tab_stop in 0usize..10) {
        let once = expand_tabs(&text, tab_stop);
        prop_assert!(!once.contains('\t'));
        prop_assert_eq!(expand_tabs(&once, tab_stop), once.clone());
        prop_assert_eq!(once.split('\n').count(), text.split('\n').count());
    }

    /// A tab always advances to the next multiple of the tab stop.
    #[test]
    fn tab_reaches_next_stop(prefix in "[a-z日]{0,12}", tab_stop in 1usize..10) {
        let expanded = expand_tabs(&format!("{prefix}\tx"), tab_stop);
        let column = display_width(&expanded) as usize - 1;
        prop_assert_eq!(column % tab_stop, 0);
        prop_assert!(column > display_width(&prefix) as usize);
    }

    /// ANSI sequences never count toward display width.
    #[test]
    fn ansi_is_invisible(text in "[a-zA-Z0-9 日本🚀]{0,20}", code in 0u8..108) {
        let styled = format!("\x1b[{code}m{text}\x1b[0m");
        prop_assert_eq!(display_width(&styled), display_width(&text));
    }
}
