//! Regression tests for the list-table codec

use super::*;
use crate::core::grid::{Grid, Row, Table};
use crate::utils::error::{ListTableError, SkipReason};
use pretty_assertions::assert_eq;

fn parse(input: &str) -> ParsedTable {
    parse_list_table(input, &ParseOptions::default()).unwrap()
}

fn grid(rows: Vec<Vec<&str>>) -> Grid {
    Grid::from_cells(rows)
}

#[test]
fn test_empty_input() {
    let parsed = parse("");
    assert!(parsed.grid.is_empty());
    assert!(!parsed.has_skipped());
    assert_eq!(parsed.fencing, Fencing::Unfenced);
}

#[test]
fn test_single_cell() {
    assert_eq!(parse("* - Cell content").grid, grid(vec![vec!["Cell content"]]));
}

#[test]
fn test_ragged_rows() {
    let parsed = parse("* - A\n* - B\n  - C");
    assert_eq!(parsed.grid, grid(vec![vec!["A"], vec!["B", "C"]]));
    let records = parsed.grid.to_records();
    assert_eq!(records[0].len(), 1);
    assert_eq!(records[1]["col2"], "C");
}

#[test]
fn test_multiline_continuation() {
    let parsed = parse("* - Line1\n    Line2\n  - Cell2");
    assert_eq!(parsed.grid, grid(vec![vec!["Line1\nLine2", "Cell2"]]));
}

#[test]
fn test_multiple_rows_with_blank_lines() {
    let input = "
* - Row1 Cell1
  - Row1 Cell2

* - Row2 Cell1

  - Row2 Cell2
        ";
    assert_eq!(
        parse(input).grid,
        grid(vec![
            vec!["Row1 Cell1", "Row1 Cell2"],
            vec!["Row2 Cell1", "Row2 Cell2"],
        ])
    );
}

#[test]
fn test_multiline_cells_in_several_columns() {
    let input = "
* - Cell 1 Line 1
    Cell 1 Line 2
    Cell 1 Line 3
  - Cell 2 Line 1
    Cell 2 Line 2
        ";
    assert_eq!(
        parse(input).grid,
        grid(vec![vec![
            "Cell 1 Line 1\nCell 1 Line 2\nCell 1 Line 3",
            "Cell 2 Line 1\nCell 2 Line 2",
        ]])
    );
}

#[test]
fn test_nested_list_keeps_relative_indentation() {
    let input = "
* - Cell1
    - SubCell1
      SubCell1 continued
  - Cell2
* - Cell3
    - Cell4
  - Cell3
    - Cell4
        ";
    assert_eq!(
        parse(input).grid,
        grid(vec![
            vec!["Cell1\n- SubCell1\n  SubCell1 continued", "Cell2"],
            vec!["Cell3\n- Cell4", "Cell3\n- Cell4"],
        ])
    );
}

#[test]
fn test_four_space_authoring() {
    let input = "
*   - A
      a2
    - B
*   - C
    - D
";
    assert_eq!(
        parse(input).grid,
        grid(vec![vec!["A\na2", "B"], vec!["C", "D"]])
    );
}

#[test]
fn test_cell_indent_locks_per_row() {
    // Row 1 locks at 3 spaces; row 2 locks at 2.
    let input = "* - A\n   - B\n   - C\n* - D\n  - E\n   continued";
    assert_eq!(
        parse(input).grid,
        grid(vec![vec!["A", "B", "C"], vec!["D", "E\ncontinued"]])
    );
}

#[test]
fn test_trailing_whitespace_stripped_leading_kept() {
    let input = "* - A   \n      indented   \n  - B\t";
    assert_eq!(parse(input).grid, grid(vec![vec!["A\n  indented", "B"]]));
}

#[test]
fn test_empty_cells() {
    let input = ":::{list-table}\n\n* - \n\n  - \n\n* - \n\n  - \n\n:::\n";
    let parsed = parse(input);
    assert_eq!(parsed.grid, grid(vec![vec!["", ""], vec!["", ""]]));
    assert_eq!(parsed.fencing, Fencing::Fenced);
}

#[test]
fn test_fences_and_directive() {
    let input = ":::{list-table} Prices\n:header-rows: 1\n:widths: 1 2\n\n* - Item\n  - Cost\n:::";
    let parsed = parse(input);
    assert_eq!(parsed.fencing, Fencing::Fenced);
    assert_eq!(parsed.directive.title.as_deref(), Some("Prices"));
    let options: Vec<(&str, &str)> = parsed
        .directive
        .options
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(options, vec![("header-rows", "1"), ("widths", "1 2")]);
    assert_eq!(parsed.grid, grid(vec![vec!["Item", "Cost"]]));
}

#[test]
fn test_orphan_cell_is_reported() {
    let parsed = parse("  - orphan cell");
    assert!(parsed.grid.is_empty());
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line, 1);
    assert_eq!(parsed.skipped[0].reason, SkipReason::OrphanCell);
    assert_eq!(parsed.skipped[0].text, "  - orphan cell");
}

#[test]
fn test_unrecognized_lines_are_reported() {
    let input = "stray\n* - A\nalso stray\n    more A\n:::\nafter";
    let parsed = parse(input);
    assert_eq!(parsed.grid, grid(vec![vec!["A\nmore A"]]));
    let reasons: Vec<(usize, SkipReason)> =
        parsed.skipped.iter().map(|s| (s.line, s.reason)).collect();
    assert_eq!(
        reasons,
        vec![
            (1, SkipReason::Unrecognized),
            (3, SkipReason::Unrecognized),
            (6, SkipReason::AfterFence),
        ]
    );
    assert_eq!(parsed.fencing, Fencing::MissingOpen);
}

#[test]
fn test_orphan_continuation() {
    let parsed = parse(":::{list-table}\n    dangling\n* - A\n:::");
    assert_eq!(parsed.skipped[0].reason, SkipReason::OrphanContinuation);
    assert_eq!(parsed.skipped[0].line, 2);
    assert_eq!(parsed.grid, grid(vec![vec!["A"]]));
}

#[test]
fn test_strict_mode_fails_on_orphan() {
    let options = ParseOptions {
        strict: true,
        require_fence: false,
    };
    match parse_list_table("* - A\n\n  - B\nstray", &options) {
        Err(ListTableError::MalformedMarkup { line, .. }) => assert_eq!(line, Some(4)),
        other => panic!("expected malformed markup, got {:?}", other),
    }
    assert!(parse_list_table("  - orphan cell", &options).is_err());
    assert!(parse_list_table("* - A\n  - B", &options).is_ok());
}

#[test]
fn test_require_fence() {
    let options = ParseOptions::strict();
    assert!(parse_list_table("* - A", &options).is_err());
    assert!(parse_list_table(":::{list-table}\n* - A", &options).is_err());
    assert!(parse_list_table(":::{list-table}\n* - A\n:::", &options).is_ok());
}

#[test]
fn test_crlf_input() {
    let parsed = parse(":::{list-table}\r\n\r\n* - A\r\n    a2\r\n  - B\r\n\r\n:::");
    assert_eq!(parsed.grid, grid(vec![vec!["A\na2", "B"]]));
    assert_eq!(parsed.fencing, Fencing::Fenced);
}

#[test]
fn test_indented_fence_is_content() {
    let parsed = parse(":::{list-table}\n* - A\n    :::\n  - B\n:::");
    assert_eq!(parsed.grid, grid(vec![vec!["A\n:::", "B"]]));
}

#[test]
fn test_serialize_default_layout() {
    let markup = serialize_grid(
        &grid(vec![vec!["A", "B"], vec!["C"]]),
        &SerializeOptions::default(),
    )
    .unwrap();
    assert_eq!(markup, ":::{list-table}\n\n* - A\n  - B\n\n* - C\n\n:::");
}

#[test]
fn test_serialize_compact_multiline() {
    let markup = serialize_grid(
        &grid(vec![vec!["Line1\nLine2", "Cell2"]]),
        &SerializeOptions::compact(),
    )
    .unwrap();
    assert_eq!(markup, ":::{list-table}\n* - Line1\n    Line2\n  - Cell2\n:::");
}

#[test]
fn test_serialize_crlf() {
    let options = SerializeOptions {
        line_ending: LineEnding::Crlf,
        ..SerializeOptions::compact()
    };
    let markup = serialize_grid(&grid(vec![vec!["a\r\nb"]]), &options).unwrap();
    assert_eq!(markup, ":::{list-table}\r\n* - a\r\n    b\r\n:::");
}

#[test]
fn test_serialize_row_without_cells() {
    let markup = serialize_grid(&Grid::from_rows(vec![Row::new()]), &SerializeOptions::compact())
        .unwrap();
    assert_eq!(markup, ":::{list-table}\n* - \n:::");
}

#[test]
fn test_serialize_table_with_directive() {
    let mut table = Table::new(grid(vec![vec!["x"]]));
    table.directive.title = Some("Prices".to_string());
    table
        .directive
        .options
        .insert("header-rows".to_string(), "1".to_string());
    table.directive.options.insert("class".to_string(), String::new());

    let markup = serialize_table(&table, &SerializeOptions::compact()).unwrap();
    assert_eq!(
        markup,
        ":::{list-table} Prices\n:header-rows: 1\n:class:\n* - x\n:::"
    );
    assert_eq!(parse(&markup).into_table(), table);
}

#[test]
fn test_empty_grid_policy() {
    let empty = Grid::new();
    let markup = serialize_grid(&empty, &SerializeOptions::default()).unwrap();
    assert_eq!(markup, ":::{list-table}\n\n:::");
    assert!(parse(&markup).grid.is_empty());

    let reject = SerializeOptions {
        empty_grid: EmptyGridPolicy::Reject,
        ..SerializeOptions::default()
    };
    assert_eq!(
        serialize_grid(&empty, &reject),
        Err(ListTableError::EmptyGridWrite)
    );
}

#[test]
fn test_round_trip_normal_form() {
    let grids = vec![
        grid(vec![vec!["A"]]),
        grid(vec![vec!["A", "B", "C"], vec!["D"], vec!["E", "F"]]),
        grid(vec![vec!["", ""], vec!["", "x"]]),
        grid(vec![vec!["Cell1\n- SubCell1\n  SubCell1 continued", "Cell2"]]),
        grid(vec![vec!["a\n- b", "c\n- d\n  - e"]]),
        grid(vec![vec!["\nstarts empty", "x\n* - not a row\n:::\n:name: not an option"]]),
        grid(vec![vec!["- leading dash", "* star"], vec!["tab\n\tindented"]]),
    ];

    for options in [SerializeOptions::default(), SerializeOptions::compact()] {
        for g in &grids {
            assert!(g.is_normalized(), "{:?} is not in normal form", g);
            let markup = serialize_grid(g, &options).unwrap();
            let parsed = parse(&markup);
            assert!(!parsed.has_skipped(), "skipped lines in:\n{}", markup);
            assert_eq!(&parsed.grid, g, "markup:\n{}", markup);
        }
    }
}

#[test]
fn test_round_trip_after_normalizing() {
    let raw = Grid::from_rows(vec![
        Row::from_cells(["  padded  ", "a\n\n  b  \n"]),
        Row::new(),
    ]);
    let normal = raw.normalized();
    let markup = serialize_grid(&raw, &SerializeOptions::default()).unwrap();
    assert_eq!(parse(&markup).grid, normal);
}

#[test]
fn test_reserialize_is_stable() {
    let input = "
:::{list-table}
*   - A
      more
    - B
* - C
   - D
:::";
    let first = serialize_grid(&parse(input).grid, &SerializeOptions::default()).unwrap();
    let second = serialize_grid(&parse(&first).grid, &SerializeOptions::default()).unwrap();
    assert_eq!(first, second);
}
