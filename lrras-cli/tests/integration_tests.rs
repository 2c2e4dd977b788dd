//! Integration tests for lrras-cli

use lrras_cli::{normalize, render_all, render_table, solve, CliError, TableConfig, TableStyle};
use lrras_core::{IndexOp, Scalar, SpaceIndex};

#[test]
fn test_every_table_has_four_rows() {
    for op in IndexOp::ALL {
        let table = render_table(op, &TableConfig::default());
        let rows = table.lines().filter(|line| line.contains(" |")).count();
        // header row plus one row per state
        assert_eq!(rows, 5, "{}", op.name());
    }
}

#[test]
fn test_tables_agree_with_index_algebra() {
    let config = TableConfig {
        header: false,
        ..TableConfig::default()
    };

    for op in IndexOp::ALL {
        let table = render_table(op, &config);
        for (row, a) in table.lines().zip(SpaceIndex::ALL) {
            let cells: Vec<i32> = row
                .split('|')
                .nth(1)
                .unwrap()
                .split_whitespace()
                .map(|cell| cell.parse().unwrap())
                .collect();
            let expected: Vec<i32> = SpaceIndex::ALL.iter().map(|&b| op.apply(a, b).code()).collect();
            assert_eq!(cells, expected, "{} row {}", op.name(), a);
        }
    }
}

#[test]
fn test_divide_by_self_is_real_on_diagonal() {
    let table = render_table(IndexOp::Divide, &TableConfig::symbolic());
    let rows: Vec<&str> = table.lines().skip(2).collect();
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.split('|').nth(1).unwrap().split_whitespace().collect();
        assert_eq!(cells[i], "R");
    }
}

#[test]
fn test_latex_tables() {
    let all = render_all(&TableConfig::latex());
    assert_eq!(all.matches(r"\hline").count(), 4 * 5);
    assert!(all.contains("μ_add (+)"));
    assert!(all.contains("μ_divide (/)"));
    assert!(!all.contains('|'));
}

#[test]
fn test_symbols_in_latex() {
    let config = TableConfig {
        style: TableStyle::Latex,
        ..TableConfig::symbolic()
    };
    let table = render_table(IndexOp::Add, &config);
    assert!(table.starts_with("   & N & Z & R & P \\\\\n"));
}

#[test]
fn test_normalize_scenarios() {
    assert_eq!(normalize(0.0, 0.0, 0).unwrap().to_string(), "(1, 0)");
    assert_eq!(normalize(f64::INFINITY, f64::INFINITY, 1).unwrap().to_string(), "(1, 2)");
    assert_eq!(
        normalize(f64::NEG_INFINITY, f64::NEG_INFINITY, 1).unwrap().to_string(),
        "(1, -1)"
    );
    assert_eq!(normalize(3.0, -2.0, 1).unwrap().to_string(), "(3-2i, 1)");
}

#[test]
fn test_normalize_json() {
    let s = normalize(3.0, -2.0, 1).unwrap();
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json, serde_json::json!({ "re": 3.0, "im": -2.0, "index": 1 }));
}

#[test]
fn test_solve_real_roots() {
    let report = solve(1.0, -3.0, 2.0).unwrap();
    assert_eq!(report.classical[0].as_deref(), Some("2"));
    assert_eq!(report.classical[1].as_deref(), Some("1"));
    assert_eq!(report.signed.as_deref(), Some("2"));
    assert_eq!(report.extended, Scalar::from(2));
    assert_eq!(report.substituted, Scalar::ZERO);
    assert!(report.vanishes());
}

#[test]
fn test_solve_impossible_equation() {
    let report = solve(0.0, 0.0, -2.0).unwrap();
    assert_eq!(report.classical, [None, None]);
    assert_eq!(report.extended.to_string(), "(1, 2)");
    assert_eq!(report.substituted, Scalar::ZERO);
}

#[test]
fn test_solve_json_report() {
    let report = solve(0.0, 0.0, -2.0).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["classical"], serde_json::json!([null, null]));
    assert_eq!(json["extended"]["index"], 2);
    assert_eq!(json["substituted"]["index"], 0);
}

#[test]
fn test_solve_rejects_nan() {
    let err = solve(1.0, f64::NAN, 1.0).unwrap_err();
    assert!(matches!(err, CliError::InvalidCoefficient { name: "b", .. }));
}
