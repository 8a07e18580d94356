//! End-to-end integration tests
//!
//! These tests validate the complete load/save pipeline using predefined CSV
//! test fixtures. Each fixture test:
//! 1. Loads input.csv from a fixture directory into a fresh ledger
//! 2. Checks the loaded and skipped row counts
//! 3. Saves the ledger to a temporary file
//! 4. Compares the saved file with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Lossless round trips (quoted commas, quotes, newlines, exact decimals)
//! - Malformed rows (short rows, unparseable fields, duplicate ids)
//! - Identifier continuity for files with gaps and unordered ids
//! - Unrecognized categories, CRLF line endings and surplus fields

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use finance_ledger::{
        ExpenseCategory, FinanceLedger, IncomeCategory, TransactionType,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a fixture by loading input.csv and comparing the re-saved output with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "round_trip")
    /// * `loaded` - Expected number of accepted rows
    /// * `skipped` - Expected number of skipped rows
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the output does not match.
    fn run_test_fixture(fixture_name: &str, loaded: usize, skipped: usize) -> FinanceLedger {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut ledger = FinanceLedger::new();
        let outcome = ledger.load_from_file(&input_path);
        assert!(outcome.success, "Load failed: {}", outcome.message);
        assert_eq!(outcome.loaded_count, loaded, "loaded count for {}", fixture_name);
        assert_eq!(outcome.skipped_count, skipped, "skipped count for {}", fixture_name);

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("ledger.csv");
        let saved = ledger.save_to_file(&output_path);
        assert!(saved.success, "Save failed: {}", saved.message);

        let actual_output = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read saved file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );

        ledger
    }

    #[rstest]
    #[case("round_trip", 5, 0)]
    #[case("malformed_rows", 2, 7)]
    #[case("unordered_ids", 3, 0)]
    #[case("unrecognized_category", 2, 0)]
    #[case("short_row_only", 0, 1)]
    #[case("crlf_line_endings", 2, 0)]
    #[case("extra_fields", 1, 0)]
    fn test_fixtures(#[case] fixture: &str, #[case] loaded: usize, #[case] skipped: usize) {
        run_test_fixture(fixture, loaded, skipped);
    }

    #[test]
    fn test_round_trip_descriptions_survive() {
        let ledger = run_test_fixture("round_trip", 5, 0);

        assert_eq!(ledger.get(2).unwrap().description, "Groceries, weekly");
        assert_eq!(ledger.get(3).unwrap().description, "Concert \"live\" tickets");
        assert_eq!(ledger.get(4).unwrap().description, "Note spanning\ntwo lines");
        assert_eq!(ledger.get(4).unwrap().amount, Decimal::new(3999, 3));
    }

    #[test]
    fn test_add_after_load_continues_past_max_id() {
        let mut ledger = run_test_fixture("unordered_ids", 3, 0);

        let ids: Vec<_> = ledger.get_all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);

        let added = ledger.add(
            NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
            Decimal::new(15, 0),
            ExpenseCategory::Food,
            "after load",
        )
        .unwrap();
        assert_eq!(added.id, 10);
    }

    #[test]
    fn test_short_row_only_clears_ledger() {
        let mut ledger = FinanceLedger::new();
        ledger.add(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Decimal::ONE,
            IncomeCategory::Gift,
            "replaced by load",
        )
        .unwrap();

        let outcome = ledger.load_from_file("tests/fixtures/short_row_only/input.csv");

        assert!(outcome.success);
        assert_eq!(outcome.loaded_count, 0);
        assert_eq!(outcome.skipped_count, 1);
        assert!(ledger.get_all().is_empty());
        let next = ledger.add(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            Decimal::ONE,
            IncomeCategory::Gift,
            "",
        )
        .unwrap();
        assert_eq!(next.id, 1);
    }

    #[test]
    fn test_missing_file_does_not_alter_ledger() {
        let mut ledger = FinanceLedger::new();
        ledger.add(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Decimal::new(42, 0),
            ExpenseCategory::Food,
            "kept",
        )
        .unwrap();
        let before = ledger.get_all().to_vec();

        let outcome = ledger.load_from_file("tests/fixtures/does_not_exist.csv");

        assert!(!outcome.success);
        assert!(outcome.message.contains("File not found"));
        assert_eq!(outcome.loaded_count, 0);
        assert_eq!(ledger.get_all(), before.as_slice());
    }

    #[test]
    fn test_full_session_round_trip_and_summary() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("ledger.csv");
        let day = |d| NaiveDate::from_ymd_opt(2024, 9, d).unwrap();

        let mut ledger = FinanceLedger::new();
        ledger.add(day(1), Decimal::new(5000, 0), IncomeCategory::Salary, "Salary").unwrap();
        ledger.add(day(2), Decimal::new(500, 0), IncomeCategory::Salary, "Bonus").unwrap();
        ledger.add(day(3), Decimal::new(200, 0), ExpenseCategory::Food, "Groceries").unwrap();
        ledger.add(day(4), Decimal::new(100, 0), ExpenseCategory::Food, "Restaurant").unwrap();
        ledger.add(day(5), Decimal::new(50, 0), ExpenseCategory::Transport, "Bus").unwrap();
        ledger.add(day(6), Decimal::new(7, 0), ExpenseCategory::Other, "a, \"b\"\nc").unwrap();

        assert!(ledger.delete(6));
        assert!(!ledger.delete(6));
        assert!(ledger.save_to_file(&path).success);

        let mut reloaded = FinanceLedger::new();
        assert!(reloaded.load_from_file(&path).success);
        assert_eq!(reloaded.get_all(), ledger.get_all());

        let first = reloaded.get_all().to_vec();
        assert!(reloaded.load_from_file(&path).success);
        assert_eq!(reloaded.get_all(), first.as_slice());

        let summary = reloaded.summary().unwrap();
        assert_eq!(summary.total_income, Decimal::new(5500, 0));
        assert_eq!(summary.total_expense, Decimal::new(350, 0));
        assert_eq!(summary.balance, Decimal::new(5150, 0));
        assert_eq!(
            summary.income_by_category.get(IncomeCategory::Salary),
            Some(Decimal::new(5500, 0))
        );
        assert_eq!(
            summary.expense_by_category.get(ExpenseCategory::Food),
            Some(Decimal::new(300, 0))
        );
        assert_eq!(
            summary.expense_by_category.get(ExpenseCategory::Transport),
            Some(Decimal::new(50, 0))
        );

        // Deleted id 6 is not reused within the same ledger
        let added = ledger.add(day(7), Decimal::ONE, ExpenseCategory::Food, "").unwrap();
        assert_eq!(added.id, 7);
        assert_eq!(added.tx_type(), TransactionType::Expense);
    }
}
