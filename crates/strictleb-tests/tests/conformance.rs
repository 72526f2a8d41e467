//! Conformance tests: the built-in vector suite run through the harness
//! runner, with the progress protocol checked against insta snapshots.
//!
//! The snapshots are inline, so a deliberate protocol change shows up as a
//! diff in this file (accept it with `cargo insta review`).

use insta::assert_snapshot;
use strictleb_harness::{
    CaseFailure, Runner, RunnerConfig, TABLES, TestCase, conformance_suite, expect_err, expect_ok,
};
use strictleb_wire::{ErrorKind, LebType, LebValue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(config: RunnerConfig, cases: &[TestCase]) -> (strictleb_harness::Report, String) {
    let mut out = Vec::new();
    let report = Runner::new(config)
        .run(cases, &mut out)
        .unwrap_or_else(|e| panic!("runner aborted: {e}"));
    (report, String::from_utf8(out).expect("protocol output is UTF-8"))
}

// ── Built-in suite ────────────────────────────────────────────────────────────

#[test]
fn full_suite_passes() {
    let (report, output) = run(RunnerConfig::default(), &conformance_suite());

    assert_eq!(report.total, 8);
    assert_eq!(report.failed, 0, "failures: {:?}", report.failures);
    assert_eq!(report.exit_code(), 0);
    assert_snapshot!(output.trim_end(), @r"
    ##>8
    ##+i32leb
    ##-ok
    ##+i32leb_ext
    ##-ok
    ##+u32leb
    ##-ok
    ##+u32leb_ext
    ##-ok
    ##+i64leb
    ##-ok
    ##+i64leb_ext
    ##-ok
    ##+u64leb
    ##-ok
    ##+u64leb_ext
    ##-ok
    ");
}

#[test]
fn filtered_suite_announces_selection() {
    let config = RunnerConfig {
        filter: Some("64leb_ext".to_string()),
        ..RunnerConfig::default()
    };
    let (report, output) = run(config, &conformance_suite());

    assert!(report.is_success());
    assert_snapshot!(output.trim_end(), @r"
    ##>2
    ##+i64leb_ext
    ##-ok
    ##+u64leb_ext
    ##-ok
    ");
}

#[test]
fn every_table_checks_clean() {
    for table in &TABLES {
        table
            .check()
            .unwrap_or_else(|f| panic!("table {} failed: {f}", table.name));
    }
}

// ── Failing cases ─────────────────────────────────────────────────────────────

#[test]
fn failures_are_counted_and_described() {
    let cases = vec![
        TestCase::new("zero", || expect_ok(LebType::I32, &[0x00], LebValue::I32(0), 1)),
        TestCase::new("overflow_claimed_ok", || {
            expect_ok(
                LebType::U32,
                &[0x83, 0x86, 0x89, 0x8C, 0x10],
                LebValue::U32(0),
                5,
            )
        }),
        TestCase::new("truncated_claimed_too_long", || {
            expect_err(LebType::I64, &[0x80], ErrorKind::TooLong)
        }),
        TestCase::new("custom", || Err(CaseFailure::new("custom predicate said no"))),
    ];
    let config = RunnerConfig {
        verbose: true,
        ..RunnerConfig::default()
    };
    let (report, output) = run(config, &cases);

    assert_eq!(report.failed, 3);
    assert_eq!(report.exit_code(), 3);
    assert_snapshot!(output.trim_end(), @r"
    ##>4
    ##+zero
    ##-ok
    ##+overflow_claimed_ok
      expected 0 (len 5), but failed with status -3: u32 LEB128 overflow: terminating byte 0x10 at offset 4 is out of range or non-canonical
    ##-fail
    ##+truncated_claimed_too_long
      expected TooLong failure, but failed with truncated i64 LEB128: input ended at offset 1 with continuation bit set
    ##-fail
    ##+custom
      custom predicate said no
    ##-fail
    ");
}

#[test]
fn quiet_mode_keeps_protocol_bare() {
    let cases = vec![TestCase::new("always_fails", || {
        expect_ok(LebType::I32, &[0x80], LebValue::I32(0), 1)
    })];
    let (report, output) = run(RunnerConfig::default(), &cases);

    assert_eq!(report.failed, 1);
    assert_eq!(output, "##>1\n##+always_fails\n##-fail\n");
    assert!(
        report.failures[0]
            .failure
            .message
            .contains("status -1")
    );
}
