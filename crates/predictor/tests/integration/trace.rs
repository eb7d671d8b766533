//! Trace reader tests.

use std::io::{Cursor, Write};

use bpred::error::TraceError;
use bpred::trace::{Branch, TraceReader, parse_line};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("0x40a3f8 1", Branch::new(0x40a3f8, true))]
#[case("0X40A3F8 0", Branch::new(0x40a3f8, false))]
#[case("40a410 0", Branch::new(0x40a410, false))]
#[case("  ffffffffffffffff\t1  ", Branch::new(u64::MAX, true))]
fn test_parse_line(#[case] line: &str, #[case] branch: Branch) {
    assert_eq!(parse_line(line, 1).unwrap(), Some(branch));
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_parse_blank_line(#[case] line: &str) {
    assert_eq!(parse_line(line, 1).unwrap(), None);
}

#[rstest]
#[case("0x40a3f8")]
#[case("0x40a3f8 2")]
#[case("0x40a3f8 taken")]
#[case("0xzz 1")]
#[case("0x 1")]
#[case("0x1 1 extra")]
#[case("0x+ff 1")]
#[case("+ff 1")]
#[case("-1 0")]
fn test_parse_malformed(#[case] line: &str) {
    match parse_line(line, 7) {
        Err(TraceError::Malformed { line: 7, content }) => assert_eq!(content, line.trim()),
        other => panic!("expected malformed error, got {:?}", other),
    }
}

#[test]
fn test_reader_skips_blank_lines() {
    let input = "0x10 1\n\n0x14 0\n   \n0x18 1\n";
    let branches: Vec<Branch> = TraceReader::new(Cursor::new(input))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        branches,
        vec![
            Branch::new(0x10, true),
            Branch::new(0x14, false),
            Branch::new(0x18, true),
        ]
    );
}

#[test]
fn test_reader_reports_line_number() {
    let input = "0x10 1\n\nbogus\n0x18 1\n";
    let mut reader = TraceReader::new(Cursor::new(input));

    assert_eq!(reader.next().unwrap().unwrap(), Branch::new(0x10, true));
    let err = reader.next().unwrap().unwrap_err();
    assert!(matches!(err, TraceError::Malformed { line: 3, .. }));
    assert_eq!(err.to_string(), "malformed trace line 3: 'bogus'");
}

#[test]
fn test_reader_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 0..100u64 {
        writeln!(file, "0x{:x} {}", 0x1000 + i * 4, i % 2).unwrap();
    }
    file.flush().unwrap();

    let branches: Vec<Branch> = TraceReader::open(file.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(branches.len(), 100);
    assert_eq!(branches[3], Branch::new(0x100c, true));
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TraceReader::open(dir.path().join("missing.trace")).is_err());
}
