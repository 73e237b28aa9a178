//! End-to-end menu sessions driven through in-memory reader/writer pairs.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use recurse_core::api::{AlgorithmError, AppConfig, MenuError, MenuSession, Outcome};

fn session(input: &str) -> (Result<Outcome, MenuError>, String) {
    let cfg = AppConfig::default();
    let mut out = Vec::new();
    let res = MenuSession::new(&cfg).run(&mut Cursor::new(input), &mut out);
    (res, String::from_utf8(out).expect("menu output is utf-8"))
}

fn last_line(out: &str) -> &str {
    out.lines().last().unwrap_or_default()
}

/// Test: the menu lists every operation with its 1-based index
#[test]
fn test_menu_listing() {
    let (_, out) = session("");
    let lines: Vec<&str> = out.lines().take(4).collect();
    assert_eq!(
        lines,
        vec!["1: MergeSort", "2: Fibonacci", "3: FibonacciMemo", "4: Palindrome"]
    );
}

/// Test: each operation end to end
#[test]
fn test_each_operation() {
    let cases = [
        (
            "1\n5 3 1 4 2\n",
            Outcome::Integers(vec![1, 2, 3, 4, 5]),
            "Choose a parameter of type list: [1, 2, 3, 4, 5]",
        ),
        (
            "1\n\n",
            Outcome::Integers(vec![]),
            "Choose a parameter of type list: []",
        ),
        (
            "2\n10\n",
            Outcome::Number(55),
            "Choose a parameter of type int: 55",
        ),
        (
            "3\n10\n",
            Outcome::Number(55),
            "Choose a parameter of type int: 55",
        ),
        (
            "4\nracecar\n",
            Outcome::Flag(true),
            "Choose a parameter of type str: true",
        ),
        (
            "4\nhello\n",
            Outcome::Flag(false),
            "Choose a parameter of type str: false",
        ),
    ];

    for (input, expected, tail) in cases {
        let (res, out) = session(input);
        assert_eq!(res.expect(input), expected, "{input:?}");
        assert!(last_line(&out).ends_with(tail), "{input:?}: {out:?}");
    }
}

/// Test: character sort when the list is not all integers
#[test]
fn test_merge_sort_characters() {
    let (res, out) = session("1\nsort\n");
    assert_eq!(res.unwrap(), Outcome::Chars(vec!['o', 'r', 's', 't']));
    assert!(out.ends_with("['o', 'r', 's', 't']\n"));
}

/// Test: a bare run of digits is sorted digit by digit
#[test]
fn test_merge_sort_bare_digits() {
    let (res, out) = session("1\n53142\n");
    assert_eq!(res.unwrap(), Outcome::Chars(vec!['1', '2', '3', '4', '5']));
    assert!(out.ends_with("['1', '2', '3', '4', '5']\n"));
}

/// Test: both fibonacci entries agree
#[test]
fn test_fibonacci_entries_agree() {
    for n in 0..=20 {
        let (naive, _) = session(&format!("2\n{n}\n"));
        let (memo, _) = session(&format!("3\n{n}\n"));
        assert_eq!(naive.unwrap(), memo.unwrap(), "n={n}");
    }
}

/// Test: memoized entry handles indices the naive one could not finish
#[test]
fn test_large_memoized_index() {
    let (res, _) = session("3\n150\n");
    assert_eq!(
        res.unwrap(),
        Outcome::Number(9_969_216_677_189_303_386_214_405_760_200)
    );
}

/// Test: indices past the largest representable value fail fast for both entries
#[test]
fn test_index_too_large_reports_overflow() {
    for input in ["3\n1000000\n", "3\n4294967295\n", "2\n187\n", "2\n1000000\n"] {
        let (res, out) = session(input);
        assert!(
            matches!(res, Err(MenuError::Algorithm(AlgorithmError::Overflow { .. }))),
            "{input:?}: {res:?}"
        );
        assert!(out.ends_with("Choose a parameter of type int: "), "{input:?}");
    }
}

/// Test: user errors are reported, never defaulted
#[test]
fn test_user_errors() {
    let (res, out) = session("9\n");
    assert!(matches!(res, Err(MenuError::SelectionOutOfRange { .. })));
    assert!(!out.contains("Choose a parameter"));

    let (res, _) = session("fib\n");
    assert!(matches!(res, Err(MenuError::InvalidSelection(_))));

    let (res, _) = session("2\nseven\n");
    assert!(matches!(res, Err(MenuError::InvalidParameter { kind: "int", .. })));

    let (res, _) = session("3\n-4\n");
    assert!(matches!(res, Err(MenuError::InvalidParameter { .. })));
}

/// Test: error messages are readable
#[test]
fn test_error_display() {
    let (res, _) = session("9\n");
    assert_eq!(
        res.unwrap_err().to_string(),
        "selection 9 is out of range (expected 1..=4)"
    );
}
