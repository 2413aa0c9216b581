use crate::support::Harness;
use hsh::process;
use hsh::process::builtin::map::BuiltinMap;
use hsh::process::builtin::{BUILTIN_NAMES, Outcome};

#[test]
fn every_builtin_name_is_registered() {
    let map = BuiltinMap::new();
    for name in BUILTIN_NAMES {
        assert!(map.contains(name), "{name} missing");
    }
    assert!(!map.contains("ls"));
}

#[test]
fn invoke_returns_none_for_unknown_commands() {
    let map = BuiltinMap::new();
    let mut h = Harness::new();
    h.session.set_args(vec!["ls".into()]);
    assert!(map.invoke("ls", &mut h.session).is_none());
}

#[test]
fn execute_counts_lines_for_diagnostics() {
    let map = BuiltinMap::new();
    let mut h = Harness::new();

    h.session.set_args(vec!["exit".into(), "nope".into()]);
    assert_eq!(process::execute(&map, &mut h.session), Outcome::Error);
    h.session.set_args(vec!["exit".into(), "again".into()]);
    assert_eq!(process::execute(&map, &mut h.session), Outcome::Error);

    assert_eq!(
        h.stderr(),
        "hsh: 1: exit: Illegal number: nope\nhsh: 2: exit: Illegal number: again\n"
    );
}

#[test]
fn execute_reports_unknown_commands() {
    let map = BuiltinMap::new();
    let mut h = Harness::new();
    h.session.linecount_flag = true;
    h.session.set_args(vec!["frobnicate".into()]);

    assert_eq!(process::execute(&map, &mut h.session), Outcome::Error);
    assert_eq!(h.session.status, process::NOT_FOUND_STATUS);
    assert!(!h.session.linecount_flag);
    assert_eq!(h.stderr(), "hsh: 1: frobnicate: not found\n");
}

#[test]
fn execute_with_empty_argv_is_a_no_op() {
    let map = BuiltinMap::new();
    let mut h = Harness::new();
    assert_eq!(process::execute(&map, &mut h.session), Outcome::Continue);
    assert_eq!(h.session.line_count, 0);
}

#[test]
fn outcome_codes_match_the_integer_protocol() {
    assert_eq!(Outcome::Continue.code(), 0);
    assert_eq!(Outcome::Error.code(), 1);
    assert_eq!(Outcome::Exit(None).code(), Outcome::EXIT_CODE);
    assert_eq!(Outcome::EXIT_CODE, -2);
    assert!(Outcome::Exit(Some(0)).is_exit());
    assert!(!Outcome::Error.is_exit());
}
