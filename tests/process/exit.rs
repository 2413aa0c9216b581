use crate::support::Harness;
use hsh::process::builtin::Outcome;
use hsh::process::exit::Exit;

#[test]
fn exit_without_operand_uses_last_status() {
    let mut h = Harness::new();
    h.session.status = 9;

    assert_eq!(h.run(&Exit::new(), &["exit"]), Outcome::Exit(None));
    assert_eq!(h.session.err_num, -1);
    assert_eq!(h.session.exit_status(), 9);
    assert!(h.stderr().is_empty());
}

#[test]
fn exit_with_numeric_operand_sets_err_num() {
    for (arg, code) in [("0", 0), ("3", 3), ("255", 255), ("+12", 12)] {
        let mut h = Harness::new();
        let outcome = h.run(&Exit::new(), &["exit", arg]);

        assert_eq!(outcome, Outcome::Exit(Some(code)));
        assert_eq!(outcome.code(), -2);
        assert_eq!(h.session.err_num, code);
        assert_eq!(h.session.exit_status(), code);
    }
}

#[test]
fn exit_with_illegal_number_reports_and_continues() {
    for arg in ["abc", "-1", "4x", "99999999999"] {
        let mut h = Harness::new();
        let outcome = h.run(&Exit::new(), &["exit", arg]);

        assert_eq!(outcome, Outcome::Error);
        assert_eq!(outcome.code(), 1);
        assert_eq!(h.session.status, 2);
        assert_eq!(h.session.err_num, 0);
        assert_eq!(h.stderr(), format!("hsh: 0: exit: Illegal number: {arg}\n"));
        assert!(h.stdout().is_empty());
    }
}

#[test]
fn extra_operands_are_ignored() {
    let mut h = Harness::new();
    assert_eq!(h.run(&Exit::new(), &["exit", "4", "junk"]), Outcome::Exit(Some(4)));
}
