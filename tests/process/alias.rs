use crate::support::Harness;
use hsh::output::BufferedWriter;
use hsh::process::alias::{Alias, AliasError, print_alias, set_alias, unset_alias};
use hsh::process::builtin::Outcome;
use hsh::store::list::List;

fn aliases(list: &List) -> Vec<String> {
    list.to_strings()
}

#[test]
fn set_then_unset_round_trip() {
    let mut list = List::new();
    assert_eq!(set_alias(&mut list, "foo=bar"), Ok(()));
    assert!(list.starts_with("foo", Some('=')).is_some());

    assert_eq!(unset_alias(&mut list, "foo="), Ok(()));
    assert!(list.starts_with("foo", Some('=')).is_none());
    assert_eq!(
        unset_alias(&mut list, "foo="),
        Err(AliasError::NotFound("foo".into()))
    );
}

#[test]
fn unset_requires_separator() {
    let mut list = List::new();
    set_alias(&mut list, "foo=bar").unwrap();
    assert_eq!(
        unset_alias(&mut list, "foo"),
        Err(AliasError::MissingSeparator("foo".into()))
    );
    assert_eq!(list.len(), 1);
}

#[test]
fn set_without_separator_fails_and_leaves_list_unchanged() {
    let mut list = List::new();
    set_alias(&mut list, "ll=ls -al").unwrap();

    assert_eq!(
        set_alias(&mut list, "foo"),
        Err(AliasError::MissingSeparator("foo".into()))
    );
    assert_eq!(aliases(&list), vec!["ll=ls -al"]);
}

#[test]
fn redefinition_replaces_and_moves_to_tail() {
    let mut list = List::new();
    set_alias(&mut list, "a=1").unwrap();
    set_alias(&mut list, "b=2").unwrap();
    set_alias(&mut list, "a=3").unwrap();
    assert_eq!(aliases(&list), vec!["b=2", "a=3"]);
}

#[test]
fn empty_value_unsets() {
    let mut list = List::new();
    set_alias(&mut list, "a=1").unwrap();
    assert_eq!(set_alias(&mut list, "a="), Ok(()));
    assert!(list.is_empty());
    assert!(set_alias(&mut list, "a=").is_err());
}

#[test]
fn unset_matches_whole_name_only() {
    let mut list = List::new();
    set_alias(&mut list, "lsd=x").unwrap();
    set_alias(&mut list, "ls=y").unwrap();
    unset_alias(&mut list, "ls=").unwrap();
    assert_eq!(aliases(&list), vec!["lsd=x"]);
}

#[test]
fn print_alias_quotes_value() {
    let mut list = List::new();
    set_alias(&mut list, "foo=bar").unwrap();
    set_alias(&mut list, "eq=a=b").unwrap();

    let mut out = BufferedWriter::new(Vec::new());
    assert!(print_alias(list.head(), &mut out));
    assert!(print_alias(list.starts_with("eq", Some('=')), &mut out));
    assert!(!print_alias(None, &mut out));
    out.flush().unwrap();
    assert_eq!(out.get_ref().as_slice(), b"foo='bar'\neq='a=b'\n");
}

#[test]
fn lists_all_aliases_when_no_operands() {
    let mut h = Harness::new();
    assert_eq!(h.run(&Alias::new(), &["alias", "ll=ls -al"]), Outcome::Continue);
    assert_eq!(h.run(&Alias::new(), &["alias", "gs=git status"]), Outcome::Continue);
    h.clear_output();

    assert_eq!(h.run(&Alias::new(), &["alias"]), Outcome::Continue);
    assert_eq!(h.stdout(), "ll='ls -al'\ngs='git status'\n");
    assert!(h.stderr().is_empty());
}

#[test]
fn queries_specific_aliases_and_ignores_missing() {
    let mut h = Harness::new();
    h.run(&Alias::new(), &["alias", "ll=ls -al", "gs=git status"]);
    h.clear_output();

    let outcome = h.run(&Alias::new(), &["alias", "gs", "missing", "ll"]);
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(h.stdout(), "gs='git status'\nll='ls -al'\n");
    assert!(h.stderr().is_empty());
}

#[test]
fn mixed_operands_define_and_print_in_order() {
    let mut h = Harness::new();
    let outcome = h.run(&Alias::new(), &["alias", "x=1", "x", "y=2", "y"]);
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(h.stdout(), "x='1'\ny='2'\n");
    assert_eq!(aliases(&h.session.alias), vec!["x=1", "y=2"]);
}
