use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn mvdict() -> Command {
    Command::cargo_bin("mvdict").unwrap()
}

#[test]
fn cli_version() {
    mvdict()
        .args(["--version"])
        .assert()
        .success()
        .stdout(contains("mvdict"));
}

#[test]
fn cli_exit_terminates() {
    mvdict().write_stdin("EXIT\n").assert().success();
}

#[test]
fn cli_eof_terminates() {
    // Closing stdin without EXIT ends the loop cleanly.
    mvdict().write_stdin("").assert().success();
}

#[test]
fn cli_add_and_query() {
    mvdict()
        .write_stdin("ADD foo bar\nADD baz bang\nKEYS\nMEMBERS foo\nEXIT\n")
        .assert()
        .success()
        .stdout(
            contains(") Added")
                .and(contains("1) baz\n2) foo"))
                .and(contains("1) bar")),
        );
}

#[test]
fn cli_empty_set_rendering() {
    mvdict()
        .write_stdin("KEYS\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("(empty set)"));
}

#[test]
fn cli_error_messages() {
    mvdict()
        .write_stdin("MEMBERS nope\nADD foo bar\nADD foo bar\nREMOVE foo nope\nEXIT\n")
        .assert()
        .success()
        .stdout(
            contains(") ERROR, key does not exist")
                .and(contains(") ERROR, value already exists"))
                .and(contains(") ERROR, value does not exist")),
        );
}

#[test]
fn cli_arity_and_unknown_verb() {
    mvdict()
        .write_stdin("ADD foo\nbogus\nEXIT\n")
        .assert()
        .success()
        .stdout(
            contains(") ERROR, Incorrect number of arguments")
                .and(contains(") ERROR, Unsupported operation; please try again")),
        );
}

#[test]
fn cli_scenario_session() {
    mvdict()
        .write_stdin(
            "ADD foo bar\nADD foo baz\nADD baz bar\nINTERSECTION foo baz\nREMOVE foo bar\nREMOVEALL baz\nITEMS\nVALUEEXISTS foo baz\nVALUEEXISTS foo bar\nEXIT\n",
        )
        .assert()
        .success()
        .stdout(
            contains("1) bar")
                .and(contains(") Removed"))
                .and(contains("1) foo: baz"))
                .and(contains(") true"))
                .and(contains(") false")),
        );
}

#[test]
fn cli_custom_prompt() {
    mvdict()
        .args(["--prompt", "mv> "])
        .write_stdin("EXIT\n")
        .assert()
        .success()
        .stdout(contains("mv> "));
}
