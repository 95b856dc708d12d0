mod common;

use common::{
    AUTHOR, TOKEN, VALID_CSV, ZERO_MINUTES_CSV, temp_config, w2j, w2j_against, write_temp,
};
use mockito::{Matcher, Server};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use std::fs;

#[test]
fn test_push_quiet_transfers_all_entries() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/worklogs/")
        .match_header("authorization", format!("Basic {TOKEN}").as_str())
        .match_body(Matcher::PartialJson(json!({
            "author": { "name": AUTHOR },
            "dateStarted": "2016-01-27T18:00:00.000+0000",
            "billedSeconds": 0
        })))
        .with_status(200)
        .expect(2)
        .create();

    let csv = write_temp("push_quiet", "csv", VALID_CSV);

    w2j_against(&server.url(), "push_quiet")
        .args(["push", "--quiet", &csv])
        .assert()
        .success()
        .stdout(contains("Transferred 2 entries."));

    mock.assert();
}

#[test]
fn test_push_with_missing_info_sends_nothing() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let csv = write_temp("push_missing", "csv", ZERO_MINUTES_CSV);

    w2j_against(&server.url(), "push_missing")
        .args(["push", "-q", &csv])
        .assert()
        .failure()
        .stderr(contains("Missing data for:"))
        .stderr(contains("ABC-3 forgot the time"))
        .stderr(contains("ABC-1 fix bug").not());

    mock.assert();
}

#[test]
fn test_push_declined_confirmation_sends_nothing() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let csv = write_temp("push_declined", "csv", VALID_CSV);

    w2j_against(&server.url(), "push_declined")
        .args(["push", "--confirm", &csv])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("2 entries:"))
        .stdout(contains("ABC-1\t30 min\tfix bug"))
        .stdout(contains("Does this look alright?"))
        .stderr(contains("Canceled"));

    mock.assert();
}

#[test]
fn test_push_accepted_confirmation() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/worklogs/")
        .with_status(200)
        .expect(2)
        .create();

    let csv = write_temp("push_accepted", "csv", VALID_CSV);

    w2j_against(&server.url(), "push_accepted")
        .args(["push", "--confirm", &csv])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("Transferred 2 entries."));

    mock.assert();
}

#[test]
fn test_push_reads_stdin_with_custom_delimiter() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/worklogs/")
        .match_body(Matcher::PartialJson(json!({
            "issue": { "key": "XY-7" },
            "comment": "pair programming, again",
            "timeSpentSeconds": 5400
        })))
        .with_status(200)
        .expect(1)
        .create();

    w2j_against(&server.url(), "push_stdin")
        .args(["push", "-d", ";"])
        .write_stdin(";02/02/16\nXY-7 pair programming, again;90\n")
        .assert()
        .success()
        .stdout(contains("Transferred 1 entries."));

    mock.assert();
}

#[test]
fn test_push_server_error_is_reported() {
    let mut server = Server::new();
    let _ok = server
        .mock("POST", "/worklogs/")
        .match_body(Matcher::PartialJson(json!({ "issue": { "key": "ABC-1" } })))
        .with_status(200)
        .create();
    let _ko = server
        .mock("POST", "/worklogs/")
        .match_body(Matcher::PartialJson(json!({ "issue": { "key": "ABC-2" } })))
        .with_status(500)
        .with_body("tempo is down")
        .create();

    let csv = write_temp("push_server_error", "csv", VALID_CSV);

    w2j_against(&server.url(), "push_server_error")
        .args(["push", "-q", &csv])
        .assert()
        .failure()
        .stderr(contains("Submitted 1 of 2 entries, 1 failed"))
        .stderr(contains("FAILED ABC-2 write docs"))
        .stderr(contains("tempo is down"));
}

#[test]
fn test_push_dry_run_needs_no_configuration() {
    let csv = write_temp("push_dry_run", "csv", VALID_CSV);

    w2j()
        .args(["--config", &temp_config("push_dry_run"), "push", "--dry-run", &csv])
        .assert()
        .success()
        .stdout(contains("2 entries:"))
        .stdout(contains("ABC-2\t45 min\twrite docs"))
        .stdout(contains("nothing was sent"));
}

#[test]
fn test_push_without_credentials_fails() {
    let csv = write_temp("push_no_credentials", "csv", VALID_CSV);

    w2j()
        .args(["--config", &temp_config("push_no_credentials"), "push", "-q", &csv])
        .assert()
        .failure()
        .stderr(contains("Configuration error"))
        .stderr(contains("base_url"));
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_config("init_print");

    w2j().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok(), "config file created");

    w2j()
        .env("JIRA_TOKEN", "do-not-print-me")
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api: tempo"))
        .stdout(contains("18:00:00.000+0000"))
        .stdout(contains("********"))
        .stdout(contains("do-not-print-me").not());
}

#[test]
fn test_config_check_reports_missing_fields() {
    let cfg = write_temp(
        "config_check",
        "conf",
        "api: jira\nbase_url: https://jira.example.com/rest/api/2\n",
    );

    w2j()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stdout(contains("Missing configuration value: token"))
        .stdout(contains("author").not());
}
