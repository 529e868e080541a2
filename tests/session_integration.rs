use assert_cmd::Command;
use predicates::prelude::*;

fn rolo() -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_startup_renders_seeded_roster() {
    rolo()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicates::str::contains("Arthur Dent"))
        .stdout(predicates::str::contains("dent@example.com"))
        .stdout(predicates::str::contains("George Smiley"))
        .stdout(predicates::str::contains("work, business"));
}

#[test]
fn test_no_seed_starts_empty() {
    rolo()
        .arg("--no-seed")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicates::str::contains("No contacts."))
        .stdout(predicates::str::contains("Arthur Dent").not());
}

#[test]
fn test_no_seed_add_assigns_id_one() {
    rolo()
        .arg("--no-seed")
        .write_stdin("add Solo solo@example.com 999\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact added (1): Solo"));
}

#[test]
fn test_add_rerenders_roster_and_confirms() {
    rolo()
        .write_stdin("add \"Tricia McMillan\" trillian@example.com 444 --tags science\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Contact added (3): Tricia McMillan",
        ))
        // once in the re-rendered roster, once in the confirmation
        .stdout(predicates::str::contains("Tricia McMillan").count(2));
}

#[test]
fn test_delete_drops_contact_from_roster() {
    rolo()
        .write_stdin("delete 1\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact deleted (1): Arthur Dent"))
        // startup roster + confirmation only; gone from later renders
        .stdout(predicates::str::contains("Arthur Dent").count(2))
        // startup + delete re-render + list
        .stdout(predicates::str::contains("George Smiley").count(3));
}

#[test]
fn test_update_replaces_contact_wholesale() {
    rolo()
        .write_stdin("update 2 \"Jim Prideaux\" jim@example.com 777\nshow 2\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact updated (2): Jim Prideaux"))
        .stdout(predicates::str::contains("Email: jim@example.com"))
        // only the startup roster still shows the old name
        .stdout(predicates::str::contains("George Smiley").count(1));
}

#[test]
fn test_filter_requires_all_tags() {
    rolo()
        .write_stdin("filter work\n")
        .assert()
        .success()
        // startup + filter match
        .stdout(predicates::str::contains("Arthur Dent").count(2))
        // untagged, so the filter render leaves him out
        .stdout(predicates::str::contains("George Smiley").count(1));
}

#[test]
fn test_filter_with_unknown_tag_matches_nobody() {
    rolo()
        .write_stdin("filter never\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("No contacts."));
}

#[test]
fn test_tags_lists_duplicates() {
    rolo()
        .write_stdin("add \"Ricki Tarr\" tarr@example.com 555 --tags work\ntags\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("work, business, work"));
}

#[test]
fn test_export_emits_json_without_empty_tags() {
    rolo()
        .write_stdin("export\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"full_name\": \"Arthur Dent\""))
        .stdout(predicates::str::contains("\"full_name\": \"George Smiley\""))
        // only the tagged contact carries a tags key on the wire
        .stdout(predicates::str::contains("\"tags\"").count(1));
}

#[test]
fn test_unknown_id_reports_not_found_and_session_continues() {
    rolo()
        .write_stdin("delete 9\nshow 9\nlist\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact not found: 9").count(2))
        // startup + list, so the loop survived both errors
        .stdout(predicates::str::contains("George Smiley").count(2));
}

#[test]
fn test_empty_name_is_rejected() {
    rolo()
        .write_stdin("add \"\" someone@example.com 123\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Name cannot be empty"));
}

#[test]
fn test_unparseable_input_keeps_session_alive() {
    rolo()
        .write_stdin("frobnicate\ndelete abc\nlist\n")
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized subcommand"))
        .stderr(predicates::str::contains("invalid value"))
        // startup + list
        .stdout(predicates::str::contains("George Smiley").count(2));
}

#[test]
fn test_quit_stops_reading_commands() {
    rolo()
        .write_stdin("quit\nlist\n")
        .assert()
        .success()
        // startup only; the list after quit is never read
        .stdout(predicates::str::contains("George Smiley").count(1));
}

#[test]
fn test_scripted_session_walkthrough() {
    rolo()
        .write_stdin("add X x@x.com 000 --tags a,b\nfilter a\ndelete 1\ntags\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact added (3): X"))
        // add re-render + filter match + delete re-render
        .stdout(predicates::str::contains("x@x.com").count(3))
        .stdout(predicates::str::contains("Contact deleted (1): Arthur Dent"))
        .stdout(predicates::str::contains("a, b"));
}
