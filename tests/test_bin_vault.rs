mod utils;

use std::fs;

use utils::{run, run_in, scratch_dir};

#[test]
fn short_help() {
    let output = run(&["-h"]);
    dbg!(&output);

    assert_eq!(output.exit_code, 0);
    assert!(output.stdout.contains(env!("CARGO_PKG_DESCRIPTION")));
    assert!(output.stdout.contains("init"));
    assert!(output.stdout.contains("lock"));
    assert!(output.stdout.contains("unlock"));
    assert!(output.stdout.contains("temp"));
    assert!(output.stdout.contains("print"));
    assert!(output.stdout.contains("passwd"));
    assert!(output.stdout.contains("`vault --help`"));
}

#[test]
fn long_help() {
    let output = run(&["--help"]);
    dbg!(&output);

    assert_eq!(output.exit_code, 0);
    assert!(output.stdout.contains(env!("CARGO_PKG_DESCRIPTION")));
    assert!(output.stdout.contains("hybrid construction"));
}

#[test]
fn version() {
    let output = run(&["--version"]);
    dbg!(&output);

    assert_eq!(output.exit_code, 0);
    assert!(output.stdout.contains(env!("CARGO_PKG_NAME")));
    assert!(output.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_argument_exits_with_code_2() {
    let output = run(&["bogus"]);
    dbg!(&output);
    assert_eq!(output.exit_code, 2);
}

#[test]
fn init_then_second_init_fails_precondition() {
    let dir = scratch_dir("init-twice");

    let output = run_in(&dir, &["init", "secrets", "--no-rsa"], Some("swordfish\nswordfish\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert!(dir.join("secrets.vt").exists());

    let output = run_in(&dir, &["init", "secrets", "--no-rsa"], Some("swordfish\nswordfish\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 1);
}

#[test]
fn lock_unlock_round_trip_preserves_content() {
    let dir = scratch_dir("lock-unlock");
    fs::write(dir.join("secrets.txt"), "the crow flies at midnight").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("hunter2\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert!(dir.join("secrets.vt").exists());
    assert!(!dir.join("secrets.txt").exists());

    let output = run_in(&dir, &["unlock", "secrets", "--no-rsa"], Some("hunter2\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert!(!dir.join("secrets.vt").exists());
    assert!(dir.join("secrets.txt").exists());

    let content = fs::read_to_string(dir.join("secrets.txt")).unwrap();
    assert_eq!(content, "the crow flies at midnight");
}

#[test]
fn unlock_with_wrong_password_fails() {
    let dir = scratch_dir("unlock-wrong-password");
    fs::write(dir.join("secrets.txt"), "payload").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("correct-password\n"));
    assert_eq!(output.exit_code, 0);

    let output = run_in(&dir, &["unlock", "secrets", "--no-rsa"], Some("wrong-password\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("wrong password"));
    assert!(dir.join("secrets.vt").exists());
}

#[test]
fn lock_without_plain_file_fails_precondition() {
    let dir = scratch_dir("lock-missing-plain");
    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("pass\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 1);
}

#[test]
fn print_clean_outputs_exactly_the_plaintext() {
    let dir = scratch_dir("print-clean");
    fs::write(dir.join("secrets.txt"), "hello vault").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("pass\n"));
    assert_eq!(output.exit_code, 0);

    let output = run_in(
        &dir,
        &["print", "secrets", "--no-rsa", "--clean-print"],
        Some("pass\n"),
    );
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "hello vault\n");
}

#[test]
fn passwd_rekeys_and_old_password_no_longer_works() {
    let dir = scratch_dir("passwd");
    fs::write(dir.join("secrets.txt"), "rekey me").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("old-pw\n"));
    assert_eq!(output.exit_code, 0);

    let output = run_in(
        &dir,
        &["passwd", "secrets", "--no-rsa"],
        Some("old-pw\nnew-pw\nnew-pw\n"),
    );
    dbg!(&output);
    assert_eq!(output.exit_code, 0);

    let output = run_in(&dir, &["print", "secrets", "--no-rsa", "--clean-print"], Some("old-pw\n"));
    assert_eq!(output.exit_code, 1);

    let output = run_in(&dir, &["print", "secrets", "--no-rsa", "--clean-print"], Some("new-pw\n"));
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "rekey me\n");
}

#[test]
fn temp_unlocks_then_relocks() {
    let dir = scratch_dir("temp");
    fs::write(dir.join("secrets.txt"), "temporary").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa"], Some("pass\n"));
    assert_eq!(output.exit_code, 0);

    let output = run_in(
        &dir,
        &["temp", "secrets", "--no-rsa", "--temp-seconds", "0"],
        Some("pass\n"),
    );
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert!(dir.join("secrets.vt").exists());
    assert!(!dir.join("secrets.txt").exists());
}

#[test]
fn verbose_flag_emits_step_tracing_on_stderr() {
    let dir = scratch_dir("verbose");
    fs::write(dir.join("secrets.txt"), "traced").unwrap();

    let output = run_in(&dir, &["lock", "secrets", "--no-rsa", "-v"], Some("pass\n"));
    dbg!(&output);
    assert_eq!(output.exit_code, 0);
    assert!(output.stderr.contains("verbose:"));

    let quiet = run_in(&dir, &["print", "secrets", "--no-rsa", "--clean-print"], Some("pass\n"));
    dbg!(&quiet);
    assert_eq!(quiet.exit_code, 0);
    assert!(!quiet.stderr.contains("verbose:"));
}
