//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    co2_calc!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read_file(".co2-calc.toml");
    assert!(content.contains("[rates]"));
    assert!(content.contains("[equivalence]"));
    assert!(content.contains("[chart]"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_file(".co2-calc.toml", "# existing config\n");

    co2_calc!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_file(".co2-calc.toml", "# existing config\n");

    co2_calc!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read_file(".co2-calc.toml").contains("car = 0.12"));
}

#[test]
fn generated_config_is_picked_up() {
    let fixture = TestFixture::new();

    co2_calc!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    co2_calc!()
        .current_dir(fixture.path())
        .args(["--color", "never", "calc", "-d", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.00 kg"));
}
