#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("escala-cli").unwrap()
}

#[test]
fn generate_saves_under_documents_folder() {
    let home = tempdir().unwrap();
    cli()
        .env("HOME", home.path())
        .args(["generate", "--names", "Ana,Bruno", "--month", "2", "--year", "2021"])
        .args(["--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Escala de trabalho salva em"));

    let folder = home.path().join("Documentos").join("home_presencial");
    let files: Vec<_> = std::fs::read_dir(&folder).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn too_many_names_fails() {
    let home = tempdir().unwrap();
    let names: Vec<String> = (0..21).map(|i| format!("p{i}")).collect();
    let joined = names.join(",");
    cli()
        .env("HOME", home.path())
        .args(["generate", "--names", joined.as_str(), "--month", "4", "--year", "2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Erro: too many employees"));

    assert!(!home.path().join("Documentos").exists());
}

#[test]
fn unparseable_month_fails() {
    let home = tempdir().unwrap();
    cli()
        .env("HOME", home.path())
        .args(["generate", "--names", "Ana", "--month", "abril", "--year", "2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn weeks_lists_partition() {
    cli()
        .args(["weeks", "--month", "5", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Semana 0: 01/05/2024 02/05/2024 03/05/2024",
        ))
        .stdout(predicate::str::contains("Semana 4: 27/05/2024"));
}

#[test]
fn failed_dump_leaves_no_workbook() {
    let home = tempdir().unwrap();
    let missing = home.path().join("missing").join("escala.json");
    cli()
        .env("HOME", home.path())
        .args(["generate", "--names", "Ana", "--month", "4", "--year", "2024"])
        .arg("--out-json")
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Erro:"));

    assert!(!home.path().join("Documentos").exists());
}
