#![forbid(unsafe_code)]
use escala::{generate_and_save_schedule, SchedError};
use tempfile::tempdir;

// Un seul test : HOME est global au processus.
#[test]
fn saves_under_home_documents_folder() {
    let home = tempdir().unwrap();
    std::env::set_var("HOME", home.path());
    let folder = home.path().join("Documentos").join("home_presencial");

    let names: Vec<String> = (0..21).map(|i| format!("p{i}")).collect();
    assert!(matches!(
        generate_and_save_schedule(&names.join(","), 2021, 2),
        Err(SchedError::TooManyEmployees { count: 21, max: 20 })
    ));
    assert!(!home.path().join("Documentos").exists());

    let path = generate_and_save_schedule("Ana,Bruno", 2021, 2).unwrap();
    assert_eq!(path.parent(), Some(folder.as_path()));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("escala_trabalho_"), "{name}");
    assert!(name.ends_with(".xlsx"), "{name}");
    assert_eq!(name.len(), "escala_trabalho_2021-02-01_00-00-00.xlsx".len());
    assert!(path.is_file());
}
