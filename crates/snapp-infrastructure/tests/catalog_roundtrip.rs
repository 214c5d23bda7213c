//! Catalog persistence through a temp config directory.

use snapp_core::repository::CatalogRepository;
use snapp_core::{Catalog, Persona, PersonaCatalog, TraitVector};
use snapp_infrastructure::TomlCatalogRepository;
use tempfile::TempDir;

#[tokio::test]
async fn saved_catalog_loads_back_identically() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlCatalogRepository::new(Some(temp_dir.path())).unwrap();

    let catalog = Catalog::builtin();
    repo.save(&catalog).await.unwrap();
    assert!(repo.path().exists());

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded, catalog);

    let content = std::fs::read_to_string(repo.path()).unwrap();
    assert!(content.contains(r#"version = "1.0.0""#));
    assert!(content.contains("[[persona]]"));
    assert!(content.contains("[[vaycover]]"));
}

#[tokio::test]
async fn edited_persona_changes_selection() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlCatalogRepository::new(Some(temp_dir.path())).unwrap();

    let mut catalog = Catalog::builtin();
    let mut personas: Vec<Persona> = catalog.personas.personas().to_vec();
    // Give the last persona a profile nobody else can beat for this user.
    personas[24].weights = TraitVector::new(0.0, 0.0, 0.0, 0.0, 1.0);
    catalog.personas = PersonaCatalog::new(personas);
    repo.save(&catalog).await.unwrap();

    let scorer = repo.load().await.unwrap().scorer().unwrap();
    let anxious = TraitVector::new(0.0, 0.0, 0.0, 0.0, 1.0);
    assert_eq!(
        scorer.select_persona(&anxious).unwrap().name(),
        "The Homebound Hustler"
    );
}

#[tokio::test]
async fn unsupported_version_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlCatalogRepository::new(Some(temp_dir.path())).unwrap();
    std::fs::write(repo.path(), "version = \"2.0.0\"\n").unwrap();
    assert!(repo.load().await.unwrap_err().is_config());
}

#[tokio::test]
async fn joins_unlock_rewards_and_persist() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlCatalogRepository::new(Some(temp_dir.path())).unwrap();

    // Tokyo starts at 9 of 20 with its first tier at 10 members.
    let (tokyo, unlocked) = repo.join_vaycover("vaycover-2").await.unwrap();
    assert_eq!(tokyo.squad_progress, 10);
    assert_eq!(unlocked, vec!["Ghibli Museum Tickets".to_string()]);

    let (tokyo, unlocked) = repo.join_vaycover("vaycover-2").await.unwrap();
    assert_eq!(tokyo.squad_progress, 11);
    assert!(unlocked.is_empty());

    let loaded = repo.load().await.unwrap();
    let tokyo = loaded.vaycovers.find("vaycover-2").unwrap();
    assert_eq!(tokyo.squad_progress, 11);
    assert_eq!(tokyo.latest_unlocked_reward(), Some("Ghibli Museum Tickets"));
}
