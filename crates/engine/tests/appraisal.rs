use std::{fs, path::Path, sync::Arc};

use engine::{
    Engine, EngineError, Formula, FsVault, JsonSettingsStore, MemorySettingsStore, MemoryVault,
    ScanPolicy, Settings, SettingsStore, VaultStats,
};
use tempfile::{TempDir, tempdir};

type FsEngine = Engine<FsVault, JsonSettingsStore>;

fn settings_path(root: &Path) -> std::path::PathBuf {
    root.join(".obsidian/plugins/commodity/data.json")
}

fn vault_with_notes(notes: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (name, content) in notes {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

async fn fs_engine(root: &Path, policy: ScanPolicy) -> FsEngine {
    Engine::builder()
        .source(FsVault::new(root))
        .settings_store(JsonSettingsStore::new(settings_path(root)))
        .scan_policy(policy)
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn empty_vault_is_worth_nothing() {
    let dir = tempdir().unwrap();
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    let appraisal = engine.appraise(Formula::Legacy).await.unwrap();
    assert_eq!(appraisal.stats, VaultStats::default());
    assert_eq!(appraisal.age_days, 0.0);
    assert_eq!(appraisal.valuation.raw, 0.0);
    assert_eq!(appraisal.display, "US$0.00");
    assert_eq!(appraisal.wallet_value, 0.0);
}

#[tokio::test]
async fn appraisal_matches_formula_and_persists_wallet() {
    let dir = vault_with_notes(&[
        ("inbox.md", "First thought. Second thought!"),
        ("projects/plan.md", "Ship it?! Maybe...\n\nLater"),
        ("attachments/photo.png", "not a note"),
    ]);
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    let appraisal = engine.appraise(Formula::Reworked).await.unwrap();
    assert_eq!(
        appraisal.stats,
        VaultStats {
            total_characters: 30 + 25,
            total_words: 4 + 4,
            total_files: 2,
            total_sentences: 2 + 2,
        }
    );
    assert_eq!(
        appraisal.valuation.raw,
        Formula::Reworked.raw_value(&appraisal.stats, 0.0)
    );
    assert_eq!(appraisal.valuation.converted, appraisal.valuation.raw);

    let stored = JsonSettingsStore::new(settings_path(dir.path()))
        .load()
        .await
        .unwrap();
    assert_eq!(stored.wallet_value, appraisal.valuation.raw);
}

#[tokio::test]
async fn wallet_accumulates_across_sessions() {
    let dir = vault_with_notes(&[("a.md", "One. Two. Three."), ("b.md", "Four words right here")]);

    let mut expected = 0.0;
    for formula in [Formula::Legacy, Formula::Reworked, Formula::Legacy] {
        let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;
        expected += engine.appraise(formula).await.unwrap().valuation.raw;
    }

    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;
    let wallet = engine.wallet().await;
    assert!((wallet.raw - expected).abs() < 1e-12);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appraisals_keep_every_deposit() {
    let dir = vault_with_notes(&[("note.md", "Some text. More text!")]);
    let engine = Arc::new(fs_engine(dir.path(), ScanPolicy::Strict).await);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        tasks.spawn(async move { engine.appraise(Formula::Legacy).await });
    }
    let mut expected = 0.0;
    while let Some(result) = tasks.join_next().await {
        expected += result.unwrap().unwrap().valuation.raw;
    }

    assert!((engine.wallet().await.raw - expected).abs() < 1e-12);
    let stored = JsonSettingsStore::new(settings_path(dir.path()))
        .load()
        .await
        .unwrap();
    assert!((stored.wallet_value - expected).abs() < 1e-12);
}

#[tokio::test]
async fn currency_changes_conversion_and_symbol() {
    let dir = tempdir().unwrap();
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    let settings = engine.set_currency("eur").await.unwrap();
    assert_eq!(settings.currency, "EUR");

    fs::write(dir.path().join("note.md"), "x".repeat(122_000)).unwrap();
    let appraisal = engine.appraise(Formula::Legacy).await.unwrap();
    assert_eq!(appraisal.valuation.converted, appraisal.valuation.raw * 0.92);
    assert!(appraisal.display.starts_with('€'));

    let wallet = engine.wallet().await;
    assert_eq!(wallet.raw, appraisal.valuation.raw);
    assert_eq!(wallet.converted, wallet.raw * 0.92);
}

#[tokio::test]
async fn unknown_currency_is_kept_verbatim() {
    let dir = tempdir().unwrap();
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    engine.set_currency("DOGE").await.unwrap();
    engine.set_language("de").await.unwrap();
    fs::write(dir.path().join("note.md"), "x".repeat(244_000)).unwrap();

    let appraisal = engine.appraise(Formula::Legacy).await.unwrap();
    assert_eq!(appraisal.currency, "DOGE");
    assert_eq!(appraisal.language, "de");
    assert_eq!(appraisal.valuation.converted, appraisal.valuation.raw);
    assert!(appraisal.display.starts_with('$'));
}

#[tokio::test]
async fn invalid_utf8_note_is_still_counted() {
    let dir = vault_with_notes(&[("ok.md", "Hello.")]);
    fs::write(dir.path().join("café.md"), b"Caf\xe9 au lait.").unwrap();
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    let appraisal = engine.appraise(Formula::Legacy).await.unwrap();
    assert!(appraisal.skipped.is_empty());
    assert_eq!(appraisal.stats.total_files, 2);
    assert_eq!(appraisal.stats.total_characters, 6 + 13);
    assert_eq!(appraisal.stats.total_words, 1 + 3);
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_notes_follow_scan_policy() {
    let dir = vault_with_notes(&[("good.md", "Readable. Yes.")]);
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("bad.md")).unwrap();

    let strict = fs_engine(dir.path(), ScanPolicy::Strict).await;
    let err = strict.appraise(Formula::Legacy).await.unwrap_err();
    assert!(matches!(err, EngineError::Read { .. }));
    assert_eq!(strict.wallet().await.raw, 0.0);

    let lenient = fs_engine(dir.path(), ScanPolicy::SkipUnreadable).await;
    let appraisal = lenient.appraise(Formula::Legacy).await.unwrap();
    assert_eq!(appraisal.stats.total_files, 1);
    assert_eq!(appraisal.skipped, vec![std::path::PathBuf::from("bad.md")]);
}

#[tokio::test]
async fn sentinel_file_gives_a_small_age() {
    let dir = vault_with_notes(&[(".obsidian/app.json", "{}")]);
    let engine = fs_engine(dir.path(), ScanPolicy::Strict).await;

    let appraisal = engine.appraise(Formula::Reworked).await.unwrap();
    // Zero on filesystems without creation times.
    assert!(appraisal.age_days >= 0.0 && appraisal.age_days < 1.0);
}

#[tokio::test]
async fn builder_requires_collaborators() {
    let err = Engine::<MemoryVault, MemorySettingsStore>::builder()
        .source(MemoryVault::new())
        .build()
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::MissingCollaborator("settings store"));
}

#[tokio::test]
async fn stored_settings_are_loaded_at_startup() {
    let store = MemorySettingsStore::new(Settings {
        currency: "JPY".to_string(),
        language: "ja".to_string(),
        wallet_value: 20_000.0,
        ..Settings::default()
    });
    let engine = Engine::builder()
        .source(MemoryVault::new())
        .settings_store(store)
        .build()
        .await
        .unwrap();

    let wallet = engine.wallet().await;
    assert_eq!(wallet.converted, 3_000_000.0);
    assert_eq!(wallet.display, "JP¥3M");
}
