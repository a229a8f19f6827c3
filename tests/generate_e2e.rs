//! End-to-end generation from the bundled card data
//!
//! Each test writes into its own directory under the system temp dir and
//! checks that HTML, sprite sheets and the TTS save agree on the same layout.

use beat_cards::config::{SpriteConfig, TtsConfig};
use beat_cards::html::HtmlGenerator;
use beat_cards::layout::{PrintDeck, PrintRun, SheetGrid, SpriteLayout};
use beat_cards::loader::CardSet;
use beat_cards::logger::BuildLogger;
use beat_cards::sprite::font::Fonts;
use beat_cards::sprite::SpriteGenerator;
use beat_cards::tts::{GitHubLocation, TtsGenerator, TtsSave, SAVE_FILE_NAME};
use similar_asserts::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};

fn cards() -> CardSet {
    CardSet::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("card-data")).unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("beat-cards-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_html_documents_for_every_deck() {
    let cards = cards();
    let run = PrintRun::new(&cards, 5, 20);
    let dir = scratch_dir("html");
    let logger = BuildLogger::capturing();

    let docs = HtmlGenerator::new(&dir, &logger).generate(&run).unwrap();
    let names: Vec<String> = docs.iter().map(|d| d.file_name()).collect();
    assert_eq!(
        names,
        vec![
            "starter-cards.html",
            "pool-cards.html",
            "rhythm-cards.html",
            "judge-cards.html",
            "stumble-cards.html",
            "move-cards.html",
            "move-backs.html",
            "rhythm-backs.html",
            "judge-backs.html",
            "stumble-backs.html",
        ]
    );

    // 55 starter cards on 9-card sheets
    assert_eq!(docs[0].sheets, 7);
    // 20 stumble cards
    assert_eq!(docs[4].sheets, 3);
    let starter = fs::read_to_string(&docs[0].path).unwrap();
    assert_eq!(starter.matches("<div class=\"sheet\">").count(), 7);
    assert_eq!(starter.matches("class=\"card move-card\"").count(), 55);

    let logs = logger.logs();
    assert!(logs
        .iter()
        .any(|l| l.message == "Generated: stumble-cards.html (3 sheets)"));
}

#[test]
fn test_tts_save_matches_sprite_layout() {
    let cards = cards();
    let run = PrintRun::new(&cards, 5, 20);
    let layout = SpriteLayout::new(&run, SheetGrid::TTS_DEFAULT);
    let dir = scratch_dir("tts");
    let logger = BuildLogger::capturing();
    let config = TtsConfig {
        github_user: Some("dancer".into()),
        github_repo: Some("beat-by-beat".into()),
        ..TtsConfig::default()
    };
    let location = GitHubLocation::new("dancer", "beat-by-beat", "main", "output/tts");

    let path = TtsGenerator::new(&dir, &config, &logger)
        .write(&layout, &location)
        .unwrap();
    assert_eq!(path.file_name().unwrap().to_string_lossy(), SAVE_FILE_NAME);
    let save: TtsSave = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let nicknames: Vec<&str> = save.object_states.iter().map(|o| o.nickname.as_str()).collect();
    assert_eq!(
        nicknames,
        vec![
            "Starter Move Cards (5 Players)",
            "Pool Move Cards 1",
            "Pool Move Cards 2",
            "Rhythm Cards",
            "Judge Cards",
            "Stumble Cards",
        ]
    );

    // Every card of the print run appears in exactly one deck
    let total: usize = save.object_states.iter().map(|o| o.deck_ids.len()).sum();
    assert_eq!(total, run.total());

    for (i, (deck, slice)) in save.object_states.iter().zip(&layout.slices).enumerate() {
        let id = i as u32 + 1;
        let entry = &deck.custom_deck[&id.to_string()];
        assert!(entry.face_url.ends_with(&slice.face_file));
        assert_eq!(deck.deck_ids[0], id * 100 + slice.start as u32);
        assert!(deck.deck_ids.iter().all(|card| card % 100 < 70));
    }

    let pool = &save.object_states[1];
    assert_eq!(pool.deck_ids[0], 255);
    assert_eq!(layout.slices[1].deck, PrintDeck::Pool);
}

#[test]
fn test_sprite_files_match_layout() {
    let cards = cards();
    let run = PrintRun::new(&cards, 5, 20);
    let layout = SpriteLayout::new(&run, SheetGrid::TTS_DEFAULT);
    let dir = scratch_dir("sprites");
    let logger = BuildLogger::capturing();

    let config = SpriteConfig::default();
    let written = SpriteGenerator::with_fonts(&dir, &config, Fonts::none(), &logger)
        .generate(&layout)
        .unwrap();
    let mut names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "judge-back.png",
            "judge-cards.png",
            "move-back.png",
            "move-cards_1.png",
            "move-cards_2.png",
            "rhythm-back.png",
            "rhythm-cards.png",
            "stumble-back.png",
            "stumble-cards.png",
        ]
    );

    let sheet = image::open(dir.join("move-cards_1.png")).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (2048, 2048));
    let back = image::open(dir.join("move-back.png")).unwrap();
    assert_eq!((back.width(), back.height()), (204, 292));

    // Every file referenced by a deck slice exists
    for slice in &layout.slices {
        assert!(dir.join(&slice.face_file).is_file(), "{}", slice.face_file);
        assert!(dir.join(&slice.back_file).is_file(), "{}", slice.back_file);
    }
}

#[tokio::test]
async fn test_generate_with_configured_repo() {
    let cards = cards();
    let run = PrintRun::new(&cards, 3, 10);
    let layout = SpriteLayout::new(&run, SheetGrid::TTS_DEFAULT);
    let dir = scratch_dir("tts-async");
    let logger = BuildLogger::capturing();
    let config = TtsConfig {
        github_user: Some("dancer".into()),
        github_repo: Some("bbb".into()),
        branch: "gh-pages".into(),
        ..TtsConfig::default()
    };

    let path = TtsGenerator::new(&dir, &config, &logger)
        .generate(&layout)
        .await
        .unwrap();
    let text = fs::read_to_string(path).unwrap();
    // 33 starter and 19 pool moves share one sheet
    assert!(text.contains(
        "https://raw.githubusercontent.com/dancer/bbb/gh-pages/output/tts/move-cards.png"
    ));
    assert!(text.contains("\"Nickname\": \"Starter Move Cards (3 Players)\""));
}
