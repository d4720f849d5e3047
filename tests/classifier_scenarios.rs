//! Integration tests for file-based classifier training and inference.

use std::fs;
use std::io::Write;

use rota::classifier::{ClassifierConfig, VectorSpaceClassifier};
use rota::error::Result;
use tempfile::TempDir;

fn write_training_file(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

#[test]
fn test_end_to_end_two_class_scenario() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_training_file(
        &dir,
        "intents.txt",
        &["motor|motor calismiyor", "fren|fren sertlesti"],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    // Exact training text of a sole-member label: top match with
    // cosine self-similarity close to 1.0.
    let result = classifier.classify("motor calismiyor")?;
    assert_eq!(result.intent, "motor");
    assert!(result.score > 0.99, "score was {}", result.score);

    // No token overlap with either class: both scores 0.0, falls to the
    // greeting label under the 0.1 threshold, original score preserved.
    let result = classifier.classify("bugun hava cok guzel")?;
    assert_eq!(result.intent, "selamlama");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.scores["motor"], 0.0);
    assert_eq!(result.scores["fren"], 0.0);

    Ok(())
}

#[test]
fn test_comments_and_malformed_lines_ignored() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_training_file(
        &dir,
        "intents.txt",
        &[
            "# training data",
            "",
            "motor|motor calismiyor",
            "no pipe here",
            "fren|",
            "   ",
            "FREN|fren sertlesti",
        ],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    assert_eq!(classifier.examples().len(), 2);
    assert_eq!(classifier.labels(), vec!["motor", "fren"]);

    Ok(())
}

#[test]
fn test_missing_training_file_degrades_gracefully() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    assert!(classifier.examples().is_empty());
    assert_eq!(classifier.vocabulary_size(), 0);

    // Empty input: the greeting fallback with the fixed 0.5 score.
    let result = classifier.classify("")?;
    assert_eq!(result.intent, "selamlama");
    assert_eq!(result.score, 0.5);
    assert_eq!(result.scores["selamlama"], 0.5);

    // Token-bearing input with no trained centroids is out of scope.
    let result = classifier.classify("motor calismiyor")?;
    assert_eq!(result.intent, "kapsam_disi");
    assert_eq!(result.score, 0.0);
    assert!(result.scores.is_empty());

    Ok(())
}

#[test]
fn test_classify_is_deterministic_across_calls() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_training_file(
        &dir,
        "intents.txt",
        &[
            "motor|motor calismiyor",
            "motor|motor yag yakiyor",
            "fren|fren sertlesti",
            "klima|klima sogutmuyor",
        ],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    let first = classifier.classify("motor yag problemi var")?;
    for _ in 0..10 {
        let again = classifier.classify("motor yag problemi var")?;
        assert_eq!(again.intent, first.intent);
        assert_eq!(again.score, first.score);
        assert_eq!(again.scores, first.scores);
    }

    Ok(())
}

#[test]
fn test_grey_zone_between_thresholds() -> Result<()> {
    let dir = TempDir::new().unwrap();
    // One long single-example class: an input sharing one token out of
    // many lands between the greeting (0.10) and domain (0.15)
    // thresholds.
    let path = write_training_file(
        &dir,
        "intents.txt",
        &[
            "motor|motor yag hararet titreme sarsinti rolanti kayis supap piston krank",
            "fren|fren balata disk kampana hidrolik pedal",
        ],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    let result = classifier.classify("krank sorunu dediler gecen hafta servise goturdugumde")?;
    // The best label survives the greeting threshold but must not pass
    // the stricter in-domain check.
    assert_eq!(result.intent, "motor");
    assert!(
        result.score >= 0.1 && result.score <= 0.15,
        "expected a grey-zone score, got {}",
        result.score
    );
    assert!(!classifier.is_in_domain("krank sorunu dediler gecen hafta servise goturdugumde")?);

    Ok(())
}

#[test]
fn test_domain_check_passes_on_strong_match() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_training_file(
        &dir,
        "intents.txt",
        &["motor|motor calismiyor", "fren|fren sertlesti"],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    assert!(classifier.is_in_domain("motor calismiyor")?);
    assert!(!classifier.is_in_domain("bugun hava cok guzel")?);
    assert!(!classifier.is_in_domain("")?);

    Ok(())
}

#[test]
fn test_top_intents_and_keywords() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_training_file(
        &dir,
        "intents.txt",
        &[
            "motor|motor calismiyor",
            "fren|fren sertlesti",
            "klima|klima sogutmuyor",
        ],
    );

    let classifier = VectorSpaceClassifier::from_file(&path, ClassifierConfig::default())?;

    let top = classifier.top_intents("motor calismiyor", 2)?;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "motor");
    assert!(top[0].1 > top[1].1);

    let keywords = classifier.category_keywords("motor");
    assert!(keywords.contains(&"motor".to_string()));
    assert!(keywords.contains(&"calismiyor".to_string()));

    Ok(())
}
