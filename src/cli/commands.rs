//! Command implementations for the Rota CLI.

use std::collections::BTreeMap;
use std::path::Path;

use crate::classifier::config::ClassifierConfig;
use crate::classifier::vsm::VectorSpaceClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::evaluate::evaluator::IntentEvaluator;

/// Execute a CLI command.
pub fn execute_command(args: RotaArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_text(classify_args.clone(), &args),
        Command::Keywords(keywords_args) => show_keywords(keywords_args.clone(), &args),
        Command::Evaluate(evaluate_args) => run_evaluation(evaluate_args.clone(), &args),
    }
}

/// Load the classifier configuration selected by the global flags.
fn load_config(cli_args: &RotaArgs) -> Result<ClassifierConfig> {
    match &cli_args.config {
        Some(path) => ClassifierConfig::from_json_file(path),
        None => Ok(ClassifierConfig::default()),
    }
}

/// Train a classifier from the given data file.
fn build_classifier(data: &Path, cli_args: &RotaArgs) -> Result<VectorSpaceClassifier> {
    let config = load_config(cli_args)?;
    let classifier = VectorSpaceClassifier::from_file(data, config)?;

    if cli_args.verbosity() > 1 && !is_json(cli_args) {
        println!(
            "Trained on {} examples, {} categories, {} vocabulary entries",
            classifier.examples().len(),
            classifier.labels().len(),
            classifier.vocabulary_size()
        );
        println!();
    }

    Ok(classifier)
}

/// Classify a single text.
fn classify_text(args: ClassifyArgs, cli_args: &RotaArgs) -> Result<()> {
    let classifier = build_classifier(&args.data, cli_args)?;

    let classification = classifier.classify(&args.text)?;
    let in_domain = classifier.is_in_domain(&args.text)?;
    let top = match args.top {
        Some(n) => Some(
            classifier
                .top_intents(&args.text, n)?
                .into_iter()
                .map(|(intent, score)| IntentScore { intent, score })
                .collect(),
        ),
        None => None,
    };

    let output = ClassificationOutput {
        description: classifier.intent_description(&classification.intent).to_string(),
        intent: classification.intent,
        score: classification.score,
        in_domain,
        scores: classification.scores.into_iter().collect::<BTreeMap<_, _>>(),
        top,
    };

    if is_json(cli_args) {
        output_json(&output, cli_args)
    } else {
        print_classification(&output, cli_args);
        Ok(())
    }
}

/// Show the strongest keywords of a category.
fn show_keywords(args: KeywordsArgs, cli_args: &RotaArgs) -> Result<()> {
    let classifier = build_classifier(&args.data, cli_args)?;
    let intent = args.intent.trim().to_lowercase();

    let output = KeywordsOutput {
        description: classifier.intent_description(&intent).to_string(),
        keywords: classifier.category_keywords(&intent),
        intent,
    };

    if is_json(cli_args) {
        output_json(&output, cli_args)
    } else {
        print_keywords(&output, cli_args);
        Ok(())
    }
}

/// Evaluate classification quality and optionally persist the report.
fn run_evaluation(args: EvaluateArgs, cli_args: &RotaArgs) -> Result<()> {
    let classifier = build_classifier(&args.data, cli_args)?;

    let mut evaluator = IntentEvaluator::new(&classifier)
        .with_test_ratio(args.ratio)
        .with_seed(args.seed);
    evaluator.prepare_test_data(&args.test_file, &args.data)?;

    let results = evaluator.evaluate()?;
    let misclassified = evaluator.misclassified(args.misclassified)?;

    if let Some(report_path) = &args.report {
        evaluator.save_report(report_path)?;
    }

    if is_json(cli_args) {
        let output = EvaluationOutput {
            results,
            misclassified,
            report_path: args
                .report
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        };
        output_json(&output, cli_args)
    } else {
        print!("{}", evaluator.render_report()?);
        if let Some(report_path) = &args.report
            && cli_args.verbosity() > 0
        {
            println!("Report saved to {}", report_path.display());
        }
        Ok(())
    }
}
