use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use latincy_dash::data::{Document, DocumentParser};
use latincy_dash::engine::{AnalysisConfig, Analyzer, SimilarityBand, VectorTable};
use latincy_dash::scoring::{classify_changes, to_u_only, CharMark};

#[derive(Parser, Debug)]
#[command(name = "latincy-dash")]
#[command(about = "Tables, core-vocabulary coverage and U/V scoring over LatinCy annotations")]
#[command(version)]
struct Args {
    /// YAML analysis configuration (limits, span label)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "tsv")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flat token table
    Tokens { input: PathBuf },
    /// Sentence-relative dependency table
    Deps { input: PathBuf },
    /// Core-vocabulary spans and coverage
    Core { input: PathBuf },
    /// Readable morphology for content tokens
    Morph { input: PathBuf },
    /// One sentence per line
    Sentences { input: PathBuf },
    /// Named-entity spans
    Entities { input: PathBuf },
    /// Score normalizer output against a reference
    Evaluate {
        #[arg(long)]
        source: String,
        #[arg(long)]
        normalized: String,
        #[arg(long)]
        reference: String,
    },
    /// Mark changed characters, optionally against a reference
    Highlight {
        #[arg(long)]
        original: String,
        #[arg(long)]
        normalized: String,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Convert text to u-only spelling
    UOnly { text: String },
    /// Nearest words from a JSON object of word vectors
    Similar {
        #[arg(long)]
        vectors: PathBuf,
        word: String,
        /// Compare against a second word instead of ranking
        #[arg(long)]
        against: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_yaml(path)?,
        None => AnalysisConfig::default(),
    };
    log::debug!("Configuration: {:?}", config);
    let analyzer = Analyzer::new(config);
    let json = matches!(args.format, OutputFormat::Json);

    match args.command {
        Command::Tokens { input } => {
            for doc in read_documents(&input)? {
                let table = analyzer.token_table(&doc);
                if table.truncated {
                    log::warn!("Document '{}': showing first {} tokens", doc.id, table.len());
                }
                println!("{}", if json { table.to_json_pretty() } else { table.to_tsv() });
            }
        }
        Command::Deps { input } => {
            for doc in read_documents(&input)? {
                let table = analyzer
                    .dependency_table(&doc)
                    .with_context(|| format!("Document '{}'", doc.id))?;
                log::info!("Document '{}': {} tokens processed", doc.id, table.tokens_processed);
                println!("{}", if json { table.to_json_pretty() } else { table.to_tsv() });
            }
        }
        Command::Core { input } => {
            for doc in read_documents(&input)? {
                let report = analyzer.core_vocabulary(&doc);
                if json {
                    println!("{}", report.to_json_pretty());
                    continue;
                }
                println!(
                    "Analyzed {} tokens with {} core vocabulary items ({:.2}%)",
                    report.content_tokens,
                    report.covered_tokens,
                    report.ratio() * 100.0
                );
                for (token, covered) in doc.tokens().zip(&report.covered) {
                    println!("{}\t{}", token.text, if *covered { analyzer.config().core_label.as_str() } else { "" });
                }
            }
        }
        Command::Morph { input } => {
            for doc in read_documents(&input)? {
                let table = analyzer.morphology_table(&doc);
                println!("{}", if json { table.to_json_pretty() } else { table.to_tsv() });
            }
        }
        Command::Sentences { input } => {
            for doc in read_documents(&input)? {
                let sentences = analyzer.sentences(&doc);
                if json {
                    println!("{}", serde_json::to_string_pretty(&sentences)?);
                } else {
                    println!("{}", sentences.join("\n"));
                }
            }
        }
        Command::Entities { input } => {
            for doc in read_documents(&input)? {
                let tokens: Vec<&str> = doc.tokens().map(|t| t.text.as_str()).collect();
                let entities = analyzer.entities(&doc);
                if json {
                    println!("{}", serde_json::to_string_pretty(&entities)?);
                    continue;
                }
                for ent in entities {
                    println!("{}\t{}", tokens[ent.start()..ent.end()].join(" "), ent.label);
                }
            }
        }
        Command::Evaluate {
            source,
            normalized,
            reference,
        } => {
            let summary = analyzer.score(&source, &normalized, &reference).summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Accuracy\t{:.1}%", summary.accuracy * 100.0);
                println!("Precision\t{:.1}%", summary.precision * 100.0);
                println!("Recall\t{:.1}%", summary.recall * 100.0);
                println!("F1\t{:.1}%", summary.f1 * 100.0);
                println!("Relevant characters\t{}", summary.counts.total_relevant);
                println!("Correct\t{}", summary.counts.correct);
                println!("Changes needed\t{}", summary.counts.changes_needed);
                println!("Changes made\t{}", summary.counts.changes_made);
                println!("True positives\t{}", summary.counts.true_positives);
                println!("False positives\t{}", summary.counts.false_positives);
                println!("False negatives\t{}", summary.counts.false_negatives);
            }
        }
        Command::Highlight {
            original,
            normalized,
            reference,
        } => {
            let marks = classify_changes(&original, &normalized, reference.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&marks)?);
            } else {
                // changed characters are bracketed, wrong ones with a trailing '!'
                let rendered: String = marks
                    .iter()
                    .map(|m| match m.mark {
                        CharMark::Unchanged => m.ch.to_string(),
                        CharMark::Correct => format!("[{}]", m.ch),
                        CharMark::Incorrect => format!("[{}!]", m.ch),
                    })
                    .collect();
                println!("{}", rendered);
            }
        }
        Command::UOnly { text } => println!("{}", to_u_only(&text)),
        Command::Similar {
            vectors,
            word,
            against,
        } => {
            let table = read_vectors(&vectors)?;
            match against {
                Some(other) => {
                    let score = table
                        .similarity(&word, &other)
                        .ok_or_else(|| anyhow!("No vectors to compare for '{}' and '{}'", word, other))?;
                    println!("{}\t{}\t{:.4}\t{}", word, other, score, SimilarityBand::from_score(score).describe());
                }
                None => {
                    let results = analyzer
                        .most_similar(&table, &word)
                        .ok_or_else(|| anyhow!("No vector found for '{}'", word))?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                    } else {
                        for (rank, result) in results.iter().enumerate() {
                            println!("{:3}. {:<20} {:.4}", rank + 1, result.word, result.score);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read annotated documents from a file, or stdin when the path is `-`
fn read_documents(path: &Path) -> Result<Vec<Document>> {
    let parser = DocumentParser::new();
    let docs = if path == Path::new("-") {
        parser.parse_reader(BufReader::new(io::stdin()))?
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        parser
            .parse_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };
    log::info!("Loaded {} document(s) from {}", docs.len(), path.display());
    Ok(docs)
}

fn read_vectors(path: &Path) -> Result<VectorTable> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let table: VectorTable = serde_json::from_reader::<_, std::collections::HashMap<String, Vec<f32>>>(BufReader::new(file))
        .with_context(|| format!("Invalid vector file {}", path.display()))?
        .into_iter()
        .collect();
    log::info!("Loaded {} vectors", table.len());
    Ok(table)
}
