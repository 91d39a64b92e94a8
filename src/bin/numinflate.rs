use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;

use numinflate::corpus::{CheckReport, CheckStatus, Corpus};
use numinflate::vocab::{default_toml, Vocabulary};
use numinflate::{Inflator, WordMatch};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "numinflate", about = "Increment English number words in text")]
struct Cli {
    /// Custom vocabulary TOML file (default: built-in table)
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,
    /// Write JSON-lines traces to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inflate text given as arguments, or each line of stdin
    Inflate {
        /// Text to inflate (joined with spaces)
        text: Vec<String>,
    },
    /// Show every number word match in a text
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a tour of example inputs and outputs
    Demo,
    /// Interactive mode: inflate each line typed
    Repl,
    /// Run input/expected cases and report pass/fail
    Check {
        /// Corpus TOML file (default: built-in corpus)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the built-in vocabulary as TOML
    VocabExport,
    /// Validate a custom vocabulary TOML file
    VocabValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        numinflate::init_tracing(dir);
    }

    let custom;
    let vocab: &Vocabulary = match &cli.vocab {
        Some(path) => {
            custom = load_vocab(path);
            &custom
        }
        None => Vocabulary::global(),
    };
    let inflator = Inflator::new(vocab);

    match cli.command {
        Command::Inflate { text } => inflate_cmd(&inflator, &text),
        Command::Explain { text, json } => explain(&inflator, &text, json),
        Command::Demo => demo(&inflator),
        Command::Repl => repl(&inflator),
        Command::Check {
            corpus,
            category,
            verbose,
            json,
        } => check(&inflator, corpus.as_deref(), category.as_deref(), verbose, json),
        Command::VocabExport => print!("{}", default_toml()),
        Command::VocabValidate { file } => {
            let v = load_vocab(&file);
            println!(
                "OK: {} words, longest {} letters",
                v.len(),
                v.max_word_len()
            );
        }
    }
}

fn load_vocab(path: &Path) -> Vocabulary {
    let content = die!(
        fs::read_to_string(path),
        "Error reading {}: {}",
        path.display()
    );
    die!(Vocabulary::from_toml(&content), "Error: {}")
}

fn inflate_cmd(inflator: &Inflator, text: &[String]) {
    if !text.is_empty() {
        println!("{}", inflator.inflate(&text.join(" ")));
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Failed to read line: {}");
        println!("{}", inflator.inflate(&line));
    }
}

// --- explain ---

#[derive(Serialize)]
struct ExplainReport<'a> {
    input: &'a str,
    output: String,
    matches: Vec<WordMatch<'a>>,
}

fn explain(inflator: &Inflator, text: &str, json: bool) {
    let matches = inflator.find_matches(text);
    let output = inflator.inflate(text);

    if json {
        let report = ExplainReport {
            input: text,
            output,
            matches,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
        return;
    }

    println!("Input:  {text:?}");
    if matches.is_empty() {
        println!("  (no number words)");
    }
    for m in &matches {
        println!(
            "  [{:>3}..{:<3}] {:?} \u{2192} {:?} (word: {}, casing: {:?})",
            m.start, m.end, m.matched, m.replacement, m.word, m.casing
        );
    }
    println!("Output: {output:?}");
}

// --- demo ---

const DEMO_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "1. BASIC EXAMPLES",
        &[
            ("Challenge example", "Anyone up for tennis?"),
            ("Simple increment", "I have one apple"),
            ("Zero to hero", "Zero to hero"),
        ],
    ),
    (
        "2. CAPITALIZATION PRESERVATION",
        &[
            ("Lowercase", "one two three"),
            ("Title Case", "One Two Three"),
            ("ALL CAPS", "ONE TWO THREE"),
            ("Mixed case", "One TWO three"),
        ],
    ),
    (
        "3. SUBSTRING MATCHING",
        &[
            ("Tennis (contains 'ten')", "tennis"),
            ("Done (contains 'one')", "done"),
            ("Money (contains 'one')", "money"),
            ("Someone (contains 'one')", "someone"),
            ("Atone (contains 'one')", "atone"),
        ],
    ),
    (
        "4. MULTIPLE NUMBERS",
        &[
            ("Sequential numbers", "First one, then two, then three!"),
            ("Book reference", "Chapter one, section two, page three"),
            ("Countdown", "three, two, one, blast off!"),
        ],
    ),
    (
        "5. TEEN NUMBERS",
        &[
            ("Thirteen (not three)", "thirteen"),
            ("Fourteen", "fourteen"),
            ("Nineteen (not nine)", "nineteen"),
        ],
    ),
    (
        "6. MULTIPLES OF TEN",
        &[
            ("Twenty", "twenty"),
            ("Fifty", "fifty"),
            ("Ninety", "ninety"),
            ("Ninety-nine, concatenated", "ninetynine"),
        ],
    ),
    (
        "7. EDGE CASES",
        &[
            ("Empty string", ""),
            ("No numbers", "Hello, world!"),
            ("Repeated number", "one one one"),
            ("With punctuation", "one! two? three."),
        ],
    ),
    (
        "8. REAL-WORLD EXAMPLES",
        &[
            ("Shopping list", "I need one apple, two oranges, and three bananas"),
            ("Story fragment", "Once upon a time, there were three little pigs"),
            (
                "Instructions",
                "Step one: mix ingredients. Step two: bake for ten minutes.",
            ),
        ],
    ),
    (
        "9. NOT SUPPORTED",
        &[
            ("Numeric digits", "I have 5 apples and 10 oranges"),
            ("Ordinals", "First place, second place, third place"),
            ("Hyphenated compounds (two separate words)", "twenty-one items"),
        ],
    ),
];

fn rule() -> String {
    "=".repeat(70)
}

fn demo(inflator: &Inflator) {
    println!("{}", rule());
    println!("NUMBER WORD INFLATION - EXAMPLES");
    println!("{}", rule());

    for (title, examples) in DEMO_SECTIONS {
        println!("\n{}\n{title}\n{}", rule(), rule());
        for (description, input) in *examples {
            println!("\n{description}");
            println!("  Input:  '{input}'");
            println!("  Output: '{}'", inflator.inflate(input));
        }
    }

    println!("\n{}", rule());
    println!("NOTE:");
    println!("  - Matching is by substring: 'tennis' contains 'ten' and becomes 'elevennis'");
    println!("  - Capitalization is preserved (lowercase, Title, UPPERCASE)");
    println!("  - Longest words match first ('thirteen', not 'three')");
    println!("{}", rule());
}

// --- repl ---

fn repl(inflator: &Inflator) {
    println!("{}", rule());
    println!("Interactive mode - enter text to inflate (Ctrl+C or Ctrl+D to exit)");
    println!("{}", rule());
    for input in ["Anyone up for tennis?", "I have one apple", "TEN items"] {
        println!("Input:  '{input}'");
        println!("Output: '{}'", inflator.inflate(input));
    }
    println!();

    let mut editor = die!(DefaultEditor::new(), "Failed to start line editor: {}");
    loop {
        match editor.readline("Enter text: ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                println!("Result: {}", inflator.inflate(&line));
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Readline error: {err}");
                process::exit(1);
            }
        }
    }
}

// --- check ---

fn check(
    inflator: &Inflator,
    corpus_file: Option<&Path>,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let corpus = match corpus_file {
        Some(path) => die!(Corpus::load(path), "Error: {}"),
        None => Corpus::builtin(),
    };

    let report = corpus.run(inflator, category);
    if report.summary.total == 0 {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        print_report(&report, verbose);
    }

    process::exit(if report.passed() { 0 } else { 1 });
}

fn print_report(report: &CheckReport, verbose: bool) {
    let mut grouped: BTreeMap<&str, Vec<_>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(r.category.as_str()).or_default().push(r);
    }

    for (cat, group) in &grouped {
        println!("\n=== {} ({} cases) ===", cat, group.len());
        for r in group {
            match r.status {
                CheckStatus::Pass => {
                    if verbose {
                        println!("  \u{2713} {:?} \u{2192} {:?}", r.input, r.expected);
                    }
                }
                CheckStatus::Fail => {
                    println!(
                        "  \u{2717} {:?} \u{2192} {:?} (got: {:?})",
                        r.input, r.expected, r.actual
                    );
                }
                CheckStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    println!("  - {:?} [skip: {}]", r.input, reason);
                }
            }
        }
    }

    let s = &report.summary;
    println!();
    println!("=== Summary ===");
    println!("  Total:     {}", s.total);
    println!("  Pass:      {:>3}", s.pass);
    println!("  Fail:      {:>3}", s.fail);
    println!("  Skip:      {:>3}", s.skip);
    println!("  Pass rate: {} ({}/{})", s.pass_rate, s.pass, s.total - s.skip);
}
