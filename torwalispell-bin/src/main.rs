use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;
use unic_ucd_category::GeneralCategory;

use torwalispell::{
    lexicon::Lexicon,
    speller::{suggestion::Suggestion, LexiconSpeller, Speller, SpellerConfig},
};

trait OutputWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool);
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn write_misspelling(&mut self, word: &str, position: usize, suggestions: &[Suggestion]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if is_correct { "CORRECT" } else { "INCORRECT" }
        );
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        for sugg in suggestions {
            println!("{}\t\t{}", sugg.value, sugg.distance);
        }
        println!();
    }

    fn write_misspelling(&mut self, word: &str, position: usize, suggestions: &[Suggestion]) {
        println!(
            "{:>4}: {}\t\t[{}]",
            position,
            word,
            suggestions.iter().map(|s| s.value()).join(", ")
        );
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct Misspelling {
    word: String,
    position: usize,
    suggestions: Vec<Suggestion>,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonWriter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggest: Vec<SuggestionRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    misspellings: Vec<Misspelling>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        Self::default()
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        self.suggest.push(SuggestionRequest {
            word: word.to_owned(),
            is_correct,
            suggestions: vec![],
        });
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        if let Some(last) = self.suggest.last_mut() {
            last.suggestions = suggestions.to_vec();
        }
    }

    fn write_misspelling(&mut self, word: &str, position: usize, suggestions: &[Suggestion]) {
        self.misspellings.push(Misspelling {
            word: word.to_owned(),
            position,
            suggestions: suggestions.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(s) => println!("{}", s),
            Err(e) => log::error!("Could not serialize results: {}", e),
        }
    }
}

fn run(
    speller: Arc<LexiconSpeller>,
    words: Vec<String>,
    writer: &mut dyn OutputWriter,
    is_always_suggesting: bool,
    suggest_cfg: &SpellerConfig,
) {
    for word in words {
        let is_correct = speller.clone().is_correct(&word);
        writer.write_correction(&word, is_correct);

        if is_always_suggesting || !is_correct {
            let suggestions = speller.clone().suggest_with_config(&word, suggest_cfg);
            writer.write_suggestions(&word, &suggestions);
        }
    }
}

/// Strips punctuation and symbols from both ends of a whitespace-separated
/// token. Combining marks are kept, they belong to the word.
fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| {
        let category = GeneralCategory::of(c);
        !(category.is_letter() || category.is_mark() || category.is_number())
    })
}

fn check_text(
    speller: Arc<LexiconSpeller>,
    text: &str,
    writer: &mut dyn OutputWriter,
    suggest_cfg: &SpellerConfig,
) -> usize {
    let mut errors = 0;

    for (position, token) in text.split_whitespace().enumerate() {
        let word = trim_token(token);
        if word.is_empty() || speller.clone().is_correct(word) {
            continue;
        }

        errors += 1;
        let suggestions = speller.clone().suggest_with_config(word, suggest_cfg);
        writer.write_misspelling(word, position, &suggestions);
    }

    errors
}

#[derive(Debug, Parser)]
#[command(
    name = "torwalispell",
    about = "Spell checking tool for Torwali word lists"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check words and get suggestions for misspelled ones
    Suggest(SuggestArgs),

    /// Find misspelled words in running text
    Check(CheckArgs),

    /// Print word list statistics as JSON
    Stats(StatsArgs),
}

#[derive(Debug, Parser)]
struct LexiconArgs {
    /// Word list to use (.txt, .json or .js)
    #[arg(short = 'w', long = "wordlist")]
    wordlist_path: Option<PathBuf>,

    /// Add a word for this run only
    #[arg(long = "add")]
    added_words: Vec<String>,
}

#[derive(Debug, Default, Parser)]
struct ConfigArgs {
    /// Maximum number of results, 0 for no limit
    #[arg(short = 'n', long)]
    nbest: Option<usize>,

    /// Suggestions must be closer than this edit distance
    #[arg(short = 'd', long)]
    max_distance: Option<usize>,

    /// Uses supplied config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct SuggestArgs {
    #[command(flatten)]
    lexicon: LexiconArgs,

    #[command(flatten)]
    suggest_config: ConfigArgs,

    /// Always show suggestions even if word is correct
    #[arg(short = 'S', long = "always-suggest")]
    always_suggest: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Words to be processed
    inputs: Vec<String>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    #[command(flatten)]
    lexicon: LexiconArgs,

    #[command(flatten)]
    suggest_config: ConfigArgs,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Text to be checked
    inputs: Vec<String>,
}

#[derive(Debug, Parser)]
struct StatsArgs {
    #[command(flatten)]
    lexicon: LexiconArgs,
}

fn load_speller(args: &LexiconArgs) -> Arc<LexiconSpeller> {
    let lexicon = match &args.wordlist_path {
        Some(path) => Lexicon::load(path),
        None => {
            eprintln!("No word list given, only added words are known.");
            Lexicon::new()
        }
    };

    if lexicon.is_empty() {
        log::warn!("The lexicon is empty");
    }

    let speller = LexiconSpeller::new(lexicon);
    for word in &args.added_words {
        if !speller.clone().add_word(word) {
            log::info!("Not adding {:?}: blank or already known", word);
        }
    }

    speller
}

fn read_stdin() -> anyhow::Result<String> {
    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn speller_config(args: &ConfigArgs) -> anyhow::Result<SpellerConfig> {
    // 1. default config
    let mut suggest_cfg = SpellerConfig::default();

    // 2. config from explicit config file
    if let Some(config_path) = &args.config {
        let config_file = std::fs::File::open(config_path)?;
        suggest_cfg = serde_json::from_reader(config_file)?;
    }

    // 3. config from other command line stuff
    if let Some(v) = args.nbest {
        if v == 0 {
            suggest_cfg.n_best = None;
        } else {
            suggest_cfg.n_best = Some(v);
        }
    }
    if let Some(v) = args.max_distance {
        suggest_cfg.max_distance = v;
    }

    Ok(suggest_cfg)
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let suggest_cfg = speller_config(&args.suggest_config)?;

    let speller = load_speller(&args.lexicon);

    let mut writer: Box<dyn OutputWriter> = if args.json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words = if args.inputs.is_empty() {
        read_stdin()?
            .trim()
            .split('\n')
            .map(|x| x.trim().to_string())
            .filter(|x| !x.is_empty())
            .collect()
    } else {
        args.inputs
    };

    run(
        speller,
        words,
        &mut *writer,
        args.always_suggest,
        &suggest_cfg,
    );

    writer.finish();

    Ok(())
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let suggest_cfg = speller_config(&args.suggest_config)?;

    let speller = load_speller(&args.lexicon);

    let text = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    let mut writer: Box<dyn OutputWriter> = if args.json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let errors = check_text(speller, &text, &mut *writer, &suggest_cfg);
    writer.finish();

    if !args.json {
        println!("Found {} errors.", errors);
    }

    Ok(())
}

fn stats(args: StatsArgs) -> anyhow::Result<()> {
    let speller = load_speller(&args.lexicon);
    println!("{}", serde_json::to_string_pretty(&speller.stats())?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    match args.command {
        None => Ok(()),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Check(args)) => check(args),
        Some(Command::Stats(args)) => stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trims_punctuation() {
        assert_eq!(trim_token("«گوتر»،"), "گوتر");
        assert_eq!(trim_token("پاری۔"), "پاری");
        assert_eq!(trim_token("(abc)"), "abc");
        assert_eq!(trim_token("..."), "");
    }

    #[test]
    fn keeps_marks() {
        assert_eq!(trim_token("بِسْمِ"), "بِسْمِ");
    }

    #[test]
    fn check_counts_unknown_words() {
        let speller = LexiconSpeller::new(Lexicon::from_words(vec!["پاری", "گوتر"]));
        let mut writer = JsonWriter::new();

        let errors = check_text(
            speller,
            "پاری گوتار، پاري ۔",
            &mut writer,
            &SpellerConfig::default(),
        );

        assert_eq!(errors, 1);
        assert_eq!(writer.misspellings.len(), 1);
        assert_eq!(writer.misspellings[0].word, "گوتار");
        assert_eq!(writer.misspellings[0].position, 1);
        assert_eq!(writer.misspellings[0].suggestions[0].value(), "گوتر");
    }

    #[test]
    fn run_suggests_for_incorrect_only() {
        let speller = LexiconSpeller::new(Lexicon::from_words(vec!["پاری", "گوتر"]));
        let mut writer = JsonWriter::new();

        run(
            speller,
            vec!["پاری".to_string(), "گوتار".to_string()],
            &mut writer,
            false,
            &SpellerConfig::default(),
        );

        assert!(writer.suggest[0].is_correct);
        assert!(writer.suggest[0].suggestions.is_empty());
        assert!(!writer.suggest[1].is_correct);
        assert_eq!(writer.suggest[1].suggestions.len(), 1);
    }

    #[test]
    fn nbest_zero_is_unlimited() {
        let args = ConfigArgs {
            nbest: Some(0),
            ..ConfigArgs::default()
        };
        assert_eq!(speller_config(&args).unwrap().n_best, None);

        let args = ConfigArgs {
            nbest: Some(3),
            ..ConfigArgs::default()
        };
        assert_eq!(speller_config(&args).unwrap().n_best, Some(3));

        assert_eq!(
            speller_config(&ConfigArgs::default()).unwrap(),
            SpellerConfig::default()
        );
    }

    #[test]
    fn config_file_then_flags() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"n_best": 2, "max_distance": 1}}"#).unwrap();
        file.flush().unwrap();

        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            ..ConfigArgs::default()
        };
        let config = speller_config(&args).unwrap();
        assert_eq!(config.n_best, Some(2));
        assert_eq!(config.max_distance, 1);

        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            max_distance: Some(4),
            ..ConfigArgs::default()
        };
        let config = speller_config(&args).unwrap();
        assert_eq!(config.n_best, Some(2));
        assert_eq!(config.max_distance, 4);
    }

    #[test]
    fn check_and_suggest_share_config() {
        let check = Args::try_parse_from(["torwalispell", "check", "-d", "2", "-n", "1", "text"])
            .unwrap();
        let suggest =
            Args::try_parse_from(["torwalispell", "suggest", "-d", "2", "-n", "1", "word"])
                .unwrap();

        let check_cfg = match check.command {
            Some(Command::Check(args)) => speller_config(&args.suggest_config).unwrap(),
            other => panic!("unexpected: {:?}", other),
        };
        let suggest_cfg = match suggest.command {
            Some(Command::Suggest(args)) => speller_config(&args.suggest_config).unwrap(),
            other => panic!("unexpected: {:?}", other),
        };

        assert_eq!(check_cfg, suggest_cfg);
        assert_eq!(check_cfg.max_distance, 2);
        assert_eq!(check_cfg.n_best, Some(1));
    }
}
