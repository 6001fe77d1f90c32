//! WordSpark-RS command line interface
//!
//! Searches for puzzle words from the terminal. Results come from the
//! OpenRouter pipeline when an API key and model are configured, or from
//! the built-in mock word bank with `--mock`.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wordspark::{
    config::Settings,
    mock::MockWordBank,
    query::{Category, Difficulty, PuzzleType, SearchParams},
    results::{SavedWords, WordResult, FALLBACK_DEFINITION},
    search::{WordSearch, WordSource},
    store::FileStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "-h" || args[0] == "--help" {
        print_usage();
        return Ok(());
    }

    let store = FileStore::open_default()?;
    let settings = Settings::load(Box::new(store));

    match args[0].as_str() {
        "models" => list_models(settings).await,
        "set-key" => set_value(settings, &args, "API key", |s, v| s.set_api_key(v)),
        "set-model" => set_value(settings, &args, "model", |s, v| s.set_selected_model(v)),
        "save" => toggle_saved(settings, &args),
        "saved" => list_saved(settings),
        _ => run_search(settings, &args).await,
    }
}

async fn run_search(settings: Settings, args: &[String]) -> Result<()> {
    let mut pattern = None;
    let mut clue = String::new();
    let mut puzzle_type = PuzzleType::Crossword;
    let mut difficulty = Difficulty::Any;
    let mut category = Category::Any;
    let mut use_mock = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--clue" => clue = required(&mut iter, "--clue")?.clone(),
            "--type" => {
                puzzle_type = match required(&mut iter, "--type")?.as_str() {
                    "crossword" => PuzzleType::Crossword,
                    "anagram" => PuzzleType::Anagram,
                    "word-game" => PuzzleType::WordGame,
                    other => anyhow::bail!("unknown puzzle type: {}", other),
                };
            }
            "--difficulty" => {
                difficulty = match required(&mut iter, "--difficulty")?.as_str() {
                    "easy" => Difficulty::Easy,
                    "medium" => Difficulty::Medium,
                    "hard" => Difficulty::Hard,
                    "any" => Difficulty::Any,
                    other => anyhow::bail!("unknown difficulty: {}", other),
                };
            }
            "--category" => {
                category = match required(&mut iter, "--category")?.as_str() {
                    "any" => Category::Any,
                    "nouns" => Category::Nouns,
                    "verbs" => Category::Verbs,
                    "adjectives" => Category::Adjectives,
                    "proper-names" => Category::ProperNames,
                    other => anyhow::bail!("unknown category: {}", other),
                };
            }
            "--mock" => use_mock = true,
            other if pattern.is_none() => pattern = Some(other.to_string()),
            other => anyhow::bail!("unexpected argument: {}", other),
        }
    }

    let pattern = pattern.ok_or_else(|| anyhow::anyhow!("a letter pattern is required"))?;
    let params = SearchParams::from_pattern(&pattern, clue, puzzle_type, difficulty, category)?;

    let (mut results, saved) = if use_mock {
        info!("Searching the mock word bank");
        let results = MockWordBank::new().search(&params).await?;
        (results, SavedWords::load(settings.store()))
    } else {
        let search = WordSearch::new(settings);
        let results = search.search(&params).await?;
        (results, SavedWords::load(search.settings().store()))
    };

    saved.mark(&mut results);
    print_results(&results);
    Ok(())
}

/// Toggle a word's membership in the persisted saved list
fn toggle_saved(mut settings: Settings, args: &[String]) -> Result<()> {
    let word = args
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("missing word to save"))?;

    let mut saved = SavedWords::load(settings.store());
    let entry = WordResult::new(0, word.clone(), FALLBACK_DEFINITION, None, 1.0);
    if saved.toggle(&entry) {
        println!("Saved \"{}\".", entry.word);
    } else {
        println!("Removed \"{}\" from saved words.", entry.word);
    }
    saved.persist(settings.store_mut());
    Ok(())
}

/// Print the persisted saved-word list
fn list_saved(settings: Settings) -> Result<()> {
    let saved = SavedWords::load(settings.store());
    if saved.is_empty() {
        println!("No saved words.");
        return Ok(());
    }

    println!("{} saved words:\n", saved.len());
    for word in saved.iter() {
        println!("{}", word.word);
        println!("  {}", word.definition);
        if let Some(example) = &word.example {
            println!("  e.g. {}", example);
        }
        println!();
    }
    Ok(())
}

async fn list_models(settings: Settings) -> Result<()> {
    let search = WordSearch::new(settings);
    let models = search.list_models().await?;
    if models.is_empty() {
        println!("No models available.");
        return Ok(());
    }
    for model in models {
        let context = model
            .context_length
            .map(|n| format!(" ({} ctx)", n))
            .unwrap_or_default();
        println!("{}  {}{}", model.id, model.name, context);
    }
    Ok(())
}

fn set_value(
    mut settings: Settings,
    args: &[String],
    what: &str,
    apply: impl Fn(&mut Settings, String),
) -> Result<()> {
    let value = args
        .get(1)
        .ok_or_else(|| anyhow::anyhow!("missing {} value", what))?;
    apply(&mut settings, value.clone());
    println!("Stored {}.", what);
    Ok(())
}

fn required<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", flag))
}

fn print_results(results: &[WordResult]) {
    if results.is_empty() {
        println!("No words found matching your criteria.");
        return;
    }

    println!("Found {} words:\n", results.len());
    for result in results {
        let marker = if result.is_saved { "  [saved]" } else { "" };
        println!(
            "{}  (confidence {:.2}){}",
            result.word, result.confidence, marker
        );
        println!("  {}", result.definition);
        if let Some(example) = &result.example {
            println!("  e.g. {}", example);
        }
        println!();
    }
}

fn print_usage() {
    println!(
        r#"
WordSpark-RS v{}
An AI-assisted word puzzle solver written in Rust

USAGE:
    wordspark <PATTERN> [OPTIONS]      Search for words ("?" = unknown letter)
    wordspark models                   List available models
    wordspark set-key <KEY>            Store the OpenRouter API key
    wordspark set-model <MODEL>        Store the model id
    wordspark save <WORD>              Toggle a word in the saved list
    wordspark saved                    List saved words

OPTIONS:
    --clue <TEXT>          Free-text clue
    --type <TYPE>          crossword | anagram | word-game
    --difficulty <LEVEL>   easy | medium | hard | any
    --category <CAT>       any | nouns | verbs | adjectives | proper-names
    --mock                 Use the built-in word bank instead of the API

EXAMPLES:
    wordspark "a??e" --clue "fruit" --category nouns
    wordspark "?????" --mock
"#,
        wordspark::VERSION
    );
}
