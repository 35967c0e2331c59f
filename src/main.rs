use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordcalc::{analyze, spell, symbols::to_word_text};

/// wordcalc evaluates spoken-style arithmetic such as `one hundred plus twenty
/// three multiply by two` and spells the result back out in words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The sentence to evaluate. Multiple arguments are joined with spaces.
    #[arg(required_unless_present = "spell")]
    text: Vec<String>,

    /// Rewrite digits and symbols such as `12 + 3 × 4` as words first.
    #[arg(short, long)]
    mixed: bool,

    /// Only spell the given whole number in words.
    #[arg(short, long, value_name = "NUMBER", allow_negative_numbers = true)]
    spell: Option<f64>,

    /// Print the tokenized items before the result.
    #[arg(short, long)]
    items: bool,

    /// Show debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    if let Some(value) = args.spell {
        match spell(value) {
            Ok(words) => println!("{}", spoken(words)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let joined = args.text.join(" ");
    let text = if args.mixed { to_word_text(&joined) } else { joined };

    let analysis = analyze(&text);
    for diagnostic in &analysis.diagnostics {
        eprintln!("{diagnostic}");
    }

    if args.items {
        let items: Vec<String> = analysis.items.iter().map(ToString::to_string).collect();
        println!("{}", items.join(" "));
    }

    println!("{}", analysis.value);
    if let Ok(words) = spell(analysis.value) {
        println!("{}", spoken(words));
    }
}

/// The words converter leaves zero empty; the command line says it.
fn spoken(words: String) -> String {
    if words.is_empty() { "zero".to_string() } else { words }
}
