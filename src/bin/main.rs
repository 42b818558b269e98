use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelrec::config::Config;
use reelrec::recommend::Recommendations;
use reelrec::AppError;

#[derive(Parser, Debug)]
#[command(name = "reelrec")]
#[command(about = "Content-based movie recommender", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "reelrec.yaml")]
    config: String,

    /// Title to find similar movies for.
    #[arg(short, long)]
    title: Option<String>,

    /// Only recommend movies whose categories contain this text.
    #[arg(short = 'g', long)]
    category: Option<String>,

    /// Maximum number of recommendations.
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Print results as JSON, scores included.
    #[arg(long)]
    json: bool,

    /// List all distinct titles and exit.
    #[arg(long)]
    list_titles: bool,

    /// List all distinct category tags and exit.
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelrec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = if std::path::Path::new(&args.config).exists() {
        Config::from_file(&args.config)?
    } else {
        Config::default()
    };

    let engine = reelrec::build_engine(&config)?;

    if args.list_titles {
        for title in engine.titles() {
            println!("{}", title);
        }
        return Ok(());
    }

    if args.list_categories {
        for tag in engine.category_tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let Some(title) = args.title else {
        eprintln!("Nothing to do: pass --title, --list-titles or --list-categories");
        return Ok(());
    };

    let top_n = args.top_n.unwrap_or(config.recommend.top_n);
    let results = engine.recommend(&title, args.category.as_deref(), top_n);

    if args.json {
        print_json(&results)?;
    } else {
        print_plain(&results);
    }

    Ok(())
}

fn print_json(results: &Recommendations) -> Result<(), AppError> {
    let rendered = match results.as_ranked() {
        Some(list) => serde_json::to_string_pretty(list)?,
        None => serde_json::to_string_pretty(&serde_json::json!({
            "message": results.display_lines()[0],
        }))?,
    };
    println!("{}", rendered);
    Ok(())
}

fn print_plain(results: &Recommendations) {
    match results.as_ranked() {
        Some(list) => {
            for (i, scored) in list.iter().enumerate() {
                println!("{}. {}", i + 1, scored.title);
            }
        }
        None => println!("{}", results.display_lines()[0]),
    }
}
