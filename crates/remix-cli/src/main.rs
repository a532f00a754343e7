//! Grocery Remix CLI - recipe generation backed by a locally hosted model.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Grocery Remix - local AI recipe generation
#[derive(Parser)]
#[command(name = "remix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the recipe collection file
    #[arg(long, global = true, default_value = "data/saved_recipes.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from ingredients
    Generate {
        /// Comma-separated ingredients, e.g. "chicken, garlic, lemon"
        ingredients: String,
        /// Dietary filter (repeatable): vegetarian, vegan, gluten-free,
        /// dairy-free, low-carb, keto, nut-free
        #[arg(short, long = "filter")]
        filters: Vec<String>,
        /// Save the result under this title
        #[arg(long)]
        save: Option<String>,
    },

    /// Generate a recipe from macro targets
    Macros {
        /// Target calories per serving
        #[arg(long)]
        calories: Option<u32>,
        /// Target protein in grams
        #[arg(long)]
        protein: Option<u32>,
        /// Target carbohydrates in grams
        #[arg(long)]
        carbs: Option<u32>,
        /// Target fat in grams
        #[arg(long)]
        fat: Option<u32>,
        /// Dietary filter (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,
        /// Save the result under this title
        #[arg(long)]
        save: Option<String>,
    },

    /// Suggest substitutions for an ingredient
    Substitute {
        /// Ingredient to replace
        ingredient: String,
        /// What the ingredient is going into, e.g. "a pasta sauce"
        #[arg(long)]
        context: Option<String>,
    },

    /// Save a recipe from a text file
    Save {
        /// Title for the saved recipe
        #[arg(long)]
        title: String,
        /// File containing the recipe text
        #[arg(long)]
        file: PathBuf,
        /// Comma-separated ingredients to index for search
        #[arg(long)]
        ingredients: Option<String>,
        /// Dietary filter (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,
    },

    /// List saved recipes
    List,

    /// Show a saved recipe in full
    Show {
        /// Recipe id
        id: u64,
    },

    /// Search saved recipes by title or ingredient
    Search {
        /// Search term
        query: String,
    },

    /// Delete a saved recipe
    Delete {
        /// Recipe id
        id: u64,
    },

    /// Check connectivity to the inference endpoint
    Check,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Generate {
            ingredients,
            filters,
            save,
        } => runtime().block_on(commands::generate::run(
            &cli.store,
            &ingredients,
            &filters,
            save.as_deref(),
        )),
        Commands::Macros {
            calories,
            protein,
            carbs,
            fat,
            filters,
            save,
        } => runtime().block_on(commands::macros::run(
            &cli.store,
            calories,
            protein,
            carbs,
            fat,
            &filters,
            save.as_deref(),
        )),
        Commands::Substitute {
            ingredient,
            context,
        } => runtime().block_on(commands::substitute::run(&ingredient, context)),
        Commands::Save {
            title,
            file,
            ingredients,
            filters,
        } => commands::save::run(&cli.store, &title, &file, ingredients.as_deref(), &filters),
        Commands::List => commands::list::run(&cli.store),
        Commands::Show { id } => commands::show::run(&cli.store, id),
        Commands::Search { query } => commands::search::run(&cli.store, &query),
        Commands::Delete { id } => commands::delete::run(&cli.store, id),
        Commands::Check => runtime().block_on(commands::check::run()),
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("failed to start tokio runtime")
}
