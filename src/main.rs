use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use shelfcli::{cli, config, error, types::AudienceLevel};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get book recommendations for a historical topic
    Recommend(RecommendOptions),

    /// Handle favorited books
    Favorites(FavoritesOptions),

    /// Handle reading lists
    Lists(ListsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Historical topic to get recommendations for
    pub topic: String,

    /// Audience the recommendations should be tuned for
    #[clap(long, value_enum, default_value = "general")]
    pub level: AudienceLevel,

    /// Favorite result N (1-based); can be repeated
    #[clap(long = "favorite", value_name = "N")]
    pub favorite: Vec<usize>,

    /// Add all results to this reading list (id or unique name)
    #[clap(long = "add-to", value_name = "LIST")]
    pub add_to: Option<String>,

    /// Create the --add-to list if it does not exist
    #[clap(long, requires = "add_to")]
    pub create: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle favorited books",
    args_conflicts_with_subcommands = true
)]
pub struct FavoritesOptions {
    /// Subcommands under `favorites` (e.g., `remove`)
    #[command(subcommand)]
    pub command: Option<FavoritesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesSubcommand {
    /// Remove a book from favorites
    Remove {
        /// Title of the favorited book
        title: String,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle reading lists", args_conflicts_with_subcommands = true)]
pub struct ListsOptions {
    /// Subcommands under `lists` (e.g., `create`)
    #[command(subcommand)]
    pub command: Option<ListsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListsSubcommand {
    /// Create a new reading list
    Create {
        /// Name of the new list
        name: String,
    },

    /// Delete a reading list
    Delete {
        /// List id or unique name
        list: String,
    },

    /// Show the books of a reading list
    Show {
        /// List id or unique name
        list: String,
    },

    /// Copy a favorited book into a reading list
    AddBook {
        /// List id or unique name
        list: String,
        /// Title of the favorited book
        title: String,
    },

    /// Remove a book from a reading list
    RemoveBook {
        /// List id or unique name
        list: String,
        /// Title of the book
        title: String,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Recommend(opt) => {
            cli::recommend(opt.topic, opt.level, opt.favorite, opt.add_to, opt.create).await
        }

        Command::Favorites(opt) => match opt.command {
            Some(FavoritesSubcommand::Remove { title }) => cli::remove_favorite(title).await,
            None => cli::list_favorites().await,
        },

        Command::Lists(opt) => match opt.command {
            Some(ListsSubcommand::Create { name }) => cli::create_list(name).await,
            Some(ListsSubcommand::Delete { list }) => cli::delete_list(list).await,
            Some(ListsSubcommand::Show { list }) => cli::show_list(list).await,
            Some(ListsSubcommand::AddBook { list, title }) => cli::add_book(list, title).await,
            Some(ListsSubcommand::RemoveBook { list, title }) => {
                cli::remove_book(list, title).await
            }
            None => cli::list_lists().await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
