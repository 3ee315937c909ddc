use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use spendbook::cli::{
    handle_add, handle_categories, handle_config, handle_list, handle_register, handle_remove,
    handle_sort, handle_total, AddArgs,
};
use spendbook::config::{SpendbookPaths, Settings};
use spendbook::services::SessionManager;
use spendbook::storage::UserStore;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Multi-user flat-file expense tracker",
    long_about = "Spendbook tracks dated, categorized expenses per registered \
                  user and persists them in a flat text file across runs."
)]
struct Cli {
    /// Username to act as
    #[arg(short, long, global = true, env = "SPENDBOOK_USER")]
    user: Option<String>,

    /// Password (prompted when omitted)
    #[arg(short, long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Username (must not already exist)
        username: String,
    },

    /// Add an expense
    Add {
        /// What the expense was for
        description: String,
        /// Amount (e.g. "12.50"); unparsable input is recorded as 0.00
        amount: String,
        /// Category (defaults to the first configured category)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Expense time (HH:MM or HH:MM:SS, defaults to midnight)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// List expenses in ledger order
    List,

    /// Remove the expense at a position (see `list` for positions)
    Remove {
        /// Zero-based position in the ledger
        position: usize,
    },

    /// Sort expenses by date and time
    Sort,

    /// Show the total of all expenses
    Total,

    /// Show the configured expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendbookPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = UserStore::new(paths.user_data_file());
    let mut session = SessionManager::open(store)?;

    match cli.command {
        Commands::Register { username } => {
            let password = resolve_password(cli.password)?;
            handle_register(&mut session, &username, &password)?;
            session.logout()?;
        }
        Commands::Add {
            description,
            amount,
            category,
            date,
            time,
        } => {
            login(&mut session, cli.user.as_deref(), cli.password)?;
            handle_add(
                &mut session,
                &settings,
                AddArgs {
                    description,
                    amount,
                    category,
                    date,
                    time,
                },
            )?;
            session.logout()?;
        }
        Commands::List => {
            login(&mut session, cli.user.as_deref(), cli.password)?;
            handle_list(&session)?;
            session.logout()?;
        }
        Commands::Remove { position } => {
            login(&mut session, cli.user.as_deref(), cli.password)?;
            handle_remove(&mut session, position)?;
            session.logout()?;
        }
        Commands::Sort => {
            login(&mut session, cli.user.as_deref(), cli.password)?;
            handle_sort(&mut session)?;
            session.logout()?;
        }
        Commands::Total => {
            login(&mut session, cli.user.as_deref(), cli.password)?;
            handle_total(&session)?;
            session.logout()?;
        }
        Commands::Categories => handle_categories(&settings),
        Commands::Config => handle_config(&paths),
    }

    Ok(())
}

/// Authenticate the session from CLI credentials
fn login(
    session: &mut SessionManager,
    user: Option<&str>,
    password: Option<String>,
) -> Result<()> {
    let user = user.ok_or_else(|| anyhow!("--user is required for this command"))?;
    let password = resolve_password(password)?;
    session.login(user, &password)?;
    Ok(())
}

/// Use the given password or prompt for one
fn resolve_password(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(rpassword::prompt_password("Password: ")?),
    }
}
