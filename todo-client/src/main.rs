//! todos - command line front end for the todo REST API
//!
//! Reads `TODO_API_URL`, `TODO_API_TOKEN`, `TODO_TIMEOUT_SECS` and
//! `TODO_LOG_DIR` (a `.env` file is honored).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use todo_client::{
    AddTodo, ClientConfig, NewTodo, SubmitError, Todo, TodoList, TodoService, TracingNotifier,
    logger,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "todos", version, about = "List, fetch and add todos")]
struct Cli {
    /// API root, overrides TODO_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log level filter, e.g. "debug" (RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long, global = true, env = "TODO_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List todos, filtered by the server and then locally
    List(ListArgs),
    /// Show one todo
    Get {
        /// Todo identifier
        id: String,
    },
    /// Add a todo
    Add(AddArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Owner (server filter)
    #[arg(long)]
    owner: Option<String>,
    /// complete | incomplete (server filter)
    #[arg(long)]
    status: Option<String>,
    /// Body substring (server and local filter)
    #[arg(long)]
    body: Option<String>,
    /// Category substring (local filter)
    #[arg(long)]
    category: Option<String>,
    /// Maximum number of todos the server returns
    #[arg(long)]
    limit: Option<u32>,
    /// Field to order by
    #[arg(long)]
    sort: Option<String>,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long, default_value = "")]
    owner: String,
    #[arg(long, default_value = "")]
    body: String,
    /// complete | incomplete
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long, default_value = "")]
    category: String,
}

fn print_todo(todo: &Todo) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        todo.id,
        todo.owner,
        todo.completion(),
        todo.category,
        todo.body
    );
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger_with_file(cli.log_level.as_deref(), cli.log_dir.as_deref());

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    tracing::debug!(base_url = %config.base_url, "Using todo API");

    let service = config.build_service()?;

    match cli.command {
        Command::List(args) => {
            let mut list = TodoList::new(service, TracingNotifier);
            list.owner = args.owner;
            list.status = args.status;
            list.body = args.body;
            list.category = args.category;
            list.limit = args.limit;
            list.sort = args.sort;

            if !list.refresh().await {
                std::process::exit(1);
            }
            for todo in list.filtered() {
                print_todo(todo);
            }
        }
        Command::Get { id } => {
            let todo = service.get_todo_by_id(&id).await?;
            print_todo(&todo);
        }
        Command::Add(args) => {
            let add = AddTodo::new(service, TracingNotifier);
            let draft = NewTodo::new(args.owner, args.body, args.status, args.category);
            match add.submit(&draft).await {
                Ok(path) => println!("{path}"),
                Err(SubmitError::Invalid(errors)) => {
                    for violation in &errors.violations {
                        eprintln!("{}: {}", violation.field, violation.message);
                    }
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
