use clap::{Parser, ValueEnum};
use futstats_backend::config::db::DbKind;
use futstats_backend::infra::db::open_db;
use migration::{migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Futstats database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database type (overrides DB_KIND)
    #[arg(
        short,
        long,
        value_enum,
        help = "Database type: postgres, sqlite-file"
    )]
    db: Option<Db>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,futstats_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
    };

    // In-memory SQLite is rejected here: every CLI run would migrate a
    // database that disappears when the process exits.
    let db_kind = match args.db {
        Some(Db::Postgres) => DbKind::Postgres,
        Some(Db::SqliteFile) => DbKind::SqliteFile,
        None => match DbKind::from_env() {
            Ok(DbKind::SqliteMemory) => {
                eprintln!("❌ DB_KIND=sqlite-memory is not supported for CLI operations.");
                std::process::exit(2);
            }
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(2);
            }
        },
    };

    let db = match open_db(db_kind).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to the database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
