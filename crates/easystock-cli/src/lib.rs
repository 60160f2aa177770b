//! Command surface over the catalog store.
//!
//! Every command follows the same preamble as a request handler would:
//! the schema is ensured, and commands that read reference data also run
//! seed reconciliation first. Reconciliation never fails a command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use easystock_core::{
    CatalogError, Faq, FavoriteInput, FavoriteOutcome, FavoriteStock, FeedbackInput, Region, Stock,
    Term,
};
use easystock_store_sqlite::{CatalogTable, ReconcileReport, SqliteCatalogStore, StepOutcome};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "easystock")]
#[command(about = "EasyStock catalog store CLI")]
pub struct Cli {
    #[arg(long, env = "EASYSTOCK_DB", default_value = "./data/easystock.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ensure the schema, reconcile seed data and print the report.
    Init(JsonArgs),
    Terms {
        #[command(subcommand)]
        command: TermsCommand,
    },
    Stocks {
        #[command(subcommand)]
        command: StocksCommand,
    },
    Faqs {
        #[command(subcommand)]
        command: FaqsCommand,
    },
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },
}

#[derive(Debug, Args)]
pub struct JsonArgs {
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
pub enum TermsCommand {
    List(TermListArgs),
    Show(TermShowArgs),
}

#[derive(Debug, Args)]
pub struct TermListArgs {
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct TermShowArgs {
    #[arg(long)]
    id: i64,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
pub enum StocksCommand {
    List(StockListArgs),
    Show(StockShowArgs),
}

fn parse_region(value: &str) -> Result<Region, String> {
    Region::parse(value).ok_or_else(|| format!("unknown region `{value}`; expected 국내 or 해외"))
}

#[derive(Debug, Args)]
pub struct StockListArgs {
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,
    /// Matches the name (case-insensitive) or part of the code.
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct StockShowArgs {
    #[arg(long)]
    code: String,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
pub enum FaqsCommand {
    List(JsonArgs),
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    List(JsonArgs),
    Add(FavoriteAddArgs),
}

#[derive(Debug, Args)]
pub struct FavoriteAddArgs {
    #[arg(long)]
    code: String,
    #[arg(long)]
    name: String,
}

#[derive(Debug, Subcommand)]
pub enum FeedbackCommand {
    Submit(FeedbackSubmitArgs),
}

#[derive(Debug, Args)]
pub struct FeedbackSubmitArgs {
    #[arg(long = "type")]
    feedback_type: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitSummary<'a> {
    report: &'a ReconcileReport,
    row_counts: Vec<(&'static str, usize)>,
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let mut store = SqliteCatalogStore::open(&cli.db)?;
    let result = run_command(cli.command, &mut store);
    store.close()?;
    result
}

pub fn run_command(command: Command, store: &mut SqliteCatalogStore) -> Result<()> {
    match command {
        Command::Init(args) => {
            let report = prepare_reference_reads(store)?;
            let row_counts = CatalogTable::ALL
                .into_iter()
                .map(|table| Ok((table.as_str(), store.count_rows(table)?)))
                .collect::<Result<Vec<_>>>()?;
            if args.json {
                let summary = InitSummary {
                    report: &report,
                    row_counts,
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_reconcile_report(&report);
                for (table, rows) in row_counts {
                    println!("{table}={rows}");
                }
            }
            Ok(())
        }
        Command::Terms { command } => run_terms(command, store),
        Command::Stocks { command } => run_stocks(command, store),
        Command::Faqs {
            command: FaqsCommand::List(args),
        } => {
            prepare_reference_reads(store)?;
            let faqs = store.list_faqs()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&faqs)?);
            } else {
                print_faqs(&faqs);
            }
            Ok(())
        }
        Command::Favorites { command } => run_favorites(command, store),
        Command::Feedback {
            command: FeedbackCommand::Submit(args),
        } => {
            store.ensure_schema()?;
            let feedback = store.add_feedback(&FeedbackInput {
                feedback_type: args.feedback_type,
                title: args.title,
                content: args.content,
                email: args.email,
            })?;
            println!("{}", serde_json::to_string_pretty(&feedback)?);
            Ok(())
        }
    }
}

/// Ensures the schema and reconciles seed data ahead of reference reads.
///
/// Only a schema failure is returned; reconciliation problems are already
/// logged by the store and stay in the report.
pub fn prepare_reference_reads(store: &mut SqliteCatalogStore) -> Result<ReconcileReport> {
    store.ensure_schema()?;
    Ok(store.reconcile_seed_data())
}

/// Lists terms, degrading to an empty list on any failure so callers always
/// have something to render.
pub fn list_terms_or_empty(store: &mut SqliteCatalogStore) -> Vec<Term> {
    match prepare_reference_reads(store).and_then(|_| store.list_terms()) {
        Ok(terms) => terms,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "term listing degraded to empty");
            Vec::new()
        }
    }
}

fn run_terms(command: TermsCommand, store: &mut SqliteCatalogStore) -> Result<()> {
    match command {
        TermsCommand::List(args) => {
            let terms: Vec<Term> = list_terms_or_empty(store)
                .into_iter()
                .filter(|term| term.matches(args.search.as_deref(), args.category.as_deref()))
                .collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&terms)?);
            } else {
                print_terms(&terms);
            }
            Ok(())
        }
        TermsCommand::Show(args) => {
            prepare_reference_reads(store)?;
            let term = store
                .get_term(args.id)?
                .ok_or_else(|| anyhow!("term {} not found", args.id))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&term)?);
            } else {
                print_term_detail(&term);
            }
            Ok(())
        }
    }
}

fn run_stocks(command: StocksCommand, store: &mut SqliteCatalogStore) -> Result<()> {
    match command {
        StocksCommand::List(args) => {
            prepare_reference_reads(store)?;
            let mut stocks = store.list_stocks(args.region)?;
            if let Some(query) = args.search.as_deref() {
                stocks.retain(|stock| stock.matches_search(query));
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stocks)?);
            } else {
                print_stocks(&stocks);
            }
            Ok(())
        }
        StocksCommand::Show(args) => {
            prepare_reference_reads(store)?;
            let stock = store
                .get_stock(&args.code)?
                .ok_or_else(|| anyhow!("stock {} not found", args.code))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stock)?);
            } else {
                print_stock_detail(&stock);
            }
            Ok(())
        }
    }
}

fn run_favorites(command: FavoritesCommand, store: &mut SqliteCatalogStore) -> Result<()> {
    match command {
        FavoritesCommand::List(args) => {
            store.ensure_schema()?;
            let favorites = store.list_favorites()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&favorites)?);
            } else {
                print_favorites(&favorites);
            }
            Ok(())
        }
        FavoritesCommand::Add(args) => {
            store.ensure_schema()?;
            let input = FavoriteInput {
                code: args.code,
                name: args.name,
            };
            match store.add_favorite(&input)? {
                FavoriteOutcome::Added(favorite) => {
                    println!("{}", serde_json::to_string_pretty(&favorite)?);
                    Ok(())
                }
                FavoriteOutcome::AlreadyExists => Err(CatalogError::Conflict(format!(
                    "stock {} is already in favorites",
                    input.code
                ))
                .into()),
            }
        }
    }
}

fn print_reconcile_report(report: &ReconcileReport) {
    for step in &report.steps {
        match &step.outcome {
            StepOutcome::Applied { rows } => println!("{} applied rows={rows}", step.step.as_str()),
            StepOutcome::SchemaChanged => println!("{} schema_changed", step.step.as_str()),
            StepOutcome::Unchanged => println!("{} unchanged", step.step.as_str()),
            StepOutcome::Failed { error } => println!("{} failed: {error}", step.step.as_str()),
        }
    }
}

fn print_terms(terms: &[Term]) {
    println!("{:<5} {:<10} {:<14} summary", "id", "category", "term");
    println!("{}", "-".repeat(80));
    for term in terms {
        println!(
            "{:<5} {:<10} {:<14} {}",
            term.id, term.category, term.term, term.simple_explanation
        );
    }
}

fn print_term_detail(term: &Term) {
    println!("{} [{}]", term.term, term.category);
    println!("{}", term.simple_explanation);
    if let Some(detail) = &term.detailed_explanation {
        println!();
        println!("{detail}");
    }
    if let Some(example) = &term.example {
        println!();
        println!("example: {example}");
    }
}

fn print_stocks(stocks: &[Stock]) {
    println!(
        "{:<8} {:<30} {:<20} {:<6} region",
        "code", "name", "sector", "risk"
    );
    println!("{}", "-".repeat(80));
    for stock in stocks {
        println!(
            "{:<8} {:<30} {:<20} {:<6} {}",
            stock.code,
            stock.name,
            stock.sector.as_deref().unwrap_or("-"),
            stock.risk_level.as_deref().unwrap_or("-"),
            stock.region.as_deref().unwrap_or("-")
        );
    }
}

fn print_stock_detail(stock: &Stock) {
    println!("{} ({})", stock.name, stock.code);
    println!(
        "sector={} risk={} region={}",
        stock.sector.as_deref().unwrap_or("n/a"),
        stock.risk_level.as_deref().unwrap_or("n/a"),
        stock.region.as_deref().unwrap_or("n/a")
    );
    if let Some(description) = &stock.description {
        println!();
        println!("{description}");
    }
    if let Some(reason) = &stock.recommendation_reason {
        println!();
        println!("why: {reason}");
    }
}

fn print_faqs(faqs: &[Faq]) {
    for faq in faqs {
        println!("Q. {} [{}]", faq.question, faq.category.as_deref().unwrap_or("-"));
        println!("A. {}", faq.answer);
        println!();
    }
}

fn print_favorites(favorites: &[FavoriteStock]) {
    println!("{:<8} {:<30} added", "code", "name");
    println!("{}", "-".repeat(60));
    for favorite in favorites {
        println!(
            "{:<8} {:<30} {}",
            favorite.code, favorite.name, favorite.created_at
        );
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use rusqlite::Connection;
    use ulid::Ulid;

    fn must<T>(result: Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("test failure: {err:#}"),
        }
    }

    fn temp_db_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("easystock-{label}-{}.db", Ulid::new()))
    }

    fn execute_cli(db_path: &Path, args: &[&str]) -> Result<()> {
        let mut argv = vec![
            "easystock".to_string(),
            "--db".to_string(),
            db_path.display().to_string(),
        ];
        argv.extend(args.iter().map(ToString::to_string));
        let cli = Cli::try_parse_from(argv)?;
        run_cli(cli)
    }

    fn count(db_path: &Path, sql: &str) -> i64 {
        let conn = match Connection::open(db_path) {
            Ok(value) => value,
            Err(err) => panic!("failed to open db for assertions: {err}"),
        };
        match conn.query_row(sql, [], |row| row.get(0)) {
            Ok(value) => value,
            Err(err) => panic!("count query failed: {err}"),
        }
    }

    fn cleanup(db_path: &Path) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{suffix}", db_path.display()));
        }
    }

    #[test]
    fn init_twice_seeds_once() {
        let db_path = temp_db_path("init");
        must(execute_cli(&db_path, &["init"]));
        must(execute_cli(&db_path, &["init", "--json"]));

        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM terms"), 21);
        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM stocks"), 35);
        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM faqs"), 3);
        cleanup(&db_path);
    }

    #[test]
    fn read_commands_reconcile_before_querying() {
        let db_path = temp_db_path("reads");
        must(execute_cli(&db_path, &["stocks", "show", "--code", "005930"]));
        must(execute_cli(&db_path, &["stocks", "list", "--region", "국내", "--json"]));
        must(execute_cli(&db_path, &["stocks", "list", "--region", "overseas"]));
        assert!(execute_cli(&db_path, &["stocks", "list", "--region", "mars"]).is_err());
        must(execute_cli(&db_path, &["terms", "show", "--id", "1", "--json"]));
        must(execute_cli(&db_path, &["faqs", "list"]));

        assert!(execute_cli(&db_path, &["stocks", "show", "--code", "NOPE"]).is_err());
        assert!(execute_cli(&db_path, &["terms", "show", "--id", "9999"]).is_err());
        cleanup(&db_path);
    }

    #[test]
    fn favorites_add_twice_reports_conflict() {
        let db_path = temp_db_path("favorites");
        must(execute_cli(
            &db_path,
            &["favorites", "add", "--code", "AAPL", "--name", "Apple Inc."],
        ));
        let err = match execute_cli(
            &db_path,
            &["favorites", "add", "--code", "AAPL", "--name", "Apple Inc."],
        ) {
            Ok(()) => panic!("second favorite add must fail"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("already in favorites"));
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Conflict(_))
        ));
        must(execute_cli(&db_path, &["favorites", "list", "--json"]));

        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM favorite_stocks"), 1);
        // Favorites only ensure the schema; reference data stays unseeded.
        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM terms"), 0);
        cleanup(&db_path);
    }

    #[test]
    fn feedback_submit_without_email_stores_null() {
        let db_path = temp_db_path("feedback");
        must(execute_cli(
            &db_path,
            &["feedback", "submit", "--type", "bug", "--title", "T", "--content", "C"],
        ));
        assert_eq!(
            count(&db_path, "SELECT COUNT(*) FROM feedback WHERE email IS NULL"),
            1
        );
        assert!(execute_cli(
            &db_path,
            &["feedback", "submit", "--type", "bug", "--title", "", "--content", "C"],
        )
        .is_err());
        assert_eq!(count(&db_path, "SELECT COUNT(*) FROM feedback"), 1);
        cleanup(&db_path);
    }

    #[test]
    fn term_listing_degrades_to_empty_when_store_is_unusable() {
        let mut store = must(SqliteCatalogStore::open(Path::new(":memory:")));
        must(store.ensure_schema());
        assert_eq!(list_terms_or_empty(&mut store).len(), 21);

        let conn_path = temp_db_path("broken");
        let bootstrap = must(SqliteCatalogStore::open(&conn_path));
        must(bootstrap.close());
        let conn = match Connection::open(&conn_path) {
            Ok(value) => value,
            Err(err) => panic!("failed to open db: {err}"),
        };
        if let Err(err) = conn.execute_batch("CREATE TABLE terms (id INTEGER PRIMARY KEY)") {
            panic!("failed to create broken terms table: {err}");
        }
        drop(conn);

        let mut broken = must(SqliteCatalogStore::open(&conn_path));
        assert!(list_terms_or_empty(&mut broken).is_empty());
        must(broken.close());
        cleanup(&conn_path);
    }
}
