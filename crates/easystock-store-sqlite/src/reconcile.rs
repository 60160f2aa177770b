//! Startup reconciliation of catalog contents.
//!
//! Every step runs on every start and is a no-op once the store has caught
//! up. Steps are independent: a failing step is logged and recorded in the
//! report, and later steps still run. Each seed batch is its own
//! transaction.

use anyhow::{Context, Result};
use easystock_core::baseline::{self, BaselineFaq, BaselineStock, BaselineTerm};
use easystock_core::{Region, CATEGORY_ADVANCED, CATEGORY_DEPRECATED_METRICS};
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::{count_where, SqliteCatalogStore};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileStep {
    RelabelCategories,
    AddRegionColumn,
    BackfillRegion,
    SeedTerms,
    SeedStocks,
    SeedFaqs,
}

impl ReconcileStep {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RelabelCategories => "relabel_categories",
            Self::AddRegionColumn => "add_region_column",
            Self::BackfillRegion => "backfill_region",
            Self::SeedTerms => "seed_terms",
            Self::SeedStocks => "seed_stocks",
            Self::SeedFaqs => "seed_faqs",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Rows were written.
    Applied { rows: usize },
    /// The table shape changed.
    SchemaChanged,
    /// Nothing to do; the store already satisfies this step.
    Unchanged,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepReport {
    pub step: ReconcileStep,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

impl StepReport {
    /// Rows written by the step, or the error it swallowed.
    pub fn result(&self) -> Result<usize, &str> {
        match &self.outcome {
            StepOutcome::Applied { rows } => Ok(*rows),
            StepOutcome::SchemaChanged | StepOutcome::Unchanged => Ok(0),
            StepOutcome::Failed { error } => Err(error.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReconcileReport {
    pub steps: Vec<StepReport>,
}

impl ReconcileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(|report| report.result().is_ok())
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.rows_written() == 0
            && self
                .steps
                .iter()
                .all(|report| report.outcome == StepOutcome::Unchanged)
    }

    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.steps
            .iter()
            .filter_map(|report| report.result().ok())
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|report| report.result().is_err())
    }

    #[must_use]
    pub fn outcome(&self, step: ReconcileStep) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|report| report.step == step)
            .map(|report| &report.outcome)
    }

    fn record(&mut self, step: ReconcileStep, result: Result<StepOutcome>) {
        let outcome = match result {
            Ok(outcome) => {
                match &outcome {
                    StepOutcome::Applied { rows } => {
                        tracing::info!(step = step.as_str(), rows, "reconcile step applied");
                    }
                    StepOutcome::SchemaChanged => {
                        tracing::info!(step = step.as_str(), "reconcile step changed schema");
                    }
                    StepOutcome::Unchanged => {
                        tracing::debug!(step = step.as_str(), "reconcile step had nothing to do");
                    }
                    StepOutcome::Failed { error } => {
                        tracing::error!(step = step.as_str(), error = %error, "reconcile step failed");
                    }
                }
                outcome
            }
            Err(err) => {
                let error = format!("{err:#}");
                tracing::warn!(step = step.as_str(), error = %error, "reconcile step skipped");
                StepOutcome::Failed { error }
            }
        };
        self.steps.push(StepReport { step, outcome });
    }
}

/// How a seed batch treats rows whose unique key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertMode {
    /// Any conflict aborts the batch.
    Strict,
    /// Conflicting rows are skipped.
    IgnoreExisting,
}

impl InsertMode {
    fn verb(self) -> &'static str {
        match self {
            Self::Strict => "INSERT",
            Self::IgnoreExisting => "INSERT OR IGNORE",
        }
    }
}

impl SqliteCatalogStore {
    /// Brings stored catalog data up to the current shape and fills in
    /// missing reference data.
    ///
    /// Never fails; inspect the returned report for per-step results.
    /// Must run after [`SqliteCatalogStore::ensure_schema`].
    pub fn reconcile_seed_data(&mut self) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        report.record(ReconcileStep::RelabelCategories, relabel_categories(&self.conn));
        report.record(ReconcileStep::AddRegionColumn, Ok(add_region_column(&self.conn)));
        report.record(ReconcileStep::BackfillRegion, backfill_region(&self.conn));
        report.record(ReconcileStep::SeedTerms, seed_terms(&mut self.conn));
        report.record(ReconcileStep::SeedStocks, seed_stocks(&mut self.conn));
        report.record(ReconcileStep::SeedFaqs, seed_faqs(&mut self.conn));

        report
    }
}

fn relabel_categories(conn: &Connection) -> Result<StepOutcome> {
    let rows = conn
        .execute(
            "UPDATE terms SET category = ?1 WHERE category = ?2",
            params![CATEGORY_ADVANCED, CATEGORY_DEPRECATED_METRICS],
        )
        .context("failed to relabel deprecated term category")?;
    Ok(applied_or_unchanged(rows))
}

/// Adds `stocks.region` to tables created before the column existed.
///
/// A "duplicate column" failure is the expected steady state. Anything else
/// is a genuine error, reported as [`StepOutcome::Failed`].
fn add_region_column(conn: &Connection) -> StepOutcome {
    let statement = format!(
        "ALTER TABLE stocks ADD COLUMN region TEXT DEFAULT '{}'",
        Region::DEFAULT.as_str()
    );
    match conn.execute(&statement, []) {
        Ok(_) => StepOutcome::SchemaChanged,
        Err(err) if is_duplicate_column(&err) => StepOutcome::Unchanged,
        Err(err) => StepOutcome::Failed {
            error: format!("failed to add stocks.region: {err}"),
        },
    }
}

fn backfill_region(conn: &Connection) -> Result<StepOutcome> {
    let rows = conn
        .execute(
            "UPDATE stocks SET region = ?1 WHERE region IS NULL OR region = ''",
            params![Region::DEFAULT.as_str()],
        )
        .context("failed to backfill stock regions")?;
    Ok(applied_or_unchanged(rows))
}

/// Empty table gets the full set. Otherwise an installation holding at most
/// the legacy advanced term gets the rest of the advanced terms.
fn seed_terms(conn: &mut Connection) -> Result<StepOutcome> {
    if count_where(conn, "terms", None)? == 0 {
        let rows = insert_terms(conn, baseline::terms().iter(), InsertMode::Strict)
            .context("failed to insert baseline terms")?;
        return Ok(applied_or_unchanged(rows));
    }

    let advanced = count_where(conn, "terms", Some(("category", CATEGORY_ADVANCED)))?;
    if advanced > 1 {
        return Ok(StepOutcome::Unchanged);
    }

    let rows = insert_terms(
        conn,
        baseline::advanced_backfill_terms(),
        InsertMode::IgnoreExisting,
    )
    .context("failed to insert advanced terms")?;
    Ok(applied_or_unchanged(rows))
}

/// Empty table gets both regions. Otherwise an installation without any
/// domestic stock gets the domestic subset.
fn seed_stocks(conn: &mut Connection) -> Result<StepOutcome> {
    if count_where(conn, "stocks", None)? == 0 {
        let rows = insert_stocks(conn, baseline::stocks().iter(), InsertMode::Strict)
            .context("failed to insert baseline stocks")?;
        return Ok(applied_or_unchanged(rows));
    }

    let domestic = count_where(conn, "stocks", Some(("region", Region::Domestic.as_str())))?;
    if domestic > 0 {
        return Ok(StepOutcome::Unchanged);
    }

    let rows = insert_stocks(
        conn,
        baseline::stocks_in_region(Region::Domestic),
        InsertMode::IgnoreExisting,
    )
    .context("failed to insert domestic stocks")?;
    Ok(applied_or_unchanged(rows))
}

fn seed_faqs(conn: &mut Connection) -> Result<StepOutcome> {
    if count_where(conn, "faqs", None)? > 0 {
        return Ok(StepOutcome::Unchanged);
    }
    let rows = insert_faqs(conn, baseline::faqs()).context("failed to insert baseline faqs")?;
    Ok(applied_or_unchanged(rows))
}

fn insert_terms<'a>(
    conn: &mut Connection,
    terms: impl Iterator<Item = &'a BaselineTerm>,
    mode: InsertMode,
) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    let mut rows = 0;
    {
        let mut stmt = tx.prepare(&format!(
            "{} INTO terms(term, category, simple_explanation, detailed_explanation, example)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            mode.verb()
        ))?;
        for term in terms {
            rows += stmt.execute(params![
                term.term,
                term.category,
                term.simple_explanation,
                term.detailed_explanation,
                term.example,
            ])?;
        }
    }
    tx.commit()?;
    Ok(rows)
}

fn insert_stocks<'a>(
    conn: &mut Connection,
    stocks: impl Iterator<Item = &'a BaselineStock>,
    mode: InsertMode,
) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    let mut rows = 0;
    {
        let mut stmt = tx.prepare(&format!(
            "{} INTO stocks(code, name, sector, description, recommendation_reason, risk_level, region)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            mode.verb()
        ))?;
        for stock in stocks {
            rows += stmt.execute(params![
                stock.code,
                stock.name,
                stock.sector,
                stock.description,
                stock.recommendation_reason,
                stock.risk_level,
                stock.region.as_str(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(rows)
}

fn insert_faqs(conn: &mut Connection, faqs: &[BaselineFaq]) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    let mut rows = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO faqs(question, answer, category) VALUES (?1, ?2, ?3)",
        )?;
        for faq in faqs {
            rows += stmt.execute(params![faq.question, faq.answer, faq.category])?;
        }
    }
    tx.commit()?;
    Ok(rows)
}

fn applied_or_unchanged(rows: usize) -> StepOutcome {
    if rows == 0 {
        StepOutcome::Unchanged
    } else {
        StepOutcome::Applied { rows }
    }
}

fn is_duplicate_column(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => message.contains("duplicate column"),
        _ => false,
    }
}
