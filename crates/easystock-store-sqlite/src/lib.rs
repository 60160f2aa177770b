#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use easystock_core::{
    format_timestamp, now_utc, Faq, FavoriteInput, FavoriteOutcome, FavoriteStock, Feedback,
    FeedbackInput, Region, Stock, Term,
};
use rusqlite::{params, Connection, OptionalExtension};

mod reconcile;

pub use reconcile::{ReconcileReport, ReconcileStep, StepOutcome, StepReport};

const SCHEMA_V1: &str = r"
CREATE TABLE IF NOT EXISTS terms (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  term TEXT NOT NULL UNIQUE,
  category TEXT NOT NULL,
  simple_explanation TEXT NOT NULL,
  detailed_explanation TEXT,
  example TEXT,
  created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE TABLE IF NOT EXISTS stocks (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  code TEXT NOT NULL UNIQUE,
  name TEXT NOT NULL,
  sector TEXT,
  description TEXT,
  recommendation_reason TEXT,
  risk_level TEXT,
  region TEXT DEFAULT '해외',
  created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE TABLE IF NOT EXISTS faqs (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  question TEXT NOT NULL,
  answer TEXT NOT NULL,
  category TEXT,
  created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE TABLE IF NOT EXISTS feedback (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  type TEXT NOT NULL,
  title TEXT NOT NULL,
  content TEXT NOT NULL,
  email TEXT,
  created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE TABLE IF NOT EXISTS favorite_stocks (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  code TEXT NOT NULL UNIQUE,
  name TEXT NOT NULL,
  created_at TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);
";

/// Tables owned by the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    Terms,
    Stocks,
    Faqs,
    Feedback,
    FavoriteStocks,
}

impl CatalogTable {
    pub const ALL: [Self; 5] = [
        Self::Terms,
        Self::Stocks,
        Self::Faqs,
        Self::Feedback,
        Self::FavoriteStocks,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terms => "terms",
            Self::Stocks => "stocks",
            Self::Faqs => "faqs",
            Self::Feedback => "feedback",
            Self::FavoriteStocks => "favorite_stocks",
        }
    }
}

/// Owns the single connection to the catalog database for the lifetime of
/// the process.
pub struct SqliteCatalogStore {
    conn: Connection,
}

impl SqliteCatalogStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::error!(dir = %parent.display(), error = %err, "failed to create data directory");
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open sqlite database at {}", path.display()))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to configure sqlite pragmas")?;

        Ok(Self { conn })
    }

    /// Closes the connection, surfacing any error the implicit drop would
    /// swallow.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| anyhow!(err))
            .context("failed to close sqlite database")
    }

    /// Creates any missing catalog table. Never alters an existing one.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_V1)
            .context("failed to apply catalog schema")
    }

    pub fn count_rows(&self, table: CatalogTable) -> Result<usize> {
        count_where(&self.conn, table.as_str(), None)
    }

    pub fn list_terms(&self) -> Result<Vec<Term>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, term, category, simple_explanation, detailed_explanation, example, created_at
             FROM terms
             ORDER BY category, term",
        )?;
        let rows = stmt.query_map([], parse_term_row)?;
        collect_rows(rows).context("failed to list terms")
    }

    pub fn get_term(&self, id: i64) -> Result<Option<Term>> {
        self.conn
            .query_row(
                "SELECT id, term, category, simple_explanation, detailed_explanation, example, created_at
                 FROM terms
                 WHERE id = ?1",
                params![id],
                parse_term_row,
            )
            .optional()
            .with_context(|| format!("failed to load term {id}"))
    }

    pub fn list_stocks(&self, region: Option<Region>) -> Result<Vec<Stock>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, name, sector, description, recommendation_reason, risk_level, region, created_at
             FROM stocks
             WHERE ?1 IS NULL OR region = ?1
             ORDER BY name",
        )?;
        let rows = stmt.query_map(params![region.map(Region::as_str)], parse_stock_row)?;
        collect_rows(rows).context("failed to list stocks")
    }

    pub fn get_stock(&self, code: &str) -> Result<Option<Stock>> {
        self.conn
            .query_row(
                "SELECT id, code, name, sector, description, recommendation_reason, risk_level, region, created_at
                 FROM stocks
                 WHERE code = ?1",
                params![code],
                parse_stock_row,
            )
            .optional()
            .with_context(|| format!("failed to load stock {code}"))
    }

    pub fn list_faqs(&self) -> Result<Vec<Faq>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, question, answer, category FROM faqs ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Faq {
                id: row.get(0)?,
                question: row.get(1)?,
                answer: row.get(2)?,
                category: row.get(3)?,
            })
        })?;
        collect_rows(rows).context("failed to list faqs")
    }

    pub fn list_favorites(&self) -> Result<Vec<FavoriteStock>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, name, created_at
             FROM favorite_stocks
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], parse_favorite_row)?;
        collect_rows(rows).context("failed to list favorites")
    }

    /// Adds a favorite unless one with the same code exists.
    ///
    /// The existence check runs first; a unique violation on the insert
    /// itself maps to the same [`FavoriteOutcome::AlreadyExists`].
    pub fn add_favorite(&self, input: &FavoriteInput) -> Result<FavoriteOutcome> {
        input
            .validate()
            .map_err(|err| anyhow!("favorite validation failed: {err}"))?;

        let existing = self
            .conn
            .query_row(
                "SELECT id, code, name, created_at FROM favorite_stocks WHERE code = ?1",
                params![input.code],
                parse_favorite_row,
            )
            .optional()
            .context("failed to look up favorite")?;
        if existing.is_some() {
            return Ok(FavoriteOutcome::AlreadyExists);
        }

        self.insert_favorite(input)
    }

    /// Inserts without the lookup; a code that is already stored comes back
    /// as [`FavoriteOutcome::AlreadyExists`].
    fn insert_favorite(&self, input: &FavoriteInput) -> Result<FavoriteOutcome> {
        let created_at = format_timestamp(now_utc()).map_err(|err| anyhow!(err.to_string()))?;
        let inserted = self.conn.execute(
            "INSERT INTO favorite_stocks(code, name, created_at) VALUES (?1, ?2, ?3)",
            params![input.code, input.name, created_at],
        );
        match inserted {
            Ok(_) => Ok(FavoriteOutcome::Added(FavoriteStock {
                id: self.conn.last_insert_rowid(),
                code: input.code.clone(),
                name: input.name.clone(),
                created_at,
            })),
            Err(err) if is_unique_violation(&err) => Ok(FavoriteOutcome::AlreadyExists),
            Err(err) => Err(anyhow!(err).context("failed to insert favorite")),
        }
    }

    pub fn add_feedback(&self, input: &FeedbackInput) -> Result<Feedback> {
        input
            .validate()
            .map_err(|err| anyhow!("feedback validation failed: {err}"))?;

        let created_at = format_timestamp(now_utc()).map_err(|err| anyhow!(err.to_string()))?;
        let email = input.stored_email();
        self.conn
            .execute(
                "INSERT INTO feedback(type, title, content, email, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![input.feedback_type, input.title, input.content, email, created_at],
            )
            .context("failed to insert feedback")?;

        Ok(Feedback {
            id: self.conn.last_insert_rowid(),
            feedback_type: input.feedback_type.clone(),
            title: input.title.clone(),
            content: input.content.clone(),
            email: email.map(ToString::to_string),
            created_at,
        })
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn parse_term_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Term> {
    Ok(Term {
        id: row.get(0)?,
        term: row.get(1)?,
        category: row.get(2)?,
        simple_explanation: row.get(3)?,
        detailed_explanation: row.get(4)?,
        example: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn parse_stock_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Stock> {
    Ok(Stock {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        sector: row.get(3)?,
        description: row.get(4)?,
        recommendation_reason: row.get(5)?,
        risk_level: row.get(6)?,
        region: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn parse_favorite_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FavoriteStock> {
    Ok(FavoriteStock {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

fn count_where(conn: &Connection, table: &str, filter: Option<(&str, &str)>) -> Result<usize> {
    let count: i64 = match filter {
        Some((column, value)) => conn.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE {column} = ?1"),
            params![value],
            |row| row.get(0),
        ),
        None => conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        }),
    }
    .with_context(|| format!("failed to count rows in {table}"))?;

    usize::try_from(count).with_context(|| format!("invalid row count for {table}: {count}"))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn collect_rows<T>(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>>,
) -> Result<Vec<T>> {
    let mut values = Vec::new();
    for row in rows {
        values.push(row?);
    }
    Ok(values)
}
