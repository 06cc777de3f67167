//! Registry store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed read/write APIs over the three registry tables.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call record `validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - No statement touches more than one table; cross-store consistency is
//!   the service's job.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::{migrations, DbError};
use crate::model::deadline::DeadlineRecord;
use crate::model::objective::Objective;
use crate::model::priority::PriorityRecord;
use crate::model::{Address, RecordValidationError};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for registry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A record failed its field rules before persistence.
    Validation(RecordValidationError),
    /// Transport-level database failure.
    Db(DbError),
    /// The operation needs an objective for this address and none exists.
    NotFound(Address),
    /// The operation needs the address to be free and it is not.
    AlreadyExists(Address),
    /// Persisted state that no valid write could have produced.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(address) => write!(f, "no objective registered for {address}"),
            Self::AlreadyExists(address) => {
                write!(f, "an objective is already registered for {address}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted registry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::AlreadyExists(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Primary keyed store: address → objective record.
///
/// Owns the existence notion the other two stores are gated on.
pub trait ObjectiveStore {
    /// Inserts a new objective; `AlreadyExists` when the address is taken.
    fn insert_objective(&self, address: Address, objective: &Objective) -> RepoResult<()>;
    /// Overwrites both fields of an existing objective; `NotFound` when
    /// the address holds none.
    fn update_objective(&self, address: Address, objective: &Objective) -> RepoResult<()>;
    /// Reads the objective for an address, if any.
    fn get_objective(&self, address: Address) -> RepoResult<Option<Objective>>;
    /// Hard-deletes the objective row only; `NotFound` when absent.
    /// Priority/deadline rows for the same address are left untouched.
    fn delete_objective(&self, address: Address) -> RepoResult<()>;
}

/// Secondary keyed store: address → urgency classification.
pub trait PriorityStore {
    /// Creates-or-overwrites the priority row for an address.
    fn upsert_priority(&self, address: Address, record: &PriorityRecord) -> RepoResult<()>;
    /// Reads the priority row for an address, if any.
    fn get_priority(&self, address: Address) -> RepoResult<Option<PriorityRecord>>;
}

/// Secondary keyed store: address → frozen deadline.
pub trait DeadlineStore {
    /// Creates-or-overwrites the deadline row for an address.
    fn upsert_deadline(&self, address: Address, record: &DeadlineRecord) -> RepoResult<()>;
    /// Reads the deadline row for an address, if any.
    fn get_deadline(&self, address: Address) -> RepoResult<Option<DeadlineRecord>>;
}

/// SQLite-backed implementation of all three registry stores.
#[derive(Debug)]
pub struct SqliteRegistryStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRegistryStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// # Errors
    /// - `InvalidData` when the connection's schema version does not match
    ///   what this binary expects (connection not bootstrapped via
    ///   `open_db`/`open_db_in_memory`).
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let schema_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected = migrations::latest_version();
        if schema_version != expected {
            return Err(RepoError::InvalidData(format!(
                "connection schema version {schema_version} does not match expected {expected}; \
                 open the database through db::open_db"
            )));
        }
        Ok(Self { conn })
    }
}

impl ObjectiveStore for SqliteRegistryStore<'_> {
    fn insert_objective(&self, address: Address, objective: &Objective) -> RepoResult<()> {
        objective.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO objectives (address, description, completed)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (address) DO NOTHING;",
            params![
                address.to_string(),
                objective.description.as_str(),
                bool_to_int(objective.completed),
            ],
        )?;

        if inserted == 0 {
            return Err(RepoError::AlreadyExists(address));
        }

        Ok(())
    }

    fn update_objective(&self, address: Address, objective: &Objective) -> RepoResult<()> {
        objective.validate()?;

        let changed = self.conn.execute(
            "UPDATE objectives
             SET
                description = ?2,
                completed = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE address = ?1;",
            params![
                address.to_string(),
                objective.description.as_str(),
                bool_to_int(objective.completed),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(address));
        }

        Ok(())
    }

    fn get_objective(&self, address: Address) -> RepoResult<Option<Objective>> {
        let row = self
            .conn
            .query_row(
                "SELECT description, completed FROM objectives WHERE address = ?1;",
                [address.to_string()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;

        let Some((description, completed_raw)) = row else {
            return Ok(None);
        };

        let objective = Objective {
            description,
            completed: int_to_bool(completed_raw, "objectives.completed")?,
        };
        objective.validate()?;
        Ok(Some(objective))
    }

    fn delete_objective(&self, address: Address) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM objectives WHERE address = ?1;",
            [address.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(address));
        }

        Ok(())
    }
}

impl PriorityStore for SqliteRegistryStore<'_> {
    fn upsert_priority(&self, address: Address, record: &PriorityRecord) -> RepoResult<()> {
        record.validate()?;

        self.conn.execute(
            "INSERT INTO priorities (address, urgency)
             VALUES (?1, ?2)
             ON CONFLICT (address) DO UPDATE SET
                urgency = excluded.urgency,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![address.to_string(), i64::from(record.urgency)],
        )?;

        Ok(())
    }

    fn get_priority(&self, address: Address) -> RepoResult<Option<PriorityRecord>> {
        let urgency = self
            .conn
            .query_row(
                "SELECT urgency FROM priorities WHERE address = ?1;",
                [address.to_string()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        let Some(urgency_raw) = urgency else {
            return Ok(None);
        };

        let urgency = u8::try_from(urgency_raw).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid urgency value `{urgency_raw}` in priorities.urgency"
            ))
        })?;
        let record = PriorityRecord::new(urgency);
        record.validate()?;
        Ok(Some(record))
    }
}

impl DeadlineStore for SqliteRegistryStore<'_> {
    fn upsert_deadline(&self, address: Address, record: &DeadlineRecord) -> RepoResult<()> {
        let target_point = i64::try_from(record.target_point).map_err(|_| {
            RepoError::InvalidData(format!(
                "target point {} exceeds storable range",
                record.target_point
            ))
        })?;

        self.conn.execute(
            "INSERT INTO deadlines (address, target_point, alert_activated)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (address) DO UPDATE SET
                target_point = excluded.target_point,
                alert_activated = excluded.alert_activated,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                address.to_string(),
                target_point,
                bool_to_int(record.alert_activated),
            ],
        )?;

        Ok(())
    }

    fn get_deadline(&self, address: Address) -> RepoResult<Option<DeadlineRecord>> {
        self.conn
            .query_row(
                "SELECT target_point, alert_activated FROM deadlines WHERE address = ?1;",
                [address.to_string()],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?
            .map(|(target_raw, alert_raw)| parse_deadline(target_raw, alert_raw))
            .transpose()
    }
}

fn parse_deadline(target_raw: i64, alert_raw: i64) -> RepoResult<DeadlineRecord> {
    let target_point = u64::try_from(target_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid target point `{target_raw}` in deadlines.target_point"
        ))
    })?;
    Ok(DeadlineRecord {
        target_point,
        alert_activated: int_to_bool(alert_raw, "deadlines.alert_activated")?,
    })
}

fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
