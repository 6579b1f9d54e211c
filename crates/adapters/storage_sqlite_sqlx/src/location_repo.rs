//! `SQLite` implementation of [`LocationRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use geotrack_app::ports::LocationRepository;
use geotrack_domain::error::TrackerError;
use geotrack_domain::id::LocationId;
use geotrack_domain::location::LocationReport;
use geotrack_domain::stats::DeviceStats;
use geotrack_domain::time::to_sortable;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(LocationReport);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<LocationReport> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let timestamp_str: String = row.try_get("timestamp")?;

        let timestamp = chrono::DateTime::parse_from_rfc3339(&timestamp_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(LocationReport {
            id: LocationId::from_uuid(id),
            imei: row.try_get("imei")?,
            longitude: row.try_get("longitude")?,
            height: row.try_get("height")?,
            latitude: row.try_get("latitude")?,
            timestamp,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO locations (id, imei, longitude, height, latitude, timestamp)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_RECENT: &str = r"
    SELECT * FROM locations
    ORDER BY timestamp DESC, rowid DESC
    LIMIT ?
";

const SELECT_RECENT_BY_IMEI: &str = r"
    SELECT * FROM locations
    WHERE imei = ?
    ORDER BY timestamp DESC, rowid DESC
    LIMIT ?
";

const SELECT_OLDEST_BY_IMEI: &str = r"
    SELECT * FROM locations
    WHERE imei = ?
    ORDER BY timestamp ASC, rowid ASC
    LIMIT 1
";

const COUNT_BY_IMEI: &str = "SELECT COUNT(*) FROM locations WHERE imei = ?";

/// `SQLite`-backed location repository.
#[derive(Clone)]
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    async fn record(&self, report: LocationReport) -> Result<LocationReport, TrackerError> {
        sqlx::query(INSERT)
            .bind(report.id.as_uuid())
            .bind(&report.imei)
            .bind(report.longitude)
            .bind(report.height)
            .bind(report.latitude)
            .bind(to_sortable(report.timestamp))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(report)
    }

    async fn find_recent(
        &self,
        imei: Option<&str>,
        limit: usize,
    ) -> Result<Vec<LocationReport>, TrackerError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = if let Some(imei) = imei {
            sqlx::query_as(SELECT_RECENT_BY_IMEI)
                .bind(imei)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?
        } else {
            sqlx::query_as(SELECT_RECENT)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?
        };

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_latest(&self, imei: &str) -> Result<Option<LocationReport>, TrackerError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_RECENT_BY_IMEI)
            .bind(imei)
            .bind(1_i64)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    /// The three reads share one transaction, so the count and the boundary
    /// rows always describe the same set of reports.
    async fn stats(&self, imei: &str) -> Result<DeviceStats, TrackerError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let total: i64 = sqlx::query_scalar(COUNT_BY_IMEI)
            .bind(imei)
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        let latest: Option<Wrapper> = sqlx::query_as(SELECT_RECENT_BY_IMEI)
            .bind(imei)
            .bind(1_i64)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        let oldest: Option<Wrapper> = sqlx::query_as(SELECT_OLDEST_BY_IMEI)
            .bind(imei)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(DeviceStats::new(
            imei,
            u64::try_from(total).unwrap_or_default(),
            Wrapper::maybe(latest),
            Wrapper::maybe(oldest),
        ))
    }
}
