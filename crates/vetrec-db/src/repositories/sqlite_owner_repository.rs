//! SQLite implementation of the `OwnerRepository` trait.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use vetrec_core::{NewOwner, Owner, OwnerRepository, RepositoryError};

const OWNER_SELECT_COLUMNS: &str = "id, first_name, last_name, address, city, telephone";

fn row_to_owner(row: &SqliteRow) -> Result<Owner, RepositoryError> {
    let get = |column: &str| {
        row.try_get::<String, _>(column)
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    };
    Ok(Owner {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        first_name: get("first_name")?,
        last_name: get("last_name")?,
        address: get("address")?,
        city: get("city")?,
        telephone: get("telephone")?,
    })
}

/// Turn a name fragment into a prefix LIKE pattern. An empty fragment
/// becomes a bare wildcard so that field does not constrain the query.
fn prefix_pattern(fragment: &str) -> String {
    format!("{fragment}%")
}

/// SQLite implementation of the `OwnerRepository` trait.
///
/// Holds a connection pool and implements all owner persistence
/// operations using SQLite.
pub struct SqliteOwnerRepository {
    pool: SqlitePool,
}

impl SqliteOwnerRepository {
    /// Create a new SQLite owner repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for SqliteOwnerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Owner, RepositoryError> {
        let query = format!("SELECT {OWNER_SELECT_COLUMNS} FROM owners WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Owner with ID {id}")))?;

        row_to_owner(&row)
    }

    async fn find_by_full_name(
        &self,
        last_name: &str,
        first_name: &str,
    ) -> Result<Vec<Owner>, RepositoryError> {
        let query = format!(
            "SELECT {OWNER_SELECT_COLUMNS} FROM owners \
             WHERE last_name LIKE ? AND first_name LIKE ? \
             ORDER BY last_name, first_name, id"
        );

        let rows = sqlx::query(&query)
            .bind(prefix_pattern(last_name))
            .bind(prefix_pattern(first_name))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_owner).collect()
    }

    async fn insert(&self, owner: &NewOwner) -> Result<Owner, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO owners (first_name, last_name, address, city, telephone) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.address)
        .bind(&owner.city)
        .bind(&owner.telephone)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "owner row inserted");

        self.find_by_id(id).await
    }

    async fn update(&self, owner: &Owner) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE owners SET first_name = ?, last_name = ?, address = ?, city = ?, \
             telephone = ? WHERE id = ?",
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.address)
        .bind(&owner.city)
        .bind(&owner.telephone)
        .bind(owner.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Owner with ID {}",
                owner.id
            )));
        }

        Ok(())
    }
}
