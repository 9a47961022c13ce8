use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactChanges, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::debug;

/// Contact repository backed by a SQLite table.
///
/// Every write is a single statement and so its own atomic transaction.
/// Uniqueness of email and phone is enforced by the table itself, so a
/// racing insert surfaces as `ContactError::Conflict` rather than a duplicate.
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Connect to the database at `database_url` and bootstrap the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or schema creation fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> ContactResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// each SQLite in-memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or schema creation fails.
    pub async fn in_memory() -> ContactResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create the contacts table if it does not exist yet.
    ///
    /// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row.
    async fn initialize(&self) -> ContactResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL UNIQUE,
                phone VARCHAR(20) NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_contact(row: &SqliteRow) -> ContactResult<Contact> {
        let id: i64 = row.try_get("id")?;
        Ok(Contact {
            id: ContactId::new(id)?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        let rows = sqlx::query("SELECT id, name, email, phone FROM contacts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn get(&self, id: ContactId) -> ContactResult<Contact> {
        let row = sqlx::query("SELECT id, name, email, phone FROM contacts WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_contact(&row),
            None => Err(ContactError::NotFound(Some(id))),
        }
    }

    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: &str,
    ) -> ContactResult<Option<Contact>> {
        let row = sqlx::query(
            r"
            SELECT id, name, email, phone
            FROM contacts
            WHERE email = ? OR phone = ?
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(email)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<Contact> {
        let result = sqlx::query("INSERT INTO contacts (name, email, phone) VALUES (?, ?, ?)")
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .execute(&self.pool)
            .await?;

        let id = ContactId::new(result.last_insert_rowid())?;
        debug!(contact_id = %id, "Inserted contact");

        Ok(Contact {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        })
    }

    async fn update(&self, id: ContactId, changes: ContactChanges) -> ContactResult<Contact> {
        if changes.is_empty() {
            return self.get(id).await;
        }

        // One statement, so SQLite takes the write lock up front and
        // concurrent updates queue on the busy timeout instead of deadlocking.
        let row = sqlx::query(
            r"
            UPDATE contacts
            SET name = COALESCE(?, name),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone)
            WHERE id = ?
            RETURNING id, name, email, phone
            ",
        )
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                debug!(contact_id = %id, "Updated contact");
                Self::row_to_contact(&row)
            }
            None => Err(ContactError::NotFound(Some(id))),
        }
    }

    async fn delete(&self, id: ContactId) -> ContactResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(Some(id)));
        }

        debug!(contact_id = %id, "Deleted contact");
        Ok(())
    }
}
