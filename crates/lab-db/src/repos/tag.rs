//! Tag repository: the seeded, read-only vocabulary.

use lab_core::entities::Tag;

use crate::error::DatabaseError;
use crate::service::LabService;

impl LabService {
    /// All tags, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        let _access = self.db().access().await?;
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM tags ORDER BY id", ())
            .await?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(Tag {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
            });
        }
        Ok(tags)
    }

    /// Look up a tag by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>, DatabaseError> {
        let _access = self.db().access().await?;
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM tags WHERE name = ?1", [name])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Tag {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
            })),
            None => Ok(None),
        }
    }
}
