//! Lab repository: atomic insert, field lookup, FTS search.

use chrono::{SecondsFormat, Utc};

use lab_core::entities::{Lab, Tag};
use lab_schema::validate_lab;

use crate::error::DatabaseError;
use crate::helpers::{
    classify_write_error, fts_match_expression, get_opt_string, parse_datetime, parse_string_list,
};
use crate::service::LabService;
use crate::store::{LabField, MatchMode};

const LAB_COLUMNS: &str = "l.lab_id, l.name, l.description, l.department, l.principal_investigator,
     l.url, l.location, l.email, l.accepting_students, l.research_areas, l.created_at, l.updated_at";

fn row_to_lab(row: &libsql::Row) -> Result<Lab, DatabaseError> {
    Ok(Lab {
        lab_id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        department: row.get::<String>(3)?,
        principal_investigator: row.get::<String>(4)?,
        url: get_opt_string(row, 5)?,
        location: get_opt_string(row, 6)?,
        email: get_opt_string(row, 7)?,
        accepting_students: row.get::<i64>(8)? != 0,
        research_areas: parse_string_list(&row.get::<String>(9)?)?,
        tags: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

/// Write the lab row and its tag links on the given (transaction) connection.
async fn write_lab(
    conn: &libsql::Connection,
    lab: &Lab,
    research_areas: &str,
    stamp: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO labs (lab_id, name, description, department, principal_investigator,
                           url, location, email, accepting_students, research_areas,
                           created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        libsql::params![
            lab.lab_id,
            lab.name.as_str(),
            lab.description.as_str(),
            lab.department.as_str(),
            lab.principal_investigator.as_str(),
            lab.url.as_deref(),
            lab.location.as_deref(),
            lab.email.as_deref(),
            i64::from(lab.accepting_students),
            research_areas,
            stamp,
            stamp
        ],
    )
    .await
    .map_err(|e| classify_write_error(e, lab.lab_id))?;

    for tag in &lab.tags {
        conn.execute(
            "INSERT OR IGNORE INTO lab_tags (lab_id, tag_id) VALUES (?1, ?2)",
            libsql::params![lab.lab_id, tag.id],
        )
        .await
        .map_err(|e| classify_write_error(e, lab.lab_id))?;
    }
    Ok(())
}

impl LabService {
    /// Insert a lab and its tag links in one transaction.
    ///
    /// The record is checked against the field constraints first. Timestamps
    /// are assigned here and reflected in the returned record. On any failure
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Validation` if the record breaks a field constraint
    /// - `DatabaseError::Duplicate` if `lab.lab_id` is already stored
    /// - `DatabaseError::Constraint` if a schema constraint rejects the write
    /// - `DatabaseError::LibSql` for any other storage failure
    pub async fn insert_lab(&self, lab: &Lab) -> Result<Lab, DatabaseError> {
        validate_lab(lab)?;

        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let now = parse_datetime(&stamp)?;
        let research_areas =
            serde_json::to_string(&lab.research_areas).map_err(|e| DatabaseError::Other(e.into()))?;

        let _access = self.db().access().await?;
        let tx = self.db().conn().transaction().await?;
        if let Err(error) = write_lab(&tx, lab, &research_areas, &stamp).await {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(lab_id = lab.lab_id, %rollback_error, "rollback failed");
            }
            tracing::debug!(lab_id = lab.lab_id, %error, "lab insert rejected");
            return Err(error);
        }
        tx.commit().await?;

        tracing::debug!(lab_id = lab.lab_id, name = %lab.name, tags = lab.tags.len(), "lab inserted");
        Ok(Lab {
            created_at: now,
            updated_at: now,
            ..lab.clone()
        })
    }

    /// Find the earliest-created lab whose `field` equals `value`.
    ///
    /// For [`LabField::LabId`] a value that is not an integer matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored row is malformed.
    pub async fn find_lab_by(
        &self,
        field: LabField,
        value: &str,
        mode: MatchMode,
    ) -> Result<Option<Lab>, DatabaseError> {
        let param: libsql::Value = match field {
            LabField::LabId => match value.trim().parse::<i64>() {
                Ok(id) => id.into(),
                Err(_) => return Ok(None),
            },
            _ => value.into(),
        };
        let collate = match mode {
            MatchMode::Exact => "",
            MatchMode::IgnoreCase => " COLLATE NOCASE",
        };
        let sql = format!(
            "SELECT {LAB_COLUMNS} FROM labs l
             WHERE l.{column} = ?1{collate}
             ORDER BY l.created_at, l.lab_id
             LIMIT 1",
            column = field.column()
        );

        let _access = self.db().access().await?;
        let lab = {
            let mut rows = self.db().conn().query(&sql, [param]).await?;
            match rows.next().await? {
                Some(row) => row_to_lab(&row)?,
                None => return Ok(None),
            }
        };
        Ok(Some(self.attach_tags(lab).await?))
    }

    /// Full-text search across name, description, department and research
    /// areas, best match first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` for a blank query, or `DatabaseError`
    /// if the query fails.
    pub async fn search_labs(&self, query: &str, limit: u32) -> Result<Vec<Lab>, DatabaseError> {
        let expression = fts_match_expression(query)
            .ok_or_else(|| DatabaseError::Query("search query is empty".into()))?;
        let sql = format!(
            "SELECT {LAB_COLUMNS} FROM labs_fts
             JOIN labs l ON l.lab_id = labs_fts.rowid
             WHERE labs_fts MATCH ?1
             ORDER BY rank
             LIMIT ?2"
        );

        let _access = self.db().access().await?;
        let mut found = Vec::new();
        {
            let mut rows = self
                .db()
                .conn()
                .query(&sql, libsql::params![expression, i64::from(limit)])
                .await?;
            while let Some(row) = rows.next().await? {
                found.push(row_to_lab(&row)?);
            }
        }

        let mut labs = Vec::with_capacity(found.len());
        for lab in found {
            labs.push(self.attach_tags(lab).await?);
        }
        Ok(labs)
    }

    /// Number of stored labs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_labs(&self) -> Result<i64, DatabaseError> {
        let _access = self.db().access().await?;
        let mut rows = self.db().conn().query("SELECT count(*) FROM labs", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// Load the tag links for a lab. Callers must hold the access guard.
    async fn attach_tags(&self, mut lab: Lab) -> Result<Lab, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT t.id, t.name FROM lab_tags lt
                 JOIN tags t ON t.id = lt.tag_id
                 WHERE lt.lab_id = ?1
                 ORDER BY t.id",
                [lab.lab_id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            lab.tags.push(Tag {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
            });
        }
        Ok(lab)
    }
}
