//! The find-or-create pipeline.
//!
//! `create_lab` runs VALIDATE, CLASSIFY, ALLOCATE, PERSIST in order. Only an
//! identifier collision reported by the store sends the pipeline back to
//! ALLOCATE, at most `max_attempts` times in total.

use chrono::Utc;
use lab_config::LabConfig;
use lab_core::entities::{Lab, Tag};
use lab_core::fields::LabFields;
use lab_db::error::DatabaseError;
use lab_db::{LabStore, MatchMode};

use crate::allocator::{IdAllocator, RandomAllocator};
use crate::classifier::{KeywordClassifier, LabText, TagClassifier};
use crate::error::{InvalidRange, SynthesisError};
use crate::lookup::Lookup;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Outcome of [`LabResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A lab with this name was already stored.
    Found(Lab),
    /// No lab matched, so one was synthesized and persisted.
    Created(Lab),
}

impl Resolution {
    #[must_use]
    pub const fn lab(&self) -> &Lab {
        match self {
            Self::Found(lab) | Self::Created(lab) => lab,
        }
    }

    #[must_use]
    pub fn into_lab(self) -> Lab {
        match self {
            Self::Found(lab) | Self::Created(lab) => lab,
        }
    }

    #[must_use]
    pub const fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Lookup plus synthesis over a store, an id allocator and a tag classifier.
pub struct LabResolver<S, A, C> {
    store: S,
    allocator: A,
    classifier: C,
    max_attempts: u32,
    match_mode: MatchMode,
}

impl<S: LabStore> LabResolver<S, RandomAllocator, KeywordClassifier> {
    /// Build the standard resolver from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if the configured id range is unusable.
    pub fn from_config(store: S, config: &LabConfig) -> Result<Self, InvalidRange> {
        let allocator = RandomAllocator::from_config(&config.allocator)?;
        let match_mode = if config.lookup.case_sensitive {
            MatchMode::Exact
        } else {
            MatchMode::IgnoreCase
        };
        Ok(Self::new(store, allocator, KeywordClassifier::new())
            .max_attempts(config.allocator.max_attempts)
            .match_mode(match_mode))
    }
}

impl<S, A, C> LabResolver<S, A, C>
where
    S: LabStore,
    A: IdAllocator,
    C: TagClassifier,
{
    /// Five allocation attempts, case-sensitive lookup.
    #[must_use]
    pub const fn new(store: S, allocator: A, classifier: C) -> Self {
        Self {
            store,
            allocator,
            classifier,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            match_mode: MatchMode::Exact,
        }
    }

    /// Bound on PERSIST attempts per `create_lab` call. Clamped to at least 1.
    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub const fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn lookup(&self) -> Lookup<'_, S> {
        Lookup::new(&self.store, self.match_mode)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be read.
    pub async fn find_lab(&self, name: &str) -> Result<Option<Lab>, DatabaseError> {
        self.lookup().find_by_name(name).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` for a blank query or if the store cannot be read.
    pub async fn search_labs(&self, query: &str, limit: u32) -> Result<Vec<Lab>, DatabaseError> {
        self.store.search_labs(query, limit).await
    }

    /// Validate, classify, allocate and persist a new lab.
    ///
    /// # Errors
    ///
    /// - `SynthesisError::Validation` if the fields are malformed
    /// - `SynthesisError::Provider` if the classifier fails
    /// - `SynthesisError::AllocationExhausted` if every allocated id collided
    /// - `SynthesisError::Store` for any other persistence failure
    pub async fn create_lab(&self, fields: LabFields) -> Result<Lab, SynthesisError> {
        let validated = lab_schema::validate(&fields)?;
        tracing::debug!(name = %validated.name, "fields validated");

        let tag_names = self
            .classifier
            .classify(&LabText::from(&validated))
            .await?;
        let tags: Vec<Tag> = tag_names.into_iter().map(Tag::from).collect();
        tracing::debug!(name = %validated.name, tags = tags.len(), "tags classified");

        for attempt in 1..=self.max_attempts {
            let lab_id = self.allocator.allocate();
            let candidate = validated.clone().into_lab(lab_id, tags.clone(), Utc::now());
            tracing::debug!(lab_id, attempt, "persisting lab");

            match self.store.insert_lab(&candidate).await {
                Ok(lab) => {
                    tracing::info!(lab_id = lab.lab_id, name = %lab.name, attempt, "lab created");
                    return Ok(lab);
                }
                Err(DatabaseError::Duplicate { lab_id }) => {
                    tracing::debug!(lab_id, attempt, "lab id taken, reallocating");
                }
                Err(error) => {
                    tracing::warn!(lab_id, attempt, %error, "lab insert failed");
                    return Err(SynthesisError::Store(error));
                }
            }
        }

        tracing::warn!(
            name = %validated.name,
            attempts = self.max_attempts,
            "lab id allocation exhausted"
        );
        Err(SynthesisError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Return the stored lab named `fields.name`, or create it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_lab`]; a read failure during lookup is
    /// `SynthesisError::Store`.
    pub async fn resolve(&self, fields: LabFields) -> Result<Resolution, SynthesisError> {
        if let Some(name) = fields.name.as_deref() {
            if let Some(lab) = self.find_lab(name).await? {
                return Ok(Resolution::Found(lab));
            }
        }
        self.create_lab(fields).await.map(Resolution::Created)
    }
}
