//! Shared test utilities for lab-db tests.

pub(crate) mod helpers {
    use chrono::Utc;
    use lab_core::entities::{Lab, Tag};
    use lab_core::vocabulary::TagName;

    use crate::service::LabService;

    /// Create an in-memory `LabService`.
    pub async fn test_service() -> LabService {
        LabService::new_local(":memory:").await.unwrap()
    }

    /// A valid lab tagged Biology, Neuroscience and Research.
    pub fn sample_lab(lab_id: i64, name: &str) -> Lab {
        Lab {
            lab_id,
            name: name.into(),
            description: "Exploring the neural underpinnings of human cognition and memory.".into(),
            department: "Psychology and Brain Sciences".into(),
            principal_investigator: "Dr. Eleanor Vance".into(),
            url: Some("https://cnl.university.edu".into()),
            location: Some("Wexler Building, Room 303".into()),
            email: Some("evance-lab@university.edu".into()),
            accepting_students: true,
            research_areas: vec!["fMRI".into(), "Memory Consolidation".into()],
            tags: vec![
                Tag::from(TagName::Biology),
                Tag::from(TagName::Neuroscience),
                Tag::from(TagName::Research),
            ],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
