use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewSchool, School};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("school store unavailable: {0}")]
    Unavailable(String),
}

/// Narrow persistence seam for school records.
///
/// Handlers only ever create or read the full table, so the trait stays at
/// exactly those two operations and the ranker remains testable against a
/// fake.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    async fn create(&self, new_school: NewSchool) -> Result<School, StoreError>;
    async fn list_all(&self) -> Result<Vec<School>, StoreError>;
}

/// In-process store backed by an insertion-ordered vector.
///
/// Order matters: listing must reproduce creation order so that equidistant
/// schools rank deterministically.
#[derive(Debug, Default)]
pub struct InMemorySchoolStore {
    schools: RwLock<Vec<School>>,
}

impl InMemorySchoolStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchoolStore for InMemorySchoolStore {
    async fn create(&self, new_school: NewSchool) -> Result<School, StoreError> {
        let school = School {
            id: Uuid::new_v4(),
            name: new_school.name,
            address: new_school.address,
            latitude: new_school.latitude,
            longitude: new_school.longitude,
            created_at: Utc::now(),
        };

        let mut schools = self.schools.write().await;
        schools.push(school.clone());

        Ok(school)
    }

    async fn list_all(&self) -> Result<Vec<School>, StoreError> {
        let schools = self.schools.read().await;
        Ok(schools.clone())
    }
}
