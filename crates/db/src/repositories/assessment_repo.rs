use crate::models::assessment::Assessment;
use crate::store::CatalogStore;

/// Provides read access to the assessment catalog.
pub struct AssessmentRepo;

impl AssessmentRepo {
    pub async fn list(store: &CatalogStore) -> Vec<Assessment> {
        store.assessments.clone()
    }

    pub async fn find_by_id(store: &CatalogStore, assessment_id: &str) -> Option<Assessment> {
        store
            .assessments
            .iter()
            .find(|a| a.id == assessment_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookups() {
        let store = CatalogStore::seeded().unwrap();

        let all = AssessmentRepo::list(&store).await;
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|a| a.status == "available"));

        let found = AssessmentRepo::find_by_id(&store, "assessment2").await.unwrap();
        assert_eq!(found.questions, 25);
        assert!(AssessmentRepo::find_by_id(&store, "assessment9").await.is_none());
    }
}
