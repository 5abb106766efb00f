//! In-memory `DischargeTypeRepository` used when no database is configured.
//!
//! Rows live in a `BTreeMap` keyed by code so listing is code-ordered, the
//! same order the Diesel adapter returns.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{DischargeTypeRepository, DischargeTypeRepositoryError};
use crate::domain::{DischargeType, DischargeTypeCode};

/// Process-local discharge type store.
///
/// # Examples
/// ```
/// use hospital_backend::domain::DischargeType;
/// use hospital_backend::outbound::memory::InMemoryDischargeTypeRepository;
///
/// let seeded = InMemoryDischargeTypeRepository::with_discharge_types([
///     DischargeType::try_from_strings("A", "Discharged home").expect("valid"),
/// ]);
/// # let _ = seeded;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDischargeTypeRepository {
    rows: RwLock<BTreeMap<DischargeTypeCode, DischargeType>>,
}

impl InMemoryDischargeTypeRepository {
    /// Seed the store; later duplicates replace earlier ones.
    pub fn with_discharge_types(rows: impl IntoIterator<Item = DischargeType>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| (row.code().clone(), row))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DischargeTypeRepositoryError {
    DischargeTypeRepositoryError::query("discharge type store lock poisoned")
}

#[async_trait]
impl DischargeTypeRepository for InMemoryDischargeTypeRepository {
    async fn list_all(&self) -> Result<Vec<DischargeType>, DischargeTypeRepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn exists(
        &self,
        code: &DischargeTypeCode,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.contains_key(code))
    }

    async fn insert(
        &self,
        discharge_type: &DischargeType,
    ) -> Result<(), DischargeTypeRepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let code = discharge_type.code();
        if rows.contains_key(code) {
            return Err(DischargeTypeRepositoryError::duplicate_code(code.as_ref()));
        }
        rows.insert(code.clone(), discharge_type.clone());
        Ok(())
    }

    async fn update(
        &self,
        discharge_type: &DischargeType,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        match rows.get_mut(discharge_type.code()) {
            Some(row) => {
                *row = discharge_type.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        code: &DischargeTypeCode,
    ) -> Result<bool, DischargeTypeRepositoryError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        Ok(rows.remove(code).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn discharge_type(code: &str, description: &str) -> DischargeType {
        DischargeType::try_from_strings(code, description).expect("valid discharge type")
    }

    fn code(raw: &str) -> DischargeTypeCode {
        DischargeTypeCode::new(raw).expect("valid code")
    }

    #[fixture]
    fn repository() -> InMemoryDischargeTypeRepository {
        InMemoryDischargeTypeRepository::with_discharge_types([
            discharge_type("B", "Transferred"),
            discharge_type("A", "Discharged home"),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_ordered_by_code(repository: InMemoryDischargeTypeRepository) {
        let rows = repository.list_all().await.expect("list");
        let codes: Vec<&str> = rows.iter().map(|row| row.code().as_ref()).collect();
        assert_eq!(codes, ["A", "B"]);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_code(repository: InMemoryDischargeTypeRepository) {
        let err = repository
            .insert(&discharge_type("A", "Other"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, DischargeTypeRepositoryError::duplicate_code("A"));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_then_exists(repository: InMemoryDischargeTypeRepository) {
        assert!(!repository.exists(&code("ZZ")).await.expect("exists"));
        repository
            .insert(&discharge_type("ZZ", "aDescription"))
            .await
            .expect("insert");
        assert!(repository.exists(&code("ZZ")).await.expect("exists"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_description(repository: InMemoryDischargeTypeRepository) {
        let updated = repository
            .update(&discharge_type("A", "Went home"))
            .await
            .expect("update");
        assert!(updated);

        let rows = repository.list_all().await.expect("list");
        assert_eq!(rows[0].description().as_ref(), "Went home");
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_missing_rows(repository: InMemoryDischargeTypeRepository) {
        assert!(
            !repository
                .update(&discharge_type("ZZ", "aDescription"))
                .await
                .expect("update")
        );
        assert!(!repository.delete(&code("ZZ")).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_row(repository: InMemoryDischargeTypeRepository) {
        assert!(repository.delete(&code("A")).await.expect("delete"));
        assert!(!repository.exists(&code("A")).await.expect("exists"));
    }
}
