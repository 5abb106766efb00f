//! Tests for the discharge type service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockDischargeTypeRepository;
use rstest::{fixture, rstest};

#[fixture]
fn discharge_type() -> DischargeType {
    DischargeType::try_from_strings("ZZ", "aDescription").expect("valid discharge type")
}

fn make_service(
    repo: MockDischargeTypeRepository,
) -> DischargeTypeService<MockDischargeTypeRepository> {
    DischargeTypeService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn list_returns_repository_rows_in_order() {
    let rows = vec![
        DischargeType::try_from_strings("A", "Alive").expect("valid"),
        DischargeType::try_from_strings("B", "Transferred").expect("valid"),
    ];
    let expected = rows.clone();
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_list_all().times(1).return_once(move || Ok(rows));

    let listed = make_service(repo).list().await.expect("list succeeds");
    assert_eq!(listed, expected);
}

#[rstest]
#[tokio::test]
async fn create_inserts_when_code_is_free(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists()
        .withf(|code| code.as_ref() == "ZZ")
        .times(1)
        .return_once(|_| Ok(false));
    repo.expect_insert().times(1).return_once(|_| Ok(()));

    let created = make_service(repo)
        .create(discharge_type.clone())
        .await
        .expect("create succeeds");
    assert_eq!(created, discharge_type);
}

#[rstest]
#[tokio::test]
async fn create_rejects_existing_code_without_inserting(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(true));
    repo.expect_insert().times(0);

    let error = make_service(repo)
        .create(discharge_type)
        .await
        .expect_err("duplicate code");
    assert_eq!(error.code(), ErrorCode::Conflict);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "duplicate_code");
    assert_eq!(details["value"], "ZZ");
}

#[rstest]
#[tokio::test]
async fn create_maps_storage_duplicate_to_conflict(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(DischargeTypeRepositoryError::duplicate_code("ZZ")));

    let error = make_service(repo)
        .create(discharge_type)
        .await
        .expect_err("race lost");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn update_rejects_unknown_code(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(false));
    repo.expect_update().times(0);

    let error = make_service(repo)
        .update(discharge_type)
        .await
        .expect_err("unknown code");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_writes_existing_code(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(true));
    repo.expect_update()
        .withf(|row| row.description().as_ref() == "aDescription")
        .times(1)
        .return_once(|_| Ok(true));

    let updated = make_service(repo)
        .update(discharge_type.clone())
        .await
        .expect("update succeeds");
    assert_eq!(updated, discharge_type);
}

#[rstest]
#[tokio::test]
async fn update_reports_not_found_when_row_vanishes(discharge_type: DischargeType) {
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(|_| Ok(true));
    repo.expect_update().times(1).return_once(|_| Ok(false));

    let error = make_service(repo)
        .update(discharge_type)
        .await
        .expect_err("row vanished");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn delete_passes_through_repository_flag(#[case] deleted: bool) {
    let code = DischargeTypeCode::new("ZZ").expect("valid code");
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_delete()
        .withf(|code| code.as_ref() == "ZZ")
        .times(1)
        .return_once(move |_| Ok(deleted));

    let result = make_service(repo).delete(&code).await.expect("delete");
    assert_eq!(result, deleted);
}

#[rstest]
#[case(
    DischargeTypeRepositoryError::connection("refused"),
    ErrorCode::ServiceUnavailable
)]
#[case(DischargeTypeRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_codes(
    #[case] failure: DischargeTypeRepositoryError,
    #[case] expected: ErrorCode,
) {
    let code = DischargeTypeCode::new("ZZ").expect("valid code");
    let mut repo = MockDischargeTypeRepository::new();
    repo.expect_exists().times(1).return_once(move |_| Err(failure));

    let error = make_service(repo)
        .is_code_present(&code)
        .await
        .expect_err("repository failure");
    assert_eq!(error.code(), expected);
}
