use bistro_backoffice::domain::types::PartyInput;
use bistro_backoffice::error::BackofficeError;
use bistro_backoffice::usecase::party::{
    CreatePartyUseCase, DeletePartyUseCase, GetPartyUseCase, ListPartiesUseCase,
    UpdatePartyUseCase,
};
use bistro_domain::pagination::PageRequest;
use bistro_domain::party::{BillType, FoodCategory, PartyKind};
use uuid::Uuid;

use crate::helpers::MockPartyRepo;

fn supplier(name: &str) -> PartyInput {
    PartyInput {
        name: Some(name.to_owned()),
        kind: PartyKind::Supplier,
        phone_number: Some("9812345670".into()),
        category: FoodCategory::Veg,
        bill_type: BillType::Regular,
        ..PartyInput::default()
    }
}

#[tokio::test]
async fn should_not_persist_party_without_name() {
    let repo = MockPartyRepo::default();
    let handle = repo.parties.clone();
    let uc = CreatePartyUseCase { repo };

    let result = uc.execute(PartyInput::default()).await;
    assert!(
        matches!(result, Err(BackofficeError::Validation(_))),
        "expected Validation, got {result:?}"
    );
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_create_and_fetch_party() {
    let repo = MockPartyRepo::default();
    let created = CreatePartyUseCase { repo: repo.clone() }
        .execute(supplier("Annapurna Dairy"))
        .await
        .unwrap();
    assert_eq!(created.kind, PartyKind::Supplier);
    assert!(created.whatsapp_alerts);

    let fetched = GetPartyUseCase { repo }.execute(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_filter_list_by_kind() {
    let repo = MockPartyRepo::default();
    let create = CreatePartyUseCase { repo: repo.clone() };
    create.execute(supplier("Annapurna Dairy")).await.unwrap();
    create
        .execute(PartyInput {
            name: Some("Rohit Verma".into()),
            ..PartyInput::default()
        })
        .await
        .unwrap();

    let list = ListPartiesUseCase { repo };
    let suppliers = list
        .execute(Some(PartyKind::Supplier), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0].name, "Annapurna Dairy");

    let all = list.execute(None, PageRequest::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Rohit Verma", "newest first");
}

#[tokio::test]
async fn should_replace_party_and_keep_created_at() {
    let repo = MockPartyRepo::default();
    let created = CreatePartyUseCase { repo: repo.clone() }
        .execute(supplier("Annapurna Dairy"))
        .await
        .unwrap();

    let updated = UpdatePartyUseCase { repo: repo.clone() }
        .execute(
            created.id,
            PartyInput {
                name: Some("Annapurna Dairy Pvt Ltd".into()),
                ..PartyInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Annapurna Dairy Pvt Ltd");
    assert_eq!(updated.kind, PartyKind::Customer);
    assert!(updated.phone_number.is_none());
    assert_eq!(updated.created_at, created.created_at);

    let stored = repo.parties.lock().unwrap()[0].clone();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn should_report_missing_party_on_update_and_delete() {
    let repo = MockPartyRepo::default();
    let result = UpdatePartyUseCase { repo: repo.clone() }
        .execute(Uuid::new_v4(), supplier("Ghost"))
        .await;
    assert!(matches!(result, Err(BackofficeError::PartyNotFound)));

    let result = DeletePartyUseCase { repo }.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(BackofficeError::PartyNotFound)));
}

#[tokio::test]
async fn should_delete_party() {
    let repo = MockPartyRepo::default();
    let created = CreatePartyUseCase { repo: repo.clone() }
        .execute(supplier("Annapurna Dairy"))
        .await
        .unwrap();
    DeletePartyUseCase { repo: repo.clone() }
        .execute(created.id)
        .await
        .unwrap();
    assert!(repo.parties.lock().unwrap().is_empty());
}
