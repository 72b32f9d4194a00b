use rust_decimal::Decimal;
use uuid::Uuid;

use bistro_backoffice::domain::types::{DocumentInput, PartySnapshot};
use bistro_backoffice::error::BackofficeError;
use bistro_backoffice::usecase::bill::DocumentBillUseCase;
use bistro_backoffice::usecase::document::{
    BulkDeleteDocumentsUseCase, CreateDocumentUseCase, DeleteDocumentUseCase, GetDocumentUseCase,
    ListDocumentsUseCase, UpdateDocumentUseCase,
};
use bistro_domain::billing::DocumentKind;
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;

use crate::helpers::{MockDocumentRepo, date, item, thali_items};

fn purchase_input() -> DocumentInput {
    DocumentInput {
        party: Some(PartySnapshot {
            id: Some(Uuid::new_v4()),
            name: "Annapurna Dairy".into(),
            ..PartySnapshot::default()
        }),
        items: thali_items(),
        bill_date: Some(date(2024, 5, 16)),
        due_date: Some(date(2024, 6, 15)),
        discount_percent: Some(Decimal::from(10)),
        ..DocumentInput::default()
    }
}

fn create(repo: &MockDocumentRepo, kind: DocumentKind) -> CreateDocumentUseCase<MockDocumentRepo> {
    CreateDocumentUseCase {
        repo: repo.clone(),
        kind,
    }
}

#[tokio::test]
async fn should_store_purchase_as_billed() {
    let repo = MockDocumentRepo::default();
    let doc = create(&repo, DocumentKind::Purchase)
        .execute(Some("PUR-001".into()), purchase_input())
        .await
        .unwrap();
    assert_eq!(doc.subtotal, Decimal::from(250));
    assert_eq!(doc.discount_amount, Decimal::from(25));
    assert_eq!(doc.total_amount, Decimal::from(225));
    assert_eq!(repo.documents.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_ignore_client_totals_and_tax_estimates() {
    let repo = MockDocumentRepo::default();
    let doc = create(&repo, DocumentKind::Estimate)
        .execute(
            Some("EST-001".into()),
            DocumentInput {
                discount_amount: Some(Decimal::from(999)),
                ..purchase_input()
            },
        )
        .await
        .unwrap();
    assert_eq!(doc.discount_amount, Decimal::from(25), "percent wins");
    assert_eq!(doc.tax, Decimal::new(4050, 2));
    assert_eq!(doc.total_amount, Decimal::new(26550, 2));

    let bill = DocumentBillUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Estimate,
    }
    .execute(doc.id)
    .await
    .unwrap();
    assert_eq!(bill.grand_total, doc.total_amount);
    assert_eq!(bill.taxable_amount, Decimal::from(225));
}

#[tokio::test]
async fn should_reject_duplicate_number_per_kind() {
    let repo = MockDocumentRepo::default();
    create(&repo, DocumentKind::Estimate)
        .execute(Some("DOC-7".into()), purchase_input())
        .await
        .unwrap();

    let result = create(&repo, DocumentKind::Estimate)
        .execute(Some("DOC-7".into()), purchase_input())
        .await;
    assert!(matches!(result, Err(BackofficeError::DocumentNumberTaken)));

    // Same number on a different kind is fine.
    create(&repo, DocumentKind::Purchase)
        .execute(Some("DOC-7".into()), purchase_input())
        .await
        .unwrap();
}

#[tokio::test]
async fn should_keep_kinds_apart() {
    let repo = MockDocumentRepo::default();
    let purchase = create(&repo, DocumentKind::Purchase)
        .execute(Some("PUR-1".into()), purchase_input())
        .await
        .unwrap();

    let result = GetDocumentUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Estimate,
    }
    .execute(purchase.id)
    .await;
    assert!(matches!(result, Err(BackofficeError::EstimateNotFound)));
}

#[tokio::test]
async fn should_filter_list_by_bill_date() {
    let repo = MockDocumentRepo::default();
    for (no, day) in [("EST-1", 2), ("EST-2", 10), ("EST-3", 20)] {
        create(&repo, DocumentKind::Estimate)
            .execute(
                Some(no.into()),
                DocumentInput {
                    bill_date: Some(date(2024, 5, day)),
                    ..purchase_input()
                },
            )
            .await
            .unwrap();
    }

    let list = ListDocumentsUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Estimate,
    };
    let range = DateRange {
        from: date(2024, 5, 1),
        to: date(2024, 5, 10),
    };
    let found = list.execute(Some(range), PageRequest::default()).await.unwrap();
    let numbers: Vec<_> = found.iter().map(|d| d.number.as_str()).collect();
    assert_eq!(numbers, ["EST-2", "EST-1"]);

    let paged = list
        .execute(None, PageRequest { per_page: 1, page: 2 })
        .await
        .unwrap();
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].number, "EST-2");
}

#[tokio::test]
async fn should_recompute_totals_on_update() {
    let repo = MockDocumentRepo::default();
    let doc = create(&repo, DocumentKind::Purchase)
        .execute(Some("PUR-9".into()), purchase_input())
        .await
        .unwrap();

    let updated = UpdateDocumentUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Purchase,
    }
    .execute(
        doc.id,
        Some("PUR-9".into()),
        DocumentInput {
            items: vec![item("Paneer", 300, 1)],
            discount_percent: None,
            ..purchase_input()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.total_amount, Decimal::from(300));
    assert_eq!(updated.discount_amount, Decimal::ZERO);
    assert_eq!(updated.created_at, doc.created_at);
}

#[tokio::test]
async fn should_delete_one_and_bulk_delete_estimates() {
    let repo = MockDocumentRepo::default();
    let mut ids = Vec::new();
    for no in ["EST-1", "EST-2", "EST-3"] {
        let doc = create(&repo, DocumentKind::Estimate)
            .execute(Some(no.into()), purchase_input())
            .await
            .unwrap();
        ids.push(doc.id);
    }

    DeleteDocumentUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Estimate,
    }
    .execute(ids[0])
    .await
    .unwrap();

    let bulk = BulkDeleteDocumentsUseCase {
        repo: repo.clone(),
        kind: DocumentKind::Estimate,
    };
    let deleted = bulk
        .execute(&[ids[0], ids[1], ids[2], Uuid::new_v4()])
        .await
        .unwrap();
    assert_eq!(deleted, 2);
    assert!(repo.documents.lock().unwrap().is_empty());

    let result = bulk.execute(&[]).await;
    assert!(matches!(result, Err(BackofficeError::Validation(_))));
}
