use rust_decimal::Decimal;

use bistro_backoffice::domain::types::SaleInput;
use bistro_backoffice::error::BackofficeError;
use bistro_backoffice::usecase::sale::{
    CreateSaleUseCase, DeleteSaleUseCase, GetSaleUseCase, ListSalesUseCase, PatchSaleUseCase,
};
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;

use crate::helpers::{MockSaleRepo, date};

fn sale_input(no: &str) -> SaleInput {
    SaleInput {
        sale_no: Some(no.to_owned()),
        bill_date: Some(date(2024, 5, 16)),
        due_date: Some(date(2024, 5, 31)),
        billing_term: Some("15 days".into()),
        total: Some(Decimal::new(124050, 2)),
        gstin: Some("27aapfu0939f1zv".into()),
        delivery_state: Some("Maharashtra".into()),
    }
}

#[tokio::test]
async fn should_require_every_field_on_create() {
    let repo = MockSaleRepo::default();
    let uc = CreateSaleUseCase { repo: repo.clone() };
    let result = uc
        .execute(SaleInput {
            gstin: None,
            ..sale_input("S-1")
        })
        .await;
    match result {
        Err(BackofficeError::Validation(msg)) => assert_eq!(msg, "gstin is required"),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(repo.sales.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_create_and_reject_duplicate_sale_no() {
    let repo = MockSaleRepo::default();
    let uc = CreateSaleUseCase { repo: repo.clone() };
    let sale = uc.execute(sale_input("S-1")).await.unwrap();
    assert_eq!(sale.gstin, "27AAPFU0939F1ZV");

    let result = uc.execute(sale_input("S-1")).await;
    assert!(matches!(result, Err(BackofficeError::DocumentNumberTaken)));
}

#[tokio::test]
async fn should_patch_only_present_fields() {
    let repo = MockSaleRepo::default();
    let sale = CreateSaleUseCase { repo: repo.clone() }
        .execute(sale_input("S-1"))
        .await
        .unwrap();

    let patched = PatchSaleUseCase { repo: repo.clone() }
        .execute(
            sale.id,
            SaleInput {
                total: Some(Decimal::from(1300)),
                ..SaleInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.total, Decimal::from(1300));
    assert_eq!(patched.sale_no, "S-1");
    assert_eq!(patched.delivery_state, "Maharashtra");

    let fetched = GetSaleUseCase { repo }.execute(sale.id).await.unwrap();
    assert_eq!(fetched, patched);
}

#[tokio::test]
async fn should_reject_empty_patch() {
    let repo = MockSaleRepo::default();
    let sale = CreateSaleUseCase { repo: repo.clone() }
        .execute(sale_input("S-1"))
        .await
        .unwrap();
    let result = PatchSaleUseCase { repo }
        .execute(sale.id, SaleInput::default())
        .await;
    assert!(matches!(result, Err(BackofficeError::Validation(_))));
}

#[tokio::test]
async fn should_list_sales_in_range_and_delete() {
    let repo = MockSaleRepo::default();
    let create = CreateSaleUseCase { repo: repo.clone() };
    let april = create
        .execute(SaleInput {
            bill_date: Some(date(2024, 4, 2)),
            due_date: Some(date(2024, 4, 30)),
            ..sale_input("S-APR")
        })
        .await
        .unwrap();
    create.execute(sale_input("S-MAY")).await.unwrap();

    let list = ListSalesUseCase { repo: repo.clone() };
    let may = DateRange {
        from: date(2024, 5, 1),
        to: date(2024, 5, 31),
    };
    let found = list.execute(Some(may), PageRequest::default()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sale_no, "S-MAY");

    DeleteSaleUseCase { repo: repo.clone() }
        .execute(april.id)
        .await
        .unwrap();
    let result = DeleteSaleUseCase { repo }.execute(april.id).await;
    assert!(matches!(result, Err(BackofficeError::SaleNotFound)));
}
