use rust_decimal::Decimal;
use uuid::Uuid;

use bistro_backoffice::domain::types::OrderInput;
use bistro_backoffice::error::BackofficeError;
use bistro_backoffice::usecase::bill::OrderBillUseCase;
use bistro_backoffice::usecase::order::{
    CreateOrderUseCase, DeleteOrderUseCase, ListOrdersUseCase, UpdateOrderUseCase,
};
use bistro_domain::order::OrderStatus;
use bistro_domain::pagination::PageRequest;

use crate::helpers::{MockOrderRepo, item, thali_items};

fn table_order() -> OrderInput {
    OrderInput {
        customer_name: Some("Table 7".into()),
        items: thali_items(),
        status: None,
    }
}

#[tokio::test]
async fn should_place_new_order_with_derived_total() {
    let repo = MockOrderRepo::default();
    let order = CreateOrderUseCase { repo: repo.clone() }
        .execute(table_order())
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::New);
    // 250 + 5%
    assert_eq!(order.total_amount, Decimal::new(26250, 2));

    let bill = OrderBillUseCase { repo }.execute(order.id).await.unwrap();
    assert_eq!(bill.tax, Decimal::new(1250, 2));
    assert_eq!(bill.grand_total, order.total_amount);
}

#[tokio::test]
async fn should_keep_status_when_replace_omits_it() {
    let repo = MockOrderRepo::default();
    let order = CreateOrderUseCase { repo: repo.clone() }
        .execute(OrderInput {
            status: Some(OrderStatus::Accepted),
            ..table_order()
        })
        .await
        .unwrap();

    let updated = UpdateOrderUseCase { repo: repo.clone() }
        .execute(
            order.id,
            OrderInput {
                items: vec![item("Masala chai", 20, 3)],
                ..table_order()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Accepted);
    assert_eq!(updated.total_amount, Decimal::from(63));
}

#[tokio::test]
async fn should_reject_order_without_items() {
    let repo = MockOrderRepo::default();
    let result = CreateOrderUseCase { repo: repo.clone() }
        .execute(OrderInput {
            items: vec![],
            ..table_order()
        })
        .await;
    assert!(matches!(result, Err(BackofficeError::Validation(_))));
    assert!(repo.orders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_list_newest_first_and_delete() {
    let repo = MockOrderRepo::default();
    let create = CreateOrderUseCase { repo: repo.clone() };
    let first = create.execute(table_order()).await.unwrap();
    let second = create
        .execute(OrderInput {
            customer_name: Some("Takeaway".into()),
            ..table_order()
        })
        .await
        .unwrap();

    let orders = ListOrdersUseCase { repo: repo.clone() }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(orders[0].id, second.id);
    assert_eq!(orders[1].id, first.id);

    let delete = DeleteOrderUseCase { repo };
    delete.execute(first.id).await.unwrap();
    let result = delete.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(BackofficeError::OrderNotFound)));
}
