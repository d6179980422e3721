use chrono::Utc;
use common::{HealthState, PageRequest};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{InMemoryOrderService, Money, OrderItem, OrderService, OrderStore, UserId};

fn items() -> Vec<OrderItem> {
    vec![
        OrderItem::new("prod-001", 1, Money::from_cents(129999)),
        OrderItem::new("prod-002", 2, Money::from_cents(2999)),
    ]
}

fn bench_store_create(c: &mut Criterion) {
    let mut store = OrderStore::new();
    let now = Utc::now();

    c.bench_function("domain/store_create", |b| {
        b.iter(|| store.create(UserId::new("user-001"), items(), now));
    });
}

fn bench_service_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = InMemoryOrderService::seeded(HealthState::default());

    c.bench_function("domain/service_create_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.create_order("user-001", items()).await.unwrap();
            });
        });
    });
}

fn bench_list_by_user(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = InMemoryOrderService::seeded(HealthState::default());

    // 1000 orders spread over 10 users
    rt.block_on(async {
        for i in 0..1000 {
            let user = format!("user-{:03}", i % 10);
            service.create_order(&user, items()).await.unwrap();
        }
    });

    c.bench_function("domain/list_orders_by_user_page_20", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .list_orders_by_user("user-005", PageRequest::new(20, 40))
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_store_create,
    bench_service_create,
    bench_list_by_user,
);
criterion_main!(benches);
