use criterion::{Criterion, criterion_group, criterion_main};
use customer_store::{CustomerRepository, InMemoryCustomerRepository};
use domain::Customer;

fn bench_add(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryCustomerRepository::new();

    c.bench_function("customer_store/add", |b| {
        b.iter(|| {
            rt.block_on(async {
                let customer = Customer::new("bench").unwrap();
                repo.add(customer).await.unwrap();
            });
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryCustomerRepository::new();
    let customer = Customer::new("bench").unwrap();
    let id = customer.id();
    rt.block_on(async { repo.add(customer).await.unwrap() });

    c.bench_function("customer_store/get", |b| {
        b.iter(|| {
            rt.block_on(async {
                repo.get(id).await.unwrap();
            });
        });
    });
}

fn bench_update(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repo = InMemoryCustomerRepository::new();
    let customer = Customer::new("bench").unwrap();
    rt.block_on(async { repo.add(customer.clone()).await.unwrap() });

    c.bench_function("customer_store/update", |b| {
        b.iter(|| {
            rt.block_on(async {
                repo.update(customer.clone()).await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_add, bench_get, bench_update);
criterion_main!(benches);
