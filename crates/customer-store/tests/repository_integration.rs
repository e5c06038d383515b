//! Integration tests for the in-memory customer repository.
//!
//! These tests exercise the repository through its trait, including
//! concurrent writers racing on the same id.

use std::sync::Arc;

use customer_store::{
    CustomerRepository, CustomerRepositoryExt, EntityId, InMemoryCustomerRepository,
    RepositoryError, StoreConflict,
};
use domain::{Customer, Item, Transaction};

fn create_repo() -> Arc<dyn CustomerRepository> {
    Arc::new(InMemoryCustomerRepository::new())
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn ted_scenario() {
        let repo = create_repo();

        let customer = Customer::new("ted").unwrap();
        let id = customer.id();
        repo.add(customer).await.unwrap();

        let unknown: EntityId = "e628bc45-854e-4e7e-9316-1876ac570d90".parse().unwrap();
        let err = repo.get(unknown).await.unwrap_err();
        assert!(err.is_not_found());

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.name(), "ted");

        let err = repo.add(stored).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AddFailed(_)));
        assert_eq!(err.conflict(), Some(&StoreConflict::Duplicate(id)));
    }

    #[tokio::test]
    async fn update_never_added_fails() {
        let repo = create_repo();
        let customer = Customer::new("ghost").unwrap();
        let id = customer.id();

        let err = repo.update(customer).await.unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::UpdateFailed(StoreConflict::Missing(missing)) if missing == id
        ));
        assert!(!repo.contains(id).await.unwrap());
    }

    #[tokio::test]
    async fn get_reflects_last_successful_write() {
        let repo = create_repo();
        let customer = Customer::new("ted").unwrap();
        let id = customer.id();
        repo.add(customer.clone()).await.unwrap();

        let mut amended = customer.clone();
        amended.add_item(Arc::new(Item::new("Beer", "Healthy beverage")));
        amended.add_transaction(Transaction::new(500, id, EntityId::new()));
        repo.update(amended.clone()).await.unwrap();

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored, amended);
        assert_ne!(stored, customer);
    }

    #[tokio::test]
    async fn rehydrated_identity_is_stored_under_new_id() {
        let repo = create_repo();
        let mut customer = Customer::new("ted").unwrap();
        let original_id = customer.id();
        let restored_id = EntityId::new();
        customer.set_id(restored_id);

        repo.add(customer).await.unwrap();

        assert!(repo.contains(restored_id).await.unwrap());
        assert!(!repo.contains(original_id).await.unwrap());
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_of_same_id_admit_exactly_one() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("ted").unwrap();

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let repo = repo.clone();
                let customer = customer.clone();
                tokio::spawn(async move { repo.add(customer).await })
            })
            .collect();

        let mut successes = 0;
        let mut failures = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(RepositoryError::AddFailed(StoreConflict::Duplicate(_))) => failures += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(failures, 63);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_of_distinct_ids_all_succeed() {
        let repo = InMemoryCustomerRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let customer = Customer::new(format!("customer-{i}")).unwrap();
                    repo.add(customer).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.len().await, 32);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_see_whole_values_during_updates() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("v0").unwrap();
        let id = customer.id();
        repo.add(customer.clone()).await.unwrap();

        let writer = {
            let repo = repo.clone();
            let customer = customer.clone();
            tokio::spawn(async move {
                for version in 1..=50 {
                    let mut next = customer.clone();
                    next.restore_name(format!("v{version}"));
                    repo.update(next).await.unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    for _ in 0..50 {
                        let seen = repo.get(id).await.unwrap();
                        assert_eq!(seen.id(), id);
                        assert!(seen.name().starts_with('v'));
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }

        assert_eq!(repo.get(id).await.unwrap().name(), "v50");
    }
}
