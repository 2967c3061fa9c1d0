use tracing::debug;

use crate::backend::CustomerBackend;
use crate::error::AppResult;
use crate::models::{Customer, CustomerDto, CustomerInsertRequest, CustomerUpdateRequest, Page};
use crate::parser::PageRequest;

/// Returns one page of customers in wire shape.
pub async fn list_customers<R>(repo: &R, request: &PageRequest) -> AppResult<Page<CustomerDto>>
where
    R: CustomerBackend + ?Sized,
{
    let (customers, total) = repo.find_all_customers(request).await?;
    Ok(Page::new(customers, request, total).map(|customer| customer.to_dto()))
}

/// Fetches a customer by id. A missing row is `Ok(None)`.
pub async fn get_customer<R>(repo: &R, id: i64) -> AppResult<Option<Customer>>
where
    R: CustomerBackend + ?Sized,
{
    repo.find_customer_by_id(id).await
}

/// Persists a new customer and returns it with its assigned id.
pub async fn create_customer<R>(repo: &R, request: CustomerInsertRequest) -> AppResult<Customer>
where
    R: CustomerBackend + ?Sized,
{
    let customer = Customer::new(request.name, request.tel);
    let saved = repo.save_customer(&customer).await?;
    debug!("Created customer {:?}", saved.id);
    Ok(saved)
}

/// Overwrites both fields of `customer` and persists it.
pub async fn update_customer<R>(
    repo: &R,
    request: CustomerUpdateRequest,
    mut customer: Customer,
) -> AppResult<Customer>
where
    R: CustomerBackend + ?Sized,
{
    customer.tel = request.tel;
    customer.name = request.name;
    repo.save_customer(&customer).await
}

/// Removes the given customer.
pub async fn delete_customer<R>(repo: &R, customer: &Customer) -> AppResult<()>
where
    R: CustomerBackend + ?Sized,
{
    let removed = repo.delete_customer(customer).await?;
    debug!("Deleted customer {:?} (row removed: {})", customer.id, removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockCustomerStore;
    use crate::error::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_customers_builds_page() {
        let mut repo = MockCustomerStore::new();
        repo.expect_find_all_customers()
            .withf(|request| request.page == 1 && request.size == 2)
            .times(1)
            .returning(|_| {
                Ok((
                    vec![
                        Customer::with_id(3, "이영희", "01011112222"),
                        Customer::with_id(4, "박진희", "01022223333"),
                    ],
                    5,
                ))
            });

        let page = list_customers(&repo, &PageRequest::new(1, 2, vec![]))
            .await
            .unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].id, Some(3));
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);
    }

    #[tokio::test]
    async fn test_get_customer_absent_is_none() {
        let mut repo = MockCustomerStore::new();
        repo.expect_find_customer_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        assert_eq!(get_customer(&repo, 42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_customer_saves_without_id() {
        let mut repo = MockCustomerStore::new();
        repo.expect_save_customer()
            .withf(|customer| customer.id.is_none() && customer.name == "박진희")
            .times(1)
            .returning(|customer| Ok(Customer::with_id(7, customer.name.clone(), customer.tel.clone())));

        let created = create_customer(&repo, CustomerInsertRequest::new("박진희", "01022223333"))
            .await
            .unwrap();

        assert_eq!(created, Customer::with_id(7, "박진희", "01022223333"));
    }

    #[tokio::test]
    async fn test_update_customer_overwrites_fields() {
        let mut repo = MockCustomerStore::new();
        repo.expect_save_customer()
            .with(eq(Customer::with_id(7, "김철수", "01099998888")))
            .times(1)
            .returning(|customer| Ok(customer.clone()));

        let updated = update_customer(
            &repo,
            CustomerUpdateRequest::new("김철수", "01099998888"),
            Customer::with_id(7, "박진희", "01022223333"),
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "김철수");
        assert_eq!(updated.tel, "01099998888");
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repo = MockCustomerStore::new();
        repo.expect_delete_customer()
            .returning(|_| Err(AppError::Database("connection reset".into())));

        let result = delete_customer(&repo, &Customer::with_id(1, "박진희", "01022223333")).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
