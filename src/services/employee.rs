use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::db::employee_repository::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::Employee;

/// Employee lifecycle rules on top of an injected [`EmployeeRepository`].
///
/// Holds no state of its own, so one instance is shared by every worker.
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new employee under a freshly generated `employee_code`.
    /// Whatever code the caller sent is discarded.
    pub async fn add_employee(&self, mut employee: Employee) -> Result<Employee, AppError> {
        employee.employee_code = Uuid::new_v4().to_string();
        let saved = self.repository.save(employee).await?;
        info!("Added employee {:?} with code {}", saved.id, saved.employee_code);
        Ok(saved)
    }

    pub async fn find_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.find_all().await
    }

    /// Saves the record as given. The caller must carry over `employee_code`.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        let saved = self.repository.save(employee).await?;
        info!("Updated employee {:?}", saved.id);
        Ok(saved)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        info!("Deleted employee {}", id);
        Ok(())
    }

    pub async fn find_employee_by_id(&self, id: i64) -> Result<Employee, AppError> {
        debug!("Looking up employee {}", id);
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Employee {} not found", id);
            AppError::employee_not_found(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::employee_repository::MockEmployeeRepository;
    use crate::db::memory::InMemoryEmployeeRepository;
    use mockall::predicate::eq;
    use std::collections::HashSet;

    fn john() -> Employee {
        Employee {
            id: Some(1),
            name: "John Smith".into(),
            email: "john.smith@company.com".into(),
            job_title: "Team Lead".into(),
            ..Default::default()
        }
    }

    fn sam() -> Employee {
        Employee {
            id: Some(2),
            name: "Sam Smith".into(),
            email: "sam.smith@company.com".into(),
            job_title: "QA Engineer".into(),
            ..Default::default()
        }
    }

    fn service_with(repo: MockEmployeeRepository) -> EmployeeService {
        EmployeeService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn add_employee_assigns_code_and_saves_once() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save()
            .times(1)
            .withf(|e| e.name == "John Smith" && !e.employee_code.is_empty())
            .returning(|e| Ok(e));

        let saved = service_with(repo).add_employee(john()).await.unwrap();

        assert!(!saved.employee_code.is_empty());
        assert!(Uuid::parse_str(&saved.employee_code).is_ok());
    }

    #[tokio::test]
    async fn add_employee_overwrites_caller_code() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save().returning(|e| Ok(e));

        let mut employee = john();
        employee.employee_code = "Test".into();
        let saved = service_with(repo).add_employee(employee).await.unwrap();

        assert_ne!(saved.employee_code, "Test");
    }

    #[tokio::test]
    async fn add_employee_codes_are_unique() {
        let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
        let mut codes = HashSet::new();
        for _ in 0..1000 {
            let mut employee = john();
            employee.id = None;
            let saved = service.add_employee(employee).await.unwrap();
            assert!(codes.insert(saved.employee_code));
        }
    }

    #[tokio::test]
    async fn find_all_employees_returns_list() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![john(), sam()]));

        let employees = service_with(repo).find_all_employees().await.unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "John Smith");
        assert_eq!(employees[1].name, "Sam Smith");
    }

    #[tokio::test]
    async fn find_all_employees_empty_is_not_an_error() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));

        let employees = service_with(repo).find_all_employees().await.unwrap();

        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn update_employee_keeps_supplied_fields() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save().times(1).returning(|e| Ok(e));

        let mut employee = john();
        employee.employee_code = "Test".into();
        employee.email = "updatedEmail@gmail.com".into();
        employee.name = "Updated Name".into();
        let updated = service_with(repo).update_employee(employee).await.unwrap();

        assert_eq!(updated.email, "updatedEmail@gmail.com");
        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.job_title, "Team Lead");
        assert_eq!(updated.employee_code, "Test");
    }

    #[tokio::test]
    async fn find_employee_by_id_returns_stored_record() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(john())));

        let found = service_with(repo).find_employee_by_id(1).await.unwrap();

        assert_eq!(found, john());
    }

    #[tokio::test]
    async fn find_employee_by_id_missing_is_not_found() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().with(eq(2)).returning(|_| Ok(None));

        let err = service_with(repo).find_employee_by_id(2).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "User by id 2 was not found.");
    }

    #[tokio::test]
    async fn storage_failures_propagate_unchanged() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::DatabaseError("connection refused".into())));

        let err = service_with(repo).find_employee_by_id(1).await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn delete_employee_delegates_once() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        service_with(repo).delete_employee(1).await.unwrap();
    }
}
