use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::employee_repository::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::Employee;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// Process-local store, used with `EMPLOYEE_STORE=memory` and in tests.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        let mut table = self.table.write().await;
        let id = match employee.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id = table.last_id.checked_add(1).ok_or_else(|| {
                    AppError::DatabaseError("employee id sequence exhausted".to_string())
                })?;
                table.last_id
            }
        };
        employee.id = Some(id);
        table.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
