use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::Employee;

/// Persistence contract for [`Employee`] rows keyed by `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts when `employee.id` is `None`, otherwise inserts or replaces the row with that id.
    async fn save(&self, employee: Employee) -> Result<Employee, AppError>;
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    /// Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let saved = match employee.id {
            None => {
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employee (name, email, job_title, image_url, employee_code) \
                     VALUES ($1, $2, $3, $4, $5) \
                     RETURNING id, name, email, job_title, image_url, employee_code",
                )
                .bind(&employee.name)
                .bind(&employee.email)
                .bind(&employee.job_title)
                .bind(&employee.image_url)
                .bind(&employee.employee_code)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let mut tx = self.pool.begin().await?;

                let saved = sqlx::query_as::<_, Employee>(
                    "INSERT INTO employee (id, name, email, job_title, image_url, employee_code) \
                     VALUES ($1, $2, $3, $4, $5, $6) \
                     ON CONFLICT (id) DO UPDATE SET \
                     name = EXCLUDED.name, email = EXCLUDED.email, job_title = EXCLUDED.job_title, \
                     image_url = EXCLUDED.image_url, employee_code = EXCLUDED.employee_code \
                     RETURNING id, name, email, job_title, image_url, employee_code",
                )
                .bind(id)
                .bind(&employee.name)
                .bind(&employee.email)
                .bind(&employee.job_title)
                .bind(&employee.image_url)
                .bind(&employee.employee_code)
                .fetch_one(&mut *tx)
                .await?;

                // Keep BIGSERIAL ahead of explicitly supplied ids. `is_called = true`
                // so the next generated id is strictly greater, even on a fresh sequence.
                sqlx::query(
                    "SELECT setval('employee_id_seq', \
                     GREATEST($1, (SELECT last_value FROM employee_id_seq)), true)",
                )
                .bind(id)
                .execute(&mut *tx)
                .await?;

                tx.commit().await?;
                saved
            }
        };

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, job_title, image_url, employee_code FROM employee ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, job_title, image_url, employee_code FROM employee WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
