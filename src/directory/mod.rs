//! Employee directory service.
//!
//! Pure transformation layer between the HTTP handlers and the
//! upstream client: exact-match name filtering, salary ranking, and
//! pass-through list/create/delete. Holds no state beyond the injected
//! client handle.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::upstream::{Employee, EmployeeApi, UpstreamResult};

/// Directory of employee records backed by the upstream API.
pub struct EmployeeDirectory {
    api: Arc<dyn EmployeeApi>,
}

impl EmployeeDirectory {
    /// Create a directory over the given upstream client.
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self { api }
    }

    /// All employees, in upstream order.
    pub async fn list_all(&self) -> UpstreamResult<Vec<Employee>> {
        self.api.list_all().await
    }

    /// Employees whose name is an exact (case-sensitive) match.
    pub async fn search_by_name(&self, name: &str) -> UpstreamResult<Vec<Employee>> {
        let mut employees = self.api.list_all().await?;
        employees.retain(|employee| employee.employee_name == name);
        Ok(employees)
    }

    /// A single employee by id.
    pub async fn fetch_by_id(&self, id: &str) -> UpstreamResult<Employee> {
        self.api.fetch_by_id(id).await
    }

    /// The `n` highest-earning employees, sorted descending by salary.
    ///
    /// The sort is stable, so employees with equal salaries keep their
    /// upstream order. Returns min(n, count) records.
    pub async fn top_earners(&self, n: usize) -> UpstreamResult<Vec<Employee>> {
        let mut employees = self.api.list_all().await?;
        employees.sort_by_key(|employee| Reverse(employee.employee_salary));
        employees.truncate(n);
        Ok(employees)
    }

    /// The highest salary across all employees, or 0 when there are none.
    pub async fn highest_salary(&self) -> UpstreamResult<u32> {
        let top = self.top_earners(1).await?;
        Ok(top.first().map(|employee| employee.employee_salary).unwrap_or(0))
    }

    /// Submit a new employee record.
    pub async fn create(&self, employee: &Employee) -> UpstreamResult<Employee> {
        self.api.create(employee).await
    }

    /// Delete an employee by id.
    pub async fn delete_by_id(&self, id: &str) -> UpstreamResult<()> {
        self.api.delete_by_id(id).await
    }
}
