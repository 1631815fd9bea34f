//! API client for the employee REST service

mod error;

pub use error::{ApiError, ApiResult};

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::models::Employee;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

const COLLECTION: &str = "employees";

/// The four operations the manager needs from the server.
///
/// Calls block; the GUI runs them on the background executor.
pub trait EmployeeApi {
    fn list(&self) -> ApiResult<Vec<Employee>>;
    fn create(&self, employee: &Employee) -> ApiResult<()>;
    fn update(&self, id: i64, employee: &Employee) -> ApiResult<()>;
    fn delete(&self, id: i64) -> ApiResult<()>;
}

/// Blocking HTTP client for the employee API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Requests never time out; a hung call keeps the form in its loading state.
    pub fn new(base_url: Option<String>) -> ApiResult<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let client = Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, COLLECTION)
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, COLLECTION, id)
    }

    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(ApiError::status(status.as_u16(), body))
    }
}

impl EmployeeApi for ApiClient {
    fn list(&self) -> ApiResult<Vec<Employee>> {
        let url = self.collection_url();
        debug!(%url, "GET employees");
        let response = Self::check(self.client.get(&url).send()?)?;
        let bytes = response.bytes()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn create(&self, employee: &Employee) -> ApiResult<()> {
        let url = self.collection_url();
        debug!(%url, name = %employee.name, "POST employee");
        Self::check(self.client.post(&url).json(employee).send()?)?;
        Ok(())
    }

    fn update(&self, id: i64, employee: &Employee) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!(%url, name = %employee.name, "PUT employee");
        Self::check(self.client.put(&url).json(employee).send()?)?;
        Ok(())
    }

    fn delete(&self, id: i64) -> ApiResult<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE employee");
        Self::check(self.client.delete(&url).send()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let client = ApiClient::new(None).unwrap();
        assert_eq!(client.get_base_url(), DEFAULT_API_URL);
        assert_eq!(
            client.collection_url(),
            "http://localhost:8080/api/v1/employees"
        );
    }

    #[test]
    fn item_url_trims_trailing_slash() {
        let client = ApiClient::new(Some("http://host:9000/api/v1/".to_string())).unwrap();
        assert_eq!(client.item_url(42), "http://host:9000/api/v1/employees/42");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = ApiError::status(503, "down");
        assert_eq!(err.to_string(), "server returned 503: down");
    }
}
