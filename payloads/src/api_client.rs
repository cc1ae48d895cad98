use crate::{
    CompanyId, EmployeeId, ExpenseReportId, ProjectId, TaskId, requests,
    responses,
};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::{Arc, RwLock};

pub use responses::SessionTokens as Session;

/// Shared, injectable holder for the current session credentials.
///
/// The client reads the access token on every call and rewrites the pair
/// when a refresh succeeds. The application constructs one store at startup
/// (and may persist it); tests construct their own directly, so the client
/// never reaches into ambient storage.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set(session);
        store
    }

    pub fn get(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set(&self, session: Session) {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session);
    }

    pub fn clear(&self) {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }
}

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct ApiClient {
    address: String,
    session: SessionStore,
    inner_client: reqwest::Client,
}

type ClientResult<T> = Result<T, ClientError>;

/// Helper methods for http actions
impl ApiClient {
    pub fn new(address: impl Into<String>, session: SessionStore) -> Self {
        Self {
            address: address.into(),
            session,
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn with_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match self.session.get() {
            Some(session) => request.bearer_auth(session.access_token),
            None => request,
        }
    }

    /// Send a request built by `build`, attaching the current access token.
    ///
    /// On a 401 with a session present, performs exactly one silent token
    /// refresh and one replay of the original request. A second 401 on the
    /// replay is returned as-is; there is no retry loop.
    async fn execute<F>(&self, build: F) -> ClientResult<reqwest::Response>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let response =
            self.with_auth(build(&self.inner_client)).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED
            && self.session.is_logged_in()
        {
            self.refresh_session().await?;
            let replay =
                self.with_auth(build(&self.inner_client)).send().await?;
            return Ok(replay);
        }
        Ok(response)
    }

    /// Exchange the stored refresh token for a fresh token pair.
    async fn refresh_session(&self) -> ClientResult<()> {
        let Some(session) = self.session.get() else {
            return Err(ClientError::NotLoggedIn);
        };
        tracing::debug!("access token rejected, attempting refresh");
        let response = self
            .inner_client
            .post(self.format_url("auth/refresh"))
            .json(&requests::RefreshSession {
                refresh_token: session.refresh_token,
            })
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "token refresh failed");
            self.session.clear();
            return Err(ClientError::SessionExpired);
        }
        let tokens: Session = response.json().await?;
        self.session.set(tokens);
        Ok(())
    }

    async fn get(&self, path: &str) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.get(self.format_url(path))).await
    }

    async fn get_with_query<Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.get(self.format_url(path)).query(query))
            .await
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.post(self.format_url(path)).json(body))
            .await
    }

    async fn empty_post(&self, path: &str) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.post(self.format_url(path))).await
    }

    async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.put(self.format_url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> ClientResult<reqwest::Response> {
        self.execute(|client| client.delete(self.format_url(path))).await
    }

    async fn delete_with_query<Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<reqwest::Response> {
        self.execute(|client| {
            client.delete(self.format_url(path)).query(query)
        })
        .await
    }
}

/// Methods on the backend API
impl ApiClient {
    /// Log in and store the returned token pair in the session store.
    pub async fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> ClientResult<responses::UserProfile> {
        let response = self
            .inner_client
            .post(self.format_url("auth/login"))
            .json(credentials)
            .send()
            .await?;
        let success: responses::LoginSuccess = ok_body(response).await?;
        self.session.set(success.tokens);
        Ok(success.profile)
    }

    /// End the session server-side. The local session is cleared even if
    /// the call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let response = self.empty_post("auth/logout").await;
        self.session.clear();
        ok_empty(response?).await
    }

    pub async fn user_profile(
        &self,
    ) -> ClientResult<responses::UserProfile> {
        let response = self.get("auth/profile").await?;
        ok_body(response).await
    }

    // Companies

    pub async fn list_companies(
        &self,
    ) -> ClientResult<Vec<responses::Company>> {
        let response = self.get("companies").await?;
        ok_body(response).await
    }

    pub async fn get_company(
        &self,
        company_id: &CompanyId,
    ) -> ClientResult<responses::Company> {
        let response = self.get(&format!("companies/{company_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_company(
        &self,
        details: &crate::Company,
    ) -> ClientResult<responses::Company> {
        let response = self.post("companies", details).await?;
        ok_body(response).await
    }

    pub async fn update_company(
        &self,
        company_id: &CompanyId,
        details: &crate::Company,
    ) -> ClientResult<responses::Company> {
        let response = self
            .put(&format!("companies/{company_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_company(
        &self,
        company_id: &CompanyId,
    ) -> ClientResult<()> {
        let response = self.delete(&format!("companies/{company_id}")).await?;
        ok_empty(response).await
    }

    // Projects

    pub async fn list_projects(
        &self,
        filter: &requests::ProjectFilter,
    ) -> ClientResult<Vec<responses::Project>> {
        let response = self.get_with_query("projects", filter).await?;
        ok_body(response).await
    }

    pub async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> ClientResult<responses::Project> {
        let response = self.get(&format!("projects/{project_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_project(
        &self,
        details: &crate::Project,
    ) -> ClientResult<responses::Project> {
        let response = self.post("projects", details).await?;
        ok_body(response).await
    }

    pub async fn update_project(
        &self,
        project_id: &ProjectId,
        details: &crate::Project,
    ) -> ClientResult<responses::Project> {
        let response =
            self.put(&format!("projects/{project_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_project(
        &self,
        project_id: &ProjectId,
    ) -> ClientResult<()> {
        let response = self.delete(&format!("projects/{project_id}")).await?;
        ok_empty(response).await
    }

    // Tasks

    pub async fn list_tasks(
        &self,
        filter: &requests::TaskFilter,
    ) -> ClientResult<Vec<responses::Task>> {
        let response = self.get_with_query("tasks", filter).await?;
        ok_body(response).await
    }

    pub async fn create_task(
        &self,
        details: &crate::Task,
    ) -> ClientResult<responses::Task> {
        let response = self.post("tasks", details).await?;
        ok_body(response).await
    }

    pub async fn update_task(
        &self,
        task_id: &TaskId,
        details: &crate::Task,
    ) -> ClientResult<responses::Task> {
        let response = self.put(&format!("tasks/{task_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_task(&self, task_id: &TaskId) -> ClientResult<()> {
        let response = self.delete(&format!("tasks/{task_id}")).await?;
        ok_empty(response).await
    }

    /// Bulk-delete every task matching the filter, e.g. clearing completed
    /// tasks off a project board.
    pub async fn delete_tasks(
        &self,
        filter: &requests::TaskFilter,
    ) -> ClientResult<()> {
        let response = self.delete_with_query("tasks", filter).await?;
        ok_empty(response).await
    }

    // Employees

    pub async fn list_employees(
        &self,
    ) -> ClientResult<Vec<responses::Employee>> {
        let response = self.get("employees").await?;
        ok_body(response).await
    }

    pub async fn get_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> ClientResult<responses::Employee> {
        let response = self.get(&format!("employees/{employee_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_employee(
        &self,
        details: &crate::Employee,
    ) -> ClientResult<responses::Employee> {
        let response = self.post("employees", details).await?;
        ok_body(response).await
    }

    pub async fn update_employee(
        &self,
        employee_id: &EmployeeId,
        details: &crate::Employee,
    ) -> ClientResult<responses::Employee> {
        let response = self
            .put(&format!("employees/{employee_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> ClientResult<()> {
        let response =
            self.delete(&format!("employees/{employee_id}")).await?;
        ok_empty(response).await
    }

    // Expense reports

    pub async fn list_expense_reports(
        &self,
        filter: &requests::ExpenseReportFilter,
    ) -> ClientResult<Vec<responses::ExpenseReport>> {
        let response = self.get_with_query("expense-reports", filter).await?;
        ok_body(response).await
    }

    pub async fn get_expense_report(
        &self,
        report_id: &ExpenseReportId,
    ) -> ClientResult<responses::ExpenseReport> {
        let response =
            self.get(&format!("expense-reports/{report_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_expense_report(
        &self,
        details: &requests::CreateExpenseReport,
    ) -> ClientResult<responses::ExpenseReport> {
        let response = self.post("expense-reports", details).await?;
        ok_body(response).await
    }

    pub async fn update_expense_report(
        &self,
        report_id: &ExpenseReportId,
        details: &requests::UpdateExpenseReport,
    ) -> ClientResult<responses::ExpenseReport> {
        let response = self
            .put(&format!("expense-reports/{report_id}"), details)
            .await?;
        ok_body(response).await
    }

    /// Hand a draft report to the approval queue.
    pub async fn submit_expense_report(
        &self,
        report_id: &ExpenseReportId,
    ) -> ClientResult<responses::ExpenseReport> {
        let response = self
            .empty_post(&format!("expense-reports/{report_id}/submit"))
            .await?;
        ok_body(response).await
    }

    pub async fn delete_expense_report(
        &self,
        report_id: &ExpenseReportId,
    ) -> ClientResult<()> {
        let response = self
            .delete(&format!("expense-reports/{report_id}"))
            .await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, with the server-provided message.
    #[error("{1}")]
    Api(StatusCode, String),
    /// The refresh token was rejected; the user must log in again.
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    /// A call that requires a session was made without one.
    #[error("Not logged in.")]
    NotLoggedIn,
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(status, _) => Some(*status),
            _ => None,
        }
    }
}

/// Build the error for a non-2xx response, preferring the structured
/// `{"message": ...}` payload over raw body text.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<responses::ApiError>(&text)
            .map(|e| e.message)
            .unwrap_or(text),
        Err(_) => String::new(),
    };
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        message
    };
    ClientError::Api(status, message)
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
