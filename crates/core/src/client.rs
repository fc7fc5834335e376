//! Async client for the Telegraph API.
//!
//! Every API method is a form-encoded POST to `{base_url}/{method}` (or
//! `{base_url}/{method}/{path}` for page methods) answered by an
//! `{ok, result, error}` envelope. [`Client`] builds the parameters, sends the
//! request, and unwraps the envelope into typed results.
//!
//! # Example
//!
//! ```no_run
//! use telegraph_core::{Client, ClientConfig, PageDraft};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::create("Sandbox", Some("Anonymous"), None, ClientConfig::default()).await?;
//!
//!     let draft = PageDraft::from_html("Sample Page", "<p>Hello, <b>world</b>!</p>")?;
//!     let page = client.create_page(&draft).await?;
//!     println!("Published at {}", page.url);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::params::Params;
use crate::types::{Account, AccountField, ApiResponse, Page, PageDraft, PageList, PageViews, ViewsQuery};
use crate::{Result, TelegraphError};

/// Handle for calling the Telegraph API, optionally bound to an account.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    access_token: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Client {
    /// Creates a client that is not bound to any account.
    ///
    /// Only [`Client::create_account`], [`Client::get_page`] and
    /// [`Client::get_views`] work without an access token.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(TelegraphError::HttpError)?;

        Ok(Self { http, config, access_token: None })
    }

    /// Creates a client bound to an existing access token without contacting the service.
    pub fn with_access_token(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.access_token = Some(access_token.into());
        Ok(client)
    }

    /// Creates a new account and returns a client bound to it.
    pub async fn create(
        short_name: &str, author_name: Option<&str>, author_url: Option<&str>, config: ClientConfig,
    ) -> Result<Self> {
        let mut client = Self::new(config)?;
        let account = client.create_account(short_name, author_name, author_url).await?;

        let token = account
            .access_token
            .ok_or_else(|| TelegraphError::InvalidResponse("createAccount returned no access token".to_string()))?;
        client.access_token = Some(token);

        Ok(client)
    }

    /// Returns a client bound to `access_token` after checking the token with `getAccountInfo`.
    pub async fn load(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = Self::with_access_token(access_token, config)?;
        client.get_account_info(&[]).await?;
        Ok(client)
    }

    /// The access token this client acts with, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates a new Telegraph account.
    ///
    /// `short_name` is 1-32 characters; the optional author name (0-128) and
    /// author URL (0-512) are only sent when non-empty. The returned account
    /// carries its access token; this client stays bound to its current one.
    pub async fn create_account(
        &self, short_name: &str, author_name: Option<&str>, author_url: Option<&str>,
    ) -> Result<Account> {
        let mut params = Params::new();
        params
            .insert_str("short_name", short_name)
            .insert_opt_str("author_name", author_name)
            .insert_opt_str("author_url", author_url);

        self.call("createAccount", None, &params).await
    }

    /// Updates information about the bound account.
    pub async fn edit_account_info(
        &self, short_name: &str, author_name: Option<&str>, author_url: Option<&str>,
    ) -> Result<Account> {
        let mut params = Params::new();
        params
            .insert_str("access_token", self.token()?)
            .insert_str("short_name", short_name)
            .insert_opt_str("author_name", author_name)
            .insert_opt_str("author_url", author_url);

        self.call("editAccountInfo", None, &params).await
    }

    /// Fetches information about the bound account.
    ///
    /// An empty `fields` slice requests [`AccountField::DEFAULT`].
    pub async fn get_account_info(&self, fields: &[AccountField]) -> Result<Account> {
        let fields = if fields.is_empty() { &AccountField::DEFAULT[..] } else { fields };

        let mut params = Params::new();
        params.insert_str("access_token", self.token()?);
        params.insert_json("fields", fields)?;

        self.call("getAccountInfo", None, &params).await
    }

    /// Revokes the current access token and switches this client to the new one.
    ///
    /// The returned account carries the new `access_token` and an `auth_url`.
    pub async fn revoke_access_token(&mut self) -> Result<Account> {
        let mut params = Params::new();
        params.insert_str("access_token", self.token()?);

        let account: Account = self.call("revokeAccessToken", None, &params).await?;
        if let Some(token) = &account.access_token {
            self.access_token = Some(token.clone());
        }

        Ok(account)
    }

    /// Creates a new page.
    pub async fn create_page(&self, draft: &PageDraft) -> Result<Page> {
        let params = self.page_params(draft)?;
        self.call("createPage", None, &params).await
    }

    /// Creates a new page whose body is converted from an HTML fragment.
    pub async fn create_page_with_html(&self, title: &str, html: &str) -> Result<Page> {
        let draft = PageDraft::from_html(title, html)?;
        self.create_page(&draft).await
    }

    /// Replaces the title, body, and author details of an existing page.
    pub async fn edit_page(&self, path: &str, draft: &PageDraft) -> Result<Page> {
        let params = self.page_params(draft)?;
        self.call("editPage", Some(path), &params).await
    }

    /// Edits a page using a body converted from an HTML fragment.
    pub async fn edit_page_with_html(&self, path: &str, title: &str, html: &str) -> Result<Page> {
        let draft = PageDraft::from_html(title, html)?;
        self.edit_page(path, &draft).await
    }

    /// Fetches a page, with its body when `return_content` is set.
    pub async fn get_page(&self, path: &str, return_content: bool) -> Result<Page> {
        let mut params = Params::new();
        params.insert_json("return_content", &return_content)?;

        self.call("getPage", Some(path), &params).await
    }

    /// Lists pages of the bound account, newest first.
    ///
    /// `offset` is only sent when non-zero; `limit` accepts 0-200 (service default 50).
    pub async fn get_page_list(&self, offset: u32, limit: u32) -> Result<PageList> {
        let mut params = Params::new();
        params.insert_str("access_token", self.token()?);
        if offset > 0 {
            params.insert_json("offset", &offset)?;
        }
        params.insert_json("limit", &limit)?;

        self.call("getPageList", None, &params).await
    }

    /// Fetches the number of views of a page, optionally narrowed to a period.
    pub async fn get_views(&self, path: &str, query: &ViewsQuery) -> Result<PageViews> {
        let mut params = Params::new();
        if let Some(year) = query.year {
            params.insert_json("year", &year)?;
        }
        if let Some(month) = query.month {
            params.insert_json("month", &month)?;
        }
        if let Some(day) = query.day {
            params.insert_json("day", &day)?;
        }
        if let Some(hour) = query.hour {
            params.insert_json("hour", &hour)?;
        }

        self.call("getViews", Some(path), &params).await
    }

    fn page_params(&self, draft: &PageDraft) -> Result<Params> {
        let mut params = Params::new();
        params
            .insert_str("access_token", self.token()?)
            .insert_str("title", draft.title.as_str());
        params.insert_content(&draft.content)?;
        params
            .insert_opt_str("author_name", draft.author_name.as_deref())
            .insert_opt_str("author_url", draft.author_url.as_deref());
        if draft.return_content {
            params.insert_json("return_content", &true)?;
        }

        Ok(params)
    }

    fn token(&self) -> Result<&str> {
        self.access_token.as_deref().ok_or(TelegraphError::MissingAccessToken)
    }

    /// Builds `{base_url}/{method}[/{path}]`, percent-encoding the segments.
    fn endpoint(&self, method: &str, path: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| TelegraphError::InvalidUrl(e.to_string()))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| TelegraphError::InvalidUrl(format!("{} cannot be a base URL", self.config.base_url)))?;
            segments.pop_if_empty().push(method);
            if let Some(path) = path {
                segments.push(path);
            }
        }

        Ok(url)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, path: Option<&str>, params: &Params) -> Result<T> {
        let url = self.endpoint(method, path)?;
        tracing::debug!(method, %url, params = ?params.keys().collect::<Vec<_>>(), "sending request");

        let response = self
            .http
            .post(url)
            .form(params.as_pairs())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(method, %status, body_len = body.len(), "received response");

        let envelope: ApiResponse<T> = serde_json::from_str(&body)
            .map_err(|e| TelegraphError::InvalidResponse(format!("{} (HTTP {}): {}", method, status, e)))?;

        envelope.into_result(method).inspect_err(|e| {
            if let TelegraphError::Api { message, .. } = e {
                tracing::warn!(method, error = %message, "API error");
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> TelegraphError {
        if e.is_timeout() {
            TelegraphError::Timeout { timeout: self.config.timeout }
        } else {
            TelegraphError::HttpError(e)
        }
    }
}
