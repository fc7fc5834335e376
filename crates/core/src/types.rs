//! Telegraph API objects and request options.
//!
//! These mirror the objects documented at <https://telegra.ph/api>: accounts,
//! pages, page lists, and view counts, plus the `{ok, result, error}` envelope
//! every method answers with.

use serde::{Deserialize, Serialize};

use crate::html::nodes_from_html;
use crate::node::Node;
use crate::{Result, TelegraphError};

/// Response envelope returned by every API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the result, turning `ok: false` into [`TelegraphError::Api`].
    pub fn into_result(self, method: &str) -> Result<T> {
        if !self.ok {
            return Err(TelegraphError::Api {
                method: method.to_string(),
                message: self.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        self.result
            .ok_or_else(|| TelegraphError::InvalidResponse(format!("{} returned ok without a result", method)))
    }
}

/// A Telegraph account.
///
/// `access_token` is only returned by `createAccount` and
/// `revokeAccessToken`; `auth_url` and `page_count` only when requested
/// through [`AccountField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
}

/// Account fields that can be requested from `getAccountInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    ShortName,
    AuthorName,
    AuthorUrl,
    AuthUrl,
    PageCount,
}

impl AccountField {
    /// Fields returned when none are requested explicitly.
    pub const DEFAULT: [AccountField; 3] = [AccountField::ShortName, AccountField::AuthorName, AccountField::AuthorUrl];

    pub const ALL: [AccountField; 5] = [
        AccountField::ShortName,
        AccountField::AuthorName,
        AccountField::AuthorUrl,
        AccountField::AuthUrl,
        AccountField::PageCount,
    ];

    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::ShortName => "short_name",
            AccountField::AuthorName => "author_name",
            AccountField::AuthorUrl => "author_url",
            AccountField::AuthUrl => "auth_url",
            AccountField::PageCount => "page_count",
        }
    }
}

impl std::str::FromStr for AccountField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AccountField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid account field: {}. Valid options: short_name, author_name, author_url, auth_url, page_count",
                    s
                )
            })
    }
}

/// A Telegraph page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Page body, present only when requested with `return_content`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
}

/// A page of an account's page list, sorted by most recently created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    pub total_count: u64,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// Number of views of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViews {
    pub views: u64,
}

/// Title, body, and author details for creating or editing a page.
///
/// # Example
///
/// ```rust
/// use telegraph_core::PageDraft;
///
/// let draft = PageDraft::from_html("Notes", "<p>First <b>draft</b></p>")
///     .unwrap()
///     .author_name("Anonymous")
///     .return_content(true);
/// assert_eq!(draft.content.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    /// Page title, 1-256 characters.
    pub title: String,
    pub content: Vec<Node>,
    /// Author name, 0-128 characters.
    pub author_name: Option<String>,
    /// Profile link opened when the author name is clicked, 0-512 characters.
    pub author_url: Option<String>,
    /// Ask the service to include the content in the returned page.
    pub return_content: bool,
}

impl PageDraft {
    pub fn new(title: impl Into<String>, content: Vec<Node>) -> Self {
        Self { title: title.into(), content, ..Default::default() }
    }

    /// Creates a draft whose body is converted from an HTML fragment.
    pub fn from_html(title: impl Into<String>, html: &str) -> Result<Self> {
        Ok(Self::new(title, nodes_from_html(html)?))
    }

    pub fn author_name(mut self, value: impl Into<String>) -> Self {
        self.author_name = Some(value.into());
        self
    }

    pub fn author_url(mut self, value: impl Into<String>) -> Self {
        self.author_url = Some(value.into());
        self
    }

    pub fn return_content(mut self, value: bool) -> Self {
        self.return_content = value;
        self
    }
}

/// Time filter for `getViews`.
///
/// Each narrower unit requires the wider ones: `month` needs `year`, `day`
/// needs `month`, `hour` needs `day`. Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewsQuery {
    /// 2000-2100
    pub year: Option<u16>,
    /// 1-12
    pub month: Option<u8>,
    /// 1-31
    pub day: Option<u8>,
    /// 0-24
    pub hour: Option<u8>,
}

impl ViewsQuery {
    /// All-time views.
    pub fn total() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub fn hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }
}
