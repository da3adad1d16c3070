/*
 * redirect.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Resolving the final URL behind a chain of HTTP redirects.

use crate::error::{RedirectError, RedirectResult};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

/// Default timeout for a whole redirect chain (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of redirects followed before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default user agent for redirect requests
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Finds where a URL ends up after redirects.
pub trait RedirectResolver {
    /// Follow redirects from `url` and return the last URL reached.
    ///
    /// Returns `url` unchanged when the server does not redirect.
    fn resolve_final_url(&self, url: &str) -> RedirectResult<String>;
}

/// Settings for [`HttpRedirectResolver`].
#[derive(Debug, Clone)]
pub struct RedirectConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Redirects followed before failing with [`RedirectError::TooManyRedirects`].
    pub max_redirects: usize,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl RedirectConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Resolves redirects by issuing GET requests.
///
/// Follows 301, 302, 303, 307 and 308 responses, resolving relative
/// `Location` headers against the current URL. Any other status, including
/// 304 Not Modified, ends the chain. The HTTP client is built on first use.
#[derive(Debug, Default)]
pub struct HttpRedirectResolver {
    config: RedirectConfig,
    client: OnceCell<Client>,
}

impl HttpRedirectResolver {
    pub fn new(config: RedirectConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &RedirectConfig {
        &self.config
    }

    fn client(&self) -> RedirectResult<&Client> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .user_agent(self.config.user_agent.as_str())
                .timeout(self.config.timeout)
                .redirect(Policy::limited(self.config.max_redirects))
                .build()
                .map_err(RedirectError::Client)
        })
    }
}

impl RedirectResolver for HttpRedirectResolver {
    fn resolve_final_url(&self, url: &str) -> RedirectResult<String> {
        let parsed = Url::parse(url).map_err(|source| RedirectError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client()?
            .get(parsed.clone())
            .send()
            .map_err(|source| {
                if source.is_redirect() {
                    RedirectError::TooManyRedirects {
                        url: url.to_string(),
                        limit: self.config.max_redirects,
                    }
                } else {
                    RedirectError::Request {
                        url: url.to_string(),
                        source,
                    }
                }
            })?;

        if response.url() == &parsed {
            tracing::debug!(url, status = %response.status(), "no redirect");
            return Ok(url.to_string());
        }

        let final_url = response.url().to_string();
        tracing::debug!(from = url, to = %final_url, "followed redirects");
        Ok(final_url)
    }
}
