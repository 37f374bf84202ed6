use std::collections::HashSet;

use aidts_ir::{Attribute, Entity, SchemaSnapshot};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{Auth, FetchError, ndjson::parse_ndjson};

/// How records are retrieved from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// `GET /{type}/$dump`, newline-delimited JSON.
    #[default]
    Dump,
    /// `GET /{type}?_count=N`, following `next` links.
    Bundle { page_size: u32 },
}

#[derive(Debug, Deserialize)]
struct Bundle<T> {
    #[serde(default = "Vec::new")]
    entry: Vec<BundleEntry<T>>,
    #[serde(default = "Vec::new")]
    link: Vec<BundleLink>,
}

#[derive(Debug, Deserialize)]
struct BundleEntry<T> {
    resource: T,
}

#[derive(Debug, Deserialize)]
struct BundleLink {
    relation: String,
    url: String,
}

impl<T> Bundle<T> {
    fn next(&self) -> Option<&str> {
        self.link
            .iter()
            .find(|link| link.relation == "next")
            .map(|link| link.url.as_str())
    }
}

/// Retrieves `Entity` and `Attribute` records from a running server.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
    mode: FetchMode,
}

impl SchemaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("aidts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth: Auth::None,
            mode: FetchMode::Dump,
        })
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch both collections concurrently.
    pub async fn fetch_snapshot(&self) -> Result<SchemaSnapshot, FetchError> {
        let (entities, attributes) = tokio::try_join!(
            self.fetch_collection::<Entity>("Entity"),
            self.fetch_collection::<Attribute>("Attribute"),
        )?;
        info!(
            entities = entities.len(),
            attributes = attributes.len(),
            "fetched schema"
        );
        Ok(SchemaSnapshot::new(entities, attributes))
    }

    pub async fn fetch_entities(&self) -> Result<Vec<Entity>, FetchError> {
        self.fetch_collection("Entity").await
    }

    pub async fn fetch_attributes(&self) -> Result<Vec<Attribute>, FetchError> {
        self.fetch_collection("Attribute").await
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource_type: &str,
    ) -> Result<Vec<T>, FetchError> {
        match self.mode {
            FetchMode::Dump => self.fetch_dump(resource_type).await,
            FetchMode::Bundle { page_size } => self.fetch_pages(resource_type, page_size).await,
        }
    }

    async fn fetch_dump<T: DeserializeOwned>(
        &self,
        resource_type: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}/{}/$dump", self.base_url, resource_type);
        let body = self.get(&url).await?.text().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;
        let records = parse_ndjson(&body, &url)?;
        debug!(%url, count = records.len(), "read dump");
        Ok(records)
    }

    async fn fetch_pages<T: DeserializeOwned>(
        &self,
        resource_type: &str,
        page_size: u32,
    ) -> Result<Vec<T>, FetchError> {
        let mut records = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(format!(
            "{}/{}?_count={}",
            self.base_url, resource_type, page_size
        ));

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                debug!(%url, "next link already visited, stopping");
                break;
            }
            let bundle: Bundle<T> =
                self.get(&url)
                    .await?
                    .json()
                    .await
                    .map_err(|source| FetchError::Request {
                        url: url.clone(),
                        source,
                    })?;
            debug!(%url, count = bundle.entry.len(), "read page");
            next = bundle.next().map(|link| self.absolute(link));
            records.extend(bundle.entry.into_iter().map(|entry| entry.resource));
        }

        Ok(records)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let mut request = self.http.get(url);
        if self.is_same_origin(url) {
            if let Some(value) = self.auth.header_value()? {
                request = request.header(AUTHORIZATION, value);
            }
        } else {
            debug!(%url, "link leaves the configured server, sending no credentials");
        }
        let response = request.send().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(response)
    }

    /// Credentials are only sent to the origin of `base_url`.
    fn is_same_origin(&self, url: &str) -> bool {
        match (reqwest::Url::parse(&self.base_url), reqwest::Url::parse(url)) {
            (Ok(base), Ok(target)) => base.origin() == target.origin(),
            _ => false,
        }
    }

    /// Servers may return `next` links relative to their root.
    fn absolute(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else {
            format!("{}/{}", self.base_url, link.trim_start_matches('/'))
        }
    }
}
