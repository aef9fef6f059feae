//! GitHub-hosted registry source
//!
//! Reads directory listings and commit history through the GitHub REST API
//! and raw documents through the raw-content host. Every call is a single
//! request; non-success statuses are surfaced as errors, except a 404 on a
//! raw document which means the document does not exist.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
	Client, StatusCode,
};
use skychart_config::{RegistrySettings, Settings};
use skychart_types::{
	parse_commit_count, parse_listing, DirectoryEntry, RegistrySource, SourceError, SourceResult,
};
use tracing::debug;
use url::Url;

const USER_AGENT_VALUE: &str = concat!("skychart/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Registry source backed by a GitHub repository
#[derive(Debug, Clone)]
pub struct GithubSource {
	client: Client,
	api_base: Url,
	raw_base: Url,
	repository: String,
	branch: String,
}

impl GithubSource {
	/// Create a source for the registry described by `settings`
	pub fn new(settings: &RegistrySettings, request_timeout: Duration) -> SourceResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
		headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

		let client = Client::builder()
			.default_headers(headers)
			.timeout(request_timeout)
			.build()?;

		Ok(Self {
			client,
			api_base: parse_base(&settings.api_base_url)?,
			raw_base: parse_base(&settings.raw_base_url)?,
			repository: settings.repository.clone(),
			branch: settings.branch.clone(),
		})
	}

	/// Create a source from the full application settings
	pub fn from_settings(settings: &Settings) -> SourceResult<Self> {
		Self::new(&settings.registry, settings.request_timeout())
	}

	/// `{api}/repos/{repository}/contents/{path}`
	pub fn listing_url(&self, path: &str) -> SourceResult<Url> {
		let mut url = join_segments(&self.api_base, &["repos", &self.repository, "contents", path])?;
		url.query_pairs_mut().append_pair("ref", &self.branch);
		Ok(url)
	}

	/// `{raw}/{repository}/{branch}/{path}`
	pub fn raw_url(&self, path: &str) -> SourceResult<Url> {
		join_segments(&self.raw_base, &[&self.repository, &self.branch, path])
	}

	/// `{api}/repos/{repository}/commits?since={timestamp}`
	pub fn commits_url(&self, since: DateTime<Utc>) -> SourceResult<Url> {
		let mut url = join_segments(&self.api_base, &["repos", &self.repository, "commits"])?;
		url.query_pairs_mut()
			.append_pair("since", &since.to_rfc3339_opts(SecondsFormat::Secs, true))
			.append_pair("sha", &self.branch)
			.append_pair("per_page", "1");
		Ok(url)
	}

	async fn get(&self, url: Url) -> SourceResult<(StatusCode, Vec<u8>, Url)> {
		debug!("GET {}", url);
		let response = self.client.get(url.clone()).send().await?;
		let status = response.status();
		let body = response.bytes().await?.to_vec();
		Ok((status, body, url))
	}
}

#[async_trait]
impl RegistrySource for GithubSource {
	async fn list_directory(&self, path: &str) -> SourceResult<Vec<DirectoryEntry>> {
		let (status, body, url) = self.get(self.listing_url(path)?).await?;
		if !status.is_success() {
			return Err(SourceError::http_status(status.as_u16(), url));
		}
		Ok(parse_listing(&body)?)
	}

	async fn fetch_file(&self, path: &str) -> SourceResult<Option<Vec<u8>>> {
		let (status, body, url) = self.get(self.raw_url(path)?).await?;
		if status == StatusCode::NOT_FOUND {
			debug!("{} does not exist", url);
			return Ok(None);
		}
		if !status.is_success() {
			return Err(SourceError::http_status(status.as_u16(), url));
		}
		Ok(Some(body))
	}

	async fn has_commits_since(&self, since: DateTime<Utc>) -> SourceResult<bool> {
		let (status, body, url) = self.get(self.commits_url(since)?).await?;
		if !status.is_success() {
			return Err(SourceError::http_status(status.as_u16(), url));
		}
		Ok(parse_commit_count(&body)? > 0)
	}

	fn describe(&self) -> String {
		format!("github:{}@{}", self.repository, self.branch)
	}
}

fn parse_base(base: &str) -> SourceResult<Url> {
	let url = Url::parse(base).map_err(|e| SourceError::InvalidUrl {
		url: base.to_string(),
		reason: e.to_string(),
	})?;
	if url.cannot_be_a_base() {
		return Err(SourceError::InvalidUrl {
			url: base.to_string(),
			reason: "cannot be used as a base URL".to_string(),
		});
	}
	Ok(url)
}

/// Append `/`-separated parts to a base URL, percent-encoding each segment
fn join_segments(base: &Url, parts: &[&str]) -> SourceResult<Url> {
	let mut url = base.clone();
	{
		let mut segments = url.path_segments_mut().map_err(|_| SourceError::InvalidUrl {
			url: base.to_string(),
			reason: "cannot be used as a base URL".to_string(),
		})?;
		segments.pop_if_empty();
		segments.extend(
			parts
				.iter()
				.flat_map(|part| part.split('/'))
				.filter(|segment| !segment.is_empty()),
		);
	}
	Ok(url)
}
