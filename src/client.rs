//! HTTP client for the Gerstlix game-statistics API.
//!
//! This module provides the [`Gerstlix`] struct, a thin typed surface over
//! the HTTP endpoints of the API. Every method validates its arguments
//! against the static allow-lists, funnels through one request chokepoint
//! and returns the API's response envelope untouched.

use std::fmt;

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::constants::{API_URL, ARIZONA_GAMES, ARIZONA_RP, PROJECT_TYPES};
use crate::error::GerstlixError;
use crate::query::QueryPairs;
use crate::response::ApiResponse;

/// Options for constructing a [`Gerstlix`] client.
///
/// Holds the credential, so it intentionally does not implement `Debug`.
#[derive(Clone)]
pub struct GerstlixOptions {
    /// API token attached to every request.
    ///
    /// Required: construction fails with a validation error when empty.
    pub token: String,

    /// Overrides the production endpoint ([`API_URL`]).
    ///
    /// Mainly useful for pointing the client at a mock server in tests.
    /// A trailing slash is trimmed.
    pub base_url: Option<String>,
}

impl GerstlixOptions {
    /// Creates options for the production endpoint with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        GerstlixOptions {
            token: token.into(),
            base_url: None,
        }
    }
}

/// Client for the Gerstlix game-statistics API.
///
/// All methods are thin wrappers around HTTP GET endpoints: they validate
/// their arguments, attach the token and return the response envelope
/// verbatim. The client holds no per-call state, so a single instance can
/// be shared and called concurrently; cloning is cheap.
///
/// # Examples
///
/// ```no_run
/// use gerstlix::{Gerstlix, GerstlixOptions};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), gerstlix::GerstlixError> {
/// let client = Gerstlix::new(GerstlixOptions::new("your-token"))?;
///
/// let info = client.get_info(1).await?;
/// println!("server info: {}", info);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Gerstlix {
    /// API token sent with every request.
    token: String,
    /// Base URL of the API, without trailing slash.
    base_url: String,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl Gerstlix {
    /// Creates a client with a default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns a [`GerstlixError::Validation`] when `options.token` is
    /// empty. The check runs before any transport object is built.
    pub fn new(options: GerstlixOptions) -> Result<Self, GerstlixError> {
        if options.token.is_empty() {
            return Err(GerstlixError::Validation("Token is required".to_owned()));
        }

        Self::with_http_client(options, reqwest::Client::new())
    }

    /// Creates a client on top of a caller-configured HTTP transport.
    ///
    /// Every setting of the supplied client (timeouts, default headers,
    /// proxies) is preserved; the Gerstlix client only adds URL and query
    /// assembly per request. Callers that need deadlines or cancellation
    /// configure them here.
    ///
    /// # Arguments
    ///
    /// * `options` - Token and optional endpoint override.
    /// * `http` - The transport to issue requests with.
    ///
    /// # Errors
    ///
    /// Returns a [`GerstlixError::Validation`] when `options.token` is
    /// empty.
    pub fn with_http_client(
        options: GerstlixOptions,
        http: reqwest::Client,
    ) -> Result<Self, GerstlixError> {
        if options.token.is_empty() {
            return Err(GerstlixError::Validation("Token is required".to_owned()));
        }

        let mut base_url = options.base_url.unwrap_or_else(|| API_URL.to_owned());
        // Normalize the base URL by removing a trailing slash if present
        if base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Gerstlix {
            token: options.token,
            base_url,
            http,
        })
    }

    /// Checks that `server` belongs to the applicable allow-list.
    ///
    /// Most endpoints accept any server from [`ARIZONA_GAMES`]; faction
    /// member queries are limited to [`ARIZONA_RP`] (`arz_only`).
    fn validate_server(&self, server: u32, arz_only: bool) -> Result<(), GerstlixError> {
        let list: &[u32] = if arz_only { &ARIZONA_RP } else { &ARIZONA_GAMES };

        if !list.contains(&server) {
            return Err(GerstlixError::Validation(format!(
                "Server {} is not in the approved list",
                server
            )));
        }

        Ok(())
    }

    /// Checks that `project` is one of the recognized project codes.
    fn validate_project(&self, project: &str) -> Result<(), GerstlixError> {
        if !PROJECT_TYPES.contains(&project) {
            return Err(GerstlixError::Validation(format!(
                "Invalid project. Use one of: {}",
                PROJECT_TYPES.join(", ")
            )));
        }

        Ok(())
    }

    /// Issues a GET request against `{base}/{endpoint}/` and maps transport
    /// failures into [`GerstlixError`].
    ///
    /// The token is always the first query parameter. A response with a
    /// non-success status becomes [`GerstlixError::Api`], a request that
    /// never got an answer becomes [`GerstlixError::NoResponse`], and
    /// anything else the transport reports passes through unchanged.
    ///
    /// Log lines never include the URL: the query string carries the token.
    async fn request<T: DeserializeOwned + fmt::Debug>(
        &self,
        endpoint: &str,
        mut params: QueryPairs,
    ) -> Result<ApiResponse<T>, GerstlixError> {
        params.prepend("token", self.token.as_str());

        let url = format!(
            "{}/{}/?{}",
            self.base_url,
            endpoint,
            params.to_query_string()
        );
        info!("request {}", endpoint);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            // A builder error is a malformed request, not a missing response
            Err(err) if err.is_builder() => return Err(GerstlixError::Http(err)),
            Err(err) => {
                debug!("no response from {}: {}", endpoint, err.without_url());
                return Err(GerstlixError::NoResponse);
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(GerstlixError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let envelope = response.json::<ApiResponse<T>>().await?;
        debug!("response from {} -> {}", endpoint, envelope);

        Ok(envelope)
    }

    /// Fetches general information about a server.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use gerstlix::{Gerstlix, GerstlixOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), gerstlix::GerstlixError> {
    /// # let client = Gerstlix::new(GerstlixOptions::new("your-token"))?;
    /// let info = client.get_info(1).await?;
    /// println!("{}", info.data);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_info(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getInfo", params).await
    }

    /// Fetches the state of the ghetto map (gang territories) on a server.
    pub async fn get_ghetto_map(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("game.getGhettoMap", params).await
    }

    /// Fetches the member list of a faction.
    ///
    /// Only available on Arizona RP servers: `server` is validated against
    /// the restricted [`ARIZONA_RP`] list instead of the full one.
    pub async fn get_members(
        &self,
        server: u32,
        fraction_id: u32,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, true)?;

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("fraction", fraction_id);

        self.request("game.getMembers", params).await
    }

    /// Fetches the players with the longest play time on a server.
    pub async fn get_old_players(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("game.getOldPlayers", params).await
    }

    /// Fetches the richest players on a server.
    pub async fn get_rich_players(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("game.getRichPlayers", params).await
    }

    /// Fetches the deputy leader of a faction.
    pub async fn get_deputy(
        &self,
        server: u32,
        fraction_id: u32,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("fraction", fraction_id);

        self.request("server.getDeputy", params).await
    }

    /// Fetches the deputy leaders of every faction on a server.
    pub async fn get_deputy_list(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getDeputyList", params).await
    }

    /// Fetches the leader of a faction.
    pub async fn get_leader(
        &self,
        server: u32,
        fraction_id: u32,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("fraction", fraction_id);

        self.request("server.getLeader", params).await
    }

    /// Fetches the leaders of every faction on a server.
    pub async fn get_leaders_list(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getLeadersList", params).await
    }

    /// Fetches the minister of a government faction.
    pub async fn get_minister(
        &self,
        server: u32,
        fraction_id: u32,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("fraction", fraction_id);

        self.request("server.getMinister", params).await
    }

    /// Fetches the ministers of every government faction on a server.
    pub async fn get_ministers_list(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getMinistersList", params).await
    }

    /// Fetches the online record of a faction.
    pub async fn get_record_fraction(
        &self,
        server: u32,
        fraction_id: u32,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("fraction", fraction_id);

        self.request("server.getRecord", params).await
    }

    /// Fetches the online records of every faction on a server.
    pub async fn get_records(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getRecords", params).await
    }

    /// Fetches the status of every server of a project.
    ///
    /// The project code is validated against [`PROJECT_TYPES`] but is not
    /// part of the outgoing query; the endpoint takes no parameters beyond
    /// the token.
    pub async fn get_status(&self, project: &str) -> Result<ApiResponse, GerstlixError> {
        self.validate_project(project)?;

        self.request("server.getStatus", QueryPairs::new()).await
    }

    /// Fetches a player's profile on a server by nickname.
    ///
    /// # Errors
    ///
    /// Returns a [`GerstlixError::Validation`] when `server` is not in the
    /// allow-list or `player` is empty.
    pub async fn get_player(
        &self,
        server: u32,
        player: &str,
    ) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;
        if player.is_empty() {
            return Err(GerstlixError::Validation("Player is required".to_owned()));
        }

        let mut params = QueryPairs::new();
        params.push("server", server);
        params.push("player", player);

        self.request("game.getPlayer", params).await
    }

    /// Fetches the administrator list of a server.
    pub async fn get_admins_list(&self, server: u32) -> Result<ApiResponse, GerstlixError> {
        self.validate_server(server, false)?;

        let mut params = QueryPairs::new();
        params.push("server", server);

        self.request("server.getAdminsList", params).await
    }

    /// Looks up GeoIP information for an IP address.
    ///
    /// # Errors
    ///
    /// Returns a [`GerstlixError::Validation`] when `ip` is empty.
    pub async fn geo_ip(&self, ip: &str) -> Result<ApiResponse, GerstlixError> {
        if ip.is_empty() {
            return Err(GerstlixError::Validation("IP is required".to_owned()));
        }

        let mut params = QueryPairs::new();
        params.push("ip", ip);

        self.request("utils.geoIp", params).await
    }
}
