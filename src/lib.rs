//! Typed client for the Gerstlix game-statistics API.
//!
//! Gerstlix aggregates live statistics for the Arizona RP, Arizona RP Mobile
//! and Rodina RP game projects: server state, faction rosters and records,
//! player profiles and a GeoIP lookup. This crate wraps the HTTP API in a
//! small async client that validates arguments before anything goes on the
//! wire and returns the API's response envelope untouched.
//!
//! # Overview
//!
//! - **Allow-list validation**: server identifiers are checked against the
//!   published server groups, so a typo fails locally instead of burning an
//!   API call
//! - **Uniform envelope**: every endpoint answers with
//!   [`ApiResponse`]`{ success, data }`; `data` stays schemaless JSON
//! - **One error type**: transport, HTTP status and validation failures all
//!   surface as [`GerstlixError`]
//! - **Bring your own transport**: [`Gerstlix::with_http_client`] accepts a
//!   preconfigured [`reqwest::Client`] for timeouts, proxies or headers
//!
//! # Quick Start
//!
//! ```no_run
//! use gerstlix::{Gerstlix, GerstlixOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), gerstlix::GerstlixError> {
//! let client = Gerstlix::new(GerstlixOptions::new("your-token"))?;
//!
//! // Status of every Arizona RP server
//! let status = client.get_status("arz").await?;
//! println!("{}", status.data);
//!
//! // Profile of a player on server 1
//! let player = client.get_player(1, "Kalcor").await?;
//! println!("{}", player.data);
//! # Ok(())
//! # }
//! ```
//!
//! # Server Identifiers
//!
//! The API addresses game servers by numeric identifier, grouped by
//! project:
//!
//! - [`ARIZONA_RP`]: 1 through 31
//! - [`ARIZONA_MOBILE`]: 101 through 103
//! - [`RODINA_RP`]: 201 through 207
//! - [`RODINA_MOBILE`]: 301
//!
//! Most endpoints accept any identifier from the union of these groups
//! ([`ARIZONA_GAMES`]); [`Gerstlix::get_members`] is limited to the
//! [`ARIZONA_RP`] group.

mod client;
mod constants;
mod error;
mod query;
mod response;

pub use crate::client::{Gerstlix, GerstlixOptions};
pub use crate::constants::{
    API_URL, ARIZONA_GAMES, ARIZONA_MOBILE, ARIZONA_RP, PROJECT_TYPES, RODINA_MOBILE, RODINA_RP,
};
pub use crate::error::GerstlixError;
pub use crate::response::ApiResponse;
