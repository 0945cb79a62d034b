//! Static allow-lists and endpoint constants for the Gerstlix API.
//!
//! The API serves a fixed fleet of role-play game servers, grouped by
//! project. Server identifiers and project codes are validated against the
//! lists below before any request goes out, so a typo fails fast instead of
//! burning a network round-trip.

/// Base URL of the Gerstlix API.
pub const API_URL: &str = "https://api2.gerstlix.com/v1";

/// Arizona RP server identifiers.
///
/// This group is also the restricted allow-list: faction member queries
/// ([`Gerstlix::get_members`](crate::Gerstlix::get_members)) are only
/// available on these servers.
pub const ARIZONA_RP: [u32; 31] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31,
];

/// Arizona RP Mobile server identifiers.
pub const ARIZONA_MOBILE: [u32; 3] = [101, 102, 103];

/// Rodina RP server identifiers.
pub const RODINA_RP: [u32; 7] = [201, 202, 203, 204, 205, 206, 207];

/// Rodina RP Mobile server identifiers.
pub const RODINA_MOBILE: [u32; 1] = [301];

/// Every server identifier known to the API.
///
/// Concatenation of [`ARIZONA_RP`], [`ARIZONA_MOBILE`], [`RODINA_RP`] and
/// [`RODINA_MOBILE`], in that order. Most endpoints accept any server from
/// this list.
pub const ARIZONA_GAMES: [u32; 42] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 101, 102, 103, 201, 202, 203, 204, 205, 206, 207, 301,
];

/// Project codes accepted by [`Gerstlix::get_status`](crate::Gerstlix::get_status).
///
/// `arz` is Arizona RP, `marz` is Arizona RP Mobile and `rrp` is Rodina RP.
pub const PROJECT_TYPES: [&str; 3] = ["arz", "marz", "rrp"];
