//! Issue Access Link
//!
//! Builds the deep link printed as a QR code for a seminar. Library-only:
//! there is no HTTP route for minting tokens.

use kernel::id::SeminarId;
use reqwest::Url;

use crate::application::config::SeminarConfig;
use crate::domain::value_object::access_token::AccessToken;

/// Query parameter that carries the token
pub const TOKEN_QUERY_PARAM: &str = "id";

/// Output DTO for issue link
#[derive(Debug, Clone)]
pub struct AccessLink {
    pub seminar_id: SeminarId,
    pub token: String,
    pub url: Url,
}

/// Issue a token for `seminar_id` and embed it in the public detail URL
///
/// Any `id` parameter already on the configured URL is replaced.
pub fn issue_access_link(seminar_id: SeminarId, config: &SeminarConfig) -> AccessLink {
    let token = AccessToken::issue(seminar_id, &config.access_secret).encode();

    let mut url = config.public_detail_url.clone();
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != TOKEN_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(TOKEN_QUERY_PARAM, &token);

    tracing::info!(seminar_id = %seminar_id, "Issued seminar access link");

    AccessLink {
        seminar_id,
        token,
        url,
    }
}
