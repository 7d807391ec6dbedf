use team_shuffle::share::{self, ShareData};
use url::Url;


// Accepts either a full URL (the payload lives in the query part) or a bare
// query string, with or without a leading '?'.
pub fn decode(link: &str) -> ShareData {
    match Url::parse(link) {
        Ok(url) => share::decode(url.query().unwrap_or_default()),
        Err(_) => share::decode(link.trim_start_matches('?')),
    }
}
