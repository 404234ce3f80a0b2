//! Share URL construction
//!
//! A song set is shared as a single link: all ids joined by commas under
//! the fixed `/song/` path.

use crate::types::SongId;

/// Public site origin used for share links
pub const SHARE_BASE_URL: &str = "https://serenata.app";

/// Build the canonical share URL for a list of song ids
pub fn share_url(ids: &[SongId]) -> String {
    share_url_with_base(SHARE_BASE_URL, ids)
}

/// Build a share URL against an explicit origin (staging, tests)
pub fn share_url_with_base(base: &str, ids: &[SongId]) -> String {
    let joined = ids
        .iter()
        .map(SongId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}/song/{}", base.trim_end_matches('/'), joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_song_url() {
        let ids = vec![SongId::new("abc")];
        assert_eq!(share_url(&ids), "https://serenata.app/song/abc");
    }

    #[test]
    fn combo_url_joins_ids_with_comma() {
        let ids = vec![SongId::new("abc"), SongId::new("def")];
        assert_eq!(share_url(&ids), "https://serenata.app/song/abc,def");
    }

    #[test]
    fn custom_base_trailing_slash() {
        let ids = vec![SongId::new("abc")];
        assert_eq!(
            share_url_with_base("https://staging.serenata.app/", &ids),
            "https://staging.serenata.app/song/abc"
        );
    }
}
