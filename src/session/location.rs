use reqwest::Url;

use crate::error::AppError;

/// Address of the page the client is shown on.
///
/// Query updates replace the current history entry, the way
/// `history.replaceState` does, so the entry count never grows.
#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
    history_len: usize,
}

impl PageLocation {
    pub fn parse(url: &str) -> Result<Self, AppError> {
        let url = Url::parse(url).map_err(|e| AppError::Config {
            message: format!("Invalid page URL {}: {}", url, e),
        })?;
        Ok(Self {
            url,
            history_len: 1,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// First value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Set `key` to `value` in place: the first occurrence is overwritten,
    /// later duplicates are dropped, and a missing key is appended.
    pub fn replace_query(&mut self, key: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut found = false;
        for (k, v) in self.url.query_pairs() {
            if k == key {
                if !found {
                    pairs.push((k.into_owned(), value.to_string()));
                    found = true;
                }
            } else {
                pairs.push((k.into_owned(), v.into_owned()));
            }
        }
        if !found {
            pairs.push((key.to_string(), value.to_string()));
        }

        self.url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}
