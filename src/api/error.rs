use thiserror::Error;

/// Anything that goes wrong between asking for records and holding parsed JSON.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let status = TransportError::Status {
            url: "http://cms/api/salaah-times".to_string(),
            status: 401,
        };
        assert_eq!(
            status.to_string(),
            "request to http://cms/api/salaah-times returned HTTP 401"
        );
        assert_eq!(
            TransportError::decode("expected an array").to_string(),
            "could not decode response: expected an array"
        );
    }
}
