//! Error types for configuration and client construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum CookieError {
    #[error("Cookie read failed: {0}")]
    Read(String),
    #[error("Cookie value is not valid UTF-8: {0}")]
    Encoding(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Cookie(#[from] CookieError),
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("Invalid endpoint path '{path}': {message}")]
    InvalidEndpoint { path: String, message: String },
    #[error("HTTP client construction failed: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::HttpClient(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("ACCOUNT_SERVICE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: ACCOUNT_SERVICE_URL"
        );

        let err = ConfigError::InvalidValue {
            key: "APP_ENV".to_string(),
            message: "not recognised".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'APP_ENV': not recognised");
    }

    #[test]
    fn test_cookie_error_display() {
        let err = CookieError::Read("backend unavailable".to_string());
        assert_eq!(err.to_string(), "Cookie read failed: backend unavailable");

        let err = CookieError::Encoding("0xff at byte 3".to_string());
        assert_eq!(
            err.to_string(),
            "Cookie value is not valid UTF-8: 0xff at byte 3"
        );
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::InvalidBaseUrl {
            url: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid base URL 'not a url': relative URL without a base"
        );

        let err = ClientError::HttpClient("TLS backend failed".to_string());
        assert_eq!(
            err.to_string(),
            "HTTP client construction failed: TLS backend failed"
        );
    }

    #[test]
    fn test_client_error_from_config_error() {
        let cfg_err = ConfigError::MissingEnvVar("KEY".to_string());
        let client_err: ClientError = cfg_err.into();
        assert!(matches!(
            client_err,
            ClientError::Config(ConfigError::MissingEnvVar(_))
        ));
    }

    #[test]
    fn test_client_error_from_cookie_error() {
        let cookie_err = CookieError::Read("store closed".to_string());
        let client_err: ClientError = cookie_err.into();
        assert!(matches!(
            client_err,
            ClientError::Cookie(CookieError::Read(_))
        ));
    }
}
