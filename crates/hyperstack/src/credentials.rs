//! API key resolution.
//!
//! The key is taken from the first source that yields a non-empty value:
//!
//! 1. an explicit key (the `--api-key` flag)
//! 2. the `HYPERSTACK_KEY` environment variable
//! 3. a `key = <value>` line in `~/.hyperstack/credentials`
//!
//! Sources are never merged. A missing or unreadable credentials file is not
//! an error on its own; it only matters when every source came up empty.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable consulted for the API key.
pub const CREDENTIALS_ENV_VAR: &str = "HYPERSTACK_KEY";

/// Name of the key looked up in the credentials file.
const CREDENTIALS_FILE_KEY: &str = "key";

/// An API key used to authenticate every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, rejecting empty strings.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    /// Returns the raw key for use in request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed on the command line.
    Explicit,
    /// Read from `HYPERSTACK_KEY`.
    Environment,
    /// Read from the credentials file.
    File,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "--api-key"),
            Self::Environment => write!(f, "{CREDENTIALS_ENV_VAR}"),
            Self::File => write!(f, "credentials file"),
        }
    }
}

/// Resolves the API key from its three sources.
///
/// The environment value and the credentials-file location are captured at
/// construction, so resolution itself reads no ambient state besides the
/// file.
#[derive(Clone, Default)]
pub struct CredentialResolver {
    env_value: Option<String>,
    credentials_path: Option<PathBuf>,
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("env_value", &self.env_value.as_ref().map(|_| "[REDACTED]"))
            .field("credentials_path", &self.credentials_path)
            .finish()
    }
}

impl CredentialResolver {
    /// Creates a resolver over the given environment value and file path.
    #[must_use]
    pub const fn new(env_value: Option<String>, credentials_path: Option<PathBuf>) -> Self {
        Self {
            env_value,
            credentials_path,
        }
    }

    /// Creates a resolver from the process environment and the user's home
    /// directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(CREDENTIALS_ENV_VAR).ok(),
            default_credentials_path(),
        )
    }

    /// Resolves the key, preferring `explicit` when it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no source yields a key.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ApiKey> {
        self.resolve_with_source(explicit).map(|(key, _)| key)
    }

    /// Like [`Self::resolve`], also reporting which source won.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no source yields a key.
    pub fn resolve_with_source(&self, explicit: Option<&str>) -> Result<(ApiKey, CredentialSource)> {
        if let Some(key) = explicit.and_then(ApiKey::new) {
            debug!(source = %CredentialSource::Explicit, "resolved API key");
            return Ok((key, CredentialSource::Explicit));
        }

        if let Some(key) = self.env_value.clone().and_then(ApiKey::new) {
            debug!(source = %CredentialSource::Environment, "resolved API key");
            return Ok((key, CredentialSource::Environment));
        }

        if let Some(key) = self
            .credentials_path
            .as_deref()
            .and_then(read_credentials_file)
            .and_then(ApiKey::new)
        {
            debug!(source = %CredentialSource::File, "resolved API key");
            return Ok((key, CredentialSource::File));
        }

        Err(Error::Configuration(
            "no API key found; pass --api-key, set HYPERSTACK_KEY, \
             or add `key = <value>` to ~/.hyperstack/credentials"
                .into(),
        ))
    }
}

/// Default credentials file: `~/.hyperstack/credentials`.
#[must_use]
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hyperstack").join("credentials"))
}

/// Extracts the value of the first `key = <value>` line.
///
/// Whitespace around `=` and around the value is ignored. Lines that do not
/// match, including ones with an empty value, are skipped.
#[must_use]
pub fn parse_credentials(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (name, value) = line.split_once('=')?;
        let value = value.trim();
        (name.trim() == CREDENTIALS_FILE_KEY && !value.is_empty()).then(|| value.to_string())
    })
}

fn read_credentials_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let key = parse_credentials(&content);
            if key.is_none() {
                debug!(path = %path.display(), "credentials file has no key entry");
            }
            key
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "credentials file not readable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn write_credentials(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        std::io::Write::write_all(&mut file, content.as_bytes()).expect("write credentials");
        file
    }

    #[test_case("key = abc123", Some("abc123") ; "canonical line")]
    #[test_case("key=abc123", Some("abc123") ; "no spaces")]
    #[test_case("   key   =   abc123   ", Some("abc123") ; "padded")]
    #[test_case("key = abc123\r", Some("abc123") ; "crlf line ending")]
    #[test_case("# comment\nkey = second-line", Some("second-line") ; "skips leading lines")]
    #[test_case("key = first\nkey = second", Some("first") ; "first match wins")]
    #[test_case("garbage\nkey =\nkey = real", Some("real") ; "empty value skipped")]
    #[test_case("api_key = abc123", None ; "other key name")]
    #[test_case("token: abc123", None ; "no equals sign")]
    #[test_case("", None ; "empty file")]
    fn parse_credentials_lines(content: &str, expected: Option<&str>) {
        assert_eq!(parse_credentials(content).as_deref(), expected);
    }

    #[test]
    fn parse_credentials_keeps_equals_in_value() {
        assert_eq!(parse_credentials("key = a=b=c").as_deref(), Some("a=b=c"));
    }

    #[test]
    fn explicit_key_wins_over_all_sources() {
        let file = write_credentials("key = from-file");
        let resolver = CredentialResolver::new(
            Some("from-env".into()),
            Some(file.path().to_path_buf()),
        );

        let (key, source) = resolver.resolve_with_source(Some("from-flag")).expect("resolve");
        assert_eq!(key.expose(), "from-flag");
        assert_eq!(source, CredentialSource::Explicit);
    }

    #[test]
    fn environment_wins_over_file() {
        let file = write_credentials("key = from-file");
        let resolver = CredentialResolver::new(
            Some("from-env".into()),
            Some(file.path().to_path_buf()),
        );

        let (key, source) = resolver.resolve_with_source(None).expect("resolve");
        assert_eq!(key.expose(), "from-env");
        assert_eq!(source, CredentialSource::Environment);
    }

    #[test]
    fn file_used_when_nothing_else_set() {
        let file = write_credentials("key = from-file\n");
        let resolver = CredentialResolver::new(None, Some(file.path().to_path_buf()));

        let (key, source) = resolver.resolve_with_source(None).expect("resolve");
        assert_eq!(key.expose(), "from-file");
        assert_eq!(source, CredentialSource::File);
    }

    #[test]
    fn empty_explicit_and_env_fall_through() {
        let file = write_credentials("key = from-file");
        let resolver = CredentialResolver::new(Some(String::new()), Some(file.path().to_path_buf()));

        let key = resolver.resolve(Some("")).expect("resolve");
        assert_eq!(key.expose(), "from-file");
    }

    #[test]
    fn no_source_is_configuration_error() {
        let resolver = CredentialResolver::new(None, None);
        let err = resolver.resolve(None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("no API key found"));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolver = CredentialResolver::new(None, Some(dir.path().join("credentials")));
        assert!(matches!(resolver.resolve(None), Err(Error::Configuration(_))));
    }

    #[test]
    fn file_without_key_line_is_configuration_error() {
        let file = write_credentials("[default]\nregion = CANADA-1\n");
        let resolver = CredentialResolver::new(None, Some(file.path().to_path_buf()));
        assert!(matches!(resolver.resolve(None), Err(Error::Configuration(_))));
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("k").is_some());
    }

    #[test]
    fn api_key_debug_redacts_value() {
        let key = ApiKey::new("super-secret").expect("non-empty");
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("super-secret"));
    }

    #[test]
    fn resolver_debug_redacts_env_value() {
        let resolver = CredentialResolver::new(Some("env-secret".into()), None);
        assert!(!format!("{resolver:?}").contains("env-secret"));
    }

    #[test]
    fn default_path_ends_with_hyperstack_credentials() {
        if let Some(path) = default_credentials_path() {
            assert!(path.ends_with(".hyperstack/credentials"));
        }
    }
}
