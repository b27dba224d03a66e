use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config::ConfigError;

/// Replace `${VAR_NAME}` placeholders with environment variables.
/// Placeholders without a matching variable are left untouched.
pub fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Treat empty strings and unresolved `${...}` placeholders as absent.
pub fn normalize_secret(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !(v.starts_with("${") && v.ends_with('}')))
}

/// Load text file with encoding detection
pub fn load_text_file_with_guess_encoding(file_path: &Path) -> Result<String, ConfigError> {
    let bytes = fs::read(file_path).map_err(|source| ConfigError::Io {
        path: file_path.display().to_string(),
        source,
    })?;
    Ok(decode_with_guess_encoding(&bytes))
}

/// Decode bytes as UTF-8 (BOM stripped), falling back to GBK.
pub fn decode_with_guess_encoding(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let (cow, _, had_errors) = encoding_rs::GBK.decode(bytes);
    if had_errors {
        debug!("Config is neither UTF-8 nor GBK, decoding lossily");
        return String::from_utf8_lossy(bytes).into_owned();
    }
    cow.into_owned()
}

/// Pick the document format from the file extension: JSON for `.json`
/// and `.jsonld`, YAML for everything else.
pub fn is_json_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.ends_with(".jsonld") || lower.ends_with(".json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_variables() {
        std::env::set_var("BUZZWORD_TEST_SUBST_KEY", "secret-value");
        let out = substitute_env_vars("api_key: ${BUZZWORD_TEST_SUBST_KEY}").unwrap();
        assert_eq!(out, "api_key: secret-value");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let out = substitute_env_vars("api_key: ${BUZZWORD_TEST_DEFINITELY_UNSET}").unwrap();
        assert_eq!(out, "api_key: ${BUZZWORD_TEST_DEFINITELY_UNSET}");
    }

    #[test]
    fn normalize_secret_drops_placeholders_and_blanks() {
        assert_eq!(normalize_secret(None), None);
        assert_eq!(normalize_secret(Some("   ".into())), None);
        assert_eq!(normalize_secret(Some("${FAL_KEY}".into())), None);
        assert_eq!(normalize_secret(Some(" abc ".into())), Some("abc".into()));
    }

    #[test]
    fn decodes_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("黑话".as_bytes());
        assert_eq!(decode_with_guess_encoding(&bytes), "黑话");
    }

    #[test]
    fn decodes_gbk_fallback() {
        let (encoded, _, _) = encoding_rs::GBK.encode("互联网黑话");
        assert!(std::str::from_utf8(&encoded).is_err());
        assert_eq!(decode_with_guess_encoding(&encoded), "互联网黑话");
    }

    #[test]
    fn json_detection_by_extension() {
        assert!(is_json_path("conf.jsonld"));
        assert!(is_json_path("CONF.JSON"));
        assert!(!is_json_path("conf.yaml"));
    }
}
