//! Query parameter parsing.
//!
//! # Responsibilities
//! - Drop blank `level`/`paths` values left by form submissions
//! - Decide between set-all, bulk and legacy single-name requests
//! - Reject malformed requests before the registry is consulted

use std::collections::{BTreeMap, HashMap};

use crate::control::ChangeRequest;
use crate::error::{ChangeError, EMPTY_NAME_OR_LEVEL, INVALID_PARAMETER_COUNT};
use crate::levels::{parse_level, Level};

/// Reserved key: set every logger.
pub const LEVEL_PARAM: &str = "level";

/// Reserved key: bulk `name:level` list.
pub const PATHS_PARAM: &str = "paths";

/// Flat query parameters, one value per key.
pub type QueryParams = HashMap<String, String>;

/// Collect raw query pairs, keeping the first value of a repeated key.
pub fn collect_params<I>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut params = QueryParams::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// Turn raw parameters into a [`ChangeRequest`].
pub fn parse_request(params: &QueryParams) -> Result<ChangeRequest, ChangeError> {
    let mut remaining = params.iter().filter(|(key, value)| {
        !(value.is_empty() && matches!(key.as_str(), LEVEL_PARAM | PATHS_PARAM))
    });

    let (key, value) = match (remaining.next(), remaining.next()) {
        (None, _) => return Ok(ChangeRequest::NoOp),
        (Some(param), None) => param,
        (Some(_), Some(_)) => return Err(ChangeError::InvalidArgument(INVALID_PARAMETER_COUNT)),
    };

    match key.as_str() {
        LEVEL_PARAM => Ok(ChangeRequest::SetAll(parse_level(value)?)),
        PATHS_PARAM => parse_paths(value).map(ChangeRequest::SetNamed),
        name => {
            let level = parse_level(value)?;
            Ok(ChangeRequest::SetNamed(BTreeMap::from([(name.to_string(), level)])))
        }
    }
}

/// Parse `name1:level1,name2:level2,...`.
///
/// Each entry is split on its first `:` only, so `a:b:info` names logger
/// `a` with level `b:info`.
fn parse_paths(value: &str) -> Result<BTreeMap<String, Level>, ChangeError> {
    let mut changes = BTreeMap::new();

    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, level) = entry.split_once(':').unwrap_or((entry, ""));
        if name.is_empty() || level.is_empty() {
            return Err(ChangeError::InvalidArgument(EMPTY_NAME_OR_LEVEL));
        }
        changes.insert(name.to_string(), parse_level(level)?);
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn named(pairs: &[(&str, Level)]) -> ChangeRequest {
        ChangeRequest::SetNamed(pairs.iter().map(|(n, l)| (n.to_string(), *l)).collect())
    }

    #[test]
    fn test_no_params_is_noop() {
        assert_eq!(parse_request(&params(&[])), Ok(ChangeRequest::NoOp));
    }

    #[test]
    fn test_blank_reserved_keys_are_dropped() {
        let p = params(&[("level", ""), ("paths", "")]);
        assert_eq!(parse_request(&p), Ok(ChangeRequest::NoOp));

        let p = params(&[("level", ""), ("paths", "a:debug")]);
        assert_eq!(parse_request(&p), Ok(named(&[("a", Level::Debug)])));

        let p = params(&[("level", "error"), ("paths", "")]);
        assert_eq!(parse_request(&p), Ok(ChangeRequest::SetAll(Level::Error)));
    }

    #[test]
    fn test_too_many_params() {
        let p = params(&[("level", "info"), ("paths", "a:info")]);
        assert_eq!(
            parse_request(&p),
            Err(ChangeError::InvalidArgument(INVALID_PARAMETER_COUNT))
        );

        // Counted before any value is looked at.
        let p = params(&[("a", "nonsense"), ("b", "")]);
        assert_eq!(
            parse_request(&p),
            Err(ChangeError::InvalidArgument(INVALID_PARAMETER_COUNT))
        );
    }

    #[test]
    fn test_level_param() {
        assert_eq!(
            parse_request(&params(&[("level", "debug")])),
            Ok(ChangeRequest::SetAll(Level::Debug))
        );
        assert_eq!(
            parse_request(&params(&[("level", "loud")])),
            Err(ChangeError::InvalidLevel("loud".into()))
        );
    }

    #[test]
    fn test_paths_param() {
        let p = params(&[("paths", " a:info , b:warning ,, ")]);
        assert_eq!(
            parse_request(&p),
            Ok(named(&[("a", Level::Info), ("b", Level::Warning)]))
        );
    }

    #[test]
    fn test_paths_later_duplicates_win() {
        let p = params(&[("paths", "a:info,a:trace")]);
        assert_eq!(parse_request(&p), Ok(named(&[("a", Level::Trace)])));
    }

    #[test]
    fn test_paths_empty_halves() {
        for value in ["a:info,b:", ":info", "a", "a:info,b"] {
            assert_eq!(
                parse_request(&params(&[("paths", value)])),
                Err(ChangeError::InvalidArgument(EMPTY_NAME_OR_LEVEL)),
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_paths_bad_level() {
        let p = params(&[("paths", "a:info,b:loud")]);
        assert_eq!(parse_request(&p), Err(ChangeError::InvalidLevel("loud".into())));
    }

    #[test]
    fn test_paths_split_on_first_colon_only() {
        let p = params(&[("paths", "a:b:info")]);
        assert_eq!(parse_request(&p), Err(ChangeError::InvalidLevel("b:info".into())));
    }

    #[test]
    fn test_paths_only_separators() {
        let p = params(&[("paths", " , ,")]);
        assert_eq!(parse_request(&p), Ok(named(&[])));
    }

    #[test]
    fn test_legacy_single_name() {
        assert_eq!(
            parse_request(&params(&[("router", "critical")])),
            Ok(named(&[("router", Level::Critical)]))
        );
        assert_eq!(
            parse_request(&params(&[("router", "")])),
            Err(ChangeError::InvalidLevel(String::new()))
        );
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let pairs = [("a", "info"), ("a", "error"), ("level", "debug"), ("level", "off")]
            .map(|(k, v)| (k.to_string(), v.to_string()));
        assert_eq!(collect_params(pairs), params(&[("a", "info"), ("level", "debug")]));
    }
}
