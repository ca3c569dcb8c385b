// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error-to-value substitution declared by each command

use crate::error::Error;
use cloudstack_api::Fallback;

/// Whether `fallback` turns `error` into a default value
pub fn fallback_applies(fallback: Fallback, error: &Error) -> bool {
    match fallback {
        Fallback::Propagate => false,
        Fallback::EmptyListOnNotFound | Fallback::NoneOnNotFound | Fallback::UnitOnNotFound => {
            error.is_not_found()
        }
        Fallback::NoneOn403Or404Or500 => {
            error.is_not_found() || matches!(error.status(), Some(403 | 404 | 500))
        }
    }
}

/// Replace a fallback-eligible error with `default()`
pub(crate) fn recover<T>(
    fallback: Fallback,
    result: Result<T, Error>,
    default: impl FnOnce() -> T,
) -> Result<T, Error> {
    match result {
        Err(e) if fallback_applies(fallback, &e) => {
            tracing::debug!(error = %e, ?fallback, "substituting fallback value");
            Ok(default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, classify};

    fn api_error(status: u16, text: &str) -> Error {
        Error::Api(ApiError {
            command: "listVolumes".to_string(),
            status,
            error_code: Some(i32::from(status)),
            cs_error_code: None,
            text: text.to_string(),
            kind: classify(status, text),
        })
    }

    #[test]
    fn test_propagate_never_applies() {
        assert!(!fallback_applies(Fallback::Propagate, &api_error(404, "")));
    }

    #[test]
    fn test_not_found_fallbacks() {
        let missing = api_error(431, "entity does not exist");
        let invalid = api_error(431, "invalid zone");
        for fallback in [
            Fallback::EmptyListOnNotFound,
            Fallback::NoneOnNotFound,
            Fallback::UnitOnNotFound,
        ] {
            assert!(fallback_applies(fallback, &missing));
            assert!(fallback_applies(fallback, &api_error(404, "")));
            assert!(!fallback_applies(fallback, &invalid));
            assert!(!fallback_applies(fallback, &api_error(500, "")));
        }
    }

    #[test]
    fn test_403_404_500_fallback() {
        let fallback = Fallback::NoneOn403Or404Or500;
        assert!(fallback_applies(fallback, &api_error(403, "")));
        assert!(fallback_applies(fallback, &api_error(404, "")));
        assert!(fallback_applies(fallback, &api_error(500, "")));
        assert!(fallback_applies(fallback, &api_error(431, "does not exist")));
        assert!(!fallback_applies(fallback, &api_error(530, "")));
        assert!(!fallback_applies(fallback, &api_error(401, "")));
    }

    #[test]
    fn test_recover_substitutes_default() {
        let result: Result<Vec<u32>, Error> = Err(api_error(404, ""));
        let recovered = recover(Fallback::EmptyListOnNotFound, result, Vec::new).unwrap();
        assert!(recovered.is_empty());

        let result: Result<Vec<u32>, Error> = Err(api_error(401, ""));
        assert!(recover(Fallback::EmptyListOnNotFound, result, Vec::new).is_err());
    }
}
