//! Resolution of a requested BCP-47 tag to the most specific stored locale.
//!
//! `az-Arab-IQ` probes `az-Arab-IQ`, then `az-Arab`, then `az`, and returns
//! the first id that exists. Trailing subtags are dropped one at a time and
//! nothing else is rewritten: no case folding, no script inference, no
//! default locale.

use async_trait::async_trait;
use polyglot_error::{service::ServiceError, ServiceResult, StorageResult};
use tracing::{debug, instrument};

/// Existence check against the locale table.
#[async_trait]
pub trait LocaleProbe: Send + Sync {
    async fn locale_exists(&self, id: &str) -> StorageResult<bool>;
}

/// Candidate ids for `tag`, most specific first.
///
/// A tag with N subtags yields exactly N candidates: the tag itself and each
/// prefix down to the primary language subtag.
pub fn candidates(tag: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut current = tag;
    loop {
        out.push(current);
        match current.rfind('-') {
            Some(idx) if idx > 0 => current = &current[..idx],
            _ => break,
        }
    }
    out
}

/// Resolve `tag` to an existing locale id.
///
/// Returns `NotFound` when the input is blank or when no candidate exists.
/// Probe failures are returned as `Transient`.
#[instrument(level = "debug", skip(probe))]
pub async fn resolve_locale_id<P>(probe: &P, tag: &str) -> ServiceResult<String>
where
    P: LocaleProbe + ?Sized,
{
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(ServiceError::NotFound("locale".into()));
    }

    for candidate in candidates(tag) {
        if probe.locale_exists(candidate).await? {
            debug!(requested = tag, resolved = candidate, "locale resolved");
            return Ok(candidate.to_string());
        }
    }

    Err(ServiceError::NotFound(format!("locale {tag}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_error::storage::StorageError;
    use std::{
        collections::HashSet,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    struct MemoryProbe {
        ids: HashSet<&'static str>,
        probes: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl MemoryProbe {
        fn new(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.iter().copied().collect(),
                probes: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LocaleProbe for MemoryProbe {
        async fn locale_exists(&self, id: &str) -> StorageResult<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(id.to_string());
            Ok(self.ids.contains(id))
        }
    }

    struct BrokenProbe;

    #[async_trait]
    impl LocaleProbe for BrokenProbe {
        async fn locale_exists(&self, _: &str) -> StorageResult<bool> {
            Err(StorageError::StorageUnavailable)
        }
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates("az-Arab-IQ"), vec!["az-Arab-IQ", "az-Arab", "az"]);
        assert_eq!(candidates("en"), vec!["en"]);
    }

    #[tokio::test]
    async fn test_exact_match_probes_once() {
        let probe = MemoryProbe::new(&["en", "en-GB"]);
        assert_eq!(resolve_locale_id(&probe, "en-GB").await.unwrap(), "en-GB");
        assert_eq!(probe.probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_falls_back_by_trailing_subtag() {
        let probe = MemoryProbe::new(&["az", "az-Arab"]);
        assert_eq!(
            resolve_locale_id(&probe, "az-Arab-IQ").await.unwrap(),
            "az-Arab"
        );
        assert_eq!(
            *probe.seen.lock().unwrap(),
            vec!["az-Arab-IQ".to_string(), "az-Arab".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_tag_is_not_found_after_n_probes() {
        let probe = MemoryProbe::new(&["en"]);
        let err = resolve_locale_id(&probe, "fr-Latn-CA").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(probe.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_no_case_normalization() {
        let probe = MemoryProbe::new(&["en-GB"]);
        let err = resolve_locale_id(&probe, "en-gb").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_input_never_probes() {
        let probe = MemoryProbe::new(&["en"]);
        for tag in ["", "   "] {
            let err = resolve_locale_id(&probe, tag).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound(_)));
        }
        assert_eq!(probe.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_ignored() {
        let probe = MemoryProbe::new(&["az-Arab"]);
        assert_eq!(
            resolve_locale_id(&probe, " az-Arab-IQ\n").await.unwrap(),
            "az-Arab"
        );
        assert_eq!(
            *probe.seen.lock().unwrap(),
            vec!["az-Arab-IQ".to_string(), "az-Arab".to_string()]
        );
    }

    #[tokio::test]
    async fn test_probe_failure_is_transient() {
        let err = resolve_locale_id(&BrokenProbe, "en").await.unwrap_err();
        assert!(matches!(err, ServiceError::Transient(_)));
    }
}
