/*
 * Copyright (c) 2020, 2021 Red Hat Inc.
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Eclipse Public License 2.0 which is available at
 * http://www.eclipse.org/legal/epl-2.0
 *
 * SPDX-License-Identifier: EPL-2.0
 */
use crate::error::{InvalidFilter, Result};
use regex::Regex;
use snafu::ResultExt;

/// A set of regular expressions, excluding annotation keys.
///
/// Patterns are regular expressions, not globs, and must match the whole key.
#[derive(Clone, Debug, Default)]
pub struct AnnotationFilter {
    patterns: Vec<Regex>,
}

impl AnnotationFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Check if the key matches any of the patterns.
    pub fn is_filtered(&self, key: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(key))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Check a single key against a list of patterns, compiling them for this call only.
pub fn is_filtered<S>(key: &str, patterns: &[S]) -> Result<bool>
where
    S: AsRef<str>,
{
    Ok(AnnotationFilter::new(patterns)?.is_filtered(key))
}

fn compile(pattern: &str) -> Result<Regex> {
    // validate the pattern on its own, wrapping it may turn a broken pattern into a valid one
    Regex::new(pattern).context(InvalidFilter { pattern })?;
    Regex::new(&format!("^(?:{})$", pattern)).context(InvalidFilter { pattern })
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    #[case(r".*\.bar\.io", "test.bar.io", true)]
    #[case(r".*\.bar\.io", "test.io/port", false)]
    #[case(r".*\.bar\.io", "test.io/path", false)]
    #[case(r"bar\.io", "test.bar.io", false)]
    #[case(r"test", "test.io/port", false)]
    #[case(r"prometheus\.io/.*", "prometheus.io/scrape", true)]
    #[case(r"Test\.io/port", "test.io/port", false)]
    #[case(r"a|b", "a", true)]
    #[case(r"a|b", "ab", false)]
    fn test_whole_key_match(#[case] pattern: &str, #[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_filtered(key, &[pattern]).unwrap(), expected);
    }

    #[test]
    fn test_any_pattern_matches() {
        let filter = AnnotationFilter::new(vec!["foo", r"bar\.io/.*"]).unwrap();
        assert!(filter.is_filtered("bar.io/x"));
        assert!(filter.is_filtered("foo"));
        assert!(!filter.is_filtered("baz"));
    }

    #[test]
    fn test_empty() {
        let filter = AnnotationFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.is_filtered("anything"));
        assert!(!filter.is_filtered(""));
    }

    #[test]
    fn test_glob_is_not_a_pattern() {
        match is_filtered("test.bar.io", &["*.bar.io"]) {
            Err(Error::InvalidFilter { pattern, .. }) => assert_eq!(pattern, "*.bar.io"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_names_offending_pattern() {
        let err = AnnotationFilter::new(vec!["valid", "broken(", "also-valid"]).unwrap_err();
        match &err {
            Error::InvalidFilter { pattern, .. } => assert_eq!(pattern, "broken("),
            other => panic!("Unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("broken("));
    }

    #[test]
    fn test_no_anchor_escape() {
        // valid only once wrapped into a group
        assert!(is_filtered("a", &["a)|(b"]).is_err());
    }
}
