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
use crate::filter::AnnotationFilter;
use anyhow::anyhow;
use std::ffi::OsString;

/// Filter of the annotation kubectl stores the last applied object in.
pub const FILTER_LAST_APPLIED_CONFIGURATION: &str =
    r"kubectl\.kubernetes\.io/last-applied-configuration";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperatorConfig {
    /// Regular expressions of annotation keys, which must not be propagated.
    pub annotations_filter: Vec<String>,
}

impl OperatorConfig {
    /// Load the configuration from the process environment.
    ///
    /// * `ANNOTATIONS_FILTER` - whitespace separated list of regular expressions
    /// * `FILTER_LAST_APPLIED` - filter the kubectl "last applied" annotation, defaults to `true`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var_os(name))
    }

    fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut annotations_filter = Vec::new();

        if has_flag(var("FILTER_LAST_APPLIED"), true)? {
            annotations_filter.push(FILTER_LAST_APPLIED_CONFIGURATION.to_string());
        }

        if let Some(filters) = string_var(var("ANNOTATIONS_FILTER"))? {
            annotations_filter.extend(filters.split_whitespace().map(String::from));
        }

        Ok(Self { annotations_filter })
    }

    /// Compile the annotation filter, failing on the first invalid pattern.
    pub fn annotation_filter(&self) -> anyhow::Result<AnnotationFilter> {
        Ok(AnnotationFilter::new(&self.annotations_filter)?)
    }
}

fn string_var(value: Option<OsString>) -> anyhow::Result<Option<String>> {
    value
        .map(|s| s.into_string())
        .transpose()
        .map_err(|err| anyhow!("Invalid value: {}", err.to_string_lossy()))
}

fn has_flag(value: Option<OsString>, default_value: bool) -> anyhow::Result<bool> {
    Ok(string_var(value)?.map_or(default_value, |s| s == "true"))
}
