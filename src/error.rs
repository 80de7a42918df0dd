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
use snafu::Snafu;

/// Errors computing the annotations of a collector.
///
/// Both kinds abort the whole computation, no partial annotation set is ever returned.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum Error {
    /// An annotation filter is not a valid regular expression.
    #[snafu(display("Invalid annotation filter '{}': {}", pattern, source))]
    InvalidFilter {
        pattern: String,
        source: regex::Error,
    },
    /// The configuration could not be serialized for hashing.
    #[snafu(display("Failed to serialize configuration: {}", source))]
    Serialization { source: serde_json::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
