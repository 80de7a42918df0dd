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
use crate::error::{Result, Serialization};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use snafu::ResultExt;

/// Tracks configuration content and computes a hash over it.
#[derive(Clone, Default)]
pub struct ConfigTracker {
    hasher: Sha256,
}

impl ConfigTracker {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn track<D>(&mut self, data: D)
    where
        D: AsRef<[u8]>,
    {
        self.hasher.update(data);
    }

    /// The lowercase, hex encoded SHA-256 of everything tracked so far.
    pub fn current_hash(&self) -> String {
        format!("{:x}", self.hasher.clone().finalize())
    }
}

/// Hash the canonical JSON form of a value.
pub fn config_hash<T>(config: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut tracker = ConfigTracker::new();
    tracker.track(canonical_json(config)?);
    Ok(tracker.current_hash())
}

/// Serialize a value as compact JSON, with the keys of every object sorted.
pub fn canonical_json<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value).context(Serialization)?;
    let mut buffer = Vec::new();
    write_canonical(&mut buffer, &value)?;
    Ok(buffer)
}

fn write_canonical(out: &mut Vec<u8>, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push(b'{');
            for (i, (k, v)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, k).context(Serialization)?;
                out.push(b':');
                write_canonical(out, v)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(out, v)?;
            }
            out.push(b']');
        }
        scalar => serde_json::to_writer(&mut *out, scalar).context(Serialization)?,
    }
    Ok(())
}
