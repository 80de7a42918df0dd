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
//! Annotations of the collector workload and its pods.
//!
//! The annotations are built from layers, applied in a fixed order, later layers
//! overriding earlier ones:
//!
//! 1. [`Layer::Defaults`]: the Prometheus scrape annotations, unless disabled
//! 2. [`Layer::User`]: the annotations of the collector resource
//! 3. [`Layer::PodSpecific`]: the `podAnnotations` of the spec (pods only)
//! 4. [`Layer::Reserved`]: the configuration hash (pods only)
//!
//! The annotation filter is applied after the user layer, so it affects defaults and user
//! annotations, but not the pod specific ones.

use crate::{crd::OpenTelemetryCollector, error::Result, filter::AnnotationFilter, hash};
use kube::ResourceExt;
use log::debug;
use std::collections::BTreeMap;

pub const ANNOTATION_PROMETHEUS_SCRAPE: &str = "prometheus.io/scrape";
pub const ANNOTATION_PROMETHEUS_PORT: &str = "prometheus.io/port";
pub const ANNOTATION_PROMETHEUS_PATH: &str = "prometheus.io/path";
pub const ANNOTATION_CONFIG_HASH: &str = "opentelemetry-operator-config/sha256";

const PROMETHEUS_ANNOTATIONS: &[&str] = &[
    ANNOTATION_PROMETHEUS_SCRAPE,
    ANNOTATION_PROMETHEUS_PORT,
    ANNOTATION_PROMETHEUS_PATH,
];

const NO_ANNOTATIONS: &[&str] = &[];

pub const fn default_prometheus_port() -> u16 {
    8888
}

pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// A source of annotations, in the order of precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Defaults,
    User,
    PodSpecific,
    Reserved,
}

struct LayeredAnnotations {
    last: Option<Layer>,
    suppressed: &'static [&'static str],
    values: BTreeMap<String, String>,
}

impl LayeredAnnotations {
    fn new(suppressed: &'static [&'static str]) -> Self {
        Self {
            last: None,
            suppressed,
            values: BTreeMap::new(),
        }
    }

    fn layer<I, K, V>(mut self, layer: Layer, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        debug_assert!(
            self.last.map_or(true, |last| last < layer),
            "Layer {:?} applied after {:?}",
            layer,
            self.last
        );
        self.last = Some(layer);

        for (k, v) in entries {
            let k = k.into();
            if self.suppressed.contains(&k.as_str()) {
                debug!("Suppressing annotation '{}' of layer {:?}", k, layer);
                continue;
            }
            self.values.insert(k, v.into());
        }

        self
    }

    fn filtered(mut self, filter: &AnnotationFilter) -> Self {
        if !filter.is_empty() {
            self.values.retain(|k, _| {
                let filtered = filter.is_filtered(k);
                if filtered {
                    debug!("Filtering annotation '{}'", k);
                }
                !filtered
            });
        }
        self
    }

    fn into_annotations(self) -> BTreeMap<String, String> {
        self.values
    }
}

fn default_annotations() -> Vec<(&'static str, String)> {
    vec![
        (ANNOTATION_PROMETHEUS_SCRAPE, "true".to_string()),
        (
            ANNOTATION_PROMETHEUS_PORT,
            default_prometheus_port().to_string(),
        ),
        (ANNOTATION_PROMETHEUS_PATH, DEFAULT_METRICS_PATH.to_string()),
    ]
}

fn object_layers(
    collector: &OpenTelemetryCollector,
    filter: &AnnotationFilter,
) -> LayeredAnnotations {
    let (suppressed, defaults) = if collector.prometheus_annotations_disabled() {
        (PROMETHEUS_ANNOTATIONS, vec![])
    } else {
        (NO_ANNOTATIONS, default_annotations())
    };

    LayeredAnnotations::new(suppressed)
        .layer(Layer::Defaults, defaults)
        .layer(Layer::User, collector.annotations())
        .filtered(filter)
}

/// Annotations for the metadata of the collector workload.
pub fn annotations<S>(
    collector: &OpenTelemetryCollector,
    filters: &[S],
) -> Result<BTreeMap<String, String>>
where
    S: AsRef<str>,
{
    let filter = AnnotationFilter::new(filters)?;
    Ok(annotations_with(collector, &filter))
}

/// Annotations for the metadata of the collector pods.
pub fn pod_annotations<S>(
    collector: &OpenTelemetryCollector,
    filters: &[S],
) -> Result<BTreeMap<String, String>>
where
    S: AsRef<str>,
{
    let filter = AnnotationFilter::new(filters)?;
    pod_annotations_with(collector, &filter)
}

/// Same as [`annotations`], using an already compiled filter.
pub fn annotations_with(
    collector: &OpenTelemetryCollector,
    filter: &AnnotationFilter,
) -> BTreeMap<String, String> {
    object_layers(collector, filter).into_annotations()
}

/// Same as [`pod_annotations`], using an already compiled filter.
pub fn pod_annotations_with(
    collector: &OpenTelemetryCollector,
    filter: &AnnotationFilter,
) -> Result<BTreeMap<String, String>> {
    // the whole spec is hashed, so that any change of it rolls out new pods
    let config_hash = hash::config_hash(&collector.spec)?;
    debug!(
        "Configuration hash of '{}': {}",
        collector.name_any(),
        config_hash
    );

    Ok(object_layers(collector, filter)
        .layer(Layer::PodSpecific, &collector.spec.pod_annotations)
        .layer(
            Layer::Reserved,
            vec![(ANNOTATION_CONFIG_HASH, config_hash)],
        )
        .into_annotations())
}
