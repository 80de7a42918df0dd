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
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[kube(
    group = "opentelemetry.io",
    version = "v1beta1",
    kind = "OpenTelemetryCollector",
    shortname = "otelcol",
    namespaced,
    derive = "Default",
    derive = "PartialEq",
    status = "OpenTelemetryCollectorStatus"
)]
#[kube(printcolumn = r#"{"name": "Mode", "jsonPath": ".spec.mode", "type": "string"}"#)]
#[kube(printcolumn = r#"{"name": "Version", "jsonPath": ".status.version", "type": "string"}"#)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenTelemetryCollectorSpec {
    /// The deployment shape of the collector.
    pub mode: Mode,

    /// Number of replicas. Only used by the `deployment` and `statefulset` modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Allow to override the collector image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Annotations which should only be applied to the pods of the collector.
    ///
    /// Other than the annotations of the resource itself, these are not subject to the
    /// annotation filters of the operator.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pod_annotations: BTreeMap<String, String>,

    /// The collector configuration.
    pub config: Config,

    pub observability: ObservabilitySpec,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Deployment,
    #[serde(alias = "daemonSet")]
    DaemonSet,
    #[serde(alias = "statefulSet")]
    StatefulSet,
    Sidecar,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Deployment
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub receivers: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub processors: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exporters: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
    pub service: Service,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    /// The extensions to enable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pipelines: BTreeMap<String, Pipeline>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Pipeline {
    pub receivers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processors: Vec<String>,
    pub exporters: Vec<String>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ObservabilitySpec {
    pub metrics: MetricsConfigSpec,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsConfigSpec {
    /// Create a service monitor for the collector metrics.
    #[serde(skip_serializing_if = "is_default")]
    pub enable_metrics: bool,

    /// Don't add the `prometheus.io/*` scrape annotations.
    #[serde(skip_serializing_if = "is_default")]
    pub disable_prometheus_annotations: bool,
}

fn is_default<T: Default + Eq>(value: &T) -> bool {
    *value == T::default()
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(default)]
pub struct OpenTelemetryCollectorStatus {
    /// The version of the collector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// An optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OpenTelemetryCollector {
    pub fn prometheus_annotations_disabled(&self) -> bool {
        self.spec
            .observability
            .metrics
            .disable_prometheus_annotations
    }
}
