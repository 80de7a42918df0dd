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
use crate::{
    annotations::{annotations_with, pod_annotations_with},
    crd::OpenTelemetryCollector,
    error::Result,
    filter::AnnotationFilter,
    utils::UseOrCreate,
};
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use log::debug;

/// Apply the annotations of a collector to its deployment, and the deployment's pod template.
///
/// Annotations already present on the deployment are kept, unless they get overridden.
/// Nothing is modified if computing the annotations fails.
pub fn apply_annotations(
    collector: &OpenTelemetryCollector,
    deployment: &mut Deployment,
    filter: &AnnotationFilter,
) -> Result<()> {
    let annotations = annotations_with(collector, filter);
    let pod_annotations = pod_annotations_with(collector, filter)?;

    debug!(
        "Applying annotations to '{}' - annotations: {:?}, pod annotations: {:?}",
        deployment.name_any(),
        annotations,
        pod_annotations
    );

    deployment
        .metadata
        .annotations
        .use_or_create(|a| a.extend(annotations));

    deployment.spec.use_or_create(|spec| {
        spec.template.metadata.use_or_create(|m| {
            m.annotations.use_or_create(|a| a.extend(pod_annotations));
        });
    });

    Ok(())
}
