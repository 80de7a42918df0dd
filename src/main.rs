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
use collector_operator::{
    annotations::{annotations_with, pod_annotations_with},
    config::OperatorConfig,
    crd::OpenTelemetryCollector,
};
use kube::ResourceExt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Read};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    annotations: BTreeMap<String, String>,
    pod_annotations: BTreeMap<String, String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = OperatorConfig::from_env()?;
    log::debug!("Configuration: {:?}", config);
    let filter = config.annotation_filter()?;

    let args: Vec<_> = std::env::args().collect();

    let input: Box<dyn Read> = match args.get(1) {
        Some(name) => {
            log::info!("Reading collector from: {}", name);
            Box::new(File::open(name)?)
        }
        None => Box::new(stdin()),
    };

    let collector: OpenTelemetryCollector = serde_yaml::from_reader(BufReader::new(input))?;
    log::info!("Computing annotations for: {}", collector.name_any());

    let output = Output {
        annotations: annotations_with(&collector, &filter),
        pod_annotations: pod_annotations_with(&collector, &filter)?,
    };

    serde_yaml::to_writer(stdout(), &output)?;

    Ok(())
}
