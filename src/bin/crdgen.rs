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
use collector_operator::crd::OpenTelemetryCollector;
use kube::CustomResourceExt;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<_> = std::env::args().collect();

    let mut output: BufWriter<Box<dyn Write>> = BufWriter::new(match args.get(1) {
        Some(name) => {
            log::info!("Writing output to: {}", name);
            Box::new(File::create(name)?)
        }
        None => Box::new(stdout()),
    });

    write!(
        &mut output,
        "{}",
        serde_yaml::to_string(&OpenTelemetryCollector::crd())?
    )?;
    output.flush()?;

    Ok(())
}
