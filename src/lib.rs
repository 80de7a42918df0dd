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
pub mod annotations;
pub mod config;
pub mod crd;
pub mod error;
pub mod filter;
pub mod hash;
pub mod manifest;
pub mod utils;

pub use annotations::{annotations, pod_annotations};
pub use error::{Error, Result};
