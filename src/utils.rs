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

/// Work with an optional value, creating the default value if it is missing.
pub trait UseOrCreate<T> {
    fn use_or_create<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

impl<T> UseOrCreate<T> for Option<T>
where
    T: Default,
{
    fn use_or_create<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(self.get_or_insert_with(Default::default))
    }
}
