// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device status records.
//!
//! The vendor API reports device state as a small record of loosely
//! typed fields. This module provides the typed view over it:
//! [`ThingStatus`] parses the raw record and derives the climate
//! properties, [`StatusSnapshot`] stamps a record with its arrival
//! time, and [`ThingDescription`] is the registration record the host
//! platform hands to setup.

mod record;
mod thing;

pub use record::{StatusSnapshot, ThingStatus};
pub use thing::ThingDescription;
