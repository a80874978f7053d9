/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! End-to-end menu scenarios driven through a simulated event source and
//! recording collaborator fakes.


mod dismissal;
mod wiring;
