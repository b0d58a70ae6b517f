// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! The latest scraped results. Each refresh replaces the whole value; nothing
//! is ever updated in place, so readers always see a consistent snapshot.

use std::sync::{Arc, RwLock};
use results::constituency::ConstituencyResult;
use results::party::PartyRegistry;
use results::seat_tally::{derive_snapshot, Snapshot};

/// One consistent view of the count: the constituency list plus everything
/// derived from it.
#[derive(Clone)]
pub struct LiveData {
    pub constituencies : Arc<Vec<ConstituencyResult>>,
    pub snapshot : Snapshot,
    pub registry : PartyRegistry,
}

pub struct SharedState {
    inner : RwLock<LiveData>,
}

impl SharedState {
    /// State before the first successful refresh: no constituencies, an empty
    /// tally, a blank timestamp.
    pub fn empty() -> SharedState {
        SharedState {
            inner: RwLock::new(LiveData {
                constituencies: Arc::new(vec![]),
                snapshot: derive_snapshot(&[],String::new()),
                registry: PartyRegistry::default(),
            })
        }
    }

    /// Swap in a freshly parsed constituency list, recomputing the snapshot
    /// and party registry from scratch.
    pub fn replace(&self,constituencies:Vec<ConstituencyResult>,last_updated:String) {
        let snapshot = derive_snapshot(&constituencies,last_updated);
        let registry = PartyRegistry::build(&constituencies);
        let fresh = LiveData { constituencies: Arc::new(constituencies), snapshot, registry };
        *self.inner.write().unwrap() = fresh;
    }

    pub fn current(&self) -> LiveData {
        self.inner.read().unwrap().clone()
    }
}
