// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! The refresh loop: periodically re-download the commission feed, replace
//! the shared state wholesale, and push the new data to WebSocket clients.

use std::time::Duration;
use actix::Addr;
use actix_web::web;
use chrono::Utc;
use ecn::archive::zero_votes;
use ecn::download::UpstreamSource;
use crate::state::SharedState;
use crate::ws::{constituencies_message, snapshot_message, Broadcaster, Publish};

/// Start the background refresh thread.
///
/// A failed refresh keeps the previous data; the dashboard sees a stale view
/// rather than an error. In archive mode the thread stops after the first
/// successful load, since the pre-election snapshot doesn't change.
pub fn spawn_refresh_loop(state:web::Data<SharedState>,broadcaster:Addr<Broadcaster>,source:UpstreamSource,interval:Duration,archive:bool) {
    std::thread::spawn(move|| {
        loop {
            match source.fetch_constituencies() {
                Ok(constituencies) => {
                    let now = Utc::now().to_rfc3339();
                    let constituencies = if archive { zero_votes(constituencies,&now) } else { constituencies };
                    state.replace(constituencies,now);
                    let data = state.current();
                    log::info!("refreshed: {} constituencies, {} declared",data.constituencies.len(),data.snapshot.declared_seats);
                    broadcaster.do_send(Publish(snapshot_message(&data)));
                    broadcaster.do_send(Publish(constituencies_message(&data)));
                    if archive { return; }
                }
                Err(e) => {
                    log::warn!("refresh failed, keeping previous data: {}",e);
                }
            }
            std::thread::sleep(interval);
        }
    });
}
