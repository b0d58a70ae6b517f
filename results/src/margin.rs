// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Hot seats: the most closely contested constituencies, for highlighting on
//! the dashboard.

use std::cmp::Ordering;
use crate::constituency::{Candidate, ConstituencyResult, ConstituencyStatus};

/// A constituency where the top two candidates are within [HOT_MARGIN_PERCENT].
#[derive(Debug,Clone)]
pub struct HotSeat<'a> {
    pub constituency : &'a ConstituencyResult,
    pub leader : &'a Candidate,
    pub runner_up : &'a Candidate,
    /// (leader − runner-up) / leader × 100.
    pub margin_percent : f64,
}

/// At most this many hot seats are reported.
pub const MAX_HOT_SEATS : usize = 6;
/// A race is hot when the top-two margin is under this percentage.
pub const HOT_MARGIN_PERCENT : f64 = 10.0;

/// Find the hot seats in a constituency collection, tightest margin first.
///
/// Only constituencies where counting has started are considered, and a race
/// needs at least two candidates with votes before a margin means anything.
/// Equal margins keep the input order of the collection.
pub fn hot_seats(results:&[ConstituencyResult]) -> Vec<HotSeat<'_>> {
    let mut hot : Vec<HotSeat<'_>> = vec![];
    for constituency in results {
        if constituency.status == ConstituencyStatus::Pending { continue; }
        let mut with_votes : Vec<&Candidate> = constituency.candidates.iter().filter(|c|c.votes>0).collect();
        if with_votes.len() < 2 { continue; }
        with_votes.sort_by(|a,b|b.votes.cmp(&a.votes));
        let leader = with_votes[0];
        let runner_up = with_votes[1];
        // leader.votes>0 is guaranteed by the filter above; the 100 arm is defensive.
        let margin_percent = if leader.votes>0 { ((leader.votes-runner_up.votes) as f64 / leader.votes as f64) * 100.0 } else { 100.0 };
        if margin_percent < HOT_MARGIN_PERCENT {
            hot.push(HotSeat{ constituency, leader, runner_up, margin_percent });
        }
    }
    hot.sort_by(|a,b|a.margin_percent.partial_cmp(&b.margin_percent).unwrap_or(Ordering::Equal));
    hot.truncate(MAX_HOT_SEATS);
    hot
}
