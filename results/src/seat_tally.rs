// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Seat tallies. The House of Representatives has 275 seats: 165 directly
//! elected (first past the post, one per constituency) and 110 filled
//! proportionally to the nationwide party vote.

use std::collections::BTreeMap;
use serde::{Serialize,Deserialize};
use crate::constituency::{Candidate, ConstituencyResult, ConstituencyStatus};

/// Seats in the House of Representatives.
pub const TOTAL_SEATS : u32 = 275;
/// Seats filled by proportional representation.
pub const PR_SEAT_POOL : u32 = 110;

/// Seats won so far by one party.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SeatEntry {
    pub fptp : u32,
    pub pr : u32,
}

/// Party identifier → seats. A BTreeMap so serialization order is stable.
pub type SeatTally = BTreeMap<String,SeatEntry>;

/// Overall state of the count, as served at `/api/snapshot` and written to
/// `snapshot.json`.
#[derive(Debug,Serialize,Deserialize,Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total_seats : u32,
    pub declared_seats : u32,
    pub last_updated : String,
    pub seat_tally : SeatTally,
}

/// The first-past-the-post winner of a constituency: the flagged winner if the
/// upstream feed marked one, otherwise the candidate with the most votes.
/// Equal top vote counts go to the earlier candidate in upstream order.
pub fn fptp_winner(constituency:&ConstituencyResult) -> Option<&Candidate> {
    if let Some(flagged) = constituency.candidates.iter().find(|c|c.is_winner) { return Some(flagged); }
    let mut best : Option<&Candidate> = None;
    for candidate in &constituency.candidates {
        if best.map_or(true,|b|candidate.votes>b.votes) { best=Some(candidate); }
    }
    best
}

/// Derive the full seat tally from a constituency collection.
///
/// FPTP pass: every DECLARED constituency contributes one seat to its winner's
/// party. PR pass: the 110-seat pool is split by nationwide vote share across
/// all constituencies regardless of status, rounding each party's share to the
/// nearest whole seat independently (so the pr column may not sum to exactly
/// 110). If no votes have been cast anywhere, every pr value is 0.
///
/// Recomputed from scratch on every call; no state is kept between calls.
pub fn derive_seat_tally(results:&[ConstituencyResult]) -> SeatTally {
    let mut tally : SeatTally = BTreeMap::new();
    for constituency in results {
        for candidate in &constituency.candidates {
            tally.entry(candidate.party_id.clone()).or_default();
        }
    }

    for constituency in results {
        if constituency.status != ConstituencyStatus::Declared { continue; }
        if let Some(winner) = fptp_winner(constituency) {
            tally.entry(winner.party_id.clone()).or_default().fptp += 1;
        }
    }

    let mut total_votes : u64 = 0;
    let mut vote_share : BTreeMap<&str,u64> = BTreeMap::new();
    for constituency in results {
        for candidate in &constituency.candidates {
            *vote_share.entry(candidate.party_id.as_str()).or_insert(0) += candidate.votes;
            total_votes += candidate.votes;
        }
    }
    if total_votes > 0 {
        for (party_id,entry) in tally.iter_mut() {
            let votes = vote_share.get(party_id.as_str()).copied().unwrap_or(0);
            entry.pr = ((votes as f64 / total_votes as f64) * PR_SEAT_POOL as f64).round() as u32;
        }
    }
    tally
}

/// Number of constituencies whose result has been declared.
pub fn declared_seats(results:&[ConstituencyResult]) -> u32 {
    results.iter().filter(|r|r.status==ConstituencyStatus::Declared).count() as u32
}

/// Derive a snapshot from a constituency collection. The timestamp is supplied
/// by the caller so this stays a pure function of its inputs.
pub fn derive_snapshot(results:&[ConstituencyResult],last_updated:String) -> Snapshot {
    Snapshot {
        total_seats: TOTAL_SEATS,
        declared_seats: declared_seats(results),
        last_updated,
        seat_tally: derive_seat_tally(results),
    }
}
