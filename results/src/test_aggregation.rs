// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.


//! Tests of the pure aggregation functions against small hand-built contests.


#[cfg(test)]
mod tests {
    use crate::constituency::{Candidate, ConstituencyResult, ConstituencyStatus, Gender, Province};
    use crate::margin::{hot_seats, HOT_MARGIN_PERCENT, MAX_HOT_SEATS};
    use crate::party::{PartyRegistry, INDEPENDENT_PARTY_ID};
    use crate::seat_tally::{declared_seats, derive_seat_tally, derive_snapshot, fptp_winner, PR_SEAT_POOL, TOTAL_SEATS};

    fn candidate(id:u64,party_id:&str,party_name:&str,votes:u64,is_winner:bool) -> Candidate {
        Candidate {
            candidate_id: id,
            name: format!("Candidate {}",id),
            name_np: format!("उम्मेदवार {}",id),
            party_id: party_id.to_string(),
            party_name: party_name.to_string(),
            votes,
            gender: Gender::M,
            is_winner,
            age: None, father_name: None, spouse_name: None,
            qualification: None, institution: None, experience: None, address: None,
        }
    }

    fn constituency(seat:u32,status:ConstituencyStatus,candidates:Vec<Candidate>) -> ConstituencyResult {
        let votes_cast = candidates.iter().map(|c|c.votes).sum();
        ConstituencyResult {
            province: Province::Bagmati,
            district: "Kathmandu".to_string(),
            district_np: "काठमाडौँ".to_string(),
            code: format!("3-काठमाडौँ-{}",seat),
            name: format!("Kathmandu-{}",seat),
            name_np: format!("काठमाडौँ क्षेत्र नं. {}",seat),
            status,
            last_updated: "2026-03-05T00:00:00Z".to_string(),
            candidates,
            votes_cast,
            total_voters: None,
        }
    }

    #[test]
    fn fptp_pass_counts_one_seat_per_declared_constituency() {
        // Three declared seats won by X, X, Y.
        let results = vec![
            constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"X","दल X",500,true),candidate(2,"Y","दल Y",300,false)]),
            constituency(2,ConstituencyStatus::Declared,vec![candidate(3,"X","दल X",800,true),candidate(4,"Y","दल Y",100,false)]),
            constituency(3,ConstituencyStatus::Declared,vec![candidate(5,"Y","दल Y",450,true),candidate(6,"X","दल X",440,false)]),
            constituency(4,ConstituencyStatus::Counting,vec![candidate(7,"X","दल X",10,false),candidate(8,"Y","दल Y",20,false)]),
        ];
        let tally = derive_seat_tally(&results);
        assert_eq!(tally["X"].fptp,2);
        assert_eq!(tally["Y"].fptp,1);
        let total_fptp : u32 = tally.values().map(|e|e.fptp).sum();
        assert_eq!(total_fptp,declared_seats(&results));
    }

    #[test]
    fn unflagged_declared_seat_goes_to_top_vote_getter() {
        let results = vec![
            constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"A","दल A",500,false),candidate(2,"B","दल B",300,false)]),
        ];
        let winner = fptp_winner(&results[0]).unwrap();
        assert_eq!(winner.party_id,"A");
        assert_eq!(derive_seat_tally(&results)["A"].fptp,1);
    }

    #[test]
    fn fptp_tie_goes_to_earlier_candidate() {
        let seat = constituency(1,ConstituencyStatus::Declared,vec![
            candidate(1,"A","दल A",400,false),
            candidate(2,"B","दल B",400,false),
        ]);
        assert_eq!(fptp_winner(&seat).unwrap().candidate_id,1);
    }

    #[test]
    fn flagged_winner_beats_higher_vote_count() {
        // The upstream winner marker is authoritative even when another
        // candidate shows more votes mid-count.
        let seat = constituency(1,ConstituencyStatus::Declared,vec![
            candidate(1,"A","दल A",500,false),
            candidate(2,"B","दल B",450,true),
        ]);
        assert_eq!(fptp_winner(&seat).unwrap().party_id,"B");
    }

    #[test]
    fn pr_pool_is_split_by_vote_share_with_independent_rounding() {
        // 60/40 split of the vote → 66/44 of the 110 PR seats.
        let results = vec![
            constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"A","दल A",600,true),candidate(2,"B","दल B",400,false)]),
        ];
        let tally = derive_seat_tally(&results);
        assert_eq!(tally["A"].pr,66);
        assert_eq!(tally["B"].pr,44);
        assert_eq!(tally["A"].pr+tally["B"].pr,PR_SEAT_POOL);
    }

    #[test]
    fn pr_values_are_zero_when_no_votes_cast() {
        let results = vec![
            constituency(1,ConstituencyStatus::Pending,vec![candidate(1,"A","दल A",0,false),candidate(2,"B","दल B",0,false)]),
            constituency(2,ConstituencyStatus::Pending,vec![candidate(3,"A","दल A",0,false)]),
        ];
        let tally = derive_seat_tally(&results);
        for entry in tally.values() {
            assert_eq!(entry.pr,0);
            assert_eq!(entry.fptp,0);
        }
    }

    #[test]
    fn tally_is_idempotent() {
        let results = vec![
            constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"A","दल A",123,true),candidate(2,"B","दल B",77,false)]),
            constituency(2,ConstituencyStatus::Counting,vec![candidate(3,"B","दल B",50,false),candidate(4,"A","दल A",49,false)]),
        ];
        assert_eq!(derive_seat_tally(&results),derive_seat_tally(&results));
    }

    #[test]
    fn snapshot_carries_declared_count_and_totals() {
        let results = vec![
            constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"A","दल A",100,true)]),
            constituency(2,ConstituencyStatus::Pending,vec![candidate(2,"B","दल B",0,false)]),
        ];
        let snapshot = derive_snapshot(&results,"2026-03-05T12:00:00Z".to_string());
        assert_eq!(snapshot.total_seats,TOTAL_SEATS);
        assert_eq!(snapshot.declared_seats,1);
        assert_eq!(snapshot.last_updated,"2026-03-05T12:00:00Z");
        assert_eq!(snapshot.seat_tally["A"].fptp,1);
    }

    #[test]
    fn close_race_is_a_hot_seat() {
        // 5100 vs 5000 → margin just under 2%.
        let results = vec![
            constituency(1,ConstituencyStatus::Counting,vec![candidate(1,"A","दल A",5100,false),candidate(2,"B","दल B",5000,false)]),
        ];
        let hot = hot_seats(&results);
        assert_eq!(hot.len(),1);
        assert!((hot[0].margin_percent-1.9607).abs()<0.01);
        assert_eq!(hot[0].leader.candidate_id,1);
        assert_eq!(hot[0].runner_up.candidate_id,2);
    }

    #[test]
    fn hot_seats_are_capped_and_sorted_by_margin() {
        let mut results = vec![];
        for seat in 1..=10 {
            // Margins 1%, 2%, ... 10%; the 10% one is not hot.
            let leader_votes = 10_000;
            let runner_up_votes = leader_votes - seat as u64 * 100;
            results.push(constituency(seat,ConstituencyStatus::Counting,vec![
                candidate(seat as u64*2-1,"A","दल A",leader_votes,false),
                candidate(seat as u64*2,"B","दल B",runner_up_votes,false),
            ]));
        }
        let hot = hot_seats(&results);
        assert_eq!(hot.len(),MAX_HOT_SEATS);
        for window in hot.windows(2) {
            assert!(window[0].margin_percent<=window[1].margin_percent);
        }
        for h in &hot {
            assert!(h.margin_percent<HOT_MARGIN_PERCENT);
        }
    }

    #[test]
    fn pending_and_single_candidate_races_are_never_hot() {
        let results = vec![
            constituency(1,ConstituencyStatus::Pending,vec![candidate(1,"A","दल A",0,false),candidate(2,"B","दल B",0,false)]),
            constituency(2,ConstituencyStatus::Counting,vec![candidate(3,"A","दल A",100,false),candidate(4,"B","दल B",0,false)]),
        ];
        assert!(hot_seats(&results).is_empty());
    }

    #[test]
    fn registry_is_rebuilt_wholesale_from_results() {
        let results = vec![
            constituency(1,ConstituencyStatus::Pending,vec![
                candidate(1,"779","नेपाली काँग्रेस",0,false),
                candidate(2,"780","नयाँ शक्ति",0,false),
                candidate(3,INDEPENDENT_PARTY_ID,"स्वतन्त्र",0,false),
            ]),
            constituency(2,ConstituencyStatus::Pending,vec![
                candidate(4,"779","नेपाली काँग्रेस",0,false),
            ]),
        ];
        let registry = PartyRegistry::build(&results);
        assert_eq!(registry.len(),3);
        assert_eq!(registry.named_party_count(),2);
        let congress = registry.get("779").unwrap();
        assert_eq!(congress.name_en,"Nepali Congress");
        assert_eq!(congress.candidate_count,2);
        assert_eq!(congress.hex,"#dc2626");
        // Unrecognized party keeps its official name and gets neutral styling.
        let other = registry.get("780").unwrap();
        assert_eq!(other.name_en,"नयाँ शक्ति");
        assert_eq!(other.hex,"#94a3b8");
        // Largest slate first, independents always last.
        let ordered : Vec<&str> = registry.parties().iter().map(|p|p.party_id.as_str()).collect();
        assert_eq!(ordered,vec!["779","780",INDEPENDENT_PARTY_ID]);
    }

    #[test]
    fn wire_format_is_camel_case() {
        // The JSON artifacts are consumed by the dashboard as-is, so the
        // field names must match its types exactly.
        let seat = constituency(1,ConstituencyStatus::Declared,vec![candidate(1,"A","दल A",500,true)]);
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["status"],"DECLARED");
        assert_eq!(json["votesCast"],500);
        assert_eq!(json["districtNp"],"काठमाडौँ");
        assert!(json.get("totalVoters").is_none());
        let cand = &json["candidates"][0];
        assert_eq!(cand["candidateId"],1);
        assert_eq!(cand["partyId"],"A");
        assert_eq!(cand["isWinner"],true);
        assert_eq!(cand["gender"],"M");
        assert!(cand.get("fatherName").is_none());
        let snapshot = derive_snapshot(&[seat],"t".to_string());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["totalSeats"],275);
        assert_eq!(json["declaredSeats"],1);
        assert_eq!(json["seatTally"]["A"]["fptp"],1);
    }

    #[test]
    fn display_order_sorts_candidates_by_votes() {
        let seat = constituency(1,ConstituencyStatus::Counting,vec![
            candidate(1,"A","दल A",10,false),
            candidate(2,"B","दल B",30,false),
            candidate(3,"C","दल C",20,false),
        ]);
        let ordered : Vec<u64> = seat.candidates_by_votes().iter().map(|c|c.candidate_id).collect();
        assert_eq!(ordered,vec![2,3,1]);
    }
}
