// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.


//! Tests of raw feed parsing against hand-built record arrays.


#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use serde_json::json;
    use results::constituency::ConstituencyStatus;
    use crate::parse::{parse_upstream_records, parse_upstream_text, RawCandidateRecord};
    use crate::districts::district_en;

    const TS : &str = "2026-03-05T00:00:00Z";

    fn record(state_id:u32,district:&str,seat:u32,id:u64,party:&str,symbol:i64,votes:u64,rank:u32,e_status:Option<&str>) -> RawCandidateRecord {
        serde_json::from_value(json!({
            "CandidateID": id,
            "CandidateName": format!("उम्मेदवार {}",id),
            "PoliticalPartyName": party,
            "SYMBOLCODE": symbol,
            "STATE_ID": state_id,
            "DistrictName": district,
            "SCConstID": seat,
            "TotalVoteReceived": votes,
            "R": rank,
            "E_STATUS": e_status,
            "Gender": "पुरुष",
        })).unwrap()
    }

    #[test]
    fn flagged_winner_declares_the_seat() {
        let records = vec![
            record(3,"काठमाडौँ",1,1,"नेपाली काँग्रेस",779,500,1,Some("W")),
            record(3,"काठमाडौँ",1,2,"जनमत पार्टी",800,300,2,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results.len(),1);
        let seat = &results[0];
        assert_eq!(seat.status,ConstituencyStatus::Declared);
        assert_eq!(seat.votes_cast,800);
        assert_eq!(seat.code,"3-काठमाडौँ-1");
        assert_eq!(seat.name,"Kathmandu-1");
        assert_eq!(seat.name_np,"काठमाडौँ क्षेत्र नं. 1");
        let winner : Vec<u64> = seat.candidates.iter().filter(|c|c.is_winner).map(|c|c.candidate_id).collect();
        assert_eq!(winner,vec![1]);
    }

    #[test]
    fn rank_one_with_votes_declares_without_marker() {
        let records = vec![
            record(3,"काठमाडौँ",1,1,"नेपाली काँग्रेस",779,500,1,None),
            record(3,"काठमाडौँ",1,2,"जनमत पार्टी",800,300,2,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results[0].status,ConstituencyStatus::Declared);
        assert!(results[0].candidates[0].is_winner);
        assert!(!results[0].candidates[1].is_winner);
    }

    #[test]
    fn no_votes_means_pending() {
        let records = vec![
            record(3,"काठमाडौँ",1,1,"नेपाली काँग्रेस",779,0,1,None),
            record(3,"काठमाडौँ",1,2,"जनमत पार्टी",800,0,2,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results[0].status,ConstituencyStatus::Pending);
        assert_eq!(results[0].votes_cast,0);
    }

    #[test]
    fn votes_without_rank_one_means_counting() {
        let records = vec![
            record(3,"काठमाडौँ",1,1,"नेपाली काँग्रेस",779,40,2,None),
            record(3,"काठमाडौँ",1,2,"जनमत पार्टी",800,60,3,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results[0].status,ConstituencyStatus::Counting);
        assert_eq!(results[0].votes_cast,100);
    }

    #[test]
    fn independents_get_the_sentinel_party_id() {
        let records = vec![
            record(3,"काठमाडौँ",1,1,"स्वतन्त्र",901,0,1,None),
            record(3,"काठमाडौँ",1,2,"नेपाली काँग्रेस",779,0,2,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results[0].candidates[0].party_id,"IND");
        assert_eq!(results[0].candidates[1].party_id,"779");
    }

    #[test]
    fn composite_codes_are_unique() {
        // Same seat number in different districts and provinces must not collide.
        let records = vec![
            record(1,"झापा",1,1,"नेपाली काँग्रेस",779,0,1,None),
            record(1,"झापा",2,2,"नेपाली काँग्रेस",779,0,1,None),
            record(1,"मोरङ",1,3,"नेपाली काँग्रेस",779,0,1,None),
            record(3,"काठमाडौँ",1,4,"नेपाली काँग्रेस",779,0,1,None),
            record(3,"काठमाडौँ",1,5,"जनमत पार्टी",800,0,2,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results.len(),4);
        let codes : HashSet<&str> = results.iter().map(|r|r.code.as_str()).collect();
        assert_eq!(codes.len(),4);
    }

    #[test]
    fn unknown_state_id_drops_the_group() {
        let records = vec![
            record(8,"परदेश",1,1,"नेपाली काँग्रेस",779,100,1,None),
            record(3,"काठमाडौँ",1,2,"नेपाली काँग्रेस",779,100,1,None),
        ];
        let results = parse_upstream_records(&records,TS);
        assert_eq!(results.len(),1);
        assert_eq!(results[0].code,"3-काठमाडौँ-1");
    }

    #[test]
    fn output_is_sorted_by_province_then_district_then_name() {
        let records = vec![
            record(3,"ललितपुर",1,1,"नेपाली काँग्रेस",779,0,1,None),
            record(1,"झापा",2,2,"नेपाली काँग्रेस",779,0,1,None),
            record(1,"झापा",1,3,"नेपाली काँग्रेस",779,0,1,None),
            record(3,"काठमाडौँ",1,4,"नेपाली काँग्रेस",779,0,1,None),
            record(2,"बारा",1,5,"नेपाली काँग्रेस",779,0,1,None),
        ];
        let results = parse_upstream_records(&records,TS);
        let names : Vec<&str> = results.iter().map(|r|r.name.as_str()).collect();
        // Provinces compare by English name, so Bagmati precedes Koshi and Madhesh.
        assert_eq!(names,vec!["Kathmandu-1","Lalitpur-1","Jhapa-1","Jhapa-2","Bara-1"]);
    }

    #[test]
    fn bom_is_stripped_and_payload_validated() {
        let body = json!([{
            "CandidateID": 1,
            "CandidateName": "उम्मेदवार १",
            "PoliticalPartyName": "नेपाली काँग्रेस",
            "SYMBOLCODE": 779,
            "STATE_ID": 3,
            "DistrictName": "काठमाडौँ",
            "SCConstID": 1,
            "TotalVoteReceived": 0,
            "R": 1,
            "E_STATUS": null,
        }]).to_string();
        let with_bom = format!("\u{feff}{}",body);
        let results = parse_upstream_text(&with_bom,TS).unwrap();
        assert_eq!(results.len(),1);

        assert!(parse_upstream_text("[]",TS).is_err());
        assert!(parse_upstream_text("{\"not\":\"an array\"}",TS).is_err());
        assert!(parse_upstream_text("nonsense",TS).is_err());
    }

    #[test]
    fn biographical_placeholders_are_dropped() {
        let raw : RawCandidateRecord = serde_json::from_value(json!({
            "CandidateID": 1,
            "CandidateName": "उम्मेदवार १",
            "PoliticalPartyName": "नेपाली काँग्रेस",
            "SYMBOLCODE": 779,
            "STATE_ID": 3,
            "DistrictName": "काठमाडौँ",
            "SCConstID": 1,
            "TotalVoteReceived": 0,
            "R": 1,
            "E_STATUS": null,
            "Gender": "महिला",
            "AGE_YR": 45,
            "FATHER_NAME": "-",
            "SPOUCE_NAME": "श्रीमती",
            "QUALIFICATION": "0",
            "NAMEOFINST": "त्रिभुवन विश्वविद्यालय",
            "EXPERIENCE": "0",
            "ADDRESS": "0",
        })).unwrap();
        let results = parse_upstream_records(&[raw],TS);
        let candidate = &results[0].candidates[0];
        assert_eq!(candidate.age,Some(45));
        assert_eq!(candidate.father_name,None);
        assert_eq!(candidate.spouse_name.as_deref(),Some("श्रीमती"));
        assert_eq!(candidate.qualification,None);
        assert_eq!(candidate.institution.as_deref(),Some("त्रिभुवन विश्वविद्यालय"));
        assert_eq!(candidate.experience,None);
        assert_eq!(candidate.address,None);
    }

    #[test]
    fn unknown_district_gets_a_province_placeholder() {
        assert_eq!(district_en("काठमाडौँ",3),"Kathmandu");
        assert_eq!(district_en("काठमाडौं",3),"Kathmandu");
        assert_eq!(district_en("नभएको",4),"Gandaki-District");
    }
}
