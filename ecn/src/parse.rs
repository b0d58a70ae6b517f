// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Parsing of the commission's raw per-candidate records into one entry per
//! constituency.

use std::collections::HashMap;
use anyhow::anyhow;
use serde::{Serialize,Deserialize};
use results::constituency::{Candidate, ConstituencyResult, ConstituencyStatus, Gender, Province};
use results::party::{INDEPENDENT_NP, INDEPENDENT_PARTY_ID};
use crate::districts::district_en;

/// One record of the upstream feed, field names as served.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct RawCandidateRecord {
    #[serde(rename = "CandidateID")]
    pub candidate_id : u64,
    #[serde(rename = "CandidateName",default)]
    pub candidate_name : Option<String>,
    #[serde(rename = "PoliticalPartyName",default)]
    pub political_party_name : Option<String>,
    /// The commission's own numeric party identifier.
    #[serde(rename = "SYMBOLCODE",default)]
    pub symbol_code : i64,
    #[serde(rename = "SymbolName",default,skip_serializing_if = "Option::is_none")]
    pub symbol_name : Option<String>,
    #[serde(rename = "STATE_ID")]
    pub state_id : u32,
    #[serde(rename = "DistrictName",default)]
    pub district_name : String,
    /// Seat number local to the district.
    #[serde(rename = "SCConstID")]
    pub seat_number : u32,
    #[serde(rename = "TotalVoteReceived",default)]
    pub total_vote_received : u64,
    /// Rank within the constituency; 1 is leading.
    #[serde(rename = "R",default)]
    pub rank : u32,
    /// Null until a winner is declared, then "W" for the winning record.
    #[serde(rename = "E_STATUS",default)]
    pub e_status : Option<String>,
    #[serde(rename = "Gender",default)]
    pub gender : Option<String>,
    // Biographical fields; "-" and "0" are the feed's placeholders for absent.
    #[serde(rename = "AGE_YR",default,skip_serializing_if = "Option::is_none")]
    pub age_yr : Option<u32>,
    #[serde(rename = "FATHER_NAME",default,skip_serializing_if = "Option::is_none")]
    pub father_name : Option<String>,
    #[serde(rename = "SPOUCE_NAME",default,skip_serializing_if = "Option::is_none")]
    pub spouse_name : Option<String>,
    #[serde(rename = "QUALIFICATION",default,skip_serializing_if = "Option::is_none")]
    pub qualification : Option<String>,
    #[serde(rename = "NAMEOFINST",default,skip_serializing_if = "Option::is_none")]
    pub institution : Option<String>,
    #[serde(rename = "EXPERIENCE",default,skip_serializing_if = "Option::is_none")]
    pub experience : Option<String>,
    #[serde(rename = "ADDRESS",default,skip_serializing_if = "Option::is_none")]
    pub address : Option<String>,
}

impl RawCandidateRecord {
    /// Stable party identifier: "IND" for independents, else the symbol code.
    pub fn party_id(&self) -> String {
        if self.political_party_name.as_deref().unwrap_or("") == INDEPENDENT_NP { INDEPENDENT_PARTY_ID.to_string() }
        else { self.symbol_code.to_string() }
    }

    /// Winner status. E_STATUS is null for every record until seats are
    /// declared, so rank 1 with votes counts as the winner during partial
    /// counting.
    pub fn is_winner(&self) -> bool {
        if self.e_status.as_deref() == Some("W") { return true; }
        self.rank == 1 && self.total_vote_received > 0
    }

    fn gender(&self) -> Gender {
        if self.gender.as_deref() == Some("महिला") { Gender::F } else { Gender::M }
    }

    /// Drop the feed's placeholder strings for absent biographical fields.
    fn biographical(field:&Option<String>,placeholder:&str) -> Option<String> {
        match field.as_deref() {
            None | Some("") => None,
            Some(s) if s == placeholder => None,
            Some(s) => Some(s.to_string()),
        }
    }

    fn to_candidate(&self) -> Candidate {
        let name = self.candidate_name.clone().unwrap_or_default();
        Candidate {
            candidate_id: self.candidate_id,
            name: name.clone(),
            name_np: name,
            party_id: self.party_id(),
            party_name: self.political_party_name.clone().unwrap_or_default(),
            votes: self.total_vote_received,
            gender: self.gender(),
            is_winner: self.is_winner(),
            age: self.age_yr.filter(|&a|a>0),
            father_name: Self::biographical(&self.father_name,"-"),
            spouse_name: Self::biographical(&self.spouse_name,"-"),
            qualification: Self::biographical(&self.qualification,"0"),
            institution: Self::biographical(&self.institution,"0"),
            experience: Self::biographical(&self.experience,"0"),
            address: Self::biographical(&self.address,"0"),
        }
    }
}

/// Group raw records into one [ConstituencyResult] per constituency.
///
/// The composite key (state id, district name, seat number) is globally
/// unique; groups with a state id outside 1–7 are dropped. Candidate order
/// within a constituency is feed order. The output is sorted by province,
/// district, then display name.
pub fn parse_upstream_records(records:&[RawCandidateRecord],last_updated:&str) -> Vec<ConstituencyResult> {
    let mut order : Vec<(u32,String,u32)> = vec![];
    let mut grouped : HashMap<(u32,String,u32),Vec<&RawCandidateRecord>> = HashMap::new();
    for record in records {
        let key = (record.state_id,record.district_name.clone(),record.seat_number);
        if !grouped.contains_key(&key) { order.push(key.clone()); }
        grouped.entry(key).or_default().push(record);
    }

    let mut out : Vec<ConstituencyResult> = vec![];
    for key in order {
        let group = &grouped[&key];
        let (state_id,district_np,seat_number) = key;
        let province = match Province::from_state_id(state_id) {
            Some(p) => p,
            None => {
                log::debug!("dropping constituency group {}-{}-{}: unknown state id",state_id,district_np,seat_number);
                continue;
            }
        };
        let district = district_en(&district_np,state_id);
        let candidates : Vec<Candidate> = group.iter().map(|r|r.to_candidate()).collect();
        let has_winner = candidates.iter().any(|c|c.is_winner);
        let has_votes = candidates.iter().any(|c|c.votes>0);
        let status = if has_winner { ConstituencyStatus::Declared }
            else if has_votes { ConstituencyStatus::Counting }
            else { ConstituencyStatus::Pending };
        let votes_cast = candidates.iter().map(|c|c.votes).sum();
        out.push(ConstituencyResult {
            province,
            district: district.clone(),
            district_np: district_np.clone(),
            code: format!("{}-{}-{}",state_id,district_np,seat_number),
            name: format!("{}-{}",district,seat_number),
            name_np: format!("{} क्षेत्र नं. {}",district_np,seat_number),
            status,
            last_updated: last_updated.to_string(),
            candidates,
            votes_cast,
            total_voters: None,
        });
    }

    out.sort_by(|a,b|{
        a.province.name().cmp(b.province.name())
            .then_with(||a.district.cmp(&b.district))
            .then_with(||a.name.cmp(&b.name))
    });
    out
}

/// Parse the feed as served: optional UTF-8 BOM, then a JSON array with at
/// least one record. Anything else is a parse failure for the caller to
/// recover from (cache, then bundled data).
pub fn parse_upstream_text(text:&str,last_updated:&str) -> anyhow::Result<Vec<ConstituencyResult>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let records : Vec<RawCandidateRecord> = serde_json::from_str(text)?;
    if records.is_empty() { return Err(anyhow!("upstream returned an empty record array")); }
    Ok(parse_upstream_records(&records,last_updated))
}
