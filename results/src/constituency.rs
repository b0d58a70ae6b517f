// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Information about a contest, such as the constituency and its candidates.
//!
//! Field names serialize in camelCase so the JSON artifacts match the shapes
//! consumed by the dashboard front end (`constituencies.json` et al.).

use serde::{Serialize,Deserialize};
use std::fmt;

/// One of the seven provinces of Nepal, identified upstream by `STATE_ID` 1–7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Province {
    Koshi,
    Madhesh,
    Bagmati,
    Gandaki,
    Lumbini,
    Karnali,
    Sudurpashchim,
}

impl Province {
    pub const ALL : [Province;7] = [Province::Koshi,Province::Madhesh,Province::Bagmati,Province::Gandaki,Province::Lumbini,Province::Karnali,Province::Sudurpashchim];

    /// The province for an upstream state id, None if the id is not 1–7.
    pub fn from_state_id(state_id:u32) -> Option<Province> {
        match state_id {
            1 => Some(Province::Koshi),
            2 => Some(Province::Madhesh),
            3 => Some(Province::Bagmati),
            4 => Some(Province::Gandaki),
            5 => Some(Province::Lumbini),
            6 => Some(Province::Karnali),
            7 => Some(Province::Sudurpashchim),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Province::Koshi => "Koshi",
            Province::Madhesh => "Madhesh",
            Province::Bagmati => "Bagmati",
            Province::Gandaki => "Gandaki",
            Province::Lumbini => "Lumbini",
            Province::Karnali => "Karnali",
            Province::Sudurpashchim => "Sudurpashchim",
        }
    }

    /// Official Devanagari name.
    pub fn name_np(self) -> &'static str {
        match self {
            Province::Koshi => "कोशी प्रदेश",
            Province::Madhesh => "मधेश प्रदेश",
            Province::Bagmati => "बागमती प्रदेश",
            Province::Gandaki => "गण्डकी प्रदेश",
            Province::Lumbini => "लुम्बिनी प्रदेश",
            Province::Karnali => "कर्णाली प्रदेश",
            Province::Sudurpashchim => "सुदूरपश्चिम प्रदेश",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.name()) }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Gender { M, F }

/// Where counting is up to in a constituency.
///
/// DECLARED requires a flagged winner (or the rank-1 fallback during partial
/// counting); COUNTING means votes have been recorded but no winner yet;
/// PENDING means no votes at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstituencyStatus {
    Declared,
    Counting,
    Pending,
}

/// One contestant in one constituency.
#[derive(Debug,Serialize,Deserialize,Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Upstream CandidateID. Also keys the candidate photo URL.
    pub candidate_id : u64,
    /// English transliteration (same as name_np when none is available).
    pub name : String,
    /// Devanagari name from the upstream feed.
    pub name_np : String,
    /// Stable party identifier: the upstream symbol code as a string, or "IND" for independents.
    pub party_id : String,
    /// Raw official party name, passed through unchanged.
    pub party_name : String,
    /// Zero for every candidate in archive (pre-election) mode.
    pub votes : u64,
    pub gender : Gender,
    pub is_winner : bool,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub age : Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub father_name : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub spouse_name : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub qualification : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub institution : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub experience : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub address : Option<String>,
}

/// One electoral district's race.
#[derive(Debug,Serialize,Deserialize,Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencyResult {
    pub province : Province,
    /// English district name.
    pub district : String,
    /// Devanagari district name from the upstream feed.
    pub district_np : String,
    /// Globally unique composite code `{state_id}-{district_np}-{seat}`.
    /// The local seat number alone is not unique across districts.
    pub code : String,
    /// English display name, e.g. "Kathmandu-1".
    pub name : String,
    /// Devanagari display name, e.g. "काठमाडौँ क्षेत्र नं. १".
    pub name_np : String,
    pub status : ConstituencyStatus,
    pub last_updated : String,
    /// Candidate order is upstream order; re-sort by votes for display.
    pub candidates : Vec<Candidate>,
    /// Sum of all candidate votes. Zero in archive mode.
    pub votes_cast : u64,
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub total_voters : Option<u64>,
}

impl ConstituencyResult {
    /// Candidates sorted descending by votes. Stable, so equal-vote candidates
    /// keep their upstream order.
    pub fn candidates_by_votes(&self) -> Vec<&Candidate> {
        let mut sorted : Vec<&Candidate> = self.candidates.iter().collect();
        sorted.sort_by(|a,b|b.votes.cmp(&a.votes));
        sorted
    }
}
