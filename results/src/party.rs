// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! The party registry: per-party display information derived wholesale from a
//! constituency collection. Party identity is the upstream symbol code (as a
//! string), or "IND" for independents; the official Devanagari name is passed
//! through unchanged and an English display name is looked up where known.

use std::collections::{BTreeMap, HashMap};
use once_cell::sync::Lazy;
use serde::{Serialize,Deserialize};
use crate::constituency::ConstituencyResult;

/// The sentinel party identifier for independent candidates.
pub const INDEPENDENT_PARTY_ID : &str = "IND";
/// The upstream party name meaning "independent".
pub const INDEPENDENT_NP : &str = "स्वतन्त्र";

const FALLBACK_HEX : &str = "#94a3b8";
const FALLBACK_SYMBOL : &str = "•";

/// Official Devanagari party names → short code. Alternate spellings that
/// appear in the upstream feed map to the same code.
static NEPALI_NAME_TO_CODE: Lazy<HashMap<&'static str,&'static str>> = Lazy::new(||HashMap::from([
    ("नेपाली काँग्रेस","NC"),
    ("नेपाल कम्युनिष्ट पार्टी (एकीकृत मार्क्सवादी लेनिनवादी)","CPN-UML"),
    ("नेपाल कम्युनिस्ट पार्टी (माओवादी)","NCP"),
    ("नेपाल कम्युनिष्ट पार्टी (माओवादी)","NCP"),
    ("नेपाल कम्युनिष्ट पार्टी (माओवादी केन्द्र)","NCP"),
    ("राष्ट्रिय स्वतन्त्र पार्टी","RSP"),
    ("राष्ट्रिय प्रजातन्त्र पार्टी","RPP"),
    ("जनता समाजवादी पार्टी, नेपाल","JSP"),
    ("नेकपा (एकीकृत समाजवादी)","CPN-US"),
    ("नेपाल कम्युनिष्ट पार्टी (एकीकृत समाजवादी)","CPN-US"),
    ("लोकतान्त्रिक समाजवादी पार्टी","LSP"),
    ("नागरिक उन्मुक्ति पार्टी","NUP"),
    ("राष्ट्रिय जनमोर्चा","RJM"),
    ("नेपाल मजदुर किसान पार्टी","NMKP"),
    ("जनमत पार्टी","JMP"),
    ("नेपाल कम्युनिष्ट पार्टी (मार्क्सवादी-लेनिनवादी)","CPN-ML"),
    ("नेकपा (मार्क्सवादी-लेनिनवादी)","CPN-ML"),
    ("नेपाल परिवार दल","NPD"),
    (INDEPENDENT_NP,INDEPENDENT_PARTY_ID),
]));

static ENGLISH_NAME: Lazy<HashMap<&'static str,&'static str>> = Lazy::new(||HashMap::from([
    ("NC","Nepali Congress"),
    ("CPN-UML","CPN (Unified Marxist-Leninist)"),
    ("NCP","NCP (Maoist Centre)"),
    ("RSP","Rastriya Swatantra Party"),
    ("RPP","Rastriya Prajatantra Party"),
    ("JSP","Janata Samajwadi Party Nepal"),
    ("CPN-US","CPN (Unified Socialist)"),
    ("LSP","Loktantrik Samajwadi Party"),
    ("NUP","Nagarik Unmukti Party"),
    ("RJM","Rastriya Janamorcha"),
    ("NMKP","Nepal Majdoor Kisan Party"),
    ("JMP","Janamat Party"),
    ("CPN-ML","CPN (Marxist-Leninist)"),
    ("NPD","Nepal Parivar Dal"),
    (INDEPENDENT_PARTY_ID,"Independent"),
]));

// Display choices only. Parties outside this table get a neutral grey.
static PARTY_HEX: Lazy<HashMap<&'static str,&'static str>> = Lazy::new(||HashMap::from([
    ("NC","#dc2626"),
    ("CPN-UML","#2563eb"),
    ("NCP","#ea580c"),
    ("RSP","#059669"),
    ("RPP","#ca8a04"),
    ("JSP","#0891b2"),
    ("CPN-US","#9333ea"),
    ("LSP","#0d9488"),
    ("NUP","#d97706"),
    ("RJM","#be123c"),
    ("NMKP","#15803d"),
    ("JMP","#4f46e5"),
    ("CPN-ML","#991b1b"),
    ("NPD","#57534e"),
    (INDEPENDENT_PARTY_ID,"#8b5cf6"),
]));

static PARTY_SYMBOL: Lazy<HashMap<&'static str,&'static str>> = Lazy::new(||HashMap::from([
    ("NC","🌳"),
    ("CPN-UML","☀️"),
    ("NCP","🌙"),
    ("RSP","⚡"),
    ("RPP","👑"),
    ("JSP","⚙️"),
    ("CPN-US","✊"),
    ("LSP","🌿"),
    ("NUP","🕊️"),
    ("RJM","⚒️"),
    ("NMKP","🌾"),
    ("JMP","🗳️"),
    ("CPN-ML","⭐"),
    ("NPD","🏠"),
    (INDEPENDENT_PARTY_ID,"🧑"),
]));

/// Result of looking an official party name up in the fixed table.
///
/// Keeping the two cases distinct means a caller always knows whether it is
/// dealing with a recognized party or passing an unrecognized name through.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum PartyLookup {
    /// The short code for a party in the fixed table, e.g. "NC".
    Known(&'static str),
    /// The raw name of a party not in the table.
    Other(String),
}

/// Look up the short code for an official party name.
///
/// ```
/// use results::party::{lookup_party_code, PartyLookup};
/// assert_eq!(lookup_party_code("नेपाली काँग्रेस"), PartyLookup::Known("NC"));
/// assert_eq!(lookup_party_code("स्वतन्त्र"), PartyLookup::Known("IND"));
/// assert_eq!(lookup_party_code("नयाँ शक्ति"), PartyLookup::Other("नयाँ शक्ति".to_string()));
/// ```
pub fn lookup_party_code(party_name:&str) -> PartyLookup {
    let trimmed = party_name.trim();
    match NEPALI_NAME_TO_CODE.get(trimmed) {
        Some(code) => PartyLookup::Known(code),
        None => PartyLookup::Other(trimmed.to_string()),
    }
}

/// Registry entry for one party.
#[derive(Debug,Serialize,Deserialize,Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartyInfo {
    pub party_id : String,
    /// Official Devanagari name from the upstream feed.
    pub party_name : String,
    /// English display name where known, else the official name as-is.
    pub name_en : String,
    /// Hex color for charts.
    pub hex : String,
    /// Display symbol.
    pub symbol : String,
    /// Number of FPTP candidates the party fielded.
    pub candidate_count : u32,
}

/// All parties appearing in a constituency collection.
///
/// Built wholesale from the current results each time new data loads, and
/// threaded through as an explicit value; there is no global registry.
#[derive(Debug,Clone,Default)]
pub struct PartyRegistry {
    by_id : BTreeMap<String,PartyInfo>,
}

impl PartyRegistry {
    pub fn build(results:&[ConstituencyResult]) -> PartyRegistry {
        let mut by_id : BTreeMap<String,PartyInfo> = BTreeMap::new();
        for constituency in results {
            for candidate in &constituency.candidates {
                let entry = by_id.entry(candidate.party_id.clone()).or_insert_with(|| {
                    let (name_en,hex,symbol) = match lookup_party_code(&candidate.party_name) {
                        PartyLookup::Known(code) => (
                            ENGLISH_NAME.get(code).copied().unwrap_or(code).to_string(),
                            PARTY_HEX.get(code).copied().unwrap_or(FALLBACK_HEX).to_string(),
                            PARTY_SYMBOL.get(code).copied().unwrap_or(FALLBACK_SYMBOL).to_string(),
                        ),
                        PartyLookup::Other(raw) => (raw,FALLBACK_HEX.to_string(),FALLBACK_SYMBOL.to_string()),
                    };
                    PartyInfo {
                        party_id: candidate.party_id.clone(),
                        party_name: candidate.party_name.clone(),
                        name_en, hex, symbol,
                        candidate_count: 0,
                    }
                });
                entry.candidate_count += 1;
            }
        }
        PartyRegistry{ by_id }
    }

    pub fn get(&self,party_id:&str) -> Option<&PartyInfo> { self.by_id.get(party_id) }

    /// Hex color for a party, neutral grey if unknown.
    pub fn hex(&self,party_id:&str) -> &str {
        self.by_id.get(party_id).map(|p|p.hex.as_str()).unwrap_or(FALLBACK_HEX)
    }

    /// All parties, largest candidate slate first, independents last.
    pub fn parties(&self) -> Vec<&PartyInfo> {
        let mut sorted : Vec<&PartyInfo> = self.by_id.values().collect();
        sorted.sort_by(|a,b|{
            let a_ind = a.party_id==INDEPENDENT_PARTY_ID;
            let b_ind = b.party_id==INDEPENDENT_PARTY_ID;
            a_ind.cmp(&b_ind).then(b.candidate_count.cmp(&a.candidate_count))
        });
        sorted
    }

    /// Number of contesting parties, not counting the independent bucket.
    pub fn named_party_count(&self) -> usize {
        self.by_id.keys().filter(|k|k.as_str()!=INDEPENDENT_PARTY_ID).count()
    }

    pub fn len(&self) -> usize { self.by_id.len() }
    pub fn is_empty(&self) -> bool { self.by_id.is_empty() }
}
