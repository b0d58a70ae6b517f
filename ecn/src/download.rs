// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Helper for downloading the commission's results feed with Reqwest.
//!
//! The feed host does not send CORS headers and is occasionally unreachable
//! from some networks, so a failed direct fetch is retried once through a
//! public relay. Two failures are terminal for the call; there is no retry
//! loop and no timeout beyond the transport's own.

use reqwest::Url;
use thiserror::Error;
use chrono::Utc;
use results::constituency::ConstituencyResult;
use crate::parse::parse_upstream_text;

pub const UPSTREAM_BASE : &str = "https://result.election.gov.np";
pub const UPSTREAM_RESULTS_PATH : &str = "/JSONFiles/ElectionResultCentral2082.txt";
const RELAY_BASE : &str = "https://corsproxy.io/";
const USER_AGENT : &str = "Mozilla/5.0 (compatible; NepalVotesBot/1.0)";

#[derive(Error,Debug)]
pub enum UpstreamError {
    /// Both the direct fetch and the relay fallback failed.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    /// The feed was reachable but the payload was not a non-empty record array.
    #[error("upstream returned malformed data: {0}")]
    Malformed(String),
}

/// The commission's feed, identified by its base URL so tests and the dev
/// proxy can point elsewhere.
#[derive(Clone,Debug)]
pub struct UpstreamSource {
    base : String,
}

impl Default for UpstreamSource {
    fn default() -> Self { UpstreamSource::new(UPSTREAM_BASE) }
}

impl UpstreamSource {
    pub fn new(base:&str) -> Self {
        UpstreamSource{ base: base.trim_end_matches('/').to_string() }
    }

    pub fn results_url(&self) -> String {
        format!("{}{}",self.base,UPSTREAM_RESULTS_PATH)
    }

    /// Where the commission hosts a candidate's photo. May 404 pre-election.
    pub fn candidate_photo_url(&self,candidate_id:u64) -> String {
        format!("{}/Images/Candidate/{}.jpg",self.base,candidate_id)
    }

    /// Download the results feed as text, trying the direct URL first and the
    /// relay second.
    pub fn fetch_text(&self) -> Result<String,UpstreamError> {
        let url = self.results_url();
        match fetch_once(&url) {
            Ok(text) => Ok(text),
            Err(direct) => {
                log::warn!("direct fetch of {} failed ({}), retrying via relay",url,direct);
                let relay = Url::parse_with_params(RELAY_BASE,&[("url",url.as_str())])
                    .map_err(|e|UpstreamError::Unavailable(e.to_string()))?;
                fetch_once(relay.as_str())
                    .map_err(|relayed|UpstreamError::Unavailable(format!("direct: {}; relay: {}",direct,relayed)))
            }
        }
    }

    /// Download and parse the feed into constituency results, stamped with the
    /// current time.
    pub fn fetch_constituencies(&self) -> Result<Vec<ConstituencyResult>,UpstreamError> {
        let text = self.fetch_text()?;
        let now = Utc::now().to_rfc3339();
        parse_upstream_text(&text,&now).map_err(|e|UpstreamError::Malformed(e.to_string()))
    }
}

fn fetch_once(url:&str) -> Result<String,String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build().map_err(|e|e.to_string())?;
    let response = client.get(url).send().map_err(|e|e.to_string())?;
    if !response.status().is_success() { return Err(format!("status {}",response.status())); }
    let bytes = response.bytes().map_err(|e|e.to_string())?;
    // The feed is UTF-8 with a leading byte-order mark; decode strips it.
    let (text,_,_) = encoding_rs::UTF_8.decode(&bytes);
    Ok(text.into_owned())
}
