// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

mod state;
mod ws;
mod live;

use std::time::Duration;
use actix::Actor;
use actix_web::{middleware, web, HttpRequest, HttpResponse, HttpServer};
use actix_web::web::Json;
use actix_web::get;
use actix::Addr;
use actix_web_actors::ws as actix_ws;
use clap::Parser;
use serde::{Serialize,Deserialize};
use results::constituency::{Candidate, Province};
use results::party::PartyInfo;
use results::seat_tally::Snapshot;
use ecn::download::UpstreamSource;
use crate::live::spawn_refresh_loop;
use crate::state::SharedState;
use crate::ws::{Broadcaster, WsSession};

#[get("/api/snapshot")]
async fn api_snapshot(state:web::Data<SharedState>) -> Json<Snapshot> {
    Json(state.current().snapshot)
}

#[get("/api/constituencies")]
async fn api_constituencies(state:web::Data<SharedState>) -> HttpResponse {
    HttpResponse::Ok().json(&*state.current().constituencies)
}

#[get("/api/constituencies/{code}")]
async fn api_constituency(state:web::Data<SharedState>,code:web::Path<String>) -> HttpResponse {
    let data = state.current();
    match data.constituencies.iter().find(|c|c.code==*code) {
        Some(constituency) => HttpResponse::Ok().json(constituency),
        None => HttpResponse::NotFound().json(&serde_json::json!({"detail":"Constituency not found"})),
    }
}

#[get("/api/parties")]
async fn api_parties(state:web::Data<SharedState>) -> HttpResponse {
    let data = state.current();
    let parties : Vec<&PartyInfo> = data.registry.parties();
    HttpResponse::Ok().json(&parties)
}

const CANDIDATE_PAGE_SIZE : usize = 50;

#[derive(Deserialize)]
struct CandidateQuery {
    /// Restrict to one party identifier.
    party : Option<String>,
    /// Case-insensitive substring match on candidate or party names.
    q : Option<String>,
    /// 1-based page number.
    page : Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateListing {
    #[serde(flatten)]
    candidate : Candidate,
    constituency_code : String,
    constituency_name : String,
    province : Province,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePage {
    items : Vec<CandidateListing>,
    page : usize,
    page_size : usize,
    total : usize,
}

#[get("/api/candidates")]
async fn api_candidates(state:web::Data<SharedState>,query:web::Query<CandidateQuery>) -> Json<CandidatePage> {
    let data = state.current();
    let needle = query.q.as_ref().map(|q|q.to_lowercase());
    let mut matched : Vec<CandidateListing> = vec![];
    for constituency in data.constituencies.iter() {
        for candidate in &constituency.candidates {
            if let Some(party) = &query.party {
                if &candidate.party_id != party { continue; }
            }
            if let Some(needle) = &needle {
                let hit = candidate.name.to_lowercase().contains(needle)
                    || candidate.name_np.contains(needle.as_str())
                    || candidate.party_name.contains(needle.as_str());
                if !hit { continue; }
            }
            matched.push(CandidateListing {
                candidate: candidate.clone(),
                constituency_code: constituency.code.clone(),
                constituency_name: constituency.name.clone(),
                province: constituency.province,
            });
        }
    }
    let total = matched.len();
    let page = query.page.unwrap_or(1).max(1);
    let items : Vec<CandidateListing> = matched.into_iter()
        .skip((page-1)*CANDIDATE_PAGE_SIZE)
        .take(CANDIDATE_PAGE_SIZE)
        .collect();
    Json(CandidatePage{ items, page, page_size: CANDIDATE_PAGE_SIZE, total })
}

#[get("/ws")]
async fn ws_connect(req:HttpRequest,stream:web::Payload,state:web::Data<SharedState>,broadcaster:web::Data<Addr<Broadcaster>>) -> Result<HttpResponse,actix_web::Error> {
    actix_ws::start(WsSession::new(state.clone(),broadcaster.get_ref().clone()),&req,stream)
}

#[derive(Parser)]
#[clap(version = "0.1")]
/// Serve the live election results API: snapshot, constituencies, parties and
/// candidates over HTTP plus a WebSocket push channel, refreshed from the
/// Election Commission feed on a fixed interval.
struct Opts {
    /// The port to listen on.
    #[clap(long, default_value = "8000")]
    port : u16,

    /// Base URL of the commission feed, for a mirror or dev proxy.
    #[clap(long)]
    upstream : Option<String>,

    /// Seconds between refreshes of the upstream feed.
    #[clap(long, default_value = "30")]
    scrape_interval : u64,

    /// Serve the pre-election archive view: all vote counts zeroed, every
    /// seat pending.
    #[clap(long)]
    archive : bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts : Opts = Opts::parse();
    let source = match &opts.upstream {
        Some(base) => UpstreamSource::new(base),
        None => UpstreamSource::default(),
    };
    let state = web::Data::new(SharedState::empty());
    let broadcaster = Broadcaster::default().start();
    spawn_refresh_loop(state.clone(),broadcaster.clone(),source,Duration::from_secs(opts.scrape_interval),opts.archive);
    println!("Running webserver on http://localhost:{} stop with control C.",opts.port);
    let bind = format!("0.0.0.0:{}",opts.port);
    HttpServer::new(move|| {
        actix_web::App::new()
            .wrap(middleware::Compress::default())
            .app_data(state.clone())
            .data(broadcaster.clone())
            .service(api_snapshot)
            .service(api_constituencies)
            .service(api_constituency)
            .service(api_parties)
            .service(api_candidates)
            .service(ws_connect)
    })
        .bind(bind)?
        .run()
        .await?;
    Ok(())
}
