// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::File;
use std::path::PathBuf;
use anyhow::anyhow;
use chrono::Utc;
use clap::Parser;
use ecn::archive::{zero_votes, ArchiveLoader, DEFAULT_CACHE_DIR};
use ecn::download::UpstreamSource;
use ecn::parse::parse_upstream_text;
use results::constituency::ConstituencyResult;
use results::margin::hot_seats;
use results::party::PartyRegistry;
use results::seat_tally::{derive_snapshot, Snapshot};

#[derive(Parser)]
#[command(version = "0.2")]
/// Fetch the Election Commission results feed, aggregate it, and write the
/// JSON artifacts the dashboard serves from a static CDN: constituencies.json,
/// snapshot.json and parties.json.
struct Opts {
    /// Read a previously downloaded feed file instead of fetching.
    #[arg(long)]
    input : Option<PathBuf>,

    /// Base URL of the commission feed, for a mirror or dev proxy.
    #[arg(long)]
    upstream : Option<String>,

    /// Produce the pre-election archive view: all vote counts zeroed. Fetched
    /// data is cached on disk across runs.
    #[arg(long)]
    archive : bool,

    /// With --archive, re-download even if a cached snapshot exists.
    #[arg(long)]
    force_refresh : bool,

    /// Directory the JSON artifacts are written to.
    #[arg(long, default_value = "out")]
    out : PathBuf,

    /// Also print declared seats, leading parties and hot seats to stdout.
    #[arg(long)]
    summary : bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts : Opts = Opts::parse();

    let source = match &opts.upstream {
        Some(base) => UpstreamSource::new(base),
        None => UpstreamSource::default(),
    };

    let constituencies : Vec<ConstituencyResult> = if let Some(path) = &opts.input {
        let text = std::fs::read_to_string(path)?;
        let now = Utc::now().to_rfc3339();
        let parsed = parse_upstream_text(&text,&now)?;
        if opts.archive { zero_votes(parsed,&now) } else { parsed }
    } else if opts.archive {
        let loader = ArchiveLoader::new(source,DEFAULT_CACHE_DIR);
        let snapshot = futures::executor::block_on(loader.load_archive_data(opts.force_refresh))
            .map_err(|e|anyhow!(e))?;
        snapshot.as_ref().clone()
    } else {
        source.fetch_constituencies()?
    };

    let now = Utc::now().to_rfc3339();
    let snapshot = derive_snapshot(&constituencies,now);
    let registry = PartyRegistry::build(&constituencies);

    std::fs::create_dir_all(&opts.out)?;
    serde_json::to_writer(File::create(opts.out.join("constituencies.json"))?,&constituencies)?;
    serde_json::to_writer(File::create(opts.out.join("snapshot.json"))?,&snapshot)?;
    serde_json::to_writer(File::create(opts.out.join("parties.json"))?,&registry.parties())?;
    println!("Wrote {} constituencies and {} parties to {}",constituencies.len(),registry.len(),opts.out.display());

    if opts.summary {
        print_summary(&constituencies,&snapshot,&registry);
    }
    Ok(())
}

fn print_summary(constituencies:&[ConstituencyResult],snapshot:&Snapshot,registry:&PartyRegistry) {
    println!("Declared {} of {} seats.",snapshot.declared_seats,snapshot.total_seats);
    let mut parties : Vec<(&str,u32,u32)> = snapshot.seat_tally.iter().map(|(id,e)|(id.as_str(),e.fptp,e.pr)).collect();
    parties.sort_by_key(|&(_,fptp,pr)|std::cmp::Reverse(fptp+pr));
    for &(party_id,fptp,pr) in parties.iter().take(8) {
        let name = registry.get(party_id).map(|p|p.name_en.as_str()).unwrap_or(party_id);
        println!("{:>4} FPTP {:>4} PR  {}",fptp,pr,name);
    }
    let hot = hot_seats(constituencies);
    if !hot.is_empty() {
        println!("Hot seats:");
        for h in &hot {
            println!("  {}: {} leads {} by {:.1}%",h.constituency.name,h.leader.name,h.runner_up.name,h.margin_percent);
        }
    }
}
