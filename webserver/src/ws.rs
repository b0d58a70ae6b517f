// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! WebSocket push channel. Connected dashboards get the current snapshot and
//! constituency list immediately, then both again on every refresh tick, so
//! they never need to poll.

use actix::prelude::*;
use actix_web::web;
use actix_web_actors::ws;
use serde::Serialize;
use results::constituency::ConstituencyResult;
use results::seat_tally::Snapshot;
use crate::state::{LiveData, SharedState};

/// The wire format of a push message.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
enum WsMessage<'a> {
    Snapshot(&'a Snapshot),
    Constituencies(&'a [ConstituencyResult]),
}

pub fn snapshot_message(data:&LiveData) -> String {
    serde_json::to_string(&WsMessage::Snapshot(&data.snapshot)).unwrap_or_default()
}

pub fn constituencies_message(data:&LiveData) -> String {
    serde_json::to_string(&WsMessage::Constituencies(&data.constituencies)).unwrap_or_default()
}

/// Broadcast a pre-serialized message to every connected session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Publish(pub String);

#[derive(Message)]
#[rtype(result = "()")]
struct Connect(Addr<WsSession>);

#[derive(Message)]
#[rtype(result = "()")]
struct Disconnect(Addr<WsSession>);

#[derive(Message)]
#[rtype(result = "()")]
struct Outbound(String);

/// Keeps the set of connected sessions and fans published messages out to
/// them. Sessions register themselves on connect and deregister on close.
#[derive(Default)]
pub struct Broadcaster {
    sessions : Vec<Addr<WsSession>>,
}

impl Actor for Broadcaster {
    type Context = Context<Self>;
}

impl Handler<Connect> for Broadcaster {
    type Result = ();
    fn handle(&mut self,msg:Connect,_ctx:&mut Self::Context) {
        self.sessions.push(msg.0);
    }
}

impl Handler<Disconnect> for Broadcaster {
    type Result = ();
    fn handle(&mut self,msg:Disconnect,_ctx:&mut Self::Context) {
        self.sessions.retain(|s|s!=&msg.0);
    }
}

impl Handler<Publish> for Broadcaster {
    type Result = ();
    fn handle(&mut self,msg:Publish,_ctx:&mut Self::Context) {
        for session in &self.sessions {
            session.do_send(Outbound(msg.0.clone()));
        }
    }
}

/// One dashboard connection.
pub struct WsSession {
    state : web::Data<SharedState>,
    broadcaster : Addr<Broadcaster>,
}

impl WsSession {
    pub fn new(state:web::Data<SharedState>,broadcaster:Addr<Broadcaster>) -> Self {
        WsSession{ state, broadcaster }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self,ctx:&mut Self::Context) {
        self.broadcaster.do_send(Connect(ctx.address()));
        // Push current state immediately so a late joiner isn't blank until
        // the next refresh tick.
        let data = self.state.current();
        ctx.text(snapshot_message(&data));
        ctx.text(constituencies_message(&data));
    }

    fn stopped(&mut self,ctx:&mut Self::Context) {
        self.broadcaster.do_send(Disconnect(ctx.address()));
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();
    fn handle(&mut self,msg:Outbound,ctx:&mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl StreamHandler<Result<ws::Message,ws::ProtocolError>> for WsSession {
    fn handle(&mut self,msg:Result<ws::Message,ws::ProtocolError>,ctx:&mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => ctx.pong(&payload),
            // Clients may send text frames as keep-alives; nothing to do.
            Ok(ws::Message::Text(_)) => {}
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(_) => ctx.stop(),
            _ => {}
        }
    }
}
