// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! Data source for the Election Commission of Nepal's central results feed,
//! a flat JSON array of per-candidate records served as BOM-prefixed UTF-8.

pub mod parse;
pub mod districts;
pub mod download;
pub mod run_once;
pub mod archive;
mod test_parse;
mod test_archive;
