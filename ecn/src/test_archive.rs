// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.


//! Tests of the archive normalization and its disk cache.
