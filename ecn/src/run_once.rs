// Copyright 2026 NepalVotes.
// This file is part of NepalVotes.
// NepalVotes is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// NepalVotes is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with NepalVotes.  If not, see <https://www.gnu.org/licenses/>.

//! This deals with the problem of the same download getting executed twice
//! simultaneously, causing excess resource usage (the results feed is ~3MB).

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use futures::future::Shared;
use futures::FutureExt;

type SendablePinnedBoxedFuture<V> = Pin<Box<dyn Future<Output = V> + Send>>;

/// Collapses concurrent invocations of one operation into a single execution.
///
/// The first caller starts the work; callers arriving while it is still
/// running await a shared handle to the same future and receive a clone of
/// its output. Once the work finishes the slot is cleared, so a later call
/// runs the work again.
pub struct SingleFlight<V:Clone> {
    current : Mutex<Option<Shared<SendablePinnedBoxedFuture<V>>>>,
}

impl <V:Clone> Default for SingleFlight<V> {
    fn default() -> Self {
        SingleFlight{ current: Mutex::new(None) }
    }
}

impl <V:Clone> SingleFlight<V> {
    /// Run `work`, or join the invocation of it that is already in flight.
    ///
    ///# Example
    ///
    ///```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use ecn::run_once::SingleFlight;
    /// use futures::executor::block_on;
    /// let started = Arc::new(AtomicUsize::new(0));
    /// let once : SingleFlight<usize> = SingleFlight::default();
    ///
    /// // Two calls racing: one execution, both callers get its output.
    /// let s1 = started.clone();
    /// let f1 = once.run(||async move { s1.fetch_add(1,Ordering::SeqCst); async_std::task::sleep(std::time::Duration::from_millis(5)).await; 7 });
    /// let s2 = started.clone();
    /// let f2 = once.run(||async move { s2.fetch_add(1,Ordering::SeqCst); async_std::task::sleep(std::time::Duration::from_millis(5)).await; 7 });
    /// let (r1,r2) = block_on(async{futures::join!(f1,f2)});
    /// assert_eq!(r1,7);
    /// assert_eq!(r2,7);
    /// assert_eq!(started.load(Ordering::SeqCst),1);
    ///```
    pub async fn run<F,FR>(&self,work:F) -> V
        where
            F : FnOnce() -> FR,
            FR : Future<Output = V>,
            FR : Send,
            FR : 'static,
    {
        let (accessor,started_here) = {
            let mut slot = self.current.lock().unwrap();
            match slot.as_ref() {
                Some(shared) => (shared.clone(),false),
                None => {
                    let f : SendablePinnedBoxedFuture<V> = Box::pin(work());
                    let fs = f.shared();
                    *slot = Some(fs.clone());
                    (fs,true)
                }
            }
        };
        let res = accessor.await;
        if started_here {
            *self.current.lock().unwrap() = None;
        }
        res
    }
}
