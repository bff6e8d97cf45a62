/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the poll cycle driver. Each trigger (timer tick or manual refresh) runs one
//! `Loading -> {Live | ErrorFallback}` cycle in its own task:
//!   - Live: the feed snapshot is decoded, filtered and ranked
//!   - ErrorFallback: transport, status or body errors replace the snapshot with [`sample_flights`]
//!
//! Cycles can overlap. Each one is tagged with a monotonic sequence number and its display writes are
//! dropped once a newer cycle has written, i.e. a slow cycle can't overwrite newer results.

use std::{sync::{Arc, Mutex, MutexGuard, atomic::{AtomicU64,Ordering}}, time::Duration};
use tokio::{sync::mpsc, task::{AbortHandle,JoinHandle}, time::{interval,MissedTickBehavior}};
use chrono::Local;
use tracing::{debug,info,warn,error};

use crate::{
    ApproachConfig, FlightRecord, process_states,
    display::ApproachDisplay, opensky::StateConnector, ranker::rank
};

pub const LOADING_STATUS: &str = "Loading live data…";
pub const UPDATING_LABEL: &str = "Updating…";
pub const LIVE_STATUS: &str = "Live data active";
pub const UNAVAILABLE_STATUS: &str = "Live data unavailable";
pub const SAMPLE_DATA_LABEL: &str = "Showing sample data";

const MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_PENDING_REFRESH: usize = 4;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PollState {
    Idle,
    Loading,
    Live,
    ErrorFallback
}

/// what we show if we can't get live data
pub fn sample_flights ()->Vec<FlightRecord> {
    vec![
        FlightRecord {
            callsign: "ASA421".to_string(),
            altitude_ft: 5200.0,
            groundspeed_kn: Some(178.0),
            track_deg: 268.0,
            distance_nm: 7.4,
            on_ground: false
        },
        FlightRecord {
            callsign: "SWA227".to_string(),
            altitude_ft: 6400.0,
            groundspeed_kn: Some(186.0),
            track_deg: 255.0,
            distance_nm: 10.1,
            on_ground: false
        }
    ]
}

pub fn updated_label ()->String {
    format!("Updated {}", Local::now().format("%-I:%M:%S %p"))
}

// the sequence number of the last cycle that wrote to the display, and the state it wrote
struct CycleGuard {
    last_seq: u64,
    state: PollState,
}

/// drives poll cycles for a [`StateConnector`] and publishes results to an [`ApproachDisplay`].
/// Clones share connector, display and cycle bookkeeping
pub struct PollingController <C,D> where C: StateConnector, D: ApproachDisplay {
    config: Arc<ApproachConfig>,
    connector: Arc<C>,
    display: Arc<D>,
    next_seq: Arc<AtomicU64>,
    guard: Arc<Mutex<CycleGuard>>,
}

impl<C,D> Clone for PollingController<C,D> where C: StateConnector, D: ApproachDisplay {
    fn clone (&self)->Self {
        PollingController {
            config: self.config.clone(),
            connector: self.connector.clone(),
            display: self.display.clone(),
            next_seq: self.next_seq.clone(),
            guard: self.guard.clone()
        }
    }
}

impl<C,D> PollingController<C,D> where C: StateConnector, D: ApproachDisplay {
    pub fn new (config: Arc<ApproachConfig>, connector: C, display: D)->Self {
        PollingController {
            config,
            connector: Arc::new(connector),
            display: Arc::new(display),
            next_seq: Arc::new( AtomicU64::new(0)),
            guard: Arc::new( Mutex::new( CycleGuard { last_seq: 0, state: PollState::Idle }))
        }
    }

    pub fn config (&self)->&ApproachConfig { &self.config }
    pub fn connector (&self)->&C { &self.connector }
    pub fn display (&self)->&D { &self.display }

    /// the state written by the most recent (non-stale) cycle
    pub fn state (&self)->PollState { self.lock_guard().state }

    /// run one complete cycle and return the state it ended in. This never fails - any transport error
    /// results in the ErrorFallback state. Note the returned state is what this cycle computed, which
    /// is not necessarily what is displayed if a newer cycle has already written
    pub async fn poll_cycle (&self)->PollState {
        let seq = self.begin_cycle();

        match self.connector.fetch_states().await {
            Ok(response) => {
                let states = response.states();
                let flights = process_states( states, &self.config.reference, &self.config.policy);
                info!("cycle {seq}: {} of {} aircraft on final approach to {}", flights.len(), states.len(), self.config.reference.name);

                let label = updated_label();
                self.complete_cycle( seq, PollState::Live, LIVE_STATUS, false, &label, &flights)
            }
            Err(e) => {
                error!("cycle {seq}: retrieving {} states failed: {e}", self.config.source);

                let flights = rank( &sample_flights());
                self.complete_cycle( seq, PollState::ErrorFallback, UNAVAILABLE_STATUS, true, SAMPLE_DATA_LABEL, &flights)
            }
        }
    }

    fn begin_cycle (&self)->u64 {
        let seq = self.next_seq.fetch_add( 1, Ordering::SeqCst) + 1;
        debug!("cycle {seq}: loading");

        self.write_if_current( seq, PollState::Loading, |display| {
            display.set_status( LOADING_STATUS, false);
            display.set_timestamp( UPDATING_LABEL);
        });
        seq
    }

    fn complete_cycle (&self, seq: u64, state: PollState, status: &str, is_error: bool, label: &str, flights: &[FlightRecord])->PollState {
        let written = self.write_if_current( seq, state, |display| {
            display.set_status( status, is_error);
            display.set_timestamp( label);
            display.render( flights);
        });

        if !written {
            warn!("cycle {seq}: dropped stale {state:?} result");
        }
        state
    }

    // check and write under the same lock so that a stale cycle can't interleave with a newer one
    fn write_if_current<F> (&self, seq: u64, state: PollState, write: F)->bool where F: FnOnce(&D) {
        let mut guard = self.lock_guard();
        if seq < guard.last_seq {
            return false
        }

        guard.last_seq = seq;
        guard.state = state;
        write( self.display.as_ref());
        true
    }

    fn lock_guard (&self)->MutexGuard<'_,CycleGuard> {
        // a panicking display can't leave the guard in an inconsistent state
        self.guard.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
    }
}

impl<C,D> PollingController<C,D> where C: StateConnector + 'static, D: ApproachDisplay + 'static {

    /// run a cycle in its own task
    pub fn trigger (&self)->JoinHandle<PollState> {
        let ctrl = self.clone();
        tokio::spawn( async move { ctrl.poll_cycle().await })
    }

    /// start the trigger loop, which runs the first cycle immediately and then one per configured
    /// `update_interval`. Use the returned handle for manual refreshes and to stop polling
    pub fn start (&self)->PollerHandle {
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>( MAX_PENDING_REFRESH);
        let ctrl = self.clone();

        let mut period = self.config.update_interval;
        if period < MIN_UPDATE_INTERVAL {
            warn!("update interval {period:?} too short, using {MIN_UPDATE_INTERVAL:?}");
            period = MIN_UPDATE_INTERVAL;
        }

        let task = tokio::spawn( async move {
            let mut timer = interval( period);
            timer.set_missed_tick_behavior( MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        ctrl.trigger();
                    }
                    cmd = refresh_rx.recv() => match cmd {
                        Some(_) => {
                            debug!("manual refresh");
                            ctrl.trigger();
                        }
                        None => break // all handles dropped
                    }
                }
            }
        });

        PollerHandle { refresh_tx, task: Some( task.abort_handle()) }
    }
}

/// control handle for a running trigger loop
pub struct PollerHandle {
    refresh_tx: mpsc::Sender<()>,
    task: Option<AbortHandle>,
}

impl PollerHandle {
    /// request an immediate cycle. Returns false if polling was terminated or too many refresh
    /// requests are pending
    pub fn refresh (&self)->bool {
        self.task.is_some() && self.refresh_tx.try_send(()).is_ok()
    }

    pub fn is_running (&self)->bool {
        self.task.as_ref().is_some_and( |ah| !ah.is_finished())
    }

    /// stop the trigger loop. Cycles that are already running still complete
    pub fn terminate (&mut self) {
        if let Some(ah) = &self.task {
            ah.abort();
            self.task = None;
        }
    }
}
