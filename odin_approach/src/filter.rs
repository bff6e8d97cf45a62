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

use serde::{Deserialize,Serialize};
use crate::FlightRecord;

/// the thresholds that define a final approach candidate. All bounds are inclusive
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FilterPolicy {
    pub max_altitude_ft: f64,
    pub min_track_deg: f64,
    pub max_track_deg: f64,
    pub max_distance_nm: f64,
}

impl Default for FilterPolicy {
    fn default()->Self {
        FilterPolicy { max_altitude_ft: 10000.0, min_track_deg: 240.0, max_track_deg: 300.0, max_distance_nm: 20.0 }
    }
}

impl FilterPolicy {
    /// airborne, below the ceiling, within range and on an inbound track
    pub fn accepts (&self, flight: &FlightRecord)->bool {
        !flight.on_ground
            && flight.altitude_ft <= self.max_altitude_ft
            && flight.distance_nm <= self.max_distance_nm
            && self.is_within_track( flight.track_deg)
    }

    /// note this rejects non-finite tracks
    pub fn is_within_track (&self, track_deg: f64)->bool {
        track_deg.is_finite() && track_deg >= self.min_track_deg && track_deg <= self.max_track_deg
    }
}

/// filter predicate for (optional) decoder output
pub fn is_final_approach_candidate (flight: Option<&FlightRecord>, policy: &FilterPolicy)->bool {
    flight.is_some_and( |f| policy.accepts(f))
}
