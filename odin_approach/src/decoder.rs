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

//! decoding of OpenSky state vectors into [`FlightRecord`]s.
//! The feed delivers each aircraft state as a JSON array with fixed field positions
//! (see https://openskynetwork.github.io/opensky-api/rest.html#all-state-vectors). Positions
//! are only used in here, everything downstream works on typed records.

use serde_json::Value;
use crate::{FlightRecord, ReferencePoint, UNKNOWN_CALLSIGN, geo};

/// one loosely typed state vector as we get it from the feed
pub type RawStateVector = Vec<Value>;

// the state vector fields we use
pub const ICAO24: usize = 0;
pub const CALLSIGN: usize = 1;
pub const LONGITUDE: usize = 5;
pub const LATITUDE: usize = 6;
pub const BARO_ALTITUDE: usize = 7;
pub const ON_GROUND: usize = 8;
pub const VELOCITY: usize = 9;
pub const TRUE_TRACK: usize = 10;

/// turn a raw state vector into a [`FlightRecord`], or None if it has no usable position.
/// Missing altitude is treated as 0m, missing velocity is kept as None and a missing track is
/// passed on as NaN (it is up to the filter to reject it)
pub fn decode (sv: &[Value], reference: &ReferencePoint)->Option<FlightRecord> {
    let lat = finite_at( sv, LATITUDE)?;
    let lon = finite_at( sv, LONGITUDE)?;

    let callsign = callsign_at( sv, CALLSIGN);
    let altitude_ft = geo::meters_to_feet( finite_at( sv, BARO_ALTITUDE).unwrap_or(0.0));
    let groundspeed_kn = finite_at( sv, VELOCITY).map( geo::ms_to_knots);
    let track_deg = number_at( sv, TRUE_TRACK).unwrap_or( f64::NAN);
    let on_ground = sv.get( ON_GROUND).is_some_and( is_truthy);

    let dist_m = geo::distance_meters( reference.lat, reference.lon, lat, lon);
    let distance_nm = geo::meters_to_nautical_miles( dist_m);

    Some( FlightRecord { callsign, altitude_ft, groundspeed_kn, track_deg, distance_nm, on_ground } )
}

/// the icao24 transponder address, which we only use for diagnostics
pub fn icao24 (sv: &[Value])->Option<&str> {
    sv.get( ICAO24).and_then( Value::as_str)
}

fn number_at (sv: &[Value], idx: usize)->Option<f64> {
    sv.get( idx).and_then( Value::as_f64)
}

fn finite_at (sv: &[Value], idx: usize)->Option<f64> {
    number_at( sv, idx).filter( |v| v.is_finite())
}

/// the feed should send a bool, but any other non-empty/non-zero value also counts as set
fn is_truthy (v: &Value)->bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and( |x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true
    }
}

// OpenSky pads callsigns to 8 chars
fn callsign_at (sv: &[Value], idx: usize)->String {
    match sv.get( idx).and_then( Value::as_str).map( str::trim) {
        Some(cs) if !cs.is_empty() => cs.to_string(),
        _ => UNKNOWN_CALLSIGN.to_string()
    }
}
