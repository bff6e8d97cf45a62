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

use odin_approach::{FlightRecord, filter::*};

fn flight (altitude_ft: f64, distance_nm: f64, track_deg: f64, on_ground: bool)->FlightRecord {
    FlightRecord { callsign: "ASA421".to_string(), altitude_ft, groundspeed_kn: Some(160.0), track_deg, distance_nm, on_ground }
}

#[test]
fn test_typical_candidate() {
    let policy = FilterPolicy::default();
    assert!( policy.accepts( &flight( 5200.0, 7.4, 268.0, false)));
    assert!( is_final_approach_candidate( Some(&flight( 5200.0, 7.4, 268.0, false)), &policy));
}

#[test]
fn test_inclusive_bounds() {
    let policy = FilterPolicy::default();

    assert!( policy.accepts( &flight( 10000.0, 20.0, 240.0, false)));
    assert!( policy.accepts( &flight( 10000.0, 20.0, 300.0, false)));

    assert!( !policy.accepts( &flight( 10000.01, 20.0, 270.0, false)));
    assert!( !policy.accepts( &flight( 10000.0, 20.01, 270.0, false)));
    assert!( !policy.accepts( &flight( 5000.0, 10.0, 239.99, false)));
    assert!( !policy.accepts( &flight( 5000.0, 10.0, 300.01, false)));
}

#[test]
fn test_on_ground_never_qualifies() {
    let policy = FilterPolicy::default();
    for f in [ flight( 0.0, 0.1, 270.0, true), flight( 5200.0, 7.4, 268.0, true), flight( 10000.0, 20.0, 240.0, true) ] {
        assert!( !policy.accepts( &f));
    }
}

#[test]
fn test_non_finite_track() {
    let policy = FilterPolicy::default();
    for trk in [ f64::NAN, f64::INFINITY, f64::NEG_INFINITY ] {
        assert!( !policy.accepts( &flight( 5200.0, 7.4, trk, false)));
        assert!( !policy.is_within_track( trk));
    }
}

#[test]
fn test_absent_flight() {
    assert!( !is_final_approach_candidate( None, &FilterPolicy::default()));
}

#[test]
fn test_custom_policy() {
    // runway 09 arrivals
    let policy = FilterPolicy { max_altitude_ft: 6000.0, min_track_deg: 60.0, max_track_deg: 120.0, max_distance_nm: 12.0 };
    assert!( policy.accepts( &flight( 3000.0, 6.0, 92.0, false)));
    assert!( !policy.accepts( &flight( 3000.0, 6.0, 268.0, false)));
    assert!( !policy.accepts( &flight( 7000.0, 6.0, 92.0, false)));
}
