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

use serde_json::{json, Value};
use odin_approach::{ReferencePoint, UNKNOWN_CALLSIGN, decoder::*, geo};

fn ksan ()->ReferencePoint {
    ReferencePoint { name: "KSAN".to_string(), lat: 32.7336, lon: -117.1897 }
}

fn state_vector (callsign: Value, lon: Value, lat: Value, alt: Value, on_ground: Value, vel: Value, trk: Value)->RawStateVector {
    match json!([ "a1b2c3", callsign, "United States", 1700000000, 1700000001, lon, lat, alt, on_ground, vel, trk, -3.25, null, 1600.0, "1234", false, 0 ]) {
        Value::Array(sv) => sv,
        _ => unreachable!()
    }
}

#[test]
fn test_complete_vector() {
    let sv = state_vector( json!("ASA421  "), json!(-117.0), json!(32.8), json!(1584.96), json!(false), json!(91.57), json!(268.2));
    let flight = decode( &sv, &ksan()).expect("vector should decode");
    println!("{flight:?}");

    assert_eq!( flight.callsign, "ASA421");
    assert!( (flight.altitude_ft - 1584.96 * 3.28084).abs() < 1e-9);
    assert!( (flight.groundspeed_kn.unwrap() - 91.57 * 1.94384).abs() < 1e-9);
    assert_eq!( flight.track_deg, 268.2);
    assert!( !flight.on_ground);

    let expected_nm = geo::meters_to_nautical_miles( geo::distance_meters( 32.7336, -117.1897, 32.8, -117.0));
    assert_eq!( flight.distance_nm, expected_nm);
    assert_eq!( icao24( &sv), Some("a1b2c3"));
}

#[test]
fn test_missing_position() {
    let r = ksan();
    let no_lat = state_vector( json!("ASA421"), json!(-117.0), Value::Null, json!(1000.0), json!(false), json!(90.0), json!(270.0));
    let no_lon = state_vector( json!("ASA421"), Value::Null, json!(32.8), json!(1000.0), json!(false), json!(90.0), json!(270.0));
    let bad_lat = state_vector( json!("ASA421"), json!(-117.0), json!("32.8"), json!(1000.0), json!(false), json!(90.0), json!(270.0));

    assert!( decode( &no_lat, &r).is_none());
    assert!( decode( &no_lon, &r).is_none());
    assert!( decode( &bad_lat, &r).is_none());

    // truncated vectors don't have a position either
    let truncated: Vec<Value> = vec![ json!("a1b2c3"), json!("ASA421") ];
    assert!( decode( &truncated, &r).is_none());
    assert!( decode( &[], &r).is_none());
}

#[test]
fn test_missing_optional_fields() {
    let sv = state_vector( Value::Null, json!(-117.0), json!(32.8), Value::Null, json!(false), Value::Null, Value::Null);
    let flight = decode( &sv, &ksan()).expect("optional fields should not reject vector");
    println!("{flight:?}");

    assert_eq!( flight.callsign, UNKNOWN_CALLSIGN);
    assert_eq!( flight.altitude_ft, 0.0);
    assert_eq!( flight.groundspeed_kn, None);
    assert!( flight.track_deg.is_nan());
    assert!( flight.distance_nm.is_finite());
}

#[test]
fn test_callsign_normalization() {
    let r = ksan();
    let cs = |v: Value| {
        let sv = state_vector( v, json!(-117.0), json!(32.8), json!(1000.0), json!(false), json!(90.0), json!(270.0));
        decode( &sv, &r).unwrap().callsign
    };

    assert_eq!( cs( json!("  SWA227 ")), "SWA227");
    assert_eq!( cs( json!("        ")), UNKNOWN_CALLSIGN);
    assert_eq!( cs( json!("")), UNKNOWN_CALLSIGN);
    assert_eq!( cs( Value::Null), UNKNOWN_CALLSIGN);
}

#[test]
fn test_zero_velocity_is_not_missing() {
    let sv = state_vector( json!("N123AB"), json!(-117.19), json!(32.73), json!(0.0), json!(true), json!(0.0), json!(90.0));
    let flight = decode( &sv, &ksan()).unwrap();
    assert_eq!( flight.groundspeed_kn, Some(0.0));
    assert!( flight.on_ground);
}

#[test]
fn test_on_ground_flag() {
    let r = ksan();
    let on_ground = |v: Value| {
        let sv = state_vector( json!("N123AB"), json!(-117.0), json!(32.8), json!(300.0), v, json!(60.0), json!(270.0));
        decode( &sv, &r).unwrap().on_ground
    };

    assert!( on_ground( json!(true)));
    assert!( !on_ground( json!(false)));
    assert!( !on_ground( Value::Null));

    // non-bool values
    assert!( on_ground( json!(1)));
    assert!( !on_ground( json!(0)));
    assert!( !on_ground( json!(0.0)));
    assert!( on_ground( json!("true")));
    assert!( !on_ground( json!("")));

    // truncated before the flag
    let truncated: Vec<Value> = state_vector( json!("N123AB"), json!(-117.0), json!(32.8), json!(300.0), json!(true), json!(60.0), json!(270.0))
        .into_iter().take( ON_GROUND).collect();
    assert!( !decode( &truncated, &r).unwrap().on_ground);
}
