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

use std::time::Duration;
use odin_approach::{ApproachConfig, load_config, load_config_path, filter::FilterPolicy};

#[test]
fn test_load_san_config() {
    let config: ApproachConfig = load_config_path( concat!( env!("CARGO_MANIFEST_DIR"), "/configs/san.ron")).unwrap();
    println!("{config:#?}");

    assert_eq!( config.reference.name, "KSAN");
    assert_eq!( config.reference.lat, 32.7336);
    assert_eq!( config.reference.lon, -117.1897);
    assert_eq!( config.policy, FilterPolicy::default());
    assert_eq!( config.update_interval, Duration::from_secs(20));
    assert_eq!( config.request_timeout, Some( Duration::from_secs(15)));

    assert_eq!( config.states_url(), "https://opensky-network.org/api/states/all?lamin=32.55&lamax=32.9&lomin=-117.6&lomax=-116.9");
    assert_eq!( config.states_url(), ApproachConfig::default().states_url());
}

#[test]
fn test_config_lookup() {
    let config: ApproachConfig = load_config( "san.ron").unwrap();
    assert_eq!( config.reference, ApproachConfig::default().reference);

    assert!( load_config::<ApproachConfig>( "no_such_airport.ron").is_err());
}

#[test]
fn test_inline_config() {
    let src = r#"
        ApproachConfig(
            source: "opensky",
            base_uri: "http://localhost:8080/states",
            bbox: BoundingBox( lamin: 37.4, lamax: 37.8, lomin: -122.6, lomax: -122.0 ),
            reference: ReferencePoint( name: "KSFO", lat: 37.6188, lon: -122.3750 ),
            policy: FilterPolicy( max_altitude_ft: 8000.0, min_track_deg: 270.0, max_track_deg: 300.0, max_distance_nm: 15.0 ),
            update_interval: (secs: 30, nanos: 0),
        )
    "#;
    let config: ApproachConfig = ron::de::from_str( src).unwrap();
    assert_eq!( config.request_timeout, None);
    assert_eq!( config.policy.max_distance_nm, 15.0);
    assert!( config.states_url().starts_with("http://localhost:8080/states?lamin=37.4&"));
}
