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
#![allow(unused)]

//! final approach monitor for a single airport.
//! We poll an OpenSky state vector feed for a configured bounding box, decode the positional state
//! vectors into [`FlightRecord`]s, keep the ones that look like inbound final approach traffic and
//! publish them ranked by distance to the airport reference point. If the feed is unavailable we
//! publish a static sample data set instead.

use std::{collections::HashMap, env, fs, path::{Path,PathBuf}, time::Duration};
use serde::{Deserialize,Serialize};
use lazy_static::lazy_static;
use uom::si::f64::Length;

pub mod errors;
use errors::{OdinApproachError,Result};

pub mod geo;

pub mod decoder;
use decoder::{RawStateVector,decode};

pub mod filter;
use filter::FilterPolicy;

pub mod ranker;
use ranker::rank;

pub mod opensky;
pub mod display;
pub mod poller;

/* #region data model *************************************************************************************/

/// callsign we use if the feed does not provide one
pub const UNKNOWN_CALLSIGN: &str = "Unknown";

/// a single (decoded) aircraft state. These are created from scratch for each poll cycle and
/// dropped once they are rendered
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FlightRecord {
    pub callsign: String,
    pub altitude_ft: f64,
    pub groundspeed_kn: Option<f64>, // None if the feed had no (finite) velocity - this is not the same as 0kn
    pub track_deg: f64,              // as reported, NaN if missing
    pub distance_nm: f64,            // to the configured reference point
    pub on_ground: bool,
}

/// the airport we monitor
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    pub lat: f64, // degrees
    pub lon: f64, // degrees
}

impl ReferencePoint {
    pub fn distance_to (&self, lat: f64, lon: f64)->Length {
        geo::distance( self.lat, self.lon, lat, lon)
    }
}

/// the geographic region we request from the feed (degrees)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct BoundingBox {
    pub lamin: f64,
    pub lamax: f64,
    pub lomin: f64,
    pub lomax: f64,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ApproachConfig {
    pub source: String,
    pub base_uri: String,
    pub bbox: BoundingBox,
    pub reference: ReferencePoint,
    pub policy: FilterPolicy,
    pub update_interval: Duration,
    #[serde(default)]
    pub request_timeout: Option<Duration>, // enforced by the live connector, not by the poller
}

impl ApproachConfig {
    /// the full request URL for our bounding box
    pub fn states_url (&self)->String {
        let bb = &self.bbox;
        format!("{}?lamin={}&lamax={}&lomin={}&lomax={}", self.base_uri, bb.lamin, bb.lamax, bb.lomin, bb.lomax)
    }
}

impl Default for ApproachConfig {
    fn default()->Self {
        ApproachConfig {
            source: "opensky".to_string(),
            base_uri: "https://opensky-network.org/api/states/all".to_string(),
            bbox: BoundingBox { lamin: 32.55, lamax: 32.9, lomin: -117.6, lomax: -116.9 },
            reference: ReferencePoint { name: "KSAN".to_string(), lat: 32.7336, lon: -117.1897 },
            policy: FilterPolicy::default(),
            update_interval: Duration::from_secs(20),
            request_timeout: None,
        }
    }
}

/* #endregion data model */

/* #region pipeline ***************************************************************************************/

/// the core processing step of each poll cycle: decode all raw state vectors, drop the ones we can't
/// decode or that are not final approach candidates, and rank the rest by distance
pub fn process_states (states: &[RawStateVector], reference: &ReferencePoint, policy: &FilterPolicy)->Vec<FlightRecord> {
    let candidates: Vec<FlightRecord> = states.iter()
        .filter_map( |sv| decode( sv, reference))
        .filter( |flight| policy.accepts( flight))
        .collect();

    rank( &candidates)
}

/* #endregion pipeline */

/* #region config loading *********************************************************************************/

const CONFIGS: &str = "configs";
const RESOURCE_CRATE: &str = env!("CARGO_PKG_NAME");

lazy_static! {
    // the configs we can always fall back to, even if there is no config dir at runtime
    static ref EMBEDDED_CONFIGS: HashMap<&'static str, &'static str> = HashMap::from([
        ("san.ron", include_str!("../configs/san.ron")),
    ]);
}

/// load a named config, looking (in this order) into `$ODIN_HOME/configs/odin_approach/`, `~/.odin/configs/odin_approach/`,
/// the `configs/` dir of this crate and finally our embedded configs
pub fn load_config<C> (filename: &str)->Result<C> where C: for<'a> Deserialize<'a> {
    if let Some(path) = find_config_file( filename) {
        return load_config_path( &path)
    }

    if let Some(src) = EMBEDDED_CONFIGS.get( filename) {
        return Ok( ron::de::from_str( src)? )
    }

    Err( OdinApproachError::ConfigNotFoundError( filename.to_string()) )
}

/// load config from explicit path
pub fn load_config_path<C,P> (path: P)->Result<C> where C: for<'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

fn find_config_file (filename: &str)->Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::with_capacity(3);

    if let Ok(odin_home) = env::var("ODIN_HOME") {
        candidates.push( Path::new( &odin_home).join( CONFIGS).join( RESOURCE_CRATE).join( filename));
    }
    if let Ok(usr_home) = env::var("HOME") {
        candidates.push( Path::new( &usr_home).join(".odin").join( CONFIGS).join( RESOURCE_CRATE).join( filename));
    }
    candidates.push( Path::new( env!("CARGO_MANIFEST_DIR")).join( CONFIGS).join( filename));

    candidates.into_iter().find( |p| p.is_file())
}

/* #endregion config loading */
