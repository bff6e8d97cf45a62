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

//! great circle distance and the unit conversions we need to turn feed values (meters, m/s) into
//! the aviation units we report (feet, knots, nautical miles).
//! All functions are pure. Callers have to make sure lat/lon inputs are finite degrees.

use uom::si::{f64::Length, length::{meter,nautical_mile}};

/// mean earth radius in meters
pub const MEAN_EARTH_RADIUS: f64 = 6371000.0;

pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
pub const FEET_PER_METER: f64 = 3.28084;
pub const KNOTS_PER_METER_PER_SECOND: f64 = 1.94384;

/// haversine distance in meters between two lat/lon positions given in degrees.
/// Note that we use absolute coordinate deltas, which makes the result bitwise symmetric
/// (distance(a,b) == distance(b,a)) and exactly 0.0 for identical points
pub fn distance_meters (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->f64 {
    let d_lat = (lat2 - lat1).abs().to_radians();
    let d_lon = (lon2 - lon1).abs().to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
          + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2( (1.0 - a).sqrt());

    MEAN_EARTH_RADIUS * c
}

/// uom variant of [`distance_meters`]
pub fn distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64)->Length {
    Length::new::<meter>( distance_meters( lat1, lon1, lat2, lon2))
}

#[inline] pub fn meters_to_nautical_miles (m: f64)->f64 { m / METERS_PER_NAUTICAL_MILE }
#[inline] pub fn meters_to_feet (m: f64)->f64 { m * FEET_PER_METER }
#[inline] pub fn ms_to_knots (v: f64)->f64 { v * KNOTS_PER_METER_PER_SECOND }

#[inline] pub fn nautical_miles (len: Length)->f64 { len.get::<nautical_mile>() }
