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

use crate::FlightRecord;

/// return a new, distance ordered (ascending) sequence. Flights with equal distance keep their
/// input order since `sort_by` is stable
pub fn rank (flights: &[FlightRecord])->Vec<FlightRecord> {
    let mut ranked = flights.to_vec();
    ranked.sort_by( |a,b| a.distance_nm.total_cmp( &b.distance_nm));
    ranked
}
