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

//! the output side of the poller: where ranked flights, status messages and timestamps go.
//! [`ConsoleDisplay`] renders to the terminal, tests use their own recording implementations

use std::{io::{self,Write}, sync::Mutex};
use tracing::warn;
use crate::FlightRecord;

pub const NO_INBOUND_AIRCRAFT: &str = "No inbound aircraft detected.";
pub const MISSING_VALUE: &str = "--";

/// the sinks of a poll cycle. These are "last write wins" - implementations should not make any
/// assumptions about call order across cycles
pub trait ApproachDisplay: Send + Sync {
    /// show the ranked flights. Implementations have to show an explicit "no inbound aircraft"
    /// indicator if `flights` is empty
    fn render (&self, flights: &[FlightRecord]);

    fn set_status (&self, message: &str, is_error: bool);

    fn set_timestamp (&self, label: &str);
}

/* #region formatting *************************************************************************************/

/// rounded value with unit, or "--" if there is no finite value. Values that round to zero are
/// shown as "0", not "-0"
pub fn format_number (value: Option<f64>, unit: &str)->String {
    match value {
        Some(v) if v.is_finite() => format!("{} {}", v.round() + 0.0, unit),
        _ => MISSING_VALUE.to_string()
    }
}

pub fn format_distance (distance_nm: f64)->String {
    format!("{:.1} nm", distance_nm)
}

/// the table cells for one flight: callsign, altitude, groundspeed, track, distance
pub fn format_row (flight: &FlightRecord)->[String;5] {
    [
        flight.callsign.clone(),
        format_number( Some(flight.altitude_ft), "ft"),
        format_number( flight.groundspeed_kn, "kt"),
        format_number( Some(flight.track_deg), "°"),
        format_distance( flight.distance_nm)
    ]
}

/// the table lines we render, including the placeholder line for empty results
pub fn format_table (flights: &[FlightRecord])->Vec<String> {
    if flights.is_empty() {
        return vec![ NO_INBOUND_AIRCRAFT.to_string() ]
    }

    let mut lines = Vec::with_capacity( flights.len() + 1);
    lines.push( format!("{:<10} {:>10} {:>8} {:>6} {:>9}", "Callsign", "Altitude", "Speed", "Track", "Distance"));
    for flight in flights {
        let [cs,alt,gs,trk,dist] = format_row( flight);
        lines.push( format!("{:<10} {:>10} {:>8} {:>6} {:>9}", cs, alt, gs, trk, dist));
    }
    lines
}

/* #endregion formatting */

/// terminal display. Error status messages are highlighted if `use_color` is set.
/// Write errors are logged but never propagated into the poll cycle
pub struct ConsoleDisplay {
    use_color: bool,
    out: Mutex<Box<dyn Write + Send>>
}

impl ConsoleDisplay {
    pub fn new (use_color: bool)->Self {
        Self::with_output( use_color, Box::new( io::stdout()))
    }

    pub fn with_output (use_color: bool, out: Box<dyn Write + Send>)->Self {
        ConsoleDisplay { use_color, out: Mutex::new(out) }
    }

    fn write_lines<I,S> (&self, lines: I) where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner()
        };

        let res: io::Result<()> = lines.into_iter()
            .try_for_each( |line| writeln!( out, "{}", line.as_ref()))
            .and_then( |_| out.flush());

        if let Err(e) = res {
            warn!("display output failed: {e}");
        }
    }
}

impl ApproachDisplay for ConsoleDisplay {
    fn render (&self, flights: &[FlightRecord]) {
        let mut lines = format_table( flights);
        lines.push( String::new());
        self.write_lines( lines);
    }

    fn set_status (&self, message: &str, is_error: bool) {
        let line = if is_error && self.use_color {
            format!("\x1b[1;31m[{message}]\x1b[0m")
        } else if is_error {
            format!("[!! {message}]")
        } else {
            format!("[{message}]")
        };
        self.write_lines( [line]);
    }

    fn set_timestamp (&self, label: &str) {
        self.write_lines( [label]);
    }
}
