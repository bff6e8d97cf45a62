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

use std::{path::PathBuf, sync::Arc};
use tokio;
use clap::Parser;
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use odin_approach::{
    load_config, load_config_path, ApproachConfig, geo::nautical_miles,
    decoder::{decode,icao24}, display::format_row, opensky::{LiveStateConnector,StateConnector}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "retrieve one state snapshot and show the final approach verdict for each aircraft")]
struct Args {
    /// explicit config file (default is san.ron from the config lookup path)
    #[arg(short,long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config: ApproachConfig = match &args.config {
        Some(path) => load_config_path( path)?,
        None => load_config( "san.ron")?
    };
    let config = Arc::new(config);

    let connector = LiveStateConnector::new( config.clone())?;
    println!("GET {}", connector.url());

    let response = connector.fetch_states().await?;
    let states = response.states();
    println!("{} state vectors at {:?}", states.len(), response.time);

    for sv in states {
        let id = icao24( sv).unwrap_or("?");
        match decode( sv, &config.reference) {
            Some(flight) => {
                let verdict = if config.policy.accepts( &flight) { "FINAL" } else { "-" };
                let [cs,alt,gs,trk,dist] = format_row( &flight);
                println!("{id:<7} {cs:<9} {alt:>9} {gs:>7} {trk:>6} {dist:>9}  {verdict}");
            }
            None => println!("{id:<7} no position")
        }
    }

    let r = &config.reference;
    let bb = &config.bbox;
    let d = nautical_miles( r.distance_to( bb.lamax, bb.lomax));
    println!("\n{} to NE bbox corner: {:.1} nm", r.name, d);

    Ok(())
}
