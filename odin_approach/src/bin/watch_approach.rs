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
use tokio::{self, io::{AsyncBufReadExt,BufReader}, signal};
use clap::Parser;
use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use odin_approach::{
    load_config, load_config_path, ApproachConfig,
    display::ConsoleDisplay, opensky::LiveStateConnector, poller::PollingController
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show aircraft on final approach, ranked by distance to the airport")]
struct Args {
    /// explicit config file (default is san.ron from the config lookup path)
    #[arg(short,long)]
    config: Option<PathBuf>,

    /// don't highlight error status messages
    #[arg(long)]
    no_color: bool,

    /// run a single poll cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env()) // use RUST_LOG to set max level
        .init();

    let args = Args::parse();

    let config: ApproachConfig = match &args.config {
        Some(path) => load_config_path( path)?,
        None => load_config( "san.ron")?
    };
    let config = Arc::new(config);

    let connector = LiveStateConnector::new( config.clone())?;
    let ctrl = PollingController::new( config.clone(), connector, ConsoleDisplay::new( !args.no_color));

    if args.once {
        ctrl.poll_cycle().await;
        return Ok(())
    }

    let mut poller = ctrl.start();
    println!("monitoring final approach to {}, press <enter> to refresh, ctrl-c to quit", config.reference.name);

    let mut lines = BufReader::new( tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(_)) => {
                    if !poller.refresh() {
                        warn!("manual refresh ignored, too many pending requests");
                    }
                }
                _ => { // stdin closed, keep polling until we get interrupted
                    signal::ctrl_c().await?;
                    break
                }
            },
            _ = signal::ctrl_c() => break
        }
    }

    poller.terminate();
    Ok(())
}
