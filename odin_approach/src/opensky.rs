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

//! the OpenSky transport. The poller only sees the [`StateConnector`] trait so that we can
//! substitute the live http connector in tests and diagnostics

use std::sync::Arc;
use serde::Deserialize;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::{ACCEPT,HeaderValue}};
use tracing::debug;

use crate::{ApproachConfig, decoder::RawStateVector, errors::{OdinApproachError,Result,op_failed}};

/// the json body of a `/states/all` response. OpenSky sends `"states": null` if there is no
/// aircraft in the requested region
#[derive(Deserialize,Debug,Default)]
pub struct StatesResponse {
    #[serde(default)]
    pub time: Option<i64>,

    #[serde(default)]
    pub states: Option<Vec<RawStateVector>>,
}

impl StatesResponse {
    pub fn states (&self)->&[RawStateVector] {
        self.states.as_deref().unwrap_or(&[])
    }
}

/// the capability to retrieve one snapshot of state vectors
#[async_trait]
pub trait StateConnector: Send + Sync {
    async fn fetch_states (&self)->Result<StatesResponse>;
}

/// validate the response status and decode the body. Anything but a 2xx status is an error
pub fn parse_states_response (status: StatusCode, body: &[u8])->Result<StatesResponse> {
    if !status.is_success() {
        return Err( OdinApproachError::HttpStatusError( status.as_u16()) )
    }
    Ok( serde_json::from_slice( body)? )
}

/// an http based StateConnector that requests the configured bounding box from OpenSky
pub struct LiveStateConnector {
    config: Arc<ApproachConfig>,
    client: Client,
    url: String,
}

impl LiveStateConnector {
    pub fn new (config: Arc<ApproachConfig>)->Result<Self> {
        if config.base_uri.is_empty() {
            return Err( op_failed!("no base_uri configured for source '{}'", config.source))
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout( timeout);
        }
        let client = builder.build()?;
        let url = config.states_url();

        Ok( LiveStateConnector { config, client, url } )
    }

    pub fn url (&self)->&str { self.url.as_str() }
    pub fn source (&self)->&str { self.config.source.as_str() }
}

#[async_trait]
impl StateConnector for LiveStateConnector {
    async fn fetch_states (&self)->Result<StatesResponse> {
        debug!("requesting {}", self.url);
        let response = self.client.get( &self.url)
            .header( ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() { // don't bother reading the body
            return Err( OdinApproachError::HttpStatusError( status.as_u16()) )
        }

        let bytes = response.bytes().await?;
        parse_states_response( status, &bytes)
    }
}
