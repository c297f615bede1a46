//! HTTP client for the dogechain.info `q/` interface.
//!
//! Implements [`DogechainApi`](super::DogechainApi) with `reqwest`: one GET
//! per call against `host + api_path + endpoint`, returning the text body or
//! its JSON decoding.

mod client;
mod connection;

pub use client::HttpApiClient;
