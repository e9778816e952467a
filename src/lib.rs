//! xyxyx tokenizer: turn multi-line text into a fixed-width token card and
//! deploy it through the xyxyx API.
//!
//! Text is segmented into at most 30 lines of 45 characters, held in a
//! [`preview::Preview`], rendered as an SVG card, and submitted as one of
//! three contract variants by a [`deploy::DeploymentController`].
//!
//! # Quick start
//!
//! ```no_run
//! use xyxyx_tokenizer::api::ApiClient;
//! use xyxyx_tokenizer::config::load_config;
//! use xyxyx_tokenizer::deploy::DeploymentController;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = ApiClient::new(&config.api);
//! let text = config.text.clone().unwrap_or_default();
//! let mut controller = DeploymentController::new(config.token, &text, config.deploy.allowed);
//! let state = controller.deploy(&client).await;
//! println!("{}", state.label());
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod contract;
pub mod deploy;
pub mod error;
pub mod preview;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod text;
pub mod ui;
