//! Delivery of narrative segments to the avatar front-end.
//!
//! The front-end exposes `POST /api/receive-text` taking
//! `{"text": ..., "imageUrl"?: ..., "backgroundImage"?: ...}`.
//! [`AvatarClient`] posts there and reports a plain success flag.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod payload;

pub use client::AvatarClient;
pub use payload::DeliveryPayload;
