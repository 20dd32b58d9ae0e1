//! # closetx Core
//!
//! Core types for the closetx duplicate-detection engine.
//!
//! - [`ItemAttributes`] - the attribute record of a wardrobe item
//! - [`Attribute`] - the weighted attributes a score is built from
//! - [`WardrobeItem`] - an attribute record with an [`ItemId`]
//! - [`Error`] - configuration errors
//!
//! ## Example
//!
//! ```rust
//! use closetx_core::{Attribute, ItemAttributes, WardrobeItem};
//!
//! let tee = ItemAttributes::new("top", "t-shirt")
//!     .with(Attribute::Color, "Navy")
//!     .with(Attribute::Neckline, "Crew");
//! let item = WardrobeItem::new("tee-1", tee);
//! assert!(item.attributes.has(Attribute::Color));
//! ```

pub mod error;
pub mod item;

pub use error::{Error, Result};
pub use item::{Attribute, ItemAttributes, ItemId, WardrobeItem};
