//! Proc macros for waypost.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template for a
//! configuration section struct.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site.info")]
//! /// Site metadata configuration.
//! pub struct SiteInfoConfig {
//!     /// Site title displayed in browser tab.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.info.title")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip entirely (no FIELDS entry, no template line)
//! - `#[config(hidden)]` - Keep in FIELDS but hide from template output
//! - `#[config(sub)]` - Nested Config struct, templated recursively
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value shown in template
//! - `#[config(inline_doc = "x")]` - Trailing comment on the template line
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `FooterConfig` → `footer`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
