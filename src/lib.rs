#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod builder;
pub mod config;
pub mod content;
pub mod filter;
pub mod i18n;
pub mod locale;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod routing;

pub use builder::{BuildResult, SiteArtifacts, SiteBuilder, SiteManifest};
pub use config::SiteConfig;
pub use filter::{FilterState, ProjectCard, ProjectFilter};
pub use locale::Locale;
pub use navigation::{HeaderState, LanguageSwitcherState, SwapEvents};
pub use routing::{localized_path, strip_locale_prefix};
