pub(crate) mod config;
pub(crate) mod languages;
pub(crate) mod search;
