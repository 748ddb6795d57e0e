#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod highlight;
pub mod preference;
pub mod scheme;
pub mod sort_sync;
pub mod team;
