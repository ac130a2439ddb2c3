#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ns_lookup as lookup;
pub use ns_utils as utils;
