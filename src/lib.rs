#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod assign;
pub mod roster;
pub mod rules;
pub mod session;
pub mod share;
pub mod shuffle;
pub mod test_util;
