#![allow(dead_code)]

pub mod env;
pub mod mounter;
pub mod testroot;
