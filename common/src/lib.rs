#![no_std]

pub mod credit {
    pub mod interface;
    pub mod types;
}
