//! Security tests module

pub mod headers_test;
