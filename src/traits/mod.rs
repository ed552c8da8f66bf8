pub mod algorithm;

pub use algorithm::Algorithm;
