mod scale;

pub use scale::Scale;
