pub mod normalize;
pub mod quote;
