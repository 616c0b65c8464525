pub mod inspect;
pub mod visualize;
