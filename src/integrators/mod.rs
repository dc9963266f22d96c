mod whitted;

pub use whitted::{Params as WhittedParams, Whitted};
