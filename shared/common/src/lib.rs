pub use boolinator::Boolinator;
pub use itertools::Itertools;
pub use logging::{self, prelude::*, slog_value_display};

pub use thiserror::Error;

pub type BoxedResult<T> = Result<T, Box<dyn std::error::Error>>;
