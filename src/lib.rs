pub mod array;
pub mod config;
pub mod date;
pub mod expand;
pub mod hash;
pub mod methods;
pub mod random;
pub mod string;
mod error;

pub use array::{array_pull_value, array_pull_values, array_without, is_assoc_array};
pub use config::{Config, ConfigError, ExpandSettings};
pub use date::carbonize;
pub use error::Error;
pub use expand::{array_expand, array_flatten, Expander};
pub use hash::{array_hash, object_hash};
pub use methods::{has_public_method, PublicMethods};
pub use random::{rand_bool, rand_bool_with};
pub use string::str_wrap;
