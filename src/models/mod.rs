pub use feature::*;

mod feature;
