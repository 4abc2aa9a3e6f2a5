pub use feature::*;
pub use feature_icon::*;

mod feature;
mod feature_icon;
