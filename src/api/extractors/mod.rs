//! Custom request extractors.

mod path_params;
mod validated_json;

pub use path_params::PathParams;
pub use validated_json::ValidatedJson;
