pub mod api_utils;
pub mod on_drop;
