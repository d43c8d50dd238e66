pub mod api_utils;
pub mod option_source;
pub mod remote_select;
