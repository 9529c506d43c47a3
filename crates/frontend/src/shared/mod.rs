pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod form_values;
pub mod icons;
pub mod nav;
pub mod page_frame;
pub mod toast;
