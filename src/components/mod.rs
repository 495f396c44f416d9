pub mod comparison_panel;
pub mod drawing_upload;
pub mod option_select;
pub mod results_display;
pub mod sidebar;
pub mod status_badge;
