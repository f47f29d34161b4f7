pub mod activity_tabs;
pub mod dashboard;
pub mod data_table;
pub mod financial_chart;
pub mod header;
pub mod location_map;
pub mod location_table;
pub mod overview_cards;
pub mod progress_chart;
pub mod project_selector;
pub mod status_screens;
pub mod theme;
pub mod widgets;
