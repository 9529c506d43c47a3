pub mod dynamic_form;
pub mod dynamic_table;
pub mod stat_card;
pub mod ui;
