pub mod diagnosis_card;
pub mod header;
pub mod history_panel;
