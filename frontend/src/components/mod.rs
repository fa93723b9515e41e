pub mod form_field;
pub mod modal;
pub mod search_bar;
pub mod summary_cards;
pub mod tab_bar;
pub mod toast;
pub mod topbar;
