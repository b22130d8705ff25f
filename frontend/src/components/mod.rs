pub mod achievements_carousel;
pub mod common_modal;
pub mod common_toast;
pub mod footer;
pub mod hero;
pub mod match_section;
pub mod media_section;
pub mod nav;
pub mod player_section;
pub mod registration_form;
pub mod stats_bar;
