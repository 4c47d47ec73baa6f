pub mod favorite_button;
pub mod footer;
pub mod header;
pub mod layout;
pub mod logo;
pub mod menu;
pub mod search_bar;
pub mod selectable_list;
pub mod speaker_card;
pub mod speaker_image;
pub mod speaker_list;
pub mod util;
