pub mod confirm_modal;
pub mod entity_list;
pub mod feedback;
pub mod layout;
