pub mod slug;
pub mod valid_uuid;
