pub mod card;
pub mod field;
pub mod hints;
pub mod outing_header;
