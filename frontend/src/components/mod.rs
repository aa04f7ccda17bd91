pub mod booking_matrix;
pub mod booking_modal;
pub mod filter_panel;
pub mod header;
