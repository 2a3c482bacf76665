pub mod charts;
pub mod nav;
pub mod popup;
pub mod status;
pub mod tables;
