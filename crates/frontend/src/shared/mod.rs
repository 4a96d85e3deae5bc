pub mod format;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
