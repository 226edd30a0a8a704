mod modal_overlay;
pub use modal_overlay::{ModalOverlay, ModalSize};

mod home;
pub use home::HomeView;
