//! Small component kit shared by every view, built on `dioxus-primitives`
//! where a primitive exists.

mod alert_dialog;
pub use alert_dialog::ConfirmDialog;

mod button;
pub use button::{Button, ButtonVariant};

mod dropdown_menu;
pub use dropdown_menu::{DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger};

mod input;
pub use input::{FieldMessage, Input, Label};
