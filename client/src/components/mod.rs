//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless wrappers except where noted: `PasswordField` owns
//! its visibility toggle and `LoginUserInput` owns the form state. Attributes
//! and listeners given to a field wrapper land on the field's root element.

pub mod app_bar;
pub mod login_button;
pub mod login_user_input;
pub mod text_field;
