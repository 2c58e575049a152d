//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Only form bookkeeping lives here; theme state is process-wide and owned by
//! `util::theme`.

pub mod login;
