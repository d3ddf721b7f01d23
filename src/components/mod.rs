//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard sections and dialogs. They read shared state
//! through props or Leptos context and reach the backend only through the
//! [`ClientHandle`](crate::app::ClientHandle).

pub mod api_key_list;
pub mod code_viewer_modal;
pub mod create_key_dialog;
pub mod generate_panel;
pub mod notification_area;
pub mod usage_history;
