//! UIコンポーネントモジュール

pub mod auth_gate;
pub mod document_toolbar;
pub mod field;
pub mod status;

pub use auth_gate::{LoginForm, RequireAuth};
pub use document_toolbar::DocumentToolbar;
pub use field::TextField;
pub use status::{ErrorBanner, Loading, Notice};
