//! UI chrome descriptors
//!
//! Plain values for the parts of the dashboard around the charts. None of
//! these touch a DOM; a renderer consumes them.
//!
//! - **preferences**: theme and sidebar state, persisted as TOML
//! - **toast**: notification content and styling
//! - **table**: data table options

pub mod error;
pub mod preferences;
pub mod table;
pub mod toast;

pub use error::{PreferencesError, PreferencesResult};
pub use preferences::{Theme, UiPreferences};
pub use table::{Paginate, TableButton, TableLanguage, TableOptions};
pub use toast::{ToastKind, ToastSpec, TOAST_DELAY_MS};
