//! Remote option selector
//!
//! Single-choice control over a remotely loaded, sorted collection with an
//! explicit "all" entry.
//!
//! ```rust,ignore
//! use crate::shared::remote_select::RemoteOptionSelector;
//!
//! let (venue, set_venue) = signal(Selection::All);
//! view! {
//!     <RemoteOptionSelector
//!         collection="venue"
//!         selected=venue
//!         on_change=Callback::new(move |s| set_venue.set(s))
//!     />
//! }
//! ```

pub mod component;
pub mod loader;
pub mod state;

pub use component::RemoteOptionSelector;
pub use loader::{load_collection, LifetimeToken, LoadOutcome};
pub use state::{Collection, LoadState, LoadStatus, SelectorModel};
