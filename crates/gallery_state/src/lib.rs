//! View-state model and address-bar synchronization for the icon gallery.
//!
//! The crate owns the seven user-adjustable gallery fields, the rules for reading them from and
//! writing them back to the page address, and the latest-request-wins bookkeeping used by the
//! deferred search pass. Browser wiring lives in `gallery_host_web`; this crate only depends on
//! the [`QueryParamStore`] contract so every rule is testable with [`MemoryQueryStore`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod controller;
pub mod location;
pub mod search;
pub mod store;
pub mod view_state;

pub use controller::{AddressSync, StateChange, StateObserver, ViewStateController};
pub use location::{read_param, with_param};
pub use search::{DeferredResults, SearchScheduler, SearchTicket};
pub use store::{MemoryQueryStore, QueryParamStore, StoreError, DEFAULT_MEMORY_HREF};
pub use view_state::{
    ControlRange, ParseFieldError, StrokeLinecap, StrokeLinejoin, ViewField, ViewState,
    SIZE_RANGE, STROKE_WIDTH_RANGE,
};
