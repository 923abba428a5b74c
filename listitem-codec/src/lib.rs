//! Bidirectional codec between typed list-item records and the store's
//! field-based wire formats.
//!
//! Two pipelines share one schema:
//!
//! - **Read**: raw record → [`extract`] / [`safe_extract`] → [`TypedRecord`](listitem_model::TypedRecord)
//! - **Write**: typed values → [`ListItemUpdater::set_field`] (validates and
//!   formats via [`format_value_by_type`]) → either the flat
//!   [`updates_for_validate`](ListItemUpdater::updates_for_validate) batch or
//!   the type-shaped [`direct_updates`](ListItemUpdater::direct_updates)
//!   object built by [`add_direct_update_value`].
//!
//! Each field type owns one conversion strategy covering all three
//! directions; see the `strategy` module.
//!
//! Everything here is synchronous and free of I/O. Fetching records and
//! submitting update batches is the caller's job.

mod direct_update;
mod display;
mod error;
mod extract;
mod fields;
mod format;
mod helper;
mod strategy;
mod updater;

pub use direct_update::{DirectUpdates, add_direct_update_value, add_field_direct_update};
pub use display::display_value;
pub use error::{CodecError, CodecResult};
pub use extract::{SafeExtraction, convert_field_value, defaults, extract, safe_extract};
pub use fields::{MULTI_DELIMITER, TERM_DELIMITER, id_key, shadow_key};
pub use format::format_value_by_type;
pub use helper::ListItemHelper;
pub use updater::{ChangeCheck, ListItemUpdater};
