//! Data Mapper: host tables → normalized display records.
//!
//! The mapper resolves which column carries which semantic role, coerces
//! cells to display strings, formats dates, truncates event labels, and
//! resolves category labels through the color/symbol encoding scales. It
//! never fails on missing optional data.

pub mod datetime;
pub mod encoding;
pub mod mapper;
pub mod roles;
pub mod text;

pub use datetime::{INVALID_DATE_DISPLAY, display_date, format_display_date, parse_calendar_date};
pub use encoding::{COLOR_PALETTE, EncodingState};
pub use mapper::map_records;
pub use roles::RoleMap;
pub use text::truncate_event_label;
