//! Frame Integrity Validators
//!
//! ## Overview
//!
//! Full JPEG parsing costs a pass over the entropy-coded data. Embedded
//! pipelines cannot afford that per frame, but most encoder failures still
//! show up at the edges of the output:
//!
//! - **Truncation**: DMA or buffer overrun cuts the frame before `FF D9`
//! - **Stale buffer**: encoder failed and left zeroed or old data at the start
//! - **Empty output**: encoder returned success with a few bytes or none
//!
//! The marker validator checks exactly those edges, in constant time.
//!
//! ## Decision Table
//!
//! | length | leading | trailing | reason |
//! |--------|---------|----------|--------|
//! | < min  | -       | -        | `TooSmall` |
//! | ≥ min  | ok      | ok       | `None` |
//! | ≥ min  | bad     | ok       | `MissingLeadingMarker` |
//! | ≥ min  | ok      | bad      | `MissingTrailingMarker` |
//! | ≥ min  | bad     | bad      | `BothMarkersMissing` |
//!
//! Both marker checks always run so the reason reflects the whole frame,
//! not just the first failed check.
//!
//! ## Usage Example
//!
//! ```rust
//! use frameguard_core::validators::{MarkerValidator, FailureReason};
//! use frameguard_core::Validator;
//!
//! let validator = MarkerValidator::default();
//!
//! let frame = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0xFF, 0xD9];
//! assert!(validator.validate(&frame).valid);
//!
//! let truncated = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
//! let result = validator.validate(&truncated);
//! assert_eq!(result.failure_reason, FailureReason::MissingTrailingMarker);
//! ```

mod markers;
mod result;
mod utils;

pub use markers::{MarkerValidator, validate_frame};
pub use result::{BoundaryBytes, FailureReason, ValidationResult};
