//! Error system for the todo API
//!
//! - [`ErrorCode`]: Standardized error codes carried on the wire
//! - [`AppError`]: Rich error type with code, message and details
//! - [`ApiResponse`]: Error body format
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! let err = AppError::validation("Owner is required")
//!     .with_detail("field", "owner");
//!
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 2);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
