//! # Crypto Blog Shared
//!
//! Wire types exchanged between the blog server and its HTTP clients.

pub mod dto;
pub mod response;

pub use dto::{AddPostRequest, PostDto};
pub use response::{ApiResponse, ErrorResponse};
