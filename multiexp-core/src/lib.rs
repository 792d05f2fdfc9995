#![allow(clippy::too_long_first_doc_paragraph)]

pub mod field;
pub mod group;
pub mod msm;
pub mod utils;
