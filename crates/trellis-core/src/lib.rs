//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for the trellis
//! learning-assistant toolkit. It includes:
//!
//! - **Geometry**: basic geometric types ([`geometry`] module)
//! - **Chart**: the normalized and positioned flowchart model ([`chart`] module)
//! - **Summary**: structured summary sections ([`summary`] module)
//! - **Quiz**: quiz questions, submissions, and grading reports ([`quiz`] module)

pub mod chart;
pub mod geometry;
pub mod quiz;
pub mod summary;
