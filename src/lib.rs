//! Core library for the license-report command line application.
//!
//! The crate fetches driver's-license records from the license service and
//! exports filtered or aggregated views of them as Excel workbooks. IO
//! adapters live under [`authority::report::io`], record representations in
//! [`authority::report::model`], the filters and aggregations in
//! [`authority::report::transform`], report orchestration in
//! [`authority::report::operation`], and the interactive prompt loop in
//! [`authority::report::menu`].

pub mod authority;

pub use authority::report::{ReportError, Result, error, io, menu, model, operation, transform};
