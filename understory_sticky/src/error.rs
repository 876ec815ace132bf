// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Error returned when a decoration is built without a required collaborator.
///
/// This is the only error the crate produces. Per-frame conditions such as an
/// empty list or an unresolvable header are not errors: the affected frame
/// simply draws no header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No adapter was supplied to a view-based header decoration.
    #[error("no adapter bound: set an adapter before building the sticky header decoration")]
    MissingAdapter,
    /// No section condition was supplied.
    #[error("no section condition: set a condition before building the sticky header decoration")]
    MissingCondition,
}
