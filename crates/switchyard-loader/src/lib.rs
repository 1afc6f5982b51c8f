// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic component loading.
//!
//! [`DynamicLoader`] runs the load sequence for a component bundle:
//! register with the discovery registry, hand the descriptor to the
//! integration manager, select the best match for the bundle's type and
//! version, and integrate it. Every failure along the way surfaces as
//! [`SwitchyardError::ComponentLoading`].

pub mod loader;

pub use loader::DynamicLoader;

#[doc(no_inline)]
pub use switchyard_core::SwitchyardError;
