// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Read-only introspection of step trees: the indented tree view
//! ([`crate::engine::Node::tree`]) and the one-line expression form
//! (`Display` for [`crate::engine::Node`]).

pub mod expression;
pub mod render;

pub use render::RenderOptions;
