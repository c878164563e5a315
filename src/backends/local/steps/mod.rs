// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod arithmetic;
pub mod constant;
pub mod filter;
pub mod function;
pub mod identity;
pub mod items;
pub mod range;
pub mod text;

pub use arithmetic::*;
pub use constant::*;
pub use filter::*;
pub use function::*;
pub use identity::*;
pub use items::*;
pub use range::*;
pub use text::*;
