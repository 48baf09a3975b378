// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer tests split into logical modules.

#[macro_use]
mod macros;

mod basic;
mod errors;
mod properties;
mod quoting;
