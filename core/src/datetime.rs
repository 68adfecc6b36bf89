// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod loose;
mod resolver;

pub use loose::LooseDateTime;
pub use resolver::{DateOrder, TemporalResolver};
