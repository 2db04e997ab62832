// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

/// `check`: parse directive markup and report its fields.
pub mod check;
/// `render`: paginate a JSON context.
pub mod render;
